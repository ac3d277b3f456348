use super::*;
use crate::error::JsonError;

impl Value {
    /// Look up a key in an object.
    ///
    /// # Errors
    /// `KeyNotFound` if the object lacks the key, `NotAnObject` if this
    /// value is not an object. Scalars and null are not containers, so any
    /// key access on them is a caller error, not missing data.
    pub fn get(&self, key: &str) -> Result<&Value, JsonError> {
        match self {
            Value::Object(entries) => entries.get(key).ok_or_else(|| JsonError::KeyNotFound {
                key: key.to_string(),
            }),
            other => Err(JsonError::NotAnObject { found: other.kind() }),
        }
    }

    pub fn get_mut(&mut self, key: &str) -> Result<&mut Value, JsonError> {
        match self {
            Value::Object(entries) => entries.get_mut(key).ok_or_else(|| JsonError::KeyNotFound {
                key: key.to_string(),
            }),
            other => Err(JsonError::NotAnObject { found: other.kind() }),
        }
    }

    /// Look up an element of an array.
    ///
    /// # Errors
    /// `IndexOutOfBounds` outside `[0, len)`, `NotAnArray` if this value is
    /// not an array.
    pub fn at(&self, index: usize) -> Result<&Value, JsonError> {
        match self {
            Value::Array(items) => {
                let len = items.len();
                items.get(index).ok_or(JsonError::IndexOutOfBounds { index, len })
            }
            other => Err(JsonError::NotAnArray { found: other.kind() }),
        }
    }

    pub fn at_mut(&mut self, index: usize) -> Result<&mut Value, JsonError> {
        match self {
            Value::Array(items) => {
                let len = items.len();
                items.get_mut(index).ok_or(JsonError::IndexOutOfBounds { index, len })
            }
            other => Err(JsonError::NotAnArray { found: other.kind() }),
        }
    }

    /// Insert or replace a key in an object.
    ///
    /// Replacing keeps the key's original position in the serialization
    /// order.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Result<(), JsonError> {
        match self {
            Value::Object(entries) => {
                entries.insert(key.into(), value.into());
                Ok(())
            }
            other => Err(JsonError::NotAnObject { found: other.kind() }),
        }
    }

    /// Overwrite an existing element of an array.
    pub fn set_at(&mut self, index: usize, value: impl Into<Value>) -> Result<(), JsonError> {
        match self {
            Value::Array(items) => {
                let len = items.len();
                match items.get_mut(index) {
                    Some(slot) => {
                        *slot = value.into();
                        Ok(())
                    }
                    None => Err(JsonError::IndexOutOfBounds { index, len }),
                }
            }
            other => Err(JsonError::NotAnArray { found: other.kind() }),
        }
    }
}
