// License: MIT

use indexmap::IndexMap;

use crate::error::JsonError;
use crate::value::Value;

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<f32> for Value {
    fn from(n: f32) -> Self {
        Value::Number(n as f64)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(n as f64)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(n as f64)
    }
}

impl From<u32> for Value {
    fn from(n: u32) -> Self {
        Value::Number(n as f64)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::Array(items.into_iter().map(Into::into).collect())
    }
}

impl From<IndexMap<String, Value>> for Value {
    fn from(entries: IndexMap<String, Value>) -> Self {
        Value::Object(entries)
    }
}

impl<V: Into<Value>> FromIterator<V> for Value {
    fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
        Value::Array(iter.into_iter().map(Into::into).collect())
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Value {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Value::Object(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl TryFrom<Value> for String {
    type Error = JsonError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::String(s) => Ok(s),
            other => Err(JsonError::TypeError {
                message: format!("Expected string, got {}", other.kind()),
            }),
        }
    }
}

impl TryFrom<Value> for f64 {
    type Error = JsonError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Number(n) => Ok(n),
            other => Err(JsonError::TypeError {
                message: format!("Expected number, got {}", other.kind()),
            }),
        }
    }
}

impl TryFrom<Value> for f32 {
    type Error = JsonError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Number(n) => Ok(n as f32),
            other => Err(JsonError::TypeError {
                message: format!("Expected number, got {}", other.kind()),
            }),
        }
    }
}

impl TryFrom<Value> for i64 {
    type Error = JsonError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Number(n) => Ok(n as i64),
            other => Err(JsonError::TypeError {
                message: format!("Expected number, got {}", other.kind()),
            }),
        }
    }
}

impl TryFrom<Value> for i32 {
    type Error = JsonError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Number(n) => Ok(n as i32),
            other => Err(JsonError::TypeError {
                message: format!("Expected number, got {}", other.kind()),
            }),
        }
    }
}

impl TryFrom<Value> for u32 {
    type Error = JsonError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Number(n) => {
                if n >= 0.0 && n <= u32::MAX as f64 {
                    Ok(n as u32)
                } else {
                    Err(JsonError::TypeError {
                        message: format!("Number {} out of range for u32", n),
                    })
                }
            }
            other => Err(JsonError::TypeError {
                message: format!("Expected number, got {}", other.kind()),
            }),
        }
    }
}

impl TryFrom<Value> for u64 {
    type Error = JsonError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Number(n) => {
                if n >= 0.0 && n <= u64::MAX as f64 {
                    Ok(n as u64)
                } else {
                    Err(JsonError::TypeError {
                        message: format!("Number {} out of range for u64", n),
                    })
                }
            }
            other => Err(JsonError::TypeError {
                message: format!("Expected number, got {}", other.kind()),
            }),
        }
    }
}

impl TryFrom<Value> for bool {
    type Error = JsonError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Bool(b) => Ok(b),
            other => Err(JsonError::TypeError {
                message: format!("Expected boolean, got {}", other.kind()),
            }),
        }
    }
}

impl<T> TryFrom<Value> for Vec<T>
where
    T: TryFrom<Value, Error = JsonError>,
{
    type Error = JsonError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Array(items) => {
                let mut result = Vec::new();
                for item in items {
                    result.push(T::try_from(item)?);
                }
                Ok(result)
            }
            other => Err(JsonError::TypeError {
                message: format!("Expected array, got {}", other.kind()),
            }),
        }
    }
}

impl<T> TryFrom<Value> for Option<T>
where
    T: TryFrom<Value, Error = JsonError>,
{
    type Error = JsonError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Null => Ok(None),
            v => Ok(Some(T::try_from(v)?)),
        }
    }
}
