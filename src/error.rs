use std::fmt;

/// The error type for tree access, typed extraction and file loading.
///
/// Malformed JSON *text* never shows up here: the parser folds data-level
/// problems into its boolean success flag and keeps scanning. `JsonError` is
/// reserved for caller mistakes against a tree that already exists, plus the
/// file-loading convenience.
#[derive(Debug, Clone, PartialEq)]
pub enum JsonError {
    /// Key lookup on an object that has no such key.
    KeyNotFound {
        key: String,
    },
    /// Index lookup outside `[0, len)`.
    IndexOutOfBounds {
        index: usize,
        len: usize,
    },
    /// Key-based access on a variant that is not an object.
    NotAnObject {
        found: &'static str,
    },
    /// Index-based access on a variant that is not an array.
    NotAnArray {
        found: &'static str,
    },
    /// A typed extraction found a different variant than requested.
    TypeError {
        message: String,
    },
    FileError {
        message: String,
        path: String,
    },
}

impl fmt::Display for JsonError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JsonError::KeyNotFound { key } =>
                write!(f, "[JSON] Key '{}' not found in object", key),
            JsonError::IndexOutOfBounds { index, len } =>
                write!(f, "[JSON] Index {} out of bounds for array of length {}", index, len),
            JsonError::NotAnObject { found } =>
                write!(f, "[JSON] Key-based access on {} value; only objects support keys", found),
            JsonError::NotAnArray { found } =>
                write!(f, "[JSON] Index-based access on {} value; only arrays support indices", found),
            JsonError::TypeError { message } =>
                write!(f, "[JSON] Type Error: {}", message),
            JsonError::FileError { message, path } =>
                write!(f, "[JSON] File Error '{}': {}", path, message),
        }
    }
}

impl std::error::Error for JsonError {}
