use std::fmt;

/// Failure modes of the guarded preference store.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StorageError {
    /// The browser exposes no usable storage (disabled, sandboxed, private mode).
    Unavailable,
    /// Storage exists but the read or write threw.
    Rejected(String),
}

impl fmt::Display for StorageError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::Unavailable => write!(formatter, "storage unavailable"),
            StorageError::Rejected(message) => write!(formatter, "storage rejected access: {message}"),
        }
    }
}

impl std::error::Error for StorageError {}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UiError {
    MissingElement(&'static str),
    Storage(StorageError),
    Host(String),
    Telemetry(String),
}

impl fmt::Display for UiError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UiError::MissingElement(what) => write!(formatter, "Missing element: {what}"),
            UiError::Storage(err) => write!(formatter, "Storage error: {err}"),
            UiError::Host(message) => write!(formatter, "Browser error: {message}"),
            UiError::Telemetry(message) => write!(formatter, "Telemetry error: {message}"),
        }
    }
}

impl std::error::Error for UiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            UiError::Storage(err) => Some(err),
            _ => None,
        }
    }
}

impl From<StorageError> for UiError {
    fn from(err: StorageError) -> Self {
        UiError::Storage(err)
    }
}
