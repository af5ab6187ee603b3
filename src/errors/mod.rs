//! Error handling for the content and session stores.
//!
//! Mutations only fail on persistence writes or duplicate-id inserts; missing
//! ids are silent no-ops and never surface here.

/// Error codes as constants to avoid stringly-typed errors.
pub mod codes {
    pub const STORAGE_ERROR: &str = "STORAGE_ERROR";
    pub const PARSE_ERROR: &str = "PARSE_ERROR";
    pub const DUPLICATE_ID: &str = "DUPLICATE_ID";
    pub const INVALID_CREDENTIALS: &str = "INVALID_CREDENTIALS";
}

/// Store error type.
#[derive(Debug)]
pub enum StoreError {
    /// Reading or writing the backing storage failed
    Storage(String),
    /// A value could not be serialized or deserialized
    Parse(String),
    /// An item with the same id already exists in the collection
    DuplicateId { collection: &'static str, id: String },
    /// Login rejected
    InvalidCredentials,
}

impl StoreError {
    /// Get the error code for this error.
    pub fn error_code(&self) -> &'static str {
        match self {
            StoreError::Storage(_) => codes::STORAGE_ERROR,
            StoreError::Parse(_) => codes::PARSE_ERROR,
            StoreError::DuplicateId { .. } => codes::DUPLICATE_ID,
            StoreError::InvalidCredentials => codes::INVALID_CREDENTIALS,
        }
    }

    /// Get the error message.
    pub fn message(&self) -> String {
        match self {
            StoreError::Storage(msg) => msg.clone(),
            StoreError::Parse(msg) => msg.clone(),
            StoreError::DuplicateId { collection, id } => {
                format!("Duplicate id {} in {}", id, collection)
            }
            StoreError::InvalidCredentials => "Invalid username or password".to_string(),
        }
    }
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.error_code(), self.message())
    }
}

impl std::error::Error for StoreError {}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        tracing::error!("JSON error: {:?}", err);
        StoreError::Parse(format!("JSON error: {}", err))
    }
}
