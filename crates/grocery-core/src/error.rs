//! Error types for backend calls and actions.

/// Failure reported by a backend service client
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ServiceError {
    /// The backend answered the command with an error
    #[error("backend rejected `{command}`: {message}")]
    Rejected { command: String, message: String },
    #[error("item {0} not found")]
    NotFound(u32),
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("failed to encode request: {0}")]
    Encode(String),
    #[error("failed to decode response: {0}")]
    Decode(String),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Failure of an action. There is only one kind: the backend call failed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ActionError {
    #[error("backend operation failed: {0}")]
    Backend(#[from] ServiceError),
}

pub type ActionResult<T> = Result<T, ActionError>;
