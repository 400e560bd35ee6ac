use thiserror::Error;

/// Error for TaskId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskIdError {
    #[error("invalid UUID format: {0}")]
    InvalidFormat(String),
}

/// Error for TaskDescription validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDescriptionError {
    #[error("description is required")]
    Empty,
}

#[derive(Debug, Clone, Error)]
pub enum TaskError {
    #[error("invalid description: {0}")]
    InvalidDescription(#[from] TaskDescriptionError),

    #[error("task not found: {0}")]
    NotFound(String),

    #[error("database error: {0}")]
    DatabaseError(String),
}
