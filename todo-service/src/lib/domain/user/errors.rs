use thiserror::Error;

/// Error for UserName validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UserNameError {
    #[error("name is required")]
    Empty,

    #[error("name too long: maximum {max} characters, got {actual}")]
    TooLong { max: usize, actual: usize },
}

/// Error for EmailAddress validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EmailError {
    #[error("email is required")]
    Empty,

    #[error("invalid email format: {0}")]
    InvalidFormat(String),
}

/// Top-level error for user directory operations
#[derive(Debug, Clone, Error)]
pub enum UserError {
    #[error("invalid name: {0}")]
    InvalidName(#[from] UserNameError),

    #[error("invalid email: {0}")]
    InvalidEmail(#[from] EmailError),

    #[error("user not found with email: {0}")]
    NotFoundByEmail(String),

    #[error("email already exists: {0}")]
    EmailAlreadyExists(String),

    #[error("database error: {0}")]
    DatabaseError(String),
}
