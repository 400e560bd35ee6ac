use thiserror::Error;

use crate::user::errors::UserError;

/// Errors of the register and login flows.
///
/// The messages of `UserExists` and `WrongCredentials` reach clients verbatim
/// (capitalized); the others are logged and replaced by a generic message.
#[derive(Debug, Clone, Error)]
pub enum AuthError {
    #[error("user exists")]
    UserExists,

    #[error("wrong email or password")]
    WrongCredentials,

    #[error("password hashing failed: {0}")]
    Password(#[from] auth::PasswordError),

    #[error("token issuance failed: {0}")]
    Token(#[from] auth::JwtError),

    #[error("user directory error: {0}")]
    Repository(#[from] UserError),
}
