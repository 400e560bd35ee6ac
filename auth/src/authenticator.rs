use crate::jwt::Claims;
use crate::jwt::JwtError;
use crate::jwt::JwtHandler;
use crate::password::PasswordError;
use crate::password::PasswordHasher;

/// Authentication coordinator combining password verification and token issuance.
///
/// Built once at startup from the configured secret and shared behind an `Arc`.
pub struct Authenticator {
    password_hasher: PasswordHasher,
    jwt_handler: JwtHandler,
}

/// Result of successful authentication.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticationResult {
    pub access_token: String,
}

/// Authentication operation errors.
#[derive(Debug, thiserror::Error)]
pub enum AuthenticationError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Password error: {0}")]
    PasswordError(PasswordError),

    #[error("JWT error: {0}")]
    JwtError(#[from] JwtError),
}

impl From<PasswordError> for AuthenticationError {
    fn from(err: PasswordError) -> Self {
        match err {
            PasswordError::Mismatch => AuthenticationError::InvalidCredentials,
            other => AuthenticationError::PasswordError(other),
        }
    }
}

impl Authenticator {
    pub fn new(jwt_secret: &[u8]) -> Self {
        Self {
            password_hasher: PasswordHasher::new(),
            jwt_handler: JwtHandler::new(jwt_secret),
        }
    }

    /// Hash a password for storage.
    ///
    /// # Errors
    /// * `PasswordError` - Hashing operation failed
    pub fn hash_password(&self, password: &str) -> Result<String, PasswordError> {
        self.password_hasher.hash(password)
    }

    /// Verify a password against the stored hash and issue a token for `email`.
    ///
    /// # Errors
    /// * `InvalidCredentials` - Password does not match
    /// * `PasswordError` - Stored hash is unusable
    /// * `JwtError` - Token generation failed
    pub fn authenticate(
        &self,
        password: &str,
        stored_hash: &str,
        email: &str,
    ) -> Result<AuthenticationResult, AuthenticationError> {
        self.password_hasher.verify(password, stored_hash)?;

        let access_token = self.issue_token(email)?;

        Ok(AuthenticationResult { access_token })
    }

    /// Issue a token for `email` without checking a password.
    ///
    /// Used right after registration, when the caller has just supplied the
    /// credentials that were stored.
    pub fn issue_token(&self, email: &str) -> Result<String, JwtError> {
        self.jwt_handler.issue(&Claims::for_email(email))
    }

    /// Verify a token and return its claims, `None` if it is not acceptable.
    pub fn verify_token(&self, token: &str) -> Option<Claims> {
        self.jwt_handler.verify(token)
    }
}
