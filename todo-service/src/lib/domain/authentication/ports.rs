use async_trait::async_trait;

use crate::domain::authentication::errors::AuthError;
use crate::domain::authentication::models::LoginCommand;
use crate::domain::authentication::models::RegisterCommand;

/// Port for account registration and login.
#[async_trait]
pub trait AuthServicePort: Send + Sync + 'static {
    /// Create an account and return an access token for it.
    ///
    /// # Errors
    /// * `UserExists` - A live user already has this email
    /// * `Password` - Hashing failed, nothing was stored
    /// * `Repository` - Lookup or insert failed (including a lost uniqueness race)
    /// * `Token` - The user was stored but no token could be issued
    async fn register(&self, command: RegisterCommand) -> Result<String, AuthError>;

    /// Verify credentials and return an access token.
    ///
    /// # Errors
    /// * `WrongCredentials` - Unknown email or wrong password (indistinguishable)
    /// * `Token` - Token generation failed
    async fn login(&self, command: LoginCommand) -> Result<String, AuthError>;
}
