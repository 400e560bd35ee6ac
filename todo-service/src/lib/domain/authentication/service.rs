use std::sync::Arc;

use async_trait::async_trait;
use auth::AuthenticationError;
use auth::Authenticator;

use crate::domain::authentication::errors::AuthError;
use crate::domain::authentication::models::LoginCommand;
use crate::domain::authentication::models::RegisterCommand;
use crate::domain::authentication::ports::AuthServicePort;
use crate::domain::user::models::User;
use crate::user::ports::UserRepository;

/// Registration and login over a user directory.
///
/// Uniqueness of emails is checked here first but only guaranteed by the
/// repository: two concurrent registrations for one email can both pass the
/// check, and the loser then fails with a repository error.
pub struct AuthService<UR>
where
    UR: UserRepository,
{
    repository: Arc<UR>,
    authenticator: Arc<Authenticator>,
}

impl<UR> AuthService<UR>
where
    UR: UserRepository,
{
    pub fn new(repository: Arc<UR>, authenticator: Arc<Authenticator>) -> Self {
        Self {
            repository,
            authenticator,
        }
    }
}

#[async_trait]
impl<UR> AuthServicePort for AuthService<UR>
where
    UR: UserRepository,
{
    async fn register(&self, command: RegisterCommand) -> Result<String, AuthError> {
        if self.repository.find_by_email(&command.email).await?.is_some() {
            tracing::info!(email = %command.email, "Registration rejected: email taken");
            return Err(AuthError::UserExists);
        }

        let password_hash = self.authenticator.hash_password(&command.password)?;

        let user = User::new(command.name, command.email, password_hash);
        let created_user = self.repository.create(user).await?;

        let token = self
            .authenticator
            .issue_token(created_user.email.as_str())
            .map_err(|e| {
                tracing::warn!(
                    user_id = %created_user.id,
                    error = %e,
                    "User registered but token issuance failed"
                );
                AuthError::from(e)
            })?;

        tracing::info!(user_id = %created_user.id, "User registered");

        Ok(token)
    }

    async fn login(&self, command: LoginCommand) -> Result<String, AuthError> {
        let user = match self.repository.find_by_email(&command.email).await {
            Ok(Some(user)) => user,
            Ok(None) => return Err(AuthError::WrongCredentials),
            Err(e) => {
                tracing::error!(error = %e, "User lookup failed during login");
                return Err(AuthError::WrongCredentials);
            }
        };

        let result = self
            .authenticator
            .authenticate(&command.password, &user.password_hash, user.email.as_str())
            .map_err(|e| match e {
                AuthenticationError::InvalidCredentials => AuthError::WrongCredentials,
                AuthenticationError::PasswordError(err) => {
                    tracing::warn!(user_id = %user.id, error = %err, "Stored password hash unusable");
                    AuthError::WrongCredentials
                }
                AuthenticationError::JwtError(err) => AuthError::Token(err),
            })?;

        tracing::info!(user_id = %user.id, "User logged in");

        Ok(result.access_token)
    }
}
