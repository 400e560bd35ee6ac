use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::UserName;

/// Command to register a new account with validated fields.
///
/// The password stays plaintext only until the service hashes it.
#[derive(Debug)]
pub struct RegisterCommand {
    pub name: UserName,
    pub email: EmailAddress,
    pub password: String,
}

impl RegisterCommand {
    pub fn new(name: UserName, email: EmailAddress, password: String) -> Self {
        Self {
            name,
            email,
            password,
        }
    }
}

/// Command to exchange credentials for a token.
#[derive(Debug)]
pub struct LoginCommand {
    pub email: EmailAddress,
    pub password: String,
}

impl LoginCommand {
    pub fn new(email: EmailAddress, password: String) -> Self {
        Self { email, password }
    }
}
