use serde::Deserialize;
use serde::Serialize;

/// Claims carried by an access token.
///
/// The only claim is the account email. There is no `exp`/`iat`, so a token
/// never expires and issuing twice for the same email yields the same token.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    pub email: String,
}

impl Claims {
    pub fn for_email(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
        }
    }
}
