use axum::extract::State;
use axum::http::StatusCode;
use serde::Deserialize;

use super::register::TokenResponseData;
use super::ApiError;
use super::ApiSuccess;
use super::ValidatedJson;
use crate::domain::authentication::errors::AuthError;
use crate::domain::authentication::models::LoginCommand;
use crate::domain::authentication::ports::AuthServicePort;
use crate::domain::user::models::EmailAddress;
use crate::inbound::http::router::AppState;

const FAILED_TO_LOGIN: &str = "failed to login";

pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(body): ValidatedJson<LoginRequest>,
) -> Result<ApiSuccess<TokenResponseData>, ApiError> {
    let email = EmailAddress::new(body.email)
        .map_err(|e| ApiError::UnprocessableEntity(e.to_string()))?;
    if body.password.is_empty() {
        return Err(ApiError::UnprocessableEntity(
            "password is required".to_string(),
        ));
    }

    state
        .auth_service
        .login(LoginCommand::new(email, body.password))
        .await
        .map_err(|e| match e {
            AuthError::WrongCredentials => ApiError::BadRequest(e.to_string()),
            other => {
                tracing::error!(error = %other, "Login failed");
                ApiError::BadRequest(FAILED_TO_LOGIN.to_string())
            }
        })
        .map(|token| ApiSuccess::new(StatusCode::OK, TokenResponseData { token }))
}

/// HTTP request body for login (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginRequest {
    email: String,
    password: String,
}
