use axum::async_trait;
use axum::extract::FromRequestParts;
use axum::extract::Request;
use axum::extract::State;
use axum::http::header;
use axum::http::request::Parts;
use axum::middleware::Next;
use axum::response::Response;

use crate::domain::user::models::EmailAddress;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::router::AppState;

const BEARER_PREFIX: &str = "Bearer ";

/// Verified identity of the caller, valid for one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub email: EmailAddress,
}

/// Middleware that verifies the bearer token and stores the caller's
/// identity in the request extensions.
///
/// Every rejection is the same 401; the reason only goes to the debug log.
pub async fn authenticate(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = extract_token_from_header(&req)?;

    let claims = state
        .authenticator
        .verify_token(token)
        .ok_or_else(ApiError::unauthorized)?;

    let email = EmailAddress::new(claims.email).map_err(|e| {
        tracing::debug!(error = %e, "Token carries an unusable email claim");
        ApiError::unauthorized()
    })?;

    req.extensions_mut().insert(AuthenticatedUser { email });

    Ok(next.run(req).await)
}

fn extract_token_from_header(req: &Request) -> Result<&str, ApiError> {
    let auth_header = req.headers().get(header::AUTHORIZATION).ok_or_else(|| {
        tracing::debug!("Missing Authorization header");
        ApiError::unauthorized()
    })?;

    let auth_str = auth_header.to_str().map_err(|_| {
        tracing::debug!("Authorization header is not valid UTF-8");
        ApiError::unauthorized()
    })?;

    auth_str.strip_prefix(BEARER_PREFIX).ok_or_else(|| {
        tracing::debug!("Authorization header is not a bearer credential");
        ApiError::unauthorized()
    })
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthenticatedUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthenticatedUser>()
            .cloned()
            .ok_or_else(|| {
                tracing::error!("Route reached without an authenticated identity");
                ApiError::unauthorized()
            })
    }
}
