use axum::extract::State;
use axum::http::StatusCode;
use serde::Deserialize;

use super::resolve_owner;
use super::task_error;
use crate::domain::task::models::TaskDescription;
use crate::domain::task::ports::TaskServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ValidatedJson;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

pub async fn create_task(
    State(state): State<AppState>,
    identity: AuthenticatedUser,
    ValidatedJson(body): ValidatedJson<TaskDescriptionRequest>,
) -> Result<StatusCode, ApiError> {
    let description = body.try_into_description()?;
    let owner = resolve_owner(&state, &identity).await?;

    state
        .task_service
        .create_task(&owner, description)
        .await
        .map_err(|e| task_error(e, "failed to create task"))?;

    Ok(StatusCode::NO_CONTENT)
}

/// Body shared by task creation and description updates.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TaskDescriptionRequest {
    description: String,
}

impl TaskDescriptionRequest {
    pub(super) fn try_into_description(self) -> Result<TaskDescription, ApiError> {
        TaskDescription::new(self.description)
            .map_err(|e| ApiError::UnprocessableEntity(e.to_string()))
    }
}
