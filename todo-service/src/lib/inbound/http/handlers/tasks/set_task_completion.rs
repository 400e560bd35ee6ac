use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use super::parse_task_id;
use super::resolve_owner;
use super::task_error;
use crate::domain::task::ports::TaskServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

pub async fn complete_task(
    State(state): State<AppState>,
    identity: AuthenticatedUser,
    Path(task_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    set_task_completion(state, identity, task_id, true).await
}

pub async fn incomplete_task(
    State(state): State<AppState>,
    identity: AuthenticatedUser,
    Path(task_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    set_task_completion(state, identity, task_id, false).await
}

async fn set_task_completion(
    state: AppState,
    identity: AuthenticatedUser,
    task_id: String,
    is_completed: bool,
) -> Result<StatusCode, ApiError> {
    let task_id = parse_task_id(&task_id)?;
    let owner = resolve_owner(&state, &identity).await?;

    state
        .task_service
        .set_completed(&owner, &task_id, is_completed)
        .await
        .map_err(|e| task_error(e, "failed to update task"))?;

    Ok(StatusCode::NO_CONTENT)
}
