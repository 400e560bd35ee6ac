use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use super::create_task::TaskDescriptionRequest;
use super::parse_task_id;
use super::resolve_owner;
use super::task_error;
use crate::domain::task::ports::TaskServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ValidatedJson;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

pub async fn update_task(
    State(state): State<AppState>,
    identity: AuthenticatedUser,
    Path(task_id): Path<String>,
    ValidatedJson(body): ValidatedJson<TaskDescriptionRequest>,
) -> Result<StatusCode, ApiError> {
    let task_id = parse_task_id(&task_id)?;
    let description = body.try_into_description()?;
    let owner = resolve_owner(&state, &identity).await?;

    state
        .task_service
        .update_description(&owner, &task_id, description)
        .await
        .map_err(|e| task_error(e, "failed to update task"))?;

    Ok(StatusCode::NO_CONTENT)
}
