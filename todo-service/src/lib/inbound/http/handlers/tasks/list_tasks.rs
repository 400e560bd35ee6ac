use axum::extract::State;
use axum::http::StatusCode;
use chrono::DateTime;
use chrono::Utc;
use serde::Serialize;

use super::resolve_owner;
use super::task_error;
use crate::domain::task::models::Task;
use crate::domain::task::ports::TaskServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

pub async fn list_tasks(
    State(state): State<AppState>,
    identity: AuthenticatedUser,
) -> Result<ApiSuccess<Vec<TaskResponseData>>, ApiError> {
    let owner = resolve_owner(&state, &identity).await?;

    state
        .task_service
        .list_tasks(&owner)
        .await
        .map_err(|e| task_error(e, "failed to get tasks"))
        .map(|tasks| {
            ApiSuccess::new(
                StatusCode::OK,
                tasks.iter().map(TaskResponseData::from).collect(),
            )
        })
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskResponseData {
    pub id: String,
    pub description: String,
    pub is_completed: bool,
    pub created_at: DateTime<Utc>,
}

impl From<&Task> for TaskResponseData {
    fn from(task: &Task) -> Self {
        Self {
            id: task.id.to_string(),
            description: task.description.as_str().to_string(),
            is_completed: task.is_completed,
            created_at: task.created_at,
        }
    }
}
