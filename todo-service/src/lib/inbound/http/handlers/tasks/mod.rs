use crate::domain::task::errors::TaskError;
use crate::domain::task::models::TaskId;
use crate::domain::user::models::UserId;
use crate::domain::user::ports::UserServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

pub mod create_task;
pub mod delete_task;
pub mod list_tasks;
pub mod set_task_completion;
pub mod update_task;

pub use create_task::create_task;
pub use delete_task::delete_task;
pub use list_tasks::list_tasks;
pub use set_task_completion::complete_task;
pub use set_task_completion::incomplete_task;
pub use update_task::update_task;

const TASK_NOT_FOUND: &str = "task not found";

/// Resolve the verified identity to the owning user's ID.
async fn resolve_owner(state: &AppState, identity: &AuthenticatedUser) -> Result<UserId, ApiError> {
    state
        .user_service
        .get_user_by_email(&identity.email)
        .await
        .map(|user| user.id)
        .map_err(|e| {
            tracing::warn!(error = %e, "Task owner lookup failed");
            ApiError::BadRequest("failed to get user".to_string())
        })
}

/// A path segment that is not a UUID names no task.
fn parse_task_id(raw: &str) -> Result<TaskId, ApiError> {
    TaskId::from_string(raw).map_err(|_| ApiError::NotFound(TASK_NOT_FOUND.to_string()))
}

/// Map a task failure to 404 when the task is missing, otherwise to a 400
/// carrying `failure`. The underlying error is logged, never returned.
fn task_error(err: TaskError, failure: &str) -> ApiError {
    match err {
        TaskError::NotFound(_) => ApiError::NotFound(TASK_NOT_FOUND.to_string()),
        TaskError::InvalidDescription(e) => ApiError::UnprocessableEntity(e.to_string()),
        other => {
            tracing::error!(error = %other, "{}", failure);
            ApiError::BadRequest(failure.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_task_id() {
        let id = TaskId::new();

        assert_eq!(parse_task_id(&id.to_string()), Ok(id));
        assert_eq!(
            parse_task_id("not-a-uuid"),
            Err(ApiError::NotFound(TASK_NOT_FOUND.to_string()))
        );
    }

    #[test]
    fn test_task_error_mapping() {
        assert_eq!(
            task_error(TaskError::NotFound("x".to_string()), "failed to update task"),
            ApiError::NotFound(TASK_NOT_FOUND.to_string())
        );
        assert_eq!(
            task_error(
                TaskError::DatabaseError("connection refused".to_string()),
                "failed to update task"
            ),
            ApiError::BadRequest("failed to update task".to_string())
        );
    }
}
