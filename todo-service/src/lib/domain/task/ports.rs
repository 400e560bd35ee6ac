use async_trait::async_trait;

use crate::domain::task::errors::TaskError;
use crate::domain::task::models::Task;
use crate::domain::task::models::TaskDescription;
use crate::domain::task::models::TaskId;
use crate::domain::user::models::UserId;

/// Port for task operations. Every call is scoped to the owning user:
/// another user's task behaves exactly like a missing one.
#[async_trait]
pub trait TaskServicePort: Send + Sync + 'static {
    async fn create_task(
        &self,
        owner: &UserId,
        description: TaskDescription,
    ) -> Result<Task, TaskError>;

    /// Live tasks of `owner`, newest first.
    async fn list_tasks(&self, owner: &UserId) -> Result<Vec<Task>, TaskError>;

    /// # Errors
    /// * `NotFound` - No live task with this ID belongs to `owner`
    async fn update_description(
        &self,
        owner: &UserId,
        id: &TaskId,
        description: TaskDescription,
    ) -> Result<Task, TaskError>;

    /// # Errors
    /// * `NotFound` - No live task with this ID belongs to `owner`
    async fn set_completed(
        &self,
        owner: &UserId,
        id: &TaskId,
        is_completed: bool,
    ) -> Result<Task, TaskError>;

    /// Soft-delete a task.
    ///
    /// # Errors
    /// * `NotFound` - No live task with this ID belongs to `owner`
    async fn delete_task(&self, owner: &UserId, id: &TaskId) -> Result<(), TaskError>;
}

/// Keyed task storage.
#[async_trait]
pub trait TaskRepository: Send + Sync + 'static {
    async fn create(&self, task: Task) -> Result<Task, TaskError>;

    /// Live task with `id` owned by `owner`, if any.
    async fn find_by_id(&self, owner: &UserId, id: &TaskId) -> Result<Option<Task>, TaskError>;

    /// Live tasks of `owner` ordered by creation time, newest first.
    async fn list_by_user(&self, owner: &UserId) -> Result<Vec<Task>, TaskError>;

    /// Overwrite description, completion flag and `updated_at` of a live task.
    ///
    /// # Errors
    /// * `NotFound` - No live task with this ID belongs to the task's owner
    async fn update(&self, task: Task) -> Result<Task, TaskError>;

    /// Mark a live task as deleted.
    ///
    /// # Errors
    /// * `NotFound` - No live task with this ID belongs to `owner`
    async fn delete(&self, owner: &UserId, id: &TaskId) -> Result<(), TaskError>;
}
