use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::task::errors::TaskError;
use crate::domain::task::models::Task;
use crate::domain::task::models::TaskDescription;
use crate::domain::task::models::TaskId;
use crate::domain::task::ports::TaskRepository;
use crate::domain::task::ports::TaskServicePort;
use crate::domain::user::models::UserId;

pub struct TaskService<TR>
where
    TR: TaskRepository,
{
    repository: Arc<TR>,
}

impl<TR> TaskService<TR>
where
    TR: TaskRepository,
{
    pub fn new(repository: Arc<TR>) -> Self {
        Self { repository }
    }

    async fn owned_task(&self, owner: &UserId, id: &TaskId) -> Result<Task, TaskError> {
        self.repository
            .find_by_id(owner, id)
            .await?
            .ok_or_else(|| TaskError::NotFound(id.to_string()))
    }
}

#[async_trait]
impl<TR> TaskServicePort for TaskService<TR>
where
    TR: TaskRepository,
{
    async fn create_task(
        &self,
        owner: &UserId,
        description: TaskDescription,
    ) -> Result<Task, TaskError> {
        let task = self.repository.create(Task::new(*owner, description)).await?;

        tracing::debug!(task_id = %task.id, user_id = %owner, "Task created");

        Ok(task)
    }

    async fn list_tasks(&self, owner: &UserId) -> Result<Vec<Task>, TaskError> {
        self.repository.list_by_user(owner).await
    }

    async fn update_description(
        &self,
        owner: &UserId,
        id: &TaskId,
        description: TaskDescription,
    ) -> Result<Task, TaskError> {
        let mut task = self.owned_task(owner, id).await?;

        task.description = description;
        task.updated_at = Utc::now();

        self.repository.update(task).await
    }

    async fn set_completed(
        &self,
        owner: &UserId,
        id: &TaskId,
        is_completed: bool,
    ) -> Result<Task, TaskError> {
        let mut task = self.owned_task(owner, id).await?;

        task.is_completed = is_completed;
        task.updated_at = Utc::now();

        self.repository.update(task).await
    }

    async fn delete_task(&self, owner: &UserId, id: &TaskId) -> Result<(), TaskError> {
        self.repository.delete(owner, id).await?;

        tracing::debug!(task_id = %id, user_id = %owner, "Task deleted");

        Ok(())
    }
}
