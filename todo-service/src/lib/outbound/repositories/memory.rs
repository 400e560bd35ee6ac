//! Process-local stores used when no database is configured, and by the
//! integration tests. Contents are lost on restart.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::domain::task::errors::TaskError;
use crate::domain::task::models::Task;
use crate::domain::task::models::TaskId;
use crate::domain::task::ports::TaskRepository;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::ports::UserRepository;
use crate::user::errors::UserError;

#[derive(Debug, Clone, Default)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<HashMap<UserId, User>>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: User) -> Result<User, UserError> {
        // Check and insert under one write lock, like the partial unique index.
        let mut users = self.users.write().await;

        let taken = users
            .values()
            .any(|existing| !existing.is_deleted() && existing.email == user.email);
        if taken {
            return Err(UserError::EmailAlreadyExists(user.email.to_string()));
        }

        users.insert(user.id, user.clone());

        Ok(user)
    }

    async fn find_by_email(&self, email: &EmailAddress) -> Result<Option<User>, UserError> {
        Ok(self
            .users
            .read()
            .await
            .values()
            .find(|user| !user.is_deleted() && &user.email == email)
            .cloned())
    }
}

#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskRepository {
    tasks: Arc<RwLock<HashMap<TaskId, Task>>>,
}

impl InMemoryTaskRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TaskRepository for InMemoryTaskRepository {
    async fn create(&self, task: Task) -> Result<Task, TaskError> {
        self.tasks.write().await.insert(task.id, task.clone());

        Ok(task)
    }

    async fn find_by_id(&self, owner: &UserId, id: &TaskId) -> Result<Option<Task>, TaskError> {
        Ok(self
            .tasks
            .read()
            .await
            .get(id)
            .filter(|task| !task.is_deleted() && task.user_id == *owner)
            .cloned())
    }

    async fn list_by_user(&self, owner: &UserId) -> Result<Vec<Task>, TaskError> {
        let mut tasks: Vec<Task> = self
            .tasks
            .read()
            .await
            .values()
            .filter(|task| !task.is_deleted() && task.user_id == *owner)
            .cloned()
            .collect();

        tasks.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        Ok(tasks)
    }

    async fn update(&self, task: Task) -> Result<Task, TaskError> {
        let mut tasks = self.tasks.write().await;

        let stored = tasks
            .get_mut(&task.id)
            .filter(|stored| !stored.is_deleted() && stored.user_id == task.user_id)
            .ok_or_else(|| TaskError::NotFound(task.id.to_string()))?;

        stored.description = task.description.clone();
        stored.is_completed = task.is_completed;
        stored.updated_at = task.updated_at;

        Ok(task)
    }

    async fn delete(&self, owner: &UserId, id: &TaskId) -> Result<(), TaskError> {
        let mut tasks = self.tasks.write().await;

        let stored = tasks
            .get_mut(id)
            .filter(|stored| !stored.is_deleted() && stored.user_id == *owner)
            .ok_or_else(|| TaskError::NotFound(id.to_string()))?;

        let now = Utc::now();
        stored.deleted_at = Some(now);
        stored.updated_at = now;

        Ok(())
    }
}
