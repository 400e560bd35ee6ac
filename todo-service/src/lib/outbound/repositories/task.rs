use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::PgPool;
use sqlx::Row;

use crate::domain::task::errors::TaskError;
use crate::domain::task::models::Task;
use crate::domain::task::models::TaskDescription;
use crate::domain::task::models::TaskId;
use crate::domain::task::ports::TaskRepository;
use crate::domain::user::models::UserId;

pub struct PostgresTaskRepository {
    pool: PgPool,
}

impl PostgresTaskRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn row_to_task(row: &PgRow) -> Result<Task, TaskError> {
        let column = |e: sqlx::Error| TaskError::DatabaseError(e.to_string());

        Ok(Task {
            id: TaskId(row.try_get("id").map_err(column)?),
            user_id: UserId(row.try_get("user_id").map_err(column)?),
            description: TaskDescription::new(row.try_get("description").map_err(column)?)?,
            is_completed: row.try_get("is_completed").map_err(column)?,
            created_at: row.try_get("created_at").map_err(column)?,
            updated_at: row.try_get("updated_at").map_err(column)?,
            deleted_at: row.try_get("deleted_at").map_err(column)?,
        })
    }
}

#[async_trait]
impl TaskRepository for PostgresTaskRepository {
    async fn create(&self, task: Task) -> Result<Task, TaskError> {
        sqlx::query(
            r#"
            INSERT INTO tasks (id, user_id, description, is_completed, created_at, updated_at, deleted_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(task.id.0)
        .bind(task.user_id.0)
        .bind(task.description.as_str())
        .bind(task.is_completed)
        .bind(task.created_at)
        .bind(task.updated_at)
        .bind(task.deleted_at)
        .execute(&self.pool)
        .await
        .map_err(|e| TaskError::DatabaseError(e.to_string()))?;

        Ok(task)
    }

    async fn find_by_id(&self, owner: &UserId, id: &TaskId) -> Result<Option<Task>, TaskError> {
        let row = sqlx::query(
            r#"
            SELECT id, user_id, description, is_completed, created_at, updated_at, deleted_at
            FROM tasks
            WHERE id = $1 AND user_id = $2 AND deleted_at IS NULL
            "#,
        )
        .bind(id.0)
        .bind(owner.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| TaskError::DatabaseError(e.to_string()))?;

        row.as_ref().map(Self::row_to_task).transpose()
    }

    async fn list_by_user(&self, owner: &UserId) -> Result<Vec<Task>, TaskError> {
        let rows = sqlx::query(
            r#"
            SELECT id, user_id, description, is_completed, created_at, updated_at, deleted_at
            FROM tasks
            WHERE user_id = $1 AND deleted_at IS NULL
            ORDER BY created_at DESC
            "#,
        )
        .bind(owner.0)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| TaskError::DatabaseError(e.to_string()))?;

        rows.iter().map(Self::row_to_task).collect()
    }

    async fn update(&self, task: Task) -> Result<Task, TaskError> {
        let result = sqlx::query(
            r#"
            UPDATE tasks
            SET description = $3, is_completed = $4, updated_at = $5
            WHERE id = $1 AND user_id = $2 AND deleted_at IS NULL
            "#,
        )
        .bind(task.id.0)
        .bind(task.user_id.0)
        .bind(task.description.as_str())
        .bind(task.is_completed)
        .bind(task.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| TaskError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(TaskError::NotFound(task.id.to_string()));
        }

        Ok(task)
    }

    async fn delete(&self, owner: &UserId, id: &TaskId) -> Result<(), TaskError> {
        let result = sqlx::query(
            r#"
            UPDATE tasks
            SET deleted_at = NOW(), updated_at = NOW()
            WHERE id = $1 AND user_id = $2 AND deleted_at IS NULL
            "#,
        )
        .bind(id.0)
        .bind(owner.0)
        .execute(&self.pool)
        .await
        .map_err(|e| TaskError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(TaskError::NotFound(id.to_string()));
        }

        Ok(())
    }
}
