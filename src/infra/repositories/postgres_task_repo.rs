use crate::domain::{
    models::task_step::{MemberTaskStep, TASK_STATUS_COMPLETED, TASK_STATUS_PENDING},
    ports::TaskStepRepository,
};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::Utc;
use sqlx::PgPool;

pub struct PostgresTaskRepo {
    pool: PgPool,
}

impl PostgresTaskRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TaskStepRepository for PostgresTaskRepo {
    async fn create(&self, task: &MemberTaskStep) -> Result<MemberTaskStep, AppError> {
        sqlx::query_as::<_, MemberTaskStep>(
            "INSERT INTO member_task_steps (id, member_id, step_count, assigned_by_admin_id, assigned_at, status, notes, completed_at) VALUES ($1, $2, $3, $4, $5, $6, $7, $8) RETURNING *",
        )
            .bind(&task.id)
            .bind(&task.member_id)
            .bind(task.step_count)
            .bind(&task.assigned_by_admin_id)
            .bind(task.assigned_at)
            .bind(&task.status)
            .bind(&task.notes)
            .bind(task.completed_at)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<MemberTaskStep>, AppError> {
        sqlx::query_as::<_, MemberTaskStep>(
            "SELECT id, member_id, step_count, assigned_by_admin_id, assigned_at, status, notes, completed_at FROM member_task_steps WHERE id = $1",
        )
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list_by_member(&self, member_id: &str, status: Option<&str>) -> Result<Vec<MemberTaskStep>, AppError> {
        let tasks = match status {
            Some(status) => {
                sqlx::query_as::<_, MemberTaskStep>(
                    "SELECT id, member_id, step_count, assigned_by_admin_id, assigned_at, status, notes, completed_at FROM member_task_steps WHERE member_id = $1 AND status = $2 ORDER BY assigned_at DESC",
                )
                    .bind(member_id)
                    .bind(status)
                    .fetch_all(&self.pool)
                    .await
            }
            None => {
                sqlx::query_as::<_, MemberTaskStep>(
                    "SELECT id, member_id, step_count, assigned_by_admin_id, assigned_at, status, notes, completed_at FROM member_task_steps WHERE member_id = $1 ORDER BY assigned_at DESC",
                )
                    .bind(member_id)
                    .fetch_all(&self.pool)
                    .await
            }
        };

        tasks.map_err(AppError::Database)
    }

    async fn complete(&self, id: &str) -> Result<MemberTaskStep, AppError> {
        let completed = sqlx::query_as::<_, MemberTaskStep>(
            "UPDATE member_task_steps SET status = $1, completed_at = $2 WHERE id = $3 AND status = $4 RETURNING *",
        )
            .bind(TASK_STATUS_COMPLETED)
            .bind(Utc::now())
            .bind(id)
            .bind(TASK_STATUS_PENDING)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)?;

        match completed {
            Some(task) => Ok(task),
            None => {
                // Distinguish "gone" from "already completed".
                match self.find_by_id(id).await? {
                    Some(_) => Err(AppError::InvalidState("Task is already completed".into())),
                    None => Err(AppError::NotFound("Task not found".into())),
                }
            }
        }
    }

    async fn delete(&self, id: &str) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM member_task_steps WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Task not found".into()));
        }
        Ok(())
    }
}
