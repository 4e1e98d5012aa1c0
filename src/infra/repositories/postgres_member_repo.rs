use crate::domain::{models::member::Member, ports::MemberRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::PgPool;

pub struct PostgresMemberRepo {
    pool: PgPool,
}

impl PostgresMemberRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MemberRepository for PostgresMemberRepo {
    async fn create(&self, member: &Member) -> Result<Member, AppError> {
        sqlx::query_as::<_, Member>(
            "INSERT INTO members (id, gym_id, name, phone, email, address, photo, plan, start_date, expiry_date, status, payment_due, created_at, updated_at) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14) RETURNING *",
        )
            .bind(&member.id)
            .bind(&member.gym_id)
            .bind(&member.name)
            .bind(&member.phone)
            .bind(&member.email)
            .bind(&member.address)
            .bind(&member.photo)
            .bind(&member.plan)
            .bind(member.start_date)
            .bind(member.expiry_date)
            .bind(&member.status)
            .bind(member.payment_due)
            .bind(member.created_at)
            .bind(member.updated_at)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_by_id(&self, gym_id: &str, id: &str) -> Result<Option<Member>, AppError> {
        sqlx::query_as::<_, Member>(
            "SELECT id, gym_id, name, phone, email, address, photo, plan, start_date, expiry_date, status, payment_due, created_at, updated_at FROM members WHERE gym_id = $1 AND id = $2",
        )
            .bind(gym_id)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list(&self, gym_id: &str) -> Result<Vec<Member>, AppError> {
        sqlx::query_as::<_, Member>(
            "SELECT id, gym_id, name, phone, email, address, photo, plan, start_date, expiry_date, status, payment_due, created_at, updated_at FROM members WHERE gym_id = $1 ORDER BY created_at DESC",
        )
            .bind(gym_id)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list_all(&self) -> Result<Vec<Member>, AppError> {
        sqlx::query_as::<_, Member>(
            "SELECT id, gym_id, name, phone, email, address, photo, plan, start_date, expiry_date, status, payment_due, created_at, updated_at FROM members",
        )
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn update(&self, member: &Member) -> Result<Member, AppError> {
        sqlx::query_as::<_, Member>(
            "UPDATE members SET name=$1, phone=$2, email=$3, address=$4, photo=$5, plan=$6, start_date=$7, expiry_date=$8, status=$9, payment_due=$10, updated_at=$11 WHERE id=$12 AND gym_id=$13 RETURNING *",
        )
            .bind(&member.name)
            .bind(&member.phone)
            .bind(&member.email)
            .bind(&member.address)
            .bind(&member.photo)
            .bind(&member.plan)
            .bind(member.start_date)
            .bind(member.expiry_date)
            .bind(&member.status)
            .bind(member.payment_due)
            .bind(member.updated_at)
            .bind(&member.id)
            .bind(&member.gym_id)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn update_status(&self, id: &str, status: &str) -> Result<(), AppError> {
        sqlx::query("UPDATE members SET status = $1, updated_at = $2 WHERE id = $3")
            .bind(status)
            .bind(chrono::Utc::now())
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;
        Ok(())
    }

    async fn delete(&self, gym_id: &str, id: &str) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM members WHERE id = $1 AND gym_id = $2")
            .bind(id)
            .bind(gym_id)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Member not found".into()));
        }
        Ok(())
    }
}
