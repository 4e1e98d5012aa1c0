use crate::domain::{
    models::payment::{MemberPayment, PaymentStatusChange},
    ports::PaymentRepository,
};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::PgPool;

pub struct PostgresPaymentRepo {
    pool: PgPool,
}

impl PostgresPaymentRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PaymentRepository for PostgresPaymentRepo {
    async fn create(&self, payment: &MemberPayment) -> Result<MemberPayment, AppError> {
        sqlx::query_as::<_, MemberPayment>(
            "INSERT INTO member_payments (id, member_id, date, amount, payment_type, status, description, created_at) VALUES ($1, $2, $3, $4, $5, $6, $7, $8) RETURNING *",
        )
            .bind(&payment.id)
            .bind(&payment.member_id)
            .bind(payment.date)
            .bind(payment.amount)
            .bind(&payment.payment_type)
            .bind(&payment.status)
            .bind(&payment.description)
            .bind(payment.created_at)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<MemberPayment>, AppError> {
        sqlx::query_as::<_, MemberPayment>(
            "SELECT id, member_id, date, amount, payment_type, status, description, created_at FROM member_payments WHERE id = $1",
        )
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list_by_member(&self, member_id: &str) -> Result<Vec<MemberPayment>, AppError> {
        sqlx::query_as::<_, MemberPayment>(
            "SELECT id, member_id, date, amount, payment_type, status, description, created_at FROM member_payments WHERE member_id = $1 ORDER BY date DESC",
        )
            .bind(member_id)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn update(&self, payment: &MemberPayment, audit: Option<&PaymentStatusChange>) -> Result<MemberPayment, AppError> {
        let mut tx = self.pool.begin().await.map_err(AppError::Database)?;

        let updated = sqlx::query_as::<_, MemberPayment>(
            "UPDATE member_payments SET date=$1, amount=$2, payment_type=$3, status=$4, description=$5 WHERE id=$6 RETURNING *",
        )
            .bind(payment.date)
            .bind(payment.amount)
            .bind(&payment.payment_type)
            .bind(&payment.status)
            .bind(&payment.description)
            .bind(&payment.id)
            .fetch_one(&mut *tx)
            .await
            .map_err(AppError::Database)?;

        if let Some(change) = audit {
            sqlx::query(
                "INSERT INTO payment_status_changes (id, payment_id, old_status, new_status, changed_at) VALUES ($1, $2, $3, $4, $5)",
            )
                .bind(&change.id)
                .bind(&change.payment_id)
                .bind(&change.old_status)
                .bind(&change.new_status)
                .bind(change.changed_at)
                .execute(&mut *tx)
                .await
                .map_err(AppError::Database)?;
        }

        tx.commit().await.map_err(AppError::Database)?;
        Ok(updated)
    }

    async fn delete(&self, id: &str) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM member_payments WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Payment not found".into()));
        }
        Ok(())
    }

    async fn list_status_changes(&self, payment_id: &str) -> Result<Vec<PaymentStatusChange>, AppError> {
        sqlx::query_as::<_, PaymentStatusChange>(
            "SELECT id, payment_id, old_status, new_status, changed_at FROM payment_status_changes WHERE payment_id = $1 ORDER BY changed_at",
        )
            .bind(payment_id)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }
}
