use crate::domain::{
    models::customer::{Customer, CUSTOMER_STATUS_MEMBER},
    models::member::Member,
    ports::CustomerRepository,
};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::SqlitePool;

pub struct SqliteCustomerRepo {
    pool: SqlitePool,
}

impl SqliteCustomerRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CustomerRepository for SqliteCustomerRepo {
    async fn create(&self, customer: &Customer) -> Result<Customer, AppError> {
        sqlx::query_as::<_, Customer>(
            "INSERT INTO customers (id, customer_code, gym_id, full_name, email, phone, age, gender, address, membership_type, start_date, status, created_at) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?) RETURNING *",
        )
            .bind(&customer.id)
            .bind(&customer.customer_code)
            .bind(&customer.gym_id)
            .bind(&customer.full_name)
            .bind(&customer.email)
            .bind(&customer.phone)
            .bind(customer.age)
            .bind(&customer.gender)
            .bind(&customer.address)
            .bind(&customer.membership_type)
            .bind(customer.start_date)
            .bind(&customer.status)
            .bind(customer.created_at)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_by_id(&self, gym_id: &str, id: &str) -> Result<Option<Customer>, AppError> {
        sqlx::query_as::<_, Customer>(
            "SELECT id, customer_code, gym_id, full_name, email, phone, age, gender, address, membership_type, start_date, status, created_at FROM customers WHERE gym_id = ? AND id = ?",
        )
            .bind(gym_id)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list(&self, gym_id: &str) -> Result<Vec<Customer>, AppError> {
        sqlx::query_as::<_, Customer>(
            "SELECT id, customer_code, gym_id, full_name, email, phone, age, gender, address, membership_type, start_date, status, created_at FROM customers WHERE gym_id = ? ORDER BY created_at DESC",
        )
            .bind(gym_id)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn update_status(&self, gym_id: &str, id: &str, status: &str) -> Result<Customer, AppError> {
        sqlx::query_as::<_, Customer>(
            "UPDATE customers SET status=? WHERE id=? AND gym_id=? RETURNING *",
        )
            .bind(status)
            .bind(id)
            .bind(gym_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)?
            .ok_or(AppError::NotFound("Customer not found".into()))
    }

    async fn convert_to_member(&self, customer_id: &str, member: &Member) -> Result<Member, AppError> {
        let mut tx = self.pool.begin().await.map_err(AppError::Database)?;

        // Conditional claim: only one conversion can flip the status.
        let marked = sqlx::query("UPDATE customers SET status = ? WHERE id = ? AND status <> ?")
            .bind(CUSTOMER_STATUS_MEMBER)
            .bind(customer_id)
            .bind(CUSTOMER_STATUS_MEMBER)
            .execute(&mut *tx)
            .await
            .map_err(AppError::Database)?;

        if marked.rows_affected() == 0 {
            return Err(AppError::AlreadyConverted);
        }

        let created = sqlx::query_as::<_, Member>(
            "INSERT INTO members (id, gym_id, name, phone, email, address, photo, plan, start_date, expiry_date, status, payment_due, created_at, updated_at) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?) RETURNING *",
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
            .fetch_one(&mut *tx)
            .await
            .map_err(AppError::Database)?;

        tx.commit().await.map_err(AppError::Database)?;
        Ok(created)
    }
}
