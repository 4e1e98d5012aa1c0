use crate::domain::{models::gym::Gym, ports::GymRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::PgPool;

pub struct PostgresGymRepo {
    pool: PgPool,
}

impl PostgresGymRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl GymRepository for PostgresGymRepo {
    async fn create(&self, gym: &Gym) -> Result<Gym, AppError> {
        sqlx::query_as::<_, Gym>(
            "INSERT INTO gyms (id, name, slug, logo_url, primary_color, secondary_color, address, contact_number, website_url, created_at) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10) RETURNING *",
        )
            .bind(&gym.id)
            .bind(&gym.name)
            .bind(&gym.slug)
            .bind(&gym.logo_url)
            .bind(&gym.primary_color)
            .bind(&gym.secondary_color)
            .bind(&gym.address)
            .bind(&gym.contact_number)
            .bind(&gym.website_url)
            .bind(gym.created_at)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Gym>, AppError> {
        sqlx::query_as::<_, Gym>(
            "SELECT id, name, slug, logo_url, primary_color, secondary_color, address, contact_number, website_url, created_at FROM gyms WHERE id = $1",
        )
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<Gym>, AppError> {
        sqlx::query_as::<_, Gym>(
            "SELECT id, name, slug, logo_url, primary_color, secondary_color, address, contact_number, website_url, created_at FROM gyms WHERE slug = $1",
        )
            .bind(slug)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn update(&self, gym: &Gym) -> Result<Gym, AppError> {
        sqlx::query_as::<_, Gym>(
            "UPDATE gyms SET name=$1, logo_url=$2, primary_color=$3, secondary_color=$4, address=$5, contact_number=$6, website_url=$7 WHERE id=$8 RETURNING *",
        )
            .bind(&gym.name)
            .bind(&gym.logo_url)
            .bind(&gym.primary_color)
            .bind(&gym.secondary_color)
            .bind(&gym.address)
            .bind(&gym.contact_number)
            .bind(&gym.website_url)
            .bind(&gym.id)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }
}
