use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{DateTime, Utc};
use sqlx::FromRow;

pub const ROLE_ADMIN: &str = "admin";
pub const ROLE_STAFF: &str = "staff";

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct AdminUser {
    pub id: String,
    pub gym_id: String,
    pub username: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub role: String, // admin, staff
    pub created_at: DateTime<Utc>,
}

impl AdminUser {
    pub fn new(gym_id: String, username: String, password_hash: String, role: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            gym_id,
            username,
            password_hash,
            role,
            created_at: Utc::now(),
        }
    }
}
