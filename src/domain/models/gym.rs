use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{DateTime, Utc};
use sqlx::FromRow;

pub const DEFAULT_PRIMARY_COLOR: &str = "#3b82f6";
pub const DEFAULT_SECONDARY_COLOR: &str = "#1e40af";

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Gym {
    pub id: String,
    pub name: String,
    pub slug: String,
    pub logo_url: Option<String>,
    pub primary_color: String,
    pub secondary_color: String,
    pub address: Option<String>,
    pub contact_number: Option<String>,
    pub website_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Gym {
    pub fn new(name: String, slug: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name,
            slug,
            logo_url: None,
            primary_color: DEFAULT_PRIMARY_COLOR.to_string(),
            secondary_color: DEFAULT_SECONDARY_COLOR.to_string(),
            address: None,
            contact_number: None,
            website_url: None,
            created_at: Utc::now(),
        }
    }
}
