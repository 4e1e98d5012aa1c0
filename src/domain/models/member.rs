use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::FromRow;

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Member {
    pub id: String,
    pub gym_id: String,
    pub name: String,
    pub phone: String,
    pub email: String,
    pub address: Option<String>,
    pub photo: Option<String>,
    pub plan: String,
    pub start_date: NaiveDate,
    pub expiry_date: NaiveDate,
    pub status: String, // active, expired, trial
    pub payment_due: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

pub struct NewMemberParams {
    pub gym_id: String,
    pub name: String,
    pub phone: String,
    pub email: String,
    pub address: Option<String>,
    pub photo: Option<String>,
    pub plan: String,
    pub start_date: NaiveDate,
    pub expiry_date: NaiveDate,
    pub status: String,
    pub payment_due: i64,
}

impl Member {
    pub fn new(params: NewMemberParams) -> Self {
        let now = Utc::now();

        Self {
            id: Uuid::new_v4().to_string(),
            gym_id: params.gym_id,
            name: params.name,
            phone: params.phone,
            email: params.email,
            address: params.address,
            photo: params.photo,
            plan: params.plan,
            start_date: params.start_date,
            expiry_date: params.expiry_date,
            status: params.status,
            payment_due: params.payment_due,
            created_at: now,
            updated_at: now,
        }
    }
}
