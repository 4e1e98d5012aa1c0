use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::FromRow;
use rand::{distributions::Alphanumeric, Rng};

pub const CUSTOMER_STATUS_PENDING: &str = "pending";
pub const CUSTOMER_STATUS_APPROVED: &str = "approved";
pub const CUSTOMER_STATUS_MEMBER: &str = "member";

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Customer {
    pub id: String,
    pub customer_code: String,
    pub gym_id: String,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub age: i32,
    pub gender: String, // male, female, other
    pub address: String,
    pub membership_type: String,
    pub start_date: NaiveDate,
    pub status: String, // pending, approved, member
    pub created_at: DateTime<Utc>,
}

pub struct NewCustomerParams {
    pub gym_id: String,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub age: i32,
    pub gender: String,
    pub address: String,
    pub membership_type: String,
    pub start_date: NaiveDate,
}

impl Customer {
    pub fn new(params: NewCustomerParams) -> Self {
        // Human-facing code shown to the walk-in after registration.
        let code: String = rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(8)
            .map(|c| (c as char).to_ascii_uppercase())
            .collect();

        Self {
            id: Uuid::new_v4().to_string(),
            customer_code: format!("GYM-{}", code),
            gym_id: params.gym_id,
            full_name: params.full_name,
            email: params.email,
            phone: params.phone,
            age: params.age,
            gender: params.gender,
            address: params.address,
            membership_type: params.membership_type,
            start_date: params.start_date,
            status: CUSTOMER_STATUS_PENDING.to_string(),
            created_at: Utc::now(),
        }
    }
}
