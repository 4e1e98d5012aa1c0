use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::FromRow;

pub const PAYMENT_STATUS_PAID: &str = "paid";
pub const PAYMENT_STATUS_PENDING: &str = "pending";
pub const PAYMENT_STATUS_FAILED: &str = "failed";

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct MemberPayment {
    pub id: String,
    pub member_id: String,
    pub date: NaiveDate,
    pub amount: i64,
    pub payment_type: String, // membership, pt, product
    pub status: String,       // paid, pending, failed
    pub description: String,
    pub created_at: DateTime<Utc>,
}

impl MemberPayment {
    pub fn new(
        member_id: String,
        date: NaiveDate,
        amount: i64,
        payment_type: String,
        status: String,
        description: String,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            member_id,
            date,
            amount,
            payment_type,
            status,
            description,
            created_at: Utc::now(),
        }
    }
}

/// Append-only audit row; one per payment status transition.
#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct PaymentStatusChange {
    pub id: String,
    pub payment_id: String,
    pub old_status: String,
    pub new_status: String,
    pub changed_at: DateTime<Utc>,
}

impl PaymentStatusChange {
    pub fn new(payment_id: String, old_status: String, new_status: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            payment_id,
            old_status,
            new_status,
            changed_at: Utc::now(),
        }
    }
}
