use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{DateTime, Utc};
use sqlx::FromRow;

pub const TASK_STATUS_PENDING: &str = "pending";
pub const TASK_STATUS_COMPLETED: &str = "completed";

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct MemberTaskStep {
    pub id: String,
    pub member_id: String,
    pub step_count: i64,
    pub assigned_by_admin_id: Option<String>,
    pub assigned_at: DateTime<Utc>,
    pub status: String, // pending, completed
    pub notes: Option<String>,
    pub completed_at: Option<DateTime<Utc>>,
}

impl MemberTaskStep {
    pub fn new(
        member_id: String,
        step_count: i64,
        assigned_by_admin_id: Option<String>,
        notes: Option<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            member_id,
            step_count,
            assigned_by_admin_id,
            assigned_at: Utc::now(),
            status: TASK_STATUS_PENDING.to_string(),
            notes,
            completed_at: None,
        }
    }
}
