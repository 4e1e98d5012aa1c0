use chrono::NaiveDate;
use crate::error::AppError;

pub mod admin;
pub mod auth;
pub mod customer;
pub mod dashboard;
pub mod gym;
pub mod health;
pub mod member;
pub mod payment;
pub mod program;
pub mod task_step;

/// Dates arrive as `YYYY-MM-DD` strings; anything else is the caller's
/// mistake, never silently coerced to today.
pub(crate) fn parse_date(value: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|_| AppError::Validation(format!("invalid date: {}", value)))
}
