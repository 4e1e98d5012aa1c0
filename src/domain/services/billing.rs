use serde::Serialize;

use crate::domain::models::payment::{MemberPayment, PAYMENT_STATUS_PAID, PAYMENT_STATUS_PENDING};
use crate::error::AppError;

pub const PAYMENT_STATUSES: [&str; 3] = ["paid", "pending", "failed"];
pub const PAYMENT_TYPES: [&str; 3] = ["membership", "pt", "product"];

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct PaymentSummary {
    pub total_received: i64,
    pub total_pending: i64,
}

/// Sum of paid amounts. Recomputed from the rows handed in every time;
/// order of the input is irrelevant.
pub fn total_received(payments: &[MemberPayment]) -> i64 {
    payments
        .iter()
        .filter(|p| p.status == PAYMENT_STATUS_PAID)
        .map(|p| p.amount)
        .sum()
}

pub fn total_pending(payments: &[MemberPayment]) -> i64 {
    payments
        .iter()
        .filter(|p| p.status == PAYMENT_STATUS_PENDING)
        .map(|p| p.amount)
        .sum()
}

pub fn summarize(payments: &[MemberPayment]) -> PaymentSummary {
    PaymentSummary {
        total_received: total_received(payments),
        total_pending: total_pending(payments),
    }
}

pub fn validate_amount(amount: i64) -> Result<(), AppError> {
    if amount <= 0 {
        return Err(AppError::Validation("payment amount must be positive".into()));
    }
    Ok(())
}

pub fn validate_status(status: &str) -> Result<(), AppError> {
    if !PAYMENT_STATUSES.contains(&status) {
        return Err(AppError::Validation(format!("unknown payment status: {}", status)));
    }
    Ok(())
}

pub fn validate_type(payment_type: &str) -> Result<(), AppError> {
    if !PAYMENT_TYPES.contains(&payment_type) {
        return Err(AppError::Validation(format!("unknown payment type: {}", payment_type)));
    }
    Ok(())
}
