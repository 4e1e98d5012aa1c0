use chrono::NaiveDate;

use crate::domain::models::customer::{Customer, CUSTOMER_STATUS_MEMBER};
use crate::domain::models::member::{Member, NewMemberParams};
use crate::domain::services::lifecycle;
use crate::error::AppError;

/// Builds the Member a customer converts into. Pure: all persistence (the
/// conditional status mark plus the member insert, in one transaction) is the
/// repository's job. Fails before anything is written if the customer is
/// already converted or has no usable email.
pub fn member_from_customer(customer: &Customer, today: NaiveDate) -> Result<Member, AppError> {
    if customer.status == CUSTOMER_STATUS_MEMBER {
        return Err(AppError::AlreadyConverted);
    }

    if !customer.email.contains('@') {
        return Err(AppError::Precondition("customer lacks valid email".into()));
    }

    let derived = lifecycle::derive(&customer.membership_type, customer.start_date, today);

    Ok(Member::new(NewMemberParams {
        gym_id: customer.gym_id.clone(),
        name: customer.full_name.clone(),
        phone: customer.phone.clone(),
        email: customer.email.clone(),
        address: Some(customer.address.clone()),
        photo: None,
        plan: customer.membership_type.clone(),
        start_date: customer.start_date,
        expiry_date: derived.expiry_date,
        status: derived.status.to_string(),
        payment_due: 0,
    }))
}
