use axum::{extract::{State, Path}, http::header, response::IntoResponse, Json};
use chrono::Utc;
use crate::state::AppState;
use crate::api::extractors::{auth::AuthUser, gym::GymId};
use crate::api::dtos::requests::{RegisterCustomerRequest, UpdateCustomerStatusRequest};
use crate::api::handlers::parse_date;
use crate::domain::models::customer::{
    Customer, NewCustomerParams, CUSTOMER_STATUS_APPROVED, CUSTOMER_STATUS_MEMBER,
    CUSTOMER_STATUS_PENDING,
};
use crate::domain::services::conversion;
use crate::domain::services::lifecycle::MembershipPlan;
use std::sync::Arc;
use crate::error::AppError;
use tracing::info;

fn validate_registration(payload: &RegisterCustomerRequest) -> Result<(), AppError> {
    if payload.full_name.trim().len() < 2 {
        return Err(AppError::Validation("name must be at least 2 characters".into()));
    }
    if !payload.email.contains('@') {
        return Err(AppError::Validation("invalid email address".into()));
    }
    if payload.phone.is_empty()
        || !payload.phone.chars().all(|c| c.is_ascii_digit() || " +-()".contains(c))
    {
        return Err(AppError::Validation("invalid phone number".into()));
    }
    if !(10..=100).contains(&payload.age) {
        return Err(AppError::Validation("age must be between 10 and 100".into()));
    }
    if !["male", "female", "other"].contains(&payload.gender.as_str()) {
        return Err(AppError::Validation(format!("unknown gender: {}", payload.gender)));
    }
    if payload.address.trim().len() < 5 {
        return Err(AppError::Validation("address must be at least 5 characters".into()));
    }
    if MembershipPlan::parse(&payload.membership_type).is_none() {
        return Err(AppError::Validation(format!("unknown membership type: {}", payload.membership_type)));
    }
    Ok(())
}

/// Public intake endpoint; the QR code on the front desk points here.
pub async fn register_customer(
    State(state): State<Arc<AppState>>,
    GymId(gym_id): GymId,
    Json(payload): Json<RegisterCustomerRequest>,
) -> Result<impl IntoResponse, AppError> {
    validate_registration(&payload)?;
    let start_date = parse_date(&payload.start_date)?;

    let customer = Customer::new(NewCustomerParams {
        gym_id,
        full_name: payload.full_name,
        email: payload.email,
        phone: payload.phone,
        age: payload.age,
        gender: payload.gender,
        address: payload.address,
        membership_type: payload.membership_type,
        start_date,
    });

    let created = state.customer_repo.create(&customer).await?;
    info!("Customer registered: {} ({})", created.id, created.customer_code);

    Ok(Json(created))
}

pub async fn list_customers(
    State(state): State<Arc<AppState>>,
    GymId(gym_id): GymId,
    _admin: AuthUser,
) -> Result<impl IntoResponse, AppError> {
    let customers = state.customer_repo.list(&gym_id).await?;
    Ok(Json(customers))
}

fn csv_escape(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

pub async fn export_customers(
    State(state): State<Arc<AppState>>,
    GymId(gym_id): GymId,
    _admin: AuthUser,
) -> Result<impl IntoResponse, AppError> {
    let customers = state.customer_repo.list(&gym_id).await?;

    let mut csv = String::from("Customer ID,Full Name,Email,Phone,Age,Gender,Address,Membership Type,Start Date,Status,Registered\n");
    for c in &customers {
        let row = [
            c.customer_code.as_str(),
            c.full_name.as_str(),
            c.email.as_str(),
            c.phone.as_str(),
            &c.age.to_string(),
            c.gender.as_str(),
            c.address.as_str(),
            c.membership_type.as_str(),
            &c.start_date.to_string(),
            c.status.as_str(),
            &c.created_at.to_rfc3339(),
        ]
        .map(csv_escape)
        .join(",");
        csv.push_str(&row);
        csv.push('\n');
    }

    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8"),
            (header::CONTENT_DISPOSITION, "attachment; filename=\"customers.csv\""),
        ],
        csv,
    ))
}

pub async fn update_customer_status(
    State(state): State<Arc<AppState>>,
    GymId(gym_id): GymId,
    _admin: AuthUser,
    Path((_, customer_id)): Path<(String, String)>,
    Json(payload): Json<UpdateCustomerStatusRequest>,
) -> Result<impl IntoResponse, AppError> {
    if payload.status != CUSTOMER_STATUS_PENDING && payload.status != CUSTOMER_STATUS_APPROVED {
        return Err(AppError::Validation(
            "status must be 'pending' or 'approved'; use the convert endpoint to make a member".into(),
        ));
    }

    let customer = state.customer_repo.find_by_id(&gym_id, &customer_id).await?
        .ok_or(AppError::NotFound("Customer not found".into()))?;

    // Conversion is terminal; a member never goes back to the intake queue.
    if customer.status == CUSTOMER_STATUS_MEMBER {
        return Err(AppError::AlreadyConverted);
    }

    let updated = state.customer_repo.update_status(&gym_id, &customer_id, &payload.status).await?;
    info!("Customer {} status: {} -> {}", customer_id, customer.status, updated.status);

    Ok(Json(updated))
}

pub async fn convert_customer(
    State(state): State<Arc<AppState>>,
    GymId(gym_id): GymId,
    _admin: AuthUser,
    Path((_, customer_id)): Path<(String, String)>,
) -> Result<impl IntoResponse, AppError> {
    let customer = state.customer_repo.find_by_id(&gym_id, &customer_id).await?
        .ok_or(AppError::NotFound("Customer not found".into()))?;

    let member = conversion::member_from_customer(&customer, Utc::now().date_naive())?;
    let created = state.customer_repo.convert_to_member(&customer.id, &member).await?;

    info!("Member created from conversion: {}", created.id);
    info!("Customer {} status: {} -> member", customer.id, customer.status);

    Ok(Json(created))
}
