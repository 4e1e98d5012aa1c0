use axum::{extract::{State, Path}, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::extractors::{auth::AuthUser, gym::GymId};
use crate::api::dtos::requests::{CreatePaymentRequest, UpdatePaymentRequest};
use crate::api::handlers::parse_date;
use crate::domain::models::payment::{MemberPayment, PaymentStatusChange, PAYMENT_STATUS_PAID};
use crate::domain::services::billing;
use std::sync::Arc;
use crate::error::AppError;
use tracing::info;

pub async fn create_payment(
    State(state): State<Arc<AppState>>,
    GymId(gym_id): GymId,
    _admin: AuthUser,
    Path((_, member_id)): Path<(String, String)>,
    Json(payload): Json<CreatePaymentRequest>,
) -> Result<impl IntoResponse, AppError> {
    state.member_repo.find_by_id(&gym_id, &member_id).await?
        .ok_or(AppError::NotFound("Member not found".into()))?;

    billing::validate_amount(payload.amount)?;
    billing::validate_type(&payload.payment_type)?;
    let status = payload.status.unwrap_or_else(|| PAYMENT_STATUS_PAID.to_string());
    billing::validate_status(&status)?;

    let payment = MemberPayment::new(
        member_id,
        parse_date(&payload.date)?,
        payload.amount,
        payload.payment_type,
        status,
        payload.description,
    );

    let created = state.payment_repo.create(&payment).await?;
    info!("Payment recorded: {} ({})", created.id, created.amount);

    Ok(Json(created))
}

pub async fn list_payments(
    State(state): State<Arc<AppState>>,
    GymId(gym_id): GymId,
    _admin: AuthUser,
    Path((_, member_id)): Path<(String, String)>,
) -> Result<impl IntoResponse, AppError> {
    state.member_repo.find_by_id(&gym_id, &member_id).await?
        .ok_or(AppError::NotFound("Member not found".into()))?;

    let payments = state.payment_repo.list_by_member(&member_id).await?;
    Ok(Json(payments))
}

pub async fn payment_summary(
    State(state): State<Arc<AppState>>,
    GymId(gym_id): GymId,
    _admin: AuthUser,
    Path((_, member_id)): Path<(String, String)>,
) -> Result<impl IntoResponse, AppError> {
    state.member_repo.find_by_id(&gym_id, &member_id).await?
        .ok_or(AppError::NotFound("Member not found".into()))?;

    // Always recomputed from the stored rows; nothing is cached.
    let payments = state.payment_repo.list_by_member(&member_id).await?;
    Ok(Json(billing::summarize(&payments)))
}

pub async fn update_payment(
    State(state): State<Arc<AppState>>,
    GymId(gym_id): GymId,
    _admin: AuthUser,
    Path((_, payment_id)): Path<(String, String)>,
    Json(payload): Json<UpdatePaymentRequest>,
) -> Result<impl IntoResponse, AppError> {
    let mut payment = state.payment_repo.find_by_id(&payment_id).await?
        .ok_or(AppError::NotFound("Payment not found".into()))?;
    state.member_repo.find_by_id(&gym_id, &payment.member_id).await?
        .ok_or(AppError::NotFound("Payment not found".into()))?;
    let old_status = payment.status.clone();

    if let Some(date) = payload.date {
        payment.date = parse_date(&date)?;
    }
    if let Some(amount) = payload.amount {
        billing::validate_amount(amount)?;
        payment.amount = amount;
    }
    if let Some(payment_type) = payload.payment_type {
        billing::validate_type(&payment_type)?;
        payment.payment_type = payment_type;
    }
    if let Some(status) = payload.status {
        billing::validate_status(&status)?;
        payment.status = status;
    }
    if let Some(description) = payload.description {
        payment.description = description;
    }

    // Any status move is allowed (admins correct bookkeeping mistakes), but
    // each one leaves an audit row behind.
    let audit = if payment.status != old_status {
        info!("Payment {} status: {} -> {}", payment_id, old_status, payment.status);
        Some(PaymentStatusChange::new(payment.id.clone(), old_status, payment.status.clone()))
    } else {
        None
    };

    let updated = state.payment_repo.update(&payment, audit.as_ref()).await?;
    Ok(Json(updated))
}

pub async fn delete_payment(
    State(state): State<Arc<AppState>>,
    GymId(gym_id): GymId,
    _admin: AuthUser,
    Path((_, payment_id)): Path<(String, String)>,
) -> Result<impl IntoResponse, AppError> {
    let payment = state.payment_repo.find_by_id(&payment_id).await?
        .ok_or(AppError::NotFound("Payment not found".into()))?;
    state.member_repo.find_by_id(&gym_id, &payment.member_id).await?
        .ok_or(AppError::NotFound("Payment not found".into()))?;

    state.payment_repo.delete(&payment_id).await?;
    info!("Payment deleted: {}", payment_id);
    Ok(Json(serde_json::json!({"status": "deleted"})))
}

pub async fn payment_history(
    State(state): State<Arc<AppState>>,
    GymId(gym_id): GymId,
    _admin: AuthUser,
    Path((_, payment_id)): Path<(String, String)>,
) -> Result<impl IntoResponse, AppError> {
    let payment = state.payment_repo.find_by_id(&payment_id).await?
        .ok_or(AppError::NotFound("Payment not found".into()))?;
    state.member_repo.find_by_id(&gym_id, &payment.member_id).await?
        .ok_or(AppError::NotFound("Payment not found".into()))?;

    let changes = state.payment_repo.list_status_changes(&payment_id).await?;
    Ok(Json(changes))
}
