use axum::{extract::{State, Path}, response::IntoResponse, Json};
use chrono::Utc;
use crate::state::AppState;
use crate::api::extractors::{auth::AuthUser, gym::GymId};
use crate::api::dtos::requests::{CreateMemberRequest, UpdateMemberRequest};
use crate::api::handlers::parse_date;
use crate::domain::models::member::{Member, NewMemberParams};
use crate::domain::services::lifecycle;
use std::sync::Arc;
use crate::error::AppError;
use tracing::info;

pub async fn create_member(
    State(state): State<Arc<AppState>>,
    GymId(gym_id): GymId,
    _admin: AuthUser,
    Json(payload): Json<CreateMemberRequest>,
) -> Result<impl IntoResponse, AppError> {
    if payload.name.trim().is_empty() {
        return Err(AppError::Validation("name must not be empty".into()));
    }
    if !payload.email.contains('@') {
        return Err(AppError::Validation("invalid email address".into()));
    }

    let payment_due = payload.payment_due.unwrap_or(0);
    if payment_due < 0 {
        return Err(AppError::Validation("payment_due must not be negative".into()));
    }

    let start_date = parse_date(&payload.start_date)?;
    let derived = lifecycle::derive(&payload.plan, start_date, Utc::now().date_naive());

    let member = Member::new(NewMemberParams {
        gym_id,
        name: payload.name,
        phone: payload.phone,
        email: payload.email,
        address: payload.address,
        photo: payload.photo,
        plan: payload.plan,
        start_date,
        expiry_date: derived.expiry_date,
        status: derived.status.to_string(),
        payment_due,
    });

    let created = state.member_repo.create(&member).await?;
    info!("Member created: {}", created.id);

    Ok(Json(created))
}

pub async fn list_members(
    State(state): State<Arc<AppState>>,
    GymId(gym_id): GymId,
    _admin: AuthUser,
) -> Result<impl IntoResponse, AppError> {
    let members = state.member_repo.list(&gym_id).await?;
    Ok(Json(members))
}

pub async fn get_member(
    State(state): State<Arc<AppState>>,
    GymId(gym_id): GymId,
    _admin: AuthUser,
    Path((_, member_id)): Path<(String, String)>,
) -> Result<impl IntoResponse, AppError> {
    let member = state.member_repo.find_by_id(&gym_id, &member_id).await?
        .ok_or(AppError::NotFound("Member not found".into()))?;
    Ok(Json(member))
}

pub async fn update_member(
    State(state): State<Arc<AppState>>,
    GymId(gym_id): GymId,
    _admin: AuthUser,
    Path((_, member_id)): Path<(String, String)>,
    Json(payload): Json<UpdateMemberRequest>,
) -> Result<impl IntoResponse, AppError> {
    let mut member = state.member_repo.find_by_id(&gym_id, &member_id).await?
        .ok_or(AppError::NotFound("Member not found".into()))?;

    if let Some(name) = payload.name {
        member.name = name;
    }
    if let Some(phone) = payload.phone {
        member.phone = phone;
    }
    if let Some(email) = payload.email {
        if !email.contains('@') {
            return Err(AppError::Validation("invalid email address".into()));
        }
        member.email = email;
    }
    if let Some(address) = payload.address {
        member.address = Some(address);
    }
    if let Some(photo) = payload.photo {
        member.photo = Some(photo);
    }
    if let Some(payment_due) = payload.payment_due {
        if payment_due < 0 {
            return Err(AppError::Validation("payment_due must not be negative".into()));
        }
        member.payment_due = payment_due;
    }

    let plan_changed = payload.plan.is_some() || payload.start_date.is_some();
    if let Some(plan) = payload.plan {
        member.plan = plan;
    }
    if let Some(start_date) = payload.start_date {
        member.start_date = parse_date(&start_date)?;
    }

    // Status is never set directly; it always falls out of plan + dates.
    if plan_changed {
        let derived = lifecycle::derive(&member.plan, member.start_date, Utc::now().date_naive());
        member.expiry_date = derived.expiry_date;
        member.status = derived.status.to_string();
    }

    member.updated_at = Utc::now();
    let updated = state.member_repo.update(&member).await?;
    info!("Member updated: {}", member_id);

    Ok(Json(updated))
}

pub async fn delete_member(
    State(state): State<Arc<AppState>>,
    GymId(gym_id): GymId,
    _admin: AuthUser,
    Path((_, member_id)): Path<(String, String)>,
) -> Result<impl IntoResponse, AppError> {
    state.member_repo.delete(&gym_id, &member_id).await?;
    info!("Member deleted: {}", member_id);
    Ok(Json(serde_json::json!({"status": "deleted"})))
}
