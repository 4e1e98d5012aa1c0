use axum::{extract::{State, Path}, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::extractors::{auth::AuthUser, gym::GymId};
use crate::api::dtos::requests::CreateAdminRequest;
use crate::domain::models::user::{AdminUser, ROLE_ADMIN, ROLE_STAFF};
use std::sync::Arc;
use crate::error::AppError;
use argon2::{password_hash::{SaltString, PasswordHasher}, Argon2};
use rand::rngs::OsRng;
use tracing::{info, error};

pub async fn create_admin(
    State(state): State<Arc<AppState>>,
    GymId(gym_id): GymId,
    requester: AuthUser,
    Json(payload): Json<CreateAdminRequest>,
) -> Result<impl IntoResponse, AppError> {
    // Only admins can grant access to the dashboard.
    if requester.0.role != ROLE_ADMIN {
        return Err(AppError::Forbidden("Only admins can grant admin access".into()));
    }

    let role = payload.role.unwrap_or_else(|| ROLE_STAFF.to_string());
    if role != ROLE_ADMIN && role != ROLE_STAFF {
        return Err(AppError::Validation(format!("unknown role: {}", role)));
    }

    if state.admin_repo.find_by_username(&gym_id, &payload.username).await?.is_some() {
        return Err(AppError::Conflict("Username already exists".into()));
    }

    let salt = SaltString::generate(&mut OsRng);
    let password_hash = Argon2::default()
        .hash_password(payload.password.as_bytes(), &salt)
        .map_err(|_| AppError::Internal)?
        .to_string();

    let user = AdminUser::new(gym_id, payload.username, password_hash, role);
    let created = state.admin_repo.create(&user).await?;

    info!("Created admin user: {}", created.id);

    Ok(Json(serde_json::json!({
        "id": created.id,
        "username": created.username,
        "role": created.role,
        "created_at": created.created_at
    })))
}

pub async fn list_admins(
    State(state): State<Arc<AppState>>,
    GymId(gym_id): GymId,
    _requester: AuthUser,
) -> Result<impl IntoResponse, AppError> {
    let admins = state.admin_repo.list_by_gym(&gym_id).await?;
    let safe_admins: Vec<_> = admins.into_iter().map(|u| serde_json::json!({
        "id": u.id,
        "username": u.username,
        "role": u.role,
        "created_at": u.created_at
    })).collect();

    Ok(Json(safe_admins))
}

pub async fn delete_admin(
    State(state): State<Arc<AppState>>,
    GymId(gym_id): GymId,
    requester: AuthUser,
    Path((_, user_id)): Path<(String, String)>,
) -> Result<impl IntoResponse, AppError> {
    if requester.0.role != ROLE_ADMIN {
        return Err(AppError::Forbidden("Only admins can revoke access".into()));
    }

    if requester.0.id == user_id {
        return Err(AppError::Conflict("Cannot delete yourself".into()));
    }

    let target = state.admin_repo.find_by_id(&gym_id, &user_id).await?
        .ok_or(AppError::NotFound("User not found".into()))?;

    match state.admin_repo.delete(&gym_id, &target.id).await {
        Ok(_) => {
            info!("Deleted admin user {}", user_id);
            Ok(Json(serde_json::json!({"status": "deleted"})))
        },
        Err(e) => {
            error!("Failed to delete admin user {}: {:?}", user_id, e);
            Err(e)
        }
    }
}
