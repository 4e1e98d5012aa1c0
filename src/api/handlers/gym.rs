use axum::{extract::{State, Path}, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::dtos::{
    requests::{CreateGymRequest, UpdateGymRequest},
    responses::GymCreatedResponse
};
use crate::api::extractors::auth::AuthUser;
use crate::domain::models::{gym::Gym, user::{AdminUser, ROLE_ADMIN}};
use std::sync::Arc;
use crate::error::AppError;
use rand::{distributions::Alphanumeric, Rng};
use argon2::{password_hash::SaltString, Argon2, PasswordHasher};
use tracing::info;

pub async fn create_gym(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateGymRequest>,
) -> Result<impl IntoResponse, AppError> {
    let mut gym = Gym::new(payload.name, payload.slug);
    if let Some(logo) = payload.logo_url {
        gym.logo_url = Some(logo);
    }

    let created_gym = state.gym_repo.create(&gym).await?;

    info!("Gym created: {}", created_gym.id);

    // The first admin is created with the gym; everyone later is granted
    // by an existing admin.
    let admin_password: String = rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(16)
        .map(char::from)
        .collect();

    let salt = SaltString::generate(&mut rand::thread_rng());
    let password_hash = Argon2::default()
        .hash_password(admin_password.as_bytes(), &salt)
        .map_err(|_| AppError::Internal)?
        .to_string();

    let admin_user = AdminUser::new(created_gym.id.clone(), "admin".to_string(), password_hash, ROLE_ADMIN.to_string());
    state.admin_repo.create(&admin_user).await?;

    Ok(Json(GymCreatedResponse {
        gym_id: created_gym.id,
        admin_username: "admin".to_string(),
        admin_secret: admin_password,
    }))
}

pub async fn get_gym_by_slug(
    State(state): State<Arc<AppState>>,
    Path(slug): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let gym = state.gym_repo.find_by_slug(&slug).await?
        .ok_or(AppError::NotFound("Gym not found".into()))?;

    Ok(Json(gym))
}

pub async fn update_gym(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
    Json(payload): Json<UpdateGymRequest>,
) -> Result<impl IntoResponse, AppError> {
    let gym_id = user.0.gym_id;
    let mut gym = state.gym_repo.find_by_id(&gym_id).await?
        .ok_or(AppError::NotFound("Gym not found".into()))?;

    if let Some(name) = payload.name {
        gym.name = name;
    }
    if let Some(logo) = payload.logo_url {
        gym.logo_url = Some(logo);
    }
    if let Some(color) = payload.primary_color {
        gym.primary_color = color;
    }
    if let Some(color) = payload.secondary_color {
        gym.secondary_color = color;
    }
    if let Some(address) = payload.address {
        gym.address = Some(address);
    }
    if let Some(contact) = payload.contact_number {
        gym.contact_number = Some(contact);
    }
    if let Some(url) = payload.website_url {
        gym.website_url = Some(url);
    }

    let updated = state.gym_repo.update(&gym).await?;
    info!("Gym branding updated: {}", gym_id);
    Ok(Json(updated))
}

pub async fn get_current_gym(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
) -> Result<impl IntoResponse, AppError> {
    let gym_id = user.0.gym_id;
    let gym = state.gym_repo.find_by_id(&gym_id).await?
        .ok_or(AppError::NotFound("Gym not found".into()))?;
    Ok(Json(gym))
}
