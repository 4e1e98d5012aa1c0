use axum::{extract::State, response::IntoResponse, Json};
use chrono::Utc;
use crate::state::AppState;
use crate::api::extractors::{auth::AuthUser, gym::GymId};
use crate::domain::services::stats;
use std::sync::Arc;
use crate::error::AppError;

pub async fn get_stats(
    State(state): State<Arc<AppState>>,
    GymId(gym_id): GymId,
    _admin: AuthUser,
) -> Result<impl IntoResponse, AppError> {
    let members = state.member_repo.list(&gym_id).await?;
    let customers = state.customer_repo.list(&gym_id).await?;
    let workouts = state.program_repo.list_workouts(&gym_id).await?;
    let diet_plans = state.program_repo.list_diet_plans(&gym_id).await?;

    let today = Utc::now().date_naive();

    Ok(Json(serde_json::json!({
        "members": stats::member_stats(&members),
        "customers": stats::customer_stats(&customers, today),
        "total_diet_plans": diet_plans.len(),
        "total_workouts": workouts.len(),
        "avg_workout_duration_min": stats::avg_workout_duration(&workouts),
        "popular_workouts": stats::workout_popularity(&workouts),
    })))
}
