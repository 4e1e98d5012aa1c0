use axum::{extract::{State, Path, Query}, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::extractors::{auth::AuthUser, gym::GymId};
use crate::api::dtos::requests::{AssignTaskRequest, TaskListQuery};
use crate::domain::models::task_step::{MemberTaskStep, TASK_STATUS_COMPLETED, TASK_STATUS_PENDING};
use crate::domain::services::task_steps;
use std::sync::Arc;
use crate::error::AppError;
use tracing::info;

pub async fn assign_task(
    State(state): State<Arc<AppState>>,
    GymId(gym_id): GymId,
    admin: AuthUser,
    Path((_, member_id)): Path<(String, String)>,
    Json(payload): Json<AssignTaskRequest>,
) -> Result<impl IntoResponse, AppError> {
    task_steps::validate_step_count(payload.step_count)?;

    state.member_repo.find_by_id(&gym_id, &member_id).await?
        .ok_or(AppError::NotFound("Member not found".into()))?;

    let task = MemberTaskStep::new(member_id, payload.step_count, Some(admin.0.id), payload.notes);
    let created = state.task_repo.create(&task).await?;

    info!("Assigned {} steps task: {}", created.step_count, created.id);

    Ok(Json(created))
}

pub async fn list_tasks(
    State(state): State<Arc<AppState>>,
    GymId(gym_id): GymId,
    _admin: AuthUser,
    Path((_, member_id)): Path<(String, String)>,
    Query(query): Query<TaskListQuery>,
) -> Result<impl IntoResponse, AppError> {
    state.member_repo.find_by_id(&gym_id, &member_id).await?
        .ok_or(AppError::NotFound("Member not found".into()))?;

    if let Some(ref status) = query.status {
        if status != TASK_STATUS_PENDING && status != TASK_STATUS_COMPLETED {
            return Err(AppError::Validation(format!("unknown task status: {}", status)));
        }
    }

    let tasks = state.task_repo.list_by_member(&member_id, query.status.as_deref()).await?;
    Ok(Json(tasks))
}

pub async fn task_summary(
    State(state): State<Arc<AppState>>,
    GymId(gym_id): GymId,
    _admin: AuthUser,
    Path((_, member_id)): Path<(String, String)>,
) -> Result<impl IntoResponse, AppError> {
    state.member_repo.find_by_id(&gym_id, &member_id).await?
        .ok_or(AppError::NotFound("Member not found".into()))?;

    let tasks = state.task_repo.list_by_member(&member_id, None).await?;
    Ok(Json(task_steps::pending_summary(&tasks)))
}

pub async fn complete_task(
    State(state): State<Arc<AppState>>,
    GymId(gym_id): GymId,
    _admin: AuthUser,
    Path((_, task_id)): Path<(String, String)>,
) -> Result<impl IntoResponse, AppError> {
    let task = state.task_repo.find_by_id(&task_id).await?
        .ok_or(AppError::NotFound("Task not found".into()))?;
    state.member_repo.find_by_id(&gym_id, &task.member_id).await?
        .ok_or(AppError::NotFound("Task not found".into()))?;

    let completed = state.task_repo.complete(&task_id).await?;
    info!("Task completed: {}", task_id);
    Ok(Json(completed))
}

pub async fn delete_task(
    State(state): State<Arc<AppState>>,
    GymId(gym_id): GymId,
    _admin: AuthUser,
    Path((_, task_id)): Path<(String, String)>,
) -> Result<impl IntoResponse, AppError> {
    let task = state.task_repo.find_by_id(&task_id).await?
        .ok_or(AppError::NotFound("Task not found".into()))?;
    state.member_repo.find_by_id(&gym_id, &task.member_id).await?
        .ok_or(AppError::NotFound("Task not found".into()))?;

    state.task_repo.delete(&task_id).await?;
    info!("Task deleted: {}", task_id);
    Ok(Json(serde_json::json!({"status": "deleted"})))
}
