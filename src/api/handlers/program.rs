use axum::{extract::{State, Path}, response::IntoResponse, Json};
use chrono::Utc;
use crate::state::AppState;
use crate::api::extractors::{auth::AuthUser, gym::GymId};
use crate::api::dtos::requests::{
    AssignDietRequest, AssignWorkoutRequest, CreateDietPlanRequest, CreateTrainerRequest,
    CreateWorkoutRequest, UpdateDietPlanRequest, UpdateWorkoutRequest,
};
use crate::api::handlers::parse_date;
use crate::domain::models::program::{
    DietAssignment, DietMeal, DietPlan, Trainer, Workout, WorkoutAssignment, WorkoutExercise,
};
use std::sync::Arc;
use crate::error::AppError;
use tracing::info;
use uuid::Uuid;

pub async fn create_trainer(
    State(state): State<Arc<AppState>>,
    GymId(gym_id): GymId,
    _admin: AuthUser,
    Json(payload): Json<CreateTrainerRequest>,
) -> Result<impl IntoResponse, AppError> {
    let trainer = Trainer::new(gym_id, payload.name, payload.specialization, payload.photo);
    let created = state.program_repo.create_trainer(&trainer).await?;
    info!("Trainer created: {}", created.id);
    Ok(Json(created))
}

pub async fn list_trainers(
    State(state): State<Arc<AppState>>,
    GymId(gym_id): GymId,
    _admin: AuthUser,
) -> Result<impl IntoResponse, AppError> {
    let trainers = state.program_repo.list_trainers(&gym_id).await?;
    Ok(Json(trainers))
}

pub async fn create_diet_plan(
    State(state): State<Arc<AppState>>,
    GymId(gym_id): GymId,
    _admin: AuthUser,
    Json(payload): Json<CreateDietPlanRequest>,
) -> Result<impl IntoResponse, AppError> {
    if payload.target_calories <= 0 {
        return Err(AppError::Validation("target_calories must be positive".into()));
    }
    if payload.duration_days <= 0 {
        return Err(AppError::Validation("duration_days must be positive".into()));
    }

    let supplements_json = match &payload.supplements {
        Some(list) => Some(serde_json::to_string(list).map_err(|_| AppError::Internal)?),
        None => None,
    };
    let macros = payload.macros.unwrap_or_default();

    let now = Utc::now();
    let plan = DietPlan {
        id: Uuid::new_v4().to_string(),
        gym_id,
        name: payload.name,
        trainer_id: payload.trainer_id,
        category: payload.category,
        diet_goal: payload.diet_goal,
        diet_type: payload.diet_type,
        target_calories: payload.target_calories,
        duration_days: payload.duration_days,
        description: payload.description,
        thumbnail: payload.thumbnail,
        water_intake: payload.water_intake,
        supplements_json,
        special_instructions: payload.special_instructions,
        macros_calories: macros.calories,
        macros_protein: macros.protein,
        macros_carbs: macros.carbs,
        macros_fat: macros.fat,
        created_at: now,
        updated_at: now,
    };

    let mut meals = Vec::with_capacity(payload.meals.len());
    for meal in &payload.meals {
        meals.push(DietMeal {
            id: Uuid::new_v4().to_string(),
            diet_plan_id: plan.id.clone(),
            meal_time: meal.meal_time.clone(),
            items_json: serde_json::to_string(&meal.items).map_err(|_| AppError::Internal)?,
        });
    }

    let created = state.program_repo.create_diet_plan(&plan, &meals).await?;
    info!("Diet plan created: {}", created.id);

    Ok(Json(created))
}

pub async fn list_diet_plans(
    State(state): State<Arc<AppState>>,
    GymId(gym_id): GymId,
    _admin: AuthUser,
) -> Result<impl IntoResponse, AppError> {
    let plans = state.program_repo.list_diet_plans(&gym_id).await?;
    Ok(Json(plans))
}

pub async fn get_diet_plan(
    State(state): State<Arc<AppState>>,
    GymId(gym_id): GymId,
    _admin: AuthUser,
    Path((_, plan_id)): Path<(String, String)>,
) -> Result<impl IntoResponse, AppError> {
    let plan = state.program_repo.find_diet_plan(&gym_id, &plan_id).await?
        .ok_or(AppError::NotFound("Diet plan not found".into()))?;
    let meals = state.program_repo.list_meals(&plan.id).await?;

    let meals_json: Vec<_> = meals.iter().map(|m| serde_json::json!({
        "id": m.id,
        "meal_time": m.meal_time,
        "items": m.items(),
    })).collect();

    Ok(Json(serde_json::json!({
        "plan": plan,
        "meals": meals_json,
    })))
}

pub async fn update_diet_plan(
    State(state): State<Arc<AppState>>,
    GymId(gym_id): GymId,
    _admin: AuthUser,
    Path((_, plan_id)): Path<(String, String)>,
    Json(payload): Json<UpdateDietPlanRequest>,
) -> Result<impl IntoResponse, AppError> {
    let mut plan = state.program_repo.find_diet_plan(&gym_id, &plan_id).await?
        .ok_or(AppError::NotFound("Diet plan not found".into()))?;

    if let Some(name) = payload.name {
        plan.name = name;
    }
    if let Some(trainer_id) = payload.trainer_id {
        plan.trainer_id = Some(trainer_id);
    }
    if let Some(category) = payload.category {
        plan.category = category;
    }
    if let Some(goal) = payload.diet_goal {
        plan.diet_goal = goal;
    }
    if let Some(diet_type) = payload.diet_type {
        plan.diet_type = diet_type;
    }
    if let Some(calories) = payload.target_calories {
        if calories <= 0 {
            return Err(AppError::Validation("target_calories must be positive".into()));
        }
        plan.target_calories = calories;
    }
    if let Some(days) = payload.duration_days {
        if days <= 0 {
            return Err(AppError::Validation("duration_days must be positive".into()));
        }
        plan.duration_days = days;
    }
    if let Some(description) = payload.description {
        plan.description = Some(description);
    }
    if let Some(thumbnail) = payload.thumbnail {
        plan.thumbnail = Some(thumbnail);
    }
    if let Some(water) = payload.water_intake {
        plan.water_intake = Some(water);
    }
    if let Some(supplements) = payload.supplements {
        plan.supplements_json = Some(serde_json::to_string(&supplements).map_err(|_| AppError::Internal)?);
    }
    if let Some(instructions) = payload.special_instructions {
        plan.special_instructions = Some(instructions);
    }
    if let Some(macros) = payload.macros {
        plan.macros_calories = macros.calories;
        plan.macros_protein = macros.protein;
        plan.macros_carbs = macros.carbs;
        plan.macros_fat = macros.fat;
    }

    plan.updated_at = Utc::now();
    let updated = state.program_repo.update_diet_plan(&plan).await?;
    info!("Diet plan updated: {}", plan_id);

    Ok(Json(updated))
}

pub async fn delete_diet_plan(
    State(state): State<Arc<AppState>>,
    GymId(gym_id): GymId,
    _admin: AuthUser,
    Path((_, plan_id)): Path<(String, String)>,
) -> Result<impl IntoResponse, AppError> {
    state.program_repo.delete_diet_plan(&gym_id, &plan_id).await?;
    info!("Diet plan deleted: {}", plan_id);
    Ok(Json(serde_json::json!({"status": "deleted"})))
}

pub async fn assign_diet_plan(
    State(state): State<Arc<AppState>>,
    GymId(gym_id): GymId,
    _admin: AuthUser,
    Path((_, plan_id)): Path<(String, String)>,
    Json(payload): Json<AssignDietRequest>,
) -> Result<impl IntoResponse, AppError> {
    state.program_repo.find_diet_plan(&gym_id, &plan_id).await?
        .ok_or(AppError::NotFound("Diet plan not found".into()))?;
    state.member_repo.find_by_id(&gym_id, &payload.member_id).await?
        .ok_or(AppError::NotFound("Member not found".into()))?;

    let start_date = parse_date(&payload.start_date)?;
    let end_date = parse_date(&payload.end_date)?;
    if end_date < start_date {
        return Err(AppError::Validation("end_date must not be before start_date".into()));
    }

    let assignment = DietAssignment::new(plan_id, payload.member_id, start_date, end_date);
    let created = state.program_repo.assign_diet(&assignment).await?;
    info!("Diet plan assigned: {}", created.id);

    Ok(Json(created))
}

pub async fn create_workout(
    State(state): State<Arc<AppState>>,
    GymId(gym_id): GymId,
    _admin: AuthUser,
    Json(payload): Json<CreateWorkoutRequest>,
) -> Result<impl IntoResponse, AppError> {
    if payload.duration_min <= 0 {
        return Err(AppError::Validation("duration_min must be positive".into()));
    }

    let now = Utc::now();
    let workout = Workout {
        id: Uuid::new_v4().to_string(),
        gym_id,
        name: payload.name,
        trainer_id: payload.trainer_id,
        body_part: payload.body_part,
        difficulty: payload.difficulty,
        equipment: payload.equipment,
        duration_min: payload.duration_min,
        thumbnail: payload.thumbnail,
        video_url: payload.video_url,
        usage_count: 0,
        created_at: now,
        updated_at: now,
    };

    let mut exercises = Vec::with_capacity(payload.exercises.len());
    for (index, exercise) in payload.exercises.iter().enumerate() {
        if exercise.sets <= 0 {
            return Err(AppError::Validation("exercise sets must be positive".into()));
        }
        exercises.push(WorkoutExercise {
            id: Uuid::new_v4().to_string(),
            workout_id: workout.id.clone(),
            name: exercise.name.clone(),
            sets: exercise.sets,
            reps: exercise.reps.clone(),
            rest: exercise.rest.clone(),
            notes: exercise.notes.clone(),
            order_index: index as i32,
        });
    }

    let created = state.program_repo.create_workout(&workout, &exercises).await?;
    info!("Workout created: {}", created.id);

    Ok(Json(created))
}

pub async fn list_workouts(
    State(state): State<Arc<AppState>>,
    GymId(gym_id): GymId,
    _admin: AuthUser,
) -> Result<impl IntoResponse, AppError> {
    let workouts = state.program_repo.list_workouts(&gym_id).await?;
    Ok(Json(workouts))
}

pub async fn get_workout(
    State(state): State<Arc<AppState>>,
    GymId(gym_id): GymId,
    _admin: AuthUser,
    Path((_, workout_id)): Path<(String, String)>,
) -> Result<impl IntoResponse, AppError> {
    let workout = state.program_repo.find_workout(&gym_id, &workout_id).await?
        .ok_or(AppError::NotFound("Workout not found".into()))?;
    let exercises = state.program_repo.list_exercises(&workout.id).await?;

    Ok(Json(serde_json::json!({
        "workout": workout,
        "exercises": exercises,
    })))
}

pub async fn update_workout(
    State(state): State<Arc<AppState>>,
    GymId(gym_id): GymId,
    _admin: AuthUser,
    Path((_, workout_id)): Path<(String, String)>,
    Json(payload): Json<UpdateWorkoutRequest>,
) -> Result<impl IntoResponse, AppError> {
    let mut workout = state.program_repo.find_workout(&gym_id, &workout_id).await?
        .ok_or(AppError::NotFound("Workout not found".into()))?;

    if let Some(name) = payload.name {
        workout.name = name;
    }
    if let Some(trainer_id) = payload.trainer_id {
        workout.trainer_id = Some(trainer_id);
    }
    if let Some(body_part) = payload.body_part {
        workout.body_part = body_part;
    }
    if let Some(difficulty) = payload.difficulty {
        workout.difficulty = difficulty;
    }
    if let Some(equipment) = payload.equipment {
        workout.equipment = equipment;
    }
    if let Some(duration) = payload.duration_min {
        if duration <= 0 {
            return Err(AppError::Validation("duration_min must be positive".into()));
        }
        workout.duration_min = duration;
    }
    if let Some(thumbnail) = payload.thumbnail {
        workout.thumbnail = Some(thumbnail);
    }
    if let Some(video_url) = payload.video_url {
        workout.video_url = Some(video_url);
    }

    workout.updated_at = Utc::now();
    let updated = state.program_repo.update_workout(&workout).await?;
    info!("Workout updated: {}", workout_id);

    Ok(Json(updated))
}

pub async fn delete_workout(
    State(state): State<Arc<AppState>>,
    GymId(gym_id): GymId,
    _admin: AuthUser,
    Path((_, workout_id)): Path<(String, String)>,
) -> Result<impl IntoResponse, AppError> {
    state.program_repo.delete_workout(&gym_id, &workout_id).await?;
    info!("Workout deleted: {}", workout_id);
    Ok(Json(serde_json::json!({"status": "deleted"})))
}

pub async fn assign_workout(
    State(state): State<Arc<AppState>>,
    GymId(gym_id): GymId,
    _admin: AuthUser,
    Path((_, workout_id)): Path<(String, String)>,
    Json(payload): Json<AssignWorkoutRequest>,
) -> Result<impl IntoResponse, AppError> {
    state.program_repo.find_workout(&gym_id, &workout_id).await?
        .ok_or(AppError::NotFound("Workout not found".into()))?;
    state.member_repo.find_by_id(&gym_id, &payload.member_id).await?
        .ok_or(AppError::NotFound("Member not found".into()))?;

    let assignment = WorkoutAssignment::new(workout_id, payload.member_id);
    let created = state.program_repo.assign_workout(&assignment).await?;
    info!("Workout assigned: {}", created.id);

    Ok(Json(created))
}

pub async fn member_programs(
    State(state): State<Arc<AppState>>,
    GymId(gym_id): GymId,
    _admin: AuthUser,
    Path((_, member_id)): Path<(String, String)>,
) -> Result<impl IntoResponse, AppError> {
    state.member_repo.find_by_id(&gym_id, &member_id).await?
        .ok_or(AppError::NotFound("Member not found".into()))?;

    let diet_assignments = state.program_repo.list_diet_assignments(&member_id).await?;
    let workout_assignments = state.program_repo.list_workout_assignments(&member_id).await?;

    Ok(Json(serde_json::json!({
        "diet_assignments": diet_assignments,
        "workout_assignments": workout_assignments,
    })))
}
