use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::FromRow;

pub const ASSIGNMENT_STATUS_ACTIVE: &str = "active";
pub const ASSIGNMENT_STATUS_COMPLETED: &str = "completed";
pub const ASSIGNMENT_STATUS_CANCELLED: &str = "cancelled";

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Trainer {
    pub id: String,
    pub gym_id: String,
    pub name: String,
    pub specialization: String,
    pub photo: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Trainer {
    pub fn new(gym_id: String, name: String, specialization: String, photo: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            gym_id,
            name,
            specialization,
            photo,
            created_at: Utc::now(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct DietPlan {
    pub id: String,
    pub gym_id: String,
    pub name: String,
    pub trainer_id: Option<String>,
    pub category: String,  // weight-loss, muscle-gain, maintenance, general
    pub diet_goal: String, // weight-loss, muscle-gain, maintenance, fat-loss, general-fitness
    pub diet_type: String, // vegetarian, non-vegetarian, vegan, keto, diabetic, gluten-free
    pub target_calories: i32,
    pub duration_days: i32,
    pub description: Option<String>,
    pub thumbnail: Option<String>,
    pub water_intake: Option<f64>,
    pub supplements_json: Option<String>,
    pub special_instructions: Option<String>,
    pub macros_calories: i32,
    pub macros_protein: i32,
    pub macros_carbs: i32,
    pub macros_fat: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct DietMeal {
    pub id: String,
    pub diet_plan_id: String,
    pub meal_time: String, // Breakfast, Lunch, Dinner, Snacks
    pub items_json: String,
}

impl DietMeal {
    pub fn items(&self) -> Vec<FoodItem> {
        serde_json::from_str(&self.items_json).unwrap_or_default()
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct FoodItem {
    pub name: String,
    pub quantity: String,
    pub calories: i32,
    pub protein: i32,
    pub carbs: i32,
    pub fat: i32,
}

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Workout {
    pub id: String,
    pub gym_id: String,
    pub name: String,
    pub trainer_id: Option<String>,
    pub body_part: String,  // chest, back, legs, arms, shoulders, core, full-body
    pub difficulty: String, // beginner, intermediate, advanced
    pub equipment: String,  // free-weights, machines, bodyweight, mixed
    pub duration_min: i32,
    pub thumbnail: Option<String>,
    pub video_url: Option<String>,
    pub usage_count: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct WorkoutExercise {
    pub id: String,
    pub workout_id: String,
    pub name: String,
    pub sets: i32,
    pub reps: String,
    pub rest: String,
    pub notes: Option<String>,
    pub order_index: i32,
}

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct DietAssignment {
    pub id: String,
    pub diet_plan_id: String,
    pub member_id: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub status: String, // active, completed, cancelled
    pub created_at: DateTime<Utc>,
}

impl DietAssignment {
    pub fn new(diet_plan_id: String, member_id: String, start_date: NaiveDate, end_date: NaiveDate) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            diet_plan_id,
            member_id,
            start_date,
            end_date,
            status: ASSIGNMENT_STATUS_ACTIVE.to_string(),
            created_at: Utc::now(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct WorkoutAssignment {
    pub id: String,
    pub workout_id: String,
    pub member_id: String,
    pub assigned_at: DateTime<Utc>,
    pub status: String, // active, completed, cancelled
}

impl WorkoutAssignment {
    pub fn new(workout_id: String, member_id: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            workout_id,
            member_id,
            assigned_at: Utc::now(),
            status: ASSIGNMENT_STATUS_ACTIVE.to_string(),
        }
    }
}
