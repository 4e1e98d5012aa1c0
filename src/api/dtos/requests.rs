use crate::domain::models::program::FoodItem;
use serde::Deserialize;

#[derive(Deserialize)]
pub struct CreateGymRequest {
    pub name: String,
    pub slug: String,
    pub logo_url: Option<String>,
}

#[derive(Deserialize)]
pub struct UpdateGymRequest {
    pub name: Option<String>,
    pub logo_url: Option<String>,
    pub primary_color: Option<String>,
    pub secondary_color: Option<String>,
    pub address: Option<String>,
    pub contact_number: Option<String>,
    pub website_url: Option<String>,
}

#[derive(Deserialize)]
pub struct CreateAdminRequest {
    pub username: String,
    pub password: String,
    pub role: Option<String>,
}

#[derive(Deserialize)]
pub struct CreateMemberRequest {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub address: Option<String>,
    pub photo: Option<String>,
    pub plan: String,
    pub start_date: String,
    pub payment_due: Option<i64>,
}

#[derive(Deserialize)]
pub struct UpdateMemberRequest {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub photo: Option<String>,
    pub plan: Option<String>,
    pub start_date: Option<String>,
    pub payment_due: Option<i64>,
}

#[derive(Deserialize)]
pub struct RegisterCustomerRequest {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub age: i32,
    pub gender: String,
    pub address: String,
    pub membership_type: String,
    pub start_date: String,
}

#[derive(Deserialize)]
pub struct UpdateCustomerStatusRequest {
    pub status: String,
}

#[derive(Deserialize)]
pub struct CreatePaymentRequest {
    pub date: String,
    pub amount: i64,
    pub payment_type: String,
    pub status: Option<String>,
    pub description: String,
}

#[derive(Deserialize)]
pub struct UpdatePaymentRequest {
    pub date: Option<String>,
    pub amount: Option<i64>,
    pub payment_type: Option<String>,
    pub status: Option<String>,
    pub description: Option<String>,
}

#[derive(Deserialize)]
pub struct AssignTaskRequest {
    pub step_count: i64,
    pub notes: Option<String>,
}

#[derive(Deserialize)]
pub struct TaskListQuery {
    pub status: Option<String>,
}

#[derive(Deserialize)]
pub struct CreateTrainerRequest {
    pub name: String,
    pub specialization: String,
    pub photo: Option<String>,
}

#[derive(Deserialize, Default)]
pub struct MacrosRequest {
    pub calories: i32,
    pub protein: i32,
    pub carbs: i32,
    pub fat: i32,
}

#[derive(Deserialize)]
pub struct MealRequest {
    pub meal_time: String,
    pub items: Vec<FoodItem>,
}

#[derive(Deserialize)]
pub struct CreateDietPlanRequest {
    pub name: String,
    pub trainer_id: Option<String>,
    pub category: String,
    pub diet_goal: String,
    pub diet_type: String,
    pub target_calories: i32,
    pub duration_days: i32,
    pub description: Option<String>,
    pub thumbnail: Option<String>,
    pub water_intake: Option<f64>,
    pub supplements: Option<Vec<String>>,
    pub special_instructions: Option<String>,
    pub macros: Option<MacrosRequest>,
    #[serde(default)]
    pub meals: Vec<MealRequest>,
}

#[derive(Deserialize)]
pub struct UpdateDietPlanRequest {
    pub name: Option<String>,
    pub trainer_id: Option<String>,
    pub category: Option<String>,
    pub diet_goal: Option<String>,
    pub diet_type: Option<String>,
    pub target_calories: Option<i32>,
    pub duration_days: Option<i32>,
    pub description: Option<String>,
    pub thumbnail: Option<String>,
    pub water_intake: Option<f64>,
    pub supplements: Option<Vec<String>>,
    pub special_instructions: Option<String>,
    pub macros: Option<MacrosRequest>,
}

#[derive(Deserialize)]
pub struct ExerciseRequest {
    pub name: String,
    pub sets: i32,
    pub reps: String,
    pub rest: String,
    pub notes: Option<String>,
}

#[derive(Deserialize)]
pub struct CreateWorkoutRequest {
    pub name: String,
    pub trainer_id: Option<String>,
    pub body_part: String,
    pub difficulty: String,
    pub equipment: String,
    pub duration_min: i32,
    pub thumbnail: Option<String>,
    pub video_url: Option<String>,
    #[serde(default)]
    pub exercises: Vec<ExerciseRequest>,
}

#[derive(Deserialize)]
pub struct UpdateWorkoutRequest {
    pub name: Option<String>,
    pub trainer_id: Option<String>,
    pub body_part: Option<String>,
    pub difficulty: Option<String>,
    pub equipment: Option<String>,
    pub duration_min: Option<i32>,
    pub thumbnail: Option<String>,
    pub video_url: Option<String>,
}

#[derive(Deserialize)]
pub struct AssignDietRequest {
    pub member_id: String,
    pub start_date: String,
    pub end_date: String,
}

#[derive(Deserialize)]
pub struct AssignWorkoutRequest {
    pub member_id: String,
}
