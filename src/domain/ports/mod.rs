use crate::domain::models::{
    gym::Gym, user::AdminUser, member::Member, customer::Customer,
    payment::{MemberPayment, PaymentStatusChange}, task_step::MemberTaskStep,
    auth::RefreshTokenRecord,
    program::{Trainer, DietPlan, DietMeal, Workout, WorkoutExercise, DietAssignment, WorkoutAssignment}
};
use crate::error::AppError;
use async_trait::async_trait;
use uuid::Uuid;

#[async_trait]
pub trait GymRepository: Send + Sync {
    async fn create(&self, gym: &Gym) -> Result<Gym, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Gym>, AppError>;
    async fn find_by_slug(&self, slug: &str) -> Result<Option<Gym>, AppError>;
    async fn update(&self, gym: &Gym) -> Result<Gym, AppError>;
}

#[async_trait]
pub trait AdminUserRepository: Send + Sync {
    async fn create(&self, user: &AdminUser) -> Result<AdminUser, AppError>;
    async fn find_by_username(&self, gym_id: &str, username: &str) -> Result<Option<AdminUser>, AppError>;
    async fn find_by_id(&self, gym_id: &str, id: &str) -> Result<Option<AdminUser>, AppError>;
    async fn list_by_gym(&self, gym_id: &str) -> Result<Vec<AdminUser>, AppError>;
    async fn delete(&self, gym_id: &str, id: &str) -> Result<(), AppError>;
}

#[async_trait]
pub trait AuthRepository: Send + Sync {
    async fn create_refresh_token(&self, record: &RefreshTokenRecord) -> Result<(), AppError>;
    async fn find_refresh_token(&self, token_hash: &str) -> Result<Option<RefreshTokenRecord>, AppError>;
    async fn delete_refresh_token(&self, token_hash: &str) -> Result<(), AppError>;
    async fn delete_refresh_family(&self, family_id: Uuid) -> Result<(), AppError>;
}

#[async_trait]
pub trait MemberRepository: Send + Sync {
    async fn create(&self, member: &Member) -> Result<Member, AppError>;
    async fn find_by_id(&self, gym_id: &str, id: &str) -> Result<Option<Member>, AppError>;
    async fn list(&self, gym_id: &str) -> Result<Vec<Member>, AppError>;
    /// Every member across all gyms; only the status sweep uses this.
    async fn list_all(&self) -> Result<Vec<Member>, AppError>;
    async fn update(&self, member: &Member) -> Result<Member, AppError>;
    async fn update_status(&self, id: &str, status: &str) -> Result<(), AppError>;
    async fn delete(&self, gym_id: &str, id: &str) -> Result<(), AppError>;
}

#[async_trait]
pub trait PaymentRepository: Send + Sync {
    async fn create(&self, payment: &MemberPayment) -> Result<MemberPayment, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<MemberPayment>, AppError>;
    async fn list_by_member(&self, member_id: &str) -> Result<Vec<MemberPayment>, AppError>;
    /// When the update changes the status, the caller passes the audit row
    /// and both writes happen in one transaction.
    async fn update(&self, payment: &MemberPayment, audit: Option<&PaymentStatusChange>) -> Result<MemberPayment, AppError>;
    async fn delete(&self, id: &str) -> Result<(), AppError>;
    async fn list_status_changes(&self, payment_id: &str) -> Result<Vec<PaymentStatusChange>, AppError>;
}

#[async_trait]
pub trait CustomerRepository: Send + Sync {
    async fn create(&self, customer: &Customer) -> Result<Customer, AppError>;
    async fn find_by_id(&self, gym_id: &str, id: &str) -> Result<Option<Customer>, AppError>;
    async fn list(&self, gym_id: &str) -> Result<Vec<Customer>, AppError>;
    async fn update_status(&self, gym_id: &str, id: &str, status: &str) -> Result<Customer, AppError>;
    /// Marks the customer converted and inserts the member in one
    /// transaction. The mark is conditional on the customer not already
    /// being a member, so concurrent conversions cannot both succeed.
    async fn convert_to_member(&self, customer_id: &str, member: &Member) -> Result<Member, AppError>;
}

#[async_trait]
pub trait TaskStepRepository: Send + Sync {
    async fn create(&self, task: &MemberTaskStep) -> Result<MemberTaskStep, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<MemberTaskStep>, AppError>;
    async fn list_by_member(&self, member_id: &str, status: Option<&str>) -> Result<Vec<MemberTaskStep>, AppError>;
    /// Conditional on the task still being pending; completing a completed
    /// task is an InvalidState error, not a silent re-apply.
    async fn complete(&self, id: &str) -> Result<MemberTaskStep, AppError>;
    async fn delete(&self, id: &str) -> Result<(), AppError>;
}

#[async_trait]
pub trait ProgramRepository: Send + Sync {
    async fn create_trainer(&self, trainer: &Trainer) -> Result<Trainer, AppError>;
    async fn list_trainers(&self, gym_id: &str) -> Result<Vec<Trainer>, AppError>;

    async fn create_diet_plan(&self, plan: &DietPlan, meals: &[DietMeal]) -> Result<DietPlan, AppError>;
    async fn find_diet_plan(&self, gym_id: &str, id: &str) -> Result<Option<DietPlan>, AppError>;
    async fn list_diet_plans(&self, gym_id: &str) -> Result<Vec<DietPlan>, AppError>;
    async fn list_meals(&self, diet_plan_id: &str) -> Result<Vec<DietMeal>, AppError>;
    async fn update_diet_plan(&self, plan: &DietPlan) -> Result<DietPlan, AppError>;
    async fn delete_diet_plan(&self, gym_id: &str, id: &str) -> Result<(), AppError>;

    async fn create_workout(&self, workout: &Workout, exercises: &[WorkoutExercise]) -> Result<Workout, AppError>;
    async fn find_workout(&self, gym_id: &str, id: &str) -> Result<Option<Workout>, AppError>;
    async fn list_workouts(&self, gym_id: &str) -> Result<Vec<Workout>, AppError>;
    async fn list_exercises(&self, workout_id: &str) -> Result<Vec<WorkoutExercise>, AppError>;
    async fn update_workout(&self, workout: &Workout) -> Result<Workout, AppError>;
    async fn delete_workout(&self, gym_id: &str, id: &str) -> Result<(), AppError>;

    async fn assign_diet(&self, assignment: &DietAssignment) -> Result<DietAssignment, AppError>;
    /// Also bumps the workout's usage_count, in the same transaction.
    async fn assign_workout(&self, assignment: &WorkoutAssignment) -> Result<WorkoutAssignment, AppError>;
    async fn list_diet_assignments(&self, member_id: &str) -> Result<Vec<DietAssignment>, AppError>;
    async fn list_workout_assignments(&self, member_id: &str) -> Result<Vec<WorkoutAssignment>, AppError>;
}
