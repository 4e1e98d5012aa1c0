use std::sync::Arc;
use crate::domain::ports::{
    GymRepository, AdminUserRepository, AuthRepository, MemberRepository,
    PaymentRepository, CustomerRepository, TaskStepRepository, ProgramRepository,
};
use crate::domain::services::auth_service::AuthService;
use crate::config::Config;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub gym_repo: Arc<dyn GymRepository>,
    pub admin_repo: Arc<dyn AdminUserRepository>,
    pub auth_repo: Arc<dyn AuthRepository>,
    pub member_repo: Arc<dyn MemberRepository>,
    pub payment_repo: Arc<dyn PaymentRepository>,
    pub customer_repo: Arc<dyn CustomerRepository>,
    pub task_repo: Arc<dyn TaskStepRepository>,
    pub program_repo: Arc<dyn ProgramRepository>,
    pub auth_service: Arc<AuthService>,
}
