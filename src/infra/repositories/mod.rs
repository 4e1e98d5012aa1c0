pub mod sqlite_gym_repo;
pub mod sqlite_admin_repo;
pub mod sqlite_auth_repo;
pub mod sqlite_member_repo;
pub mod sqlite_payment_repo;
pub mod sqlite_customer_repo;
pub mod sqlite_task_repo;
pub mod sqlite_program_repo;

pub mod postgres_gym_repo;
pub mod postgres_admin_repo;
pub mod postgres_auth_repo;
pub mod postgres_member_repo;
pub mod postgres_payment_repo;
pub mod postgres_customer_repo;
pub mod postgres_task_repo;
pub mod postgres_program_repo;
