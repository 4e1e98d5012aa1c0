pub mod auth;
pub mod customer;
pub mod gym;
pub mod member;
pub mod payment;
pub mod program;
pub mod task_step;
pub mod user;
