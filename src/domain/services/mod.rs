pub mod auth_service;
pub mod billing;
pub mod conversion;
pub mod lifecycle;
pub mod stats;
pub mod task_steps;
