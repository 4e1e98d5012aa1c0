use serde::Serialize;

use crate::domain::models::task_step::{MemberTaskStep, TASK_STATUS_PENDING};
use crate::error::AppError;

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct PendingSummary {
    pub count: usize,
    pub total_steps: i64,
}

/// The 100-50,000 range the admin UI suggests is a form-level guard; the
/// engine only refuses step counts that are not positive.
pub fn validate_step_count(step_count: i64) -> Result<(), AppError> {
    if step_count <= 0 {
        return Err(AppError::Validation("step_count must be a positive integer".into()));
    }
    Ok(())
}

pub fn pending_summary(tasks: &[MemberTaskStep]) -> PendingSummary {
    let pending: Vec<_> = tasks.iter().filter(|t| t.status == TASK_STATUS_PENDING).collect();

    PendingSummary {
        count: pending.len(),
        total_steps: pending.iter().map(|t| t.step_count).sum(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::task_step::TASK_STATUS_COMPLETED;

    fn task(step_count: i64, status: &str) -> MemberTaskStep {
        let mut t = MemberTaskStep::new("member-1".to_string(), step_count, None, None);
        t.status = status.to_string();
        t
    }

    #[test]
    fn test_step_count_must_be_positive() {
        assert!(validate_step_count(5000).is_ok());
        assert!(validate_step_count(1).is_ok());
        assert!(matches!(validate_step_count(0), Err(AppError::Validation(_))));
        assert!(matches!(validate_step_count(-100), Err(AppError::Validation(_))));
    }

    #[test]
    fn test_summary_counts_pending_only() {
        let tasks = vec![
            task(5000, TASK_STATUS_PENDING),
            task(3000, TASK_STATUS_COMPLETED),
            task(2500, TASK_STATUS_PENDING),
        ];

        let summary = pending_summary(&tasks);
        assert_eq!(summary.count, 2);
        assert_eq!(summary.total_steps, 7500);
    }

    #[test]
    fn test_summary_of_no_tasks_is_empty() {
        assert_eq!(pending_summary(&[]), PendingSummary { count: 0, total_steps: 0 });
    }

    #[test]
    fn test_summary_is_order_independent() {
        let mut tasks = vec![
            task(100, TASK_STATUS_PENDING),
            task(200, TASK_STATUS_PENDING),
            task(300, TASK_STATUS_COMPLETED),
        ];

        let forward = pending_summary(&tasks);
        tasks.reverse();
        assert_eq!(pending_summary(&tasks), forward);
    }
}
