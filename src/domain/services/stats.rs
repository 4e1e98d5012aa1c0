use std::collections::HashMap;

use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::models::customer::{Customer, CUSTOMER_STATUS_MEMBER, CUSTOMER_STATUS_PENDING};
use crate::domain::models::member::Member;
use crate::domain::models::program::Workout;
use crate::domain::services::lifecycle::{STATUS_ACTIVE, STATUS_EXPIRED, STATUS_TRIAL};

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct MemberStats {
    pub total: usize,
    pub active: usize,
    pub expired: usize,
    pub trial: usize,
    pub outstanding_due: i64,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct CustomerStats {
    pub total: usize,
    pub new_today: usize,
    pub pending: usize,
    pub converted: usize,
    pub by_membership_type: HashMap<String, usize>,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct WorkoutPopularity {
    pub name: String,
    pub usage_count: i32,
}

pub fn member_stats(members: &[Member]) -> MemberStats {
    MemberStats {
        total: members.len(),
        active: members.iter().filter(|m| m.status == STATUS_ACTIVE).count(),
        expired: members.iter().filter(|m| m.status == STATUS_EXPIRED).count(),
        trial: members.iter().filter(|m| m.status == STATUS_TRIAL).count(),
        outstanding_due: members.iter().map(|m| m.payment_due).sum(),
    }
}

pub fn customer_stats(customers: &[Customer], today: NaiveDate) -> CustomerStats {
    let mut by_membership_type: HashMap<String, usize> = HashMap::new();
    for customer in customers {
        *by_membership_type.entry(customer.membership_type.clone()).or_insert(0) += 1;
    }

    CustomerStats {
        total: customers.len(),
        new_today: customers.iter().filter(|c| c.created_at.date_naive() == today).count(),
        pending: customers.iter().filter(|c| c.status == CUSTOMER_STATUS_PENDING).count(),
        converted: customers.iter().filter(|c| c.status == CUSTOMER_STATUS_MEMBER).count(),
        by_membership_type,
    }
}

pub fn avg_workout_duration(workouts: &[Workout]) -> i32 {
    if workouts.is_empty() {
        return 0;
    }
    let total: i64 = workouts.iter().map(|w| w.duration_min as i64).sum();
    (total / workouts.len() as i64) as i32
}

/// Top five workouts by assignment count, for the dashboard bar chart.
pub fn workout_popularity(workouts: &[Workout]) -> Vec<WorkoutPopularity> {
    let mut ranked: Vec<_> = workouts
        .iter()
        .map(|w| WorkoutPopularity { name: w.name.clone(), usage_count: w.usage_count })
        .collect();
    ranked.sort_by(|a, b| b.usage_count.cmp(&a.usage_count));
    ranked.truncate(5);
    ranked
}
