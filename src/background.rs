use std::sync::Arc;
use std::time::Duration;
use chrono::Utc;
use tokio::time::sleep;
use tracing::{error, info, info_span, Instrument};
use crate::state::AppState;
use crate::domain::services::lifecycle;

/// Membership expiry is date-driven, so a member can lapse without any admin
/// touching the record. This worker periodically re-derives every member's
/// status from plan + start_date and reconciles the stored value.
pub async fn start_status_sweep(state: Arc<AppState>) {
    info!("Starting membership status sweep worker...");

    let interval = Duration::from_secs(state.config.status_sweep_secs);

    loop {
        let span = info_span!("status_sweep");

        async {
            match state.member_repo.list_all().await {
                Ok(members) => {
                    let today = Utc::now().date_naive();
                    let mut reconciled = 0usize;

                    for member in &members {
                        let derived = lifecycle::derive_status(&member.plan, member.start_date, today);
                        if member.status != derived {
                            match state.member_repo.update_status(&member.id, derived).await {
                                Ok(_) => {
                                    info!("Member {} status: {} -> {}", member.id, member.status, derived);
                                    reconciled += 1;
                                }
                                Err(e) => {
                                    error!("Failed to update member {} status: {:?}", member.id, e);
                                }
                            }
                        }
                    }

                    if reconciled > 0 {
                        info!("Status sweep reconciled {} of {} members", reconciled, members.len());
                    }
                }
                Err(e) => {
                    error!("Status sweep failed to list members: {:?}", e);
                }
            }
        }
        .instrument(span)
        .await;

        sleep(interval).await;
    }
}
