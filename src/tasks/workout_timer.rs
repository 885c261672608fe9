//! Workout session countdown background task

use std::{sync::Arc, time::Duration};
use tokio::time::{interval, MissedTickBehavior};
use tracing::{debug, error, info};

use crate::state::AppState;

fn is_running(snapshot: &Option<crate::state::SessionSnapshot>) -> bool {
    snapshot.as_ref().is_some_and(|s| s.running)
}

/// Background task that ticks the workout session once per second while it runs
pub async fn workout_timer_task(state: Arc<AppState>) {
    info!("Starting workout timer task");

    let mut session_rx = state.subscribe_session();

    loop {
        // Wait until a session is running
        if !is_running(&session_rx.borrow_and_update()) {
            if session_rx.changed().await.is_err() {
                debug!("Session channel closed, stopping workout timer task");
                return;
            }
            continue;
        }

        debug!("Session running, starting countdown");
        let mut ticker = interval(Duration::from_secs(1));
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        // The first tick completes immediately
        ticker.tick().await;

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    match state.tick_session() {
                        Ok(snapshot) if is_running(&snapshot) => {}
                        Ok(_) => {
                            debug!("Countdown stopped");
                            break;
                        }
                        Err(e) => {
                            error!("Failed to tick workout session: {}", e);
                            break;
                        }
                    }
                }

                changed = session_rx.changed() => {
                    if changed.is_err() {
                        return;
                    }
                    if !is_running(&session_rx.borrow_and_update()) {
                        debug!("Session paused or ended, stopping countdown");
                        break;
                    }
                }
            }
        }
    }
}
