//! Dashboard handler

use std::sync::Arc;
use axum::{extract::State, response::Json};
use chrono::{Local, Timelike};

use crate::{
    catalog::dashboard::{user_metrics, TimeOfDay, ACHIEVEMENTS, WEEKLY_PROGRESS},
    error::FitResult,
    state::AppState,
};
use crate::api::responses::{DashboardResponse, LiveCounters};

/// Handle GET /dashboard - mock metrics plus live counters
pub async fn dashboard(State(state): State<Arc<AppState>>) -> FitResult<Json<DashboardResponse>> {
    let greeting = TimeOfDay::from_hour(Local::now().hour());
    let today = state.today()?;

    let counters = LiveCounters {
        planned_meals: today.meals.len(),
        completed_workouts: state.workout_stats()?.completed_workouts,
        coach_messages: state.conversation_len()?,
    };

    Ok(Json(DashboardResponse {
        greeting,
        motivation: greeting.motivation(),
        metrics: user_metrics(),
        weekly_progress: WEEKLY_PROGRESS.to_vec(),
        achievements: ACHIEVEMENTS.to_vec(),
        nutrition_today: today.totals,
        nutrition_goals: today.goals,
        counters,
    }))
}
