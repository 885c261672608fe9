//! Guided workout session handlers

use std::sync::Arc;
use axum::{
    extract::State,
    response::Json,
};

use crate::{
    error::FitResult,
    state::{AppState, SessionSnapshot},
};
use crate::api::{
    extract::{ApiJson, ApiPath},
    responses::{IntensityRequest, MessageResponse},
};

/// Handle GET /workouts/session - `null` when no workout is in progress
pub async fn current_session(
    State(state): State<Arc<AppState>>,
) -> FitResult<Json<Option<SessionSnapshot>>> {
    Ok(Json(state.session_snapshot()?))
}

pub async fn start_session(
    State(state): State<Arc<AppState>>,
    ApiPath(workout_id): ApiPath<u64>,
) -> FitResult<Json<SessionSnapshot>> {
    Ok(Json(state.start_session(workout_id)?))
}

pub async fn toggle_session(
    State(state): State<Arc<AppState>>,
) -> FitResult<Json<Option<SessionSnapshot>>> {
    Ok(Json(state.toggle_session()?))
}

/// Handle POST /workouts/session/next - `null` once the last exercise is done
pub async fn next_exercise(
    State(state): State<Arc<AppState>>,
) -> FitResult<Json<Option<SessionSnapshot>>> {
    Ok(Json(state.next_exercise()?))
}

pub async fn reset_exercise(
    State(state): State<Arc<AppState>>,
) -> FitResult<Json<Option<SessionSnapshot>>> {
    Ok(Json(state.reset_exercise()?))
}

pub async fn set_intensity(
    State(state): State<Arc<AppState>>,
    ApiJson(request): ApiJson<IntensityRequest>,
) -> FitResult<Json<Option<SessionSnapshot>>> {
    Ok(Json(state.set_intensity(request.level)?))
}

pub async fn end_session(State(state): State<Arc<AppState>>) -> FitResult<Json<MessageResponse>> {
    state.end_session()?;
    Ok(Json(MessageResponse::new("Workout session ended")))
}
