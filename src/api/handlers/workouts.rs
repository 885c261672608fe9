//! Workout CRUD and stats handlers

use std::sync::Arc;
use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
};

use crate::{
    error::FitResult,
    models::{Workout, WorkoutCreate, WorkoutStats, WorkoutSummary, WorkoutUpdate},
    state::AppState,
};
use crate::api::{
    extract::{ApiJson, ApiPath, ApiQuery},
    responses::{MessageResponse, Pagination},
};

/// Handle POST /workouts
pub async fn create_workout(
    State(state): State<Arc<AppState>>,
    ApiJson(request): ApiJson<WorkoutCreate>,
) -> FitResult<(StatusCode, Json<Workout>)> {
    let workout = state.create_workout(request)?;
    Ok((StatusCode::CREATED, Json(workout)))
}

/// Handle GET /workouts?skip=&limit=
pub async fn list_workouts(
    State(state): State<Arc<AppState>>,
    ApiQuery(page): ApiQuery<Pagination>,
) -> FitResult<Json<Vec<WorkoutSummary>>> {
    Ok(Json(state.list_workouts(page.skip, page.limit)?))
}

pub async fn get_workout(
    State(state): State<Arc<AppState>>,
    ApiPath(id): ApiPath<u64>,
) -> FitResult<Json<Workout>> {
    Ok(Json(state.get_workout(id)?))
}

pub async fn update_workout(
    State(state): State<Arc<AppState>>,
    ApiPath(id): ApiPath<u64>,
    ApiJson(update): ApiJson<WorkoutUpdate>,
) -> FitResult<Json<Workout>> {
    Ok(Json(state.update_workout(id, update)?))
}

pub async fn delete_workout(
    State(state): State<Arc<AppState>>,
    ApiPath(id): ApiPath<u64>,
) -> FitResult<Json<MessageResponse>> {
    state.delete_workout(id)?;
    Ok(Json(MessageResponse::new("Workout deleted successfully")))
}

/// Handle POST /workouts/{id}/complete
pub async fn complete_workout(
    State(state): State<Arc<AppState>>,
    ApiPath(id): ApiPath<u64>,
) -> FitResult<Json<MessageResponse>> {
    state.complete_workout(id)?;
    Ok(Json(MessageResponse::new("Workout completed successfully")))
}

pub async fn workout_stats(State(state): State<Arc<AppState>>) -> FitResult<Json<WorkoutStats>> {
    Ok(Json(state.workout_stats()?))
}
