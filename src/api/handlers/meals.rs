//! Meal catalog and daily nutrition handlers

use std::sync::Arc;
use axum::{
    extract::State,
    response::Json,
};

use crate::{
    api::extract::ApiPath,
    error::FitResult,
    models::{DayPlan, Meal},
    state::AppState,
};

pub async fn list_meals(State(state): State<Arc<AppState>>) -> Json<Vec<Meal>> {
    Json(state.meal_catalog())
}

pub async fn get_meal(
    State(state): State<Arc<AppState>>,
    ApiPath(id): ApiPath<String>,
) -> FitResult<Json<Meal>> {
    Ok(Json(state.find_meal(&id)?))
}

/// Handle GET /meals/suggestions - built from what is in the pantry
pub async fn meal_suggestions(State(state): State<Arc<AppState>>) -> FitResult<Json<Vec<Meal>>> {
    Ok(Json(state.meal_suggestions()?))
}

pub async fn nutrition_today(State(state): State<Arc<AppState>>) -> FitResult<Json<DayPlan>> {
    Ok(Json(state.today()?))
}

pub async fn add_meal_to_today(
    State(state): State<Arc<AppState>>,
    ApiPath(meal_id): ApiPath<String>,
) -> FitResult<Json<DayPlan>> {
    Ok(Json(state.add_meal_to_today(&meal_id)?))
}

pub async fn remove_meal_from_today(
    State(state): State<Arc<AppState>>,
    ApiPath(meal_id): ApiPath<String>,
) -> FitResult<Json<DayPlan>> {
    Ok(Json(state.remove_meal_from_today(&meal_id)?))
}
