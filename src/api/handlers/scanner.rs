//! Food scanner, pantry and diary handlers

use std::sync::Arc;
use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::Json,
};
use serde::Deserialize;

use crate::{
    error::FitResult,
    models::{PantryItem, PantryRecipe, ScanResult, ScanSource, FoodLogEntry},
    state::AppState,
};
use crate::api::{
    extract::{ApiJson, ApiPath, ApiQuery},
    responses::{FoodLogRequest, FoodLogResponse, PantryAddRequest},
};

#[derive(Debug, Deserialize)]
pub struct ScanQuery {
    #[serde(default = "default_source")]
    pub source: ScanSource,
}

fn default_source() -> ScanSource {
    ScanSource::Upload
}

/// Handle POST /food-scanner/scan - the raw body is the image
pub async fn scan_food(
    State(state): State<Arc<AppState>>,
    ApiQuery(query): ApiQuery<ScanQuery>,
    image: Bytes,
) -> FitResult<Json<ScanResult>> {
    Ok(Json(state.scan(query.source, &image).await?))
}

pub async fn scan_history(State(state): State<Arc<AppState>>) -> FitResult<Json<Vec<ScanResult>>> {
    Ok(Json(state.scan_history()?))
}

pub async fn list_pantry(State(state): State<Arc<AppState>>) -> FitResult<Json<Vec<PantryItem>>> {
    Ok(Json(state.pantry()?))
}

pub async fn add_to_pantry(
    State(state): State<Arc<AppState>>,
    ApiJson(request): ApiJson<PantryAddRequest>,
) -> FitResult<(StatusCode, Json<PantryItem>)> {
    let item = state.add_to_pantry(&request.name)?;
    Ok((StatusCode::CREATED, Json(item)))
}

pub async fn remove_from_pantry(
    State(state): State<Arc<AppState>>,
    ApiPath(id): ApiPath<u64>,
) -> FitResult<Json<PantryItem>> {
    Ok(Json(state.remove_from_pantry(id)?))
}

pub async fn pantry_recipes(
    State(state): State<Arc<AppState>>,
) -> FitResult<Json<Vec<PantryRecipe>>> {
    Ok(Json(state.pantry_recipes()?))
}

pub async fn log_food(
    State(state): State<Arc<AppState>>,
    ApiJson(request): ApiJson<FoodLogRequest>,
) -> FitResult<(StatusCode, Json<FoodLogResponse>)> {
    let entry = state.log_food(&request.food_id)?;
    let message = format!(
        "{} ({} calories) logged to your food diary!",
        entry.food_name, entry.calories
    );
    Ok((StatusCode::CREATED, Json(FoodLogResponse { message, entry })))
}

pub async fn food_diary(State(state): State<Arc<AppState>>) -> FitResult<Json<Vec<FoodLogEntry>>> {
    Ok(Json(state.diary()?))
}
