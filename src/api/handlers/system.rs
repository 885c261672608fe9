//! Health and welcome handlers

use std::sync::Arc;
use axum::{extract::State, response::Json};
use tracing::debug;

use crate::state::AppState;
use crate::api::responses::{HealthResponse, WelcomeResponse, SERVICE_NAME, VERSION};

/// Handle GET /health
pub async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let (last_action, last_action_time) = state.get_last_action();
    debug!("Health check, uptime {}", state.get_uptime());

    Json(HealthResponse {
        status: "healthy".to_string(),
        service: SERVICE_NAME.to_string(),
        version: VERSION.to_string(),
        uptime: state.get_uptime(),
        host: state.host.clone(),
        port: state.port,
        last_action,
        last_action_time,
    })
}

/// Handle GET /
pub async fn root() -> Json<WelcomeResponse> {
    Json(WelcomeResponse::new())
}
