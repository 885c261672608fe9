//! HTTP API module
//!
//! This module contains all HTTP endpoint handlers and response structures.

pub mod extract;
pub mod handlers;
pub mod responses;

use std::{sync::Arc, time::Duration};
use axum::{
    extract::DefaultBodyLimit,
    http::{Request, Response},
    routing::{delete, get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::Span;

use crate::state::AppState;
use handlers::{coach, dashboard, meals, scanner, session, system, workouts};

/// Largest accepted food photo
pub const MAX_IMAGE_BYTES: usize = 10 * 1024 * 1024;

fn workout_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/workouts", post(workouts::create_workout).get(workouts::list_workouts))
        .route("/workouts/stats/summary", get(workouts::workout_stats))
        .route(
            "/workouts/:id",
            get(workouts::get_workout)
                .put(workouts::update_workout)
                .delete(workouts::delete_workout),
        )
        .route("/workouts/:id/complete", post(workouts::complete_workout))
        .route(
            "/workouts/session",
            get(session::current_session).delete(session::end_session),
        )
        .route("/workouts/session/start/:id", post(session::start_session))
        .route("/workouts/session/toggle", post(session::toggle_session))
        .route("/workouts/session/next", post(session::next_exercise))
        .route("/workouts/session/reset", post(session::reset_exercise))
        .route("/workouts/session/intensity", post(session::set_intensity))
}

fn nutrition_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/meals", get(meals::list_meals))
        .route("/meals/suggestions", get(meals::meal_suggestions))
        .route("/meals/:id", get(meals::get_meal))
        .route("/nutrition/today", get(meals::nutrition_today))
        .route(
            "/nutrition/today/:id",
            post(meals::add_meal_to_today).delete(meals::remove_meal_from_today),
        )
}

fn coach_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/ai-coach/profile", get(coach::coach_profile))
        .route(
            "/ai-coach/messages",
            get(coach::list_messages)
                .post(coach::send_message)
                .delete(coach::clear_messages),
        )
}

fn scanner_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/food-scanner/scan",
            post(scanner::scan_food).layer(DefaultBodyLimit::max(MAX_IMAGE_BYTES)),
        )
        .route("/food-scanner/history", get(scanner::scan_history))
        .route(
            "/food-scanner/pantry",
            get(scanner::list_pantry).post(scanner::add_to_pantry),
        )
        .route("/food-scanner/pantry/recipes", get(scanner::pantry_recipes))
        .route("/food-scanner/pantry/:id", delete(scanner::remove_from_pantry))
        .route(
            "/food-scanner/diary",
            get(scanner::food_diary).post(scanner::log_food),
        )
}

/// Create the HTTP router with all endpoints
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .nest(
            "/api/v1",
            Router::new()
                .merge(workout_routes())
                .merge(nutrition_routes())
                .merge(coach_routes())
                .merge(scanner_routes())
                .route("/dashboard", get(dashboard::dashboard)),
        )
        .route("/health", get(system::health))
        .route("/", get(system::root))
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|req: &Request<_>| {
                    let method = req.method().clone();
                    let uri = req.uri().clone();
                    tracing::info_span!("http_request", %method, %uri, status = tracing::field::Empty)
                })
                .on_response(|res: &Response<_>, latency: Duration, span: &Span| {
                    let status = res.status();
                    span.record("status", tracing::field::display(status));
                    if status.is_server_error() {
                        tracing::error!(%status, ?latency, "response");
                    } else {
                        tracing::info!(%status, ?latency, "response");
                    }
                }),
        )
}
