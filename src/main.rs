//! FitFusion - an in-memory fitness tracking service
//!
//! This is the main entry point for the fitfusion server.

use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

use fitfusion::{
    api::{create_router, responses::VERSION},
    config::Config,
    state::AppState,
    tasks::workout_timer_task,
    utils::shutdown_signal,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Initialize tracing with appropriate log level
    tracing_subscriber::fmt()
        .with_env_filter(format!("fitfusion={},tower_http=info", config.log_level()))
        .init();

    info!("Starting fitfusion server v{}", VERSION);
    info!(
        "Configuration: host={}, port={}, coach_delay={}ms, scan_delay={}ms",
        config.host, config.port, config.coach_delay_ms, config.scan_delay_ms
    );

    // Create application state
    let state = Arc::new(AppState::new(&config));

    // Start the workout session timer
    let timer_state = Arc::clone(&state);
    tokio::spawn(async move {
        workout_timer_task(timer_state).await;
    });

    // Create HTTP router with all endpoints
    let app = create_router(state);

    // Bind to the specified address
    let addr = config.address();
    let listener = TcpListener::bind(&addr).await?;

    info!("Server running on http://{}", addr);
    info!("Endpoints:");
    info!("  GET  /health                          - Health check");
    info!("  *    /api/v1/workouts[/:id]           - Workout CRUD, stats and completion");
    info!("  *    /api/v1/workouts/session         - Guided workout timer");
    info!("  GET  /api/v1/meals                    - Meal catalog and suggestions");
    info!("  *    /api/v1/nutrition/today          - Today's meal plan");
    info!("  *    /api/v1/ai-coach/messages        - Chat with the AI coach");
    info!("  POST /api/v1/food-scanner/scan        - Recognize a food photo");
    info!("  *    /api/v1/food-scanner/pantry      - Pantry and recipe ideas");
    info!("  GET  /api/v1/dashboard                - Dashboard metrics");

    // Setup graceful shutdown
    let server = axum::serve(listener, app);

    tokio::select! {
        result = server => {
            if let Err(e) = result {
                tracing::error!("Server error: {}", e);
            }
        }
        _ = shutdown_signal() => {
            info!("Shutdown signal received");
        }
    }

    info!("Server shutdown complete");
    Ok(())
}
