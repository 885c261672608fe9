//! FitFusion - an in-memory fitness tracking service
//!
//! Serves workouts with a guided session timer, a meal planner, a keyword
//! driven AI coach and a simulated food scanner. All data is mock data held
//! in memory for the life of the process.

pub mod api;
pub mod catalog;
pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod state;
pub mod tasks;
pub mod utils;

// Re-export commonly used types
pub use api::create_router;
pub use config::Config;
pub use error::{FitError, FitResult};
pub use state::AppState;
pub use utils::signals::shutdown_signal;
