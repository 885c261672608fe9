//! State management module
//!
//! This module contains all state-related structures and their management logic.

pub mod app_state;
pub mod conversation;
pub mod kitchen;
pub mod meal_plan;
pub mod session_state;
pub mod workout_store;

// Re-export main types
pub use app_state::{AppState, CoachExchange};
pub use conversation::Conversation;
pub use kitchen::Kitchen;
pub use meal_plan::MealPlan;
pub use session_state::{HeartRateZone, Progress, SessionSnapshot, WorkoutSession};
pub use workout_store::WorkoutStore;
