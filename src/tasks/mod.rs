//! Background tasks module
//!
//! This module contains background tasks that run alongside the HTTP server.

pub mod workout_timer;

// Re-export main functions
pub use workout_timer::workout_timer_task;
