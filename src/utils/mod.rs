//! Utility functions module

pub mod format;
pub mod signals;

pub use format::{format_clock, format_uptime};
pub use signals::shutdown_signal;
