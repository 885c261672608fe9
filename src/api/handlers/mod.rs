//! HTTP endpoint handlers, grouped by feature

pub mod coach;
pub mod dashboard;
pub mod meals;
pub mod scanner;
pub mod session;
pub mod system;
pub mod workouts;
