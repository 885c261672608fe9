//! Hard-coded records the application starts from.

pub mod coach;
pub mod dashboard;
pub mod foods;
pub mod meals;
pub mod workouts;
