//! Simulated "AI" services and nutrition math
//!
//! Nothing here calls out of the process: the coach answers from a keyword
//! table and the scanner picks a random known food.

pub mod coach;
pub mod planner;
pub mod scanner;

pub use coach::{CannedCoach, CoachResponder, Topic};
pub use scanner::{FoodRecognizer, RandomRecognizer};
