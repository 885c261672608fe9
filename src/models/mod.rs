//! Domain records
//!
//! Everything here is transient: records live in [`crate::state::AppState`]
//! and vanish when the process exits.

pub mod chat;
pub mod food;
pub mod meal;
pub mod workout;

pub use chat::{ChatMessage, CoachReply, Insight, Role, UserProfile};
pub use food::{
    FoodAlternative, FoodLogEntry, NutritionGrade, PantryItem, PantryRecipe, ScanResult,
    ScanSource, ScannedFood,
};
pub use meal::{
    CookingDifficulty, DayPlan, Meal, MealType, NutritionGoals, NutritionProgress,
    NutritionTotals,
};
pub use workout::{
    Difficulty, Exercise, ExerciseCreate, Workout, WorkoutCreate, WorkoutStats, WorkoutSummary,
    WorkoutUpdate,
};
