//! Workout and exercise records

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Exercise {
    pub id: u64,
    pub workout_id: u64,
    pub name: String,
    pub description: Option<String>,
    /// Seconds
    pub duration: u32,
    pub calories: u32,
    pub sets: Option<u32>,
    pub reps: Option<u32>,
    pub weight: Option<f64>,
    /// Seconds
    pub rest_time: Option<u32>,
    pub instructions: Vec<String>,
    pub muscle_groups: Vec<String>,
    pub equipment: Vec<String>,
    pub form_tips: Vec<String>,
    pub breathing_pattern: Option<String>,
    pub difficulty: Difficulty,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Workout {
    pub id: u64,
    pub name: String,
    pub description: Option<String>,
    /// Minutes
    pub duration: u32,
    pub calories_burned: Option<u32>,
    pub workout_type: String,
    pub difficulty: Difficulty,
    pub rating: Option<f32>,
    pub completions: u32,
    pub ai_optimized: bool,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
    pub exercises: Vec<Exercise>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkoutSummary {
    pub id: u64,
    pub name: String,
    pub duration: u32,
    pub calories_burned: Option<u32>,
    pub workout_type: String,
    pub difficulty: Difficulty,
    pub completed: bool,
    pub exercise_count: usize,
    pub created_at: DateTime<Utc>,
}

impl From<&Workout> for WorkoutSummary {
    fn from(w: &Workout) -> Self {
        Self {
            id: w.id,
            name: w.name.clone(),
            duration: w.duration,
            calories_burned: w.calories_burned,
            workout_type: w.workout_type.clone(),
            difficulty: w.difficulty,
            completed: w.completed,
            exercise_count: w.exercises.len(),
            created_at: w.created_at,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExerciseCreate {
    pub name: String,
    pub description: Option<String>,
    pub duration: u32,
    #[serde(default)]
    pub calories: u32,
    pub sets: Option<u32>,
    pub reps: Option<u32>,
    pub weight: Option<f64>,
    pub rest_time: Option<u32>,
    #[serde(default)]
    pub instructions: Vec<String>,
    #[serde(default)]
    pub muscle_groups: Vec<String>,
    #[serde(default)]
    pub equipment: Vec<String>,
    #[serde(default)]
    pub form_tips: Vec<String>,
    pub breathing_pattern: Option<String>,
    pub difficulty: Option<Difficulty>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WorkoutCreate {
    pub name: String,
    pub description: Option<String>,
    pub duration: u32,
    pub calories_burned: Option<u32>,
    pub workout_type: String,
    pub difficulty: Difficulty,
    #[serde(default)]
    pub exercises: Vec<ExerciseCreate>,
}

/// Partial update; absent fields are left untouched.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WorkoutUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub duration: Option<u32>,
    pub calories_burned: Option<u32>,
    pub workout_type: Option<String>,
    pub difficulty: Option<Difficulty>,
    pub completed: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WorkoutStats {
    pub total_workouts: usize,
    pub completed_workouts: usize,
    pub total_duration_minutes: u64,
    pub total_calories_burned: u64,
    pub completion_rate: f64,
}
