//! API request and response structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    catalog::dashboard::{Achievement, DayProgress, TimeOfDay, UserMetrics},
    models::{ChatMessage, FoodLogEntry, Insight, NutritionGoals, NutritionTotals, UserProfile},
};

pub const SERVICE_NAME: &str = "FitFusion Backend";
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Plain acknowledgement
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
    pub uptime: String,
    pub host: String,
    pub port: u16,
    pub last_action: Option<String>,
    pub last_action_time: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WelcomeResponse {
    pub message: String,
    pub version: String,
    pub health: String,
}

impl WelcomeResponse {
    pub fn new() -> Self {
        Self {
            message: "Welcome to FitFusion API".to_string(),
            version: VERSION.to_string(),
            health: "/health".to_string(),
        }
    }
}

impl Default for WelcomeResponse {
    fn default() -> Self {
        Self::new()
    }
}

/// Query string for `GET /workouts`
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct Pagination {
    #[serde(default)]
    pub skip: usize,
    #[serde(default = "default_limit")]
    pub limit: usize,
}

fn default_limit() -> usize {
    100
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct IntensityRequest {
    pub level: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct CoachProfileResponse {
    pub profile: UserProfile,
    pub quick_suggestions: Vec<&'static str>,
    pub insights: Vec<Insight>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ConversationResponse {
    pub messages: Vec<ChatMessage>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PantryAddRequest {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FoodLogRequest {
    pub food_id: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct FoodLogResponse {
    pub message: String,
    pub entry: FoodLogEntry,
}

/// Planned meals, workouts and coach messages as they stand right now
#[derive(Debug, Clone, Copy, Serialize)]
pub struct LiveCounters {
    pub planned_meals: usize,
    pub completed_workouts: usize,
    pub coach_messages: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct DashboardResponse {
    pub greeting: TimeOfDay,
    pub motivation: &'static str,
    pub metrics: UserMetrics,
    pub weekly_progress: Vec<DayProgress>,
    pub achievements: Vec<Achievement>,
    pub nutrition_today: NutritionTotals,
    pub nutrition_goals: NutritionGoals,
    pub counters: LiveCounters,
}
