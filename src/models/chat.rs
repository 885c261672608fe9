//! Coach conversation records

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    #[serde(rename = "ai")]
    Coach,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: u64,
    pub role: Role,
    pub content: String,
    pub timestamp: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub suggestions: Vec<String>,
}

/// Text and follow-up suggestions produced by a responder, before it is
/// stamped into the conversation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoachReply {
    pub content: String,
    pub suggestions: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct UserProfile {
    pub name: String,
    pub goal: String,
    pub fitness_level: String,
    pub dietary_preferences: Vec<String>,
    pub current_weight: u32,
    pub target_weight: u32,
    pub weekly_workouts: u32,
    pub previous_conversations: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct Insight {
    pub title: &'static str,
    pub content: &'static str,
}
