//! Coach profile, prompts and insights

use crate::models::{CoachReply, Insight, UserProfile};

pub fn default_profile() -> UserProfile {
    UserProfile {
        name: "Alex".into(),
        goal: "Lose weight and build muscle".into(),
        fitness_level: "Intermediate".into(),
        dietary_preferences: vec!["High Protein".into(), "Low Carb".into()],
        current_weight: 170,
        target_weight: 160,
        weekly_workouts: 4,
        previous_conversations: 23,
    }
}

pub const QUICK_SUGGESTIONS: [&str; 6] = [
    "What should I eat for lunch today?",
    "Plan my workout for tomorrow",
    "Help me stay motivated",
    "Track my weekly progress",
    "Suggest a healthy snack",
    "How can I improve my sleep?",
];

pub const WEEKLY_INSIGHTS: [Insight; 3] = [
    Insight {
        title: "Great Progress!",
        content: "You've completed 85% of your workouts this week",
    },
    Insight {
        title: "Calorie Goal",
        content: "You're 150 calories under your daily target",
    },
    Insight {
        title: "Consistency",
        content: "12-day workout streak - keep it up!",
    },
];

pub const APOLOGY: &str =
    "I'm sorry, I'm having trouble processing that right now. Please try again!";

pub fn welcome(profile: &UserProfile) -> CoachReply {
    CoachReply {
        content: format!(
            "Hi {}! 👋 I'm your AI fitness coach. I've been analyzing your progress and I'm excited to help you reach your goals today. What would you like to work on?",
            profile.name
        ),
        suggestions: vec![
            "Plan today's workout".into(),
            "Suggest meals for my goals".into(),
            "Review my progress".into(),
            "Motivate me!".into(),
        ],
    }
}
