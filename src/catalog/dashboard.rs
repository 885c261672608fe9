//! Dashboard metrics

use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Goal<T> {
    pub current: T,
    pub target: T,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct CalorieDay {
    pub consumed: u32,
    pub target: u32,
    pub burned: u32,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Macro {
    pub name: &'static str,
    pub value: u32,
    pub target: u32,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct SleepSummary {
    pub hours: f32,
    pub target: f32,
    pub quality: u8,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct HeartRateSummary {
    pub resting: u32,
    pub max: u32,
    pub zones: [u32; 4],
}

#[derive(Debug, Clone, Serialize)]
pub struct UserMetrics {
    pub name: &'static str,
    pub level: &'static str,
    pub total_points: u32,
    pub week_streak: u32,
    pub monthly_goal: u32,
    pub current_progress: u32,
    pub today_calories: CalorieDay,
    pub macros: [Macro; 3],
    pub workouts: Goal<u32>,
    pub workout_minutes: u32,
    pub hydration: Goal<u32>,
    pub sleep: SleepSummary,
    pub heart_rate: HeartRateSummary,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct DayProgress {
    pub day: &'static str,
    pub calories: u32,
    pub workouts: u32,
    pub mood: u8,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Achievement {
    pub id: u32,
    pub title: &'static str,
    pub unlocked: bool,
    pub points: u32,
}

pub fn user_metrics() -> UserMetrics {
    UserMetrics {
        name: "Alexandra Chen",
        level: "Elite Athlete",
        total_points: 2847,
        week_streak: 14,
        monthly_goal: 85,
        current_progress: 78,
        today_calories: CalorieDay {
            consumed: 1847,
            target: 2200,
            burned: 420,
        },
        macros: [
            Macro { name: "Protein", value: 142, target: 165 },
            Macro { name: "Carbs", value: 165, target: 220 },
            Macro { name: "Fat", value: 58, target: 70 },
        ],
        workouts: Goal { current: 4, target: 5 },
        workout_minutes: 180,
        hydration: Goal { current: 7, target: 10 },
        sleep: SleepSummary {
            hours: 7.2,
            target: 8.0,
            quality: 85,
        },
        heart_rate: HeartRateSummary {
            resting: 58,
            max: 182,
            zones: [65, 78, 89, 95],
        },
    }
}

pub const WEEKLY_PROGRESS: [DayProgress; 7] = [
    DayProgress { day: "Mon", calories: 2100, workouts: 1, mood: 8 },
    DayProgress { day: "Tue", calories: 1950, workouts: 0, mood: 7 },
    DayProgress { day: "Wed", calories: 2200, workouts: 1, mood: 9 },
    DayProgress { day: "Thu", calories: 1800, workouts: 1, mood: 8 },
    DayProgress { day: "Fri", calories: 2350, workouts: 0, mood: 6 },
    DayProgress { day: "Sat", calories: 2100, workouts: 1, mood: 9 },
    DayProgress { day: "Sun", calories: 1847, workouts: 1, mood: 8 },
];

pub const ACHIEVEMENTS: [Achievement; 3] = [
    Achievement { id: 1, title: "7-Day Streak", unlocked: true, points: 100 },
    Achievement { id: 2, title: "Protein Goal", unlocked: true, points: 50 },
    Achievement { id: 3, title: "5K Steps", unlocked: false, points: 25 },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeOfDay {
    Morning,
    Afternoon,
    Evening,
}

impl TimeOfDay {
    pub fn from_hour(hour: u32) -> Self {
        if hour < 12 {
            Self::Morning
        } else if hour < 17 {
            Self::Afternoon
        } else {
            Self::Evening
        }
    }

    pub fn motivation(self) -> &'static str {
        match self {
            Self::Morning => "Time to conquer the day! Your body is ready for greatness 🌅",
            Self::Afternoon => "Keep the momentum going! You're already crushing today 🔥",
            Self::Evening => "Perfect time to wind down and plan tomorrow's victory 🌙",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hour_boundaries() {
        assert_eq!(TimeOfDay::from_hour(0), TimeOfDay::Morning);
        assert_eq!(TimeOfDay::from_hour(11), TimeOfDay::Morning);
        assert_eq!(TimeOfDay::from_hour(12), TimeOfDay::Afternoon);
        assert_eq!(TimeOfDay::from_hour(16), TimeOfDay::Afternoon);
        assert_eq!(TimeOfDay::from_hour(17), TimeOfDay::Evening);
        assert_eq!(TimeOfDay::from_hour(23), TimeOfDay::Evening);
    }
}
