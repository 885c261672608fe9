//! Keyword-matched coach replies

use async_trait::async_trait;

use crate::models::{CoachReply, UserProfile};

/// Produces the coach's side of the conversation.
#[async_trait]
pub trait CoachResponder: Send + Sync {
    async fn respond(&self, input: &str, profile: &UserProfile) -> anyhow::Result<CoachReply>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Topic {
    Workout,
    Meal,
    Progress,
    Motivation,
    Sleep,
    Snack,
    General,
}

impl Topic {
    /// First matching rule wins; matching is on the lower-cased input.
    pub fn classify(input: &str) -> Self {
        let text = input.to_lowercase();
        let has = |words: &[&str]| words.iter().any(|w| text.contains(w));

        if has(&["workout", "exercise"]) {
            Self::Workout
        } else if has(&["food", "meal", "eat", "lunch"]) {
            Self::Meal
        } else if has(&["progress", "track"]) {
            Self::Progress
        } else if has(&["motivat", "help", "encourage"]) {
            Self::Motivation
        } else if has(&["sleep", "rest"]) {
            Self::Sleep
        } else if has(&["snack", "hungry"]) {
            Self::Snack
        } else {
            Self::General
        }
    }
}

fn suggestions(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub fn canned_reply(topic: Topic, profile: &UserProfile) -> CoachReply {
    let goal = profile.goal.to_lowercase();
    match topic {
        Topic::Workout => CoachReply {
            content: format!(
                "Based on your {} fitness level and goal to {goal}, I recommend:\n\n\
                 🏋️ **Today's Workout Plan:**\n\
                 • Warm-up: 5-10 minutes light cardio\n\
                 • Strength: Upper body focus (3 sets each)\n  \
                 - Push-ups: 12-15 reps\n  \
                 - Dumbbell rows: 10-12 reps\n  \
                 - Shoulder press: 8-10 reps\n\
                 • Cool-down: 5-10 minutes stretching\n\n\
                 This should take about 45 minutes. Ready to crush it? 💪",
                profile.fitness_level.to_lowercase()
            ),
            suggestions: suggestions(&["Start this workout", "Modify the plan", "Track my workout"]),
        },
        Topic::Meal => CoachReply {
            content: format!(
                "Perfect timing! For your {goal} goal, here's what I suggest for lunch:\n\n\
                 🥗 **AI-Optimized Lunch:**\n\
                 • **Grilled Chicken Quinoa Bowl** (485 calories)\n  \
                 - 6oz grilled chicken breast (35g protein)\n  \
                 - 1/2 cup quinoa (22g carbs, 4g protein)\n  \
                 - Mixed vegetables (broccoli, bell peppers)\n  \
                 - Avocado slices (healthy fats)\n\n\
                 This meal aligns perfectly with your high-protein, low-carb preferences and will keep you satisfied while supporting your goals! 🎯"
            ),
            suggestions: suggestions(&["Get this recipe", "Suggest alternatives", "Log this meal"]),
        },
        Topic::Progress => CoachReply {
            content: "Let me review your amazing progress! 📈\n\n\
                 **This Week's Highlights:**\n\
                 ✅ 4/5 planned workouts completed\n\
                 ✅ Average daily calories: 2,050 (right on target!)\n\
                 ✅ Protein intake: 165g daily average\n\
                 ✅ 12-day consistency streak\n\n\
                 **Key Insights:**\n\
                 • You're 6 lbs away from your target weight\n\
                 • Strength has improved 15% this month\n\
                 • Sleep quality: 7.2/10 average\n\n\
                 You're doing fantastic! The consistency is really paying off. Keep this momentum going! 🚀"
                .to_string(),
            suggestions: suggestions(&["Set new goals", "Plan next week", "Share progress"]),
        },
        Topic::Motivation => CoachReply {
            content: format!(
                "{}, you are absolutely CRUSHING IT! 🔥\n\n\
                 **Remember why you started:**\n\
                 • You've already come so far - 12 days straight!\n\
                 • Every workout makes you 1% stronger\n\
                 • Your future self will thank you for today's effort\n\n\
                 **Today's power mantra:**\n\
                 \"I am consistent, I am strong, I am worth the effort!\" 💪\n\n\
                 You've got this! What's one small win you can achieve right now?",
                profile.name
            ),
            suggestions: suggestions(&[
                "Plan my next workout",
                "Set a mini goal",
                "Track today's wins",
            ]),
        },
        Topic::Sleep => CoachReply {
            content: format!(
                "Great question! Quality sleep is crucial for your {goal} goals. 😴\n\n\
                 **AI Sleep Optimization Tips:**\n\
                 • Go to bed by 10:30 PM (based on your workout schedule)\n\
                 • No screens 1 hour before bed\n\
                 • Keep bedroom at 65-68°F\n\
                 • Try magnesium supplement 30 mins before bed\n\
                 • Morning sunlight within first hour of waking\n\n\
                 **Tonight's goal:** Aim for 7-8 hours to support muscle recovery and fat loss!"
            ),
            suggestions: suggestions(&[
                "Set sleep reminder",
                "Track sleep tonight",
                "More recovery tips",
            ]),
        },
        Topic::Snack => CoachReply {
            content: "Smart snacking for your goals! 🍎\n\n\
                      **AI-Recommended Snacks:**\n\
                      • **Greek yogurt + berries** (150 cal, 15g protein)\n\
                      • **Apple + almond butter** (180 cal, balanced macros)\n\
                      • **Hard-boiled eggs** (140 cal, 12g protein)\n\
                      • **Protein smoothie** (200 cal, 25g protein)\n\n\
                      These will keep you satisfied and aligned with your high-protein preferences without derailing your calorie goals!"
                .to_string(),
            suggestions: suggestions(&["Log my snack", "Prep snacks for tomorrow", "More options"]),
        },
        Topic::General => CoachReply {
            content: "I'm here to help with your fitness and nutrition journey! I can assist with:\n\n\
                      🏋️ Workout planning and tracking\n\
                      🥗 Meal suggestions and nutrition advice\n\
                      📊 Progress analysis and insights\n\
                      💪 Motivation and goal setting\n\
                      😴 Recovery and sleep optimization\n\n\
                      What would you like to focus on today?"
                .to_string(),
            suggestions: suggestions(&[
                "Plan my workout",
                "Suggest a meal",
                "Review my progress",
                "Motivate me",
            ]),
        },
    }
}

/// Responder backed by the fixed reply table
#[derive(Debug, Default, Clone, Copy)]
pub struct CannedCoach;

#[async_trait]
impl CoachResponder for CannedCoach {
    async fn respond(&self, input: &str, profile: &UserProfile) -> anyhow::Result<CoachReply> {
        let topic = Topic::classify(input);
        tracing::debug!(?topic, "coach topic selected");
        Ok(canned_reply(topic, profile))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::coach::default_profile;

    #[test]
    fn classifies_by_first_matching_rule() {
        assert_eq!(Topic::classify("Plan my WORKOUT"), Topic::Workout);
        assert_eq!(Topic::classify("What should I eat for lunch today?"), Topic::Meal);
        // "track my workout" hits the workout rule before the progress rule
        assert_eq!(Topic::classify("Track my workout"), Topic::Workout);
        assert_eq!(Topic::classify("Track my weekly progress"), Topic::Progress);
        assert_eq!(Topic::classify("Help me stay motivated"), Topic::Motivation);
        assert_eq!(Topic::classify("How can I improve my sleep?"), Topic::Sleep);
        assert_eq!(Topic::classify("I'm hungry"), Topic::Snack);
        assert_eq!(Topic::classify("hello there"), Topic::General);
    }

    #[test]
    fn eat_outranks_snack() {
        assert_eq!(Topic::classify("Suggest a healthy snack"), Topic::Snack);
        assert_eq!(Topic::classify("a snack to eat"), Topic::Meal);
    }

    #[test]
    fn replies_are_personalized() {
        let profile = default_profile();

        let workout = canned_reply(Topic::Workout, &profile);
        assert!(workout
            .content
            .starts_with("Based on your intermediate fitness level and goal to lose weight and build muscle"));
        assert_eq!(workout.suggestions.len(), 3);

        let motivation = canned_reply(Topic::Motivation, &profile);
        assert!(motivation.content.starts_with("Alex, you are absolutely CRUSHING IT!"));

        let progress = canned_reply(Topic::Progress, &profile);
        assert!(progress.content.contains("4/5 planned workouts completed"));

        assert_eq!(canned_reply(Topic::General, &profile).suggestions.len(), 4);
    }

    #[tokio::test]
    async fn canned_coach_never_fails() {
        let reply = CannedCoach
            .respond("sleep tips please", &default_profile())
            .await
            .unwrap();
        assert!(reply.content.contains("Sleep Optimization"));
    }
}
