//! Built-in workout programs the store is seeded with

use chrono::Utc;

use crate::models::{Difficulty, Exercise, Workout};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

struct ExerciseSeed<'a> {
    id: u64,
    name: &'a str,
    duration: u32,
    calories: u32,
    sets: Option<u32>,
    reps: Option<u32>,
    rest_time: Option<u32>,
    instructions: &'a [&'a str],
    muscle_groups: &'a [&'a str],
    equipment: &'a [&'a str],
    form_tips: &'a [&'a str],
    breathing_pattern: &'a str,
    difficulty: Difficulty,
}

impl ExerciseSeed<'_> {
    fn build(self, workout_id: u64) -> Exercise {
        Exercise {
            id: self.id,
            workout_id,
            name: self.name.to_string(),
            description: None,
            duration: self.duration,
            calories: self.calories,
            sets: self.sets,
            reps: self.reps,
            weight: None,
            rest_time: self.rest_time,
            instructions: strings(self.instructions),
            muscle_groups: strings(self.muscle_groups),
            equipment: strings(self.equipment),
            form_tips: strings(self.form_tips),
            breathing_pattern: Some(self.breathing_pattern.to_string()),
            difficulty: self.difficulty,
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn program(
    id: u64,
    name: &str,
    description: &str,
    duration: u32,
    calories: u32,
    workout_type: &str,
    difficulty: Difficulty,
    rating: f32,
    completions: u32,
    exercises: Vec<ExerciseSeed<'_>>,
) -> Workout {
    Workout {
        id,
        name: name.to_string(),
        description: Some(description.to_string()),
        duration,
        calories_burned: Some(calories),
        workout_type: workout_type.to_string(),
        difficulty,
        rating: Some(rating),
        completions,
        ai_optimized: true,
        completed: false,
        created_at: Utc::now(),
        exercises: exercises.into_iter().map(|e| e.build(id)).collect(),
    }
}

/// The three featured programs: HIIT, strength and yoga.
pub fn featured_workouts() -> Vec<Workout> {
    vec![
        program(
            1,
            "AI-Optimized HIIT Blast",
            "Scientifically designed high-intensity intervals for maximum fat burn",
            28,
            380,
            "HIIT",
            Difficulty::Advanced,
            4.9,
            1247,
            vec![
                ExerciseSeed {
                    id: 1,
                    name: "Burpee Power Jumps",
                    duration: 45,
                    calories: 18,
                    sets: None,
                    reps: None,
                    rest_time: Some(15),
                    instructions: &[
                        "Start in standing position with feet shoulder-width apart",
                        "Drop into squat, place hands on floor",
                        "Jump feet back into plank position",
                        "Perform push-up, jump feet back to squat",
                        "Explode up with arms overhead",
                    ],
                    muscle_groups: &["Full Body", "Core", "Cardio"],
                    equipment: &["None"],
                    form_tips: &[
                        "Keep core tight throughout movement",
                        "Land softly on jump",
                        "Maintain straight back in plank",
                    ],
                    breathing_pattern: "Exhale on jump up, inhale on squat down",
                    difficulty: Difficulty::Advanced,
                },
                ExerciseSeed {
                    id: 2,
                    name: "Mountain Climber Sprints",
                    duration: 30,
                    calories: 12,
                    sets: None,
                    reps: None,
                    rest_time: Some(30),
                    instructions: &[
                        "Start in high plank position",
                        "Drive right knee toward chest",
                        "Quickly switch legs like running in place",
                        "Maintain plank position throughout",
                    ],
                    muscle_groups: &["Core", "Shoulders", "Cardio"],
                    equipment: &["None"],
                    form_tips: &[
                        "Keep hips level",
                        "Engage core constantly",
                        "Quick, controlled movements",
                    ],
                    breathing_pattern: "Rapid, controlled breathing through nose",
                    difficulty: Difficulty::Intermediate,
                },
            ],
        ),
        program(
            2,
            "Neural Strength Protocol",
            "AI-enhanced strength training for optimal muscle activation",
            45,
            285,
            "Strength",
            Difficulty::Intermediate,
            4.8,
            892,
            vec![ExerciseSeed {
                id: 3,
                name: "Perfect Push-ups",
                duration: 60,
                calories: 15,
                sets: Some(4),
                reps: Some(12),
                rest_time: Some(60),
                instructions: &[
                    "Start in high plank, hands under shoulders",
                    "Lower body as one unit to floor",
                    "Push up explosively",
                    "Maintain straight line from head to heels",
                ],
                muscle_groups: &["Chest", "Shoulders", "Triceps", "Core"],
                equipment: &["None"],
                form_tips: &[
                    "Full range of motion",
                    "Controlled descent",
                    "Engage glutes and core",
                ],
                breathing_pattern: "Inhale down, exhale up forcefully",
                difficulty: Difficulty::Intermediate,
            }],
        ),
        program(
            3,
            "Mindful Movement Flow",
            "AI-guided yoga flow for flexibility and mental clarity",
            35,
            150,
            "Yoga",
            Difficulty::Beginner,
            4.7,
            2156,
            vec![ExerciseSeed {
                id: 4,
                name: "Flowing Warrior Sequence",
                duration: 120,
                calories: 8,
                sets: None,
                reps: None,
                rest_time: None,
                instructions: &[
                    "Begin in mountain pose",
                    "Flow into downward dog",
                    "Step right foot forward to warrior I",
                    "Transition to warrior II",
                    "Return to downward dog, repeat other side",
                ],
                muscle_groups: &["Full Body", "Balance", "Flexibility"],
                equipment: &["Yoga Mat"],
                form_tips: &[
                    "Move with breath",
                    "Keep core engaged",
                    "Find your edge, don't force",
                ],
                breathing_pattern: "Deep ujjayi breathing throughout",
                difficulty: Difficulty::Beginner,
            }],
        ),
    ]
}
