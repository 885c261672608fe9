//! In-memory workout store

use std::collections::BTreeMap;

use chrono::Utc;
use tracing::debug;

use crate::{
    catalog::workouts::featured_workouts,
    error::{FitError, FitResult},
    models::{Exercise, Workout, WorkoutCreate, WorkoutStats, WorkoutSummary, WorkoutUpdate},
};

pub const WORKOUT_NOT_FOUND: &str = "Workout not found";

#[derive(Debug, Default)]
pub struct WorkoutStore {
    workouts: BTreeMap<u64, Workout>,
    next_workout_id: u64,
    next_exercise_id: u64,
}

impl WorkoutStore {
    pub fn new() -> Self {
        Self {
            workouts: BTreeMap::new(),
            next_workout_id: 1,
            next_exercise_id: 1,
        }
    }

    /// Store pre-loaded with the featured programs
    pub fn seeded() -> Self {
        let mut store = Self::new();
        for workout in featured_workouts() {
            store.insert(workout);
        }
        store
    }

    fn insert(&mut self, workout: Workout) {
        self.next_workout_id = self.next_workout_id.max(workout.id + 1);
        if let Some(max) = workout.exercises.iter().map(|e| e.id).max() {
            self.next_exercise_id = self.next_exercise_id.max(max + 1);
        }
        self.workouts.insert(workout.id, workout);
    }

    pub fn create(&mut self, request: WorkoutCreate) -> FitResult<Workout> {
        if request.name.trim().is_empty() {
            return Err(FitError::bad_request("Workout name must not be empty"));
        }

        let id = self.next_workout_id;
        self.next_workout_id += 1;

        let exercises = request
            .exercises
            .into_iter()
            .map(|e| {
                let exercise_id = self.next_exercise_id;
                self.next_exercise_id += 1;
                Exercise {
                    id: exercise_id,
                    workout_id: id,
                    name: e.name,
                    description: e.description,
                    duration: e.duration,
                    calories: e.calories,
                    sets: e.sets,
                    reps: e.reps,
                    weight: e.weight,
                    rest_time: e.rest_time,
                    instructions: e.instructions,
                    muscle_groups: e.muscle_groups,
                    equipment: e.equipment,
                    form_tips: e.form_tips,
                    breathing_pattern: e.breathing_pattern,
                    difficulty: e.difficulty.unwrap_or(request.difficulty),
                }
            })
            .collect();

        let workout = Workout {
            id,
            name: request.name,
            description: request.description,
            duration: request.duration,
            calories_burned: request.calories_burned,
            workout_type: request.workout_type,
            difficulty: request.difficulty,
            rating: None,
            completions: 0,
            ai_optimized: false,
            completed: false,
            created_at: Utc::now(),
            exercises,
        };

        debug!(id, name = %workout.name, "workout created");
        self.workouts.insert(id, workout.clone());
        Ok(workout)
    }

    pub fn list(&self, skip: usize, limit: usize) -> Vec<WorkoutSummary> {
        self.workouts
            .values()
            .skip(skip)
            .take(limit)
            .map(WorkoutSummary::from)
            .collect()
    }

    pub fn get(&self, id: u64) -> FitResult<Workout> {
        self.workouts
            .get(&id)
            .cloned()
            .ok_or_else(|| FitError::not_found(WORKOUT_NOT_FOUND))
    }

    pub fn update(&mut self, id: u64, update: WorkoutUpdate) -> FitResult<Workout> {
        let workout = self
            .workouts
            .get_mut(&id)
            .ok_or_else(|| FitError::not_found(WORKOUT_NOT_FOUND))?;

        if let Some(name) = update.name {
            if name.trim().is_empty() {
                return Err(FitError::bad_request("Workout name must not be empty"));
            }
            workout.name = name;
        }
        if let Some(description) = update.description {
            workout.description = Some(description);
        }
        if let Some(duration) = update.duration {
            workout.duration = duration;
        }
        if let Some(calories) = update.calories_burned {
            workout.calories_burned = Some(calories);
        }
        if let Some(workout_type) = update.workout_type {
            workout.workout_type = workout_type;
        }
        if let Some(difficulty) = update.difficulty {
            workout.difficulty = difficulty;
        }
        if let Some(completed) = update.completed {
            workout.completed = completed;
        }

        Ok(workout.clone())
    }

    pub fn delete(&mut self, id: u64) -> FitResult<()> {
        self.workouts
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| FitError::not_found(WORKOUT_NOT_FOUND))
    }

    pub fn complete(&mut self, id: u64) -> FitResult<Workout> {
        let workout = self
            .workouts
            .get_mut(&id)
            .ok_or_else(|| FitError::not_found(WORKOUT_NOT_FOUND))?;
        workout.completed = true;
        workout.completions += 1;
        Ok(workout.clone())
    }

    pub fn stats(&self) -> WorkoutStats {
        let total_workouts = self.workouts.len();
        let completed: Vec<&Workout> = self.workouts.values().filter(|w| w.completed).collect();
        let completed_workouts = completed.len();

        let completion_rate = if total_workouts > 0 {
            completed_workouts as f64 / total_workouts as f64 * 100.0
        } else {
            0.0
        };

        WorkoutStats {
            total_workouts,
            completed_workouts,
            total_duration_minutes: completed.iter().map(|w| u64::from(w.duration)).sum(),
            total_calories_burned: completed
                .iter()
                .filter_map(|w| w.calories_burned)
                .map(u64::from)
                .sum(),
            completion_rate,
        }
    }

    pub fn len(&self) -> usize {
        self.workouts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.workouts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Difficulty, ExerciseCreate};

    fn request(name: &str) -> WorkoutCreate {
        WorkoutCreate {
            name: name.to_string(),
            description: None,
            duration: 20,
            calories_burned: Some(200),
            workout_type: "cardio".to_string(),
            difficulty: Difficulty::Beginner,
            exercises: vec![ExerciseCreate {
                name: "Jumping Jacks".to_string(),
                description: None,
                duration: 60,
                calories: 10,
                sets: None,
                reps: None,
                weight: None,
                rest_time: None,
                instructions: vec![],
                muscle_groups: vec![],
                equipment: vec![],
                form_tips: vec![],
                breathing_pattern: None,
                difficulty: None,
            }],
        }
    }

    #[test]
    fn seeded_store_continues_ids_after_catalog() {
        let mut store = WorkoutStore::seeded();
        assert_eq!(store.len(), 3);

        let created = store.create(request("Morning Run")).unwrap();
        assert_eq!(created.id, 4);
        assert_eq!(created.exercises[0].id, 5);
        assert_eq!(created.exercises[0].workout_id, 4);
        assert_eq!(created.exercises[0].difficulty, Difficulty::Beginner);
    }

    #[test]
    fn blank_name_is_rejected() {
        let mut store = WorkoutStore::new();
        assert!(matches!(
            store.create(request("  ")),
            Err(FitError::BadRequest(_))
        ));
        assert!(store.is_empty());
    }

    #[test]
    fn list_pages_in_id_order() {
        let store = WorkoutStore::seeded();
        let page: Vec<u64> = store.list(1, 1).iter().map(|w| w.id).collect();
        assert_eq!(page, vec![2]);
        assert_eq!(store.list(0, 100).len(), 3);
    }

    #[test]
    fn partial_update_keeps_other_fields() {
        let mut store = WorkoutStore::seeded();
        let updated = store
            .update(
                2,
                WorkoutUpdate {
                    duration: Some(50),
                    ..Default::default()
                },
            )
            .unwrap();
        assert_eq!(updated.duration, 50);
        assert_eq!(updated.name, "Neural Strength Protocol");
    }

    #[test]
    fn unknown_ids_are_not_found() {
        let mut store = WorkoutStore::seeded();
        assert!(matches!(store.get(99), Err(FitError::NotFound(_))));
        assert!(matches!(store.delete(99), Err(FitError::NotFound(_))));
        assert!(matches!(store.complete(99), Err(FitError::NotFound(_))));
    }

    #[test]
    fn stats_cover_completed_workouts_only() {
        let mut store = WorkoutStore::seeded();
        store.complete(1).unwrap();
        store.complete(3).unwrap();

        let stats = store.stats();
        assert_eq!(stats.total_workouts, 3);
        assert_eq!(stats.completed_workouts, 2);
        assert_eq!(stats.total_duration_minutes, 28 + 35);
        assert_eq!(stats.total_calories_burned, 380 + 150);
        assert!((stats.completion_rate - 200.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn empty_store_has_zero_completion_rate() {
        assert_eq!(WorkoutStore::new().stats().completion_rate, 0.0);
    }
}
