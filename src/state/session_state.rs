//! Workout session (guided timer) state

use serde::Serialize;

use crate::{
    error::{FitError, FitResult},
    models::{Exercise, Workout},
    utils::format_clock,
};

pub const STARTING_HEART_RATE: f64 = 85.0;
pub const DEFAULT_INTENSITY: u8 = 7;
/// Calories credited per running second.
pub const CALORIES_PER_SECOND: f64 = 0.1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum HeartRateZone {
    Rest,
    #[serde(rename = "Fat Burn")]
    FatBurn,
    Cardio,
    Peak,
}

impl HeartRateZone {
    pub fn for_rate(bpm: f64) -> Self {
        if bpm < 100.0 {
            Self::Rest
        } else if bpm < 140.0 {
            Self::FatBurn
        } else if bpm < 170.0 {
            Self::Cardio
        } else {
            Self::Peak
        }
    }
}

/// What a tick or skip did to the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Progress {
    /// Session is paused, nothing changed
    Idle,
    /// One second elapsed on the current exercise
    Counting,
    /// Moved on to the next exercise, paused
    Advanced,
    /// Last exercise done; the session should be dropped
    Finished,
}

#[derive(Debug, Clone)]
pub struct WorkoutSession {
    workout: Workout,
    exercise_index: usize,
    seconds_left: u32,
    running: bool,
    calories_burned: f64,
    heart_rate: f64,
    intensity: u8,
}

impl WorkoutSession {
    /// Begin a paused session on the first exercise
    pub fn start(workout: Workout) -> FitResult<Self> {
        let first = workout
            .exercises
            .first()
            .ok_or_else(|| FitError::bad_request("Workout has no exercises"))?;
        let seconds_left = first.duration;

        Ok(Self {
            workout,
            exercise_index: 0,
            seconds_left,
            running: false,
            calories_burned: 0.0,
            heart_rate: STARTING_HEART_RATE,
            intensity: DEFAULT_INTENSITY,
        })
    }

    pub fn workout_id(&self) -> u64 {
        self.workout.id
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn seconds_left(&self) -> u32 {
        self.seconds_left
    }

    pub fn exercise_index(&self) -> usize {
        self.exercise_index
    }

    pub fn current_exercise(&self) -> &Exercise {
        // start() guarantees at least one exercise and advance() never overruns
        &self.workout.exercises[self.exercise_index]
    }

    /// Flip between running and paused, returning the new running flag
    pub fn toggle(&mut self) -> bool {
        self.running = !self.running;
        self.running
    }

    /// One second of wall time. `jitter` is added to the heart rate.
    pub fn tick(&mut self, jitter: f64) -> Progress {
        if !self.running {
            return Progress::Idle;
        }

        if self.seconds_left > 0 {
            self.seconds_left -= 1;
            self.calories_burned += CALORIES_PER_SECOND;
            self.heart_rate += jitter;
        }

        if self.seconds_left == 0 {
            self.advance()
        } else {
            Progress::Counting
        }
    }

    /// Skip to the next exercise, or finish the workout after the last one
    pub fn advance(&mut self) -> Progress {
        if self.exercise_index + 1 < self.workout.exercises.len() {
            self.exercise_index += 1;
            self.seconds_left = self.current_exercise().duration;
            self.running = false;
            Progress::Advanced
        } else {
            self.running = false;
            Progress::Finished
        }
    }

    /// Restart the clock on the current exercise
    pub fn reset(&mut self) {
        self.seconds_left = self.current_exercise().duration;
        self.running = false;
    }

    pub fn set_intensity(&mut self, level: i64) -> FitResult<()> {
        self.intensity = u8::try_from(level)
            .ok()
            .filter(|l| (1..=10).contains(l))
            .ok_or_else(|| FitError::bad_request("Intensity must be between 1 and 10"))?;
        Ok(())
    }

    /// Share of the current exercise already done, in percent
    pub fn exercise_progress(&self) -> f64 {
        let duration = self.current_exercise().duration;
        if duration == 0 {
            return 100.0;
        }
        f64::from(duration - self.seconds_left.min(duration)) / f64::from(duration) * 100.0
    }

    /// Share of the whole workout done, counting the current exercise partially
    pub fn workout_progress(&self) -> f64 {
        let count = self.workout.exercises.len() as f64;
        (self.exercise_index as f64 + self.exercise_progress() / 100.0) / count * 100.0
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            workout_id: self.workout.id,
            workout_name: self.workout.name.clone(),
            exercise_index: self.exercise_index,
            exercise_count: self.workout.exercises.len(),
            exercise: self.current_exercise().clone(),
            seconds_left: self.seconds_left,
            clock: format_clock(self.seconds_left),
            running: self.running,
            exercise_progress: self.exercise_progress(),
            workout_progress: self.workout_progress(),
            calories_burned: self.calories_burned.round() as u32,
            heart_rate: self.heart_rate.round() as u32,
            heart_rate_zone: HeartRateZone::for_rate(self.heart_rate),
            intensity: self.intensity,
        }
    }
}

/// Read-only view of a session handed to clients and the timer task
#[derive(Debug, Clone, Serialize)]
pub struct SessionSnapshot {
    pub workout_id: u64,
    pub workout_name: String,
    pub exercise_index: usize,
    pub exercise_count: usize,
    pub exercise: Exercise,
    pub seconds_left: u32,
    pub clock: String,
    pub running: bool,
    pub exercise_progress: f64,
    pub workout_progress: f64,
    pub calories_burned: u32,
    pub heart_rate: u32,
    pub heart_rate_zone: HeartRateZone,
    pub intensity: u8,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::workouts::featured_workouts;

    fn hiit() -> Workout {
        featured_workouts().remove(0)
    }

    #[test]
    fn starts_paused_on_first_exercise() {
        let session = WorkoutSession::start(hiit()).unwrap();
        let snap = session.snapshot();

        assert!(!snap.running);
        assert_eq!(snap.exercise_index, 0);
        assert_eq!(snap.seconds_left, 45);
        assert_eq!(snap.clock, "0:45");
        assert_eq!(snap.heart_rate, 85);
        assert_eq!(snap.heart_rate_zone, HeartRateZone::Rest);
        assert_eq!(snap.intensity, DEFAULT_INTENSITY);
    }

    #[test]
    fn rejects_workout_without_exercises() {
        let mut workout = hiit();
        workout.exercises.clear();
        assert!(matches!(
            WorkoutSession::start(workout),
            Err(FitError::BadRequest(_))
        ));
    }

    #[test]
    fn paused_session_does_not_count() {
        let mut session = WorkoutSession::start(hiit()).unwrap();
        assert_eq!(session.tick(1.0), Progress::Idle);
        assert_eq!(session.seconds_left(), 45);
    }

    #[test]
    fn running_session_counts_down_and_burns_calories() {
        let mut session = WorkoutSession::start(hiit()).unwrap();
        session.toggle();
        for _ in 0..10 {
            assert_eq!(session.tick(0.0), Progress::Counting);
        }
        let snap = session.snapshot();
        assert_eq!(snap.seconds_left, 35);
        assert_eq!(snap.calories_burned, 1);
        assert!(snap.running);
    }

    #[test]
    fn reaching_zero_moves_to_next_exercise_paused() {
        let mut session = WorkoutSession::start(hiit()).unwrap();
        session.toggle();
        for _ in 0..44 {
            session.tick(0.0);
        }
        assert_eq!(session.tick(0.0), Progress::Advanced);
        assert_eq!(session.exercise_index(), 1);
        assert_eq!(session.seconds_left(), 30);
        assert!(!session.is_running());
    }

    #[test]
    fn finishing_last_exercise_reports_finished() {
        let mut session = WorkoutSession::start(hiit()).unwrap();
        assert_eq!(session.advance(), Progress::Advanced);
        session.toggle();
        for _ in 0..29 {
            assert_eq!(session.tick(0.0), Progress::Counting);
        }
        assert_eq!(session.tick(0.0), Progress::Finished);
    }

    #[test]
    fn reset_restores_full_duration() {
        let mut session = WorkoutSession::start(hiit()).unwrap();
        session.toggle();
        session.tick(0.0);
        session.tick(0.0);
        session.reset();
        assert_eq!(session.seconds_left(), 45);
        assert!(!session.is_running());
    }

    #[test]
    fn progress_counts_partial_exercise() {
        let mut session = WorkoutSession::start(hiit()).unwrap();
        session.advance();
        session.toggle();
        for _ in 0..15 {
            session.tick(0.0);
        }
        assert_eq!(session.exercise_progress(), 50.0);
        assert_eq!(session.workout_progress(), 75.0);
    }

    #[test]
    fn intensity_is_bounded() {
        let mut session = WorkoutSession::start(hiit()).unwrap();
        assert!(session.set_intensity(0).is_err());
        assert!(session.set_intensity(11).is_err());
        assert!(session.set_intensity(-1).is_err());
        assert!(session.set_intensity(256).is_err());
        assert_eq!(session.snapshot().intensity, DEFAULT_INTENSITY);
        session.set_intensity(10).unwrap();
        assert_eq!(session.snapshot().intensity, 10);
    }

    #[test]
    fn heart_rate_zones() {
        assert_eq!(HeartRateZone::for_rate(99.6), HeartRateZone::Rest);
        assert_eq!(HeartRateZone::for_rate(100.0), HeartRateZone::FatBurn);
        assert_eq!(HeartRateZone::for_rate(142.0), HeartRateZone::Cardio);
        assert_eq!(HeartRateZone::for_rate(170.0), HeartRateZone::Peak);
    }
}
