//! Main application state management

use std::{
    sync::{Arc, Mutex, MutexGuard},
    time::{Duration, Instant},
};
use chrono::{DateTime, Local, Utc};
use rand::Rng;
use tokio::sync::watch;
use tracing::{debug, error, info, warn};

use crate::{
    catalog::{coach as coach_catalog, foods::recognizable_foods, meals::sample_meals},
    config::Config,
    error::{FitError, FitResult},
    models::{
        ChatMessage, CoachReply, DayPlan, FoodLogEntry, Meal, PantryItem, PantryRecipe, Role,
        ScanResult, ScanSource, UserProfile, Workout, WorkoutCreate, WorkoutStats, WorkoutSummary,
        WorkoutUpdate,
    },
    services::{planner, CannedCoach, CoachResponder, FoodRecognizer, RandomRecognizer},
    utils::format_uptime,
};

use super::{
    Conversation, Kitchen, MealPlan, Progress, SessionSnapshot, WorkoutSession, WorkoutStore,
};

/// Heart rate drift per tick is drawn from `[-HEART_RATE_JITTER, HEART_RATE_JITTER)`.
const HEART_RATE_JITTER: f64 = 2.0;

/// A user message together with the coach's answer to it
#[derive(Debug, Clone, serde::Serialize)]
pub struct CoachExchange {
    pub question: ChatMessage,
    pub answer: ChatMessage,
}

fn lock<'a, T>(mutex: &'a Mutex<T>, what: &'static str) -> FitResult<MutexGuard<'a, T>> {
    mutex.lock().map_err(|_| FitError::StatePoisoned(what))
}

/// Main application state shared by every handler and the timer task
pub struct AppState {
    /// Stored workouts (seeded with the featured programs)
    pub workouts: Mutex<WorkoutStore>,
    /// Guided workout in progress, if any
    pub session: Mutex<Option<WorkoutSession>>,
    /// Latest session snapshot for the timer task
    pub session_tx: watch::Sender<Option<SessionSnapshot>>,
    pub meal_plan: Mutex<MealPlan>,
    pub kitchen: Mutex<Kitchen>,
    pub conversation: Mutex<Conversation>,
    pub profile: UserProfile,
    coach: Arc<dyn CoachResponder>,
    recognizer: Arc<dyn FoodRecognizer>,
    pub coach_delay: Duration,
    pub scan_delay: Duration,
    /// Server metadata
    pub start_time: Instant,
    pub port: u16,
    pub host: String,
    /// Last action tracking
    pub last_action: Mutex<Option<(String, DateTime<Utc>)>>,
}

impl AppState {
    /// Create a new AppState with the canned coach and random recognizer
    pub fn new(config: &Config) -> Self {
        Self::with_services(config, Arc::new(CannedCoach), Arc::new(RandomRecognizer::new()))
    }

    pub fn with_services(
        config: &Config,
        coach: Arc<dyn CoachResponder>,
        recognizer: Arc<dyn FoodRecognizer>,
    ) -> Self {
        let profile = coach_catalog::default_profile();
        let conversation = Conversation::with_welcome(coach_catalog::welcome(&profile));
        let (session_tx, _) = watch::channel(None);

        Self {
            workouts: Mutex::new(WorkoutStore::seeded()),
            session: Mutex::new(None),
            session_tx,
            meal_plan: Mutex::new(MealPlan::new()),
            kitchen: Mutex::new(Kitchen::new()),
            conversation: Mutex::new(conversation),
            profile,
            coach,
            recognizer,
            coach_delay: config.coach_delay(),
            scan_delay: config.scan_delay(),
            start_time: Instant::now(),
            port: config.port,
            host: config.host.clone(),
            last_action: Mutex::new(None),
        }
    }

    fn record_action(&self, action: &str) {
        if let Ok(mut last) = self.last_action.lock() {
            *last = Some((action.to_string(), Utc::now()));
        }
    }

    /// Get last action information
    pub fn get_last_action(&self) -> (Option<String>, Option<DateTime<Utc>>) {
        match self.last_action.lock().ok().and_then(|a| a.clone()) {
            Some((action, at)) => (Some(action), Some(at)),
            None => (None, None),
        }
    }

    pub fn get_uptime(&self) -> String {
        format_uptime(self.start_time.elapsed())
    }

    // ---- workouts ----

    pub fn create_workout(&self, request: WorkoutCreate) -> FitResult<Workout> {
        let workout = lock(&self.workouts, "workouts")?.create(request)?;
        info!(id = workout.id, "Workout created: {}", workout.name);
        self.record_action("workout-create");
        Ok(workout)
    }

    pub fn list_workouts(&self, skip: usize, limit: usize) -> FitResult<Vec<WorkoutSummary>> {
        Ok(lock(&self.workouts, "workouts")?.list(skip, limit))
    }

    pub fn get_workout(&self, id: u64) -> FitResult<Workout> {
        lock(&self.workouts, "workouts")?.get(id)
    }

    pub fn update_workout(&self, id: u64, update: WorkoutUpdate) -> FitResult<Workout> {
        let workout = lock(&self.workouts, "workouts")?.update(id, update)?;
        self.record_action("workout-update");
        Ok(workout)
    }

    pub fn delete_workout(&self, id: u64) -> FitResult<()> {
        lock(&self.workouts, "workouts")?.delete(id)?;
        info!(id, "Workout deleted");
        self.record_action("workout-delete");
        Ok(())
    }

    pub fn complete_workout(&self, id: u64) -> FitResult<Workout> {
        let workout = lock(&self.workouts, "workouts")?.complete(id)?;
        info!(id, "Workout marked completed");
        self.record_action("workout-complete");
        Ok(workout)
    }

    pub fn workout_stats(&self) -> FitResult<WorkoutStats> {
        Ok(lock(&self.workouts, "workouts")?.stats())
    }

    // ---- workout session ----

    /// Watch the session; `None` means no workout is in progress
    pub fn subscribe_session(&self) -> watch::Receiver<Option<SessionSnapshot>> {
        self.session_tx.subscribe()
    }

    fn publish_session(&self, snapshot: Option<SessionSnapshot>) {
        self.session_tx.send_replace(snapshot);
    }

    pub fn session_snapshot(&self) -> FitResult<Option<SessionSnapshot>> {
        Ok(lock(&self.session, "session")?
            .as_ref()
            .map(WorkoutSession::snapshot))
    }

    /// Start a guided session, replacing any session already in progress
    pub fn start_session(&self, workout_id: u64) -> FitResult<SessionSnapshot> {
        let workout = self.get_workout(workout_id)?;
        let name = workout.name.clone();
        let session = WorkoutSession::start(workout)?;
        let snapshot = session.snapshot();

        let replaced = lock(&self.session, "session")?.replace(session);
        if let Some(old) = replaced {
            debug!(workout_id = old.workout_id(), "Replacing unfinished session");
        }

        info!(workout_id, "Starting workout: {}", name);
        self.record_action("session-start");
        self.publish_session(Some(snapshot.clone()));
        Ok(snapshot)
    }

    /// Apply `updater` to the running session and publish the result.
    /// Returns `None` when the update finished the workout. `action` is
    /// recorded as the last action when given.
    pub fn update_session<F>(&self, action: Option<&str>, updater: F) -> FitResult<Option<SessionSnapshot>>
    where
        F: FnOnce(&mut WorkoutSession) -> FitResult<Progress>,
    {
        let mut guard = lock(&self.session, "session")?;
        let session = guard
            .as_mut()
            .ok_or_else(|| FitError::not_found("No workout in progress"))?;

        let progress = updater(session)?;
        let finished_workout = match progress {
            Progress::Finished => guard.take().map(|s| s.workout_id()),
            _ => None,
        };
        let snapshot = guard.as_ref().map(WorkoutSession::snapshot);
        drop(guard); // Release before touching the workout store

        if progress == Progress::Advanced {
            debug!("Moving to next exercise");
        }

        if let Some(workout_id) = finished_workout {
            info!(workout_id, "Workout completed!");
            if let Err(e) = self.complete_workout(workout_id) {
                warn!(workout_id, "Finished session for a missing workout: {}", e);
            }
        }

        if let Some(action) = action {
            self.record_action(action);
        }
        self.publish_session(snapshot.clone());
        Ok(snapshot)
    }

    pub fn toggle_session(&self) -> FitResult<Option<SessionSnapshot>> {
        self.update_session(Some("session-toggle"), |s| {
            let running = s.toggle();
            debug!("Timer toggled, running: {}", running);
            Ok(Progress::Idle)
        })
    }

    /// Advance the clock by one second. No session is not an error here.
    pub fn tick_session(&self) -> FitResult<Option<SessionSnapshot>> {
        let jitter = rand::thread_rng().gen_range(-HEART_RATE_JITTER..HEART_RATE_JITTER);

        // A paused session ticks as Idle; one ended meanwhile just stops the clock
        match self.update_session(None, |s| Ok(s.tick(jitter))) {
            Err(FitError::NotFound(_)) => Ok(None),
            result => result,
        }
    }

    pub fn next_exercise(&self) -> FitResult<Option<SessionSnapshot>> {
        self.update_session(Some("session-next"), |s| Ok(s.advance()))
    }

    pub fn reset_exercise(&self) -> FitResult<Option<SessionSnapshot>> {
        self.update_session(Some("session-reset"), |s| {
            s.reset();
            Ok(Progress::Idle)
        })
    }

    pub fn set_intensity(&self, level: i64) -> FitResult<Option<SessionSnapshot>> {
        self.update_session(Some("session-intensity"), |s| {
            s.set_intensity(level)?;
            Ok(Progress::Idle)
        })
    }

    /// Abandon the session without completing the workout
    pub fn end_session(&self) -> FitResult<()> {
        let ended = lock(&self.session, "session")?.take();
        if ended.is_none() {
            return Err(FitError::not_found("No workout in progress"));
        }
        info!("Workout ended early");
        self.record_action("session-end");
        self.publish_session(None);
        Ok(())
    }

    // ---- meal planner ----

    pub fn meal_catalog(&self) -> Vec<Meal> {
        sample_meals()
    }

    pub fn meal_suggestions(&self) -> FitResult<Vec<Meal>> {
        let kitchen = lock(&self.kitchen, "kitchen")?;
        Ok(vec![planner::stir_fry_suggestion(|name| kitchen.has_ingredient(name))])
    }

    /// Look a meal up among the samples and the current suggestions
    pub fn find_meal(&self, id: &str) -> FitResult<Meal> {
        self.meal_catalog()
            .into_iter()
            .chain(self.meal_suggestions()?)
            .find(|m| m.id == id)
            .ok_or_else(|| FitError::not_found("Meal not found"))
    }

    pub fn today(&self) -> FitResult<DayPlan> {
        let plan = lock(&self.meal_plan, "meal plan")?;
        let totals = planner::totals(&plan.meals);
        Ok(DayPlan {
            meals: plan.meals.clone(),
            totals,
            goals: plan.goals,
            progress: planner::progress(&totals, &plan.goals),
        })
    }

    pub fn add_meal_to_today(&self, meal_id: &str) -> FitResult<DayPlan> {
        let meal = self.find_meal(meal_id)?;
        info!("Adding meal to day: {}", meal.name);
        lock(&self.meal_plan, "meal plan")?.add(meal);
        self.record_action("meal-add");
        self.today()
    }

    pub fn remove_meal_from_today(&self, meal_id: &str) -> FitResult<DayPlan> {
        let removed = lock(&self.meal_plan, "meal plan")?.remove(meal_id);
        if removed == 0 {
            return Err(FitError::not_found("Meal is not planned for today"));
        }
        info!(removed, "Removing meal from day: {}", meal_id);
        self.record_action("meal-remove");
        self.today()
    }

    pub fn planned_meal_count(&self) -> FitResult<usize> {
        Ok(lock(&self.meal_plan, "meal plan")?.len())
    }

    // ---- AI coach ----

    pub fn conversation(&self) -> FitResult<Vec<ChatMessage>> {
        Ok(lock(&self.conversation, "conversation")?.messages().to_vec())
    }

    pub fn conversation_len(&self) -> FitResult<usize> {
        Ok(lock(&self.conversation, "conversation")?.len())
    }

    /// Record the user's message, wait out the "thinking" delay, then record
    /// the coach's reply. A failing responder yields the apology text.
    pub async fn send_message(&self, text: &str) -> FitResult<CoachExchange> {
        if text.trim().is_empty() {
            return Err(FitError::bad_request("Message must not be empty"));
        }

        let question = lock(&self.conversation, "conversation")?.push_user(text);
        debug!("Sending message: {}", text);
        self.record_action("coach-message");

        tokio::time::sleep(self.coach_delay).await;

        let reply = match self.coach.respond(text, &self.profile).await {
            Ok(reply) => reply,
            Err(e) => {
                error!("AI response error: {}", e);
                CoachReply {
                    content: coach_catalog::APOLOGY.to_string(),
                    suggestions: Vec::new(),
                }
            }
        };

        let answer = lock(&self.conversation, "conversation")?.push(Role::Coach, reply);
        Ok(CoachExchange { question, answer })
    }

    /// Start over with only the welcome message
    pub fn clear_conversation(&self) -> FitResult<Vec<ChatMessage>> {
        let mut conversation = lock(&self.conversation, "conversation")?;
        *conversation = Conversation::with_welcome(coach_catalog::welcome(&self.profile));
        self.record_action("coach-clear");
        Ok(conversation.messages().to_vec())
    }

    // ---- food scanner ----

    /// Simulated recognition; the image is only checked for presence.
    pub async fn scan(&self, source: ScanSource, image: &[u8]) -> FitResult<ScanResult> {
        if image.is_empty() {
            return Err(FitError::bad_request("An image is required for food scanning"));
        }

        info!(?source, bytes = image.len(), "Simulating food recognition");
        tokio::time::sleep(self.scan_delay).await;

        let food = self.recognizer.recognize(image).map_err(|e| {
            error!("Food recognition failed: {}", e);
            FitError::Unavailable("Food recognition failed".to_string())
        })?;

        let result = ScanResult {
            source,
            advice: food.nutrition_grade.advice(),
            food,
            scanned_at: Utc::now(),
        };
        lock(&self.kitchen, "kitchen")?.record_scan(result.clone());
        self.record_action("scan");
        Ok(result)
    }

    pub fn scan_history(&self) -> FitResult<Vec<ScanResult>> {
        Ok(lock(&self.kitchen, "kitchen")?.scans().to_vec())
    }

    pub fn pantry(&self) -> FitResult<Vec<PantryItem>> {
        Ok(lock(&self.kitchen, "kitchen")?.pantry().to_vec())
    }

    pub fn add_to_pantry(&self, name: &str) -> FitResult<PantryItem> {
        let today = Local::now().date_naive();
        let item = lock(&self.kitchen, "kitchen")?.add_to_pantry(name, today)?;
        info!("Adding to pantry: {}", item.name);
        self.record_action("pantry-add");
        Ok(item)
    }

    pub fn remove_from_pantry(&self, id: u64) -> FitResult<PantryItem> {
        let item = lock(&self.kitchen, "kitchen")?.remove_from_pantry(id)?;
        self.record_action("pantry-remove");
        Ok(item)
    }

    pub fn pantry_recipes(&self) -> FitResult<Vec<PantryRecipe>> {
        let kitchen = lock(&self.kitchen, "kitchen")?;
        Ok(planner::cookable_recipes(|name| kitchen.has_ingredient(name)))
    }

    /// Log a recognizable food to the diary by its id
    pub fn log_food(&self, food_id: &str) -> FitResult<FoodLogEntry> {
        let food = recognizable_foods()
            .into_iter()
            .find(|f| f.id == food_id)
            .ok_or_else(|| FitError::not_found("Food not found"))?;

        let entry = lock(&self.kitchen, "kitchen")?.log_food(&food);
        info!("Logging food to diary: {}", entry.food_name);
        self.record_action("diary-log");
        Ok(entry)
    }

    pub fn diary(&self) -> FitResult<Vec<FoodLogEntry>> {
        Ok(lock(&self.kitchen, "kitchen")?.diary().to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    struct BrokenCoach;

    #[async_trait]
    impl CoachResponder for BrokenCoach {
        async fn respond(&self, _: &str, _: &UserProfile) -> anyhow::Result<CoachReply> {
            anyhow::bail!("model offline")
        }
    }

    fn quick_config() -> Config {
        Config {
            coach_delay_ms: 0,
            scan_delay_ms: 0,
            ..Config::default()
        }
    }

    fn state() -> AppState {
        AppState::new(&quick_config())
    }

    #[test]
    fn session_finishing_marks_workout_completed() {
        let state = state();
        state.start_session(2).unwrap();
        state.toggle_session().unwrap();

        for _ in 0..59 {
            assert!(state.tick_session().unwrap().is_some());
        }
        assert!(state.tick_session().unwrap().is_none());

        assert!(state.session_snapshot().unwrap().is_none());
        let workout = state.get_workout(2).unwrap();
        assert!(workout.completed);
        assert_eq!(workout.completions, 893);
        assert_eq!(state.workout_stats().unwrap().completed_workouts, 1);
    }

    #[test]
    fn ticks_are_ignored_while_paused() {
        let state = state();
        state.start_session(1).unwrap();
        let snap = state.tick_session().unwrap().unwrap();
        assert_eq!(snap.seconds_left, 45);
    }

    #[test]
    fn session_operations_need_a_session() {
        let state = state();
        assert!(matches!(state.toggle_session(), Err(FitError::NotFound(_))));
        assert!(matches!(state.end_session(), Err(FitError::NotFound(_))));
        assert!(state.tick_session().unwrap().is_none());
    }

    #[test]
    fn starting_replaces_running_session() {
        let state = state();
        state.start_session(1).unwrap();
        state.toggle_session().unwrap();
        state.next_exercise().unwrap();

        let snap = state.start_session(3).unwrap();
        assert_eq!(snap.workout_id, 3);
        assert_eq!(snap.exercise_index, 0);
        assert!(!snap.running);

        let current = state.session_snapshot().unwrap().unwrap();
        assert_eq!(current.workout_id, 3);
        assert!(!current.running);
        assert!(!state.get_workout(1).unwrap().completed);
    }

    #[test]
    fn tick_after_session_ended_is_not_an_error() {
        let state = state();
        state.start_session(1).unwrap();
        state.toggle_session().unwrap();
        state.end_session().unwrap();

        assert!(state.tick_session().unwrap().is_none());
        assert_eq!(state.get_last_action().0.as_deref(), Some("session-end"));
    }

    #[test]
    fn countdown_ticks_leave_last_action_alone() {
        let state = state();
        state.start_session(1).unwrap();
        state.toggle_session().unwrap();
        state.tick_session().unwrap();
        state.tick_session().unwrap();
        assert_eq!(state.get_last_action().0.as_deref(), Some("session-toggle"));
    }

    #[test]
    fn ending_early_leaves_workout_incomplete() {
        let state = state();
        let mut rx = state.subscribe_session();
        state.start_session(3).unwrap();
        assert!(rx.borrow_and_update().is_some());

        state.end_session().unwrap();
        assert!(rx.borrow_and_update().is_none());
        assert!(!state.get_workout(3).unwrap().completed);
    }

    #[test]
    fn adding_a_meal_grows_the_plan_by_one() {
        let state = state();
        let before = state.planned_meal_count().unwrap();
        let plan = state.add_meal_to_today("3").unwrap();

        assert_eq!(plan.meals.len(), before + 1);
        assert_eq!(plan.totals.calories, 320 + 520);
        assert!(matches!(
            state.add_meal_to_today("nope"),
            Err(FitError::NotFound(_))
        ));
    }

    #[test]
    fn suggestion_can_be_planned() {
        let state = state();
        let plan = state.add_meal_to_today("ai-1").unwrap();
        let stir_fry = plan.meals.last().unwrap();
        assert_eq!(stir_fry.ingredients.len(), 4);
    }

    #[test]
    fn removing_unplanned_meal_is_not_found() {
        let state = state();
        assert!(matches!(
            state.remove_meal_from_today("2"),
            Err(FitError::NotFound(_))
        ));
        let plan = state.remove_meal_from_today("1").unwrap();
        assert!(plan.meals.is_empty());
        assert_eq!(plan.totals.calories, 0);
    }

    #[tokio::test]
    async fn message_appends_user_then_coach() {
        let state = state();
        let exchange = state.send_message("Plan my workout for tomorrow").await.unwrap();

        assert_eq!(exchange.question.role, Role::User);
        assert_eq!(exchange.answer.role, Role::Coach);
        assert!(exchange.answer.content.contains("Today's Workout Plan"));

        let history = state.conversation().unwrap();
        assert_eq!(history.len(), 3);
        assert_eq!(history[1].id, exchange.question.id);
        assert_eq!(history[2].id, exchange.answer.id);
    }

    #[tokio::test]
    async fn blank_message_is_rejected() {
        let state = state();
        assert!(matches!(
            state.send_message("   ").await,
            Err(FitError::BadRequest(_))
        ));
        assert_eq!(state.conversation_len().unwrap(), 1);
    }

    #[tokio::test]
    async fn failing_coach_apologizes() {
        let state = AppState::with_services(
            &quick_config(),
            Arc::new(BrokenCoach),
            Arc::new(RandomRecognizer::new()),
        );
        let exchange = state.send_message("hello").await.unwrap();
        assert_eq!(exchange.answer.content, coach_catalog::APOLOGY);
        assert!(exchange.answer.suggestions.is_empty());
    }

    #[tokio::test]
    async fn scan_requires_image_and_records_history() {
        let state = state();
        assert!(matches!(
            state.scan(ScanSource::Upload, &[]).await,
            Err(FitError::BadRequest(_))
        ));

        let result = state.scan(ScanSource::Camera, b"\xff\xd8\xff").await.unwrap();
        assert_eq!(result.advice, result.food.nutrition_grade.advice());
        assert_eq!(state.scan_history().unwrap().len(), 1);
    }

    #[test]
    fn pantry_drives_suggestions() {
        let state = state();
        assert_eq!(state.pantry_recipes().unwrap().len(), 2);

        state.remove_from_pantry(3).unwrap(); // Rice
        assert!(state.pantry_recipes().unwrap().is_empty());

        state.remove_from_pantry(9).unwrap(); // Garlic
        let stir_fry = &state.meal_suggestions().unwrap()[0];
        assert_eq!(stir_fry.ingredients, vec!["Chicken breast", "Broccoli", "Olive oil"]);
    }

    #[test]
    fn food_log_uses_known_foods() {
        let state = state();
        let entry = state.log_food("2").unwrap();
        assert_eq!(entry.food_name, "Cheese Pizza Slice");
        assert!(matches!(state.log_food("9"), Err(FitError::NotFound(_))));
        assert_eq!(state.diary().unwrap().len(), 1);
    }
}
