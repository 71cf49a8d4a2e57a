//! Session state machine driving task → answer → reward → next task.
//!
//! The loop is advanced only by [`GameLoop::start`], [`GameLoop::submit_answer`]
//! and [`GameLoop::tick`]. The next task is published from `tick` once the
//! next-task delay has elapsed, so a result is always reported before the task
//! that replaces it.

use super::constants::NEXT_TASK_DELAY_MS;
use super::error::GameError;
use super::player_state::PlayerState;
use super::rewards::{apply_reward, RewardOutcome};
use super::task::{Category, Task};
use super::task_manager::TaskManager;
use crate::diagnostics::{DiagnosticsSink, ErrorContext};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::Duration;

/// Player state snapshot reported after each answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnswerResult {
    pub correct: bool,
    pub xp: u64,
    pub level: u32,
    /// What the reward rules changed.
    pub reward: RewardOutcome,
}

/// Receives session events. Implemented by whatever presents the session.
pub trait SessionListener {
    /// A new task became current.
    fn on_task(&mut self, task: &Task);

    /// An answer was resolved.
    fn on_result(&mut self, result: &AnswerResult);
}

/// Adapter turning two closures into a [`SessionListener`].
pub struct Callbacks<T, R> {
    pub on_task: T,
    pub on_result: R,
}

impl<T, R> Callbacks<T, R>
where
    T: FnMut(&Task),
    R: FnMut(&AnswerResult),
{
    pub fn new(on_task: T, on_result: R) -> Self {
        Self { on_task, on_result }
    }
}

impl<T, R> SessionListener for Callbacks<T, R>
where
    T: FnMut(&Task),
    R: FnMut(&AnswerResult),
{
    fn on_task(&mut self, task: &Task) {
        (self.on_task)(task)
    }

    fn on_result(&mut self, result: &AnswerResult) {
        (self.on_result)(result)
    }
}

/// Where the session is in its cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    /// Created, `start` not called yet.
    Idle,
    /// A task is current and accepts one answer.
    AwaitingAnswer,
    /// Answer resolved; the next task arrives after `remaining`.
    Resolving { remaining: Duration },
    /// Session ended; every call is rejected.
    Disposed,
}

/// Runtime settings for one session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    pub category: Option<Category>,
    pub next_task_delay: Duration,
    /// Fixed seed for task selection; entropy when `None`.
    pub seed: Option<u64>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            category: None,
            next_task_delay: Duration::from_millis(NEXT_TASK_DELAY_MS),
            seed: None,
        }
    }
}

impl SessionConfig {
    pub fn for_category(category: Option<Category>) -> Self {
        Self {
            category,
            ..Self::default()
        }
    }
}

/// One play session. Owns the player and the current task exclusively.
pub struct GameLoop<L: SessionListener> {
    player: PlayerState,
    task_manager: TaskManager,
    current_task: Option<Task>,
    phase: SessionPhase,
    next_task_delay: Duration,
    rng: StdRng,
    listener: L,
    diagnostics: Option<Box<dyn DiagnosticsSink>>,
}

impl<L: SessionListener> GameLoop<L> {
    pub fn new(listener: L, category: Option<Category>) -> Self {
        Self::with_config(listener, SessionConfig::for_category(category))
    }

    pub fn with_config(listener: L, config: SessionConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_task_manager(listener, TaskManager::new(config.category), config, rng)
    }

    /// Session over a caller-supplied task manager (custom catalogs).
    pub fn with_task_manager(
        listener: L,
        task_manager: TaskManager,
        config: SessionConfig,
        rng: StdRng,
    ) -> Self {
        Self {
            player: PlayerState::new(),
            task_manager,
            current_task: None,
            phase: SessionPhase::Idle,
            next_task_delay: config.next_task_delay,
            rng,
            listener,
            diagnostics: None,
        }
    }

    /// Route rejected calls to `sink` until [`Self::detach_diagnostics`] or disposal.
    pub fn attach_diagnostics(&mut self, sink: Box<dyn DiagnosticsSink>) {
        self.diagnostics = Some(sink);
    }

    pub fn detach_diagnostics(&mut self) -> Option<Box<dyn DiagnosticsSink>> {
        self.diagnostics.take()
    }

    pub fn player(&self) -> &PlayerState {
        &self.player
    }

    pub fn current_task(&self) -> Option<&Task> {
        self.current_task.as_ref()
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn category(&self) -> Option<Category> {
        self.task_manager.scope()
    }

    pub fn listener(&self) -> &L {
        &self.listener
    }

    pub fn listener_mut(&mut self) -> &mut L {
        &mut self.listener
    }

    pub fn is_disposed(&self) -> bool {
        self.phase == SessionPhase::Disposed
    }

    /// Publish the first task.
    pub fn start(&mut self) -> Result<(), GameError> {
        match self.phase {
            SessionPhase::Idle => {
                tracing::info!(category = ?self.task_manager.scope(), "session started");
                self.next_task();
                Ok(())
            }
            SessionPhase::Disposed => self.reject("start", GameError::Disposed),
            _ => self.reject("start", GameError::AlreadyStarted),
        }
    }

    /// Resolve the current task. Rewards, history and `on_result` happen now;
    /// the next task follows after the next-task delay.
    pub fn submit_answer(&mut self, correct: bool) -> Result<AnswerResult, GameError> {
        match self.phase {
            SessionPhase::AwaitingAnswer => {}
            SessionPhase::Idle => return self.reject("submit_answer", GameError::NotStarted),
            SessionPhase::Resolving { .. } => {
                return self.reject("submit_answer", GameError::AnswerPending)
            }
            SessionPhase::Disposed => return self.reject("submit_answer", GameError::Disposed),
        }

        let Some(task) = self.current_task.clone() else {
            return self.reject("submit_answer", GameError::NotStarted);
        };

        let reward = apply_reward(&mut self.player, &task, correct);
        if reward.levels_gained > 0 {
            tracing::info!(level = self.player.level(), xp = self.player.xp(), "level up");
        }
        if let Some(capability) = reward.unlocked {
            tracing::info!(capability, "capability unlocked");
        }
        self.player.log_task(task, correct);

        let result = AnswerResult {
            correct,
            xp: self.player.xp(),
            level: self.player.level(),
            reward,
        };
        self.listener.on_result(&result);

        self.phase = SessionPhase::Resolving {
            remaining: self.next_task_delay,
        };
        Ok(result)
    }

    /// Advance time. Returns true if a new task was published.
    pub fn tick(&mut self, elapsed: Duration) -> bool {
        let SessionPhase::Resolving { remaining } = self.phase else {
            return false;
        };

        let remaining = remaining.saturating_sub(elapsed);
        if remaining.is_zero() {
            self.next_task();
            true
        } else {
            self.phase = SessionPhase::Resolving { remaining };
            false
        }
    }

    /// End the session: cancels the pending next task and detaches diagnostics.
    pub fn dispose(&mut self) {
        if self.phase == SessionPhase::Disposed {
            return;
        }
        tracing::info!(
            level = self.player.level(),
            xp = self.player.xp(),
            answered = self.player.history().len(),
            "session disposed"
        );
        self.phase = SessionPhase::Disposed;
        self.current_task = None;
        self.diagnostics = None;
    }

    fn next_task(&mut self) {
        let task = self.task_manager.get_task(self.player.level(), &mut self.rng);
        tracing::debug!(task_id = %task.id, category = %task.category, "task published");
        self.phase = SessionPhase::AwaitingAnswer;
        self.listener.on_task(&task);
        self.current_task = Some(task);
    }

    fn reject<T>(&mut self, action: &'static str, error: GameError) -> Result<T, GameError> {
        tracing::warn!(action, phase = ?self.phase, "{}", error);
        if let Some(sink) = self.diagnostics.as_mut() {
            sink.report(&error, ErrorContext::new("GameLoop", action));
        }
        Err(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::ErrorLog;
    use std::rc::Rc;

    #[derive(Debug, Default)]
    struct Recorder {
        tasks: Vec<Task>,
        results: Vec<AnswerResult>,
    }

    impl SessionListener for Recorder {
        fn on_task(&mut self, task: &Task) {
            self.tasks.push(task.clone());
        }

        fn on_result(&mut self, result: &AnswerResult) {
            self.results.push(*result);
        }
    }

    fn seeded(category: Option<Category>) -> GameLoop<Recorder> {
        let config = SessionConfig {
            category,
            seed: Some(42),
            ..SessionConfig::default()
        };
        GameLoop::with_config(Recorder::default(), config)
    }

    const DELAY: Duration = Duration::from_millis(NEXT_TASK_DELAY_MS);

    #[test]
    fn test_start_publishes_first_task() {
        let mut game = seeded(Some(Category::Math));
        assert_eq!(game.phase(), SessionPhase::Idle);
        game.start().unwrap();

        assert_eq!(game.phase(), SessionPhase::AwaitingAnswer);
        assert_eq!(game.listener().tasks.len(), 1);
        assert_eq!(game.current_task(), game.listener().tasks.first());
    }

    #[test]
    fn test_start_twice_is_rejected() {
        let mut game = seeded(None);
        game.start().unwrap();
        assert_eq!(game.start(), Err(GameError::AlreadyStarted));
        assert_eq!(game.listener().tasks.len(), 1);
    }

    #[test]
    fn test_submit_before_start_is_rejected_without_side_effects() {
        let mut game = seeded(None);
        assert_eq!(game.submit_answer(true), Err(GameError::NotStarted));
        assert!(game.listener().results.is_empty());
        assert_eq!(game.player(), &PlayerState::new());
    }

    #[test]
    fn test_next_task_waits_for_delay() {
        let mut game = seeded(Some(Category::ColorHop));
        game.start().unwrap();
        game.submit_answer(true).unwrap();

        assert!(!game.tick(Duration::from_millis(150)));
        assert_eq!(
            game.phase(),
            SessionPhase::Resolving {
                remaining: Duration::from_millis(250)
            }
        );
        assert!(!game.tick(Duration::from_millis(200)));
        assert!(game.tick(Duration::from_millis(50)));
        assert_eq!(game.phase(), SessionPhase::AwaitingAnswer);
        assert_eq!(game.listener().tasks.len(), 2);
    }

    #[test]
    fn test_double_submit_is_rejected() {
        let mut game = seeded(None);
        game.start().unwrap();
        game.submit_answer(true).unwrap();

        assert_eq!(game.submit_answer(true), Err(GameError::AnswerPending));
        assert_eq!(game.player().xp(), 20);
        assert_eq!(game.player().history().len(), 1);
        assert_eq!(game.listener().results.len(), 1);
    }

    #[test]
    fn test_tick_outside_resolving_does_nothing() {
        let mut game = seeded(None);
        assert!(!game.tick(DELAY));
        game.start().unwrap();
        assert!(!game.tick(DELAY * 10));
        assert_eq!(game.listener().tasks.len(), 1);
    }

    #[test]
    fn test_dispose_cancels_pending_task() {
        let log = ErrorLog::new().shared();
        let mut game = seeded(None);
        game.attach_diagnostics(Box::new(log.clone()));
        game.start().unwrap();
        game.submit_answer(false).unwrap();
        game.dispose();

        assert!(!game.tick(DELAY));
        assert_eq!(game.listener().tasks.len(), 1);
        assert!(game.current_task().is_none());
        assert_eq!(game.submit_answer(true), Err(GameError::Disposed));
        assert_eq!(game.start(), Err(GameError::Disposed));

        // Sink was detached on dispose, so the rejections above went nowhere.
        assert!(log.borrow().is_empty());
        assert!(game.detach_diagnostics().is_none());
        assert_eq!(Rc::strong_count(&log), 1);
    }

    #[test]
    fn test_rejections_reach_attached_diagnostics() {
        let log = ErrorLog::new().shared();
        let mut game = seeded(None);
        game.attach_diagnostics(Box::new(log.clone()));

        let _ = game.submit_answer(true);
        assert_eq!(log.borrow().len(), 1);
        let entry = log.borrow().entries(1).next().cloned().unwrap();
        assert_eq!(entry.component, "GameLoop");
        assert_eq!(entry.action, "submit_answer");

        game.detach_diagnostics();
        let _ = game.submit_answer(true);
        assert_eq!(log.borrow().len(), 1);
    }

    #[test]
    fn test_callbacks_adapter_forwards_events() {
        let mut task_count = 0;
        let mut last_xp = None;
        {
            let listener = Callbacks::new(|_: &Task| task_count += 1, |r: &AnswerResult| {
                last_xp = Some(r.xp)
            });
            let mut game = GameLoop::new(listener, Some(Category::Logic));
            game.start().unwrap();
            game.submit_answer(true).unwrap();
            game.tick(DELAY);
        }
        assert_eq!(task_count, 2);
        assert_eq!(last_xp, Some(20));
    }
}
