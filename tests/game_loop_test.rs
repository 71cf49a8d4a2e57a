//! Integration test: session loop
//!
//! Drives a `GameLoop` through start, answers and delayed next tasks the way
//! the game screen does, and checks the published events and player state.

use dreamforge::core::player_state::xp_threshold;
use dreamforge::{
    AnswerResult, Category, GameError, GameLoop, SessionConfig, SessionListener, SessionPhase,
    Task, NEXT_TASK_DELAY_MS,
};
use std::time::Duration;

/// Everything the session published, in order.
#[derive(Debug, Clone, PartialEq)]
enum Event {
    Task(Task),
    Result(AnswerResult),
}

#[derive(Debug, Default)]
struct EventLog {
    events: Vec<Event>,
}

impl EventLog {
    fn tasks(&self) -> Vec<&Task> {
        self.events
            .iter()
            .filter_map(|e| match e {
                Event::Task(t) => Some(t),
                Event::Result(_) => None,
            })
            .collect()
    }

    fn results(&self) -> Vec<&AnswerResult> {
        self.events
            .iter()
            .filter_map(|e| match e {
                Event::Result(r) => Some(r),
                Event::Task(_) => None,
            })
            .collect()
    }
}

impl SessionListener for EventLog {
    fn on_task(&mut self, task: &Task) {
        self.events.push(Event::Task(task.clone()));
    }

    fn on_result(&mut self, result: &AnswerResult) {
        self.events.push(Event::Result(*result));
    }
}

fn session(category: &str) -> GameLoop<EventLog> {
    let config = SessionConfig {
        category: Some(category.parse().expect("known category")),
        seed: Some(2024),
        ..SessionConfig::default()
    };
    GameLoop::with_config(EventLog::default(), config)
}

const DELAY: Duration = Duration::from_millis(NEXT_TASK_DELAY_MS);

/// Answer and wait out the next-task delay.
fn answer(game: &mut GameLoop<EventLog>, correct: bool) -> AnswerResult {
    let result = game.submit_answer(correct).expect("answer accepted");
    assert!(game.tick(DELAY), "next task should follow the delay");
    result
}

// =============================================================================
// End-to-end scenarios
// =============================================================================

#[test]
fn test_five_correct_math_answers_reach_level_two() {
    let mut game = session("math");
    game.start().unwrap();

    let tasks = game.listener().tasks();
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0].category, Category::Math);

    let first = answer(&mut game, true);
    assert_eq!((first.correct, first.xp, first.level), (true, 20, 1));
    assert_eq!(game.listener().tasks().len(), 2);
    assert_eq!(game.listener().tasks()[1].category, Category::Math);

    for _ in 0..3 {
        let result = answer(&mut game, true);
        assert_eq!(result.level, 1);
    }

    let fifth = answer(&mut game, true);
    assert_eq!((fifth.correct, fifth.xp, fifth.level), (true, 100, 2));
    assert!(game
        .listener()
        .tasks()
        .iter()
        .all(|t| t.category == Category::Math));
}

#[test]
fn test_wrong_answer_on_fresh_session() {
    let mut game = session("colorhop");
    game.start().unwrap();

    let result = game.submit_answer(false).unwrap();
    assert_eq!((result.correct, result.xp, result.level), (false, 0, 1));
    assert!(game.player().capabilities().is_empty());
    assert_eq!(game.player().history().len(), 1);
    assert!(!game.player().history()[0].correct);
}

#[test]
fn test_logic_answers_unlock_capability_once() {
    let mut game = session("logic");
    game.start().unwrap();

    for _ in 0..4 {
        answer(&mut game, true);
    }

    let capabilities: Vec<_> = game.player().capabilities().iter().collect();
    assert_eq!(capabilities, vec!["logic_basic"]);

    let unlocks = game
        .listener()
        .results()
        .iter()
        .filter(|r| r.reward.unlocked.is_some())
        .count();
    assert_eq!(unlocks, 1);
}

// =============================================================================
// Ordering and state machine guards
// =============================================================================

#[test]
fn test_result_always_precedes_next_task() {
    let mut game = session("math");
    game.start().unwrap();
    for correct in [true, false, true, true, false, false, true] {
        answer(&mut game, correct);
    }

    // Task, then (Result, Task) pairs.
    let events = &game.listener().events;
    assert!(matches!(events[0], Event::Task(_)));
    for pair in events[1..].chunks(2) {
        assert!(matches!(pair[0], Event::Result(_)));
        assert!(matches!(pair[1], Event::Task(_)));
    }
}

#[test]
fn test_each_published_task_has_a_new_id() {
    let mut game = session("colorhop");
    game.start().unwrap();
    for _ in 0..10 {
        answer(&mut game, true);
    }

    let ids: std::collections::HashSet<_> =
        game.listener().tasks().iter().map(|t| t.id.clone()).collect();
    assert_eq!(ids.len(), 11);
}

#[test]
fn test_double_submit_rejected_until_next_task() {
    let mut game = session("math");
    game.start().unwrap();
    game.submit_answer(true).unwrap();

    assert_eq!(game.submit_answer(true), Err(GameError::AnswerPending));
    game.tick(DELAY / 2);
    assert_eq!(game.submit_answer(false), Err(GameError::AnswerPending));

    game.tick(DELAY / 2);
    assert_eq!(game.phase(), SessionPhase::AwaitingAnswer);
    assert!(game.submit_answer(true).is_ok());
    assert_eq!(game.player().xp(), 40);
}

#[test]
fn test_history_records_every_answer_in_order() {
    let mut game = session("math");
    game.start().unwrap();
    let outcomes = [true, false, false, true];
    for correct in outcomes {
        answer(&mut game, correct);
    }

    let history = game.player().history();
    assert_eq!(history.len(), outcomes.len());
    for ((entry, correct), task) in history.iter().zip(outcomes).zip(game.listener().tasks()) {
        assert_eq!(entry.correct, correct);
        assert_eq!(&entry.task, task);
    }
}

#[test]
fn test_level_invariant_over_long_session() {
    let mut game = session("language");
    game.start().unwrap();
    for i in 0..60 {
        answer(&mut game, i % 3 != 0);
        let player = game.player();
        assert!(player.xp() < xp_threshold(player.level()));
    }
    assert_eq!(game.player().xp(), 40 * 20);
    assert_eq!(game.player().level(), 9);
}

#[test]
fn test_disposed_session_never_publishes_again() {
    let mut game = session("math");
    game.start().unwrap();
    game.submit_answer(true).unwrap();
    game.dispose();

    for _ in 0..5 {
        assert!(!game.tick(DELAY));
    }
    assert_eq!(game.listener().tasks().len(), 1);
    assert_eq!(game.listener().results().len(), 1);
    assert!(game.is_disposed());
}
