//! Challenge minigames: the per-category answer screens of a session.
//!
//! Each category with a playable minigame has one entry in [`MINIGAME_REGISTRY`].
//! Adding a minigame means adding a variant and a registry entry.

pub mod choice;
pub mod color_hop;
pub mod math_quiz;

pub use choice::{ChoiceInput, ChoiceRound, RoundPhase};
pub use color_hop::{ColorHopGame, NamedColor, PALETTE};
pub use math_quiz::MathQuizGame;

use crate::core::task::{Category, Task};
use rand::RngCore;
use std::time::Duration;

/// The minigame answering the current task. Only one can be active at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActiveMinigame {
    ColorHop(ColorHopGame),
    MathQuiz(MathQuizGame),
}

/// Builds a minigame round for a task.
pub type MinigameFactory = fn(&Task, &mut dyn RngCore) -> ActiveMinigame;

fn start_color_hop(task: &Task, rng: &mut dyn RngCore) -> ActiveMinigame {
    ActiveMinigame::ColorHop(color_hop::new_round(&task.id, rng))
}

fn start_math_quiz(task: &Task, rng: &mut dyn RngCore) -> ActiveMinigame {
    ActiveMinigame::MathQuiz(math_quiz::new_round(&task.id, rng))
}

/// Category → minigame constructor.
pub const MINIGAME_REGISTRY: &[(Category, MinigameFactory)] = &[
    (Category::ColorHop, start_color_hop),
    (Category::Math, start_math_quiz),
];

/// Whether `category` has a playable minigame.
pub fn has_minigame(category: Category) -> bool {
    MINIGAME_REGISTRY.iter().any(|(c, _)| *c == category)
}

impl ActiveMinigame {
    /// Start the minigame registered for the task's category, if any.
    pub fn for_task(task: &Task, rng: &mut dyn RngCore) -> Option<Self> {
        MINIGAME_REGISTRY
            .iter()
            .find(|(category, _)| *category == task.category)
            .map(|(_, factory)| factory(task, rng))
    }

    pub fn task_id(&self) -> &str {
        match self {
            Self::ColorHop(game) => &game.task_id,
            Self::MathQuiz(game) => &game.task_id,
        }
    }

    pub fn round(&self) -> &ChoiceRound {
        match self {
            Self::ColorHop(game) => &game.round,
            Self::MathQuiz(game) => &game.round,
        }
    }

    fn round_mut(&mut self) -> &mut ChoiceRound {
        match self {
            Self::ColorHop(game) => &mut game.round,
            Self::MathQuiz(game) => &mut game.round,
        }
    }

    pub fn process_input(&mut self, input: ChoiceInput) {
        self.round_mut().process_input(input);
    }

    /// Advance the reveal; yields the answer to submit once.
    pub fn tick(&mut self, elapsed: Duration) -> Option<bool> {
        self.round_mut().tick(elapsed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::task::TASK_CATALOG;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn task_for(category: Category) -> Task {
        let template = TASK_CATALOG
            .iter()
            .find(|t| t.category == category)
            .unwrap();
        Task::from_template(template)
    }

    #[test]
    fn test_registry_dispatches_by_category() {
        let mut rng = ChaCha8Rng::seed_from_u64(12345);

        let task = task_for(Category::ColorHop);
        let game = ActiveMinigame::for_task(&task, &mut rng).unwrap();
        assert!(matches!(game, ActiveMinigame::ColorHop(_)));
        assert_eq!(game.task_id(), task.id);

        let task = task_for(Category::Math);
        let game = ActiveMinigame::for_task(&task, &mut rng).unwrap();
        assert!(matches!(game, ActiveMinigame::MathQuiz(_)));
    }

    #[test]
    fn test_categories_without_minigame() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        assert!(ActiveMinigame::for_task(&task_for(Category::Language), &mut rng).is_none());
        assert!(!has_minigame(Category::Logic));
        assert!(has_minigame(Category::ColorHop));
    }

    #[test]
    fn test_minigame_yields_answer_after_reveal() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let mut game = ActiveMinigame::for_task(&task_for(Category::Math), &mut rng).unwrap();
        let answer = game.round().answer_index;
        game.process_input(ChoiceInput::Pick(answer));
        assert_eq!(game.tick(Duration::from_millis(400)), Some(true));
    }
}
