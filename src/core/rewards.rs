//! Reward rules applied after each answer.
//!
//! All reward tuning lives here; the game loop only calls [`apply_reward`].

use super::constants::{LOGIC_BASIC_CAPABILITY, XP_PER_CORRECT_ANSWER};
use super::player_state::PlayerState;
use super::task::{Category, Task};

/// What an answer changed on the player.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RewardOutcome {
    pub xp_granted: u64,
    pub levels_gained: u32,
    /// Capability newly unlocked by this answer, if any.
    pub unlocked: Option<&'static str>,
}

/// Capability a correct answer in `category` unlocks.
fn category_unlock(category: Category) -> Option<&'static str> {
    match category {
        Category::Logic => Some(LOGIC_BASIC_CAPABILITY),
        Category::Math | Category::Language | Category::ColorHop => None,
    }
}

/// Grant the reward for an answer. Wrong answers change nothing.
pub fn apply_reward(player: &mut PlayerState, task: &Task, correct: bool) -> RewardOutcome {
    if !correct {
        return RewardOutcome::default();
    }

    let levels_gained = player.add_xp(XP_PER_CORRECT_ANSWER);
    let unlocked = category_unlock(task.category).filter(|id| player.unlock_capability(id));

    RewardOutcome {
        xp_granted: XP_PER_CORRECT_ANSWER,
        levels_gained,
        unlocked,
    }
}
