//! Progression core: tasks, player state, rewards and the session loop.

pub mod constants;
pub mod error;
pub mod game_loop;
pub mod player_state;
pub mod rewards;
pub mod task;
pub mod task_manager;

pub use error::GameError;
pub use game_loop::{AnswerResult, Callbacks, GameLoop, SessionConfig, SessionListener, SessionPhase};
pub use player_state::{HistoryEntry, PlayerState};
pub use rewards::{apply_reward, RewardOutcome};
pub use task::{Category, Task, TaskTemplate, TASK_CATALOG};
pub use task_manager::TaskManager;
