//! DreamForge - educational mini-game hub.
//!
//! The progression core (`core`) drives sessions of tasks and rewards; the
//! `challenges` are the per-category minigames that answer those tasks, and
//! `app`/`ui` put them on a terminal.

pub mod app;
pub mod challenges;
pub mod core;
pub mod diagnostics;
pub mod ui;
pub mod utils;

pub use crate::core::constants::*;
pub use crate::core::{
    AnswerResult, Callbacks, Category, GameError, GameLoop, PlayerState, SessionConfig,
    SessionListener, SessionPhase, Task, TaskManager,
};
pub use crate::diagnostics::{DiagnosticsSink, ErrorContext, ErrorLog};
