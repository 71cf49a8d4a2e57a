//! Math Quiz challenge minigame: single-digit addition with four answers.

pub mod logic;
pub mod types;

pub use logic::*;
pub use types::*;
