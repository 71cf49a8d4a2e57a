//! Color Hop challenge minigame.
//!
//! The player is shown the name of a color and must hop onto the platform
//! painted in it. Five platforms are offered: the target plus four other
//! colors from the palette, in random order.

pub mod logic;
pub mod types;

pub use logic::*;
pub use types::*;
