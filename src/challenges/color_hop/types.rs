//! Color Hop data structures.

use crate::challenges::choice::ChoiceRound;

/// A palette entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NamedColor {
    pub name: &'static str,
    pub rgb: (u8, u8, u8),
}

const fn color(name: &'static str, r: u8, g: u8, b: u8) -> NamedColor {
    NamedColor {
        name,
        rgb: (r, g, b),
    }
}

/// Colors a round can ask for.
pub const PALETTE: [NamedColor; 15] = [
    color("red", 0xff, 0x00, 0x00),
    color("blue", 0x00, 0x00, 0xff),
    color("green", 0x00, 0xff, 0x00),
    color("yellow", 0xff, 0xff, 0x00),
    color("purple", 0x80, 0x00, 0x80),
    color("orange", 0xff, 0xa5, 0x00),
    color("pink", 0xff, 0xc0, 0xcb),
    color("turquoise", 0x00, 0xff, 0xff),
    color("navy", 0x00, 0x00, 0x80),
    color("brown", 0x8b, 0x45, 0x13),
    color("black", 0x00, 0x00, 0x00),
    color("white", 0xff, 0xff, 0xff),
    color("gray", 0x80, 0x80, 0x80),
    color("gold", 0xd4, 0xaf, 0x37),
    color("silver", 0xc0, 0xc0, 0xc0),
];

/// Platforms shown per round.
pub const PLATFORM_COUNT: usize = 5;

/// One Color Hop round, bound to the task it answers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorHopGame {
    pub task_id: String,
    pub target: NamedColor,
    pub platforms: Vec<NamedColor>,
    pub round: ChoiceRound,
}

impl ColorHopGame {
    pub fn prompt(&self) -> String {
        format!("Which one is {}?", self.target.name)
    }
}
