//! Math Quiz data structures.

use crate::challenges::choice::ChoiceRound;

/// Answers offered per question.
pub const ANSWER_COUNT: usize = 4;

/// Smallest and largest operand.
pub const OPERAND_MIN: u32 = 1;
pub const OPERAND_MAX: u32 = 9;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MathQuizGame {
    pub task_id: String,
    pub left: u32,
    pub right: u32,
    pub answers: Vec<u32>,
    pub round: ChoiceRound,
}

impl MathQuizGame {
    pub fn sum(&self) -> u32 {
        self.left + self.right
    }

    pub fn prompt(&self) -> String {
        format!("{} + {} = ?", self.left, self.right)
    }
}
