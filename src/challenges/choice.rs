//! Pick-one-option round shared by the multiple-choice minigames.
//!
//! The player moves a cursor over the options and locks one in. The pick is
//! revealed for a short time (longer for a miss) before the round yields its
//! outcome exactly once.

use crate::core::constants::{REVEAL_CORRECT_MS, REVEAL_WRONG_MS};
use std::time::Duration;

/// Input actions for a choice round (UI-agnostic).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChoiceInput {
    Left,
    Right,
    Select,
    /// Direct pick by zero-based option index.
    Pick(usize),
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundPhase {
    Choosing,
    Revealing {
        chosen: usize,
        correct: bool,
        remaining: Duration,
    },
    /// Outcome handed out; the round ignores further input.
    Finished { chosen: usize, correct: bool },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChoiceRound {
    pub cursor: usize,
    pub option_count: usize,
    pub answer_index: usize,
    pub phase: RoundPhase,
}

impl ChoiceRound {
    pub fn new(option_count: usize, answer_index: usize) -> Self {
        Self {
            cursor: 0,
            option_count,
            answer_index,
            phase: RoundPhase::Choosing,
        }
    }

    pub fn is_locked(&self) -> bool {
        self.phase != RoundPhase::Choosing
    }

    /// The option the player locked in, with its correctness.
    pub fn chosen(&self) -> Option<(usize, bool)> {
        match self.phase {
            RoundPhase::Choosing => None,
            RoundPhase::Revealing {
                chosen, correct, ..
            }
            | RoundPhase::Finished { chosen, correct } => Some((chosen, correct)),
        }
    }

    /// Handle one input. Ignored once a pick is locked in.
    pub fn process_input(&mut self, input: ChoiceInput) {
        if self.is_locked() {
            return;
        }
        match input {
            ChoiceInput::Left => {
                if self.cursor > 0 {
                    self.cursor -= 1;
                }
            }
            ChoiceInput::Right => {
                if self.cursor + 1 < self.option_count {
                    self.cursor += 1;
                }
            }
            ChoiceInput::Select => self.choose(self.cursor),
            ChoiceInput::Pick(index) => {
                if index < self.option_count {
                    self.cursor = index;
                    self.choose(index);
                }
            }
            ChoiceInput::Other => {}
        }
    }

    fn choose(&mut self, chosen: usize) {
        let correct = chosen == self.answer_index;
        let reveal_ms = if correct {
            REVEAL_CORRECT_MS
        } else {
            REVEAL_WRONG_MS
        };
        self.phase = RoundPhase::Revealing {
            chosen,
            correct,
            remaining: Duration::from_millis(reveal_ms),
        };
    }

    /// Advance the reveal. Returns the outcome once, when the reveal ends.
    pub fn tick(&mut self, elapsed: Duration) -> Option<bool> {
        let RoundPhase::Revealing {
            chosen,
            correct,
            remaining,
        } = self.phase
        else {
            return None;
        };

        let remaining = remaining.saturating_sub(elapsed);
        if remaining.is_zero() {
            self.phase = RoundPhase::Finished { chosen, correct };
            Some(correct)
        } else {
            self.phase = RoundPhase::Revealing {
                chosen,
                correct,
                remaining,
            };
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_stays_in_bounds() {
        let mut round = ChoiceRound::new(3, 1);
        round.process_input(ChoiceInput::Left);
        assert_eq!(round.cursor, 0);
        for _ in 0..5 {
            round.process_input(ChoiceInput::Right);
        }
        assert_eq!(round.cursor, 2);
    }

    #[test]
    fn test_correct_pick_resolves_after_short_reveal() {
        let mut round = ChoiceRound::new(5, 2);
        round.process_input(ChoiceInput::Pick(2));
        assert_eq!(round.chosen(), Some((2, true)));

        assert_eq!(round.tick(Duration::from_millis(399)), None);
        assert_eq!(round.tick(Duration::from_millis(1)), Some(true));
        assert_eq!(round.tick(Duration::from_millis(500)), None);
    }

    #[test]
    fn test_wrong_pick_reveals_longer() {
        let mut round = ChoiceRound::new(5, 2);
        round.process_input(ChoiceInput::Select);
        assert_eq!(round.tick(Duration::from_millis(400)), None);
        assert_eq!(round.tick(Duration::from_millis(400)), Some(false));
    }

    #[test]
    fn test_input_ignored_once_locked() {
        let mut round = ChoiceRound::new(4, 0);
        round.process_input(ChoiceInput::Pick(3));
        round.process_input(ChoiceInput::Pick(0));
        round.process_input(ChoiceInput::Left);
        assert_eq!(round.chosen(), Some((3, false)));
        assert_eq!(round.cursor, 3);
    }

    #[test]
    fn test_out_of_range_pick_is_ignored() {
        let mut round = ChoiceRound::new(4, 0);
        round.process_input(ChoiceInput::Pick(9));
        assert!(!round.is_locked());
    }
}
