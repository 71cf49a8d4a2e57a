//! Math Quiz question generation.

use super::{MathQuizGame, ANSWER_COUNT, OPERAND_MAX, OPERAND_MIN};
use crate::challenges::choice::ChoiceRound;
use rand::seq::SliceRandom;
use rand::Rng;

/// Wrong answers are drawn from this distance around the sum.
const DECOY_SPREAD: u32 = 4;

/// Build a question for `task_id` with distinct answers, one of them correct.
pub fn new_round<R: Rng + ?Sized>(task_id: &str, rng: &mut R) -> MathQuizGame {
    let left = rng.gen_range(OPERAND_MIN..=OPERAND_MAX);
    let right = rng.gen_range(OPERAND_MIN..=OPERAND_MAX);
    let sum = left + right;

    let low = sum.saturating_sub(DECOY_SPREAD).max(OPERAND_MIN * 2);
    let high = sum + DECOY_SPREAD;
    let decoys: Vec<u32> = (low..=high).filter(|n| *n != sum).collect();

    let mut answers: Vec<u32> = decoys
        .choose_multiple(rng, ANSWER_COUNT - 1)
        .copied()
        .collect();
    answers.push(sum);
    answers.shuffle(rng);

    let answer_index = answers.iter().position(|n| *n == sum).unwrap_or_default();

    MathQuizGame {
        task_id: task_id.to_string(),
        left,
        right,
        round: ChoiceRound::new(answers.len(), answer_index),
        answers,
    }
}
