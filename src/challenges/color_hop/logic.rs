//! Color Hop round generation.

use super::{ColorHopGame, NamedColor, PALETTE, PLATFORM_COUNT};
use crate::challenges::choice::ChoiceRound;
use rand::seq::SliceRandom;
use rand::Rng;

/// Build a round for `task_id`: a random target plus distinct decoys, shuffled.
pub fn new_round<R: Rng + ?Sized>(task_id: &str, rng: &mut R) -> ColorHopGame {
    let target = *PALETTE.choose(rng).unwrap_or(&PALETTE[0]);

    let decoys: Vec<NamedColor> = PALETTE
        .iter()
        .filter(|c| c.rgb != target.rgb)
        .copied()
        .collect();
    let mut platforms: Vec<NamedColor> = decoys
        .choose_multiple(rng, PLATFORM_COUNT - 1)
        .copied()
        .collect();
    platforms.push(target);
    platforms.shuffle(rng);

    let answer_index = platforms
        .iter()
        .position(|c| *c == target)
        .unwrap_or_default();

    ColorHopGame {
        task_id: task_id.to_string(),
        target,
        round: ChoiceRound::new(platforms.len(), answer_index),
        platforms,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::challenges::choice::ChoiceInput;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use std::collections::HashSet;
    use std::time::Duration;

    #[test]
    fn test_round_offers_target_and_distinct_decoys() {
        let mut rng = ChaCha8Rng::seed_from_u64(12345);
        for _ in 0..50 {
            let game = new_round("colorhop_basic_x", &mut rng);
            assert_eq!(game.platforms.len(), PLATFORM_COUNT);
            let unique: HashSet<_> = game.platforms.iter().map(|c| c.rgb).collect();
            assert_eq!(unique.len(), PLATFORM_COUNT);
            assert_eq!(game.platforms[game.round.answer_index], game.target);
        }
    }

    #[test]
    fn test_target_position_varies() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let positions: HashSet<_> = (0..50)
            .map(|_| new_round("t", &mut rng).round.answer_index)
            .collect();
        assert!(positions.len() > 1);
    }

    #[test]
    fn test_hopping_on_target_is_correct() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut game = new_round("t", &mut rng);
        let answer = game.round.answer_index;
        game.round.process_input(ChoiceInput::Pick(answer));
        assert_eq!(game.round.tick(Duration::from_millis(400)), Some(true));
    }

    #[test]
    fn test_prompt_names_target() {
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        let game = new_round("t", &mut rng);
        assert!(game.prompt().contains(game.target.name));
    }
}
