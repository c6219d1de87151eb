//! The odd/even pregame that decides who moves first.
//!
//! The human declares a parity guess, then the system draws one numeral
//! for each side. If the parity of the sum matches the guess the human
//! starts, otherwise the computer does. The human's numeral is drawn by
//! the system rather than typed in, which keeps the guessing game fair:
//! the human commits to a parity without controlling either roll.

use crate::types::Player;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Range both sides roll from.
pub const ROLL_RANGE: std::ops::RangeInclusive<u8> = 1..=5;

/// Parity of the pregame roll total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Parity {
    /// Odd total.
    Odd,
    /// Even total.
    Even,
}

impl Parity {
    /// Parity of an integer.
    pub fn of(total: u8) -> Self {
        if total % 2 == 1 { Parity::Odd } else { Parity::Even }
    }
}

impl std::fmt::Display for Parity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Parity::Odd => write!(f, "Odd"),
            Parity::Even => write!(f, "Even"),
        }
    }
}

/// Result of one run of the pregame.
///
/// Computed once per game, consumed by the session to set the opening
/// turn, then discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PregameOutcome {
    /// Parity the human called.
    pub pick: Parity,
    /// Numeral drawn for the human.
    pub human_roll: u8,
    /// Numeral drawn for the computer.
    pub computer_roll: u8,
    /// Parity of the roll total.
    pub total_parity: Parity,
    /// Side awarded the first move.
    pub first_to_move: Player,
}

/// Runs the pregame for the given pick.
///
/// Draws two independent uniform numerals from [`ROLL_RANGE`] and awards
/// the first move to the human iff the parity of their sum matches the
/// pick. No retries, no bias correction.
#[instrument(skip(rng))]
pub fn run_parity_draw<R: Rng + ?Sized>(pick: Parity, rng: &mut R) -> PregameOutcome {
    let human_roll = rng.random_range(ROLL_RANGE);
    let computer_roll = rng.random_range(ROLL_RANGE);
    let total_parity = Parity::of(human_roll + computer_roll);
    let first_to_move = if total_parity == pick {
        Player::Human
    } else {
        Player::Computer
    };

    PregameOutcome {
        pick,
        human_roll,
        computer_roll,
        total_parity,
        first_to_move,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn test_parity_of() {
        assert_eq!(Parity::of(2), Parity::Even);
        assert_eq!(Parity::of(7), Parity::Odd);
        assert_eq!(Parity::of(10), Parity::Even);
    }

    #[test]
    fn test_rolls_stay_in_range() {
        let mut rng = SmallRng::seed_from_u64(1);
        for _ in 0..200 {
            let outcome = run_parity_draw(Parity::Odd, &mut rng);
            assert!(ROLL_RANGE.contains(&outcome.human_roll));
            assert!(ROLL_RANGE.contains(&outcome.computer_roll));
        }
    }

    #[test]
    fn test_starter_matches_parity_rule() {
        let mut rng = SmallRng::seed_from_u64(2);
        for pick in [Parity::Odd, Parity::Even] {
            for _ in 0..100 {
                let outcome = run_parity_draw(pick, &mut rng);
                let total = outcome.human_roll + outcome.computer_roll;
                assert_eq!(outcome.total_parity, Parity::of(total));
                let expected = if outcome.total_parity == pick {
                    Player::Human
                } else {
                    Player::Computer
                };
                assert_eq!(outcome.first_to_move, expected);
                assert_eq!(outcome.pick, pick);
            }
        }
    }

    #[test]
    fn test_both_starters_reachable() {
        // 200 draws make a one-sided run vanishingly unlikely; the draw is
        // fair, not rigged toward either side.
        let mut rng = SmallRng::seed_from_u64(3);
        let mut human_starts = 0;
        let mut computer_starts = 0;
        for _ in 0..200 {
            match run_parity_draw(Parity::Even, &mut rng).first_to_move {
                Player::Human => human_starts += 1,
                Player::Computer => computer_starts += 1,
            }
        }
        assert!(human_starts > 0);
        assert!(computer_starts > 0);
    }
}
