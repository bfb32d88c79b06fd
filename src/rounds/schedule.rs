//! Round and phase arithmetic over the 1-based step counter.
//!
//! A round is `2N` turns: every player once with the neutral dice, then every
//! player once more while only the round's tosser may use the colored dice.

use serde::{Deserialize, Serialize};

/// Which half of a round a turn falls in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Neutral-dice half; every player may act.
    First,
    /// Colored-dice half; only the tosser acts.
    Second,
}

/// Turns in one round.
#[must_use]
pub const fn steps_per_round(num_players: usize) -> usize {
    num_players * 2
}

/// Round number (1-based) of the turn at `step_count`.
///
/// ```
/// use qwixx_engine::rounds::round;
///
/// assert_eq!(round(4, 2), 1);
/// assert_eq!(round(5, 2), 2);
/// ```
#[must_use]
pub fn round(step_count: usize, num_players: usize) -> usize {
    let per_round = steps_per_round(num_players);
    if step_count <= per_round {
        return 1;
    }
    (step_count - 1) / per_round + 1
}

/// Seat index of the tosser in `round`.
#[must_use]
pub fn tosser_index(round: usize, num_players: usize) -> usize {
    (round.saturating_sub(1)) % num_players
}

/// Whether the turn at `step_count` is in the second half of its round.
#[must_use]
pub fn is_second_phase(step_count: usize, num_players: usize) -> bool {
    let in_round = step_count % steps_per_round(num_players);
    in_round > num_players || in_round == 0
}

#[must_use]
pub fn phase(step_count: usize, num_players: usize) -> Phase {
    if is_second_phase(step_count, num_players) {
        Phase::Second
    } else {
        Phase::First
    }
}

/// Seat index acting at `step_count` in the fixed rotation.
#[must_use]
pub fn acting_index(step_count: usize, num_players: usize) -> usize {
    (step_count.saturating_sub(1)) % num_players
}

/// Whether the turn at `step_count` is the last of its round.
#[must_use]
pub fn is_round_end(step_count: usize, num_players: usize) -> bool {
    step_count % steps_per_round(num_players) == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_two_players() {
        assert_eq!(round(1, 2), 1);
        assert_eq!(round(3, 2), 1);
        assert_eq!(round(4, 2), 1);
        assert_eq!(round(5, 2), 2);
        assert_eq!(round(6, 2), 2);
        assert_eq!(round(8, 2), 2);
        assert_eq!(round(9, 2), 3);
    }

    #[test]
    fn test_round_four_players() {
        assert_eq!(round(4, 4), 1);
        assert_eq!(round(8, 4), 1);
        assert_eq!(round(9, 4), 2);
    }

    #[test]
    fn test_second_phase_two_players() {
        assert!(!is_second_phase(1, 2));
        assert!(!is_second_phase(2, 2));
        assert!(is_second_phase(3, 2));
        assert!(is_second_phase(4, 2));
        assert!(!is_second_phase(5, 2));
        assert!(is_second_phase(8, 2));
        assert_eq!(phase(7, 2), Phase::Second);
        assert_eq!(phase(6, 2), Phase::First);
    }

    #[test]
    fn test_tosser_rotates_each_round() {
        assert_eq!(tosser_index(1, 3), 0);
        assert_eq!(tosser_index(2, 3), 1);
        assert_eq!(tosser_index(3, 3), 2);
        assert_eq!(tosser_index(4, 3), 0);
    }

    #[test]
    fn test_acting_index_and_round_end() {
        let acting: Vec<_> = (1..=6).map(|s| acting_index(s, 3)).collect();
        assert_eq!(acting, vec![0, 1, 2, 0, 1, 2]);
        assert!(!is_round_end(5, 3));
        assert!(is_round_end(6, 3));
        assert!(is_round_end(12, 3));
    }

    #[test]
    fn test_single_player_alternates_phases() {
        let phases: Vec<_> = (1..=4).map(|s| phase(s, 1)).collect();
        assert_eq!(phases, vec![Phase::First, Phase::Second, Phase::First, Phase::Second]);
        assert_eq!(round(3, 1), 2);
    }
}
