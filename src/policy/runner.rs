//! Drive a game to completion with one policy per seat.

use tracing::debug;

use super::baseline::Policy;
use crate::core::{EngineError, GameRng, PlayerMap};
use crate::rules::RulesEngine;

/// How a play-out ended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Playout<S> {
    /// Turns played, skipped turns included.
    pub steps: usize,
    /// `None` when `max_steps` ran out before the game ended.
    pub summary: Option<S>,
}

impl<S> Playout<S> {
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.summary.is_some()
    }
}

/// Play `engine` forward until it ends or `max_steps` turns have been taken.
///
/// Each turn asks the current player's policy for an index from that
/// player's legal mask. Every seat draws from its own fork of `rng`, so a
/// fixed seed replays the same game.
///
/// Engine errors are passed through; a policy that finds no legal action
/// stops the play-out early.
pub fn play_game<E: RulesEngine>(
    engine: &mut E,
    policies: &PlayerMap<Box<dyn Policy>>,
    rng: &mut GameRng,
    max_steps: usize,
) -> Result<Playout<E::Summary>, EngineError> {
    let mut seat_rngs = PlayerMap::new(engine.player_count(), |_| rng.fork());
    let mut steps = 0;

    while steps < max_steps {
        if engine.is_terminal().is_some() {
            break;
        }
        let player = engine.current_player();
        let policy = policies
            .get(player)
            .ok_or_else(|| EngineError::UnknownPlayer(player.to_string()))?;

        let mask = engine.legal_mask(player);
        let Some(action) = policy.choose(mask, &mut seat_rngs[player]) else {
            debug!(%player, step = steps, "no legal action; stopping play-out");
            break;
        };

        engine.step(player, action)?;
        steps += 1;
    }

    Ok(Playout {
        steps,
        summary: engine.summary(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::qwixx::QwixxGameBuilder;
    use crate::policy::{LongPlayingPolicy, LowestIndexPolicy, UniformRandomPolicy};

    fn seats<P: Policy + Default + 'static>(count: usize) -> PlayerMap<Box<dyn Policy>> {
        PlayerMap::new(count, |_| Box::new(P::default()) as Box<dyn Policy>)
    }

    #[test]
    fn test_lowest_index_game_completes() {
        let mut game = QwixxGameBuilder::new().player_count(2).seed(11).build().unwrap();
        let mut rng = GameRng::new(0);
        let playout = play_game(&mut game, &seats::<LowestIndexPolicy>(2), &mut rng, 10_000).unwrap();

        assert!(playout.is_complete());
        assert_eq!(playout.steps, game.step_count() - 1);
        let summary = playout.summary.unwrap();
        assert_eq!(summary.scores, game.scores());
    }

    #[test]
    fn test_max_steps_cuts_game_short() {
        let mut game = QwixxGameBuilder::new().player_count(3).seed(2).build().unwrap();
        let mut rng = GameRng::new(0);
        let playout = play_game(&mut game, &seats::<LongPlayingPolicy>(3), &mut rng, 5).unwrap();

        assert_eq!(playout.steps, 5);
        assert!(!playout.is_complete());
        assert_eq!(game.step_count(), 6);
    }

    #[test]
    fn test_random_playout_is_reproducible() {
        let run = |seed: u64| {
            let mut game = QwixxGameBuilder::new().player_count(4).seed(seed).build().unwrap();
            let mut rng = GameRng::new(seed);
            let playout =
                play_game(&mut game, &seats::<UniformRandomPolicy>(4), &mut rng, 10_000).unwrap();
            (playout.steps, playout.summary)
        };
        let first = run(99);
        assert!(first.1.is_some());
        assert_eq!(first, run(99));
    }

    #[test]
    fn test_missing_policy_is_an_error() {
        let mut game = QwixxGameBuilder::new().player_count(3).build().unwrap();
        let mut rng = GameRng::new(0);
        let err = play_game(&mut game, &seats::<LowestIndexPolicy>(1), &mut rng, 100).unwrap_err();
        assert_eq!(err, EngineError::UnknownPlayer("Player 1".into()));
    }
}
