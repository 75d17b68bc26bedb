//! Winner resolution policies.

use crate::models::{Match, Side};
use rand::Rng;

/// Decides the winner of a match.
///
/// Injected into the scheduler and the group stage so the two can resolve
/// outcomes differently (seed-deterministic bracket rounds, coin-flip group
/// play).
pub trait WinnerPolicy {
    fn decide(&mut self, m: &Match) -> Side;
}

/// The lower rank wins; ties favor player 1.
#[derive(Clone, Copy, Debug, Default)]
pub struct SeededPolicy;

impl WinnerPolicy for SeededPolicy {
    fn decide(&mut self, m: &Match) -> Side {
        if m.player1.rank <= m.player2.rank {
            Side::One
        } else {
            Side::Two
        }
    }
}

/// Uniform 50/50 coin flip.
#[derive(Clone, Copy, Debug, Default)]
pub struct RandomPolicy;

impl WinnerPolicy for RandomPolicy {
    fn decide(&mut self, _m: &Match) -> Side {
        if rand::thread_rng().gen_bool(0.5) {
            Side::One
        } else {
            Side::Two
        }
    }
}
