//! Errors that can occur during tournament operations.

use crate::models::game::MatchId;
use crate::models::player::{PlayerId, Tier};
use std::fmt;

/// Errors from scheduler, group-stage, and logger operations.
///
/// Every variant is a recoverable rejection reported to the caller; none
/// aborts a run.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum TournamentError {
    /// Roster or stats table is full; the add is rejected.
    CapacityExceeded { capacity: usize },
    /// A player with this id is already registered.
    DuplicatePlayer(PlayerId),
    /// No stats entry exists for this player.
    PlayerNotFound(PlayerId),
    /// A match was reported without a resolved winner.
    InvalidOutcome(MatchId),
    /// A tier ran short while filling the fixed group shapes.
    GroupTierShortfall {
        tier: Tier,
        needed: usize,
        available: usize,
    },
    /// The field size does not divide into groups of four.
    UnevenGroupField { size: usize },
}

impl fmt::Display for TournamentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TournamentError::CapacityExceeded { capacity } => {
                write!(f, "maximum capacity ({capacity}) reached")
            }
            TournamentError::DuplicatePlayer(id) => {
                write!(f, "a player with id {id} already exists")
            }
            TournamentError::PlayerNotFound(id) => write!(f, "player with id {id} not found"),
            TournamentError::InvalidOutcome(id) => write!(f, "match {id} has no valid winner"),
            TournamentError::GroupTierShortfall {
                tier,
                needed,
                available,
            } => write!(
                f,
                "not enough {tier} players to fill the group shapes (needed {needed}, have {available})"
            ),
            TournamentError::UnevenGroupField { size } => {
                write!(f, "a field of {size} does not divide into groups of four")
            }
        }
    }
}

impl std::error::Error for TournamentError {}
