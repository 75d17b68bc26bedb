//! Data structures for the tournament: players, matches, history snapshots.

mod error;
mod game;
mod player;

pub use error::TournamentError;
pub use game::{HistoricalMatch, Match, MatchId, Side};
pub use player::{Player, PlayerId, PlayerStats, Tier};
