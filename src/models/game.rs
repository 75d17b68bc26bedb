//! Match and the immutable HistoricalMatch snapshot used for logging.

use crate::models::player::{Player, PlayerId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Unique identifier for a match; strictly increasing within a run, never
/// reused.
pub type MatchId = u64;

/// Which side of a match won.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    One,
    Two,
}

/// A single 1v1 match.
///
/// `winner` and `played` are only settable through [`Match::resolve`], so a
/// winner is present exactly when the match has been played, and the winner is
/// always one of the two participants.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Match {
    pub id: MatchId,
    pub player1: Player,
    pub player2: Player,
    winner: Option<Side>,
    played: bool,
}

impl Match {
    pub fn new(id: MatchId, player1: Player, player2: Player) -> Self {
        Self {
            id,
            player1,
            player2,
            winner: None,
            played: false,
        }
    }

    /// Mark the match as played with the given winning side.
    pub fn resolve(&mut self, side: Side) {
        self.winner = Some(side);
        self.played = true;
    }

    pub fn is_played(&self) -> bool {
        self.played
    }

    pub fn winner_side(&self) -> Option<Side> {
        self.winner
    }

    /// The winning player, once the match is resolved.
    pub fn winner(&self) -> Option<&Player> {
        match self.winner? {
            Side::One => Some(&self.player1),
            Side::Two => Some(&self.player2),
        }
    }

    /// The losing player, once the match is resolved.
    pub fn loser(&self) -> Option<&Player> {
        match self.winner? {
            Side::One => Some(&self.player2),
            Side::Two => Some(&self.player1),
        }
    }
}

/// Immutable snapshot of a resolved match, decoupled from the live `Match`
/// lifecycle so the history log survives structural changes to live queues.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct HistoricalMatch {
    pub match_id: MatchId,
    pub player1_id: PlayerId,
    pub player1_name: String,
    pub player2_id: PlayerId,
    pub player2_name: String,
    pub winner_id: PlayerId,
    pub winner_name: String,
    pub recorded_at: DateTime<Utc>,
}

impl HistoricalMatch {
    /// Snapshot a resolved match; `None` when the match has no winner yet.
    pub fn from_match(m: &Match) -> Option<Self> {
        let winner = m.winner()?;
        Some(Self {
            match_id: m.id,
            player1_id: m.player1.id,
            player1_name: m.player1.name.clone(),
            player2_id: m.player2.id,
            player2_name: m.player2.name.clone(),
            winner_id: winner.id,
            winner_name: winner.name.clone(),
            recorded_at: Utc::now(),
        })
    }

    /// Whether the given player took part in this match.
    pub fn involves(&self, id: PlayerId) -> bool {
        self.player1_id == id || self.player2_id == id
    }
}
