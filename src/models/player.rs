//! Player, registration tier, and per-player statistics.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for a player (used in matches and lookups).
pub type PlayerId = u32;

/// Registration tier; used only to shape group-stage composition.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    Early,
    Regular,
    Wildcard,
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Tier::Early => "early",
            Tier::Regular => "regular",
            Tier::Wildcard => "wildcard",
        })
    }
}

/// A player in the tournament. Lower `rank` is the stronger seed.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub rank: u32,
    pub tier: Tier,
}

impl Player {
    pub fn new(id: PlayerId, name: impl Into<String>, rank: u32, tier: Tier) -> Self {
        Self {
            id,
            name: name.into(),
            rank,
            tier,
        }
    }
}

/// Players are equal when their ids are equal; name, rank, and tier do not
/// participate in equality.
impl PartialEq for Player {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Player {}

impl std::hash::Hash for Player {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

/// Per-player aggregate kept by the result logger: created once at
/// registration, updated once per resolved match the player took part in.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct PlayerStats {
    pub id: PlayerId,
    pub name: String,
    pub initial_rank: u32,
    pub wins: u32,
    pub losses: u32,
}

impl PlayerStats {
    pub fn new(player: &Player) -> Self {
        Self {
            id: player.id,
            name: player.name.clone(),
            initial_rank: player.rank,
            wins: 0,
            losses: 0,
        }
    }

    /// Record a win for this player.
    pub fn record_win(&mut self) {
        self.wins += 1;
    }

    /// Record a loss for this player.
    pub fn record_loss(&mut self) {
        self.losses += 1;
    }

    pub fn matches_played(&self) -> u32 {
        self.wins + self.losses
    }
}
