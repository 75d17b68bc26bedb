//! Match result logging and performance history.
//!
//! [`GameResultLogger`] keeps a most-recent-first log, a chronological log,
//! and per-player win/loss aggregates. Report queries never drain the live
//! containers: they read through non-destructive iteration or an independent
//! copy.

use crate::collections::{Queue, Stack};
use crate::models::{HistoricalMatch, Match, Player, PlayerId, PlayerStats, TournamentError};
use crate::MAX_FIELD_SIZE;
use log::{debug, warn};
use serde::Serialize;

/// A player's aggregate stats plus every logged match they took part in, in
/// chronological order.
#[derive(Clone, Debug, Serialize)]
pub struct PlayerReport {
    pub stats: PlayerStats,
    pub matches: Vec<HistoricalMatch>,
}

/// Consumes completed-match events and answers historical queries.
pub struct GameResultLogger {
    recent: Stack<HistoricalMatch>,
    chronological: Queue<HistoricalMatch>,
    stats: Vec<PlayerStats>,
    capacity: usize,
}

impl Default for GameResultLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl GameResultLogger {
    pub fn new() -> Self {
        Self::with_capacity(MAX_FIELD_SIZE)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            recent: Stack::new(),
            chronological: Queue::new(),
            stats: Vec::with_capacity(capacity),
            capacity,
        }
    }

    fn stats_index(&self, id: PlayerId) -> Option<usize> {
        self.stats.iter().position(|s| s.id == id)
    }

    /// Start tracking a player. A second registration for the same id is a
    /// no-op, not an error.
    pub fn register_player(&mut self, player: &Player) -> Result<(), TournamentError> {
        if self.stats_index(player.id).is_some() {
            return Ok(());
        }
        if self.stats.len() >= self.capacity {
            warn!(
                "stats table is full ({}); not tracking {}",
                self.capacity, player.name
            );
            return Err(TournamentError::CapacityExceeded {
                capacity: self.capacity,
            });
        }
        self.stats.push(PlayerStats::new(player));
        Ok(())
    }

    /// Record a completed match: snapshot it into both logs and apply exactly
    /// one win and one loss.
    ///
    /// Unplayed matches and matches without a resolved winner are skipped. A
    /// participant missing from the stats table is warned about and skipped;
    /// the match is still logged.
    pub fn record_outcome(&mut self, completed: &Match) {
        if !completed.is_played() {
            debug!("match {} has not been played; nothing to record", completed.id);
            return;
        }
        let Some(snapshot) = HistoricalMatch::from_match(completed) else {
            warn!("outcome skipped: {}", TournamentError::InvalidOutcome(completed.id));
            return;
        };
        let winner_id = snapshot.winner_id;

        self.recent.push(snapshot.clone());
        self.chronological.enqueue(snapshot);

        for player in [&completed.player1, &completed.player2] {
            match self.stats_index(player.id) {
                Some(i) if player.id == winner_id => self.stats[i].record_win(),
                Some(i) => self.stats[i].record_loss(),
                None => warn!(
                    "{} (id {}) is not tracked; their stats were not updated",
                    player.name, player.id
                ),
            }
        }
    }

    /// Up to `n` most recently recorded matches, most recent first.
    pub fn recent_matches(&self, n: usize) -> Vec<HistoricalMatch> {
        let mut copy = self.recent.clone();
        let mut out = Vec::with_capacity(n.min(copy.len()));
        while out.len() < n {
            match copy.pop() {
                Ok(m) => out.push(m),
                Err(_) => break,
            }
        }
        out
    }

    /// The full chronological log, oldest first.
    pub fn all_matches(&self) -> Vec<HistoricalMatch> {
        let mut copy = self.chronological.clone();
        let mut out = Vec::with_capacity(copy.len());
        while let Ok(m) = copy.dequeue() {
            out.push(m);
        }
        out
    }

    /// A player's stats together with the chronological sub-sequence of
    /// matches they took part in.
    pub fn player_report(&self, id: PlayerId) -> Result<PlayerReport, TournamentError> {
        let idx = self
            .stats_index(id)
            .ok_or(TournamentError::PlayerNotFound(id))?;
        let matches = self
            .chronological
            .iter()
            .filter(|m| m.involves(id))
            .cloned()
            .collect();
        Ok(PlayerReport {
            stats: self.stats[idx].clone(),
            matches,
        })
    }

    /// Aggregate stats for every tracked player, in registration order.
    pub fn all_player_summaries(&self) -> &[PlayerStats] {
        &self.stats
    }

    /// Number of matches recorded so far.
    pub fn recorded_count(&self) -> usize {
        self.chronological.len()
    }

    /// Number of players with a stats entry.
    pub fn tracked_players(&self) -> usize {
        self.stats.len()
    }
}
