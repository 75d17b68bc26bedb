//! Bracket scheduling: seeding, fold pairing, byes, round advancement.

use crate::collections::Queue;
use crate::history::GameResultLogger;
use crate::logic::policy::WinnerPolicy;
use crate::models::{Match, MatchId, Player, TournamentError};
use crate::MAX_FIELD_SIZE;
use log::{debug, info, warn};
use uuid::Uuid;

/// Unique identifier for a tournament run.
pub type TournamentId = Uuid;

/// Single-elimination bracket scheduler.
///
/// Owns the roster and the three round queues: `waiting` holds players
/// eligible for the next pairing, `pending` holds created but unresolved
/// matches, and `winners` holds this round's advancers (match winners and
/// byes) awaiting promotion back into `waiting`. A player is in at most one
/// of the three at any instant.
pub struct Scheduler {
    pub id: TournamentId,
    capacity: usize,
    roster: Vec<Player>,
    waiting: Queue<Player>,
    pending: Queue<Match>,
    winners: Queue<Player>,
    next_match_id: MatchId,
}

impl Default for Scheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl Scheduler {
    pub fn new() -> Self {
        Self::with_capacity(MAX_FIELD_SIZE)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            id: Uuid::new_v4(),
            capacity,
            roster: Vec::new(),
            waiting: Queue::new(),
            pending: Queue::new(),
            winners: Queue::new(),
            next_match_id: 1,
        }
    }

    /// Register a player and start tracking their stats.
    ///
    /// A duplicate id or an exhausted roster is a rejection of this one add,
    /// never a fatal condition.
    pub fn add_player(
        &mut self,
        player: Player,
        logger: &mut GameResultLogger,
    ) -> Result<(), TournamentError> {
        if self.roster.iter().any(|p| p.id == player.id) {
            warn!(
                "a player with id {} already exists; {} was not added",
                player.id, player.name
            );
            return Err(TournamentError::DuplicatePlayer(player.id));
        }
        if self.roster.len() >= self.capacity {
            warn!(
                "roster is full ({}); {} was not added",
                self.capacity, player.name
            );
            return Err(TournamentError::CapacityExceeded {
                capacity: self.capacity,
            });
        }
        logger.register_player(&player)?;
        self.roster.push(player);
        Ok(())
    }

    /// Seed the field: stable-sort the roster ascending by rank and enqueue
    /// everyone into the waiting pool. The one global ordering step; later
    /// rounds re-sort only the shrinking waiting pool.
    pub fn initialize(&mut self) {
        self.roster.sort_by_key(|p| p.rank);
        for player in &self.roster {
            self.waiting.enqueue(player.clone());
        }
        info!(
            "tournament {}: seeded {} players into the waiting pool",
            self.id,
            self.roster.len()
        );
        if self.waiting.len() > 1 && self.waiting.len() % 2 != 0 {
            info!(
                "odd field of {}; one player will receive a bye",
                self.waiting.len()
            );
        }
    }

    /// Pair the waiting pool for the next round.
    ///
    /// Drains `waiting`, sorts by rank, and folds the pool inward: strongest
    /// vs weakest, second vs second-weakest, and so on. With an odd pool the
    /// single middle (median-ranked) player receives a bye straight into the
    /// winners pool, without a match. Returns true iff at least one match was
    /// scheduled or a bye was granted.
    pub fn create_next_round_pairings(&mut self) -> bool {
        if self.waiting.len() < 2 {
            return false;
        }
        let mut pool: Vec<Player> = Vec::with_capacity(self.waiting.len());
        while let Ok(p) = self.waiting.dequeue() {
            pool.push(p);
        }
        pool.sort_by_key(|p| p.rank);

        let mut scheduled = 0usize;
        let (mut i, mut j) = (0, pool.len() - 1);
        while i < j {
            let m = self.mint_match(pool[i].clone(), pool[j].clone());
            debug!(
                "scheduled match {}: {} vs {}",
                m.id, m.player1.name, m.player2.name
            );
            self.pending.enqueue(m);
            scheduled += 1;
            i += 1;
            j -= 1;
        }

        let mut bye = false;
        if i == j {
            let bye_player = pool[i].clone();
            info!("{} receives a bye and advances directly", bye_player.name);
            self.winners.enqueue(bye_player);
            bye = true;
        }
        scheduled > 0 || bye
    }

    /// Resolve every pending match via the policy, report each completed
    /// match to the logger, and enqueue winners. Returns the number resolved.
    ///
    /// The pending queue is always drained fully, so a new round can never
    /// start pairing over unresolved matches.
    pub fn play_and_resolve_matches(
        &mut self,
        policy: &mut dyn WinnerPolicy,
        logger: &mut GameResultLogger,
    ) -> usize {
        let mut resolved = 0;
        while let Ok(mut m) = self.pending.dequeue() {
            let side = policy.decide(&m);
            m.resolve(side);
            let winner = match m.winner() {
                Some(w) => w.clone(),
                None => {
                    // resolve() always sets a winner; this keeps an
                    // unresolved match from ever reaching the logger.
                    warn!("{}", TournamentError::InvalidOutcome(m.id));
                    continue;
                }
            };
            debug!(
                "match {}: {} vs {} -> {}",
                m.id, m.player1.name, m.player2.name, winner.name
            );
            logger.record_outcome(&m);
            self.winners.enqueue(winner);
            resolved += 1;
        }
        resolved
    }

    /// Move every advancer from the winners pool back into the waiting pool.
    ///
    /// When exactly one player remains anywhere, that player is moved into
    /// `waiting` and the call returns false: there are no further rounds.
    /// Also returns false when there is nothing left to advance.
    pub fn advance_to_next_round(&mut self) -> bool {
        if self.winners.is_empty() && self.waiting.is_empty() {
            return false;
        }
        if self.winners.len() == 1 && self.waiting.is_empty() && self.pending.is_empty() {
            if let Ok(finalist) = self.winners.dequeue() {
                info!("{} is the sole remaining player", finalist.name);
                self.waiting.enqueue(finalist);
            }
            return false;
        }
        while let Ok(p) = self.winners.dequeue() {
            debug!("{} advances to the next round", p.name);
            self.waiting.enqueue(p);
        }
        !self.waiting.is_empty()
    }

    /// The tournament has concluded: one player waiting, nothing pending,
    /// nothing left to advance.
    pub fn is_complete(&self) -> bool {
        self.waiting.len() == 1 && self.pending.is_empty() && self.winners.is_empty()
    }

    /// The sole remaining player, once [`Scheduler::is_complete`] holds.
    pub fn champion(&self) -> Option<&Player> {
        if self.is_complete() {
            self.waiting.peek().ok()
        } else {
            None
        }
    }

    /// Drive {pair, resolve, advance} rounds until a champion emerges.
    ///
    /// `max_rounds` is a safety ceiling against a bracket that can never
    /// converge to one finalist; when it is hit, or the bracket stalls, no
    /// champion is returned.
    pub fn run_to_completion(
        &mut self,
        policy: &mut dyn WinnerPolicy,
        logger: &mut GameResultLogger,
        max_rounds: usize,
    ) -> Option<Player> {
        let mut round = 0;
        while !self.is_complete() {
            if round >= max_rounds {
                warn!("round ceiling {max_rounds} reached before a champion emerged");
                return None;
            }
            round += 1;
            info!("round {}: {} players waiting", round, self.waiting.len());
            if !self.create_next_round_pairings() {
                break;
            }
            self.play_and_resolve_matches(policy, logger);
            if !self.advance_to_next_round() {
                break;
            }
        }
        self.champion().cloned()
    }

    pub fn roster(&self) -> &[Player] {
        &self.roster
    }

    pub fn roster_size(&self) -> usize {
        self.roster.len()
    }

    pub fn waiting_count(&self) -> usize {
        self.waiting.len()
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    pub fn winners_count(&self) -> usize {
        self.winners.len()
    }

    /// Snapshot of the waiting pool, in queue order.
    pub fn waiting_pool(&self) -> Vec<Player> {
        self.waiting.iter().cloned().collect()
    }

    /// Snapshot of the winners pool, in queue order.
    pub fn winners_pool(&self) -> Vec<Player> {
        self.winners.iter().cloned().collect()
    }

    /// Mint a match with the next process-unique, strictly increasing id.
    pub(crate) fn mint_match(&mut self, player1: Player, player2: Player) -> Match {
        let id = self.next_match_id;
        self.next_match_id += 1;
        Match::new(id, player1, player2)
    }

    /// Take the whole waiting pool, in queue order.
    pub(crate) fn drain_waiting(&mut self) -> Vec<Player> {
        let mut out = Vec::with_capacity(self.waiting.len());
        while let Ok(p) = self.waiting.dequeue() {
            out.push(p);
        }
        out
    }

    /// Place a player directly into the winners pool.
    pub(crate) fn promote(&mut self, player: Player) {
        self.winners.enqueue(player);
    }
}
