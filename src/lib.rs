//! Esports tournament simulator: a single-elimination bracket with an
//! optional group-stage qualifier and full match/player history.

pub mod collections;
pub mod history;
pub mod logic;
pub mod models;

pub use collections::{EmptyContainerError, Queue, Stack};
pub use history::{GameResultLogger, PlayerReport};
pub use logic::{
    run_group_stage, GroupEntry, GroupStageSummary, GroupStandings, RandomPolicy, Scheduler,
    SeededPolicy, TournamentId, WinnerPolicy,
};
pub use models::{
    HistoricalMatch, Match, MatchId, Player, PlayerId, PlayerStats, Side, Tier, TournamentError,
};

/// Maximum field size: the roster and the stats table are bounded by this.
pub const MAX_FIELD_SIZE: usize = 64;
