//! Tournament logic: winner policies, bracket scheduling, group stage.

mod groups;
mod policy;
mod scheduler;

pub use groups::{
    run_group_stage, GroupEntry, GroupStageSummary, GroupStandings, GROUP_SIZE,
    PROMOTED_PER_GROUP, WILDCARD_GROUPS,
};
pub use policy::{RandomPolicy, SeededPolicy, WinnerPolicy};
pub use scheduler::{Scheduler, TournamentId};
