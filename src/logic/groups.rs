//! Group stage: fixed-composition formation, round robin, promotion.

use crate::history::GameResultLogger;
use crate::logic::policy::WinnerPolicy;
use crate::logic::scheduler::Scheduler;
use crate::models::{Player, Tier, TournamentError};
use log::{info, warn};
use serde::Serialize;

/// Players per group.
pub const GROUP_SIZE: usize = 4;

/// The leading groups take {1 early, 2 regular, 1 wildcard}; every group after
/// these takes {1 early, 3 regular}. A full 64-player field forms 6 + 10.
pub const WILDCARD_GROUPS: usize = 6;

/// Finishers promoted from each group into the winners pool.
pub const PROMOTED_PER_GROUP: usize = 2;

/// Round-robin schedule for a group of four, by member index. Everyone meets
/// everyone; the (0,1) and (2,3) pairs play a rematch.
const GROUP_SCHEDULE: [(usize, usize); 8] = [
    (0, 1),
    (2, 3),
    (0, 2),
    (1, 3),
    (0, 3),
    (1, 2),
    (0, 1),
    (2, 3),
];

/// One player's line in a group table.
#[derive(Clone, Debug, Serialize)]
pub struct GroupEntry {
    pub player: Player,
    pub wins: u32,
}

/// Final table of one group, ranked by (wins descending, rank ascending).
#[derive(Clone, Debug, Serialize)]
pub struct GroupStandings {
    pub entries: Vec<GroupEntry>,
}

/// Outcome of a completed group stage.
#[derive(Clone, Debug, Serialize)]
pub struct GroupStageSummary {
    pub groups: Vec<GroupStandings>,
    /// Players promoted into the winners pool, in group order.
    pub promoted: Vec<Player>,
}

/// Run the qualifying group stage over the scheduler's seeded waiting pool.
///
/// Drains `waiting`, forms fixed-composition groups by tier, plays each
/// group's round robin (reporting every match to the logger), and promotes
/// the top finishers of each group into the scheduler's winners pool.
///
/// When the field cannot satisfy every group's exact composition the stage is
/// abandoned: every drained player is flushed straight into the winners pool,
/// so the tournament proceeds as a flat bracket, and the shortfall is returned
/// as a non-fatal error after the flush.
pub fn run_group_stage(
    scheduler: &mut Scheduler,
    policy: &mut dyn WinnerPolicy,
    logger: &mut GameResultLogger,
) -> Result<GroupStageSummary, TournamentError> {
    let field = scheduler.drain_waiting();
    let groups = match form_groups(&field) {
        Ok(groups) => groups,
        Err(err) => {
            warn!("group formation aborted ({err}); falling back to a flat bracket");
            for player in field {
                scheduler.promote(player);
            }
            return Err(err);
        }
    };

    info!("formed {} groups of {}", groups.len(), GROUP_SIZE);
    let mut summary = GroupStageSummary {
        groups: Vec::with_capacity(groups.len()),
        promoted: Vec::new(),
    };
    for members in groups {
        let standings = play_group(scheduler, members, policy, logger);
        for entry in standings.entries.iter().take(PROMOTED_PER_GROUP) {
            scheduler.promote(entry.player.clone());
            summary.promoted.push(entry.player.clone());
        }
        summary.groups.push(standings);
    }
    Ok(summary)
}

/// Partition the field into groups following the fixed shape sequence,
/// drawing from each tier in seed order.
fn form_groups(field: &[Player]) -> Result<Vec<Vec<Player>>, TournamentError> {
    if field.is_empty() || field.len() % GROUP_SIZE != 0 {
        return Err(TournamentError::UnevenGroupField { size: field.len() });
    }

    let mut pools: [Vec<Player>; 3] = [Vec::new(), Vec::new(), Vec::new()];
    for player in field {
        let pool = match player.tier {
            Tier::Early => &mut pools[0],
            Tier::Regular => &mut pools[1],
            Tier::Wildcard => &mut pools[2],
        };
        pool.push(player.clone());
    }
    let [mut early, mut regular, mut wildcard] = pools;

    let total_groups = field.len() / GROUP_SIZE;
    let mut groups = Vec::with_capacity(total_groups);
    for g in 0..total_groups {
        let shape: &[(Tier, usize)] = if g < WILDCARD_GROUPS {
            &[(Tier::Early, 1), (Tier::Regular, 2), (Tier::Wildcard, 1)]
        } else {
            &[(Tier::Early, 1), (Tier::Regular, 3)]
        };
        let mut members = Vec::with_capacity(GROUP_SIZE);
        for &(tier, needed) in shape {
            let pool = match tier {
                Tier::Early => &mut early,
                Tier::Regular => &mut regular,
                Tier::Wildcard => &mut wildcard,
            };
            if pool.len() < needed {
                return Err(TournamentError::GroupTierShortfall {
                    tier,
                    needed,
                    available: pool.len(),
                });
            }
            members.extend(pool.drain(..needed));
        }
        groups.push(members);
    }
    Ok(groups)
}

/// Play one group's round robin and rank its table.
///
/// Match ids come from the scheduler's counter so they stay strictly
/// increasing across the whole run.
fn play_group(
    scheduler: &mut Scheduler,
    members: Vec<Player>,
    policy: &mut dyn WinnerPolicy,
    logger: &mut GameResultLogger,
) -> GroupStandings {
    let mut wins = [0u32; GROUP_SIZE];
    for &(a, b) in &GROUP_SCHEDULE {
        let mut m = scheduler.mint_match(members[a].clone(), members[b].clone());
        let side = policy.decide(&m);
        m.resolve(side);
        logger.record_outcome(&m);
        if let Some(winner) = m.winner() {
            let idx = if winner.id == members[a].id { a } else { b };
            wins[idx] += 1;
        }
    }

    let mut entries: Vec<GroupEntry> = members
        .into_iter()
        .zip(wins)
        .map(|(player, wins)| GroupEntry { player, wins })
        .collect();
    // Wins are the primary signal; seed rank deterministically breaks ties.
    // sort_by is stable.
    entries.sort_by(|x, y| {
        y.wins
            .cmp(&x.wins)
            .then(x.player.rank.cmp(&y.player.rank))
    });
    GroupStandings { entries }
}
