//! Non-interactive tournament simulation: a group-stage qualifier feeding a
//! single-elimination bracket, with a JSON report dump at the end.
//! Run with: cargo run --bin simulate
//! Override with env: FIELD_SIZE (default 64), MAX_ROUNDS (default 2 * FIELD_SIZE),
//! RUST_LOG (e.g. info).

use esports_bracket::{
    run_group_stage, GameResultLogger, Player, RandomPolicy, Scheduler, SeededPolicy, Tier,
    MAX_FIELD_SIZE,
};
use log::{info, warn};

fn env_usize(name: &str, default: usize) -> usize {
    std::env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

/// Tier split for a demonstration field sized `field_size`: one early player
/// per group, one wildcard per leading group, regular in between. At 64 this
/// is 16 early / 42 regular / 6 wildcard, exactly what the group shapes need.
fn tier_for(seed: usize, field_size: usize) -> Tier {
    let groups = field_size / 4;
    let wildcards = groups.min(6);
    if seed < groups {
        Tier::Early
    } else if seed >= field_size - wildcards {
        Tier::Wildcard
    } else {
        Tier::Regular
    }
}

fn main() {
    env_logger::init();

    let field_size = env_usize("FIELD_SIZE", MAX_FIELD_SIZE).min(MAX_FIELD_SIZE);
    let max_rounds = env_usize("MAX_ROUNDS", field_size * 2);

    let mut logger = GameResultLogger::new();
    let mut scheduler = Scheduler::new();
    for i in 0..field_size {
        let id = (i + 1) as u32;
        let player = Player::new(id, format!("Player {id}"), id, tier_for(i, field_size));
        if let Err(err) = scheduler.add_player(player, &mut logger) {
            warn!("registration rejected: {err}");
        }
    }
    scheduler.initialize();

    let mut group_policy = RandomPolicy;
    match run_group_stage(&mut scheduler, &mut group_policy, &mut logger) {
        Ok(summary) => {
            info!(
                "group stage complete: {} promoted from {} groups",
                summary.promoted.len(),
                summary.groups.len()
            );
            println!(
                "group standings: {}",
                serde_json::to_string_pretty(&summary).unwrap_or_default()
            );
        }
        Err(err) => warn!("group stage skipped: {err}"),
    }
    scheduler.advance_to_next_round();

    let mut bracket_policy = SeededPolicy;
    match scheduler.run_to_completion(&mut bracket_policy, &mut logger, max_rounds) {
        Some(champion) => println!(
            "champion: {} (id {}, rank {})",
            champion.name, champion.id, champion.rank
        ),
        None => warn!("no champion determined within {max_rounds} rounds"),
    }

    println!(
        "recent matches: {}",
        serde_json::to_string_pretty(&logger.recent_matches(5)).unwrap_or_default()
    );
    println!(
        "player summaries: {}",
        serde_json::to_string_pretty(logger.all_player_summaries()).unwrap_or_default()
    );
}
