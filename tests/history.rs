//! Result logger: registration, outcome recording, and report queries.

use esports_bracket::{GameResultLogger, Match, Player, Side, Tier, TournamentError};

fn player(id: u32, name: &str, rank: u32) -> Player {
    Player::new(id, name, rank, Tier::Regular)
}

fn resolved(id: u64, p1: &Player, p2: &Player, winner: Side) -> Match {
    let mut m = Match::new(id, p1.clone(), p2.clone());
    m.resolve(winner);
    m
}

#[test]
fn registration_is_idempotent() {
    let mut logger = GameResultLogger::new();
    let ann = player(1, "Ann", 1);
    logger.register_player(&ann).unwrap();
    logger.register_player(&ann).unwrap();
    assert_eq!(logger.tracked_players(), 1);
}

#[test]
fn stats_table_capacity_is_bounded() {
    let mut logger = GameResultLogger::with_capacity(1);
    logger.register_player(&player(1, "Ann", 1)).unwrap();
    assert_eq!(
        logger.register_player(&player(2, "Bo", 2)),
        Err(TournamentError::CapacityExceeded { capacity: 1 })
    );
}

#[test]
fn unplayed_match_leaves_logs_and_stats_unchanged() {
    let mut logger = GameResultLogger::new();
    let ann = player(1, "Ann", 1);
    let bo = player(2, "Bo", 2);
    logger.register_player(&ann).unwrap();
    logger.register_player(&bo).unwrap();

    let unplayed = Match::new(1, ann.clone(), bo.clone());
    logger.record_outcome(&unplayed);

    assert_eq!(logger.recorded_count(), 0);
    assert!(logger.recent_matches(5).is_empty());
    assert!(logger.all_matches().is_empty());
    for stats in logger.all_player_summaries() {
        assert_eq!(stats.matches_played(), 0);
    }
}

#[test]
fn recording_updates_both_logs_and_exactly_one_win_and_loss() {
    let mut logger = GameResultLogger::new();
    let ann = player(1, "Ann", 1);
    let bo = player(2, "Bo", 2);
    logger.register_player(&ann).unwrap();
    logger.register_player(&bo).unwrap();

    logger.record_outcome(&resolved(1, &ann, &bo, Side::Two));

    assert_eq!(logger.recorded_count(), 1);
    let recent = logger.recent_matches(5);
    assert_eq!(recent.len(), 1);
    assert_eq!(recent[0].winner_id, 2);
    assert_eq!(recent[0].winner_name, "Bo");

    let report = logger.player_report(1).unwrap();
    assert_eq!(report.stats.wins, 0);
    assert_eq!(report.stats.losses, 1);
    let report = logger.player_report(2).unwrap();
    assert_eq!(report.stats.wins, 1);
    assert_eq!(report.stats.losses, 0);
}

#[test]
fn recent_matches_is_most_recent_first_and_nondestructive() {
    let mut logger = GameResultLogger::new();
    let ann = player(1, "Ann", 1);
    let bo = player(2, "Bo", 2);
    logger.register_player(&ann).unwrap();
    logger.register_player(&bo).unwrap();

    for id in 1..=3 {
        logger.record_outcome(&resolved(id, &ann, &bo, Side::One));
    }

    let recent = logger.recent_matches(2);
    assert_eq!(recent.len(), 2);
    assert_eq!(recent[0].match_id, 3);
    assert_eq!(recent[1].match_id, 2);

    // Reads snapshot; nothing is drained.
    assert_eq!(logger.recent_matches(2).len(), 2);
    assert_eq!(logger.recorded_count(), 3);

    let all = logger.all_matches();
    let ids: Vec<u64> = all.iter().map(|m| m.match_id).collect();
    assert_eq!(ids, vec![1, 2, 3]);
}

#[test]
fn recent_matches_is_bounded_by_log_size() {
    let mut logger = GameResultLogger::new();
    let ann = player(1, "Ann", 1);
    let bo = player(2, "Bo", 2);
    logger.register_player(&ann).unwrap();
    logger.register_player(&bo).unwrap();
    logger.record_outcome(&resolved(1, &ann, &bo, Side::One));

    assert_eq!(logger.recent_matches(10).len(), 1);
}

#[test]
fn untracked_participant_still_gets_the_match_logged() {
    let mut logger = GameResultLogger::new();
    let ann = player(1, "Ann", 1);
    let stranger = player(9, "Stranger", 9);
    logger.register_player(&ann).unwrap();

    logger.record_outcome(&resolved(1, &ann, &stranger, Side::Two));

    assert_eq!(logger.recorded_count(), 1);
    let report = logger.player_report(1).unwrap();
    assert_eq!(report.stats.losses, 1);
    assert_eq!(
        logger.player_report(9).unwrap_err(),
        TournamentError::PlayerNotFound(9)
    );
}

#[test]
fn player_report_filters_the_chronological_log() {
    let mut logger = GameResultLogger::new();
    let ann = player(1, "Ann", 1);
    let bo = player(2, "Bo", 2);
    let cy = player(3, "Cy", 3);
    for p in [&ann, &bo, &cy] {
        logger.register_player(p).unwrap();
    }

    logger.record_outcome(&resolved(1, &ann, &bo, Side::One));
    logger.record_outcome(&resolved(2, &bo, &cy, Side::One));
    logger.record_outcome(&resolved(3, &ann, &cy, Side::One));

    let report = logger.player_report(2).unwrap();
    let ids: Vec<u64> = report.matches.iter().map(|m| m.match_id).collect();
    assert_eq!(ids, vec![1, 2]);
    assert_eq!(report.stats.wins, 1);
    assert_eq!(report.stats.losses, 1);
}

#[test]
fn summaries_keep_registration_order() {
    let mut logger = GameResultLogger::new();
    for (id, name) in [(3, "Cy"), (1, "Ann"), (2, "Bo")] {
        logger.register_player(&player(id, name, id)).unwrap();
    }
    let ids: Vec<u32> = logger.all_player_summaries().iter().map(|s| s.id).collect();
    assert_eq!(ids, vec![3, 1, 2]);
}
