//! Bracket scheduler: seeding, fold pairing, byes, advancement, termination.

use esports_bracket::{GameResultLogger, Player, Scheduler, SeededPolicy, Tier, TournamentError};

fn player(id: u32, name: &str, rank: u32) -> Player {
    Player::new(id, name, rank, Tier::Regular)
}

/// A seeded scheduler with `n` players where id == rank == 1..=n.
fn field(n: u32) -> (Scheduler, GameResultLogger) {
    let mut logger = GameResultLogger::new();
    let mut s = Scheduler::new();
    for i in 1..=n {
        s.add_player(player(i, &format!("P{i}"), i), &mut logger)
            .unwrap();
    }
    s.initialize();
    (s, logger)
}

#[test]
fn three_player_bracket_crowns_the_top_seed() {
    let mut logger = GameResultLogger::new();
    let mut s = Scheduler::new();
    s.add_player(player(1, "Ann", 1), &mut logger).unwrap();
    s.add_player(player(2, "Bo", 2), &mut logger).unwrap();
    s.add_player(player(3, "Cy", 3), &mut logger).unwrap();
    s.initialize();
    let mut policy = SeededPolicy;

    // Round 1: Ann vs Cy, Bo (median rank) gets the bye.
    assert!(s.create_next_round_pairings());
    assert_eq!(s.pending_count(), 1);
    assert_eq!(s.winners_count(), 1);
    assert_eq!(s.winners_pool()[0].name, "Bo");

    assert_eq!(s.play_and_resolve_matches(&mut policy, &mut logger), 1);
    let winners = s.winners_pool();
    assert_eq!(winners.len(), 2);
    assert!(winners.iter().any(|p| p.name == "Ann"));
    assert!(winners.iter().any(|p| p.name == "Bo"));

    assert!(s.advance_to_next_round());
    assert_eq!(s.waiting_count(), 2);

    // Round 2: Ann (rank 1) beats Bo (rank 2).
    assert!(s.create_next_round_pairings());
    assert_eq!(s.play_and_resolve_matches(&mut policy, &mut logger), 1);
    assert!(!s.advance_to_next_round());
    assert!(s.is_complete());
    assert_eq!(s.champion().map(|p| p.name.as_str()), Some("Ann"));

    // A bye is never logged as a played match.
    assert_eq!(logger.recorded_count(), 2);
}

#[test]
fn duplicate_id_is_rejected_without_stopping_the_run() {
    let mut logger = GameResultLogger::new();
    let mut s = Scheduler::new();
    s.add_player(player(7, "First", 1), &mut logger).unwrap();
    assert_eq!(
        s.add_player(player(7, "Second", 2), &mut logger),
        Err(TournamentError::DuplicatePlayer(7))
    );
    assert_eq!(s.roster_size(), 1);
    assert_eq!(logger.tracked_players(), 1);
}

#[test]
fn roster_capacity_is_bounded() {
    let mut logger = GameResultLogger::new();
    let mut s = Scheduler::new();
    for id in 1..=64 {
        s.add_player(player(id, &format!("P{id}"), id), &mut logger)
            .unwrap();
    }
    assert!(matches!(
        s.add_player(player(65, "Late", 65), &mut logger),
        Err(TournamentError::CapacityExceeded { .. })
    ));
    assert_eq!(s.roster_size(), 64);
}

#[test]
fn pairing_yields_half_matches_and_one_bye_when_odd() {
    for n in [2u32, 5, 8, 9, 13] {
        let (mut s, _logger) = field(n);
        assert!(s.create_next_round_pairings(), "n = {n}");
        assert_eq!(s.pending_count() as u32, n / 2, "n = {n}");
        assert_eq!(s.winners_count() as u32, n % 2, "n = {n}");
    }
}

#[test]
fn bye_goes_to_the_median_rank() {
    let (mut s, _logger) = field(5);
    assert!(s.create_next_round_pairings());
    let byes = s.winners_pool();
    assert_eq!(byes.len(), 1);
    assert_eq!(byes[0].rank, 3);
}

#[test]
fn pairing_requires_at_least_two_players() {
    let (mut s, _logger) = field(1);
    assert!(!s.create_next_round_pairings());
}

#[test]
fn bracket_terminates_within_log2_rounds_for_even_fields() {
    for n in [2u32, 4, 8, 16, 32, 64] {
        let (mut s, mut logger) = field(n);
        let mut policy = SeededPolicy;
        let champion = s.run_to_completion(&mut policy, &mut logger, n.ilog2() as usize);
        assert_eq!(champion.map(|p| p.id), Some(1), "n = {n}");
        // Single elimination plays exactly n - 1 matches.
        assert_eq!(logger.recorded_count() as u32, n - 1, "n = {n}");
    }
}

#[test]
fn bracket_with_byes_terminates_within_n_rounds() {
    for n in [3u32, 5, 7, 11, 21] {
        let (mut s, mut logger) = field(n);
        let mut policy = SeededPolicy;
        let champion = s.run_to_completion(&mut policy, &mut logger, n as usize);
        assert_eq!(champion.map(|p| p.id), Some(1), "n = {n}");
        assert_eq!(logger.recorded_count() as u32, n - 1, "n = {n}");
    }
}

#[test]
fn stats_round_trip_matches_the_chronological_log() {
    let (mut s, mut logger) = field(16);
    let mut policy = SeededPolicy;
    s.run_to_completion(&mut policy, &mut logger, 16).unwrap();

    let all = logger.all_matches();
    assert_eq!(all.len(), 15);
    for stats in logger.all_player_summaries() {
        let appearances = all.iter().filter(|m| m.involves(stats.id)).count();
        assert_eq!(stats.matches_played() as usize, appearances);
    }
}

#[test]
fn match_ids_are_strictly_increasing_from_one() {
    let (mut s, mut logger) = field(8);
    let mut policy = SeededPolicy;
    s.run_to_completion(&mut policy, &mut logger, 8).unwrap();

    let all = logger.all_matches();
    assert_eq!(all.first().map(|m| m.match_id), Some(1));
    for w in all.windows(2) {
        assert!(w[0].match_id < w[1].match_id);
    }
}

#[test]
fn single_player_is_champion_immediately() {
    let (mut s, mut logger) = field(1);
    assert!(s.is_complete());
    let mut policy = SeededPolicy;
    let champion = s.run_to_completion(&mut policy, &mut logger, 4);
    assert_eq!(champion.map(|p| p.id), Some(1));
    assert_eq!(logger.recorded_count(), 0);
}

#[test]
fn empty_field_produces_no_champion() {
    let mut s = Scheduler::new();
    s.initialize();
    assert!(!s.is_complete());
    assert!(!s.create_next_round_pairings());
    assert!(s.champion().is_none());
}

#[test]
fn round_ceiling_halts_a_run() {
    let (mut s, mut logger) = field(16);
    let mut policy = SeededPolicy;
    // Four rounds are needed; a ceiling of one halts with no champion.
    assert!(s.run_to_completion(&mut policy, &mut logger, 1).is_none());
    assert!(!s.is_complete());
}
