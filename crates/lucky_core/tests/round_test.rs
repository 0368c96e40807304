//! Tests for the round state machine.

use lucky_core::{NumberSource, RngSource, Round, RoundError, RoundStatus, ScriptedSource};

/// Pool [5, 1, 20, 99, 70, 12, 22, 2, 89, 12] with target 12.
fn spec_round() -> Round {
    let mut source = ScriptedSource::new([5, 1, 20, 99, 70, 12, 22, 2, 89, 12]);
    Round::new(&mut source)
}

#[test]
fn test_generation_pool_shape() {
    let mut source = RngSource::seeded(42);
    let round = Round::new(&mut source);

    assert_eq!(round.pool().len(), 10);
    assert!(round.pool().iter().all(|&v| v <= 100));
    assert_eq!(*round.pool().last().unwrap(), round.target());
    assert!(round.pool().contains(&round.target()));
    assert_eq!(round.attempts(), 0);
    assert_eq!(round.status(), RoundStatus::InProgress);
    assert!(round.shortlist().is_none());
}

#[test]
fn test_generation_in_range_across_seeds() {
    for seed in 0..50 {
        let mut source = RngSource::seeded(seed);
        let round = Round::new(&mut source);
        assert_eq!(round.pool().len(), 10);
        assert!(round.pool().iter().all(|&v| v <= 100), "seed {}", seed);
    }
}

#[test]
fn test_seeded_rounds_reproducible() {
    let mut a = RngSource::seeded(7);
    let mut b = RngSource::seeded(7);
    let round_a = Round::new(&mut a);
    let round_b = Round::new(&mut b);

    assert_eq!(round_a.pool(), round_b.pool());
    assert_eq!(round_a.target(), round_b.target());
}

#[test]
fn test_scripted_source_replays_and_runs_dry() {
    let mut source = ScriptedSource::new([3, 7]);
    assert_eq!(source.remaining(), 2);
    assert_eq!(source.draw(), 3);
    assert_eq!(source.draw(), 7);
    assert_eq!(source.draw(), 0); // Exhausted script draws 0
}

#[test]
fn test_shortlist_window() {
    let pool = [5, 1, 20, 99, 70, 12, 22, 2, 89, 15];
    let mut shortlist = Round::shortlist_for(&pool, 12);
    shortlist.sort_unstable();

    assert_eq!(shortlist, vec![2, 5, 12, 15, 20, 22]); // Window [2, 22]
}

#[test]
fn test_shortlist_clamps_at_zero() {
    let pool = [0, 5, 10, 11, 50, 100, 95, 90, 89, 0];
    let shortlist = Round::shortlist_for(&pool, 0);

    assert_eq!(shortlist, vec![0, 5, 10, 0]); // Window [0, 10], no underflow
}

#[test]
fn test_shortlist_clamps_at_hundred() {
    let pool = [0, 5, 10, 11, 50, 100, 95, 90, 89, 100];
    let shortlist = Round::shortlist_for(&pool, 100);

    assert_eq!(shortlist, vec![100, 95, 90, 100]); // Window [90, 100], no overflow
}

#[test]
fn test_first_guess_win_reports_one_attempt() {
    let mut round = spec_round();
    assert_eq!(round.guess(12), Ok(RoundStatus::Won));
    assert_eq!(round.attempts(), 1);
    assert!(round.shortlist().is_none()); // Never narrowed
}

#[test]
fn test_first_miss_narrows_without_removing_the_miss() {
    let mut round = spec_round();
    assert_eq!(round.guess(5), Ok(RoundStatus::InProgress));

    // Window [2, 22] over the full 10-entry pool, 12 present twice.
    let shortlist = round.shortlist().unwrap();
    assert_eq!(shortlist, [5, 20, 12, 22, 2, 12]);
    assert!(shortlist.contains(&5));
    assert_eq!(round.attempts(), 1);
}

#[test]
fn test_wrong_shortlist_guess_removed() {
    let mut round = spec_round();
    round.guess(50).unwrap();
    assert_eq!(round.guess(20), Ok(RoundStatus::InProgress));

    let shortlist = round.shortlist().unwrap();
    assert_eq!(shortlist.len(), 5);
    assert!(!shortlist.contains(&20));
    assert_eq!(round.attempts(), 2);
}

#[test]
fn test_removal_takes_first_occurrence_only() {
    let mut source = ScriptedSource::new([5, 5, 20, 99, 70, 13, 22, 2, 89, 12]);
    let mut round = Round::new(&mut source);

    round.guess(99).unwrap();
    assert_eq!(round.shortlist().unwrap(), [5, 5, 20, 13, 22, 2, 12]);

    round.guess(5).unwrap();
    let shortlist = round.shortlist().unwrap();
    assert_eq!(shortlist, [5, 20, 13, 22, 2, 12]);
    assert!(shortlist.contains(&5));
}

#[test]
fn test_absent_guess_is_silently_tolerated() {
    let mut round = spec_round();
    round.guess(50).unwrap();
    let before = round.shortlist().unwrap().len();

    assert_eq!(round.guess(77), Ok(RoundStatus::InProgress));
    assert_eq!(round.shortlist().unwrap().len(), before);
    assert_eq!(round.attempts(), 2);
}

#[test]
fn test_out_of_range_guess_is_ordinary_miss() {
    let mut round = spec_round();
    assert_eq!(round.guess(500), Ok(RoundStatus::InProgress));
    assert_eq!(round.attempts(), 1);

    assert_eq!(round.guess(-5), Ok(RoundStatus::InProgress));
    assert_eq!(round.attempts(), 2);
    assert_eq!(round.shortlist().unwrap().len(), 6);
}

#[test]
fn test_shortlist_exhaustion_loses_round() {
    // Shortlist after the first miss: [10, 14, 12]
    let mut source = ScriptedSource::new([10, 14, 99, 98, 97, 96, 95, 94, 93, 12]);
    let mut round = Round::new(&mut source);

    assert_eq!(round.guess(99), Ok(RoundStatus::InProgress));
    assert!(!round.is_exhausted());

    assert_eq!(round.guess(10), Ok(RoundStatus::Lost));
    assert!(round.is_exhausted());
    assert_eq!(round.attempts(), 2);
    // Target 12 is still in the shortlist; the round is lost anyway.
    assert!(round.shortlist().unwrap().contains(&12));
}

#[test]
fn test_immediate_loss_when_first_narrowing_is_short() {
    // Only the appended target falls inside the window.
    let mut source = ScriptedSource::new([99, 98, 97, 96, 95, 94, 93, 92, 91, 12]);
    let mut round = Round::new(&mut source);

    assert_eq!(round.guess(99), Ok(RoundStatus::Lost));
    assert_eq!(round.attempts(), 1);
    assert_eq!(round.shortlist().unwrap(), [12]);
}

#[test]
fn test_is_exhausted_false_before_narrowing() {
    let round = spec_round();
    assert!(!round.is_exhausted());
}

#[test]
fn test_win_after_narrowing_counts_all_attempts() {
    let mut round = spec_round();
    round.guess(5).unwrap();
    round.guess(20).unwrap();
    assert_eq!(round.guess(12), Ok(RoundStatus::Won));
    assert_eq!(round.attempts(), 3);
}

#[test]
fn test_guess_after_round_over_is_error() {
    let mut round = spec_round();
    round.guess(12).unwrap();
    assert_eq!(round.guess(12), Err(RoundError::RoundOver));
    assert_eq!(round.attempts(), 1); // Attempt counter untouched
}

#[test]
fn test_round_error_display() {
    assert_eq!(RoundError::RoundOver.to_string(), "Round is already over");
}
