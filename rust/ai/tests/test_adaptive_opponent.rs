use rpsls_ai::adaptive::AdaptiveOpponent;
use rpsls_ai::{Opponent, create_opponent};
use rpsls_engine::moves::Move;
use rpsls_engine::ruleset::RuleSet;
use std::path::PathBuf;
use std::sync::Arc;

const SAMPLES: usize = 5000;

fn standard_rules() -> Arc<RuleSet> {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../victories.toml");
    Arc::new(RuleSet::load(path).expect("standard rules should load"))
}

fn counts(ai: &mut dyn Opponent, history: &[Move]) -> [usize; 5] {
    let mut c = [0usize; 5];
    for _ in 0..SAMPLES {
        c[ai.choose_move(history).ordinal() as usize] += 1;
    }
    c
}

fn chi_square(c: &[usize; 5]) -> f64 {
    let expected = SAMPLES as f64 / 5.0;
    c.iter()
        .map(|&n| (n as f64 - expected).powi(2) / expected)
        .sum()
}

fn assert_roughly_uniform(c: &[usize; 5]) {
    // df=4: generous bound well past the 0.001 critical value of 18.47
    assert!(chi_square(c) < 30.0, "chi-square too large for {:?}", c);
    for &n in c {
        let share = n as f64 / SAMPLES as f64;
        assert!((share - 0.2).abs() < 0.04, "share {} out of tolerance in {:?}", share, c);
    }
}

#[test]
fn empty_history_is_uniform_over_all_moves() {
    let mut ai = AdaptiveOpponent::new(standard_rules(), Some(2024));
    let c = counts(&mut ai, &[]);
    assert_roughly_uniform(&c);
}

#[test]
fn rock_heavy_history_is_answered_with_paper_or_spock() {
    let rules = standard_rules();
    let mut ai = AdaptiveOpponent::new(rules.clone(), Some(11));
    let history = [Move::Rock, Move::Rock, Move::Rock, Move::Paper, Move::Rock];
    let mut seen_paper = false;
    let mut seen_spock = false;
    for _ in 0..200 {
        let m = ai.choose_move(&history);
        assert!(rules.beats(m, Move::Rock), "{:?} does not beat Rock", m);
        seen_paper |= m == Move::Paper;
        seen_spock |= m == Move::Spock;
    }
    assert!(seen_paper && seen_spock, "both counters should be drawn");
}

#[test]
fn only_the_last_five_moves_count() {
    let rules = standard_rules();
    let mut ai = AdaptiveOpponent::new(rules.clone(), Some(12));
    let mut history = vec![Move::Lizard; 20];
    history.extend([Move::Spock, Move::Spock, Move::Spock, Move::Rock, Move::Paper]);
    for _ in 0..100 {
        let m = ai.choose_move(&history);
        assert!(rules.beats(m, Move::Spock), "{:?} does not beat Spock", m);
    }
}

#[test]
fn target_without_counters_falls_back_to_uniform() {
    // nothing beats Lizard here
    let rules = Arc::new(RuleSet::from_rules([
        (Move::Paper, Move::Rock, "Paper covers Rock"),
        (Move::Lizard, Move::Spock, "Lizard poisons Spock"),
    ])
    .unwrap());
    assert!(rules.winners_against(Move::Lizard).is_empty());

    let mut ai = AdaptiveOpponent::new(rules, Some(77));
    let history = [Move::Lizard, Move::Lizard, Move::Rock];
    let c = counts(&mut ai, &history);
    assert_roughly_uniform(&c);
}

#[test]
fn factory_builds_each_kind_and_respects_window() {
    let rules = standard_rules();
    for kind in rpsls_ai::OPPONENT_KINDS {
        assert!(create_opponent(kind, rules.clone(), Some(1), 5).is_some(), "{}", kind);
    }
    // window of 1 answers the last move only
    let mut ai = create_opponent("adaptive", rules.clone(), Some(1), 1).unwrap();
    let history = [Move::Rock, Move::Rock, Move::Rock, Move::Lizard];
    for _ in 0..50 {
        let m = ai.choose_move(&history);
        assert!(rules.beats(m, Move::Lizard));
    }
}

#[test]
fn random_opponent_ignores_history() {
    let mut ai = create_opponent("random", standard_rules(), Some(5), 5).unwrap();
    let c = counts(ai.as_mut(), &[Move::Rock; 5]);
    assert_roughly_uniform(&c);
}
