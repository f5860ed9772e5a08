//! Exit codes and error routing for the rpsls binary entry point.
//!
//! - Successful commands return 0
//! - Rule files that fail to load return 2 and never start a session
//! - Errors are written to stderr, not stdout

use std::fs;
use std::path::PathBuf;

fn standard_rules() -> String {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../victories.toml")
        .to_string_lossy()
        .into_owned()
}

fn run(args: &[&str]) -> (i32, String, String) {
    let mut out = Vec::new();
    let mut err = Vec::new();
    let code = rpsls_cli::run(args, &mut out, &mut err);
    (
        code,
        String::from_utf8(out).unwrap(),
        String::from_utf8(err).unwrap(),
    )
}

#[test]
fn verify_standard_rules_returns_zero() {
    let rules = standard_rules();
    let (code, out, err) = run(&["rpsls", "verify", "--rules", &rules]);
    assert_eq!(code, 0, "stderr: {}", err);
    assert!(out.contains("Verify: OK"));
}

#[test]
fn sim_with_seed_returns_zero() {
    let rules = standard_rules();
    let (code, out, _) = run(&[
        "rpsls", "sim", "--rounds", "25", "--seed", "8", "--rules", &rules,
    ]);
    assert_eq!(code, 0);
    assert!(out.contains("Rounds played: 25"));
}

#[test]
fn missing_rule_file_returns_two_without_prompting() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("victories.toml");
    let (code, out, err) = run(&["rpsls", "play", "--rules", missing.to_str().unwrap()]);
    assert_eq!(code, 2);
    assert!(err.contains("Could not load rules"));
    assert!(err.contains("not found"));
    assert!(!out.contains("Pick a choice"));
}

#[test]
fn unknown_move_name_returns_two_and_names_it() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("fire.toml");
    fs::write(
        &path,
        "[[victory]]\nchoice = \"Fire\"\nagainst = \"Paper\"\ntext = \"Fire burns Paper\"\n",
    )
    .unwrap();
    let (code, out, err) = run(&["rpsls", "play", "--rules", path.to_str().unwrap()]);
    assert_eq!(code, 2);
    assert!(err.contains("'Fire'"), "stderr: {}", err);
    assert!(!out.contains("Pick a choice"));
}

#[test]
fn malformed_rule_file_returns_two() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.json");
    fs::write(&path, r#"{"victory": [{"choice": "Rock"}]}"#).unwrap();
    let (code, _, err) = run(&["rpsls", "verify", "--rules", path.to_str().unwrap()]);
    assert_eq!(code, 2);
    assert!(err.contains("Malformed rule source"));
}

#[test]
fn incomplete_rule_file_fails_verify_but_is_playable() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("partial.toml");
    fs::write(
        &path,
        "[[victory]]\nchoice = \"Paper\"\nagainst = \"Rock\"\ntext = \"Paper covers Rock\"\n",
    )
    .unwrap();
    let rules = path.to_str().unwrap();

    let (code, _, err) = run(&["rpsls", "verify", "--rules", rules]);
    assert_eq!(code, 2);
    assert!(err.contains("no rule in either direction"));

    let (code, out, _) = run(&["rpsls", "sim", "--rounds", "40", "--seed", "2", "--rules", rules]);
    assert_eq!(code, 0);
    assert!(out.contains("Rounds played: 40"));
}

#[test]
fn zero_rounds_is_an_error() {
    let rules = standard_rules();
    let (code, _, err) = run(&["rpsls", "sim", "--rounds", "0", "--rules", &rules]);
    assert_eq!(code, 2);
    assert!(err.contains("rounds must be >= 1"));
}
