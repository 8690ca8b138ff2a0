//! CLI end-to-end tests for the showforge binary.

use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::process::Command;
use tempfile::tempdir;

fn showforge_cmd() -> Command {
    Command::cargo_bin("showforge").unwrap()
}

#[test]
fn test_cli_no_args_shows_help() {
    let mut cmd = showforge_cmd();
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn test_cli_help_flag() {
    let mut cmd = showforge_cmd();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("showforge"))
        .stdout(predicate::str::contains("Usage"));
}

#[test]
fn test_cli_version_subcommand() {
    let mut cmd = showforge_cmd();
    cmd.arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains("showforge"));
}

#[test]
fn test_cli_parse_scene_release() {
    let mut cmd = showforge_cmd();
    cmd.args(["parse", "Chuck.S04E05.HDTV.XviD-LOL"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Series:   Chuck"))
        .stdout(predicate::str::contains("Season:   4"))
        .stdout(predicate::str::contains("Episodes: 5"))
        .stdout(predicate::str::contains("Group:    LOL"));
}

#[test]
fn test_cli_parse_json_output() {
    let mut cmd = showforge_cmd();
    cmd.args(["parse", "--json", "Chuck.S04E05.HDTV.XviD-LOL"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"scheme\": \"seasonal\""))
        .stdout(predicate::str::contains("\"series_title\": \"Chuck\""));
}

#[test]
fn test_cli_parse_junk_title() {
    let mut cmd = showforge_cmd();
    cmd.args(["parse", "8bc83239a8d99f37bd191792a6180030"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Not parseable"));
}

#[test]
fn test_cli_group_subcommand() {
    let mut cmd = showforge_cmd();
    cmd.args(["group", "Chuck.S04E05.HDTV.XviD-LOL"])
        .assert()
        .success()
        .stdout(predicate::str::contains("LOL"));
}

#[test]
fn test_cli_language_subcommand() {
    let mut cmd = showforge_cmd();
    cmd.args(["language", "Show.S01E01.French.HDTV"])
        .assert()
        .success()
        .stdout(predicate::str::contains("French"));
}

#[test]
fn test_cli_parse_with_library_file() {
    let dir = tempdir().unwrap();
    let library = dir.path().join("library.json");
    fs::write(
        &library,
        r#"{
            "series": [
                {
                    "id": 2,
                    "title": "Castle 2009",
                    "clean_title": "castle 2009",
                    "year": 2009,
                    "kind": "standard"
                }
            ],
            "episodes": []
        }"#,
    )
    .unwrap();

    let mut cmd = showforge_cmd();
    cmd.args([
        "--library",
        library.to_str().unwrap(),
        "parse",
        "Castle.2009.S01E14.HDTV.XviD-LOL",
    ])
    .assert()
    .success()
    .stdout(predicate::str::contains("Series:   Castle 2009"))
    .stdout(predicate::str::contains("Season:   1"))
    .stdout(predicate::str::contains("Episodes: 14"));
}

#[test]
fn test_cli_missing_library_file_fails() {
    let mut cmd = showforge_cmd();
    cmd.args([
        "--library",
        "/nonexistent/library.json",
        "parse",
        "Chuck.S04E05.HDTV.XviD-LOL",
    ])
    .assert()
    .failure();
}
