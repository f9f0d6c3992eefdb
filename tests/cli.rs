//! End-to-end tests for the command line

use assert_cmd::Command;
use predicates::prelude::*;

fn typeahead() -> Command {
    let mut cmd = Command::cargo_bin("country-typeahead").unwrap();
    // Keep the user's config out of the tests
    let home = tempfile::tempdir().unwrap();
    cmd.env("HOME", home.path());
    cmd.env_remove("COUNTRY_TYPEAHEAD_LOG");
    cmd
}

#[test]
fn test_help() {
    typeahead()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--offline"))
        .stdout(predicate::str::contains("--query"));
}

#[test]
fn test_offline_query_prints_matches() {
    typeahead()
        .args(["--offline", "--query", "fra"])
        .assert()
        .success()
        .stdout("250\tFrance\tFrench Republic\n");
}

#[test]
fn test_offline_query_matches_official_names() {
    typeahead()
        .args(["--offline", "--query", "ger"])
        .assert()
        .success()
        .stdout(predicate::str::contains("276\tGermany"))
        .stdout(predicate::str::contains("566\tNigeria"));
}

#[test]
fn test_offline_query_without_matches() {
    typeahead()
        .args(["--offline", "--query", "zzz"])
        .assert()
        .success()
        .stdout("No results\n");
}

#[test]
fn test_offline_from_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[lookup]\noffline = true\n").unwrap();

    typeahead()
        .arg("--config")
        .arg(&path)
        .args(["--query", "kosovo"])
        .assert()
        .success()
        .stdout("UNK\tKosovo\tRepublic of Kosovo\n");
}

#[test]
fn test_invalid_config_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[lookup\n").unwrap();

    typeahead()
        .arg("--config")
        .arg(&path)
        .args(["--offline", "--query", "fra"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid config file"));
}
