//! Smoke tests to verify command wiring (no database needed)

use assert_cmd::Command;
use predicates::prelude::*;

/// Command isolated from the developer's own config and .env files.
fn articlectl(home: &tempfile::TempDir) -> Command {
    let mut cmd = Command::cargo_bin("articlectl").unwrap();
    cmd.current_dir(home.path())
        .env("HOME", home.path())
        .env_remove("DATABASE_URL")
        .env_remove("ARTICLECTL_CONFIG")
        .env_remove("PGHOST");
    cmd
}

// === Help Tests ===

#[test]
fn test_top_level_help_lists_commands() {
    let home = tempfile::tempdir().unwrap();
    articlectl(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("run"))
        .stdout(predicate::str::contains("schema"))
        .stdout(predicate::str::contains("articles"));
}

#[test]
fn test_seed_help_mentions_policy() {
    let home = tempfile::tempdir().unwrap();
    articlectl(&home)
        .args(["seed", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--on-conflict"));
}

#[test]
fn test_articles_update_help() {
    let home = tempfile::tempdir().unwrap();
    articlectl(&home)
        .args(["articles", "update", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Article ID"))
        .stdout(predicate::str::contains("--title"));
}

#[test]
fn test_authors_soft_delete_help() {
    let home = tempfile::tempdir().unwrap();
    articlectl(&home)
        .args(["authors", "soft-delete", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Author ID"));
}

// === Error Paths ===

#[test]
fn test_invalid_uuid_is_rejected() {
    let home = tempfile::tempdir().unwrap();
    articlectl(&home)
        .args(["articles", "get", "not-a-uuid"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn test_invalid_policy_is_rejected() {
    let home = tempfile::tempdir().unwrap();
    articlectl(&home)
        .args(["seed", "--on-conflict", "merge"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid conflict policy"));
}

#[test]
fn test_missing_database_config_fails() {
    let home = tempfile::tempdir().unwrap();
    articlectl(&home)
        .args(["authors", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no database configured"));
}

#[test]
fn test_broken_explicit_config_fails() {
    let home = tempfile::tempdir().unwrap();
    let path = home.path().join("broken.toml");
    std::fs::write(&path, "[database\n").unwrap();

    articlectl(&home)
        .arg("--config")
        .arg(&path)
        .args(["authors", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to load configuration"));
}
