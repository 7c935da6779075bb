//! Integration tests for external language configuration

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn numspell() -> Command {
    Command::cargo_bin("numspell").unwrap()
}

/// Generate a template and turn it into a euro configuration
fn write_euro_config(dir: &TempDir) -> std::path::PathBuf {
    let path = dir.path().join("euro.toml");

    numspell()
        .args([
            "generate-config",
            "--language-code",
            "en-eu",
            "--name",
            "English (euro)",
            "--output",
            path.to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Configuration template generated successfully",
        ));

    let content = fs::read_to_string(&path)
        .unwrap()
        .replace(r#""dollars""#, r#""euros""#)
        .replace(r#""dollar""#, r#""euro""#);
    fs::write(&path, content).unwrap();

    path
}

#[test]
fn test_generate_config_command() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_euro_config(&temp_dir);

    let content = fs::read_to_string(&path).unwrap();
    assert!(content.contains(r#"code = "en-eu""#));
    assert!(content.contains("[scales]"));
    assert!(content.contains("[currency]"));
}

#[test]
fn test_validate_generated_config() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_euro_config(&temp_dir);

    numspell()
        .args(["validate", "--language-config", path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration is valid"))
        .stdout(predicate::str::contains("Language code: en-eu"))
        .stdout(predicate::str::contains(
            "One hundred twenty-three euros and forty-five cents",
        ));
}

#[test]
fn test_validate_invalid_config() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("broken.toml");
    fs::write(
        &path,
        r#"
[metadata]
code = "broken"
name = "Broken"

[scales]
2 = "hundred"

[digits]
one = "one"
"#,
    )
    .unwrap();

    numspell()
        .args(["validate", "-c", path.to_str().unwrap()])
        .assert()
        .failure()
        .stdout(predicate::str::contains("Configuration is invalid"));
}

#[test]
fn test_spell_with_external_config() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_euro_config(&temp_dir);

    numspell()
        .args(["spell", "-c", path.to_str().unwrap(), "$1.01", "$2"])
        .assert()
        .success()
        .stdout("One euro and one cent\nTwo euros\n");
}

#[test]
fn test_missing_external_config() {
    numspell()
        .args(["spell", "-c", "/nonexistent/words.toml", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read"));
}

#[test]
fn test_language_conflicts_with_config() {
    numspell()
        .args(["spell", "-l", "en", "-c", "words.toml", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}
