//! Integration tests for the numspell CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Helper to get the path to a test fixture
fn fixture_path(name: &str) -> String {
    format!("tests/fixtures/{}", name)
}

fn numspell() -> Command {
    Command::cargo_bin("numspell").unwrap()
}

#[test]
fn test_spell_integers_and_amounts() {
    numspell()
        .args(["spell", "14", "-14", "$123.01"])
        .assert()
        .success()
        .stdout("Fourteen\nMinus fourteen\nOne hundred twenty-three dollars and one cent\n");
}

#[test]
fn test_spell_from_file() {
    numspell()
        .args(["spell", "-i", &fixture_path("amounts.txt")])
        .assert()
        .success()
        .stdout(predicate::str::contains("Fourteen\n"))
        .stdout(predicate::str::contains("Minus ninety-five cents\n"))
        .stdout(predicate::str::contains("One million one\n"));
}

#[test]
fn test_zero_phrases() {
    numspell()
        .args(["spell", "0", "$0"])
        .assert()
        .success()
        .stdout("Zero\nZero dollars\n");
}

#[test]
fn test_custom_separators() {
    numspell()
        .args(["spell", "--separator", ".", "--decimal", ",", "2.013.777,34$"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "Two million thirteen thousand seven hundred seventy-seven dollars and thirty-four cents",
        ));
}

#[test]
fn test_invalid_separator() {
    numspell()
        .args(["spell", "--separator", "x", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid separator"));
}

#[test]
fn test_invalid_value_fails_after_others() {
    numspell()
        .args(["spell", "14", "abc$", "15"])
        .assert()
        .failure()
        .stdout("Fourteen\nFifteen\n")
        .stderr(predicate::str::contains("abc$: Invalid input"))
        .stderr(predicate::str::contains("1 of 3 value(s) could not be spelled"));
}

#[test]
fn test_overflow_is_reported() {
    let too_big = "1".repeat(28);
    numspell()
        .args(["spell", &too_big])
        .assert()
        .failure()
        .stderr(predicate::str::contains("too large"));
}

#[test]
fn test_rounding_warning() {
    numspell()
        .args(["spell", "$499.999"])
        .assert()
        .success()
        .stdout("Five hundred dollars\n")
        .stderr(predicate::str::contains("rounded to 500.00"));
}

#[test]
fn test_quiet_suppresses_warnings() {
    numspell()
        .args(["spell", "-q", "$499.999"])
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_json_output() {
    let output = numspell()
        .args(["spell", "-f", "json", "$0.999", "oops"])
        .assert()
        .failure()
        .get_output()
        .stdout
        .clone();

    let values: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(values[0]["text"], "One dollar");
    assert_eq!(values[0]["currency"], true);
    assert_eq!(values[0]["rounded_to"], "1.00");
    assert!(values[1]["error"]
        .as_str()
        .unwrap()
        .contains("is not a number"));
}

#[test]
fn test_output_file() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().join("out.txt");

    numspell()
        .args(["spell", "--echo", "-o", output_path.to_str().unwrap(), "21"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    assert_eq!(fs::read_to_string(output_path).unwrap(), "21: Twenty-one\n");
}

#[test]
fn test_cli_config_file() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("numspell.toml");
    fs::write(
        &config_path,
        r#"
[input]
separator = "."
decimal = ","

[output]
default_format = "json"
pretty_json = false

[language]
capitalize_currency = false
"#,
    )
    .unwrap();

    numspell()
        .args(["spell", "--config", config_path.to_str().unwrap(), "1,01$"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            r#""text":"one dollar and one cent""#,
        ));
}

#[test]
fn test_no_values() {
    numspell()
        .arg("spell")
        .assert()
        .failure()
        .stderr(predicate::str::contains("no values given"));
}

#[test]
fn test_missing_input_file() {
    numspell()
        .args(["spell", "-i", "nonexistent_*.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("File not found"));
}

#[test]
fn test_unknown_language() {
    numspell()
        .args(["spell", "-l", "klingon", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported language: klingon"));
}

#[test]
fn test_list_languages() {
    numspell()
        .args(["list", "languages"])
        .assert()
        .success()
        .stdout(predicate::str::contains("en"))
        .stdout(predicate::str::contains("English"));
}

#[test]
fn test_list_formats() {
    numspell()
        .args(["list", "formats"])
        .assert()
        .success()
        .stdout(predicate::str::contains("text"))
        .stdout(predicate::str::contains("json"));
}

#[test]
fn test_help() {
    numspell()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Spell integers and currency amounts"));
}

#[test]
fn test_sub_cent_digits_are_never_dropped_silently() {
    numspell()
        .args(["spell", "$800,000,000,000,000,000,000,000,000.01", "$0.0000000000000000000000000000001"])
        .assert()
        .success()
        .stdout("Eight hundred septillion dollars and one cent\nZero dollars\n")
        .stderr(predicate::str::contains("rounded to 0.00"));
}

#[test]
fn test_separator_clash_is_explained() {
    numspell()
        .args(["spell", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("must differ from the decimal mark"));

    numspell()
        .args(["spell", "--separator", ".", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("must differ"));
}
