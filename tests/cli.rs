use assert_cmd::Command;
use predicates::str::contains;
use std::fs;
use std::path::PathBuf;

/// Helper to get a temporary home directory
fn temp_home_dir() -> tempfile::TempDir {
    tempfile::tempdir().expect("create temp dir")
}

/// Helper to get config file path in the temp dir
fn config_file_path(dir: &tempfile::TempDir) -> PathBuf {
    dir.path().join(".chakra-map").join("config.json")
}

const BINARY_NAME: &str = "chakra-map";

fn chakra_map(home: &tempfile::TempDir) -> Command {
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.env("HOME", home.path()).env_remove("RUST_LOG");
    cmd
}

#[test]
/// Help command should list the subcommands.
fn cli_help_displays_usage() {
    let tmp = temp_home_dir();
    chakra_map(&tmp)
        .arg("--help")
        .assert()
        .success()
        .stdout(contains("show"))
        .stdout(contains("set-defaults"));
}

#[test]
/// Show prints all three sections for the default inputs.
fn show_prints_sections() {
    let tmp = temp_home_dir();
    chakra_map(&tmp)
        .arg("show")
        .assert()
        .success()
        .stdout(contains("מחזורי החיים"))
        .stdout(contains("מפת תדרי הצ'אקרות"))
        .stdout(contains("שביל חיים: 33"));
}

#[test]
/// JSON output carries single-digit challenges for every cycle.
fn show_json_has_single_digit_challenges() {
    let tmp = temp_home_dir();
    let output = chakra_map(&tmp)
        .args(["show", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let cycles = json["cycles"].as_array().unwrap();
    assert_eq!(cycles.len(), 4);
    for cycle in cycles {
        let challenge = cycle["challenge_value"].as_u64().unwrap();
        assert!(challenge <= 9);
    }
    assert_eq!(json["chakras"].as_array().unwrap().len(), 7);
}

#[test]
/// An impossible date fails with the inline error message, printed once.
fn show_invalid_date_fails() {
    let tmp = temp_home_dir();
    let output = chakra_map(&tmp)
        .args(["show", "--day", "31", "--month", "11"])
        .output()
        .unwrap();
    assert!(!output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    let combined = format!("{stdout}{stderr}");
    assert!(stdout.contains("אירעה שגיאה בחישוב הנומרולוגי: תאריך לא קיים: 31/11/1976"));
    assert_eq!(combined.matches("אירעה שגיאה בחישוב הנומרולוגי").count(), 1);
    assert!(!combined.contains("InvalidDate"));
}

#[test]
/// Out-of-range values are rejected by the argument parser.
fn show_rejects_out_of_range_year() {
    let tmp = temp_home_dir();
    chakra_map(&tmp)
        .args(["show", "--year", "1800"])
        .assert()
        .failure();
}

#[test]
/// Saved defaults are used by later commands.
fn set_defaults_then_show_uses_them() {
    let tmp = temp_home_dir();
    chakra_map(&tmp)
        .args([
            "set-defaults",
            "--day",
            "1",
            "--month",
            "1",
            "--year",
            "2000",
            "--first-name",
            "Dana",
        ])
        .assert()
        .success()
        .stdout(contains("Defaults saved"));
    assert!(config_file_path(&tmp).exists());

    let output = chakra_map(&tmp)
        .args(["show", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    // Root chakra is the reduced year: 2000 -> 2
    let root = json["chakras"][0]["value"].as_str().unwrap();
    assert!(root.starts_with("2 "));
}

#[test]
/// Reset should delete an existing config file.
fn reset_deletes_config_file() {
    let tmp = temp_home_dir();
    let config_path = config_file_path(&tmp);
    fs::create_dir_all(config_path.parent().unwrap()).unwrap();
    fs::write(&config_path, "{}").unwrap();
    assert!(config_path.exists());

    chakra_map(&tmp)
        .arg("reset")
        .assert()
        .success()
        .stdout(contains("Configuration cleared"));

    assert!(!config_path.exists());
}

#[test]
/// A corrupt config file is reported and defaults are used.
fn invalid_config_falls_back_to_defaults() {
    let tmp = temp_home_dir();
    let config_path = config_file_path(&tmp);
    fs::create_dir_all(config_path.parent().unwrap()).unwrap();
    fs::write(&config_path, "not json").unwrap();

    chakra_map(&tmp)
        .arg("show")
        .assert()
        .success()
        .stderr(contains("[WARN]"))
        .stdout(contains("שביל חיים: 33"));
}

#[test]
/// JSON output stays parseable when the config file is corrupt.
fn show_json_with_invalid_config_stays_parseable() {
    let tmp = temp_home_dir();
    let config_path = config_file_path(&tmp);
    fs::create_dir_all(config_path.parent().unwrap()).unwrap();
    fs::write(&config_path, "not json").unwrap();

    let output = chakra_map(&tmp)
        .args(["show", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("[WARN]"));

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["cycles"].as_array().unwrap().len(), 4);
}
