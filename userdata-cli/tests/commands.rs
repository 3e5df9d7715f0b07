//! Tests for the one-shot commands and argument parsing.

use std::io::{self, Cursor, Write};
use std::path::Path;

use clap::Parser;
use userdata_cli::{Cli, CliError, Command, Outcome, commands};
use userdata_lib::FormConfig;
use userdata_lib::model::FormSnapshot;

const SCENARIO_A: &str = r#"{
    "firstName": "", "lastName": "Lee", "email": "",
    "phoneNumber": "+852", "password": "x", "confirmPassword": "x"
}"#;

const VALID: &str = r#"{
    "firstName": "A", "lastName": "B", "email": "",
    "phoneNumber": "+85212345678", "password": "p", "confirmPassword": "p"
}"#;

fn read(json: &str) -> FormSnapshot {
    commands::read_snapshot(Path::new("-"), Cursor::new(json)).unwrap()
}

#[test]
fn test_validate_prints_errors() {
    let mut out = Vec::new();
    let outcome = commands::validate(&read(SCENARIO_A), &FormConfig::default(), &mut out).unwrap();
    assert_eq!(outcome, Outcome::Invalid);

    let printed: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(
        printed,
        serde_json::json!({
            "firstName": "First Name is required",
            "email": "Either Email or Phone Number is required",
            "phoneNumber": "Either Email or Phone Number is required",
        })
    );
}

#[test]
fn test_validate_valid_prints_empty_object() {
    let mut out = Vec::new();
    let outcome = commands::validate(&read(VALID), &FormConfig::default(), &mut out).unwrap();
    assert_eq!(outcome, Outcome::Valid);
    assert_eq!(String::from_utf8(out).unwrap(), "{}\n");
}

#[test]
fn test_submit_displays_accepted_snapshot() {
    let mut out = Vec::new();
    let outcome = commands::submit(read(VALID), FormConfig::default(), &mut out).unwrap();
    assert_eq!(outcome, Outcome::Valid);

    let printed: FormSnapshot = serde_json::from_slice(&out).unwrap();
    assert_eq!(printed, read(VALID));
}

#[test]
fn test_submit_rejected_prints_errors() {
    let mut out = Vec::new();
    let outcome = commands::submit(read(SCENARIO_A), FormConfig::default(), &mut out).unwrap();
    assert_eq!(outcome, Outcome::Invalid);
    assert!(String::from_utf8(out).unwrap().contains("First Name is required"));
}

#[test]
fn test_read_snapshot_from_file() {
    let path = std::env::temp_dir().join(format!("userdata-cli-test-{}.json", std::process::id()));
    {
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(VALID.as_bytes()).unwrap();
    }
    let snapshot = commands::read_snapshot(&path, io::empty()).unwrap();
    std::fs::remove_file(&path).unwrap();
    assert_eq!(snapshot.phone_number, "+85212345678");
}

#[test]
fn test_read_snapshot_errors() {
    let missing = commands::read_snapshot(Path::new("/nonexistent/snapshot.json"), io::empty());
    assert!(matches!(missing, Err(CliError::Read { .. })));

    let garbage = commands::read_snapshot(Path::new("-"), Cursor::new("not json"));
    assert!(matches!(garbage, Err(CliError::Json(_))));
}

#[test]
fn test_parse_args() {
    let cli = Cli::try_parse_from(["userdata", "validate", "form.json", "--phone-prefix", "+44"]).unwrap();
    assert_eq!(cli.form.phone_prefix, "+44");
    assert_eq!(cli.form.phone_digits, 8);
    assert!(matches!(cli.command, Command::Validate(ref args) if args.input == Path::new("form.json")));

    let cli = Cli::try_parse_from(["userdata", "submit"]).unwrap();
    assert!(matches!(cli.command, Command::Submit(ref args) if args.input == Path::new("-")));

    let cli = Cli::try_parse_from(["userdata", "--log-level", "off", "fill"]).unwrap();
    assert_eq!(cli.log_level, log::LevelFilter::Off);
}

#[test]
fn test_bad_config_is_reported() {
    let cli = Cli::try_parse_from(["userdata", "fill", "--phone-digits", "0"]).unwrap();
    assert!(matches!(cli.form.config(), Err(CliError::Config(_))));
}
