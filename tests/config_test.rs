//! Tests for loading configuration files.

use std::io::Write;
use time_travel_tictactoe::{AppConfig, OutputFormat};

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        "log_filter = \"info,tictactoe_history=debug\"\n\n[render]\nformat = \"json\""
    )
    .unwrap();

    let config = AppConfig::load(Some(file.path())).unwrap();
    assert_eq!(config.log_filter(), "info,tictactoe_history=debug");
    assert_eq!(*config.render().format(), OutputFormat::Json);
    assert!(*config.render().show_moves());
}

#[test]
fn test_explicit_missing_file_is_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.toml");

    let err = AppConfig::load(Some(missing.as_path())).unwrap_err();
    assert!(err.message.starts_with("Failed to read config file"));
}

#[test]
fn test_unparsable_file_is_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "log_filter = [").unwrap();

    let err = AppConfig::from_file(file.path()).unwrap_err();
    assert!(err.to_string().starts_with("Config error: Failed to parse config"));
}
