//! Tests for configuration loading.

use gridlock::{AppConfig, MarkerColor};
use std::io::Write;
use std::path::PathBuf;
use tempfile::{NamedTempFile, TempDir};

fn config_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(content.as_bytes()).expect("Failed to write config");
    file
}

#[test]
fn test_missing_file_uses_defaults() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let config = AppConfig::load(dir.path().join("absent.toml")).expect("Defaults");
    assert_eq!(config, AppConfig::default());
    assert_eq!(config.log_filter(), "info");
    assert_eq!(config.log_file(), &PathBuf::from("gridlock.log"));
    assert!(*config.show_hints());
}

#[test]
fn test_partial_file_keeps_other_defaults() {
    let file = config_file("o_color = \"green\"\nshow_hints = false\n");
    let config = AppConfig::load(file.path()).expect("Valid config");

    assert_eq!(*config.o_color(), MarkerColor::Green);
    assert_eq!(*config.x_color(), MarkerColor::Blue);
    assert!(!*config.show_hints());
}

#[test]
fn test_full_file() {
    let file = config_file(
        r#"
log_filter = "gridlock=debug"
log_file = "/tmp/gridlock-test.log"
x_color = "cyan"
o_color = "magenta"
show_hints = true
"#,
    );
    let config = AppConfig::from_file(file.path()).expect("Valid config");

    assert_eq!(config.log_filter(), "gridlock=debug");
    assert_eq!(config.log_file(), &PathBuf::from("/tmp/gridlock-test.log"));
    assert_eq!(*config.x_color(), MarkerColor::Cyan);
    assert_eq!(*config.o_color(), MarkerColor::Magenta);
}

#[test]
fn test_unknown_color_is_rejected() {
    let file = config_file("x_color = \"plaid\"\n");
    let err = AppConfig::load(file.path()).unwrap_err();
    assert!(err.message.contains("Failed to parse config"));
}

#[test]
fn test_unknown_key_is_rejected() {
    let file = config_file("board_size = 4\n");
    assert!(AppConfig::load(file.path()).is_err());
}

#[test]
fn test_missing_file_via_from_file_is_an_error() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let err = AppConfig::from_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(err.message.contains("Failed to read config file"));
}
