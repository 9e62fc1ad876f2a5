//! Tests for configuration loading.

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

use hangman::{HangmanConfig, Language};

#[test]
fn test_defaults() {
    let config = HangmanConfig::default();
    assert_eq!(config.host(), "127.0.0.1");
    assert_eq!(*config.port(), 3000);
    assert_eq!(config.dictionary_dir(), &PathBuf::from("dictionaries"));
    assert_eq!(*config.default_language(), Language::Eng);
    assert_eq!(*config.max_mistakes(), 11);
    assert_eq!(*config.rng_seed(), None);
}

#[test]
fn test_missing_file_falls_back_to_defaults() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let config = HangmanConfig::load(dir.path().join("absent.toml")).expect("Defaults");
    assert_eq!(config, HangmanConfig::default());
}

#[test]
fn test_partial_file_keeps_other_defaults() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("hangman.toml");
    fs::write(
        &path,
        r#"port = 8080
default_language = "GER"
rng_seed = 7
"#,
    )
    .expect("Write failed");

    let config = HangmanConfig::load(&path).expect("Valid config");
    assert_eq!(*config.port(), 8080);
    assert_eq!(*config.default_language(), Language::Ger);
    assert_eq!(*config.rng_seed(), Some(7));
    assert_eq!(*config.max_mistakes(), 11);
    assert_eq!(config.host(), "127.0.0.1");
}

#[test]
fn test_invalid_file_is_an_error() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("hangman.toml");
    fs::write(&path, "port = \"not a number\"").expect("Write failed");

    let err = HangmanConfig::load(&path).expect_err("Invalid config");
    assert!(err.message.contains("Failed to parse config"));
}

#[test]
fn test_setters_override() {
    let config = HangmanConfig::default()
        .with_port(9000)
        .with_max_mistakes(3);
    assert_eq!(*config.port(), 9000);
    assert_eq!(*config.max_mistakes(), 3);
}
