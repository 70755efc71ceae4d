//! Tests for ArcadeConfig loading.

use std::fs;
use std::time::Duration;
use tempfile::TempDir;

use board_arcade::ArcadeConfig;

#[test]
fn test_missing_file_uses_defaults() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let config = ArcadeConfig::load(dir.path().join("absent.toml")).expect("Load failed");
    assert_eq!(config, ArcadeConfig::default());
    assert_eq!(*config.turn_limit(), 200);
    assert_eq!(config.think_delay(), Duration::from_millis(400));
    assert_eq!(*config.seed(), None);
}

#[test]
fn test_partial_file_keeps_other_defaults() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("arcade.toml");
    fs::write(&path, "ai_depth = 4\nseed = 99\n").expect("Write failed");

    let config = ArcadeConfig::load(&path).expect("Load failed");
    assert_eq!(*config.ai_depth(), 4);
    assert_eq!(*config.seed(), Some(99));
    assert_eq!(*config.obstacles_per_round(), 1);

    let settings = config.game_settings();
    assert_eq!(*settings.ai_depth(), 4);
    assert_eq!(*settings.seed(), Some(99));
}

#[test]
fn test_invalid_toml_is_an_error() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("arcade.toml");
    fs::write(&path, "turn_limit = \"many\"").expect("Write failed");

    let err = ArcadeConfig::load(&path).unwrap_err();
    assert!(err.message.contains("Failed to parse config"));
}

#[test]
fn test_zero_turn_limit_is_rejected() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("arcade.toml");
    fs::write(&path, "turn_limit = 0").expect("Write failed");
    assert!(ArcadeConfig::from_file(&path).is_err());
}

#[test]
fn test_dictionary_file_feeds_word_game() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let words = dir.path().join("words.txt");
    fs::write(&words, "cab\nzig\n").expect("Write failed");
    let path = dir.path().join("arcade.toml");
    fs::write(&path, format!("dictionary = {:?}", words.display().to_string()))
        .expect("Write failed");

    let config = ArcadeConfig::load(&path).expect("Load failed");
    let settings = config.game_settings();
    assert_eq!(settings.dictionary().len(), 2);
    assert!(settings.dictionary().contains("ZIG"));
}

#[test]
fn test_command_line_seed_overrides_file() {
    let config: ArcadeConfig = toml::from_str("seed = 1").expect("Parse failed");
    assert_eq!(*config.clone().with_seed(Some(8)).seed(), Some(8));
    assert_eq!(*config.with_seed(None).seed(), Some(1));
}
