//! Tests for loading session configuration from disk.

use solved_session::{GameSession, SessionConfig};
use solved_tictactoe::Player;
use std::io::Write;

#[test]
fn test_load_config_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "human = \"O\"").unwrap();
    writeln!(file, "games = 4").unwrap();

    let config = SessionConfig::from_file(file.path()).expect("valid config");
    assert_eq!(config.human(), &Player::O);
    assert_eq!(config.games(), &4);
    assert_eq!(config.seed(), &None);

    let session = GameSession::new(&config);
    assert_eq!(session.human(), Player::O);
}

#[test]
fn test_missing_file_reports_read_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = SessionConfig::from_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(err.message.starts_with("Failed to read config file"));
}

#[test]
fn test_malformed_file_reports_parse_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "games = \"many\"").unwrap();

    let err = SessionConfig::from_file(file.path()).unwrap_err();
    assert!(err.message.starts_with("Failed to parse config"));
    assert!(err.to_string().starts_with("Config error: Failed to parse config"));
}
