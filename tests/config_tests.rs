use std::fs;

use duo_split::{
    config::{Config, ConfigManager, ParticipantNames},
    errors::LedgerError,
};
use tempfile::TempDir;

#[test]
fn load_returns_defaults_when_missing() {
    let temp = TempDir::new().expect("temp dir");
    let manager = ConfigManager::with_path(temp.path().join("config.json"));
    let config = manager.load().expect("load defaults");
    assert_eq!(config, Config::default());
    assert_eq!(config.projection_months, 6);
}

#[test]
fn save_then_load_roundtrip() {
    let temp = TempDir::new().expect("temp dir");
    let manager = ConfigManager::with_path(temp.path().join("nested").join("config.json"));
    let config = Config {
        participants: ParticipantNames::new("Ana", "Bruno"),
        projection_months: 12,
    };
    manager.save(&config).expect("save config");

    assert!(manager.path().exists());
    assert!(!manager.path().with_extension("json.tmp").exists());
    assert_eq!(manager.load().expect("load config"), config);
}

#[test]
fn legacy_participant_keys_are_read() {
    let temp = TempDir::new().expect("temp dir");
    let path = temp.path().join("config.json");
    fs::write(
        &path,
        r#"{"participants":{"userName":"Ana","partnerName":"Bruno"}}"#,
    )
    .expect("write legacy config");

    let config = ConfigManager::with_path(&path).load().expect("load legacy");
    assert_eq!(config.participants.first, "Ana");
    assert_eq!(config.participants.second, "Bruno");
    assert_eq!(config.projection_months, 6);
}

#[test]
fn corrupt_file_reports_serde_error() {
    let temp = TempDir::new().expect("temp dir");
    let path = temp.path().join("config.json");
    fs::write(&path, "not json").expect("write corrupt config");
    let err = ConfigManager::with_path(&path).load().unwrap_err();
    assert!(matches!(err, LedgerError::Serde(_)), "unexpected error: {err:?}");
}

#[test]
fn settings_with_both_key_generations_load() {
    let temp = TempDir::new().expect("temp dir");
    let path = temp.path().join("config.json");
    fs::write(
        &path,
        r#"{"participants":{"user1Name":"Ana","userName":"Old","user2Name":"Bruno"}}"#,
    )
    .expect("write mixed config");

    let config = ConfigManager::with_path(&path).load().expect("load mixed");
    assert_eq!(config.participants, ParticipantNames::new("Ana", "Bruno"));
}

#[test]
fn flat_settings_file_keeps_names() {
    let temp = TempDir::new().expect("temp dir");
    let path = temp.path().join("config.json");
    fs::write(&path, r#"{"user1Name":"Ana"}"#).expect("write flat config");

    let manager = ConfigManager::with_path(&path);
    let config = manager.load().expect("load flat");
    assert_eq!(config.participants.first, "Ana");
    assert_eq!(config.participants.second, "Participant 2");

    // saving rewrites it in the nested shape
    manager.save(&config).expect("save config");
    let raw = fs::read_to_string(&path).expect("read saved config");
    assert!(raw.contains("\"participants\""), "{raw}");
    assert_eq!(manager.load().expect("reload"), config);
}
