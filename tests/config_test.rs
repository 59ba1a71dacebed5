//! 設定ファイルテスト

use teajia_catalog::config::{Config, DEFAULT_DATA_SOURCE};
use tempfile::tempdir;

/// 設定ファイルがなければ既定値
#[test]
fn test_load_missing_uses_defaults() {
    let dir = tempdir().expect("Failed to create temp dir");
    let config = Config::load_from(&dir.path().join("config.json")).unwrap();

    assert_eq!(config.data_source, DEFAULT_DATA_SOURCE);
    assert_eq!(config.timeout_seconds, 30);
    assert!(config.history_path.is_none());
}

/// 保存と読み込み
#[test]
fn test_save_and_load() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("teajia").join("config.json");

    let config = Config {
        data_source: "teas.csv".into(),
        history_path: Some(dir.path().join("recent.json")),
        timeout_seconds: 5,
    };
    config.save_to(&path).expect("設定保存失敗");

    let loaded = Config::load_from(&path).unwrap();
    assert_eq!(loaded.data_source, "teas.csv");
    assert_eq!(loaded.timeout_seconds, 5);
    assert_eq!(loaded.history_path().unwrap(), dir.path().join("recent.json"));
}

/// 一部のキーだけの設定ファイル
#[test]
fn test_load_partial_config() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{"timeout_seconds": 9}"#).unwrap();

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.timeout_seconds, 9);
    assert_eq!(config.data_source, DEFAULT_DATA_SOURCE);
}

/// 不正なJSONはエラー
#[test]
fn test_load_invalid_json() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("config.json");
    std::fs::write(&path, "not json").unwrap();

    assert!(Config::load_from(&path).is_err());
}
