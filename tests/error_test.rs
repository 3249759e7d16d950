//! エラーケーステスト

use archive_nexus::config;
use archive_nexus::error::ArchiveError;
use std::path::Path;
use tempfile::tempdir;

/// ArchiveErrorのDisplay実装確認
#[test]
fn test_error_display() {
    let errors = vec![
        ArchiveError::Config("テスト設定エラー".to_string()),
        ArchiveError::FileNotFound("mock-scans.json".to_string()),
        ArchiveError::InvalidMockData("empty scanner name".to_string()),
        ArchiveError::InvalidInvoice(vec!["price: Invalid price format".to_string()]),
    ];

    for err in errors {
        let display = format!("{}", err);
        assert!(!display.is_empty(), "エラーメッセージが空: {:?}", err);
    }
}

/// 共通ライブラリのエラーはそのまま表示
#[test]
fn test_core_error_is_transparent() {
    let err: ArchiveError = archive_nexus_common::Error::UnknownScanner("HP".into()).into();
    assert_eq!(err.to_string(), "Unknown scanner: HP");
}

/// 指定した設定ファイルがない
#[test]
fn test_explicit_config_missing() {
    let result = config::load(Some(Path::new("/nonexistent/config.json")));
    assert!(matches!(result, Err(ArchiveError::FileNotFound(_))));
}

/// 設定ファイルの読み込み（未指定項目は既定値）
#[test]
fn test_explicit_config_partial() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{"scan": {"durationMs": 500}}"#).unwrap();

    let config = config::load(Some(&path)).expect("設定読み込み失敗");
    assert_eq!(config.scan.duration_ms, 500);
    assert_eq!(config.scan.tick_ms, 200);
    assert_eq!(config.base_path, "/digitize-archive-nexus");
}

/// 不正なタイミング設定
#[test]
fn test_explicit_config_invalid_timing() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{"scan": {"tickMs": 0}}"#).unwrap();

    let result = config::load(Some(&path));
    assert!(matches!(
        result,
        Err(ArchiveError::Core(archive_nexus_common::Error::Config(_)))
    ));
}

/// 設定ファイルパスの末尾
#[test]
fn test_config_path() {
    if let Ok(path) = config::config_path() {
        assert!(path.ends_with(".config/archive-nexus/config.json"));
    }
}
