//! エラー型定義

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Mock data error: {0}")]
    MockData(String),

    #[error("Unknown scanner: {0}")]
    UnknownScanner(String),

    #[error("Unknown scanned file: {0}")]
    UnknownFile(String),

    #[error("Invalid shelving coordinate: {0}")]
    InvalidCoordinate(String),

    #[error("A scan is already in progress")]
    ScanInProgress,

    #[error("No scan is ready to complete")]
    NotCompleting,

    #[error("Session already hydrated")]
    AlreadyHydrated,
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_json() {
        let json_error = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let error = Error::Json(json_error);
        let display = format!("{}", error);
        assert!(display.contains("JSON error"));
    }

    #[test]
    fn test_error_display_config() {
        let error = Error::Config("設定ファイルが見つかりません".to_string());
        assert_eq!(format!("{}", error), "Config error: 設定ファイルが見つかりません");
    }

    #[test]
    fn test_error_display_unknown_scanner() {
        let error = Error::UnknownScanner("Canon X".to_string());
        assert_eq!(format!("{}", error), "Unknown scanner: Canon X");
    }

    #[test]
    fn test_error_from_json() {
        let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error: Error = json_error.into();
        assert!(matches!(error, Error::Json(_)));
    }

    #[test]
    fn test_error_debug() {
        let error = Error::MockData("テスト".to_string());
        let debug = format!("{:?}", error);
        assert!(debug.contains("MockData"));
        assert!(debug.contains("テスト"));
    }
}
