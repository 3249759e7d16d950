//! アプリケーション設定
//!
//! Web版は既定値をそのまま使い、CLIはJSONファイルから上書きできる。

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::mock::MOCK_DATA_FILE;

/// 配信ベースパス
pub const DEFAULT_BASE_PATH: &str = "/digitize-archive-nexus";

/// 画像読み込み失敗時の代替画像
pub const PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/800x1000?text=Invoice+Document";

/// スキャン疑似動作のタイミング
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ScanTiming {
    /// 開始から完了までの時間（ミリ秒）
    pub duration_ms: u32,
    /// 進捗更新の間隔（ミリ秒）
    pub tick_ms: u32,
}

impl Default for ScanTiming {
    fn default() -> Self {
        Self {
            duration_ms: 2000,
            tick_ms: 200,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppConfig {
    pub base_path: String,
    pub mock_data_file: String,
    pub sample_images: Vec<String>,
    pub placeholder_image: String,
    pub scan: ScanTiming,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_path: DEFAULT_BASE_PATH.to_string(),
            mock_data_file: MOCK_DATA_FILE.to_string(),
            sample_images: (1..=5)
                .map(|n| format!("assets/samples/sample_invoice_0{}.jpg", n))
                .collect(),
            placeholder_image: PLACEHOLDER_IMAGE.to_string(),
            scan: ScanTiming::default(),
        }
    }
}

impl AppConfig {
    /// JSONから読み込み、値を検証
    pub fn from_json(json: &str) -> Result<Self> {
        let config: AppConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.scan.tick_ms == 0 {
            return Err(Error::Config("scan.tickMs must be greater than 0".into()));
        }
        if self.scan.duration_ms < self.scan.tick_ms {
            return Err(Error::Config("scan.durationMs must be at least scan.tickMs".into()));
        }
        if self.sample_images.is_empty() {
            return Err(Error::Config("sampleImages must not be empty".into()));
        }
        Ok(())
    }

    /// ベースパスを基準に相対パスを解決
    ///
    /// 絶対URL（`http://` 等）はそのまま返す。
    pub fn asset_url(&self, path: &str) -> String {
        if path.contains("://") {
            return path.to_string();
        }
        let base = self.base_path.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{}/{}", base, path)
    }

    pub fn mock_data_url(&self) -> String {
        self.asset_url(&self.mock_data_file)
    }

    /// サンプル画像のURL一覧
    pub fn sample_image_urls(&self) -> Vec<String> {
        self.sample_images.iter().map(|p| self.asset_url(p)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.base_path, "/digitize-archive-nexus");
        assert_eq!(config.sample_images.len(), 5);
        assert_eq!(config.scan.duration_ms, 2000);
        assert_eq!(config.scan.tick_ms, 200);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_asset_url() {
        let config = AppConfig::default();
        assert_eq!(
            config.mock_data_url(),
            "/digitize-archive-nexus/mock-scans.json"
        );
        assert_eq!(
            config.asset_url("/assets/samples/a.jpg"),
            "/digitize-archive-nexus/assets/samples/a.jpg"
        );
        assert_eq!(config.asset_url(PLACEHOLDER_IMAGE), PLACEHOLDER_IMAGE);
    }

    #[test]
    fn test_asset_url_root_base() {
        let config = AppConfig {
            base_path: "/".to_string(),
            ..Default::default()
        };
        assert_eq!(config.mock_data_url(), "/mock-scans.json");
    }

    #[test]
    fn test_from_json_partial() {
        let config = AppConfig::from_json(r#"{"scan": {"durationMs": 500}}"#).unwrap();
        assert_eq!(config.scan.duration_ms, 500);
        assert_eq!(config.scan.tick_ms, 200);
        assert_eq!(config.base_path, DEFAULT_BASE_PATH);
    }

    #[test]
    fn test_from_json_rejects_zero_tick() {
        let result = AppConfig::from_json(r#"{"scan": {"tickMs": 0}}"#);
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_from_json_rejects_short_duration() {
        let result = AppConfig::from_json(r#"{"scan": {"durationMs": 100, "tickMs": 200}}"#);
        assert!(matches!(result, Err(Error::Config(_))));
    }
}
