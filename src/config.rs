//! CLI設定の読み込み
//!
//! `~/.config/archive-nexus/config.json` があれば読み込み、なければ既定値。
//! `--config` 指定時はそのファイルを必須とする。

use crate::error::{ArchiveError, Result};
use archive_nexus_common::AppConfig;
use std::path::{Path, PathBuf};

pub fn load(explicit: Option<&Path>) -> Result<AppConfig> {
    let path = match explicit {
        Some(path) => {
            if !path.exists() {
                return Err(ArchiveError::FileNotFound(path.display().to_string()));
            }
            path.to_path_buf()
        }
        None => {
            let path = config_path()?;
            if !path.exists() {
                tracing::debug!(path = %path.display(), "config file not found, using defaults");
                return Ok(AppConfig::default());
            }
            path
        }
    };

    let content = std::fs::read_to_string(&path)?;
    let config = AppConfig::from_json(&content)?;
    tracing::debug!(path = %path.display(), "config loaded");
    Ok(config)
}

pub fn config_path() -> Result<PathBuf> {
    let home = dirs::home_dir()
        .ok_or_else(|| ArchiveError::Config("ホームディレクトリが見つかりません".into()))?;
    Ok(home.join(".config").join("archive-nexus").join("config.json"))
}
