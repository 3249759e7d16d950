//! モックデータ（mock-scans.json）の読み込み
//!
//! スキャナ名・既存スキャン記録・取引先名の3リストを持つ。
//! 記録の `id` / `shelfCode` は省略可能で、省略時は読み込み時に導出する。

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::shelf::{Axis, ShelfLocation};
use crate::types::{ScannedFileRecord, STATUS_PENDING_REVIEW};

/// モックデータのファイル名
pub const MOCK_DATA_FILE: &str = "mock-scans.json";

/// モックデータ内のスキャン記録（派生フィールドは任意）
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MockScannedFile {
    pub id: Option<String>,
    pub file_name: String,
    pub timestamp: String,
    /// 負数・0も受け付け、記録単位で除外する
    pub rack: i64,
    pub shelf: i64,
    pub r#box: i64,
    pub folder: i64,
    pub shelf_code: Option<String>,
    pub status: Option<String>,
}

/// モックデータ全体
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MockData {
    pub scanners: Vec<String>,
    #[serde(default)]
    pub scanned_files: Vec<MockScannedFile>,
    #[serde(default)]
    pub vendors: Vec<String>,
}

/// 記録変換の結果（不正な記録は理由付きで除外）
#[derive(Debug, Clone, Default)]
pub struct HydratedFiles {
    pub records: Vec<ScannedFileRecord>,
    pub rejected: Vec<String>,
}

impl MockData {
    /// JSON文字列からパース
    pub fn from_json(json: &str) -> Result<Self> {
        let data: MockData = serde_json::from_str(json)?;
        if data.scanners.iter().any(|s| s.trim().is_empty()) {
            return Err(Error::MockData("empty scanner name".into()));
        }
        Ok(data)
    }

    /// 記録を確定レコードへ変換
    ///
    /// 座標が0、またはタイムスタンプが解釈できない記録は除外する。
    /// 棚コードは常に座標から再計算する。
    pub fn scanned_file_records(&self) -> HydratedFiles {
        let mut out = HydratedFiles::default();
        for (index, file) in self.scanned_files.iter().enumerate() {
            match file.to_record(index) {
                Ok(record) => out.records.push(record),
                Err(e) => {
                    tracing::warn!(index, file_name = %file.file_name, error = %e, "dropping mock record");
                    out.rejected.push(format!("#{} {}: {}", index, file.file_name, e));
                }
            }
        }
        out
    }
}

/// u32 に収まらない値はエラー（0 は `ShelfLocation::new` で弾く）
fn coordinate(axis: Axis, value: i64) -> Result<u32> {
    u32::try_from(value).map_err(|_| {
        Error::InvalidCoordinate(format!("{} must be >= 1 (got {})", axis.label(), value))
    })
}

impl MockScannedFile {
    fn to_record(&self, index: usize) -> Result<ScannedFileRecord> {
        if self.file_name.trim().is_empty() {
            return Err(Error::MockData("missing fileName".into()));
        }
        let location = ShelfLocation::new(
            coordinate(Axis::Rack, self.rack)?,
            coordinate(Axis::Shelf, self.shelf)?,
            coordinate(Axis::Box, self.r#box)?,
            coordinate(Axis::Folder, self.folder)?,
        )?;
        let timestamp = DateTime::parse_from_rfc3339(&self.timestamp)
            .map(|t| t.with_timezone(&Utc))
            .map_err(|e| Error::MockData(format!("invalid timestamp '{}': {}", self.timestamp, e)))?;

        let shelf_code = location.shelf_code();
        if let Some(given) = &self.shelf_code {
            if given != &shelf_code {
                tracing::debug!(given = %given, derived = %shelf_code, "mock shelf code replaced");
            }
        }

        Ok(ScannedFileRecord {
            id: self.id.clone().unwrap_or_else(|| format!("mock-{}", index)),
            file_name: self.file_name.clone(),
            timestamp,
            location,
            shelf_code,
            status: self
                .status
                .clone()
                .unwrap_or_else(|| STATUS_PENDING_REVIEW.to_string()),
        })
    }
}
