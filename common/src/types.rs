//! スキャン記録の型定義
//!
//! - NewScannedFile: スキャン完了時にセッションへ渡す部分レコード
//! - ScannedFileRecord: ID・棚コード付与後の確定レコード（以後不変）

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shelf::ShelfLocation;

/// 新規レコードの初期ステータス
pub const STATUS_PENDING_REVIEW: &str = "Pending Review";

/// サンプル請求書ファイル数
pub const SAMPLE_FILE_COUNT: u32 = 5;

/// ID・棚コードを持たない部分レコード
#[derive(Debug, Clone, PartialEq)]
pub struct NewScannedFile {
    pub file_name: String,
    pub timestamp: DateTime<Utc>,
    pub location: ShelfLocation,
    pub status: String,
}

impl NewScannedFile {
    /// ステータス "Pending Review" で生成
    pub fn pending(file_name: impl Into<String>, timestamp: DateTime<Utc>, location: ShelfLocation) -> Self {
        Self {
            file_name: file_name.into(),
            timestamp,
            location,
            status: STATUS_PENDING_REVIEW.to_string(),
        }
    }
}

/// スキャン済みファイル
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScannedFileRecord {
    pub id: String,
    pub file_name: String,
    pub timestamp: DateTime<Utc>,
    #[serde(flatten)]
    pub location: ShelfLocation,
    pub shelf_code: String,
    pub status: String,
}

impl ScannedFileRecord {
    /// 部分レコードにIDを付与し、棚コードを導出
    pub fn from_new(id: String, file: NewScannedFile) -> Self {
        Self {
            id,
            shelf_code: file.location.shelf_code(),
            file_name: file.file_name,
            timestamp: file.timestamp,
            location: file.location,
            status: file.status,
        }
    }

    pub fn is_pending_review(&self) -> bool {
        self.status == STATUS_PENDING_REVIEW
    }

    /// 一覧表示用ステータス（保留中はアラビア語併記）
    pub fn status_label(&self) -> String {
        if self.is_pending_review() {
            format!("{} (قيد المراجعة)", self.status)
        } else {
            self.status.clone()
        }
    }
}

/// サンプルファイル名 `sample_invoice_0{n}.jpg`
///
/// `roll` は任意の乱数値。`SAMPLE_FILE_COUNT` で剰余を取り1始まりに変換する。
pub fn sample_file_name(roll: u32) -> String {
    format!("sample_invoice_0{}.jpg", roll % SAMPLE_FILE_COUNT + 1)
}

/// ファイル名中の最初の数字列からサンプル画像のインデックス（0始まり）を求める
///
/// `sample_invoice_03.jpg` → `Some(2)`。範囲外・数字なしは `None`。
pub fn sample_index_for(file_name: &str, pool_len: usize) -> Option<usize> {
    let start = file_name.find(|c: char| c.is_ascii_digit())?;
    let digits: String = file_name[start..]
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    let number: usize = digits.parse().ok()?;
    let index = number.checked_sub(1)?;
    (index < pool_len).then_some(index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn ts() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 5, 12, 10, 30, 0).unwrap()
    }

    #[test]
    fn test_from_new_derives_shelf_code() {
        let location = ShelfLocation::new(2, 3, 1, 4).unwrap();
        let record = ScannedFileRecord::from_new(
            "1-0".to_string(),
            NewScannedFile::pending("sample_invoice_01.jpg", ts(), location),
        );
        assert_eq!(record.shelf_code, "R2-S3-B1-F4");
        assert_eq!(record.status, STATUS_PENDING_REVIEW);
        assert!(record.is_pending_review());
    }

    #[test]
    fn test_record_serialize_flattens_location() {
        let record = ScannedFileRecord::from_new(
            "abc".to_string(),
            NewScannedFile::pending("a.jpg", ts(), ShelfLocation::new(1, 2, 3, 4).unwrap()),
        );
        let json = serde_json::to_string(&record).expect("シリアライズ失敗");
        assert!(json.contains("\"fileName\":\"a.jpg\""));
        assert!(json.contains("\"rack\":1"));
        assert!(json.contains("\"box\":3"));
        assert!(json.contains("\"shelfCode\":\"R1-S2-B3-F4\""));
    }

    #[test]
    fn test_status_label() {
        let mut record = ScannedFileRecord::from_new(
            "x".to_string(),
            NewScannedFile::pending("a.jpg", ts(), ShelfLocation::default()),
        );
        assert_eq!(record.status_label(), "Pending Review (قيد المراجعة)");
        record.status = "Reviewed".to_string();
        assert_eq!(record.status_label(), "Reviewed");
    }

    #[test]
    fn test_sample_file_name_range() {
        assert_eq!(sample_file_name(0), "sample_invoice_01.jpg");
        assert_eq!(sample_file_name(4), "sample_invoice_05.jpg");
        assert_eq!(sample_file_name(5), "sample_invoice_01.jpg");
        assert_eq!(sample_file_name(u32::MAX), "sample_invoice_01.jpg");
    }

    #[test]
    fn test_sample_index_for() {
        assert_eq!(sample_index_for("sample_invoice_03.jpg", 5), Some(2));
        assert_eq!(sample_index_for("sample_invoice_05.jpg", 5), Some(4));
        assert_eq!(sample_index_for("sample_invoice_07.jpg", 5), None);
        assert_eq!(sample_index_for("scan_00.jpg", 5), None);
        assert_eq!(sample_index_for("invoice.jpg", 5), None);
    }
}
