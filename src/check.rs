//! モックデータの検証

use crate::error::{ArchiveError, Result};
use archive_nexus_common::mock::HydratedFiles;
use archive_nexus_common::MockData;
use std::fmt;
use std::path::Path;

/// 検証結果のサマリ
#[derive(Debug, Clone)]
pub struct CheckReport {
    pub scanners: Vec<String>,
    pub vendor_count: usize,
    pub files: HydratedFiles,
}

impl CheckReport {
    pub fn is_clean(&self) -> bool {
        !self.scanners.is_empty() && self.files.rejected.is_empty()
    }
}

impl fmt::Display for CheckReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "スキャナ: {}台", self.scanners.len())?;
        for name in &self.scanners {
            writeln!(f, "  - {}", name)?;
        }
        writeln!(f, "取引先: {}件", self.vendor_count)?;
        writeln!(f, "スキャン記録: {}件", self.files.records.len())?;
        for record in &self.files.records {
            writeln!(
                f,
                "  - {} {} {} [{}]",
                record.id, record.file_name, record.shelf_code, record.status
            )?;
        }
        if !self.files.rejected.is_empty() {
            writeln!(f, "除外: {}件", self.files.rejected.len())?;
            for reason in &self.files.rejected {
                writeln!(f, "  - {}", reason)?;
            }
        }
        Ok(())
    }
}

/// ファイルから読み込み
pub fn load_mock(path: &Path) -> Result<MockData> {
    if !path.exists() {
        return Err(ArchiveError::FileNotFound(path.display().to_string()));
    }
    let content = std::fs::read_to_string(path)?;
    MockData::from_json(&content).map_err(|e| ArchiveError::InvalidMockData(e.to_string()))
}

pub fn check(data: &MockData) -> CheckReport {
    let report = CheckReport {
        scanners: data.scanners.clone(),
        vendor_count: data.vendors.len(),
        files: data.scanned_file_records(),
    };
    if report.scanners.is_empty() {
        tracing::warn!("mock data has no scanners");
    }
    report
}
