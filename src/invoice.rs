//! 請求書JSONの検証

use crate::error::{ArchiveError, Result};
use archive_nexus_common::{InvoiceForm, Violation};
use std::path::Path;

pub fn load_invoice(path: &Path) -> Result<InvoiceForm> {
    if !path.exists() {
        return Err(ArchiveError::FileNotFound(path.display().to_string()));
    }
    let content = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// 違反を表示用の行に変換
pub fn describe(violations: &[Violation]) -> Vec<String> {
    violations
        .iter()
        .map(|v| format!("{}: {}", v.field.name(), v.message()))
        .collect()
}

/// 読み込みと検証。違反があれば各項目の内容を持つエラー
pub fn validate_file(path: &Path) -> Result<InvoiceForm> {
    let form = load_invoice(path)?;
    let violations = form.validate();
    if violations.is_empty() {
        return Ok(form);
    }
    tracing::debug!(count = violations.len(), "invoice validation failed");
    Err(ArchiveError::InvalidInvoice(describe(&violations)))
}
