use thiserror::Error;

#[derive(Error, Debug)]
pub enum ArchiveError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("モックデータが不正: {0}")]
    InvalidMockData(String),

    #[error("請求書の検証に失敗: {}件の違反\n{}", .0.len(), format_lines(.0))]
    InvalidInvoice(Vec<String>),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Core(#[from] archive_nexus_common::Error),
}

fn format_lines(lines: &[String]) -> String {
    lines
        .iter()
        .map(|line| format!("  - {}", line))
        .collect::<Vec<_>>()
        .join("\n")
}

pub type Result<T> = std::result::Result<T, ArchiveError>;
