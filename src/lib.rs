//! Archive Nexus 運用コンソール
//!
//! 共通ライブラリの上で、モックデータ検証・スキャン疑似実行・請求書検証を行う。

pub mod check;
pub mod cli;
pub mod config;
pub mod error;
pub mod invoice;
pub mod logging;
pub mod simulate;
