use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "archive-nexus")]
#[command(about = "文書デジタル化フロントエンドの運用コンソール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// 設定ファイル（デフォルト: ~/.config/archive-nexus/config.json）
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// モックデータを読み込んで内容を表示
    Check {
        /// モックデータJSON（mock-scans.json）
        #[arg(required = true)]
        mock: PathBuf,
    },

    /// スキャンを疑似実行してスキャン済み一覧を表示
    Simulate {
        /// モックデータJSON（スキャナ一覧・既存記録の取り込み）
        #[arg(short, long)]
        mock: Option<PathBuf>,

        /// 使用するスキャナ名
        #[arg(short, long)]
        scanner: Option<String>,

        /// ラック番号
        #[arg(long)]
        rack: Option<i64>,

        /// 棚番号
        #[arg(long)]
        shelf: Option<i64>,

        /// 箱番号
        #[arg(long = "box")]
        r#box: Option<i64>,

        /// フォルダ番号
        #[arg(long)]
        folder: Option<i64>,

        /// スキャン回数
        #[arg(short = 'n', long, default_value = "1")]
        count: usize,

        /// 結果をJSONで出力
        #[arg(long)]
        json: bool,
    },

    /// 請求書JSONを検証
    Validate {
        /// 請求書JSONファイル
        #[arg(required = true)]
        invoice: PathBuf,
    },

    /// 取引先の候補を表示
    Vendors {
        /// モックデータJSON
        #[arg(required = true)]
        mock: PathBuf,

        /// 入力文字列
        query: String,
    },

    /// 棚番から棚コードを生成
    ShelfCode {
        rack: u32,
        shelf: u32,
        r#box: u32,
        folder: u32,
    },

    /// 設定の表示
    Config {
        /// 現在の設定を表示
        #[arg(long)]
        show: bool,
    },
}
