//! スキャンの疑似実行
//!
//! Web版と同じ状態機械を tokio の interval で進め、進捗を indicatif で表示する。

use crate::error::Result;
use archive_nexus_common::{Axis, MockData, ScanSession, ScanTick, ScanTiming, ScannedFileRecord};
use chrono::Utc;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::time::Duration;

const BAR_TEMPLATE: &str = "{prefix:.bold} [{bar:40.cyan/blue}] {pos:>3}% {msg}";

/// 疑似実行の条件
#[derive(Debug, Clone, Default)]
pub struct SimulateOptions {
    pub scanner: Option<String>,
    /// 棚番（未指定の軸は1）
    pub rack: Option<i64>,
    pub shelf: Option<i64>,
    pub r#box: Option<i64>,
    pub folder: Option<i64>,
    pub count: usize,
    /// 進捗バーを表示するか
    pub show_progress: bool,
}

/// モックデータと条件からセッションを準備
pub fn prepare_session(
    timing: ScanTiming,
    data: Option<&MockData>,
    options: &SimulateOptions,
) -> Result<ScanSession> {
    let mut session = ScanSession::new(timing);
    if let Some(data) = data {
        let rejected = session.hydrate(data)?;
        if rejected > 0 {
            tracing::warn!(rejected, "some mock records were dropped");
        }
    }
    if let Some(name) = &options.scanner {
        session.set_selected_scanner(name)?;
    }

    let coordinates = [
        (Axis::Rack, options.rack),
        (Axis::Shelf, options.shelf),
        (Axis::Box, options.r#box),
        (Axis::Folder, options.folder),
    ];
    for (axis, value) in coordinates {
        if let Some(value) = value {
            if !session.set_coordinate(axis, value) {
                tracing::warn!(axis = axis.label(), value, "coordinate ignored (must be 1 or greater)");
            }
        }
    }
    Ok(session)
}

fn progress_bar(index: usize, total: usize, visible: bool) -> ProgressBar {
    let bar = ProgressBar::new(100);
    if !visible {
        bar.set_draw_target(ProgressDrawTarget::hidden());
    }
    let style = ProgressStyle::with_template(BAR_TEMPLATE)
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("=> ");
    bar.set_style(style);
    bar.set_prefix(format!("[{}/{}]", index + 1, total));
    bar
}

/// 指定回数スキャンを実行し、作成された記録を作成順に返す
pub async fn run(session: &mut ScanSession, options: &SimulateOptions) -> Result<Vec<ScannedFileRecord>> {
    let tick_ms = session.timing().tick_ms;
    let mut created = Vec::with_capacity(options.count);

    for index in 0..options.count {
        session.start_scan()?;
        let bar = progress_bar(index, options.count, options.show_progress);
        bar.set_message(session.shelf_code());

        let mut interval = tokio::time::interval(Duration::from_millis(u64::from(tick_ms)));
        // 初回は即時に返るので読み捨てる
        interval.tick().await;

        loop {
            interval.tick().await;
            let roll = Utc::now().timestamp_subsec_nanos();
            match session.advance(tick_ms, Utc::now(), roll) {
                ScanTick::Progress(pct) => bar.set_position(u64::from(pct)),
                ScanTick::Completed(record) => {
                    bar.set_position(100);
                    bar.finish_with_message(format!("{} {}", record.shelf_code, record.file_name));
                    created.push(record);
                    break;
                }
                ScanTick::Idle => {
                    bar.abandon_with_message("cancelled");
                    break;
                }
            }
        }
    }

    Ok(created)
}
