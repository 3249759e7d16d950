//! スキャンセッション
//!
//! 1画面表示の間だけ生存する状態の唯一の保持者。
//! スキャナ選択・棚番・スキャン進行状態・スキャン済み一覧（新しい順）・選択中ファイルを持つ。
//!
//! スキャン疑似動作は単一の状態機械で表す:
//! `Idle → Scanning → Completing → Idle`
//! 進捗は経過時間から算出するため、100%到達とレコード生成が必ず一致する。

use std::num::NonZeroU32;

use chrono::{DateTime, Utc};

use crate::config::ScanTiming;
use crate::error::{Error, Result};
use crate::mock::MockData;
use crate::shelf::{parse_coordinate, Axis, ShelfLocation};
use crate::types::{sample_file_name, sample_index_for, NewScannedFile, ScannedFileRecord};

/// スキャン進行状態
///
/// 開始時点の棚番を保持し、完了時のレコードに使う。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScanPhase {
    #[default]
    Idle,
    Scanning { elapsed_ms: u32, location: ShelfLocation },
    Completing { location: ShelfLocation },
}

/// `advance` の結果
#[derive(Debug, Clone, PartialEq)]
pub enum ScanTick {
    Idle,
    Progress(u8),
    Completed(ScannedFileRecord),
}

#[derive(Debug, Clone, Default)]
pub struct ScanSession {
    scanners: Vec<String>,
    selected_scanner: Option<String>,
    location: ShelfLocation,
    phase: ScanPhase,
    files: Vec<ScannedFileRecord>,
    selected_file: Option<String>,
    timing: ScanTiming,
    hydrated: bool,
    next_seq: u64,
}

impl ScanSession {
    pub fn new(timing: ScanTiming) -> Self {
        Self {
            timing,
            ..Default::default()
        }
    }

    // =============================================
    // モックデータ
    // =============================================

    /// モックデータを取り込む（1回のみ）
    ///
    /// 先頭のスキャナを選択状態にする。既にセッション内で作成された記録は
    /// モックの記録より新しいものとして先頭に残す。
    /// 除外された記録の件数を返す。
    pub fn hydrate(&mut self, data: &MockData) -> Result<usize> {
        if self.hydrated {
            return Err(Error::AlreadyHydrated);
        }
        let hydrated = data.scanned_file_records();

        self.scanners = data.scanners.clone();
        self.selected_scanner = self.scanners.first().cloned();
        self.files.extend(hydrated.records);
        self.hydrated = true;

        tracing::info!(
            scanners = self.scanners.len(),
            files = self.files.len(),
            rejected = hydrated.rejected.len(),
            "scan session hydrated"
        );
        Ok(hydrated.rejected.len())
    }

    pub fn is_hydrated(&self) -> bool {
        self.hydrated
    }

    // =============================================
    // スキャナ選択
    // =============================================

    pub fn scanners(&self) -> &[String] {
        &self.scanners
    }

    pub fn selected_scanner(&self) -> Option<&str> {
        self.selected_scanner.as_deref()
    }

    /// 読み込み済みのスキャナのみ選択可能
    pub fn set_selected_scanner(&mut self, name: &str) -> Result<()> {
        if !self.scanners.iter().any(|s| s == name) {
            tracing::debug!(scanner = name, "rejected unknown scanner");
            return Err(Error::UnknownScanner(name.to_string()));
        }
        self.selected_scanner = Some(name.to_string());
        Ok(())
    }

    // =============================================
    // 棚番
    // =============================================

    pub fn location(&self) -> ShelfLocation {
        self.location
    }

    /// 現在の棚番から導出した棚コード
    pub fn shelf_code(&self) -> String {
        self.location.shelf_code()
    }

    /// 1以上の値のみ受け付ける。それ以外は以前の値を保持して `false`
    pub fn set_coordinate(&mut self, axis: Axis, value: i64) -> bool {
        match u32::try_from(value).ok().and_then(NonZeroU32::new) {
            Some(v) => {
                self.location.set(axis, v);
                true
            }
            None => {
                tracing::debug!(axis = axis.label(), value, "rejected shelving coordinate");
                false
            }
        }
    }

    /// 入力欄の文字列から設定
    pub fn set_coordinate_input(&mut self, axis: Axis, input: &str) -> bool {
        match parse_coordinate(input) {
            Some(v) => {
                self.location.set(axis, v);
                true
            }
            None => {
                tracing::debug!(axis = axis.label(), input, "rejected shelving input");
                false
            }
        }
    }

    pub fn set_rack(&mut self, value: i64) -> bool {
        self.set_coordinate(Axis::Rack, value)
    }

    pub fn set_shelf(&mut self, value: i64) -> bool {
        self.set_coordinate(Axis::Shelf, value)
    }

    pub fn set_box(&mut self, value: i64) -> bool {
        self.set_coordinate(Axis::Box, value)
    }

    pub fn set_folder(&mut self, value: i64) -> bool {
        self.set_coordinate(Axis::Folder, value)
    }

    pub fn increment(&mut self, axis: Axis) -> bool {
        let next = i64::from(self.location.get(axis)) + 1;
        self.set_coordinate(axis, next)
    }

    /// 1未満にはならない
    pub fn decrement(&mut self, axis: Axis) -> bool {
        let current = self.location.get(axis);
        if current <= 1 {
            return false;
        }
        self.set_coordinate(axis, i64::from(current) - 1)
    }

    // =============================================
    // スキャン進行
    // =============================================

    pub fn phase(&self) -> ScanPhase {
        self.phase
    }

    pub fn timing(&self) -> ScanTiming {
        self.timing
    }

    pub fn is_scanning(&self) -> bool {
        !matches!(self.phase, ScanPhase::Idle)
    }

    /// 進捗（0〜100）
    pub fn progress(&self) -> u8 {
        match self.phase {
            ScanPhase::Idle => 0,
            ScanPhase::Scanning { elapsed_ms, .. } => {
                let duration = self.timing.duration_ms.max(1) as u64;
                let pct = (elapsed_ms as u64 * 100 / duration).min(100);
                pct as u8
            }
            ScanPhase::Completing { .. } => 100,
        }
    }

    /// スキャン開始。記録は作成しない
    pub fn start_scan(&mut self) -> Result<()> {
        if self.is_scanning() {
            return Err(Error::ScanInProgress);
        }
        self.phase = ScanPhase::Scanning {
            elapsed_ms: 0,
            location: self.location,
        };
        tracing::debug!(shelf_code = %self.location, "scan started");
        Ok(())
    }

    /// 経過時間を進める。所定時間に達すると `Completing` へ遷移
    pub fn tick(&mut self, dt_ms: u32) -> ScanPhase {
        if let ScanPhase::Scanning { elapsed_ms, location } = self.phase {
            let elapsed_ms = elapsed_ms.saturating_add(dt_ms);
            self.phase = if elapsed_ms >= self.timing.duration_ms {
                ScanPhase::Completing { location }
            } else {
                ScanPhase::Scanning { elapsed_ms, location }
            };
        }
        self.phase
    }

    /// `Completing` のスキャンを確定し、記録を追加して `Idle` へ戻る
    pub fn complete_scan(
        &mut self,
        file_name: impl Into<String>,
        timestamp: DateTime<Utc>,
    ) -> Result<&ScannedFileRecord> {
        let ScanPhase::Completing { location } = self.phase else {
            return Err(Error::NotCompleting);
        };
        self.phase = ScanPhase::Idle;
        Ok(self.add_scanned_file(NewScannedFile::pending(file_name, timestamp, location)))
    }

    /// タイマー1回分の処理
    ///
    /// `roll` はサンプルファイル名の選択に使う乱数値。
    pub fn advance(&mut self, dt_ms: u32, now: DateTime<Utc>, roll: u32) -> ScanTick {
        match self.tick(dt_ms) {
            ScanPhase::Idle => ScanTick::Idle,
            ScanPhase::Scanning { .. } => ScanTick::Progress(self.progress()),
            ScanPhase::Completing { .. } => match self.complete_scan(sample_file_name(roll), now) {
                Ok(record) => ScanTick::Completed(record.clone()),
                Err(_) => ScanTick::Idle,
            },
        }
    }

    /// 進行中のスキャンを破棄（記録は作成しない）
    pub fn cancel_scan(&mut self) -> bool {
        let was_scanning = self.is_scanning();
        if was_scanning {
            tracing::debug!("scan cancelled");
        }
        self.phase = ScanPhase::Idle;
        was_scanning
    }

    // =============================================
    // スキャン済みファイル
    // =============================================

    /// IDを付与し棚コードを導出して先頭に追加
    pub fn add_scanned_file(&mut self, file: NewScannedFile) -> &ScannedFileRecord {
        let id = format!("{}-{}", file.timestamp.timestamp_millis(), self.next_seq);
        self.next_seq += 1;
        let record = ScannedFileRecord::from_new(id, file);
        tracing::info!(id = %record.id, file_name = %record.file_name, shelf_code = %record.shelf_code, "scanned file added");
        self.files.insert(0, record);
        &self.files[0]
    }

    /// 新しい順
    pub fn files(&self) -> &[ScannedFileRecord] {
        &self.files
    }

    /// プレビュー同期用の選択ファイル（`None` で解除）
    pub fn set_selected_file(&mut self, id: Option<&str>) -> Result<()> {
        match id {
            None => {
                self.selected_file = None;
                Ok(())
            }
            Some(id) if self.files.iter().any(|f| f.id == id) => {
                self.selected_file = Some(id.to_string());
                Ok(())
            }
            Some(id) => Err(Error::UnknownFile(id.to_string())),
        }
    }

    pub fn selected_file(&self) -> Option<&ScannedFileRecord> {
        let id = self.selected_file.as_deref()?;
        self.files.iter().find(|f| f.id == id)
    }

    /// 選択中ファイルのIDとプレビュー位置
    ///
    /// 選択が変わったときだけ値が変わる。スキャン進行や棚番の変更では変わらない。
    pub fn preview_selection(&self, pool_len: usize) -> Option<(String, usize)> {
        let file = self.selected_file()?;
        let index = sample_index_for(&file.file_name, pool_len)?;
        Some((file.id.clone(), index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::STATUS_PENDING_REVIEW;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 5, 12, 10, 30, 0).unwrap()
    }

    fn mock() -> MockData {
        MockData::from_json(
            r#"{
                "scanners": ["Fujitsu fi-7160", "Canon DR-C225"],
                "scannedFiles": [
                    {"id": "old", "fileName": "sample_invoice_02.jpg", "timestamp": "2025-05-01T08:00:00Z",
                     "rack": 1, "shelf": 1, "box": 2, "folder": 3}
                ],
                "vendors": ["Acme Corp"]
            }"#,
        )
        .unwrap()
    }

    fn hydrated() -> ScanSession {
        let mut session = ScanSession::default();
        session.hydrate(&mock()).unwrap();
        session
    }

    // =============================================
    // 取り込み・スキャナ選択
    // =============================================

    #[test]
    fn test_hydrate_selects_first_scanner() {
        let session = hydrated();
        assert_eq!(session.scanners().len(), 2);
        assert_eq!(session.selected_scanner(), Some("Fujitsu fi-7160"));
        assert_eq!(session.files().len(), 1);
        assert!(session.is_hydrated());
    }

    #[test]
    fn test_hydrate_only_once() {
        let mut session = hydrated();
        assert!(matches!(session.hydrate(&mock()), Err(Error::AlreadyHydrated)));
        assert_eq!(session.files().len(), 1);
    }

    #[test]
    fn test_hydrate_keeps_session_records_first() {
        let mut session = ScanSession::default();
        session.add_scanned_file(NewScannedFile::pending("new.jpg", now(), ShelfLocation::default()));
        session.hydrate(&mock()).unwrap();
        assert_eq!(session.files()[0].file_name, "new.jpg");
        assert_eq!(session.files()[1].id, "old");
    }

    #[test]
    fn test_unhydrated_session_is_empty() {
        let session = ScanSession::default();
        assert!(session.scanners().is_empty());
        assert_eq!(session.selected_scanner(), None);
        assert!(session.files().is_empty());
    }

    #[test]
    fn test_select_known_scanner() {
        let mut session = hydrated();
        session.set_selected_scanner("Canon DR-C225").unwrap();
        assert_eq!(session.selected_scanner(), Some("Canon DR-C225"));
    }

    #[test]
    fn test_select_unknown_scanner_is_rejected() {
        let mut session = hydrated();
        let result = session.set_selected_scanner("Epson");
        assert!(matches!(result, Err(Error::UnknownScanner(_))));
        assert_eq!(session.selected_scanner(), Some("Fujitsu fi-7160"));
    }

    // =============================================
    // 棚番
    // =============================================

    #[test]
    fn test_set_coordinates_and_shelf_code() {
        let mut session = ScanSession::default();
        assert!(session.set_rack(2));
        assert!(session.set_shelf(3));
        assert!(session.set_box(1));
        assert!(session.set_folder(4));
        assert_eq!(session.shelf_code(), "R2-S3-B1-F4");
    }

    #[test]
    fn test_invalid_coordinate_keeps_previous_value() {
        let mut session = ScanSession::default();
        session.set_rack(5);
        assert!(!session.set_rack(0));
        assert!(!session.set_rack(-3));
        assert!(!session.set_coordinate_input(Axis::Rack, "abc"));
        assert!(!session.set_coordinate_input(Axis::Rack, "0"));
        assert_eq!(session.location().get(Axis::Rack), 5);
    }

    #[test]
    fn test_coordinate_input_parses_numbers() {
        let mut session = ScanSession::default();
        assert!(session.set_coordinate_input(Axis::Folder, "12"));
        assert_eq!(session.shelf_code(), "R1-S1-B1-F12");
    }

    #[test]
    fn test_increment_and_decrement() {
        let mut session = ScanSession::default();
        assert!(!session.decrement(Axis::Shelf));
        assert_eq!(session.location().get(Axis::Shelf), 1);
        assert!(session.increment(Axis::Shelf));
        assert!(session.increment(Axis::Shelf));
        assert!(session.decrement(Axis::Shelf));
        assert_eq!(session.location().get(Axis::Shelf), 2);
    }

    // =============================================
    // スキャン進行
    // =============================================

    #[test]
    fn test_start_scan_sets_flag_immediately() {
        let mut session = hydrated();
        assert!(!session.is_scanning());
        session.start_scan().unwrap();
        assert!(session.is_scanning());
        assert_eq!(session.progress(), 0);
        assert_eq!(session.files().len(), 1);
    }

    #[test]
    fn test_start_scan_twice_is_rejected() {
        let mut session = hydrated();
        session.start_scan().unwrap();
        assert!(matches!(session.start_scan(), Err(Error::ScanInProgress)));
    }

    #[test]
    fn test_full_scan_appends_exactly_one_record() {
        let mut session = hydrated();
        session.set_rack(2);
        session.start_scan().unwrap();

        let timing = session.timing();
        let ticks = timing.duration_ms / timing.tick_ms;
        let mut completed = Vec::new();
        let mut last_progress = 0;
        for i in 1..=ticks {
            match session.advance(timing.tick_ms, now(), 2) {
                ScanTick::Progress(p) => {
                    assert!(p > last_progress);
                    last_progress = p;
                    assert!(session.is_scanning());
                    assert!(i < ticks);
                }
                ScanTick::Completed(record) => completed.push(record),
                ScanTick::Idle => panic!("スキャン中にIdleになった"),
            }
        }

        assert_eq!(completed.len(), 1);
        assert!(!session.is_scanning());
        assert_eq!(session.files().len(), 2);

        let record = &session.files()[0];
        assert_eq!(record, &completed[0]);
        assert_eq!(record.file_name, "sample_invoice_03.jpg");
        assert_eq!(record.shelf_code, "R2-S1-B1-F1");
        assert_eq!(record.status, STATUS_PENDING_REVIEW);
        assert_eq!(record.timestamp, now());
    }

    #[test]
    fn test_progress_reaches_100_only_at_completion() {
        let mut session = ScanSession::default();
        session.start_scan().unwrap();
        session.tick(1800);
        assert_eq!(session.progress(), 90);
        assert!(matches!(session.tick(200), ScanPhase::Completing { .. }));
        assert_eq!(session.progress(), 100);
        assert!(session.is_scanning());
        session.complete_scan("x.jpg", now()).unwrap();
        assert_eq!(session.progress(), 0);
        assert!(!session.is_scanning());
    }

    #[test]
    fn test_location_captured_at_scan_start() {
        let mut session = ScanSession::default();
        session.set_box(7);
        session.start_scan().unwrap();
        session.set_box(9);
        session.tick(5000);
        let record = session.complete_scan("x.jpg", now()).unwrap();
        assert_eq!(record.shelf_code, "R1-S1-B7-F1");
        assert_eq!(session.shelf_code(), "R1-S1-B9-F1");
    }

    #[test]
    fn test_complete_without_scan_is_error() {
        let mut session = ScanSession::default();
        assert!(matches!(
            session.complete_scan("x.jpg", now()),
            Err(Error::NotCompleting)
        ));
        session.start_scan().unwrap();
        assert!(matches!(
            session.complete_scan("x.jpg", now()),
            Err(Error::NotCompleting)
        ));
    }

    #[test]
    fn test_advance_when_idle() {
        let mut session = ScanSession::default();
        assert_eq!(session.advance(200, now(), 0), ScanTick::Idle);
        assert!(session.files().is_empty());
    }

    #[test]
    fn test_cancel_scan_creates_no_record() {
        let mut session = ScanSession::default();
        session.start_scan().unwrap();
        session.tick(1000);
        assert!(session.cancel_scan());
        assert!(!session.is_scanning());
        assert_eq!(session.advance(5000, now(), 0), ScanTick::Idle);
        assert!(session.files().is_empty());
        assert!(!session.cancel_scan());
    }

    #[test]
    fn test_custom_timing() {
        let mut session = ScanSession::new(ScanTiming {
            duration_ms: 100,
            tick_ms: 50,
        });
        session.start_scan().unwrap();
        assert_eq!(session.advance(50, now(), 0), ScanTick::Progress(50));
        assert!(matches!(session.advance(50, now(), 0), ScanTick::Completed(_)));
    }

    // =============================================
    // スキャン済みファイル
    // =============================================

    #[test]
    fn test_add_scanned_file_prepends() {
        let mut session = ScanSession::default();
        session.add_scanned_file(NewScannedFile::pending("a.jpg", now(), ShelfLocation::default()));
        session.add_scanned_file(NewScannedFile::pending("b.jpg", now(), ShelfLocation::default()));
        assert_eq!(session.files()[0].file_name, "b.jpg");
        assert_eq!(session.files()[1].file_name, "a.jpg");
    }

    #[test]
    fn test_ids_are_unique_for_same_timestamp() {
        let mut session = ScanSession::default();
        let a = session
            .add_scanned_file(NewScannedFile::pending("a.jpg", now(), ShelfLocation::default()))
            .id
            .clone();
        let b = session
            .add_scanned_file(NewScannedFile::pending("b.jpg", now(), ShelfLocation::default()))
            .id
            .clone();
        assert_ne!(a, b);
    }

    #[test]
    fn test_added_file_shelf_code() {
        let mut session = ScanSession::default();
        let location = ShelfLocation::new(4, 3, 2, 1).unwrap();
        let record = session.add_scanned_file(NewScannedFile::pending("a.jpg", now(), location));
        assert_eq!(record.shelf_code, "R4-S3-B2-F1");
    }

    #[test]
    fn test_selected_file() {
        let mut session = hydrated();
        session.set_selected_file(Some("old")).unwrap();
        assert_eq!(session.selected_file().map(|f| f.id.as_str()), Some("old"));

        assert!(matches!(
            session.set_selected_file(Some("missing")),
            Err(Error::UnknownFile(_))
        ));
        assert_eq!(session.selected_file().map(|f| f.id.as_str()), Some("old"));

        session.set_selected_file(None).unwrap();
        assert!(session.selected_file().is_none());
    }

    // =============================================
    // プレビュー選択
    // =============================================

    #[test]
    fn test_default_phase_is_idle() {
        assert_eq!(ScanPhase::default(), ScanPhase::Idle);
        assert_eq!(ScanSession::default().phase(), ScanPhase::Idle);
    }

    #[test]
    fn test_preview_selection_follows_selected_file() {
        let mut session = hydrated();
        assert_eq!(session.preview_selection(5), None);

        session.set_selected_file(Some("old")).unwrap();
        assert_eq!(session.preview_selection(5), Some(("old".to_string(), 1)));
    }

    #[test]
    fn test_preview_selection_stable_during_scan_and_edits() {
        let mut session = hydrated();
        session.set_selected_file(Some("old")).unwrap();
        let before = session.preview_selection(5);

        session.set_rack(4);
        session.increment(Axis::Folder);
        session.start_scan().unwrap();
        session.advance(200, now(), 0);
        session.advance(200, now(), 0);
        assert_eq!(session.preview_selection(5), before);

        // 完了して新しい記録が先頭に入っても選択は変わらない
        let tick_count = session.timing().duration_ms / session.timing().tick_ms;
        for _ in 0..tick_count {
            session.advance(session.timing().tick_ms, now(), 3);
        }
        assert!(!session.is_scanning());
        assert_eq!(session.files().len(), 2);
        assert_eq!(session.preview_selection(5), before);
    }

    #[test]
    fn test_preview_selection_ignores_unknown_file_names() {
        let mut session = ScanSession::default();
        session.add_scanned_file(NewScannedFile::pending("scan.tiff", now(), ShelfLocation::default()));
        let id = session.files()[0].id.clone();
        session.set_selected_file(Some(&id)).unwrap();
        assert_eq!(session.preview_selection(5), None);
    }
}
