//! スキャン疑似実行テスト
//!
//! 短いタイミングで状態機械を実際のタイマーで進める

use archive_nexus::simulate::{prepare_session, run, SimulateOptions};
use archive_nexus_common::{MockData, ScanTiming};

const FAST: ScanTiming = ScanTiming {
    duration_ms: 20,
    tick_ms: 5,
};

fn mock() -> MockData {
    MockData::from_json(
        r#"{
            "scanners": ["Fujitsu fi-7160", "Epson DS-530"],
            "scannedFiles": [
                {
                    "id": "1001",
                    "fileName": "sample_invoice_01.jpg",
                    "timestamp": "2025-05-12T09:15:00Z",
                    "rack": 1, "shelf": 2, "box": 3, "folder": 1
                }
            ]
        }"#,
    )
    .unwrap()
}

fn options(count: usize) -> SimulateOptions {
    SimulateOptions {
        count,
        ..Default::default()
    }
}

/// 1回のスキャンで記録が1件、先頭に追加される
#[tokio::test]
async fn test_single_scan_creates_record() {
    let data = mock();
    let opts = SimulateOptions {
        rack: Some(4),
        folder: Some(7),
        ..options(1)
    };
    let mut session = prepare_session(FAST, Some(&data), &opts).unwrap();
    assert_eq!(session.selected_scanner(), Some("Fujitsu fi-7160"));

    let created = run(&mut session, &opts).await.unwrap();

    assert_eq!(created.len(), 1);
    assert_eq!(created[0].shelf_code, "R4-S1-B1-F7");
    assert_eq!(created[0].status, "Pending Review");
    assert!(created[0].file_name.starts_with("sample_invoice_0"));
    assert_eq!(session.files().len(), 2);
    assert_eq!(session.files()[0].id, created[0].id);
    assert!(!session.is_scanning());
}

/// 連続スキャンは新しい順に並ぶ
#[tokio::test]
async fn test_multiple_scans_newest_first() {
    let opts = options(3);
    let mut session = prepare_session(FAST, None, &opts).unwrap();

    let created = run(&mut session, &opts).await.unwrap();

    assert_eq!(created.len(), 3);
    let ids: Vec<_> = session.files().iter().map(|f| f.id.clone()).collect();
    assert_eq!(ids[0], created[2].id);
    assert_eq!(ids[2], created[0].id);
    // IDは一意
    assert_ne!(ids[0], ids[1]);
    assert_ne!(ids[1], ids[2]);
}

/// スキャナ指定
#[test]
fn test_prepare_with_scanner() {
    let data = mock();
    let opts = SimulateOptions {
        scanner: Some("Epson DS-530".into()),
        ..options(1)
    };
    let session = prepare_session(FAST, Some(&data), &opts).unwrap();
    assert_eq!(session.selected_scanner(), Some("Epson DS-530"));
}

/// 一覧にないスキャナはエラー
#[test]
fn test_prepare_with_unknown_scanner() {
    let data = mock();
    let opts = SimulateOptions {
        scanner: Some("HP ScanJet".into()),
        ..options(1)
    };
    assert!(prepare_session(FAST, Some(&data), &opts).is_err());
}

/// 0以下の棚番は無視して1のまま
#[test]
fn test_prepare_ignores_invalid_coordinate() {
    let opts = SimulateOptions {
        shelf: Some(0),
        r#box: Some(-3),
        ..options(1)
    };
    let session = prepare_session(FAST, None, &opts).unwrap();
    assert_eq!(session.shelf_code(), "R1-S1-B1-F1");
}

/// 回数0なら何もしない
#[tokio::test]
async fn test_zero_count() {
    let opts = options(0);
    let mut session = prepare_session(FAST, None, &opts).unwrap();
    let created = run(&mut session, &opts).await.unwrap();
    assert!(created.is_empty());
    assert!(session.files().is_empty());
}
