//! スキャンセッションのハンドル
//!
//! スキャン画面の表示開始時に生成してコンテキストで配り、
//! 画面破棄時に `teardown` でタイマーごと破棄する。

use archive_nexus_common::{AppConfig, MockData, ScanSession, ScanTick};
use gloo::timers::callback::{Interval, Timeout};
use leptos::prelude::*;

use crate::clock::{now_utc, random_roll};

#[derive(Clone, Copy)]
pub struct SessionHandle {
    pub state: RwSignal<ScanSession>,
    /// スキャン進行用の唯一のタイマー
    timer: StoredValue<Option<Interval>, LocalStorage>,
}

impl SessionHandle {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            state: RwSignal::new(ScanSession::new(config.scan)),
            timer: StoredValue::new_local(None),
        }
    }

    /// モックデータ取り込み
    pub fn hydrate(self, data: MockData) {
        let result = self.state.try_update(|s| s.hydrate(&data));
        match result {
            Some(Ok(rejected)) if rejected > 0 => {
                tracing::warn!(rejected, "some mock records were dropped")
            }
            Some(Err(e)) => tracing::warn!(error = %e, "hydrate skipped"),
            _ => {}
        }
    }

    /// スキャン開始。進行中なら何もしない
    pub fn start_scan(self) {
        let started = self
            .state
            .try_update(|s| s.start_scan())
            .is_some_and(|r| r.is_ok());
        if !started {
            return;
        }

        let tick_ms = self.state.with_untracked(|s| s.timing().tick_ms);
        let interval = Interval::new(tick_ms, move || {
            let tick = self
                .state
                .try_update(|s| s.advance(tick_ms, now_utc(), random_roll()));
            match tick {
                Some(ScanTick::Progress(_)) => {}
                Some(ScanTick::Completed(record)) => {
                    tracing::debug!(id = %record.id, "scan completed");
                    self.stop_timer_later();
                }
                Some(ScanTick::Idle) | None => self.stop_timer_later(),
            }
        });
        self.timer.set_value(Some(interval));
    }

    /// タイマー自身のコールバック内では破棄できないため、次のタスクで破棄する
    ///
    /// その間に次のスキャンが始まっていれば、新しいタイマーは残す。
    fn stop_timer_later(self) {
        Timeout::new(0, move || {
            let idle = self
                .state
                .try_with_untracked(|s| !s.is_scanning())
                .unwrap_or(true);
            if idle {
                self.timer.try_update_value(|t| *t = None);
            }
        })
        .forget();
    }

    /// 画面破棄時。保留中のスキャンは記録を作らずに破棄
    pub fn teardown(self) {
        self.timer.try_update_value(|t| *t = None);
        self.state.try_update(|s| s.cancel_scan());
    }
}
