//! トースト通知のキュー

use archive_nexus_common::Notification;
use gloo::timers::callback::Timeout;
use leptos::prelude::*;

/// 自動で閉じるまでの時間（ミリ秒）
const TOAST_TIMEOUT_MS: u32 = 5000;

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub notification: Notification,
}

#[derive(Clone, Copy)]
pub struct Toasts {
    pub items: RwSignal<Vec<Toast>>,
    next_id: RwSignal<u64>,
}

impl Toasts {
    pub fn new() -> Self {
        Self {
            items: RwSignal::new(Vec::new()),
            next_id: RwSignal::new(0),
        }
    }

    pub fn push(self, notification: Notification) {
        let id = self.next_id.get_untracked();
        self.next_id.set(id + 1);
        self.items.update(|items| items.push(Toast { id, notification }));

        let items = self.items;
        Timeout::new(TOAST_TIMEOUT_MS, move || {
            items.try_update(|items| items.retain(|t| t.id != id));
        })
        .forget();
    }

    pub fn push_all(self, notifications: impl IntoIterator<Item = Notification>) {
        for n in notifications {
            self.push(n);
        }
    }

    pub fn dismiss(self, id: u64) {
        self.items.update(|items| items.retain(|t| t.id != id));
    }
}

impl Default for Toasts {
    fn default() -> Self {
        Self::new()
    }
}
