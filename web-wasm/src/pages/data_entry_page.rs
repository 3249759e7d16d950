//! 請求書データ入力画面
//!
//! 左にサンプル書類のビューア、右に入力フォーム。
//! Ctrl+S で保存、Ctrl+Enter で保存して次の書類へ。

use archive_nexus_common::{AppConfig, Carousel, InvoiceEntry, SaveAction};
use leptos::ev;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::mock_data::fetch_mock_data;
use crate::components::{data_entry_form::DataEntryForm, document_viewer::DocumentViewer};
use crate::toast::Toasts;

#[component]
pub fn DataEntryPage() -> impl IntoView {
    let config = expect_context::<AppConfig>();
    let toasts = expect_context::<Toasts>();

    let images = config.sample_image_urls();
    let carousel = RwSignal::new(Carousel::new(images.len()));
    let entry = RwSignal::new(InvoiceEntry::default());

    let url = config.mock_data_url();
    spawn_local(async move {
        match fetch_mock_data(&url).await {
            Ok(data) => {
                tracing::debug!(count = data.vendors.len(), "vendor list loaded");
                entry.try_update(|e| e.set_vendor_pool(data.vendors));
            }
            Err(e) => tracing::error!(error = %e, url = %url, "failed to load vendor list"),
        }
    });

    let on_save = move |action: SaveAction| {
        let Some(outcome) = entry.try_update(|e| e.submit(action)) else {
            return;
        };
        toasts.push_all(outcome.notifications);
        if outcome.advance {
            carousel.update(|c| {
                c.next();
            });
        }
    };

    let handle = window_event_listener(ev::keydown, move |ev| {
        if let Some(action) = SaveAction::from_shortcut(ev.ctrl_key() || ev.meta_key(), &ev.key()) {
            ev.prevent_default();
            on_save(action);
        }
    });
    on_cleanup(move || handle.remove());

    let src = Signal::derive(move || {
        let index = carousel.with(|c| c.index());
        images.get(index).cloned().unwrap_or_default()
    });

    view! {
        <div class="data-entry-page">
            <div class="page-title">
                <h2>"Invoice Data Entry (إدخال بيانات الفاتورة)"</h2>
                <span class="text-muted">
                    {move || carousel.with(|c| format!("Document {} / {}", c.index() + 1, c.len()))}
                </span>
            </div>
            <div class="entry-layout">
                <section class="card">
                    <DocumentViewer
                        src=src
                        placeholder=config.placeholder_image.clone()
                        on_previous=move |_| carousel.update(|c| {
                            c.previous();
                        })
                        on_next=move |_| carousel.update(|c| {
                            c.next();
                        })
                    />
                </section>
                <section class="card">
                    <DataEntryForm entry=entry on_save=on_save />
                    <p class="shortcut-help text-muted">
                        "Ctrl+S: Save (حفظ) · Ctrl+Enter: Save & Next (حفظ والتالي)"
                    </p>
                </section>
            </div>
        </div>
    }
}
