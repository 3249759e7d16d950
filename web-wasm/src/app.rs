//! メインアプリケーションコンポーネント

use archive_nexus_common::{AppConfig, Route};
use leptos::prelude::*;
use wasm_bindgen::JsValue;

use crate::components::{header::Header, toaster::Toaster};
use crate::pages::{data_entry_page::DataEntryPage, not_found::NotFound, scan_page::ScanPage};
use crate::toast::Toasts;

/// 現在のパス名から画面を決定し、`/` はURLを `/scan` に置き換える
fn current_route(config: &AppConfig) -> Route {
    let Some(window) = web_sys::window() else {
        return Route::Scan;
    };
    let pathname = window.location().pathname().unwrap_or_default();
    let (route, redirect) = Route::resolve(&pathname, &config.base_path);

    if redirect {
        let href = route.href(&config.base_path);
        let replaced = window
            .history()
            .and_then(|h| h.replace_state_with_url(&JsValue::NULL, "", Some(&href)));
        if let Err(e) = replaced {
            tracing::warn!(error = ?e, "failed to rewrite url");
        }
    }
    tracing::debug!(path = %pathname, ?route, "route resolved");
    route
}

#[component]
pub fn App() -> impl IntoView {
    let config = AppConfig::default();
    let route = current_route(&config);
    let base_path = config.base_path.clone();

    provide_context(config);
    provide_context(Toasts::new());

    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
        document.set_title(&format!("{} | Archive Nexus", route.title()));
    }

    let page = match route {
        Route::Scan => view! { <ScanPage /> }.into_any(),
        Route::DataEntry => view! { <DataEntryPage /> }.into_any(),
        Route::NotFound => view! { <NotFound /> }.into_any(),
    };

    view! {
        <div class="container">
            <Header route=route base_path=base_path />
            <main>{page}</main>
            <Toaster />
        </div>
    }
}
