//! ヘッダー・ナビゲーション

use archive_nexus_common::Route;
use leptos::prelude::*;

#[component]
pub fn Header(route: Route, base_path: String) -> impl IntoView {
    let link = move |target: Route, label: &'static str| {
        let class = if route == target { "nav-link active" } else { "nav-link" };
        view! { <a class=class href=target.href(&base_path)>{label}</a> }
    };

    view! {
        <header class="header">
            <h1>"Archive Nexus (أرشيف نكسس)"</h1>
            <nav class="nav">
                {link(Route::Scan, "Scan (المسح)")}
                {link(Route::DataEntry, "Data Entry (إدخال البيانات)")}
            </nav>
        </header>
    }
}
