use archive_nexus_common::{AppConfig, Route};
use leptos::prelude::*;

#[component]
pub fn NotFound() -> impl IntoView {
    let config = expect_context::<AppConfig>();

    view! {
        <div class="not-found">
            <h2>"404"</h2>
            <p>"Page not found (الصفحة غير موجودة)"</p>
            <a class="btn btn-primary" href=Route::Scan.href(&config.base_path)>
                "Back to Scan (العودة إلى المسح)"
            </a>
        </div>
    }
}
