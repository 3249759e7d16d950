//! プログレスバーコンポーネント

use leptos::prelude::*;

#[component]
pub fn ProgressBar(progress: Signal<u8>) -> impl IntoView {
    view! {
        <div class="progress-container">
            <div class="progress-bar">
                <div
                    class="progress-fill"
                    style=move || format!("width: {}%", progress.get())
                />
            </div>
            <p class="progress-text">
                {move || format!("Scanning... {}% (جاري المسح...)", progress.get())}
            </p>
        </div>
    }
}
