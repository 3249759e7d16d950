//! 読み込み失敗時に代替画像へ差し替える画像

use leptos::prelude::*;

#[component]
pub fn FallbackImage(
    src: Signal<String>,
    fallback: String,
    alt: String,
    #[prop(optional)] class: &'static str,
    #[prop(optional, into)] style: Option<Signal<String>>,
) -> impl IntoView {
    // 失敗したURLを記録（src が変われば元の画像を再度試す）
    let failed = RwSignal::new(None::<String>);

    let current = move || {
        let src = src.get();
        if failed.with(|f| f.as_deref() == Some(src.as_str())) {
            fallback.clone()
        } else {
            src
        }
    };

    view! {
        <img
            class=class
            src=current
            alt=alt
            style=move || style.map(|s| s.get()).unwrap_or_default()
            on:error=move |_| {
                let src = src.get_untracked();
                if failed.with_untracked(|f| f.as_deref() != Some(src.as_str())) {
                    tracing::debug!(src = %src, "image failed to load, using placeholder");
                    failed.set(Some(src));
                }
            }
        />
    }
}
