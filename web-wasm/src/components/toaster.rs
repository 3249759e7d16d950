//! トースト表示

use leptos::prelude::*;

use crate::toast::Toasts;

#[component]
pub fn Toaster() -> impl IntoView {
    let toasts = expect_context::<Toasts>();

    view! {
        <div class="toaster" role="status" aria-live="polite">
            <For
                each=move || toasts.items.get()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    let n = toast.notification;
                    let class = format!("toast toast-{}", n.variant.as_str());
                    view! {
                        <div class=class>
                            <div class="toast-body">
                                <strong class="toast-title">{n.title}</strong>
                                <p class="toast-description">{n.description}</p>
                            </div>
                            <button
                                class="toast-close"
                                aria-label="Close"
                                on:click=move |_| toasts.dismiss(id)
                            >
                                "×"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
