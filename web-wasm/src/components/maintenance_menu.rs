//! スキャナ保守メニュー

use archive_nexus_common::MaintenanceAction;
use leptos::prelude::*;

use crate::toast::Toasts;

#[component]
pub fn MaintenanceMenu() -> impl IntoView {
    let toasts = expect_context::<Toasts>();
    let (open, set_open) = signal(false);

    view! {
        <div class="maintenance-menu">
            <button
                class="btn btn-outline"
                aria-haspopup="menu"
                aria-expanded=move || open.get().to_string()
                on:click=move |_| set_open.update(|o| *o = !*o)
            >
                "Maintenance (الصيانة)"
            </button>
            <Show when=move || open.get()>
                <ul class="menu" role="menu">
                    {MaintenanceAction::ALL
                        .into_iter()
                        .map(|action| {
                            view! {
                                <li role="menuitem">
                                    <button on:click=move |_| {
                                        set_open.set(false);
                                        toasts.push(action.notification());
                                    }>{action.label().to_string()}</button>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </Show>
        </div>
    }
}
