//! スキャナ選択・スキャン開始

use leptos::prelude::*;

use crate::components::progress_bar::ProgressBar;
use crate::session::SessionHandle;

#[component]
pub fn ScannerControls() -> impl IntoView {
    let session = expect_context::<SessionHandle>();
    let state = session.state;

    let is_scanning = Memo::new(move |_| state.with(|s| s.is_scanning()));
    let progress = Signal::derive(move || state.with(|s| s.progress()));

    view! {
        <div class="scanner-controls">
            <div class="form-group">
                <label for="scanner">"Scanner (المسح الضوئي)"</label>
                <select
                    id="scanner"
                    disabled=move || is_scanning.get()
                    on:change=move |ev| {
                        let name = event_target_value(&ev);
                        state.update(|s| {
                            // 一覧外の値は無視
                            let _ = s.set_selected_scanner(&name);
                        });
                    }
                >
                    <For
                        each=move || state.with(|s| s.scanners().to_vec())
                        key=|name| name.clone()
                        children=move |name| {
                            let selected = {
                                let name = name.clone();
                                move || state.with(|s| s.selected_scanner() == Some(name.as_str()))
                            };
                            view! {
                                <option value=name.clone() selected=selected>{name.clone()}</option>
                            }
                        }
                    />
                </select>
            </div>

            <button
                class="btn btn-primary btn-block"
                disabled=move || is_scanning.get()
                on:click=move |_| session.start_scan()
            >
                {move || {
                    if is_scanning.get() {
                        "Scanning... (جاري المسح...)"
                    } else {
                        "Start Scan (بدء المسح)"
                    }
                }}
            </button>

            <Show when=move || is_scanning.get()>
                <ProgressBar progress=progress />
            </Show>
        </div>
    }
}
