//! 棚番入力と棚コード表示

use archive_nexus_common::Axis;
use leptos::prelude::*;

use crate::session::SessionHandle;

#[component]
pub fn ShelvingMetadata() -> impl IntoView {
    let session = expect_context::<SessionHandle>();
    let state = session.state;

    view! {
        <div class="shelving-grid">
            {Axis::ALL.into_iter().map(|axis| view! { <NumericInput axis=axis /> }).collect_view()}

            <div class="shelf-code-row">
                <span class="shelf-code-label">"Shelf Code (رمز التخزين):"</span>
                <span class="shelf-code">{move || state.with(|s| s.shelf_code())}</span>
            </div>
        </div>
    }
}

#[component]
fn NumericInput(axis: Axis) -> impl IntoView {
    let session = expect_context::<SessionHandle>();
    let state = session.state;
    let value = move || state.with(|s| s.location().get(axis).to_string());

    view! {
        <div class="form-group">
            <label>{format!("{} # ({})", axis.label(), axis.arabic_label())}</label>
            <div class="stepper">
                <button
                    type="button"
                    class="btn btn-small btn-secondary"
                    on:click=move |_| {
                        state.update(|s| {
                            s.decrement(axis);
                        });
                    }
                >
                    "-"
                </button>
                <input
                    type="number"
                    min="1"
                    prop:value=value
                    on:input=move |ev| {
                        let input = event_target_value(&ev);
                        state.update(|s| {
                            // 0以下・数値以外は以前の値を保持
                            s.set_coordinate_input(axis, &input);
                        });
                    }
                />
                <button
                    type="button"
                    class="btn btn-small btn-secondary"
                    on:click=move |_| {
                        state.update(|s| {
                            s.increment(axis);
                        });
                    }
                >
                    "+"
                </button>
            </div>
        </div>
    }
}
