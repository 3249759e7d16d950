//! 請求書入力フォーム
//!
//! 入力のたびに該当項目を検証し、項目下にメッセージを表示する。

use archive_nexus_common::{Field, InvoiceEntry, SaveAction};
use leptos::prelude::*;

#[component]
pub fn DataEntryForm<FS>(entry: RwSignal<InvoiceEntry>, on_save: FS) -> impl IntoView
where
    FS: Fn(SaveAction) + 'static + Clone,
{
    view! {
        <form class="data-entry-form" on:submit=|ev| ev.prevent_default()>
            <div class="form-group">
                <label for="date">{Field::Date.label().to_string()}</label>
                <input
                    type="date"
                    id="date"
                    name=Field::Date.name()
                    prop:value=move || entry.with(|e| e.form().value(Field::Date))
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        entry.update(|e| e.set_value(Field::Date, &value));
                    }
                />
                <FieldError entry=entry field=Field::Date />
            </div>

            <TextField entry=entry field=Field::InvoiceNumber />
            <VendorField entry=entry />
            <TextField entry=entry field=Field::ItemNumber />
            <TextField entry=entry field=Field::Description multiline=true />
            <TextField entry=entry field=Field::Price placeholder="0.00" />

            <div class="form-actions">
                <button
                    type="button"
                    class="btn btn-primary"
                    on:click={
                        let on_save = on_save.clone();
                        move |_| on_save(SaveAction::Save)
                    }
                >
                    "Save (حفظ)"
                </button>
                <button
                    type="button"
                    class="btn btn-secondary"
                    on:click={
                        let on_save = on_save.clone();
                        move |_| on_save(SaveAction::SaveAndNext)
                    }
                >
                    "Next (التالي)"
                </button>
            </div>
        </form>
    }
}

#[component]
fn FieldError(entry: RwSignal<InvoiceEntry>, field: Field) -> impl IntoView {
    move || {
        entry
            .with(|e| e.errors().message(field))
            .map(|message| view! { <p class="field-error">{message}</p> })
    }
}

#[component]
fn TextField(
    entry: RwSignal<InvoiceEntry>,
    field: Field,
    #[prop(optional)] multiline: bool,
    #[prop(optional)] placeholder: &'static str,
) -> impl IntoView {
    let value = move || entry.with(|e| e.form().value(field));
    let on_input = move |ev| {
        let value = event_target_value(&ev);
        entry.update(|e| e.set_value(field, &value));
    };

    let input = if multiline {
        view! {
            <textarea
                id=field.name()
                name=field.name()
                rows="3"
                prop:value=value
                on:input=on_input
            />
        }
        .into_any()
    } else {
        view! {
            <input
                type="text"
                id=field.name()
                name=field.name()
                placeholder=placeholder
                prop:value=value
                on:input=on_input
            />
        }
        .into_any()
    };

    view! {
        <div class="form-group">
            <label for=field.name()>{field.label().to_string()}</label>
            {input}
            <FieldError entry=entry field=field />
        </div>
    }
}

#[component]
fn VendorField(entry: RwSignal<InvoiceEntry>) -> impl IntoView {
    let field = Field::Vendor;
    let candidates = move || entry.with(|e| e.vendors().visible_candidates().to_vec());

    view! {
        <div class="form-group autocomplete">
            <label for=field.name()>{field.label().to_string()}</label>
            <input
                type="text"
                id=field.name()
                name=field.name()
                autocomplete="off"
                prop:value=move || entry.with(|e| e.form().value(field))
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    entry.update(|e| e.set_value(field, &value));
                }
                on:focus=move |_| entry.update(|e| e.vendors_mut().show())
                on:blur=move |_| entry.update(|e| e.vendors_mut().hide())
            />
            <Show when=move || !candidates().is_empty()>
                <ul class="suggestions">
                    <For
                        each=candidates
                        key=|vendor| vendor.clone()
                        children=move |vendor| {
                            let label = vendor.clone();
                            view! {
                                // blur より先に発火させるため mousedown で選択
                                <li on:mousedown=move |_| entry.update(|e| e.select_vendor(&vendor))>
                                    {label}
                                </li>
                            }
                        }
                    />
                </ul>
            </Show>
            <FieldError entry=entry field=field />
        </div>
    }
}
