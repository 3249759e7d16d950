//! スキャン済みファイル一覧

use archive_nexus_common::time::format_relative;
use leptos::prelude::*;

use crate::clock::now_utc;
use crate::session::SessionHandle;

#[component]
pub fn ScannedFilesList() -> impl IntoView {
    let session = expect_context::<SessionHandle>();
    let state = session.state;

    let is_empty = move || state.with(|s| s.files().is_empty());
    let selected_id = move || state.with(|s| s.selected_file().map(|f| f.id.clone()));

    view! {
        <Show
            when=move || !is_empty()
            fallback=|| view! {
                <p class="text-muted empty-list">"No scanned files yet (لا توجد ملفات ممسوحة بعد)"</p>
            }
        >
            <table class="files-table">
                <thead>
                    <tr>
                        <th>"File Name (اسم الملف)"</th>
                        <th>"Timestamp (التوقيت)"</th>
                        <th>"Shelf Code (رمز التخزين)"</th>
                        <th>"Status (الحالة)"</th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || state.with(|s| s.files().to_vec())
                        key=|file| file.id.clone()
                        children=move |file| {
                            let id = file.id.clone();
                            let is_selected = {
                                let id = id.clone();
                                move || selected_id().as_deref() == Some(id.as_str())
                            };
                            let when = format_relative(file.timestamp, now_utc());
                            let status_class = if file.is_pending_review() {
                                "status-badge pending"
                            } else {
                                "status-badge"
                            };
                            view! {
                                <tr
                                    class="file-row"
                                    class:selected=is_selected
                                    on:click=move |_| {
                                        state.update(|s| {
                                            let _ = s.set_selected_file(Some(&id));
                                        });
                                    }
                                >
                                    <td>{file.file_name.clone()}</td>
                                    <td class="text-muted" title=file.timestamp.to_rfc3339()>{when}</td>
                                    <td>{file.shelf_code.clone()}</td>
                                    <td><span class=status_class>{file.status_label()}</span></td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>
        </Show>
    }
}
