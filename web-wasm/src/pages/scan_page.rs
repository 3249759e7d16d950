//! スキャン画面

use archive_nexus_common::AppConfig;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::mock_data::fetch_mock_data;
use crate::components::{
    maintenance_menu::MaintenanceMenu, scan_preview::ScanPreview,
    scanned_files_list::ScannedFilesList, scanner_controls::ScannerControls,
    shelving_metadata::ShelvingMetadata,
};
use crate::session::SessionHandle;

#[component]
pub fn ScanPage() -> impl IntoView {
    let config = expect_context::<AppConfig>();
    let session = SessionHandle::new(&config);
    provide_context(session);

    let url = config.mock_data_url();
    spawn_local(async move {
        match fetch_mock_data(&url).await {
            Ok(data) => session.hydrate(data),
            // スキャナ一覧は空のまま
            Err(e) => tracing::error!(error = %e, url = %url, "failed to load mock data"),
        }
    });

    on_cleanup(move || session.teardown());

    view! {
        <div class="scan-page">
            <div class="page-title">
                <h2>"Document Scanning (مسح المستندات)"</h2>
                <MaintenanceMenu />
            </div>
            <div class="scan-layout">
                <aside class="card">
                    <ScannerControls />
                    <ShelvingMetadata />
                </aside>
                <section class="card">
                    <ScanPreview />
                </section>
            </div>
            <section class="card">
                <h3>"Scanned Files (الملفات الممسوحة)"</h3>
                <ScannedFilesList />
            </section>
        </div>
    }
}
