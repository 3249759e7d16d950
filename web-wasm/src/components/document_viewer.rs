//! 書類ビューア（拡大・回転・前後移動）

use archive_nexus_common::ViewTransform;
use leptos::prelude::*;

use crate::components::fallback_image::FallbackImage;

#[component]
pub fn DocumentViewer<FP, FN>(
    src: Signal<String>,
    placeholder: String,
    on_previous: FP,
    on_next: FN,
) -> impl IntoView
where
    FP: Fn(()) + 'static + Clone,
    FN: Fn(()) + 'static + Clone,
{
    // 表示専用の状態
    let view_state = RwSignal::new(ViewTransform::default());
    let transform = Signal::derive(move || {
        format!("transform: {}; max-height: 70vh;", view_state.with(|v| v.css()))
    });

    view! {
        <div class="document-viewer">
            <div class="viewer-toolbar">
                <div class="toolbar-group">
                    <button
                        class="btn btn-small btn-secondary"
                        title="Zoom out"
                        on:click=move |_| {
                            view_state.update(|v| {
                                v.zoom_out();
                            });
                        }
                    >
                        "−"
                    </button>
                    <button
                        class="btn btn-small btn-secondary"
                        title="Zoom in"
                        on:click=move |_| {
                            view_state.update(|v| {
                                v.zoom_in();
                            });
                        }
                    >
                        "+"
                    </button>
                    <button
                        class="btn btn-small btn-secondary"
                        title="Rotate"
                        on:click=move |_| {
                            view_state.update(|v| {
                                v.rotate();
                            });
                        }
                    >
                        "⟳"
                    </button>
                    <span class="text-muted">{move || view_state.with(|v| v.zoom_label())}</span>
                </div>
                <div class="toolbar-group">
                    <button
                        class="btn btn-small btn-secondary"
                        title="Previous"
                        on:click={
                            let on_previous = on_previous.clone();
                            move |_| on_previous(())
                        }
                    >
                        "‹"
                    </button>
                    <button
                        class="btn btn-small btn-secondary"
                        title="Next"
                        on:click={
                            let on_next = on_next.clone();
                            move |_| on_next(())
                        }
                    >
                        "›"
                    </button>
                </div>
            </div>

            <div class="viewer-canvas">
                <FallbackImage
                    src=src
                    fallback=placeholder
                    alt="Document preview".to_string()
                    class="viewer-image"
                    style=transform
                />
            </div>
        </div>
    }
}
