//! スキャンプレビュー（メイン画像・サムネイル・ライトボックス）

use archive_nexus_common::{AppConfig, Carousel};
use leptos::prelude::*;

use crate::components::fallback_image::FallbackImage;
use crate::session::SessionHandle;

#[component]
pub fn ScanPreview() -> impl IntoView {
    let session = expect_context::<SessionHandle>();
    let config = expect_context::<AppConfig>();
    let state = session.state;

    let images = config.sample_image_urls();
    let placeholder = config.placeholder_image.clone();
    let carousel = RwSignal::new(Carousel::new(images.len()));
    let (show_lightbox, set_show_lightbox) = signal(false);

    // 一覧で選択されたファイルに合わせてプレビューを移動
    let pool_len = images.len();
    let selection = Memo::new(move |_| state.with(|s| s.preview_selection(pool_len)));
    Effect::new(move |_| {
        if let Some((_, index)) = selection.get() {
            carousel.update(|c| {
                c.select(index);
            });
        }
    });

    let active_src = {
        let images = images.clone();
        Signal::derive(move || {
            let index = carousel.with(|c| c.index());
            images.get(index).cloned().unwrap_or_default()
        })
    };

    let thumbnails = images
        .iter()
        .enumerate()
        .map(|(index, url)| {
            let is_active = move || carousel.with(|c| c.index() == index);
            view! {
                <div
                    class="thumbnail"
                    class:active=is_active
                    on:click=move |_| {
                        carousel.update(|c| {
                            c.select(index);
                        });
                    }
                    on:dblclick=move |_| {
                        carousel.update(|c| {
                            c.select(index);
                        });
                        set_show_lightbox.set(true);
                    }
                >
                    <FallbackImage
                        src=Signal::stored(url.clone())
                        fallback="https://via.placeholder.com/160x120?text=Thumbnail".to_string()
                        alt=format!("Sample Invoice {}", index + 1)
                    />
                </div>
            }
        })
        .collect_view();

    view! {
        <div class="scan-preview">
            <div class="preview-main">
                <FallbackImage
                    src=active_src
                    fallback=placeholder.clone()
                    alt="Invoice preview".to_string()
                    class="preview-image"
                />
            </div>

            <div class="thumbnail-strip">{thumbnails}</div>

            <Show when=move || show_lightbox.get()>
                <div class="lightbox" on:click=move |_| set_show_lightbox.set(false)>
                    <div class="lightbox-content" on:click=|ev| ev.stop_propagation()>
                        <FallbackImage
                            src=active_src
                            fallback="https://via.placeholder.com/1200x800?text=Unable+to+load+image".to_string()
                            alt="Invoice preview".to_string()
                            class="lightbox-image"
                        />
                        <div class="lightbox-nav">
                            <button
                                class="btn btn-small btn-secondary"
                                on:click=move |_| {
                                    carousel.update(|c| {
                                        c.previous();
                                    });
                                }
                            >
                                "‹"
                            </button>
                            <button
                                class="btn btn-small btn-secondary"
                                on:click=move |_| {
                                    carousel.update(|c| {
                                        c.next();
                                    });
                                }
                            >
                                "›"
                            </button>
                            <button
                                class="btn btn-small btn-tertiary"
                                on:click=move |_| set_show_lightbox.set(false)
                            >
                                "Close (إغلاق)"
                            </button>
                        </div>
                    </div>
                </div>
            </Show>
        </div>
    }
}
