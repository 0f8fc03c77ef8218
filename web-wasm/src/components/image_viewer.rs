//! 画像拡大表示オーバーレイ
//!
//! 選択中の画像がある間だけ全画面に表示する。
//! オーバーレイ（画像を含む）のどこをクリックしても閉じる。

use leptos::prelude::*;

#[component]
pub fn ImageViewer<FC>(selected_image: Signal<Option<String>>, on_close: FC) -> impl IntoView
where
    FC: Fn(()) + 'static + Clone + Send + Sync,
{
    view! {
        <Show when=move || selected_image.with(Option::is_some)>
            <div
                class="viewer-overlay"
                on:click={
                    let on_close = on_close.clone();
                    move |_| on_close(())
                }
            >
                <div class="viewer-frame">
                    <img
                        class="viewer-image"
                        src=move || selected_image.get().unwrap_or_default()
                        alt="Full size"
                    />
                </div>
            </div>
        </Show>
    }
}
