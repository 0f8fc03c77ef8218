//! メインアプリケーションコンポーネント
//!
//! セッション状態（`SessionState`）はここで1つだけ持ち、
//! 子コンポーネントには派生シグナルとコールバックで渡す。

use crate::api;
use crate::components::{
    about_panel::AboutPanel,
    header::Header,
    image_viewer::ImageViewer,
    loading_indicator::LoadingIndicator,
    result_grid::ResultGrid,
    upload_area::UploadArea,
};
use leptos::prelude::*;
use leptos::task::spawn_local;
use objdetect_common::{ClientConfig, SessionState, Settlement, UPLOAD_FAILED_MESSAGE};
use web_sys::File;

/// ビルド時の `OBJDETECT_API_BASE_URL` があればホストを差し替える
fn client_config() -> ClientConfig {
    ClientConfig::default().with_api_base_url(option_env!("OBJDETECT_API_BASE_URL"))
}

fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

fn report_settlement(settlement: Settlement) {
    match settlement {
        Settlement::Applied { count } => {
            gloo::console::log!(format!("analysis finished: {} result(s)", count));
        }
        Settlement::Failed(error) => {
            gloo::console::error!(format!("Error uploading images ({}): {}", error.kind(), error));
            alert(UPLOAD_FAILED_MESSAGE);
        }
        Settlement::Stale { error: None } => {
            gloo::console::warn!("discarded response of a superseded upload");
        }
        Settlement::Stale { error: Some(error) } => {
            gloo::console::warn!(format!(
                "superseded upload failed ({}): {}",
                error.kind(),
                error
            ));
        }
    }
}

#[component]
pub fn App() -> impl IntoView {
    let config = client_config();
    let session = RwSignal::new(SessionState::new());

    let results = Memo::new(move |_| session.with(|s| s.results().to_vec()));
    let is_loading = Signal::derive(move || session.with(SessionState::is_loading));
    let selected_image =
        Signal::derive(move || session.with(|s| s.selected_image().map(str::to_string)));

    // ファイル受付 → アップロード
    let on_files = move |files: Vec<File>| {
        let Some(ticket) = session.try_update(SessionState::begin_upload) else {
            return;
        };
        let config = config.clone();
        spawn_local(async move {
            let outcome = api::submit(&config, &files).await;
            if let Some(settlement) = session.try_update(|s| s.settle(ticket, outcome)) {
                report_settlement(settlement);
            }
        });
    };

    // サムネイルクリック → 拡大表示
    let on_select = move |image_ref: String| {
        session.update(|s| {
            s.open_viewer(image_ref);
        });
    };

    let on_close = move |_: ()| {
        session.update(|s| {
            s.close_viewer();
        });
    };

    view! {
        <div class="container">
            <Header />
            <AboutPanel />

            <UploadArea on_files=on_files />

            <Show when=move || is_loading.get()>
                <LoadingIndicator />
            </Show>

            <ResultGrid results=results on_select=on_select />

            <ImageViewer selected_image=selected_image on_close=on_close />
        </div>
    }
}
