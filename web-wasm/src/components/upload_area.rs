//! アップロードエリアコンポーネント
//!
//! ドラッグ&ドロップまたはクリックでファイルを受け付け、
//! 受付ルールを満たしたファイルが1枚以上あれば `on_files` を即座に呼ぶ。

use leptos::html::Input;
use leptos::prelude::*;
use objdetect_common::{partition_accepted, ACCEPT_ATTRIBUTE};
use web_sys::{DragEvent, File, FileList, HtmlInputElement};

fn drop_hint(is_drag_active: bool) -> &'static str {
    if is_drag_active {
        "Drop images here..."
    } else {
        "Drop images here or click to upload"
    }
}

/// ドラッグ中に受け取るイベント
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DragStep {
    Enter,
    Leave,
    Drop,
}

/// 子要素をまたぐと enter/leave が対で届くため、深さで数える
fn step_drag_depth(depth: u32, step: DragStep) -> u32 {
    match step {
        DragStep::Enter => depth + 1,
        DragStep::Leave => depth.saturating_sub(1),
        DragStep::Drop => 0,
    }
}

fn collect_files(list: &FileList) -> Vec<File> {
    (0..list.length()).filter_map(|i| list.get(i)).collect()
}

fn accept_files<F>(list: &FileList, on_files: &F)
where
    F: Fn(Vec<File>),
{
    let intake = partition_accepted(collect_files(list), |file| (file.name(), file.type_()));

    for file in &intake.rejected {
        gloo::console::debug!(format!("skipped unsupported file: {}", file.name()));
    }

    if !intake.accepted.is_empty() {
        on_files(intake.accepted);
    }
}

#[component]
pub fn UploadArea<F>(on_files: F) -> impl IntoView
where
    F: Fn(Vec<File>) + 'static + Clone,
{
    let (drag_depth, set_drag_depth) = signal(0u32);
    let is_drag_active = Signal::derive(move || drag_depth.get() > 0);
    let input_ref: NodeRef<Input> = NodeRef::new();

    let on_drop = {
        let on_files = on_files.clone();
        move |ev: DragEvent| {
            ev.prevent_default();
            set_drag_depth.update(|d| *d = step_drag_depth(*d, DragStep::Drop));

            if let Some(files) = ev.data_transfer().and_then(|dt| dt.files()) {
                accept_files(&files, &on_files);
            }
        }
    };

    let on_dragenter = move |ev: DragEvent| {
        ev.prevent_default();
        set_drag_depth.update(|d| *d = step_drag_depth(*d, DragStep::Enter));
    };

    // ドロップを許可する
    let on_dragover = move |ev: DragEvent| {
        ev.prevent_default();
    };

    let on_dragleave = move |_: DragEvent| {
        set_drag_depth.update(|d| *d = step_drag_depth(*d, DragStep::Leave));
    };

    // ファイル選択ダイアログを開く
    let on_click = move |_| {
        if let Some(input) = input_ref.get() {
            input.click();
        }
    };

    let on_change = move |ev: web_sys::Event| {
        let input: HtmlInputElement = event_target(&ev);
        if let Some(files) = input.files() {
            accept_files(&files, &on_files);
        }
        // 同じファイルを続けて選べるようにする
        input.set_value("");
    };

    view! {
        <div
            class="upload-area"
            class:drag-active=move || is_drag_active.get()
            on:drop=on_drop
            on:dragenter=on_dragenter
            on:dragover=on_dragover
            on:dragleave=on_dragleave
            on:click=on_click
        >
            <input
                type="file"
                class="file-input"
                multiple=true
                accept=ACCEPT_ATTRIBUTE
                node_ref=input_ref
                on:click=|ev| ev.stop_propagation()
                on:change=on_change
            />
            <div class="upload-content">
                <svg width="24" height="24" viewBox="0 0 24 24" fill="none" stroke="currentColor" class="upload-icon">
                    <path d="M21 15v4a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2v-4" stroke-width="2" stroke-linecap="round" />
                    <polyline points="17 8 12 3 7 8" stroke-width="2" stroke-linecap="round" />
                    <line x1="12" y1="3" x2="12" y2="15" stroke-width="2" stroke-linecap="round" />
                </svg>
                <p>{move || drop_hint(is_drag_active.get())}</p>
                <p class="text-muted">"Supported formats: JPG, PNG"</p>
            </div>
        </div>
    }
}
