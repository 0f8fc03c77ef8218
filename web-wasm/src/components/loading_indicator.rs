//! 解析中インジケーター

use leptos::prelude::*;

#[component]
pub fn LoadingIndicator() -> impl IntoView {
    view! {
        <div class="loading">
            <div class="spinner"></div>
            <p class="loading-text">"Analyzing images..."</p>
        </div>
    }
}
