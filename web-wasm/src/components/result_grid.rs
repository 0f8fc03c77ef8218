//! 解析結果グリッドコンポーネント

use leptos::prelude::*;
use objdetect_common::{result_cards, AnalysisResult, ResultCard};

#[component]
pub fn ResultGrid<FS>(
    #[prop(into)] results: Signal<Vec<AnalysisResult>>,
    on_select: FS,
) -> impl IntoView
where
    FS: Fn(String) + 'static + Clone + Send + Sync,
{
    view! {
        <div class="result-grid">
            // 内容ごとキーにして、同じ位置の結果が差し替わった場合も描き直す
            <For
                each=move || results.with(|r| result_cards(r))
                key=|card| card.clone()
                children=move |card| {
                    let on_select = on_select.clone();
                    view! { <ResultCardItem card=card on_select=on_select /> }
                }
            />
        </div>
    }
}

#[component]
fn ResultCardItem<FS>(card: ResultCard, on_select: FS) -> impl IntoView
where
    FS: Fn(String) + 'static + Clone + Send + Sync,
{
    let thumbnail = card.thumbnail.clone();

    view! {
        <div class="result-card">
            <img
                class="result-thumbnail"
                src=card.thumbnail.clone()
                alt=card.alt_text().to_string()
                on:click=move |_| on_select(thumbnail.clone())
            />
            <div class="result-body">
                <h3>{card.object_name.clone()}</h3>
                <div class="result-status">
                    <span class=card.badge_class()>{card.badge_label()}</span>
                </div>
                <p class="result-explanation">{card.explanation.clone()}</p>
            </div>
        </div>
    }
}
