//! ツール説明パネル

use leptos::prelude::*;

const HOW_TO_USE: &[&str] = &[
    "Drag and drop images or click to select files",
    "Wait for the AI to analyze your images",
    "View results with detailed explanations for each object",
    "Click on any image to view it in full size",
];

#[component]
pub fn AboutPanel() -> impl IntoView {
    view! {
        <section class="about-panel">
            <h2>"About This Tool"</h2>
            <p class="text-muted">
                "This AI-powered tool helps you detect and analyze objects in images, \
                 specifically focusing on identifying potential defects or issues. \
                 Perfect for quality control and inspection processes."
            </p>
            <p class="text-muted"><strong>"How to use:"</strong></p>
            <ul class="how-to-use">
                {HOW_TO_USE.iter().map(|step| view! { <li>{*step}</li> }).collect_view()}
            </ul>
        </section>
    }
}
