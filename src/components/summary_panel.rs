//! Summary Panel Component
//!
//! Estimated total calories plus the uploaded photo preview.

use leptos::prelude::*;

use crate::store::use_session_store;

#[component]
pub fn SummaryPanel() -> impl IntoView {
    let store = use_session_store();

    view! {
        <div class="summary-panel">
            <div class="summary-heading">
                <p class="summary-label">"推定総カロリー"</p>
                <span class="summary-hint">"調整後は即時反映"</span>
            </div>
            <p class="total-kcal">{move || format!("{} kcal", store.total_calories())}</p>
            <p class="summary-note">"AI 推定値。重さ・カロリーを手動調整できます"</p>
            {move || {
                store
                    .image()
                    .map(|src| view! { <img class="preview" src=src alt="Uploaded meal" /> })
            }}
        </div>
    }
}
