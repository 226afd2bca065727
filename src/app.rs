//! Calorie Vision App
//!
//! Main application component: restores the saved session, wires the store
//! and context, and lays out the page.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{AddCustomForm, DetectedItemList, SummaryPanel, UploadBox};
use crate::context::{AppContext, STATUS_IDLE, STATUS_RESTORED};
use crate::detect;
use crate::session::SessionState;
use crate::storage;
use crate::store::SessionStore;

#[component]
pub fn App() -> impl IntoView {
    // Restore the previous session before anything renders
    let saved = storage::load();
    let restored = saved.is_some();
    let initial = saved
        .map(|saved| SessionState {
            items: saved.items,
            image: saved.image,
        })
        .unwrap_or_default();

    let store = SessionStore::new(initial, storage::save);
    provide_context(store);

    let (detecting, set_detecting) = signal(false);
    let (status, set_status) = signal(String::from(if restored {
        STATUS_RESTORED
    } else {
        STATUS_IDLE
    }));
    let ctx = AppContext::new((detecting, set_detecting), (status, set_status));
    provide_context(ctx);

    let on_file_select = move |file: web_sys::File| {
        spawn_local(detect::run_detection(store, ctx, file));
    };

    view! {
        <main class="app-layout">
            <header class="hero">
                <div class="hero-copy">
                    <p class="eyebrow">"Calorie Vision"</p>
                    <h1>"食事写真を自動解析して総カロリーを算出"</h1>
                    <p class="lede">
                        "写真をアップロードするだけで、料理の構成要素を検出しカロリーを自動計算。"
                        "検出後は内容を微調整して、より正確な食事記録を残せます。"
                    </p>
                </div>
                <UploadBox on_file_select=on_file_select loading=detecting />
            </header>

            <section class="detection-column">
                <div class="status-row">
                    <span class="status">{move || ctx.status.get()}</span>
                    <Show when=move || store.has_items()>
                        <button class="clear-btn" on:click=move |_| store.clear_items()>
                            "クリア"
                        </button>
                    </Show>
                </div>
                <DetectedItemList />
                <Show when=move || !store.has_items()>
                    <div class="empty-placeholder">
                        "まだ検出された料理がありません。写真をアップロードすると自動で表示されます。"
                    </div>
                </Show>
            </section>

            <section class="side-column">
                <SummaryPanel />
                <AddCustomForm />
            </section>
        </main>
    }
}
