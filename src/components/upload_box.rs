//! Upload Box Component
//!
//! File picker for the meal photo. The native input sits inside the label so
//! no click forwarding is needed, and its value is cleared after each pick so
//! the same file can be selected again.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Photo picker card, disabled while a detection run is in flight
#[component]
pub fn UploadBox(
    /// Callback with the chosen file
    #[prop(into)]
    on_file_select: Callback<web_sys::File>,
    /// True while detection is running
    loading: ReadSignal<bool>,
) -> impl IntoView {
    let on_change = move |ev: web_sys::Event| {
        let Some(target) = ev.target() else {
            return;
        };
        let Some(input) = target.dyn_ref::<web_sys::HtmlInputElement>() else {
            return;
        };
        if let Some(file) = input.files().and_then(|files| files.get(0)) {
            on_file_select.run(file);
        }
        input.set_value("");
    };

    view! {
        <div class="upload-box">
            <p class="upload-title">"食事の写真を選択"</p>
            <p class="upload-hint">"JPG / PNG 対応。ローカルでのみ処理されます。"</p>
            <label class=move || {
                if loading.get() { "upload-btn disabled" } else { "upload-btn" }
            }>
                {move || if loading.get() { "解析中..." } else { "画像をアップロード" }}
                <input
                    type="file"
                    accept="image/*"
                    class="upload-input"
                    disabled=move || loading.get()
                    on:change=on_change
                />
            </label>
        </div>
    }
}
