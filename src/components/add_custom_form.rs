//! Add Custom Item Form
//!
//! Manual entry for dishes the detection missed. Invalid input is rejected
//! silently; the fields clear only when the item was actually added.

use leptos::prelude::*;

use crate::store::use_session_store;

#[component]
pub fn AddCustomForm() -> impl IntoView {
    let store = use_session_store();

    let (name, set_name) = signal(String::new());
    let (calories, set_calories) = signal(String::new());
    let (weight, set_weight) = signal(String::new());

    let add_item = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if store.add_custom(&name.get(), &calories.get(), &weight.get()) {
            set_name.set(String::new());
            set_calories.set(String::new());
            set_weight.set(String::new());
        }
    };

    view! {
        <form class="add-custom-form" on:submit=add_item>
            <p class="form-title">"検出に足りない料理を追加"</p>
            <label class="field-label">
                "料理名"
                <input
                    type="text"
                    placeholder="例: コーンスープ"
                    prop:value=move || name.get()
                    on:input=move |ev| set_name.set(event_target_value(&ev))
                />
            </label>
            <label class="field-label">
                "カロリー (kcal)"
                <input
                    type="number"
                    min="0"
                    placeholder="150"
                    prop:value=move || calories.get()
                    on:input=move |ev| set_calories.set(event_target_value(&ev))
                />
            </label>
            <label class="field-label">
                "重さ (g) 任意"
                <input
                    type="number"
                    min="0"
                    placeholder="200"
                    prop:value=move || weight.get()
                    on:input=move |ev| set_weight.set(event_target_value(&ev))
                />
            </label>
            <button type="submit" class="add-btn">"料理を追加"</button>
        </form>
    }
}
