//! Detected Item List Component
//!
//! Editable rows for each detected or manually added item: weight and
//! calories inputs, confidence badge, per-row remove.

use leptos::prelude::*;

use crate::models::{FoodItem, ItemPatch};
use crate::store::{use_session_store, SessionStore};

#[component]
pub fn DetectedItemList() -> impl IntoView {
    let store = use_session_store();

    view! {
        <div class="item-list">
            <For
                each=move || store.items()
                key=|item| item.id.clone()
                children=move |item| {
                    let weight_id = item.id.clone();
                    let calories_id = item.id.clone();
                    let kcal_id = item.id.clone();
                    let remove_id = item.id.clone();

                    view! {
                        <div class="item-row">
                            <div class="item-heading">
                                <p class="item-name">{item.name.clone()}</p>
                                <span class="confidence-badge">
                                    {format!("信頼度 {:.0}%", item.confidence * 100.0)}
                                </span>
                            </div>
                            <div class="item-fields">
                                <label class="field-label">
                                    "重さ (g)"
                                    <input
                                        type="number"
                                        min="0"
                                        prop:value=field_value(store, item.id.clone(), |item| item.weight)
                                        on:input=move |ev| {
                                            let value = parse_field(&event_target_value(&ev));
                                            store.update_item(&weight_id, ItemPatch::weight(value));
                                        }
                                    />
                                </label>
                                <label class="field-label">
                                    "カロリー (kcal)"
                                    <input
                                        type="number"
                                        min="0"
                                        prop:value=field_value(store, item.id.clone(), |item| item.calories)
                                        on:input=move |ev| {
                                            let value = parse_field(&event_target_value(&ev));
                                            store.update_item(&calories_id, ItemPatch::calories(value));
                                        }
                                    />
                                </label>
                            </div>
                            <span class="item-kcal">
                                {field_value(store, kcal_id, |item| item.calories)}
                                " kcal"
                            </span>
                            <button
                                class="remove-btn"
                                on:click=move |_| store.remove_item(&remove_id)
                            >
                                "×"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}

/// Reactive readout of one numeric field, looked up by id so edits to other
/// rows leave this one's DOM alone
fn field_value(
    store: SessionStore,
    id: String,
    field: fn(&FoodItem) -> f64,
) -> impl Fn() -> String {
    move || {
        store
            .items()
            .iter()
            .find(|item| item.id == id)
            .map(|item| field(item).to_string())
            .unwrap_or_default()
    }
}

/// Mirrors number-input coercion: empty or unparseable text reads as 0
fn parse_field(raw: &str) -> f64 {
    raw.trim().parse::<f64>().unwrap_or(0.0)
}
