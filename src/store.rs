//! Session Store
//!
//! Reactive wrapper around [`SessionState`]. Every mutation goes through a
//! single commit point that fires the injected on-change hook; the app wires
//! that hook to the localStorage write, so persistence stays out of the
//! rendering layer.

use leptos::prelude::*;

use crate::estimator::UuidIds;
use crate::models::{FoodItem, ItemPatch};
use crate::session::SessionState;

/// Single source of truth for the active item list and preview image
#[derive(Clone, Copy)]
pub struct SessionStore {
    state: RwSignal<SessionState>,
    on_change: fn(&SessionState),
}

impl SessionStore {
    pub fn new(initial: SessionState, on_change: fn(&SessionState)) -> Self {
        Self {
            state: RwSignal::new(initial),
            on_change,
        }
    }

    // ========================
    // Read accessors (reactive)
    // ========================

    pub fn items(&self) -> Vec<FoodItem> {
        self.state.with(|state| state.items.clone())
    }

    pub fn has_items(&self) -> bool {
        self.state.with(|state| !state.items.is_empty())
    }

    pub fn image(&self) -> Option<String> {
        self.state.with(|state| state.image.clone())
    }

    pub fn total_calories(&self) -> f64 {
        self.state.with(|state| state.total_calories())
    }

    // ========================
    // Mutations
    // ========================

    /// Installs a detection result: preview image plus the new item list.
    pub fn install_detection(&self, image: String, items: Vec<FoodItem>) {
        self.commit(|state| {
            state.set_image(Some(image));
            state.replace_all(items);
        });
    }

    pub fn update_item(&self, id: &str, patch: ItemPatch) {
        self.commit(|state| state.update_item(id, patch));
    }

    pub fn remove_item(&self, id: &str) {
        self.commit(|state| state.remove_item(id));
    }

    /// Returns whether the entry passed validation and was appended.
    pub fn add_custom(&self, name: &str, calories: &str, weight: &str) -> bool {
        let mut added = false;
        self.commit(|state| {
            added = state.add_custom(name, calories, weight, &mut UuidIds);
        });
        added
    }

    pub fn clear_items(&self) {
        self.commit(|state| state.clear_items());
    }

    fn commit(&self, mutate: impl FnOnce(&mut SessionState)) {
        self.state.update(mutate);
        self.state.with_untracked(|state| (self.on_change)(state));
    }
}

/// Get the session store from context
pub fn use_session_store() -> SessionStore {
    expect_context::<SessionStore>()
}
