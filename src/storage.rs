//! Local Storage Persistence
//!
//! One JSON snapshot under a single localStorage key. Reads fall back to
//! "no saved session" on any failure; a failed write is logged and affects
//! that write only.

use crate::models::SavedSession;
use crate::session::SessionState;

/// localStorage key holding the whole session snapshot
pub const STORAGE_KEY: &str = "calorie-vision-data";

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok()?
}

/// Loads the persisted snapshot. Absent key, unavailable storage, and
/// malformed JSON all read as "no saved session".
pub fn load() -> Option<SavedSession> {
    let raw = local_storage()?.get_item(STORAGE_KEY).ok()??;
    match serde_json::from_str(&raw) {
        Ok(saved) => Some(saved),
        Err(err) => {
            web_sys::console::warn_1(
                &format!("[STORAGE] Discarding malformed snapshot: {}", err).into(),
            );
            None
        }
    }
}

/// Writes the full session snapshot, overwriting any prior one.
pub fn save(state: &SessionState) {
    let snapshot = SavedSession {
        items: state.items.clone(),
        image: state.image.clone(),
        last_updated: js_sys::Date::now(),
    };
    let Some(storage) = local_storage() else {
        return;
    };
    match serde_json::to_string(&snapshot) {
        Ok(json) => {
            if let Err(err) = storage.set_item(STORAGE_KEY, &json) {
                web_sys::console::error_1(&format!("[STORAGE] Write failed: {:?}", err).into());
            }
        }
        Err(err) => {
            web_sys::console::error_1(&format!("[STORAGE] Serialize failed: {}", err).into());
        }
    }
}
