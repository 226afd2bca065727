//! Session State Container
//!
//! Pure state model for the detected/edited item list and the preview image.
//! All mutations live here, away from the reactive layer, so they can be
//! tested without a browser.

use crate::estimator::IdGenerator;
use crate::models::{FoodItem, ItemPatch};

/// Fixed confidence assigned to manually added entries
pub const CUSTOM_ITEM_CONFIDENCE: f64 = 0.55;

/// The user-visible session: ordered item list plus optional preview image
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionState {
    pub items: Vec<FoodItem>,
    pub image: Option<String>,
}

impl SessionState {
    /// Discards the current list and installs a detection result.
    pub fn replace_all(&mut self, items: Vec<FoodItem>) {
        self.items = items;
    }

    /// Applies weight/calories edits to the matching item, each clamped to
    /// >= 0. Absent ids are ignored.
    pub fn update_item(&mut self, id: &str, patch: ItemPatch) {
        if let Some(item) = self.items.iter_mut().find(|item| item.id == id) {
            if let Some(weight) = patch.weight {
                item.weight = clamp_non_negative(weight);
            }
            if let Some(calories) = patch.calories {
                item.calories = clamp_non_negative(calories);
            }
        }
    }

    /// Deletes by id. Absent ids are ignored.
    pub fn remove_item(&mut self, id: &str) {
        self.items.retain(|item| item.id != id);
    }

    /// Validates and appends a manual entry. Returns false, leaving the list
    /// unchanged, when the name is empty after trimming or the calories field
    /// does not parse to a finite number. Weight is optional and falls back
    /// to 0 unless positive.
    pub fn add_custom(
        &mut self,
        name: &str,
        calories: &str,
        weight: &str,
        ids: &mut dyn IdGenerator,
    ) -> bool {
        let name = name.trim();
        if name.is_empty() || calories.trim().is_empty() {
            return false;
        }
        let Ok(calories) = calories.trim().parse::<f64>() else {
            return false;
        };
        if !calories.is_finite() {
            return false;
        }
        let weight = weight.trim().parse::<f64>().unwrap_or(0.0);

        self.items.push(FoodItem {
            id: ids.next_id(),
            name: name.to_string(),
            weight: if weight > 0.0 { weight.round() } else { 0.0 },
            calories: clamp_non_negative(calories).round(),
            confidence: CUSTOM_ITEM_CONFIDENCE,
        });
        true
    }

    /// Empties the item list. The preview image is retained.
    pub fn clear_items(&mut self) {
        self.items.clear();
    }

    pub fn set_image(&mut self, image: Option<String>) {
        self.image = image;
    }

    /// Exact sum of all items' calories
    pub fn total_calories(&self) -> f64 {
        self.items.iter().map(|item| item.calories).sum()
    }
}

/// Number inputs can yield unparseable text; NaN coerces to 0 like any
/// negative value.
fn clamp_non_negative(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.max(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    struct SeqIds(u32);

    impl IdGenerator for SeqIds {
        fn next_id(&mut self) -> String {
            self.0 += 1;
            format!("item-{}", self.0)
        }
    }

    fn make_item(id: &str, weight: f64, calories: f64) -> FoodItem {
        FoodItem {
            id: id.to_string(),
            name: format!("Item {}", id),
            weight,
            calories,
            confidence: 0.8,
        }
    }

    fn make_state() -> SessionState {
        SessionState {
            items: vec![make_item("a", 180.0, 280.0), make_item("b", 120.0, 230.0)],
            image: Some("data:image/png;base64,AAAA".to_string()),
        }
    }

    fn assert_unique_ids(state: &SessionState) {
        let ids: HashSet<&str> = state.items.iter().map(|item| item.id.as_str()).collect();
        assert_eq!(ids.len(), state.items.len());
    }

    #[test]
    fn test_replace_all_discards_previous_items() {
        let mut state = make_state();
        state.replace_all(vec![make_item("c", 50.0, 80.0)]);

        assert_eq!(state.items.len(), 1);
        assert_eq!(state.items[0].id, "c");
    }

    #[test]
    fn test_update_clamps_negative_weight_to_zero() {
        let mut state = make_state();
        state.update_item("a", ItemPatch::weight(-5.0));

        assert_eq!(state.items[0].weight, 0.0);
        assert_eq!(state.items[0].calories, 280.0);
    }

    #[test]
    fn test_update_clamps_negative_calories_to_zero() {
        let mut state = make_state();
        state.update_item("b", ItemPatch::calories(-1.0));

        assert_eq!(state.items[1].calories, 0.0);
    }

    #[test]
    fn test_update_coerces_nan_to_zero() {
        let mut state = make_state();
        state.update_item("a", ItemPatch::weight(f64::NAN));

        assert_eq!(state.items[0].weight, 0.0);
    }

    #[test]
    fn test_update_leaves_name_and_confidence_untouched() {
        let mut state = make_state();
        state.update_item("a", ItemPatch::weight(200.0));

        assert_eq!(state.items[0].name, "Item a");
        assert_eq!(state.items[0].confidence, 0.8);
        assert_eq!(state.items[0].weight, 200.0);
    }

    #[test]
    fn test_update_unknown_id_is_a_noop() {
        let mut state = make_state();
        let before = state.clone();
        state.update_item("missing", ItemPatch::weight(999.0));

        assert_eq!(state, before);
    }

    #[test]
    fn test_remove_item_by_id() {
        let mut state = make_state();
        state.remove_item("a");

        assert_eq!(state.items.len(), 1);
        assert_eq!(state.items[0].id, "b");
        assert_unique_ids(&state);
    }

    #[test]
    fn test_remove_unknown_id_is_a_noop() {
        let mut state = make_state();
        state.remove_item("missing");

        assert_eq!(state.items.len(), 2);
    }

    #[test]
    fn test_add_custom_rejects_empty_name() {
        let mut state = make_state();
        let added = state.add_custom("", "100", "50", &mut SeqIds(0));

        assert!(!added);
        assert_eq!(state.items.len(), 2);
    }

    #[test]
    fn test_add_custom_rejects_whitespace_name() {
        let mut state = make_state();
        let added = state.add_custom("   ", "100", "50", &mut SeqIds(0));

        assert!(!added);
        assert_eq!(state.items.len(), 2);
    }

    #[test]
    fn test_add_custom_rejects_non_numeric_calories() {
        let mut state = make_state();
        let added = state.add_custom("Soup", "abc", "", &mut SeqIds(0));

        assert!(!added);
        assert_eq!(state.items.len(), 2);
    }

    #[test]
    fn test_add_custom_rejects_empty_calories() {
        let mut state = make_state();
        let added = state.add_custom("Soup", "", "200", &mut SeqIds(0));

        assert!(!added);
        assert_eq!(state.items.len(), 2);
    }

    #[test]
    fn test_add_custom_rejects_nan_calories() {
        let mut state = make_state();
        let added = state.add_custom("Soup", "NaN", "", &mut SeqIds(0));

        assert!(!added);
        assert_eq!(state.items.len(), 2);
    }

    #[test]
    fn test_add_custom_defaults_weight_to_zero() {
        let mut state = make_state();
        let added = state.add_custom("Soup", "150", "", &mut SeqIds(0));

        assert!(added);
        assert_eq!(state.items.len(), 3);
        let item = &state.items[2];
        assert_eq!(item.name, "Soup");
        assert_eq!(item.calories, 150.0);
        assert_eq!(item.weight, 0.0);
        assert_eq!(item.confidence, CUSTOM_ITEM_CONFIDENCE);
        assert_unique_ids(&state);
    }

    #[test]
    fn test_add_custom_rounds_and_clamps_values() {
        let mut state = SessionState::default();
        assert!(state.add_custom(" コーンスープ ", "150.4", "80.6", &mut SeqIds(0)));
        assert!(state.add_custom("Soda", "-120", "-5", &mut SeqIds(1)));

        assert_eq!(state.items[0].name, "コーンスープ");
        assert_eq!(state.items[0].calories, 150.0);
        assert_eq!(state.items[0].weight, 81.0);
        assert_eq!(state.items[1].calories, 0.0);
        assert_eq!(state.items[1].weight, 0.0);
    }

    #[test]
    fn test_add_custom_appends_at_the_end() {
        let mut state = make_state();
        state.add_custom("Soup", "150", "", &mut SeqIds(10));

        assert_eq!(state.items[2].id, "item-11");
        assert_unique_ids(&state);
    }

    #[test]
    fn test_clear_items_retains_image() {
        let mut state = make_state();
        state.clear_items();

        assert!(state.items.is_empty());
        assert_eq!(state.image.as_deref(), Some("data:image/png;base64,AAAA"));
    }

    #[test]
    fn test_total_calories_tracks_every_mutation() {
        let mut state = make_state();
        assert_eq!(state.total_calories(), 510.0);

        state.update_item("a", ItemPatch::calories(300.0));
        assert_eq!(state.total_calories(), 530.0);

        state.add_custom("Soup", "150", "", &mut SeqIds(0));
        assert_eq!(state.total_calories(), 680.0);

        state.remove_item("b");
        assert_eq!(state.total_calories(), 450.0);

        state.clear_items();
        assert_eq!(state.total_calories(), 0.0);
    }
}
