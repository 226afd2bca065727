//! Frontend Models
//!
//! Data structures shared by the estimator, session store, and UI.

use serde::{Deserialize, Serialize};

/// One detected or manually added food entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodItem {
    pub id: String,
    pub name: String,
    /// grams
    pub weight: f64,
    /// kcal
    pub calories: f64,
    /// 0-1, fixed at creation
    pub confidence: f64,
}

/// Partial edit applied to an existing item
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ItemPatch {
    pub weight: Option<f64>,
    pub calories: Option<f64>,
}

impl ItemPatch {
    pub fn weight(value: f64) -> Self {
        Self {
            weight: Some(value),
            ..Self::default()
        }
    }

    pub fn calories(value: f64) -> Self {
        Self {
            calories: Some(value),
            ..Self::default()
        }
    }
}

/// Session snapshot persisted to localStorage under a single key
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedSession {
    #[serde(default)]
    pub items: Vec<FoodItem>,
    #[serde(default)]
    pub image: Option<String>,
    /// Milliseconds since epoch, stamped at write time
    #[serde(default)]
    pub last_updated: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_item(id: &str) -> FoodItem {
        FoodItem {
            id: id.to_string(),
            name: format!("Item {}", id),
            weight: 120.0,
            calories: 230.0,
            confidence: 0.89,
        }
    }

    #[test]
    fn test_saved_session_round_trip() {
        let saved = SavedSession {
            items: vec![make_item("a"), make_item("b")],
            image: Some("data:image/png;base64,AAAA".to_string()),
            last_updated: 1_700_000_000_000.0,
        };

        let json = serde_json::to_string(&saved).unwrap();
        let restored: SavedSession = serde_json::from_str(&json).unwrap();

        assert_eq!(restored, saved);
    }

    #[test]
    fn test_saved_session_wire_format_is_camel_case() {
        let saved = SavedSession {
            items: Vec::new(),
            image: None,
            last_updated: 42.0,
        };

        let json = serde_json::to_string(&saved).unwrap();

        assert!(json.contains("\"lastUpdated\":42.0"));
        assert!(json.contains("\"image\":null"));
        assert!(json.contains("\"items\":[]"));
    }

    #[test]
    fn test_saved_session_tolerates_missing_fields() {
        let restored: SavedSession = serde_json::from_str("{}").unwrap();

        assert!(restored.items.is_empty());
        assert_eq!(restored.image, None);
        assert_eq!(restored.last_updated, 0.0);
    }
}
