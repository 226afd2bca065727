//! Estimation Simulator
//!
//! Maps an uploaded file name to a plausible set of food items, standing in
//! for a real vision model. The lower-cased file name is tested against each
//! template group's keywords in declaration order and the first match wins;
//! with no match, one of the fallback combos is picked at random. Randomness
//! and id generation are injected so tests can script exact outputs.

use crate::models::FoodItem;

/// Uniform randomness in [0, 1)
pub trait RandomSource {
    fn next_f64(&mut self) -> f64;
}

/// Browser randomness via Math.random
pub struct JsRandom;

impl RandomSource for JsRandom {
    fn next_f64(&mut self) -> f64 {
        js_sys::Math::random()
    }
}

/// Generator for item ids
pub trait IdGenerator {
    fn next_id(&mut self) -> String;
}

/// Random UUID v4 ids
pub struct UuidIds;

impl IdGenerator for UuidIds {
    fn next_id(&mut self) -> String {
        uuid::Uuid::new_v4().to_string()
    }
}

/// Item template before jitter and id assignment
struct ItemTemplate {
    name: &'static str,
    weight: f64,
    calories: f64,
    confidence: f64,
}

const fn tpl(name: &'static str, weight: f64, calories: f64, confidence: f64) -> ItemTemplate {
    ItemTemplate {
        name,
        weight,
        calories,
        confidence,
    }
}

/// Keyword-matched template group
struct TemplateGroup {
    keywords: &'static [&'static str],
    items: &'static [ItemTemplate],
}

const TEMPLATE_GROUPS: &[TemplateGroup] = &[
    TemplateGroup {
        keywords: &["rice", "ご飯", "gohan", "onigiri"],
        items: &[
            tpl("白ごはん", 180.0, 280.0, 0.93),
            tpl("焼き鮭", 120.0, 230.0, 0.89),
            tpl("味噌汁", 160.0, 65.0, 0.74),
        ],
    },
    TemplateGroup {
        keywords: &["pasta", "spaghetti", "パスタ"],
        items: &[
            tpl("トマトソースパスタ", 220.0, 520.0, 0.88),
            tpl("粉チーズ", 12.0, 48.0, 0.68),
        ],
    },
    TemplateGroup {
        keywords: &["salad", "サラダ", "veggie", "green"],
        items: &[
            tpl("グリーンサラダ", 180.0, 130.0, 0.91),
            tpl("アボカド", 70.0, 112.0, 0.72),
            tpl("オリーブオイルドレッシング", 18.0, 145.0, 0.61),
        ],
    },
    TemplateGroup {
        keywords: &["ramen", "ラーメン", "noodle"],
        items: &[
            tpl("豚骨ラーメン", 420.0, 680.0, 0.90),
            tpl("煮卵", 50.0, 80.0, 0.70),
        ],
    },
];

/// Combos used when no keyword matches, picked uniformly at random
const FALLBACK_COMBOS: &[&[ItemTemplate]] = &[
    &[
        tpl("ハンバーグ", 180.0, 480.0, 0.86),
        tpl("マッシュポテト", 150.0, 210.0, 0.73),
        tpl("ブロッコリー", 80.0, 28.0, 0.77),
    ],
    &[
        tpl("チキンカレー", 260.0, 560.0, 0.90),
        tpl("バスマティライス", 170.0, 250.0, 0.81),
    ],
    &[
        tpl("サーモン寿司", 200.0, 420.0, 0.84),
        tpl("味噌汁", 160.0, 65.0, 0.70),
        tpl("枝豆", 90.0, 120.0, 0.66),
    ],
];

/// Produces the detected item list for an uploaded file name.
///
/// Each item gets one jitter factor in [0.9, 1.1] applied to both weight and
/// calories (rounded to the nearest integer), a fresh id, and its template
/// confidence unchanged.
pub fn estimate(
    file_name: &str,
    rng: &mut dyn RandomSource,
    ids: &mut dyn IdGenerator,
) -> Vec<FoodItem> {
    let lower = file_name.to_lowercase();

    let picked = TEMPLATE_GROUPS
        .iter()
        .find(|group| group.keywords.iter().any(|keyword| lower.contains(keyword)))
        .map(|group| group.items)
        .unwrap_or_else(|| {
            let index = (rng.next_f64() * FALLBACK_COMBOS.len() as f64) as usize;
            FALLBACK_COMBOS[index.min(FALLBACK_COMBOS.len() - 1)]
        });

    picked
        .iter()
        .map(|template| {
            let delta = 0.9 + rng.next_f64() * 0.2;
            FoodItem {
                id: ids.next_id(),
                name: template.name.to_string(),
                weight: (template.weight * delta).round(),
                calories: (template.calories * delta).round(),
                confidence: template.confidence,
            }
        })
        .collect()
}
