//! Theme tags.
//!
//! Items carry an explicit set of theme tags. When a definition does not
//! provide them, they are seeded by matching the item's name against
//! [`THEME_VOCABULARY`]: every vocabulary word occurring as a substring of
//! the name (case-sensitive) becomes a tag. `"TropicalPalm"` is tagged
//! `Tropical`; `"tropical palm"` is not.

use std::collections::BTreeSet;

pub const THEME_VOCABULARY: &[&str] = &[
    "Tropical", "Vintage", "Rustic", "Modern", "Floral", "Coastal", "Holiday", "Cozy", "Garden",
    "Retro",
];

#[must_use]
pub fn infer_themes(item_name: &str) -> BTreeSet<String> {
    THEME_VOCABULARY
        .iter()
        .filter(|theme| item_name.contains(*theme))
        .map(|theme| (*theme).to_owned())
        .collect()
}
