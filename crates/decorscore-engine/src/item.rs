//! Item definitions: static catalog data shared by every placed instance of
//! an item type.

use std::{
    collections::{BTreeMap, BTreeSet},
    sync::Arc,
};

use decorscore_geometry::Point2D;
use serde::{Deserialize, Serialize};

use crate::{
    DuplicateItemError,
    area::{ScoringZone, best_zone},
    theme::infer_themes,
};

/// Zone of a [`PlacementPreference`], in the preferred area's local frame.
pub type PlacementZone = ScoringZone;

/// An item's scoring rule for one area.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacementPreference {
    pub area_id: String,
    /// Points for landing in the area outside every zone.
    pub default_area_points: i32,
    #[serde(default)]
    pub zones: Vec<PlacementZone>,
}

impl PlacementPreference {
    #[must_use]
    pub fn new(area_id: impl Into<String>, default_area_points: i32) -> Self {
        Self {
            area_id: area_id.into(),
            default_area_points,
            zones: vec![],
        }
    }

    #[must_use]
    pub fn with_zone(mut self, zone: PlacementZone) -> Self {
        self.zones.push(zone);
        self
    }

    #[must_use]
    pub fn best_zone(&self, local_point: Point2D) -> Option<&PlacementZone> {
        best_zone(&self.zones, local_point)
    }

    /// Best value this preference can award.
    #[must_use]
    pub fn max_points(&self) -> i32 {
        self.zones
            .iter()
            .map(|zone| zone.points)
            .fold(self.default_area_points, i32::max)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "ItemDefinitionRecord")]
pub struct ItemDefinition {
    name: String,
    base_points: i32,
    wrong_placement_penalty: i32,
    preferences: Vec<PlacementPreference>,
    restricted_areas: BTreeSet<String>,
    themes: BTreeSet<String>,
}

/// Serialized form; `themes` falls back to the name-derived tags.
#[derive(Deserialize)]
struct ItemDefinitionRecord {
    name: String,
    base_points: i32,
    wrong_placement_penalty: i32,
    #[serde(default)]
    preferences: Vec<PlacementPreference>,
    #[serde(default)]
    restricted_areas: BTreeSet<String>,
    themes: Option<BTreeSet<String>>,
}

impl From<ItemDefinitionRecord> for ItemDefinition {
    fn from(record: ItemDefinitionRecord) -> Self {
        let themes = record
            .themes
            .unwrap_or_else(|| infer_themes(&record.name));
        Self {
            name: record.name,
            base_points: record.base_points,
            wrong_placement_penalty: record.wrong_placement_penalty,
            preferences: record.preferences,
            restricted_areas: record.restricted_areas,
            themes,
        }
    }
}

impl ItemDefinition {
    /// Creates a definition with no preferences or restrictions. Theme tags
    /// are seeded from the name.
    #[must_use]
    pub fn new(name: impl Into<String>, base_points: i32, wrong_placement_penalty: i32) -> Self {
        let name = name.into();
        let themes = infer_themes(&name);
        Self {
            name,
            base_points,
            wrong_placement_penalty,
            preferences: vec![],
            restricted_areas: BTreeSet::new(),
            themes,
        }
    }

    #[must_use]
    pub fn with_preference(mut self, preference: PlacementPreference) -> Self {
        self.preferences.push(preference);
        self
    }

    #[must_use]
    pub fn with_restricted_area(mut self, area_id: impl Into<String>) -> Self {
        self.restricted_areas.insert(area_id.into());
        self
    }

    /// Replaces the theme tags.
    #[must_use]
    pub fn with_themes<I, S>(mut self, themes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.themes = themes.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn base_points(&self) -> i32 {
        self.base_points
    }

    #[must_use]
    pub fn wrong_placement_penalty(&self) -> i32 {
        self.wrong_placement_penalty
    }

    #[must_use]
    pub fn preferences(&self) -> &[PlacementPreference] {
        &self.preferences
    }

    #[must_use]
    pub fn restricted_areas(&self) -> &BTreeSet<String> {
        &self.restricted_areas
    }

    #[must_use]
    pub fn themes(&self) -> &BTreeSet<String> {
        &self.themes
    }

    /// First preference for `area_id` (exact, case-sensitive match).
    #[must_use]
    pub fn preference_for(&self, area_id: &str) -> Option<&PlacementPreference> {
        self.preferences.iter().find(|pref| pref.area_id == area_id)
    }

    #[must_use]
    pub fn is_restricted(&self, area_id: &str) -> bool {
        self.restricted_areas.contains(area_id)
    }

    /// Highest score this item can achieve: the best default or zone value
    /// over its preferences, or its base points when it has none.
    #[must_use]
    pub fn theoretical_max(&self) -> i32 {
        self.preferences
            .iter()
            .map(PlacementPreference::max_points)
            .max()
            .unwrap_or(self.base_points)
    }

    #[must_use]
    pub fn shares_theme_with(&self, other: &Self) -> bool {
        !self.themes.is_disjoint(&other.themes)
    }
}

/// Item definitions by name, shared by reference with placed instances.
#[derive(Debug, Clone, Default)]
pub struct ItemCatalog {
    items: BTreeMap<String, Arc<ItemDefinition>>,
}

impl ItemCatalog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, item: ItemDefinition) -> Result<Arc<ItemDefinition>, DuplicateItemError> {
        if self.items.contains_key(item.name()) {
            return Err(DuplicateItemError { name: item.name });
        }
        let item = Arc::new(item);
        self.items.insert(item.name.clone(), Arc::clone(&item));
        Ok(item)
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Arc<ItemDefinition>> {
        self.items.get(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<ItemDefinition>> + '_ {
        self.items.values()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl TryFrom<Vec<ItemDefinition>> for ItemCatalog {
    type Error = DuplicateItemError;

    fn try_from(items: Vec<ItemDefinition>) -> Result<Self, Self::Error> {
        let mut catalog = Self::new();
        for item in items {
            catalog.insert(item)?;
        }
        Ok(catalog)
    }
}
