use std::path::Path;

use anyhow::{Context, bail};
use decorscore_engine::{
    AreaRegistry, BonusConfig, ItemCatalog, ItemDefinition, PlaceableArea, PlacedItem,
    PlacedItemId, PlacementScorer, ScoreAggregator,
};
use serde::{Deserialize, Serialize};

use crate::util;

/// A scripted game: the play surface, the item catalog and what the player
/// placed on each day.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Scenario {
    pub areas: Vec<PlaceableArea>,
    pub items: Vec<ItemDefinition>,
    #[serde(default)]
    pub bonus: BonusConfig,
    #[serde(default)]
    pub days: Vec<ScenarioDay>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ScenarioDay {
    /// Items dropped or moved this day. An id seen on an earlier day moves
    /// that item; a new id adds one.
    #[serde(default)]
    pub placements: Vec<PlacedItem>,
    /// Items taken off the surface before the day ends.
    #[serde(default)]
    pub removed: Vec<PlacedItemId>,
    #[serde(default)]
    pub chore_points: i64,
}

impl Scenario {
    pub fn open<P>(path: P) -> anyhow::Result<Self>
    where
        P: AsRef<Path>,
    {
        let path = path.as_ref();
        let scenario: Self = util::read_json_file("scenario", path)?;
        if scenario.areas.is_empty() {
            bail!("{} defines no areas", path.display());
        }
        Ok(scenario)
    }

    pub fn build_aggregator(&self) -> anyhow::Result<ScoreAggregator> {
        let mut areas = AreaRegistry::new();
        for area in &self.areas {
            areas
                .register(area.clone())
                .with_context(|| format!("invalid area {:?}", area.id()))?;
        }
        let catalog =
            ItemCatalog::try_from(self.items.clone()).context("invalid item catalog")?;
        Ok(ScoreAggregator::new(
            PlacementScorer::new(areas),
            catalog,
            self.bonus.clone(),
        ))
    }
}

impl ScenarioDay {
    /// Applies this day's changes to the roster.
    pub fn apply(&self, aggregator: &mut ScoreAggregator) {
        for id in &self.removed {
            if aggregator.untrack(*id).is_none() {
                tracing::warn!(%id, "removed item was not on the surface");
            }
        }
        for item in &self.placements {
            if !aggregator.move_item(item.id, item.placement.clone()) {
                aggregator.track(item.clone());
            }
        }
        aggregator.add_chore_points(self.chore_points);
    }
}
