//! Roster of placed items and day/game score aggregation.
//!
//! - [`PlacedItem`] - a live instance of a catalog item at a world position
//! - [`ScoreAggregator`] - tracks placed items, caches their scores and
//!   computes day and game totals
//! - [`DayPhase`] - lifecycle of a single day
//! - [`DaySummary`] / [`ItemScoreReport`] - read-only results
//!
//! # Day Flow
//!
//! ```text
//! Idle → Active → Finalizing → Finalized → (next day) Active
//!        begin    finish_day   finalize_day
//! ```
//!
//! Scores computed while an item is still being dragged are previews and
//! are never authoritative: [`ScoreAggregator::finish_day`] discards every
//! cached score and re-scores the roster from final positions before any
//! total is computed. [`ScoreAggregator::finalize_day`] runs that step
//! itself when the caller skipped it.
//!
//! # Example
//!
//! ```
//! use decorscore_engine::{
//!     AreaRegistry, BonusConfig, ItemCatalog, ItemDefinition, PlaceableArea, PlacedItem,
//!     PlacedItemId, PlacementPreference, PlacementScorer, ScoreAggregator,
//! };
//! use decorscore_geometry::{Point2D, Polygon};
//!
//! let mut areas = AreaRegistry::new();
//! areas
//!     .register(PlaceableArea::new(
//!         "Table",
//!         Polygon::rectangle(Point2D::ORIGIN, Point2D::new(1.0, 1.0)),
//!     ))
//!     .unwrap();
//! let mut catalog = ItemCatalog::new();
//! catalog
//!     .insert(ItemDefinition::new("Vase", 15, -5).with_preference(PlacementPreference::new("Table", 15)))
//!     .unwrap();
//!
//! let mut aggregator =
//!     ScoreAggregator::new(PlacementScorer::new(areas), catalog, BonusConfig::default());
//! aggregator.begin_day();
//! aggregator.track(PlacedItem::new(PlacedItemId(1), "Vase", Point2D::new(0.2, 0.3)));
//! let summary = aggregator.finalize_day();
//!
//! // 15 points, plus the perfect-placement and daily completion bonuses.
//! assert_eq!(summary.day_score, 15 + 10 + 100);
//! assert_eq!(aggregator.game_total(), summary.total);
//! ```

pub use self::{day::*, placed_item::*, report::*, score_aggregator::*};

mod day;
mod placed_item;
mod report;
mod score_aggregator;
