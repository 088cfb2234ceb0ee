//! Placement scoring for the decorating game.
//!
//! Objects dropped on the play surface are scored by which [`PlaceableArea`]
//! contains them and which zone inside that area they land in. The crate is
//! layered bottom-up:
//!
//! ```text
//! ScoreAggregator (roster, day/game totals, bonuses)
//!     ↓ uses
//! PlacementScorer (best candidate across every area)
//!     ↓ uses
//! AreaRegistry + ItemCatalog (areas, zones, preferences, restrictions)
//!     ↓ uses
//! decorscore_geometry (point-in-polygon, shape sampling)
//! ```
//!
//! Scoring never fails: a missing definition, a degenerate polygon, or a
//! placement outside every area all produce an ordinary [`PlacementScore`]
//! with a descriptive [`ScoreReason`]. Only building the registry or the
//! catalog from data can fail.
//!
//! # Example
//!
//! ```
//! use decorscore_engine::{
//!     AreaRegistry, ItemDefinition, PlaceableArea, PlacementPreference, PlacementScorer,
//!     ScoringZone,
//! };
//! use decorscore_geometry::{Point2D, Polygon};
//!
//! let table = PlaceableArea::new(
//!     "Table",
//!     Polygon::rectangle(Point2D::ORIGIN, Point2D::new(1.0, 1.0)),
//! );
//! let mut areas = AreaRegistry::new();
//! areas.register(table).unwrap();
//!
//! let center = ScoringZone::new(
//!     "Center",
//!     Polygon::rectangle(Point2D::ORIGIN, Point2D::new(0.5, 0.5)),
//!     25,
//! );
//! let vase = ItemDefinition::new("Vase", 10, -5)
//!     .with_preference(PlacementPreference::new("Table", 15).with_zone(center));
//!
//! let scorer = PlacementScorer::new(areas);
//! assert_eq!(scorer.score(&vase, Point2D::ORIGIN).points, 25);
//! assert_eq!(scorer.score(&vase, Point2D::new(0.9, 0.9)).points, 15);
//! assert_eq!(scorer.score(&vase, Point2D::new(5.0, 5.0)).points, -5);
//! ```

pub use self::{aggregator::*, area::*, bonus::*, item::*, score::*, scorer::*, theme::*};

pub mod aggregator;
pub mod area;
pub mod bonus;
pub mod item;
pub mod score;
pub mod scorer;
pub mod theme;

#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum AreaError {
    #[display("area {_0:?} is already registered")]
    DuplicateArea(#[error(not(source))] String),
    #[display("area {area:?} already has a zone named {zone:?}")]
    DuplicateZone { area: String, zone: String },
}

#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("item {name:?} is already in the catalog")]
pub struct DuplicateItemError {
    pub name: String,
}
