use decorscore_geometry::{Point2D, Shape};
use serde::{Deserialize, Serialize};

use crate::score::Placement;

/// Handle identifying a placed item in the roster.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
#[serde(transparent)]
#[display("#{_0}")]
pub struct PlacedItemId(pub u64);

/// A live instance of a catalog item.
///
/// The definition is referenced by name and resolved through the
/// aggregator's catalog at scoring time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacedItem {
    pub id: PlacedItemId,
    pub item_name: String,
    pub placement: Placement,
}

impl PlacedItem {
    #[must_use]
    pub fn new(id: PlacedItemId, item_name: impl Into<String>, position: Point2D) -> Self {
        Self {
            id,
            item_name: item_name.into(),
            placement: Placement::at(position),
        }
    }

    #[must_use]
    pub fn with_shape(self, shape: Shape) -> Self {
        Self {
            placement: self.placement.with_shape(shape),
            ..self
        }
    }

    #[must_use]
    pub fn position(&self) -> Point2D {
        self.placement.position
    }
}
