use decorscore_geometry::{Point2D, Shape};
use serde::{Deserialize, Serialize};

/// Where an item was dropped, in world space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    pub position: Point2D,
    /// Rough footprint. Without one, area containment is tested on
    /// `position` alone.
    #[serde(default)]
    pub shape: Option<Shape>,
}

impl Placement {
    #[must_use]
    pub const fn at(position: Point2D) -> Self {
        Self {
            position,
            shape: None,
        }
    }

    #[must_use]
    pub fn with_shape(self, shape: Shape) -> Self {
        Self {
            shape: Some(shape),
            ..self
        }
    }
}

/// Why a placement was awarded its points.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::IsVariant,
)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ScoreReason {
    #[display("outside valid area")]
    OutsideArea,
    #[display("item cannot be placed in {area}")]
    Restricted { area: String },
    #[display("item doesn't prefer this area — penalty applied")]
    NotPreferred { area: String },
    #[display("placed in {zone} zone")]
    Zone { area: String, zone: String },
    #[display("placed in preferred area")]
    PreferredArea { area: String },
    #[display("unknown item {name}")]
    UnknownItem { name: String },
}

impl ScoreReason {
    /// Area that produced this outcome, if the placement was inside one.
    #[must_use]
    pub fn area(&self) -> Option<&str> {
        match self {
            Self::Restricted { area }
            | Self::NotPreferred { area }
            | Self::Zone { area, .. }
            | Self::PreferredArea { area } => Some(area),
            Self::OutsideArea | Self::UnknownItem { .. } => None,
        }
    }

    #[must_use]
    pub fn zone(&self) -> Option<&str> {
        match self {
            Self::Zone { zone, .. } => Some(zone),
            _ => None,
        }
    }
}

/// Result of evaluating one item's position against every area.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacementScore {
    pub world_position: Point2D,
    /// Whether the item landed somewhere it is allowed to score from.
    /// Restricted areas count as invalid even though the item is inside.
    pub valid_area: bool,
    pub points: i32,
    pub reason: ScoreReason,
}

impl PlacementScore {
    #[must_use]
    pub fn zone_name(&self) -> Option<&str> {
        self.reason.zone()
    }

    #[must_use]
    pub fn area_id(&self) -> Option<&str> {
        self.reason.area()
    }

    /// Whether the placement was physically inside the area that produced
    /// this score, regardless of validity.
    #[must_use]
    pub fn is_inside_area(&self) -> bool {
        self.reason.area().is_some()
    }
}
