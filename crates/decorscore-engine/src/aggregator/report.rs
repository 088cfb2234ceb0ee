use serde::Serialize;

use super::PlacedItemId;

/// Per-item line of the score breakdown.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemScoreReport {
    pub id: PlacedItemId,
    pub item_name: String,
    /// `None` until the item has been scored.
    pub points: Option<i32>,
    pub reason: String,
    pub area: Option<String>,
    pub zone: Option<String>,
    /// Scored at the item's theoretical maximum.
    pub optimal: bool,
    /// Points as a percentage of the theoretical maximum; `0.0` when the
    /// maximum is not positive.
    pub percent_of_max: f64,
}

#[must_use]
pub fn percent_of_max(points: i32, max: i32) -> f64 {
    if max <= 0 {
        return 0.0;
    }
    f64::from(points) * 100.0 / f64::from(max)
}
