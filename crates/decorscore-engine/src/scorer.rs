//! Placement scoring: one item, one position, every area.
//!
//! Each registered area yields a candidate score for the placement:
//!
//! 1. Not inside the area: the item's wrong-placement penalty.
//! 2. Inside, but the area is restricted for the item: the penalty. A
//!    restriction overrides any preference or zone.
//! 3. Inside, with no preference for the area: the penalty. Landing in an
//!    area the item does not care about is a mistake, not a neutral drop.
//! 4. Inside a preferred area: the best matching preference zone's value,
//!    or the preference's default when no zone matches.
//!
//! The candidate with the most points wins. On equal points a candidate
//! from an area that physically contains the placement beats an
//! "outside" candidate; remaining ties keep the first registered area.
//! With no areas at all the result is the "outside" penalty.
//!
//! Scoring is a pure function of the item definition, the placement and the
//! area registry, so re-scoring an unmoved item always gives the same result.

use decorscore_geometry::Point2D;

use crate::{
    area::{AreaRegistry, PlaceableArea},
    item::{ItemCatalog, ItemDefinition},
    score::{Placement, PlacementScore, ScoreReason},
};

#[derive(Debug, Clone, Default)]
pub struct PlacementScorer {
    areas: AreaRegistry,
}

impl PlacementScorer {
    #[must_use]
    pub fn new(areas: AreaRegistry) -> Self {
        Self { areas }
    }

    #[must_use]
    pub fn areas(&self) -> &AreaRegistry {
        &self.areas
    }

    /// Areas may be added during a session; they are not expected to move.
    pub fn areas_mut(&mut self) -> &mut AreaRegistry {
        &mut self.areas
    }

    /// Scores a bare position.
    #[must_use]
    pub fn score(&self, item: &ItemDefinition, world_position: Point2D) -> PlacementScore {
        self.score_placement(item, &Placement::at(world_position))
    }

    #[must_use]
    pub fn score_placement(&self, item: &ItemDefinition, placement: &Placement) -> PlacementScore {
        let best = self
            .areas
            .iter()
            .map(|area| evaluate_area(item, area, placement))
            .fold(None::<PlacementScore>, |best, candidate| match best {
                Some(best) if !outranks(&candidate, &best) => Some(best),
                _ => Some(candidate),
            });
        let score = best.unwrap_or_else(|| outside(item, placement.position));
        tracing::debug!(
            item = item.name(),
            points = score.points,
            reason = %score.reason,
            "scored placement"
        );
        score
    }

    /// Scores by definition name; an unknown name scores zero.
    #[must_use]
    pub fn score_named(
        &self,
        catalog: &ItemCatalog,
        item_name: &str,
        placement: &Placement,
    ) -> PlacementScore {
        match catalog.get(item_name) {
            Some(item) => self.score_placement(item, placement),
            None => {
                tracing::warn!(item = item_name, "no definition for placed item");
                PlacementScore {
                    world_position: placement.position,
                    valid_area: false,
                    points: 0,
                    reason: ScoreReason::UnknownItem {
                        name: item_name.to_owned(),
                    },
                }
            }
        }
    }
}

fn evaluate_area(
    item: &ItemDefinition,
    area: &PlaceableArea,
    placement: &Placement,
) -> PlacementScore {
    let position = placement.position;
    let contained = match &placement.shape {
        Some(shape) => area.contains_shape(shape),
        None => area.contains_point(position),
    };
    if !contained {
        return outside(item, position);
    }

    let penalty = |valid_area, reason| PlacementScore {
        world_position: position,
        valid_area,
        points: item.wrong_placement_penalty(),
        reason,
    };
    let area_id = area.id().to_owned();

    if item.is_restricted(area.id()) {
        return penalty(false, ScoreReason::Restricted { area: area_id });
    }
    let Some(preference) = item.preference_for(area.id()) else {
        return penalty(true, ScoreReason::NotPreferred { area: area_id });
    };

    let (points, reason) = match preference.best_zone(area.to_local(position)) {
        Some(zone) => (
            zone.points,
            ScoreReason::Zone {
                area: area_id,
                zone: zone.name.clone(),
            },
        ),
        None => (
            preference.default_area_points,
            ScoreReason::PreferredArea { area: area_id },
        ),
    };
    PlacementScore {
        world_position: position,
        valid_area: true,
        points,
        reason,
    }
}

fn outside(item: &ItemDefinition, position: Point2D) -> PlacementScore {
    PlacementScore {
        world_position: position,
        valid_area: false,
        points: item.wrong_placement_penalty(),
        reason: ScoreReason::OutsideArea,
    }
}

fn outranks(candidate: &PlacementScore, best: &PlacementScore) -> bool {
    (candidate.points, candidate.is_inside_area()) > (best.points, best.is_inside_area())
}
