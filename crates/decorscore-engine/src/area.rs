//! Placeable areas and the scoring zones inside them.
//!
//! An area's boundary and zones are stored in the area's own local frame;
//! world-space queries are mapped through the inverse of the area's
//! [`Transform`] before any containment test.

use decorscore_geometry::{Point2D, Polygon, Shape, Transform, point_in_polygon, shape_contained};
use serde::{Deserialize, Serialize};

use crate::AreaError;

/// A named sub-polygon carrying its own point value.
///
/// Used both for an area's zones and for the zones of an item's
/// [`PlacementPreference`](crate::PlacementPreference); in both cases the
/// polygon is in the owning area's local frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringZone {
    pub name: String,
    pub polygon: Polygon,
    pub points: i32,
}

impl ScoringZone {
    #[must_use]
    pub fn new(name: impl Into<String>, polygon: Polygon, points: i32) -> Self {
        Self {
            name: name.into(),
            polygon,
            points,
        }
    }

    #[must_use]
    pub fn contains_local(&self, local_point: Point2D) -> bool {
        point_in_polygon(local_point, &self.polygon)
    }
}

/// Highest-valued zone containing `local_point`; the first declared wins ties.
#[must_use]
pub fn best_zone(zones: &[ScoringZone], local_point: Point2D) -> Option<&ScoringZone> {
    zones
        .iter()
        .filter(|zone| zone.contains_local(local_point))
        .fold(None, |best, zone| match best {
            Some(best) if best.points >= zone.points => Some(best),
            _ => Some(zone),
        })
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaceableArea {
    id: String,
    boundary: Polygon,
    #[serde(default)]
    transform: Transform,
    #[serde(default)]
    zones: Vec<ScoringZone>,
}

impl PlaceableArea {
    #[must_use]
    pub fn new(id: impl Into<String>, boundary: Polygon) -> Self {
        Self {
            id: id.into(),
            boundary,
            transform: Transform::IDENTITY,
            zones: vec![],
        }
    }

    #[must_use]
    pub fn with_transform(self, transform: Transform) -> Self {
        Self { transform, ..self }
    }

    pub fn with_zone(mut self, zone: ScoringZone) -> Result<Self, AreaError> {
        self.add_zone(zone)?;
        Ok(self)
    }

    /// Appends a zone. Zone names are unique within an area.
    pub fn add_zone(&mut self, zone: ScoringZone) -> Result<(), AreaError> {
        if self.zone_named(&zone.name).is_some() {
            return Err(AreaError::DuplicateZone {
                area: self.id.clone(),
                zone: zone.name,
            });
        }
        self.zones.push(zone);
        Ok(())
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub fn boundary(&self) -> &Polygon {
        &self.boundary
    }

    #[must_use]
    pub fn transform(&self) -> &Transform {
        &self.transform
    }

    #[must_use]
    pub fn zones(&self) -> &[ScoringZone] {
        &self.zones
    }

    #[must_use]
    pub fn zone_named(&self, name: &str) -> Option<&ScoringZone> {
        self.zones.iter().find(|zone| zone.name == name)
    }

    #[must_use]
    pub fn to_local(&self, world_point: Point2D) -> Point2D {
        self.transform.inverse_apply(world_point)
    }

    /// Boundary mapped into world space.
    #[must_use]
    pub fn world_boundary(&self) -> Polygon {
        self.boundary.map_vertices(|v| self.transform.apply(v))
    }

    #[must_use]
    pub fn contains_point(&self, world_point: Point2D) -> bool {
        point_in_polygon(self.to_local(world_point), &self.boundary)
    }

    /// Sampled containment of a world-space shape.
    #[must_use]
    pub fn contains_shape(&self, world_shape: &Shape) -> bool {
        shape_contained(&world_shape.to_local(&self.transform), &self.boundary)
    }

    /// Highest-valued zone of this area containing `world_point`.
    ///
    /// The point is not required to be inside the boundary; zones are tested
    /// on their own.
    #[must_use]
    pub fn best_zone_for(&self, world_point: Point2D) -> Option<&ScoringZone> {
        best_zone(&self.zones, self.to_local(world_point))
    }

    fn check_unique_zones(&self) -> Result<(), AreaError> {
        for (i, zone) in self.zones.iter().enumerate() {
            if self.zones[..i].iter().any(|prev| prev.name == zone.name) {
                return Err(AreaError::DuplicateZone {
                    area: self.id.clone(),
                    zone: zone.name.clone(),
                });
            }
        }
        Ok(())
    }
}

/// Every area active in the session, in registration order.
#[derive(Debug, Clone, Default)]
pub struct AreaRegistry {
    areas: Vec<PlaceableArea>,
}

impl AreaRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an area. Identifiers are unique within the registry.
    ///
    /// Zone names are re-checked here because deserialized areas bypass
    /// [`PlaceableArea::add_zone`].
    pub fn register(&mut self, area: PlaceableArea) -> Result<(), AreaError> {
        if self.get(area.id()).is_some() {
            return Err(AreaError::DuplicateArea(area.id));
        }
        area.check_unique_zones()?;
        tracing::debug!(area = area.id(), zones = area.zones.len(), "registered area");
        self.areas.push(area);
        Ok(())
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&PlaceableArea> {
        self.areas.iter().find(|area| area.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &PlaceableArea> + '_ {
        self.areas.iter()
    }

    pub fn areas_containing(&self, world_point: Point2D) -> impl Iterator<Item = &PlaceableArea> + '_ {
        self.areas
            .iter()
            .filter(move |area| area.contains_point(world_point))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.areas.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.areas.is_empty()
    }
}

impl<'a> IntoIterator for &'a AreaRegistry {
    type Item = &'a PlaceableArea;
    type IntoIter = std::slice::Iter<'a, PlaceableArea>;

    fn into_iter(self) -> Self::IntoIter {
        self.areas.iter()
    }
}
