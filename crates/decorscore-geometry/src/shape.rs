use arrayvec::ArrayVec;
use serde::{Deserialize, Serialize};

use crate::{
    point::Point2D,
    polygon::{BoundingBox, Polygon, point_in_polygon},
    transform::Transform,
};

/// Number of evenly spaced perimeter samples tested for a circle.
pub const CIRCLE_SAMPLES: usize = 8;

const MAX_FIXED_PROBES: usize = 1 + CIRCLE_SAMPLES;

/// Rough footprint of a placed object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Shape {
    Point { position: Point2D },
    Circle { center: Point2D, radius: f64 },
    /// Axis-aligned box.
    Rect {
        center: Point2D,
        half_extents: Point2D,
    },
    Polygon { vertices: Polygon },
}

impl Shape {
    #[must_use]
    pub fn bounding_box(&self) -> Option<BoundingBox> {
        match self {
            Self::Point { position } => Some(BoundingBox::from_center(*position, Point2D::ORIGIN)),
            Self::Circle { center, radius } => Some(BoundingBox::from_center(
                *center,
                Point2D::new(*radius, *radius),
            )),
            Self::Rect {
                center,
                half_extents,
            } => Some(BoundingBox::from_center(*center, *half_extents)),
            Self::Polygon { vertices } => vertices.bounding_box(),
        }
    }

    /// Maps a world-space shape into the local frame of `transform`.
    ///
    /// Circle radii shrink by the larger axis scale. A box stays a box when
    /// the frame is not rotated; otherwise it becomes the polygon of its four
    /// corners, which is tested by the same all-corners rule.
    #[must_use]
    pub fn to_local(&self, transform: &Transform) -> Self {
        match self {
            Self::Point { position } => Self::Point {
                position: transform.inverse_apply(*position),
            },
            Self::Circle { center, radius } => Self::Circle {
                center: transform.inverse_apply(*center),
                radius: radius / transform.max_scale(),
            },
            Self::Rect {
                center,
                half_extents,
            } if !transform.is_rotated() => Self::Rect {
                center: transform.inverse_apply(*center),
                half_extents: Point2D::new(
                    half_extents.x / transform.scale.x.abs(),
                    half_extents.y / transform.scale.y.abs(),
                ),
            },
            Self::Rect {
                center,
                half_extents,
            } => Self::Polygon {
                vertices: Polygon::rectangle(*center, *half_extents)
                    .map_vertices(|v| transform.inverse_apply(v)),
            },
            Self::Polygon { vertices } => Self::Polygon {
                vertices: vertices.map_vertices(|v| transform.inverse_apply(v)),
            },
        }
    }

    /// Probe points for shapes with a fixed sample count, `None` for polygons.
    fn fixed_probes(&self) -> Option<ArrayVec<Point2D, MAX_FIXED_PROBES>> {
        let mut probes = ArrayVec::new();
        match self {
            Self::Point { position } => probes.push(*position),
            Self::Circle { center, radius } => {
                probes.push(*center);
                probes.extend(circle_samples(*center, *radius));
            }
            Self::Rect {
                center,
                half_extents,
            } => probes.extend(BoundingBox::from_center(*center, *half_extents).corners()),
            Self::Polygon { .. } => return None,
        }
        Some(probes)
    }
}

impl From<Point2D> for Shape {
    fn from(position: Point2D) -> Self {
        Self::Point { position }
    }
}

fn circle_samples(center: Point2D, radius: f64) -> impl Iterator<Item = Point2D> {
    (0..CIRCLE_SAMPLES).map(move |i| {
        #[expect(clippy::cast_precision_loss)]
        let angle = std::f64::consts::TAU * i as f64 / CIRCLE_SAMPLES as f64;
        center + Point2D::new(angle.cos(), angle.sin()) * radius
    })
}

/// Approximate test that `shape` lies entirely inside `polygon`.
///
/// Only sample points are checked, never edges:
///
/// - point: the point itself
/// - circle: the center and [`CIRCLE_SAMPLES`] points on the circumference
/// - box: its four corners
/// - polygon: its vertices (an empty polygon is never contained)
///
/// A concave `polygon` can therefore report containment for a shape that
/// pokes out between samples.
#[must_use]
pub fn shape_contained(shape: &Shape, polygon: &Polygon) -> bool {
    match shape.fixed_probes() {
        Some(probes) => probes.iter().all(|&p| point_in_polygon(p, polygon)),
        None => {
            let Shape::Polygon { vertices } = shape else {
                return false;
            };
            !vertices.is_empty()
                && vertices
                    .vertices()
                    .iter()
                    .all(|&p| point_in_polygon(p, polygon))
        }
    }
}

/// Box rule applied to arbitrary bounds, for footprints that have no
/// dedicated [`Shape`] variant.
#[must_use]
pub fn shape_bounds_contained(bounds: &BoundingBox, polygon: &Polygon) -> bool {
    bounds
        .corners()
        .iter()
        .all(|&p| point_in_polygon(p, polygon))
}
