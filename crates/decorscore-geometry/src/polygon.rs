use serde::{Deserialize, Serialize};

use crate::point::Point2D;

/// An ordered ring of vertices. The closing edge from the last vertex back to
/// the first is implicit.
///
/// A polygon with fewer than three vertices is degenerate: it is a valid
/// value, but it never contains any point.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Polygon {
    vertices: Vec<Point2D>,
}

impl Polygon {
    #[must_use]
    pub fn new<I>(vertices: I) -> Self
    where
        I: IntoIterator<Item = Point2D>,
    {
        Self {
            vertices: vertices.into_iter().collect(),
        }
    }

    /// Builds a polygon from `(x, y)` pairs.
    ///
    /// ```
    /// use decorscore_geometry::{Point2D, Polygon};
    ///
    /// let square = Polygon::from_coords(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]);
    /// assert!(square.contains_point(Point2D::new(0.5, 0.5)));
    /// ```
    #[must_use]
    pub fn from_coords(coords: &[(f64, f64)]) -> Self {
        Self::new(coords.iter().copied().map(Point2D::from))
    }

    /// Axis-aligned rectangle around `center`, wound counter-clockwise from
    /// the bottom-left corner.
    #[must_use]
    pub fn rectangle(center: Point2D, half_extents: Point2D) -> Self {
        Self::new(BoundingBox::from_center(center, half_extents).corners())
    }

    #[must_use]
    pub fn vertices(&self) -> &[Point2D] {
        &self.vertices
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.vertices.len() < 3
    }

    #[must_use]
    pub fn contains_point(&self, point: Point2D) -> bool {
        point_in_polygon(point, self)
    }

    /// Returns a new polygon with `f` applied to every vertex.
    #[must_use]
    pub fn map_vertices<F>(&self, f: F) -> Self
    where
        F: FnMut(Point2D) -> Point2D,
    {
        Self::new(self.vertices.iter().copied().map(f))
    }

    #[must_use]
    pub fn bounding_box(&self) -> Option<BoundingBox> {
        BoundingBox::enclosing(self.vertices.iter().copied())
    }

    /// Mean of the vertices. This is not the area centroid, but it is always
    /// inside a convex polygon.
    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn centroid(&self) -> Option<Point2D> {
        if self.vertices.is_empty() {
            return None;
        }
        let sum = self
            .vertices
            .iter()
            .fold(Point2D::ORIGIN, |acc, &v| acc + v);
        let n = self.vertices.len() as f64;
        Some(Point2D::new(sum.x / n, sum.y / n))
    }
}

impl FromIterator<Point2D> for Polygon {
    fn from_iter<T: IntoIterator<Item = Point2D>>(iter: T) -> Self {
        Self::new(iter)
    }
}

/// Even-odd ray casting test.
///
/// A horizontal ray is cast from `point` towards +x and the edges it crosses
/// are counted; an odd count means inside. An edge is counted when exactly
/// one of its endpoints lies strictly above the point, so for an
/// axis-aligned rectangle the bottom and left edges
/// classify as inside while the top and right edges classify as outside.
///
/// Polygons with fewer than three vertices never contain anything, and a
/// non-finite point is never inside.
#[must_use]
pub fn point_in_polygon(point: Point2D, polygon: &Polygon) -> bool {
    let vertices = polygon.vertices();
    if vertices.len() < 3 {
        return false;
    }

    let mut inside = false;
    let mut prev = vertices[vertices.len() - 1];
    for &curr in vertices {
        if (curr.y > point.y) != (prev.y > point.y) {
            let crossing_x = (prev.x - curr.x) * (point.y - curr.y) / (prev.y - curr.y) + curr.x;
            if point.x < crossing_x {
                inside = !inside;
            }
        }
        prev = curr;
    }
    inside
}

/// Axis-aligned bounds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min: Point2D,
    pub max: Point2D,
}

impl BoundingBox {
    #[must_use]
    pub fn from_center(center: Point2D, half_extents: Point2D) -> Self {
        let half = Point2D::new(half_extents.x.abs(), half_extents.y.abs());
        Self {
            min: center - half,
            max: center + half,
        }
    }

    /// Smallest box enclosing every point, or `None` for an empty iterator.
    pub fn enclosing<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = Point2D>,
    {
        let mut points = points.into_iter();
        let first = points.next()?;
        Some(points.fold(
            Self {
                min: first,
                max: first,
            },
            |acc, p| Self {
                min: Point2D::new(acc.min.x.min(p.x), acc.min.y.min(p.y)),
                max: Point2D::new(acc.max.x.max(p.x), acc.max.y.max(p.y)),
            },
        ))
    }

    #[must_use]
    pub fn center(&self) -> Point2D {
        (self.min + self.max) * 0.5
    }

    #[must_use]
    pub fn half_extents(&self) -> Point2D {
        (self.max - self.min) * 0.5
    }

    /// Corners in counter-clockwise order starting at `min`.
    #[must_use]
    pub fn corners(&self) -> [Point2D; 4] {
        [
            self.min,
            Point2D::new(self.max.x, self.min.y),
            self.max,
            Point2D::new(self.min.x, self.max.y),
        ]
    }
}
