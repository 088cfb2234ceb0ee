//! 2D geometry used by placement scoring.
//!
//! - [`Point2D`] - position in an area-local or world frame
//! - [`Polygon`] - ordered vertex ring, degenerate below three vertices
//! - [`Transform`] - local-to-world mapping (scale, rotation, translation)
//! - [`Shape`] - rough footprint of a placed object
//!
//! Containment is decided by [`point_in_polygon`] (even-odd ray casting) and
//! [`shape_contained`], which samples a handful of points per shape instead
//! of clipping polygons.
//!
//! # Example
//!
//! ```
//! use decorscore_geometry::{Point2D, Polygon, Shape, shape_contained};
//!
//! let table = Polygon::rectangle(Point2D::ORIGIN, Point2D::new(1.0, 1.0));
//! let vase = Shape::Circle { center: Point2D::new(0.2, 0.1), radius: 0.3 };
//!
//! assert!(table.contains_point(Point2D::ORIGIN));
//! assert!(shape_contained(&vase, &table));
//! ```

pub use self::{point::*, polygon::*, shape::*, transform::*};

mod point;
mod polygon;
mod shape;
mod transform;
