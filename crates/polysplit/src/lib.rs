//! Area-exact polygon splitting in the plane.
//!
//! Given a simple polygon and a target area, find a straight cut that splits
//! off a piece of exactly that area, preferring the shortest such cut that
//! lies inside the polygon. The building blocks (vectors, implicit lines,
//! polygon queries) are public as well.
//!
//! Modules
//! - `vector`: `Vec2` (nalgebra) and epsilon comparisons.
//! - `line`: implicit lines and segments, intersections, bisectors.
//! - `polygon`: `Polygon`, `split`, `partition`.
//! - `rand`: reproducible random star-shaped polygons for tests and benches.
//! - `cfg`: tolerances.

pub mod cfg;
pub mod line;
pub mod polygon;
pub mod rand;
pub mod vector;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use cfg::EPS;
pub use line::{Line, PointSide};
pub use polygon::{Partition, Polygon, PolygonError, Split, SplitOutcome};
pub use vector::{Vec2, Vec2Ext};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::line::{Line, PointSide};
    pub use crate::polygon::{Partition, Polygon, PolygonError, Split, SplitOutcome};
    pub use crate::rand::{draw_star_polygon, rescale_to_area, ReplayToken, StarCfg, VertexCount};
    pub use crate::vector::{Vec2, Vec2Ext};
    pub use crate::EPS;
}
