//! Simple polygons and area-exact splitting.
//!
//! Purpose
//! - `Polygon`: an ordered vertex loop with area, winding, nearest-boundary
//!   and containment queries.
//! - `Polygon::split(target)`: cut off a piece of exactly `target` area along
//!   the shortest straight segment that stays inside the polygon.
//! - `Polygon::partition(piece_area)`: repeated splitting into equal pieces.
//!
//! Conventions
//! - Screen coordinates (y down): "clockwise" means `signed_area() <= 0`.
//! - Queries that need a minimum number of vertices return
//!   `PolygonError::NotEnoughPoints` instead of guessing.
//!
//! Layout
//! - `types`: storage, winding, area, conversions.
//! - `queries`: distance, nearest point, containment, edge insertion.
//! - `bisect`: zones of the region between two edges, chord at a given area.
//! - `search`: pair enumeration and cut selection.

mod bisect;
mod queries;
mod search;
mod types;

pub use search::{Partition, Split, SplitOutcome};
pub use types::{Polygon, PolygonError};

#[cfg(test)]
mod tests;
