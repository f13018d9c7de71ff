//! Nearest-edge, containment and edge insertion.

use super::types::{Polygon, PolygonError};
use crate::cfg::{EPS, RAY_LENGTH};
use crate::line::Line;
use crate::vector::{Vec2, Vec2Ext};

/// Closest boundary point found by a nearest-edge scan.
#[derive(Clone, Copy, Debug)]
struct NearestEdge {
    index: usize,
    point: Vec2,
    distance: f64,
}

impl Polygon {
    /// Distance from `point` to the boundary.
    pub fn distance_to(&self, point: Vec2) -> Result<f64, PolygonError> {
        Ok(self.nearest_edge("distance_to", point)?.distance)
    }

    /// Closest boundary point to `point`.
    pub fn nearest_point(&self, point: Vec2) -> Result<Vec2, PolygonError> {
        Ok(self.nearest_edge("nearest_point", point)?.point)
    }

    /// Insert the closest boundary point to `point` as a new vertex.
    ///
    /// The vertex goes right after the start of the nearest edge. Nothing is
    /// inserted when it coincides (within `EPS`) with one of that edge's
    /// endpoints. Returns the index of the inserted vertex.
    pub fn split_nearest_edge(&mut self, point: Vec2) -> Result<Option<usize>, PolygonError> {
        let nearest = self.nearest_edge("split_nearest_edge", point)?;
        let edge = self.edge(nearest.index);
        if nearest.point.differs(&edge.start()) && nearest.point.differs(&edge.end()) {
            let at = nearest.index + 1;
            self.insert(at, nearest.point);
            Ok(Some(at))
        } else {
            Ok(None)
        }
    }

    /// Ray-casting containment: odd number of boundary crossings of an upward ray.
    pub fn contains_point(&self, point: Vec2) -> Result<bool, PolygonError> {
        self.require("contains_point", 3)?;
        let ray = Line::directed(point, Vec2::new(0.0, RAY_LENGTH));
        let crossings = self
            .edges()
            .filter(|edge| ray.cross_segment_segment(edge).is_some())
            .count();
        Ok(crossings % 2 != 0)
    }

    /// Whether `segment` runs through the interior.
    ///
    /// Edges `skip_a` and `skip_b` (the ones the segment starts and ends on)
    /// are not tested. Any other edge may only be touched within `EPS` of one
    /// of its endpoints. The segment's midpoint must be inside.
    pub fn contains_segment(
        &self,
        segment: &Line,
        skip_a: usize,
        skip_b: usize,
    ) -> Result<bool, PolygonError> {
        self.require("contains_segment", 3)?;
        for (i, edge) in self.edges().enumerate() {
            if i == skip_a || i == skip_b {
                continue;
            }
            if let Some(p) = edge.cross_segment_segment(segment) {
                if (edge.start() - p).norm_squared() > EPS && (edge.end() - p).norm_squared() > EPS
                {
                    return Ok(false);
                }
            }
        }
        self.contains_point(segment.midpoint())
    }

    /// First edge (in vertex order) with the smallest distance to `point`.
    fn nearest_edge(
        &self,
        operation: &'static str,
        point: Vec2,
    ) -> Result<NearestEdge, PolygonError> {
        self.require(operation, 2)?;
        let measure = |index: usize| {
            let p = self.edge(index).segment_nearest_point(point);
            NearestEdge {
                index,
                point: p,
                distance: (p - point).norm(),
            }
        };
        let mut best = measure(0);
        for index in 1..self.len() {
            let candidate = measure(index);
            if candidate.distance < best.distance {
                best = candidate;
            }
        }
        Ok(best)
    }
}
