//! Polygon storage, winding and area.

use std::fmt;
use std::ops::Index;

use crate::line::Line;
use crate::vector::Vec2;

/// Errors surfaced by polygon queries.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PolygonError {
    /// The operation is not meaningful on a polygon this small.
    NotEnoughPoints {
        operation: &'static str,
        required: usize,
        found: usize,
    },
}

impl fmt::Display for PolygonError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PolygonError::NotEnoughPoints {
                operation,
                required,
                found,
            } => write!(
                f,
                "{operation}: polygon has {found} vertices, at least {required} required"
            ),
        }
    }
}

impl std::error::Error for PolygonError {}

/// Simple polygon as an ordered vertex loop.
///
/// Invariants (by convention, not checked):
/// - vertex `i` connects to `i + 1`, the last one back to the first;
/// - no closing duplicate;
/// - non-self-intersecting, no holes.
///
/// Orientation convention: screen coordinates (y down). A loop is called
/// clockwise when `signed_area() <= 0`; `(0,0) (2,0) (2,2) (0,2)` is clockwise.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Polygon {
    vertices: Vec<Vec2>,
}

impl Polygon {
    #[inline]
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
        }
    }

    #[inline]
    pub fn from_vertices(vertices: Vec<Vec2>) -> Self {
        Self { vertices }
    }

    #[inline]
    pub fn vertices(&self) -> &[Vec2] {
        &self.vertices
    }

    #[inline]
    pub fn into_vertices(self) -> Vec<Vec2> {
        self.vertices
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Append a vertex after the current last one.
    #[inline]
    pub fn push(&mut self, v: Vec2) {
        self.vertices.push(v);
    }

    #[inline]
    pub(crate) fn insert(&mut self, index: usize, v: Vec2) {
        self.vertices.insert(index, v);
    }

    /// Edge `i`, from vertex `i` to vertex `i + 1` (wrapping).
    ///
    /// Panics if `i >= len()`.
    #[inline]
    pub fn edge(&self, i: usize) -> Line {
        let n = self.vertices.len();
        Line::new(self.vertices[i], self.vertices[(i + 1) % n])
    }

    /// All edges in vertex order, the wraparound edge last.
    pub fn edges(&self) -> impl Iterator<Item = Line> + '_ {
        (0..self.vertices.len()).map(move |i| self.edge(i))
    }

    /// Same loop traversed in the opposite direction.
    pub fn reversed(&self) -> Polygon {
        self.vertices.iter().rev().copied().collect()
    }

    pub(crate) fn require(
        &self,
        operation: &'static str,
        required: usize,
    ) -> Result<(), PolygonError> {
        if self.vertices.len() < required {
            return Err(PolygonError::NotEnoughPoints {
                operation,
                required,
                found: self.vertices.len(),
            });
        }
        Ok(())
    }

    /// Shoelace area with sign; `<= 0` for clockwise loops. Zero below three vertices.
    pub fn signed_area(&self) -> f64 {
        let v = &self.vertices;
        let n = v.len();
        if n < 3 {
            return 0.0;
        }
        let mut sum = 0.0;
        for i in 0..n {
            let prev = v[(i + n - 1) % n];
            let next = v[(i + 1) % n];
            sum += v[i].x * (prev.y - next.y);
        }
        sum / 2.0
    }

    #[inline]
    pub fn area(&self) -> f64 {
        self.signed_area().abs()
    }

    /// Winding test, `Σ (x[i+1] − x[i])·(y[i+1] + y[i]) <= 0`.
    pub fn is_clockwise(&self) -> Result<bool, PolygonError> {
        self.require("is_clockwise", 2)?;
        let sum: f64 = self
            .edges()
            .map(|e| (e.end().x - e.start().x) * (e.end().y + e.start().y))
            .sum();
        Ok(sum <= 0.0)
    }

    /// Copy with clockwise winding (reversed when counter-clockwise).
    pub fn to_clockwise(&self) -> Result<Polygon, PolygonError> {
        if self.is_clockwise()? {
            Ok(self.clone())
        } else {
            Ok(self.reversed())
        }
    }

    /// Mean of the vertices (not the area centroid).
    pub fn center(&self) -> Result<Vec2, PolygonError> {
        self.require("center", 1)?;
        let sum = self
            .vertices
            .iter()
            .fold(Vec2::zeros(), |acc, v| acc + v);
        Ok(sum / self.vertices.len() as f64)
    }
}

impl From<Vec<Vec2>> for Polygon {
    fn from(vertices: Vec<Vec2>) -> Self {
        Self::from_vertices(vertices)
    }
}

impl FromIterator<Vec2> for Polygon {
    fn from_iter<I: IntoIterator<Item = Vec2>>(iter: I) -> Self {
        Self::from_vertices(iter.into_iter().collect())
    }
}

impl Index<usize> for Polygon {
    type Output = Vec2;

    #[inline]
    fn index(&self, index: usize) -> &Vec2 {
        &self.vertices[index]
    }
}
