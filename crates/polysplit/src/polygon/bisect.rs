//! Area between two edges, sliced perpendicular to their bisector.
//!
//! For edges `l1 = (v1, v2)` and `l2 = (v3, v4)` of a clockwise loop, the
//! quadrilateral `v1 v2 v3 v4` is cut by chords perpendicular to the bisector
//! of the two edge lines into up to three zones:
//!
//! ```text
//!   v4 ─────────── p3 ── v3        l2
//!    │ ╲  left  │ trapezoid│ right╱
//!    │   ╲      │          │    ╱
//!   v1 ── p1 ───────────── v2      l1
//! ```
//!
//! - a left corner triangle when the chord from `v1` (or `v4`) lands inside
//!   the opposite edge;
//! - the trapezoid between the left and right chords;
//! - a right corner triangle, symmetric on the `v2`/`v3` side.
//!
//! Sweeping a chord from the left end to the right end grows the swept area
//! monotonically from `0` to `total()`; `find_cut_line(s)` returns the chord
//! at swept area `s`, oriented from `l2` to `l1`. Inside the trapezoid both
//! chord ends move linearly along the edges, so the chord is no longer
//! perpendicular to the bisector when the end chords are slanted.

use super::types::Polygon;
use crate::line::Line;
use crate::vector::{Vec2, Vec2Ext};

/// Triangle cut off at one end of the pair of edges.
#[derive(Clone, Copy, Debug)]
struct Corner {
    /// Edge endpoint the chord fans out from.
    apex: Vec2,
    /// Endpoint of the opposite edge where the zone ends.
    base: Vec2,
    /// Where the chord perpendicular to the bisector from `apex` lands.
    foot: Vec2,
    /// Whether `apex` lies on the first edge.
    apex_on_first: bool,
    area: f64,
}

impl Corner {
    fn new(apex: Vec2, base: Vec2, foot: Vec2, apex_on_first: bool) -> Self {
        let area = Polygon::from_vertices(vec![apex, base, foot]).area();
        Self {
            apex,
            base,
            foot,
            apex_on_first,
            area,
        }
    }

    /// Chord from `apex` to the point at fraction `t` along `base → foot`,
    /// oriented from the second edge to the first.
    fn chord(&self, t: f64) -> Line {
        let point = self.base + (self.foot - self.base) * t;
        if self.apex_on_first {
            Line::new(point, self.apex)
        } else {
            Line::new(self.apex, point)
        }
    }
}

/// Zones of the region between two edges.
#[derive(Clone, Debug)]
pub(super) struct Decomposition {
    left: Option<Corner>,
    right: Option<Corner>,
    /// Trapezoid corners: `t0` on the second edge and `t1` on the first at
    /// the left chord, `t2` on the first and `t3` on the second at the right.
    trapezoid: [Vec2; 4],
    trapezoid_area: f64,
}

impl Decomposition {
    pub(super) fn new(l1: &Line, l2: &Line) -> Self {
        let (v1, v2) = (l1.start(), l1.end());
        let (v3, v4) = (l2.start(), l2.end());
        let bisector = Line::bisector(l1, l2);

        // Chord from `from` perpendicular to the bisector, landing on
        // `opposite` somewhere other than its endpoint `far`.
        let foot = |from: Vec2, opposite: &Line, far: Vec2| {
            Line::new(from, bisector.line_nearest_point(from))
                .cross_line_segment(opposite)
                .filter(|p| p.differs(&far))
        };

        let mut left = None;
        let (t0, t1) = if v1.differs(&v4) {
            if let Some(p1) = foot(v1, l2, v4) {
                left = Some(Corner::new(v1, v4, p1, true));
                (p1, v1)
            } else if let Some(p4) = foot(v4, l1, v1) {
                left = Some(Corner::new(v4, v1, p4, false));
                (v4, p4)
            } else {
                (v4, v1)
            }
        } else {
            (v4, v1)
        };

        let mut right = None;
        let (t2, t3) = if v2.differs(&v3) {
            if let Some(p3) = foot(v3, l1, v2) {
                right = Some(Corner::new(v3, v2, p3, false));
                (p3, v3)
            } else if let Some(p2) = foot(v2, l2, v3) {
                right = Some(Corner::new(v2, v3, p2, true));
                (v2, p2)
            } else {
                (v2, v3)
            }
        } else {
            (v2, v3)
        };

        let trapezoid = [t0, t1, t2, t3];
        let trapezoid_area = Polygon::from_vertices(trapezoid.to_vec()).area();
        Self {
            left,
            right,
            trapezoid,
            trapezoid_area,
        }
    }

    pub(super) fn total(&self) -> f64 {
        self.left_area() + self.trapezoid_area + self.right.map_or(0.0, |c| c.area)
    }

    #[inline]
    fn left_area(&self) -> f64 {
        self.left.map_or(0.0, |c| c.area)
    }

    /// Chord that sweeps area `s` from the left end, oriented from the second
    /// edge to the first. Zone boundaries belong to the zone on their left, and
    /// `s == total()` gives the right end chord. `None` when `s > total()`.
    pub(super) fn find_cut_line(&self, s: f64) -> Option<Line> {
        if s > self.total() {
            return None;
        }
        if let Some(left) = self.left.filter(|c| s <= c.area) {
            return Some(left.chord(s / left.area));
        }
        let left_area = self.left_area();
        if s <= left_area + self.trapezoid_area {
            return Some(self.trapezoid_chord(s - left_area));
        }
        self.right.map(|right| {
            let m = (s - left_area - self.trapezoid_area) / right.area;
            right.chord(1.0 - m.min(1.0))
        })
    }

    /// Chord inside the trapezoid sweeping area `s` from the left chord.
    ///
    /// Both ends move by the same fraction `m`: `t1 → t2` on the first edge
    /// and `t0 → t3` on the second. The swept quadrilateral
    /// `t1, t1 + u·m, t0 + w·m, t0` with `u = t2 − t1`, `w = t3 − t0` has
    /// signed double area `b·m − c·m²`, solved for `m` in the
    /// cancellation-free form.
    fn trapezoid_chord(&self, s: f64) -> Line {
        let [t0, t1, t2, t3] = self.trapezoid;
        let u = t2 - t1;
        let w = t3 - t0;
        let b = cross(&(u + w), &(t0 - t1));
        let c = cross(&w, &u);
        // Orient so the whole trapezoid (m = 1) has positive area.
        let sign = if b - c < 0.0 { -1.0 } else { 1.0 };
        let (b, c) = (sign * b / 2.0, sign * c / 2.0);
        let disc = (b * b - 4.0 * c * s).max(0.0);
        let denom = b + disc.sqrt();
        let m = if denom > 0.0 {
            2.0 * s / denom
        } else {
            s / self.trapezoid_area
        };
        let m = m.clamp(0.0, 1.0);
        Line::new(t0 + w * m, t1 + u * m)
    }
}

#[inline]
fn cross(p: &Vec2, q: &Vec2) -> f64 {
    p.x * q.y - p.y * q.x
}
