//! Lines and segments in implicit form.
//!
//! A `Line` carries two views of the same object:
//! - implicit coefficients `(a, b, c)` with `a·x + b·y + c = 0`;
//! - two reference points `start`, `end` (the segment extent).
//!
//! Built from two points, the coefficients are derived as
//! `a = start.y − end.y`, `b = end.x − start.x`, `c = start.x·end.y − end.x·start.y`.
//! Built from coefficients, the coefficients are kept as given and the points
//! are synthetic, `SYNTHETIC_HALF_SPAN` away from the axis origin, so the
//! segment-flavoured routines still have a (large, finite) extent to work
//! with. Neither view is mutable after construction.
//!
//! Intersection routines solve the 2×2 system with an exact `d == 0` parallel
//! test; containment in a segment uses its bounding box padded by `EPS`.

use crate::cfg::{EPS, SYNTHETIC_HALF_SPAN};
use crate::vector::{Vec2, Vec2Ext};

/// Which side of a directed line a point lies on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointSide {
    Above,
    Inside,
    Below,
}

/// Infinite line and finite segment in one value.
#[derive(Clone, Copy, Debug)]
pub struct Line {
    a: f64,
    b: f64,
    c: f64,
    start: Vec2,
    end: Vec2,
}

impl Line {
    /// Line through `start` and `end`; the segment is `[start, end]`.
    pub fn new(start: Vec2, end: Vec2) -> Self {
        Self {
            a: start.y - end.y,
            b: end.x - start.x,
            c: start.x * end.y - end.x * start.y,
            start,
            end,
        }
    }

    /// Line `a·x + b·y + c = 0` with synthetic endpoints.
    ///
    /// Near-horizontal lines (`|a| <= EPS`) are sampled at `x = ∓span`,
    /// near-vertical ones (`|b| <= EPS`) at `y = ∓span`, everything else at
    /// `x = ∓span`. With `a = b = 0` the endpoints are not finite.
    pub fn from_coefficients(a: f64, b: f64, c: f64) -> Self {
        let span = SYNTHETIC_HALF_SPAN;
        let (start, end) = if a.abs() <= EPS && b.abs() >= EPS {
            let y = -(c / b);
            (Vec2::new(-span, y), Vec2::new(span, y))
        } else if b.abs() <= EPS && a.abs() >= EPS {
            let x = -(c / a);
            (Vec2::new(x, -span), Vec2::new(x, span))
        } else {
            (
                Vec2::new(-span, -((a * -span + c) / b)),
                Vec2::new(span, -((a * span + c) / b)),
            )
        };
        Self { a, b, c, start, end }
    }

    /// Line through `point` and `point + direction`.
    #[inline]
    pub fn directed(point: Vec2, direction: Vec2) -> Self {
        Self::new(point, point + direction)
    }

    #[inline]
    pub fn a(&self) -> f64 {
        self.a
    }
    #[inline]
    pub fn b(&self) -> f64 {
        self.b
    }
    #[inline]
    pub fn c(&self) -> f64 {
        self.c
    }
    #[inline]
    pub fn coefficients(&self) -> (f64, f64, f64) {
        (self.a, self.b, self.c)
    }
    #[inline]
    pub fn start(&self) -> Vec2 {
        self.start
    }
    #[inline]
    pub fn end(&self) -> Vec2 {
        self.end
    }

    #[inline]
    pub fn length(&self) -> f64 {
        (self.end - self.start).norm()
    }

    #[inline]
    pub fn length_squared(&self) -> f64 {
        (self.end - self.start).norm_squared()
    }

    #[inline]
    pub fn midpoint(&self) -> Vec2 {
        (self.start + self.end) * 0.5
    }

    /// Same segment, traversed from `end` to `start`.
    #[inline]
    pub fn reversed(&self) -> Self {
        Self::new(self.end, self.start)
    }

    /// Point at distance `t` from `start` towards `end` (`t` is a length, not a fraction).
    #[inline]
    pub fn point_along(&self, t: f64) -> Vec2 {
        self.start + (self.end - self.start).unit_or_zero() * t
    }

    /// Signed distance from `point` to the infinite line.
    ///
    /// # Panics
    /// If the line is degenerate (`a = b = 0`).
    pub fn distance(&self, point: Vec2) -> f64 {
        let n = self.a * point.x + self.b * point.y + self.c;
        let m = self.a.hypot(self.b);
        assert!(m != 0.0, "distance to a degenerate line (a = b = 0)");
        n / m
    }

    /// Orthogonal projection of `point` onto the infinite line.
    pub fn line_nearest_point(&self, point: Vec2) -> Vec2 {
        let dir = Vec2::new(self.b, -self.a);
        let u = (point - self.start).dot(&dir) / dir.norm_squared();
        self.start + dir * u
    }

    /// Closest point of the segment `[start, end]` to `point`.
    pub fn segment_nearest_point(&self, point: Vec2) -> Vec2 {
        let dir = Vec2::new(self.b, -self.a);
        let u = (point - self.start).dot(&dir) / dir.norm_squared();
        if u < 0.0 {
            self.start
        } else if u > 1.0 {
            self.end
        } else {
            self.start + dir * u
        }
    }

    /// Side of `point` relative to the line directed from `start` to `end` (exact sign test).
    pub fn point_side(&self, point: Vec2) -> PointSide {
        let s = self.a * (point.x - self.start.x) + self.b * (point.y - self.start.y);
        if s > 0.0 {
            PointSide::Above
        } else if s < 0.0 {
            PointSide::Below
        } else {
            PointSide::Inside
        }
    }

    /// Intersection of this infinite line with the segment `other`.
    pub fn cross_line_segment(&self, other: &Line) -> Option<Vec2> {
        self.solve(other).filter(|p| other.bbox_contains(*p))
    }

    /// Intersection of this segment with the segment `other`.
    pub fn cross_segment_segment(&self, other: &Line) -> Option<Vec2> {
        self.solve(other)
            .filter(|p| self.bbox_contains(*p) && other.bbox_contains(*p))
    }

    /// Intersection of the two infinite lines; `None` only when parallel.
    #[inline]
    pub fn cross_line_line(&self, other: &Line) -> Option<Vec2> {
        self.solve(other)
    }

    /// True when both endpoints of `other` lie exactly on this line.
    pub fn is_same(&self, other: &Line) -> bool {
        self.point_side(other.start) == PointSide::Inside
            && self.point_side(other.end) == PointSide::Inside
    }

    /// Bisector `l1/|n1| − l2/|n2|` of the two lines, or `l1` when they coincide.
    ///
    /// The sign of the difference selects which of the two angle bisectors is
    /// produced; the splitter relies on it.
    pub fn bisector(l1: &Line, l2: &Line) -> Line {
        if l1.is_same(l2) {
            return *l1;
        }
        let q1 = l1.a.hypot(l1.b);
        let q2 = l2.a.hypot(l2.b);
        Line::from_coefficients(
            l1.a / q1 - l2.a / q2,
            l1.b / q1 - l2.b / q2,
            l1.c / q1 - l2.c / q2,
        )
    }

    /// Tangent of the angle between the two lines.
    #[inline]
    pub fn tan_angle(l1: &Line, l2: &Line) -> f64 {
        (l1.a * l2.b - l2.a * l1.b) / (l1.a * l2.a + l1.b * l2.b)
    }

    fn solve(&self, other: &Line) -> Option<Vec2> {
        let d = det(self.a, self.b, other.a, other.b);
        if d == 0.0 {
            return None;
        }
        Some(Vec2::new(
            -det(self.c, self.b, other.c, other.b) / d,
            -det(self.a, self.c, other.a, other.c) / d,
        ))
    }

    fn bbox_contains(&self, p: Vec2) -> bool {
        within(
            p.x,
            self.start.x.min(self.end.x),
            self.start.x.max(self.end.x),
        ) && within(
            p.y,
            self.start.y.min(self.end.y),
            self.start.y.max(self.end.y),
        )
    }
}

#[inline]
fn det(a: f64, b: f64, c: f64, d: f64) -> f64 {
    a * d - b * c
}

#[inline]
fn within(v: f64, lo: f64, hi: f64) -> bool {
    lo <= v + EPS && v <= hi + EPS
}
