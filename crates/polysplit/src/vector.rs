//! 2D points and vectors.
//!
//! `Vec2` is plain `nalgebra::Vector2<f64>`: arithmetic, `dot`, `norm`,
//! `norm_squared`, `abs` and exact `==` come from nalgebra. `Vec2Ext` adds the
//! two things nalgebra does not spell the way the splitter needs:
//! - an epsilon "differs" predicate (per component, `EPS`), used wherever two
//!   edges meet at a shared vertex and must agree on it;
//! - normalisation that maps the zero vector to itself instead of NaN.
//!
//! Exact `==` stays available and is deliberately not overridden.

use nalgebra::Vector2;

use crate::cfg::EPS;

/// Point or free vector in the plane.
pub type Vec2 = Vector2<f64>;

pub trait Vec2Ext {
    /// True when either coordinate differs by at least `EPS`.
    fn differs(&self, other: &Vec2) -> bool;

    /// Negation of [`Vec2Ext::differs`].
    #[inline]
    fn coincides(&self, other: &Vec2) -> bool {
        !self.differs(other)
    }

    /// Unit vector in the same direction, or zero for the zero vector.
    fn unit_or_zero(&self) -> Vec2;
}

impl Vec2Ext for Vec2 {
    #[inline]
    fn differs(&self, other: &Vec2) -> bool {
        (self.x - other.x).abs() >= EPS || (self.y - other.y).abs() >= EPS
    }

    #[inline]
    fn unit_or_zero(&self) -> Vec2 {
        let len = self.norm();
        if len == 0.0 {
            Vec2::zeros()
        } else {
            self / len
        }
    }
}
