//! Random star-shaped polygons (angular and radial jitter + replay tokens).
//!
//! Model
//! - Start from `n` equally spaced angles on [0, 2π), add bounded angular
//!   jitter, sort, and place one vertex per angle at a jittered radius.
//! - Vertices come out in increasing angle, which is clockwise in the crate's
//!   screen-coordinate convention. With `radial_jitter = 0` every vertex lies
//!   on one circle and the polygon is convex.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::polygon::Polygon;
use crate::vector::Vec2;

/// Vertex count distribution.
#[derive(Clone, Copy, Debug)]
pub enum VertexCount {
    Fixed(usize),
    Uniform { min: usize, max: usize },
}

impl VertexCount {
    fn sample<R: Rng>(&self, rng: &mut R) -> usize {
        match *self {
            VertexCount::Fixed(n) => n.max(3),
            VertexCount::Uniform { min, max } => {
                let lo = min.max(3);
                let hi = max.max(lo);
                rng.gen_range(lo..=hi)
            }
        }
    }
}

/// Star sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct StarCfg {
    pub vertex_count: VertexCount,
    /// Angular jitter as a fraction of the base spacing Δ=2π/n. Clamped to [0, 0.49].
    pub angle_jitter_frac: f64,
    /// Radii are `base_radius * (1 + u)` with `u ∈ [-radial_jitter, radial_jitter]`.
    pub radial_jitter: f64,
    pub base_radius: f64,
    pub center: Vec2,
    /// Random global phase in [0, 2π)?
    pub random_phase: bool,
}

impl Default for StarCfg {
    fn default() -> Self {
        Self {
            vertex_count: VertexCount::Fixed(12),
            angle_jitter_frac: 0.3,
            radial_jitter: 0.25,
            base_radius: 1.0,
            center: Vec2::zeros(),
            random_phase: true,
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64 finalizer.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Draw a random simple polygon, star-shaped around `cfg.center`.
pub fn draw_star_polygon(cfg: StarCfg, tok: ReplayToken) -> Polygon {
    let mut rng = tok.to_std_rng();
    let n = cfg.vertex_count.sample(&mut rng);
    let aj = cfg.angle_jitter_frac.clamp(0.0, 0.49);
    let rj = cfg.radial_jitter.clamp(0.0, 0.99);
    let r0 = cfg.base_radius.max(1e-9);
    let delta = 2.0 * std::f64::consts::PI / (n as f64);
    let phase = if cfg.random_phase {
        rng.gen::<f64>() * 2.0 * std::f64::consts::PI
    } else {
        0.0
    };
    let mut angles: Vec<f64> = (0..n)
        .map(|k| {
            let base = phase + (k as f64) * delta;
            let jitter = (rng.gen::<f64>() * 2.0 - 1.0) * aj * delta;
            base + jitter
        })
        .collect();
    angles.sort_by(f64::total_cmp);
    angles
        .into_iter()
        .map(|th| {
            let u = (rng.gen::<f64>() * 2.0 - 1.0) * rj;
            let r = (1.0 + u) * r0;
            cfg.center + Vec2::new(th.cos() * r, th.sin() * r)
        })
        .collect()
}

/// Scale `poly` about its vertex mean so that its area becomes `area`.
///
/// `None` for degenerate input (fewer than three vertices or zero area) or a
/// non-positive target.
pub fn rescale_to_area(poly: &Polygon, area: f64) -> Option<Polygon> {
    let current = poly.area();
    if poly.len() < 3 || current <= 0.0 || area.is_nan() || area <= 0.0 {
        return None;
    }
    let c = poly.center().ok()?;
    let s = (area / current).sqrt();
    Some(poly.vertices().iter().map(|v| c + (v - c) * s).collect())
}
