//! Cut a 2×2 square, an L-shape and a random star polygon, and print the parts.
//!
//! Usage:
//!   cargo run -p polysplit --example cut_square -- [target]
//!
//! `target` is the requested area for the square (default 3).

use nalgebra::vector;
use polysplit::prelude::*;

fn main() {
    let target: f64 = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(3.0);

    let square = Polygon::from(vec![
        vector![0.0, 0.0],
        vector![2.0, 0.0],
        vector![2.0, 2.0],
        vector![0.0, 2.0],
    ]);
    show("square", &square, target);

    let ell = Polygon::from(vec![
        vector![0.0, 0.0],
        vector![4.0, 0.0],
        vector![4.0, 1.0],
        vector![1.0, 1.0],
        vector![1.0, 4.0],
        vector![0.0, 4.0],
    ]);
    show("ell", &ell, 2.0);

    let star = draw_star_polygon(StarCfg::default(), ReplayToken { seed: 2025, index: 0 });
    show("star", &star, 0.25 * star.area());
}

fn show(name: &str, poly: &Polygon, target: f64) {
    println!("{name}: {} vertices, area {:.6}, target {target:.6}", poly.len(), poly.area());
    match poly.split(target) {
        Ok(SplitOutcome::Split(split)) => {
            let (s, e) = (split.cut.start(), split.cut.end());
            println!(
                "  cut ({:.4}, {:.4}) -> ({:.4}, {:.4}), length {:.4}",
                s.x,
                s.y,
                e.x,
                e.y,
                split.cut.length()
            );
            println!("  piece     area {:.6}", split.piece.area());
            println!("  remainder area {:.6}", split.remainder.area());
        }
        Ok(SplitOutcome::Unsplit(_)) => println!("  no cut"),
        Err(e) => println!("  error: {e}"),
    }
}
