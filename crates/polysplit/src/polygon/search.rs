//! Shortest valid cut for a target area.
//!
//! Every pair of edges `(i, j)`, `i < j`, of the clockwise loop is tried.
//! The vertices strictly between the two edges form two chains:
//! - inner: `v[i+1] ..= v[j]`;
//! - outer: `v[j+1] ..= v[i]` (wrapping).
//!
//! A cut from edge `j` to edge `i` closes each chain into a polygon. The
//! outer polygon gets the requested area when the region between the two
//! edges contributes `target + signed_area(outer)`; if that is not positive
//! the inner chain is grown instead. The region is measured by
//! `Decomposition`. A candidate is kept only when its closed piece and
//! remainder have the requested areas. Among candidates whose cut runs
//! through the interior, the shortest one wins (first found on ties).

use tracing::{debug, trace};

use super::bisect::Decomposition;
use super::types::{Polygon, PolygonError};
use crate::cfg::EPS;
use crate::line::Line;

/// Two polygons produced by one cut.
#[derive(Clone, Debug)]
pub struct Split {
    /// What is left over, `area − target`.
    pub remainder: Polygon,
    /// The part with the requested area.
    pub piece: Polygon,
    /// The dividing segment, an edge of both polygons.
    pub cut: Line,
}

#[derive(Clone, Debug)]
pub enum SplitOutcome {
    Split(Split),
    /// No cut was made. Holds the input unchanged, or clockwise-normalized
    /// when the search ran without finding a valid cut.
    Unsplit(Polygon),
}

impl SplitOutcome {
    #[inline]
    pub fn is_split(&self) -> bool {
        matches!(self, SplitOutcome::Split(_))
    }

    pub fn as_split(&self) -> Option<&Split> {
        match self {
            SplitOutcome::Split(s) => Some(s),
            SplitOutcome::Unsplit(_) => None,
        }
    }

    pub fn into_split(self) -> Option<Split> {
        match self {
            SplitOutcome::Split(s) => Some(s),
            SplitOutcome::Unsplit(_) => None,
        }
    }
}

/// Result of repeatedly cutting pieces of one size.
#[derive(Clone, Debug, Default)]
pub struct Partition {
    /// Cut-off pieces, in the order they were cut.
    pub pieces: Vec<Polygon>,
    /// `cuts[k]` separated `pieces[k]` from the rest.
    pub cuts: Vec<Line>,
    /// Whatever could not be cut further.
    pub remainder: Polygon,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Chain {
    Inner,
    Outer,
}

#[derive(Clone, Debug)]
struct Candidate {
    split: Split,
    grown: Chain,
}

impl Candidate {
    /// Close both chains with `cut`; the grown chain becomes the piece.
    fn close(cut: Line, mut inner: Polygon, mut outer: Polygon, grown: Chain) -> Self {
        inner.push(cut.start());
        inner.push(cut.end());
        outer.push(cut.end());
        outer.push(cut.start());
        let (piece, remainder) = match grown {
            Chain::Outer => (outer, inner),
            Chain::Inner => (inner, outer),
        };
        Self {
            split: Split {
                remainder,
                piece,
                cut,
            },
            grown,
        }
    }

    /// Largest deviation of the piece from `target` and of the remainder
    /// from `total − target`.
    fn area_error(&self, target: f64, total: f64) -> f64 {
        let piece = (self.split.piece.area() - target).abs();
        let rest = (self.split.remainder.area() - (total - target)).abs();
        piece.max(rest)
    }
}

impl Polygon {
    /// Cut off a piece with area `target` along the shortest valid segment.
    ///
    /// Returns `Unsplit` with the input when `target` is not positive or the
    /// polygon is not larger than `target` by more than `EPS`; `Unsplit` with
    /// the clockwise-normalized input when no candidate cut stays inside.
    pub fn split(&self, target: f64) -> Result<SplitOutcome, PolygonError> {
        self.require("split", 3)?;
        let total = self.area();
        if target.is_nan() || target <= 0.0 || total - target <= EPS {
            debug!(target, total, "split: nothing to cut");
            return Ok(SplitOutcome::Unsplit(self.clone()));
        }

        let polygon = self.to_clockwise()?;
        let n = polygon.len();
        let mut best: Option<Candidate> = None;
        let mut best_len = f64::MAX;
        let mut tried = 0usize;
        for i in 0..n - 1 {
            for j in i + 1..n {
                let Some(candidate) = polygon.candidate(i, j, target) else {
                    continue;
                };
                tried += 1;
                let error = candidate.area_error(target, total);
                if error.is_nan() || error > EPS {
                    trace!(i, j, error, "cut misses the target area");
                    continue;
                }
                let cut = &candidate.split.cut;
                let len = cut.length_squared();
                if len < best_len && polygon.contains_segment(cut, i, j)? {
                    trace!(i, j, len, grown = ?candidate.grown, "shorter cut");
                    best_len = len;
                    best = Some(candidate);
                }
            }
        }

        debug!(
            vertices = n,
            target,
            total,
            tried,
            found = best.is_some(),
            "split"
        );
        Ok(match best {
            Some(candidate) => SplitOutcome::Split(candidate.split),
            None => SplitOutcome::Unsplit(polygon),
        })
    }

    /// Cut pieces of `piece_area` until the rest is no larger than one piece
    /// or cannot be cut.
    ///
    /// Every piece costs one full `split`, so the work grows with
    /// `area / piece_area`. A NaN `piece_area` or one not above `EPS` cuts
    /// nothing.
    pub fn partition(&self, piece_area: f64) -> Result<Partition, PolygonError> {
        self.require("partition", 3)?;
        let mut out = Partition {
            remainder: self.clone(),
            ..Partition::default()
        };
        if piece_area.is_nan() || piece_area <= EPS {
            debug!(piece_area, "partition: piece below tolerance");
            return Ok(out);
        }
        // Each cut removes `piece_area`, so the count is bounded by the total.
        let max_pieces = (self.area() / piece_area).ceil() as usize;
        for _ in 0..max_pieces {
            match out.remainder.split(piece_area)? {
                SplitOutcome::Split(split) => {
                    out.pieces.push(split.piece);
                    out.cuts.push(split.cut);
                    out.remainder = split.remainder;
                }
                SplitOutcome::Unsplit(rest) => {
                    out.remainder = rest;
                    break;
                }
            }
        }
        debug!(
            piece_area,
            pieces = out.pieces.len(),
            remainder = out.remainder.area(),
            "partition"
        );
        Ok(out)
    }

    fn chain(&self, i: usize, j: usize, which: Chain) -> Polygon {
        let n = self.len();
        match which {
            Chain::Inner => (i + 1..=j).map(|k| self[k]).collect(),
            Chain::Outer => (1..=n - (j - i)).map(|k| self[(j + k) % n]).collect(),
        }
    }

    fn candidate(&self, i: usize, j: usize, target: f64) -> Option<Candidate> {
        let inner = self.chain(i, j, Chain::Inner);
        let outer = self.chain(i, j, Chain::Outer);
        let l1 = self.edge(i);
        let l2 = self.edge(j);

        let grow_outer = target + outer.signed_area();
        let grow_inner = target + inner.signed_area();
        let (cut, grown) = if grow_outer > 0.0 {
            let cut = Decomposition::new(&l1, &l2).find_cut_line(grow_outer)?;
            (cut, Chain::Outer)
        } else if grow_inner > 0.0 {
            let cut = Decomposition::new(&l2, &l1).find_cut_line(grow_inner)?;
            (cut.reversed(), Chain::Inner)
        } else {
            return None;
        };
        Some(Candidate::close(cut, inner, outer, grown))
    }
}
