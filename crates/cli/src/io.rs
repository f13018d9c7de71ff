//! JSON documents read and written by the CLI.
//!
//! Polygons are `{"vertices": [[x, y], ...]}`. Output goes to a file when a
//! path is given (parent directories are created), else to stdout.

use anyhow::{bail, Context, Result};
use polysplit::{Line, Partition, Polygon, SplitOutcome, Vec2};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub type Point = [f64; 2];

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PolygonDoc {
    pub vertices: Vec<Point>,
}

impl From<&Polygon> for PolygonDoc {
    fn from(poly: &Polygon) -> Self {
        Self {
            vertices: poly.vertices().iter().map(point).collect(),
        }
    }
}

impl From<PolygonDoc> for Polygon {
    fn from(doc: PolygonDoc) -> Self {
        doc.vertices
            .into_iter()
            .map(|[x, y]| Vec2::new(x, y))
            .collect()
    }
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum SplitDoc {
    Cut {
        split: bool,
        remainder: PolygonDoc,
        piece: PolygonDoc,
        cut: [Point; 2],
    },
    Uncut {
        split: bool,
        polygon: PolygonDoc,
    },
}

impl From<&SplitOutcome> for SplitDoc {
    fn from(outcome: &SplitOutcome) -> Self {
        match outcome {
            SplitOutcome::Split(s) => SplitDoc::Cut {
                split: true,
                remainder: (&s.remainder).into(),
                piece: (&s.piece).into(),
                cut: segment(&s.cut),
            },
            SplitOutcome::Unsplit(p) => SplitDoc::Uncut {
                split: false,
                polygon: p.into(),
            },
        }
    }
}

#[derive(Debug, Serialize)]
pub struct PartitionDoc {
    pub pieces: Vec<PolygonDoc>,
    pub cuts: Vec<[Point; 2]>,
    pub remainder: PolygonDoc,
}

impl From<&Partition> for PartitionDoc {
    fn from(part: &Partition) -> Self {
        Self {
            pieces: part.pieces.iter().map(PolygonDoc::from).collect(),
            cuts: part.cuts.iter().map(segment).collect(),
            remainder: (&part.remainder).into(),
        }
    }
}

/// Summary printed by `inspect`. Fields a query cannot answer for this
/// polygon (too few vertices) are `null`.
#[derive(Debug, Serialize)]
pub struct InspectDoc {
    pub vertices: usize,
    pub area: f64,
    pub signed_area: f64,
    pub clockwise: Option<bool>,
    pub center: Option<Point>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<QueryDoc>,
}

#[derive(Debug, Serialize)]
pub struct QueryDoc {
    pub point: Point,
    pub inside: Option<bool>,
    pub distance: Option<f64>,
    pub nearest: Option<Point>,
}

#[inline]
fn point(v: &Vec2) -> Point {
    [v.x, v.y]
}

fn segment(l: &Line) -> [Point; 2] {
    [point(&l.start()), point(&l.end())]
}

pub fn read_polygon(path: &Path) -> Result<Polygon> {
    let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    let doc: PolygonDoc = serde_json::from_slice(&bytes)
        .with_context(|| format!("parsing polygon JSON in {}", path.display()))?;
    if doc.vertices.iter().flatten().any(|c| !c.is_finite()) {
        bail!("{}: vertex coordinates must be finite", path.display());
    }
    Ok(doc.into())
}

/// Pretty JSON to `out`, or to stdout when `out` is `None`.
pub fn write_json<T: Serialize>(out: Option<&Path>, value: &T) -> Result<()> {
    let text = serde_json::to_string_pretty(value)?;
    match out {
        Some(path) => {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    fs::create_dir_all(parent)
                        .with_context(|| format!("creating output dir {}", parent.display()))?;
                }
            }
            fs::write(path, text + "\n").with_context(|| format!("writing {}", path.display()))
        }
        None => {
            println!("{text}");
            Ok(())
        }
    }
}

/// `"x,y"` as a point, for `--point`.
pub fn parse_point(s: &str) -> std::result::Result<Vec2, String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected `x,y`, got `{s}`"))?;
    let coord = |t: &str| {
        t.trim()
            .parse::<f64>()
            .map_err(|e| format!("bad coordinate `{}`: {e}", t.trim()))
    };
    Ok(Vec2::new(coord(x)?, coord(y)?))
}
