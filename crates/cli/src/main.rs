use anyhow::{Context, Result};
use clap::{ArgAction, Args, Parser, Subcommand};
use polysplit::{Polygon, Vec2};
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::fmt::SubscriberBuilder;

mod io;

use io::{InspectDoc, PartitionDoc, PolygonDoc, QueryDoc, SplitDoc};

#[derive(Parser)]
#[command(name = "polysplit")]
#[command(about = "Cut polygons into pieces of a given area")]
#[command(version = polysplit::VERSION)]
struct Cmd {
    /// Log verbosity on stderr: -v info, -vv debug, -vvv trace
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    action: Action,
}

#[derive(Args)]
struct Files {
    /// Polygon JSON: {"vertices": [[x, y], ...]}
    #[arg(long)]
    input: PathBuf,
    /// Output JSON path; stdout when omitted
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Action {
    /// Cut off one piece of the given area along the shortest inside cut
    Split {
        #[command(flatten)]
        files: Files,
        #[arg(long)]
        area: f64,
    },
    /// Cut pieces of the given area until the rest is no larger than one piece
    Partition {
        #[command(flatten)]
        files: Files,
        #[arg(long)]
        area: f64,
    },
    /// Print area, winding and centre; with --point also containment and distance
    Inspect {
        #[arg(long)]
        input: PathBuf,
        #[arg(long, value_parser = io::parse_point)]
        point: Option<Vec2>,
    },
    /// Insert the boundary point nearest to --point as a new vertex
    Refine {
        #[command(flatten)]
        files: Files,
        #[arg(long, value_parser = io::parse_point)]
        point: Vec2,
    },
}

fn max_level(verbose: u8) -> Level {
    match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(max_level(cmd.verbose))
        .with_writer(std::io::stderr)
        .init();
    match cmd.action {
        Action::Split { files, area } => split(files, area),
        Action::Partition { files, area } => partition(files, area),
        Action::Inspect { input, point } => inspect(input, point),
        Action::Refine { files, point } => refine(files, point),
    }
}

fn split(files: Files, area: f64) -> Result<()> {
    tracing::info!(input = %files.input.display(), area, "split");
    let poly = io::read_polygon(&files.input)?;
    let outcome = poly
        .split(area)
        .with_context(|| format!("splitting {}", files.input.display()))?;
    match outcome.as_split() {
        Some(s) => tracing::info!(
            piece = s.piece.area(),
            remainder = s.remainder.area(),
            cut_length = s.cut.length(),
            "cut found"
        ),
        None => tracing::warn!(area, total = poly.area(), "no cut"),
    }
    io::write_json(files.out.as_deref(), &SplitDoc::from(&outcome))
}

fn partition(files: Files, area: f64) -> Result<()> {
    tracing::info!(input = %files.input.display(), area, "partition");
    let poly = io::read_polygon(&files.input)?;
    let part = poly
        .partition(area)
        .with_context(|| format!("partitioning {}", files.input.display()))?;
    tracing::info!(
        pieces = part.pieces.len(),
        remainder = part.remainder.area(),
        "partition done"
    );
    io::write_json(files.out.as_deref(), &PartitionDoc::from(&part))
}

fn inspect(input: PathBuf, point: Option<Vec2>) -> Result<()> {
    let poly = io::read_polygon(&input)?;
    io::write_json(None, &inspect_doc(&poly, point))
}

fn inspect_doc(poly: &Polygon, point: Option<Vec2>) -> InspectDoc {
    InspectDoc {
        vertices: poly.len(),
        area: poly.area(),
        signed_area: poly.signed_area(),
        clockwise: poly.is_clockwise().ok(),
        center: poly.center().ok().map(|c| [c.x, c.y]),
        query: point.map(|p| QueryDoc {
            point: [p.x, p.y],
            inside: poly.contains_point(p).ok(),
            distance: poly.distance_to(p).ok(),
            nearest: poly.nearest_point(p).ok().map(|q| [q.x, q.y]),
        }),
    }
}

fn refine(files: Files, point: Vec2) -> Result<()> {
    let mut poly = io::read_polygon(&files.input)?;
    let inserted = poly
        .split_nearest_edge(point)
        .with_context(|| format!("refining {}", files.input.display()))?;
    match inserted {
        Some(index) => tracing::info!(index, "vertex inserted"),
        None => tracing::info!("nearest point is already a vertex"),
    }
    io::write_json(files.out.as_deref(), &PolygonDoc::from(&poly))
}
