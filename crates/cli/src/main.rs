use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use geomkern::geom2::Circle2;
use geomkern::Vec2;
use serde_json::json;
use std::fs;
use std::path::PathBuf;
use tracing_subscriber::fmt::SubscriberBuilder;

mod grid_io;
mod provenance;

use provenance::{BuildInfo, Sidecar};

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Geometry kernel front end: intersections and grid resampling")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Print the intersection points of two circles as JSON
    Circles {
        /// First circle as X,Y,R
        #[arg(long, value_parser = parse_circle)]
        a: Circle2,
        /// Second circle as X,Y,R
        #[arg(long, value_parser = parse_circle)]
        b: Circle2,
    },
    /// Print the tangent points from a point to a circle as JSON
    Tangents {
        /// Circle as X,Y,R
        #[arg(long, value_parser = parse_circle)]
        circle: Circle2,
        /// External point as X,Y
        #[arg(long, value_parser = parse_point)]
        point: Vec2<f64>,
    },
    /// Bilinearly resize a CSV grid and write it as JSON
    Resample {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        width: usize,
        #[arg(long)]
        height: usize,
        #[arg(long)]
        out: PathBuf,
    },
    /// Split a CSV grid into overlapping tiles, one JSON file per tile
    Tiles {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        cells_x: usize,
        #[arg(long)]
        cells_y: usize,
        /// Samples per tile side, shared edges included
        #[arg(long)]
        cell_res: usize,
        /// Output directory
        #[arg(long)]
        out: PathBuf,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Circles { a, b } => circles(&a, &b),
        Action::Tangents { circle, point } => tangents(&circle, point),
        Action::Resample {
            input,
            width,
            height,
            out,
        } => resample(input, width, height, out),
        Action::Tiles {
            input,
            cells_x,
            cells_y,
            cell_res,
            out,
        } => tiles(input, cells_x, cells_y, cell_res, out),
        Action::Report => report(),
    }
}

fn parse_floats<const N: usize>(s: &str) -> Result<[f64; N]> {
    let parts: Vec<&str> = s.split(',').map(str::trim).collect();
    if parts.len() != N {
        bail!("expected {N} comma-separated numbers, got {:?}", s);
    }
    let mut out = [0.0; N];
    for (slot, part) in out.iter_mut().zip(parts) {
        *slot = part
            .parse()
            .with_context(|| format!("{part:?} is not a number"))?;
    }
    Ok(out)
}

fn parse_circle(s: &str) -> Result<Circle2> {
    let [x, y, r] = parse_floats::<3>(s)?;
    Ok(Circle2::new(Vec2::new(x, y), r)?)
}

fn parse_point(s: &str) -> Result<Vec2<f64>> {
    let [x, y] = parse_floats::<2>(s)?;
    Ok(Vec2::new(x, y))
}

fn points_json(points: &[Vec2<f64>]) -> serde_json::Value {
    points.iter().map(|p| json!([p.x, p.y])).collect()
}

fn circles(a: &Circle2, b: &Circle2) -> Result<()> {
    let hits = a.intersect_circle(b);
    tracing::info!(count = hits.len(), "circles");
    println!("{}", serde_json::to_string_pretty(&points_json(&hits))?);
    Ok(())
}

fn tangents(circle: &Circle2, point: Vec2<f64>) -> Result<()> {
    let hits = circle.tangent_points(point);
    tracing::info!(count = hits.len(), "tangents");
    println!("{}", serde_json::to_string_pretty(&points_json(&hits))?);
    Ok(())
}

fn resample(input: PathBuf, width: usize, height: usize, out: PathBuf) -> Result<()> {
    tracing::info!(input = %input.display(), width, height, out = %out.display(), "resample");
    let grid = grid_io::load_csv_grid(&input)?;
    let resized = grid
        .interpolated_grid(width, height)
        .context("resizing grid")?;
    grid_io::write_grid_json(&out, &resized)?;

    Sidecar::new(
        "resample",
        json!({
            "source": [grid.width(), grid.height()],
            "width": width,
            "height": height
        }),
    )
    .input(&input)
    .write_beside(&out)?;
    Ok(())
}

fn tiles(input: PathBuf, cells_x: usize, cells_y: usize, cell_res: usize, out: PathBuf) -> Result<()> {
    tracing::info!(input = %input.display(), cells_x, cells_y, cell_res, out = %out.display(), "tiles");
    let grid = grid_io::load_csv_grid(&input)?;
    fs::create_dir_all(&out).with_context(|| format!("creating {}", out.display()))?;

    let mut written = Vec::new();
    for cy in 0..cells_y {
        for cx in 0..cells_x {
            let tile = grid
                .interpolated_subgrid_cell_with_overlap(cx, cy, cells_x, cells_y, cell_res)
                .with_context(|| format!("tile ({cx}, {cy})"))?;
            let path = out.join(format!("tile_{cx}_{cy}.json"));
            grid_io::write_grid_json(&path, &tile)?;
            written.push(path.to_string_lossy().into_owned());
        }
    }
    tracing::info!(tiles = written.len(), "tiles_written");

    let manifest = out.join("tiles.json");
    fs::write(&manifest, serde_json::to_vec_pretty(&json!({ "tiles": written }))?)
        .with_context(|| format!("writing {}", manifest.display()))?;
    Sidecar::new(
        "tiles",
        json!({
            "cells_x": cells_x,
            "cells_y": cells_y,
            "cell_res": cell_res
        }),
    )
    .input(&input)
    .write_beside(&manifest)?;
    Ok(())
}

fn report() -> Result<()> {
    println!("{}", serde_json::to_string_pretty(&BuildInfo::current())?);
    Ok(())
}
