use clap::Args;
use keyhole::prelude::{extract_holes_with, is_simple, signed_area, Point, Ring, Tolerance};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::input::Polygon;

#[derive(Args, Clone, Debug, Serialize)]
pub struct ExtractArgs {
    /// Input loops (.csv with polygon,x,y columns or .json)
    #[arg(long)]
    pub input: PathBuf,
    /// Result JSON; a provenance sidecar is written next to it
    #[arg(long)]
    pub out: PathBuf,
    /// Absolute tolerance; defaults to 1e-9 scaled by the largest coordinate
    #[arg(long)]
    pub eps: Option<f64>,
    /// Reverse loops with negative signed area before extraction
    #[arg(long)]
    pub orient: bool,
    /// Warn when an output loop is not simple
    #[arg(long)]
    pub check: bool,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Output {
    pub polygons: Vec<PolygonOut>,
    pub skipped: Vec<Skipped>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PolygonOut {
    pub source: i64,
    pub outer: Vec<[f64; 2]>,
    pub holes: Vec<HoleOut>,
    pub net_area: f64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HoleOut {
    pub parent: Option<usize>,
    pub depth: usize,
    pub points: Vec<[f64; 2]>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Skipped {
    pub source: i64,
    pub error: String,
}

/// Run the extractor over every polygon; failures go to `skipped`.
pub fn process(polygons: Vec<Polygon>, args: &ExtractArgs) -> Output {
    let mut out = Output::default();
    for Polygon { source, mut points } in polygons {
        if args.orient && signed_area(&points) < 0.0 {
            tracing::debug!(source, "reversing clockwise input");
            points.reverse();
        }
        let tol = args
            .eps
            .map(Tolerance::new)
            .unwrap_or_else(|| Tolerance::scaled_for(&points));
        let dec = match extract_holes_with(&points, tol) {
            Ok(dec) => dec,
            Err(err) => {
                tracing::warn!(source, %err, "skipping polygon");
                out.skipped.push(Skipped {
                    source,
                    error: err.to_string(),
                });
                continue;
            }
        };
        if args.check {
            if !is_simple(dec.outer.points(), tol) {
                tracing::warn!(source, "outer loop is not simple");
            }
            for (k, h) in dec.holes.iter().enumerate() {
                if !is_simple(h.ring.points(), tol) {
                    tracing::warn!(source, hole = k, "hole loop is not simple");
                }
            }
        }
        let holes = dec
            .holes
            .iter()
            .enumerate()
            .map(|(k, h)| HoleOut {
                parent: h.parent,
                depth: dec.depth(k),
                points: coords(&h.ring),
            })
            .collect();
        out.polygons.push(PolygonOut {
            source,
            outer: coords(&dec.outer),
            holes,
            net_area: dec.net_area(),
        });
    }
    out
}

fn coords(ring: &Ring) -> Vec<[f64; 2]> {
    ring.points().iter().map(|p: &Point| [p.x, p.y]).collect()
}
