use anyhow::{bail, Context, Result};
use keyhole::prelude::{vector, Point};
use polars::prelude::*;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// One input loop and the id it is reported under.
#[derive(Clone, Debug, PartialEq)]
pub struct Polygon {
    pub source: i64,
    pub points: Vec<Point>,
}

#[derive(Deserialize)]
struct JsonInput {
    polygons: Vec<Vec<[f64; 2]>>,
}

/// Read loops from `.csv` (columns `polygon,x,y`) or `.json` (`{"polygons": [...]}`).
pub fn read_polygons(path: &Path) -> Result<Vec<Polygon>> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("csv") => read_csv(path),
        Some("json") => read_json(path),
        _ => bail!("unsupported input {} (expected .csv or .json)", path.display()),
    }
}

fn read_json(path: &Path) -> Result<Vec<Polygon>> {
    let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    let parsed: JsonInput =
        serde_json::from_slice(&bytes).with_context(|| format!("parsing {}", path.display()))?;
    Ok(parsed
        .polygons
        .into_iter()
        .enumerate()
        .map(|(k, pts)| Polygon {
            source: k as i64,
            points: pts.into_iter().map(|[x, y]| vector![x, y]).collect(),
        })
        .collect())
}

// Rows keep their file order inside a polygon; polygons come out ordered by id.
fn read_csv(path: &Path) -> Result<Vec<Polygon>> {
    let df = LazyCsvReader::new(path)
        .with_infer_schema_length(Some(100))
        .finish()
        .with_context(|| format!("scanning {}", path.display()))?
        .select([
            col("polygon").cast(DataType::Int64),
            col("x").cast(DataType::Float64),
            col("y").cast(DataType::Float64),
        ])
        .collect()
        .with_context(|| format!("reading columns polygon,x,y from {}", path.display()))?;
    tracing::debug!(rows = df.height(), "input_csv_shape");

    let ids = df.column("polygon")?.i64()?;
    let xs = df.column("x")?.f64()?;
    let ys = df.column("y")?.f64()?;

    let mut grouped: BTreeMap<i64, Vec<Point>> = BTreeMap::new();
    for (row, ((id, x), y)) in ids.into_iter().zip(xs).zip(ys).enumerate() {
        match (id, x, y) {
            (Some(id), Some(x), Some(y)) => grouped.entry(id).or_default().push(vector![x, y]),
            _ => bail!("{}: row {row} has an empty cell", path.display()),
        }
    }
    Ok(grouped
        .into_iter()
        .map(|(source, points)| Polygon { source, points })
        .collect())
}
