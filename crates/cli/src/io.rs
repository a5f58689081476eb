//! File formats for vertex input and pixel output.
//!
//! - Vertices: JSON `[[x, y], ...]`, or CSV with `x` and `y` columns (polars).
//! - Pixels: CSV or Parquet tables with `x`, `y` columns (polars), chosen by extension.

use anyhow::{bail, Context, Result};
use polars::prelude::*;
use std::fs::{self, File};
use std::path::Path;

use polysplit::raster::Pixel;
use polysplit::Point;

/// Tabular output formats.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TableFormat {
    Csv,
    Parquet,
}

impl TableFormat {
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()? {
            "csv" => Some(Self::Csv),
            "parquet" => Some(Self::Parquet),
            _ => None,
        }
    }
}

pub fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    Ok(())
}

/// Read polygon vertices from JSON or CSV.
pub fn read_vertices(path: &Path) -> Result<Vec<Point>> {
    let points = match TableFormat::from_path(path) {
        Some(TableFormat::Csv) => read_vertices_csv(path)?,
        Some(TableFormat::Parquet) => {
            bail!("parquet input is not supported: {}", path.display())
        }
        None => {
            let raw = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
            let coords: Vec<[f64; 2]> = serde_json::from_slice(&raw)
                .with_context(|| format!("parsing {} as [[x, y], ...]", path.display()))?;
            coords.into_iter().map(|[x, y]| Point::new(x, y)).collect()
        }
    };
    tracing::info!(path = %path.display(), vertices = points.len(), "read_vertices");
    Ok(points)
}

fn read_vertices_csv(path: &Path) -> Result<Vec<Point>> {
    let df = LazyCsvReader::new(path)
        .with_infer_schema_length(Some(100))
        .finish()?
        .collect()
        .with_context(|| format!("reading {}", path.display()))?;
    let xs = column_f64(&df, "x")?;
    let ys = column_f64(&df, "y")?;
    Ok(xs.into_iter().zip(ys).map(|(x, y)| Point::new(x, y)).collect())
}

fn column_f64(df: &DataFrame, name: &str) -> Result<Vec<f64>> {
    let col = df
        .column(name)
        .with_context(|| format!("missing column {name:?}"))?
        .cast(&DataType::Float64)?;
    col.f64()?
        .into_iter()
        .enumerate()
        .map(|(row, v)| v.with_context(|| format!("null {name} at row {row}")))
        .collect()
}

/// Write pixels as a two-column table.
pub fn write_pixels(path: &Path, pixels: &[Pixel], format: TableFormat) -> Result<()> {
    let xs: Vec<i64> = pixels.iter().map(|p| p.x).collect();
    let ys: Vec<i64> = pixels.iter().map(|p| p.y).collect();
    let mut df = df!("x" => xs, "y" => ys)?;
    let mut file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    match format {
        TableFormat::Csv => CsvWriter::new(&mut file).finish(&mut df)?,
        TableFormat::Parquet => {
            ParquetWriter::new(&mut file).finish(&mut df)?;
        }
    }
    tracing::info!(path = %path.display(), rows = df.height(), ?format, "write_pixels");
    Ok(())
}
