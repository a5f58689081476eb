use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use serde_json::json;
use std::path::Path;
use tracing_subscriber::fmt::SubscriberBuilder;

use polysplit::raster::{circle_polyline, midpoint_circle, CircleStyle, Pixel};
use polysplit::scene::{arrowhead, demo_circles, SPLIT_OFFSET_X};
use polysplit::{split, Decomposition, GeomCfg, Point, Polygon};

mod io;
mod provenance;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Split concave polygons and rasterize circles")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Split a polygon along a diagonal from its reflex vertex
    Split {
        /// Vertices as JSON `[[x, y], ...]` or CSV with `x,y` columns; defaults to the arrowhead
        #[arg(long)]
        input: Option<String>,
        /// Write the JSON report here (plus a provenance sidecar) instead of stdout
        #[arg(long)]
        out: Option<String>,
        /// Relative tolerance for parallel/collinear checks
        #[arg(long, default_value_t = GeomCfg::default().eps_det)]
        eps_det: f64,
    },
    /// Rasterize a circle with the midpoint algorithm
    Circle {
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        cx: i64,
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        cy: i64,
        #[arg(long)]
        radius: i64,
        /// Also sample an outline polyline with this many segments (JSON output only)
        #[arg(long)]
        segments: Option<usize>,
        /// `.csv` / `.parquet` write pixel tables, anything else JSON
        #[arg(long)]
        out: Option<String>,
    },
    /// Print the demo scene: split arrowhead laid out side by side, plus both demo circles
    Scene {
        #[arg(long, default_value_t = 360)]
        segments: usize,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Split {
            input,
            out,
            eps_det,
        } => run_split(input, out, eps_det),
        Action::Circle {
            cx,
            cy,
            radius,
            segments,
            out,
        } => run_circle(Pixel::new(cx, cy), radius, segments, out),
        Action::Scene { segments } => run_scene(segments),
        Action::Report => report(),
    }
}

/// What a renderer needs to draw a split: both parts plus the diagonal in original coordinates.
///
/// A convex input comes back as `first` with `second`, `diagonal` and the indices all null.
#[derive(Debug, Serialize)]
struct SplitReport {
    vertices: usize,
    winding: String,
    reflex: Option<usize>,
    split: Option<usize>,
    diagonal: Option<[[f64; 2]; 2]>,
    first: Vec<[f64; 2]>,
    second: Option<Vec<[f64; 2]>>,
}

fn xy(p: Point) -> [f64; 2] {
    [p.x, p.y]
}

fn split_report(poly: &Polygon, cfg: GeomCfg) -> Result<SplitReport> {
    let out = split(poly, cfg).context("splitting polygon")?;
    let diagonal = out.diagonal();
    let coords =
        |p: &Polygon| -> Vec<[f64; 2]> { p.vertices().iter().copied().map(xy).collect() };
    let (first, second) = match &out {
        Decomposition::Convex(p) => (coords(p), None),
        Decomposition::Split(s) => (coords(&s.first), Some(coords(&s.second))),
    };
    Ok(SplitReport {
        vertices: poly.len(),
        winding: format!("{:?}", poly.winding()),
        reflex: diagonal.map(|d| d.reflex),
        split: diagonal.map(|d| d.split),
        diagonal: diagonal.map(|d| {
            let (a, b) = d.endpoints(poly);
            [xy(a), xy(b)]
        }),
        first,
        second,
    })
}

fn run_split(input: Option<String>, out: Option<String>, eps_det: f64) -> Result<()> {
    tracing::info!(input = ?input, out = ?out, eps_det, "split");
    let poly = match &input {
        Some(path) => Polygon::new(io::read_vertices(Path::new(path))?)
            .with_context(|| format!("invalid polygon in {path}"))?,
        None => arrowhead()?,
    };
    let cfg = GeomCfg {
        eps_det,
        ..GeomCfg::default()
    };
    let report = split_report(&poly, cfg)?;
    if report.diagonal.is_none() {
        tracing::info!("polygon is convex; passed through unchanged");
    }
    let body = serde_json::to_vec_pretty(&report)?;
    match out {
        Some(out) => {
            let out_path = Path::new(&out);
            io::ensure_parent(out_path)?;
            std::fs::write(out_path, body).with_context(|| format!("writing {out}"))?;
            let params = json!({ "input": input, "eps_det": eps_det });
            provenance::write_sidecar(out_path, provenance::Payload::new("split", params))?;
        }
        None => println!("{}", String::from_utf8_lossy(&body)),
    }
    Ok(())
}

fn run_circle(
    center: Pixel,
    radius: i64,
    segments: Option<usize>,
    out: Option<String>,
) -> Result<()> {
    tracing::info!(cx = center.x, cy = center.y, radius, ?segments, out = ?out, "circle");
    let pixels = midpoint_circle(center, radius)?;
    tracing::info!(pixels = pixels.len(), "rasterized");
    let polyline = segments
        .map(|n| circle_polyline(center.to_point(), radius as f64, n, CircleStyle::Outline))
        .transpose()?;
    match out {
        Some(out) => {
            let out_path = Path::new(&out);
            io::ensure_parent(out_path)?;
            match io::TableFormat::from_path(out_path) {
                Some(format) => io::write_pixels(out_path, &pixels, format)?,
                None => {
                    let doc = circle_json(center, radius, &pixels, polyline.as_deref());
                    std::fs::write(out_path, serde_json::to_vec_pretty(&doc)?)
                        .with_context(|| format!("writing {out}"))?;
                }
            }
            let params = json!({
                "center": [center.x, center.y],
                "radius": radius,
                "segments": segments
            });
            provenance::write_sidecar(out_path, provenance::Payload::new("circle", params))?;
        }
        None => {
            let doc = circle_json(center, radius, &pixels, polyline.as_deref());
            println!("{}", serde_json::to_string_pretty(&doc)?);
        }
    }
    Ok(())
}

fn circle_json(
    center: Pixel,
    radius: i64,
    pixels: &[Pixel],
    polyline: Option<&[Point]>,
) -> serde_json::Value {
    let pixels: Vec<[i64; 2]> = pixels.iter().map(|p| [p.x, p.y]).collect();
    let polyline: Option<Vec<[f64; 2]>> =
        polyline.map(|pts| pts.iter().copied().map(xy).collect());
    json!({
        "center": [center.x, center.y],
        "radius": radius,
        "pixels": pixels,
        "polyline": polyline
    })
}

fn scene_json(segments: usize) -> Result<serde_json::Value> {
    let poly = arrowhead()?;
    let mut report = split_report(&poly, GeomCfg::default())?;
    // first part up, second part down, both to the right of the original
    let shift = |part: &mut Vec<[f64; 2]>, dy: f64| {
        for [x, y] in part.iter_mut() {
            *x += SPLIT_OFFSET_X;
            *y += dy;
        }
    };
    shift(&mut report.first, 50.0);
    if let Some(second) = report.second.as_mut() {
        shift(second, -50.0);
    }
    let circles = demo_circles()
        .iter()
        .map(|c| -> Result<serde_json::Value> {
            let pixels = midpoint_circle(c.center, c.radius)?;
            let polyline =
                circle_polyline(c.center.to_point(), c.radius as f64, segments, c.style)?;
            let mut doc = circle_json(c.center, c.radius, &pixels, Some(polyline.as_slice()));
            doc["style"] = json!(format!("{:?}", c.style));
            Ok(doc)
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(json!({
        "original": poly.vertices().iter().copied().map(xy).collect::<Vec<_>>(),
        "split": report,
        "circles": circles
    }))
}

fn run_scene(segments: usize) -> Result<()> {
    tracing::info!(segments, "scene");
    println!("{}", serde_json::to_string_pretty(&scene_json(segments)?)?);
    Ok(())
}

fn report() -> Result<()> {
    let obj = json!({
        "code_rev": provenance::current_git_rev(),
        "version": polysplit::VERSION,
        "params": {},
        "outputs": []
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
