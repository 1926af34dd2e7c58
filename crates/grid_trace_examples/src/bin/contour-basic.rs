use anyhow::Context;
use glam::{DVec2, DVec3};
use grid_trace::prelude::*;
use grid_trace_examples::{init_tracing, render_polylines_to_png, Projection, RenderConfig};
use tracing::info;

fn main() -> anyhow::Result<()> {
    init_tracing();

    // Isovalue is the only runtime parameter; defaults to the interesting
    // mid-range of the analytic field below.
    let isovalue: f64 = match std::env::args().nth(1) {
        Some(arg) => arg.parse().context("isovalue must be a real number")?,
        None => 0.25,
    };

    // Planar grid over [-1, 1]^2 with a wavy analytic pressure field.
    let side = 129usize;
    let grid = GridField::uniform(
        [side, side, 1],
        DVec3::new(-1.0, -1.0, 0.0),
        DVec3::splat(2.0 / (side - 1) as f64),
    )?;
    let values: Vec<f64> = grid
        .points()
        .iter()
        .map(|p| (3.0 * p.x).sin() * (3.0 * p.y).cos() + 0.5 * p.x * p.y)
        .collect();
    let grid = grid.with_scalar_field("pressure", values)?;

    let segments = extract_contour(&grid, "pressure", &ContourConfig::new(isovalue))?;
    info!(
        cells = grid.cell_count(),
        segments = segments.len(),
        isovalue,
        "contour extracted"
    );

    let desc = PolylineDescription::from_segments(&segments);
    let config = RenderConfig::new(
        (800, 800),
        DVec2::new(-1.0, -1.0),
        DVec2::new(2.0, 2.0),
    )
    .with_line_color([20, 20, 200]);

    let out = "contour-basic.png";
    render_polylines_to_png(&desc, Projection::Xy, &config, out)?;
    info!(out, "wrote contour image");

    Ok(())
}
