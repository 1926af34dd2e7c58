use glam::{DVec2, DVec3};
use grid_trace::prelude::*;
use grid_trace_examples::{init_tracing, render_polylines_to_png, Projection, RenderConfig};
use tracing::info;

fn main() -> anyhow::Result<()> {
    init_tracing();

    // Volumetric lattice over [-10, 10]^2 x [0, 20] with a tornado-like
    // field: a swirl around the z axis tightening with height, plus updraft.
    let side = 48usize;
    let grid = GridField::uniform(
        [side, side, side],
        DVec3::new(-10.0, -10.0, 0.0),
        DVec3::splat(20.0 / (side - 1) as f64),
    )?;
    let core = DVec2::new(2.0, 1.0);
    let values: Vec<DVec3> = grid
        .points()
        .iter()
        .map(|p| {
            let twist = 1.0 + 0.05 * p.z;
            DVec3::new(-(p.y - core.y) * twist, (p.x - core.x) * twist, 1.5)
        })
        .collect();
    let grid = grid.with_vector_field("velocity", values)?;

    // Seed mid-height, off the vortex core, so the trace spirals visibly.
    let seed = DVec3::new(0.0, 0.0, 7.0);
    let config = TraceConfig::new().with_step_size(0.05).with_max_steps(1000);

    let line = trace(&grid, "velocity", seed, &config)?;
    info!(points = line.len(), "traced streamline");

    let desc = PolylineDescription::from_streamline(&line);
    let config = RenderConfig::new(
        (800, 800),
        DVec2::new(-10.0, 0.0),
        DVec2::new(20.0, 20.0),
    )
    .with_background([16, 16, 16])
    .with_line_color([0, 255, 0]);

    let out = "streamline-tornado.png";
    render_polylines_to_png(&desc, Projection::Xz, &config, out)?;
    info!(out, "wrote streamline image");

    Ok(())
}
