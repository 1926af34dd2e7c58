//! Shared helpers for the example binaries: tracing setup and a small PNG
//! line rasterizer standing in for the external polyline renderer.
use anyhow::Context;
use glam::{DVec2, DVec3};
use grid_trace::prelude::PolylineDescription;
use image::{Rgb, RgbImage};
use tracing_subscriber::EnvFilter;

/// Installs a fmt subscriber honoring `RUST_LOG`, defaulting to `info`.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
}

/// Axis-aligned plane the 3D polyline points are projected onto.
#[derive(Clone, Copy, Debug)]
pub enum Projection {
    Xy,
    Xz,
}

impl Projection {
    fn apply(self, p: DVec3) -> DVec2 {
        match self {
            Projection::Xy => DVec2::new(p.x, p.y),
            Projection::Xz => DVec2::new(p.x, p.z),
        }
    }
}

/// Configuration for rasterizing polylines into a PNG.
#[derive(Clone, Debug)]
pub struct RenderConfig {
    /// Output image size in pixels.
    pub image_size: (u32, u32),
    /// Lower corner of the rendered domain window.
    pub domain_min: DVec2,
    /// Extent of the rendered domain window.
    pub domain_extent: DVec2,
    /// Background color.
    pub background: [u8; 3],
    /// Line color.
    pub line_color: [u8; 3],
}

impl RenderConfig {
    pub fn new(image_size: (u32, u32), domain_min: DVec2, domain_extent: DVec2) -> Self {
        Self {
            image_size,
            domain_min,
            domain_extent,
            background: [255, 255, 255],
            line_color: [0, 160, 0],
        }
    }

    pub fn with_background(mut self, background: [u8; 3]) -> Self {
        self.background = background;
        self
    }

    pub fn with_line_color(mut self, line_color: [u8; 3]) -> Self {
        self.line_color = line_color;
        self
    }

    /// Maps a domain position to pixel coordinates, y up.
    fn to_pixel(&self, p: DVec2) -> (f64, f64) {
        let u = (p.x - self.domain_min.x) / self.domain_extent.x;
        let v = (p.y - self.domain_min.y) / self.domain_extent.y;
        (
            u * (self.image_size.0.saturating_sub(1)) as f64,
            (1.0 - v) * (self.image_size.1.saturating_sub(1)) as f64,
        )
    }
}

/// Rasterizes every line of `desc` into a PNG at `path`.
pub fn render_polylines_to_png(
    desc: &PolylineDescription,
    projection: Projection,
    config: &RenderConfig,
    path: &str,
) -> anyhow::Result<()> {
    let (w, h) = config.image_size;
    let mut img = RgbImage::from_pixel(w, h, Rgb(config.background));

    for line in &desc.lines {
        let a = config.to_pixel(projection.apply(desc.points[line[0]]));
        let b = config.to_pixel(projection.apply(desc.points[line[1]]));
        draw_line(&mut img, a, b, Rgb(config.line_color));
    }

    img.save(path)
        .with_context(|| format!("writing image '{path}'"))?;
    Ok(())
}

fn draw_line(img: &mut RgbImage, a: (f64, f64), b: (f64, f64), color: Rgb<u8>) {
    let (dx, dy) = (b.0 - a.0, b.1 - a.1);
    let steps = dx.abs().max(dy.abs()).ceil().max(1.0) as usize;
    for i in 0..=steps {
        let t = i as f64 / steps as f64;
        let x = a.0 + t * dx;
        let y = a.1 + t * dy;
        if x >= 0.0 && y >= 0.0 && (x as u32) < img.width() && (y as u32) < img.height() {
            img.put_pixel(x as u32, y as u32, color);
        }
    }
}
