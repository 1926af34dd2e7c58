//! Field sampling at arbitrary positions.
//!
//! This module defines the [`VectorSampler`] seam between grids and the
//! tracing pipeline. The built-in [`TrilinearSampler`] interpolates a named
//! vector field over a uniform lattice; analytic fields can implement the
//! trait directly.
pub mod trilinear;

pub use trilinear::TrilinearSampler;

use glam::DVec3;

use crate::error::Result;

/// Trait for vector fields sampled at a position in domain coordinates.
///
/// Sampling fails with [`Error::OutOfBounds`](crate::error::Error::OutOfBounds)
/// outside the field's domain; implementations never extrapolate.
pub trait VectorSampler: Send + Sync {
    fn sample(&self, p: DVec3) -> Result<DVec3>;
}
