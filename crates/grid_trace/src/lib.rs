#![forbid(unsafe_code)]
//! grid_trace: Isocontour extraction and streamline tracing over structured grid fields.
//!
//! Modules:
//! - grid: read-only quad-cell grids with named per-point scalar/vector samples
//! - sample: field interpolation at arbitrary positions (trilinear over uniform lattices)
//! - contour: per-cell isocontour extraction with a fixed edge enumeration order
//! - streamline: bidirectional RK4 trajectory integration
//! - polyline: assembly of either result for external writers
//!
//! Both pipelines are pure: they consume an immutable [`grid::GridField`]
//! and produce geometry; loading grids and serializing or rendering the
//! output belong to external collaborators.
pub mod contour;
pub mod error;
pub mod grid;
pub mod polyline;
pub mod sample;
pub mod streamline;

/// Convenient re-exports for common types. Import with `use grid_trace::prelude::*;`.
pub mod prelude {
    pub use crate::contour::{extract_contour, ContourConfig, Segment, MAX_CROSSINGS_PER_CELL};
    pub use crate::error::{Error, Result};
    pub use crate::grid::{Aabb, FieldId, FieldValues, GridField, Lattice};
    pub use crate::polyline::PolylineDescription;
    pub use crate::sample::{TrilinearSampler, VectorSampler};
    pub use crate::streamline::{integrate, trace, Direction, Streamline, TraceConfig};
}
