//! Isocontour extraction over quad cells.
//!
//! Walks every quad cell of a grid, finds where a scalar field crosses the
//! isovalue along the cell's edges, and emits one line segment per cell with
//! exactly two crossings. Segments are independent; no connectivity is
//! inferred between cells.
use glam::DVec3;
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::grid::GridField;

/// Edge enumeration order over a quad cell's stored point indices.
///
/// The order is a declared constant, not derived from cell geometry; the
/// emitted crossings (and therefore saddle truncation) depend on edges being
/// tested exactly in this sequence.
pub const EDGE_ORDER: [(usize, usize); 4] = [(0, 1), (1, 3), (3, 2), (2, 0)];

/// Crossings kept per cell. Saddle cells (more than two true crossings) are
/// truncated to the first two found in edge order; they are not resolved.
pub const MAX_CROSSINGS_PER_CELL: usize = 2;

/// Configuration for isocontour extraction.
#[non_exhaustive]
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ContourConfig {
    /// Scalar threshold the contour follows.
    pub isovalue: f64,
}

impl ContourConfig {
    /// Creates a configuration for the given isovalue.
    pub fn new(isovalue: f64) -> Self {
        Self { isovalue }
    }

    /// Validates the configuration, returning an error if invalid.
    pub fn validate(&self) -> Result<()> {
        if !self.isovalue.is_finite() {
            return Err(Error::InvalidConfig("isovalue must be finite".into()));
        }
        Ok(())
    }
}

/// A line segment of an extracted isocontour. Endpoints carry z = 0.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Segment {
    pub a: DVec3,
    pub b: DVec3,
}

/// Extracts the isocontour of the named scalar field as an unordered list of
/// disjoint segments.
///
/// Each cell's four edges are tested in [`EDGE_ORDER`]; an edge crosses when
/// its endpoint values straddle the isovalue (one strictly above, one at or
/// below). The crossing position interpolates x and y linearly along the
/// edge. Cells with exactly two crossings emit one segment; cells with zero
/// or one emit nothing.
pub fn extract_contour(
    grid: &GridField,
    field_id: &str,
    config: &ContourConfig,
) -> Result<Vec<Segment>> {
    config.validate()?;
    let values = grid.scalar_field(field_id)?;

    if grid.cells().is_empty() {
        warn!("Grid has no quad cells; contour is empty.");
        return Ok(Vec::new());
    }

    let iso = config.isovalue;
    let points = grid.points();
    let mut segments = Vec::new();

    for cell in grid.cells() {
        let mut crossings = [DVec3::ZERO; MAX_CROSSINGS_PER_CELL];
        let mut found = 0;

        for (ea, eb) in EDGE_ORDER {
            if found == MAX_CROSSINGS_PER_CELL {
                break;
            }
            let (ia, ib) = (cell[ea], cell[eb]);
            let (va, vb) = (values[ia], values[ib]);
            if straddles(va, vb, iso) {
                // a straddling edge always has va != vb
                let t = (iso - va) / (vb - va);
                let (pa, pb) = (points[ia], points[ib]);
                crossings[found] = DVec3::new(
                    pa.x + t * (pb.x - pa.x),
                    pa.y + t * (pb.y - pa.y),
                    0.0,
                );
                found += 1;
            }
        }

        if found == MAX_CROSSINGS_PER_CELL {
            segments.push(Segment {
                a: crossings[0],
                b: crossings[1],
            });
        }
    }

    debug!(
        cells = grid.cell_count(),
        segments = segments.len(),
        isovalue = iso,
        "extracted isocontour"
    );
    Ok(segments)
}

/// Straddle test: one endpoint strictly above the isovalue, the other at or
/// below it, in either direction. Edges with both endpoints exactly on the
/// isovalue do not cross.
#[inline]
fn straddles(va: f64, vb: f64, iso: f64) -> bool {
    (va > iso && vb <= iso) || (va <= iso && vb > iso)
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::{RngExt, SeedableRng};

    use super::*;

    fn single_cell_grid(values: [f64; 4]) -> GridField {
        GridField::uniform([2, 2, 1], DVec3::ZERO, DVec3::ONE)
            .unwrap()
            .with_scalar_field("pressure", values.to_vec())
            .unwrap()
    }

    #[test]
    fn hot_corner_crosses_at_midpoints() {
        // One corner at 10, the rest at 0, isovalue 5: the two crossed edges
        // interpolate at t = 0.5.
        let grid = single_cell_grid([0.0, 0.0, 0.0, 10.0]);
        let segments = extract_contour(&grid, "pressure", &ContourConfig::new(5.0)).unwrap();
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].a, DVec3::new(1.0, 0.5, 0.0));
        assert_eq!(segments[0].b, DVec3::new(0.5, 1.0, 0.0));
    }

    #[test]
    fn uncrossed_cells_emit_nothing() {
        let below = single_cell_grid([0.0, 1.0, 2.0, 3.0]);
        assert!(extract_contour(&below, "pressure", &ContourConfig::new(5.0))
            .unwrap()
            .is_empty());

        let above = single_cell_grid([6.0, 7.0, 8.0, 9.0]);
        assert!(extract_contour(&above, "pressure", &ContourConfig::new(5.0))
            .unwrap()
            .is_empty());
    }

    #[test]
    fn crossing_parameter_is_exact() {
        // Edge (p00, p10) runs from value 2 to value 12; isovalue 4 crosses
        // at t = 0.2.
        let grid = single_cell_grid([2.0, 12.0, 8.0, 12.0]);
        let segments = extract_contour(&grid, "pressure", &ContourConfig::new(4.0)).unwrap();
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].a, DVec3::new(0.2, 0.0, 0.0));
        // edge (p01, p00) runs from 8 down to 2, crossing at t = 2/3 of the
        // way from p01, i.e. y = 1/3
        assert!((segments[0].b.x - 0.0).abs() < 1e-12);
        assert!((segments[0].b.y - 1.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn saddle_cell_keeps_first_two_crossings_in_edge_order() {
        // Diagonal pattern: all four edges straddle, but only the first two
        // in edge order survive the cap.
        let grid = single_cell_grid([10.0, 0.0, 0.0, 10.0]);
        let segments = extract_contour(&grid, "pressure", &ContourConfig::new(5.0)).unwrap();
        assert_eq!(segments.len(), 1);
        // edge (0-1): p00 -> p10, edge (1-3): p10 -> p11
        assert_eq!(segments[0].a, DVec3::new(0.5, 0.0, 0.0));
        assert_eq!(segments[0].b, DVec3::new(1.0, 0.5, 0.0));
    }

    #[test]
    fn edge_on_isovalue_does_not_cross() {
        // Two endpoints exactly on the isovalue: the edge must not count as
        // crossing, and the cell produces no segment.
        let grid = single_cell_grid([5.0, 5.0, 0.0, 0.0]);
        let segments = extract_contour(&grid, "pressure", &ContourConfig::new(5.0)).unwrap();
        assert!(segments.is_empty());
    }

    #[test]
    fn vertex_on_isovalue_counts_as_below() {
        // A vertex exactly on the isovalue pairs with a strictly-above
        // neighbor to form a crossing at t = 0.
        let grid = single_cell_grid([5.0, 10.0, 0.0, 0.0]);
        let segments = extract_contour(&grid, "pressure", &ContourConfig::new(5.0)).unwrap();
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].a, DVec3::new(0.0, 0.0, 0.0));
    }

    #[test]
    fn missing_field_is_fatal() {
        let grid = single_cell_grid([0.0; 4]);
        assert!(matches!(
            extract_contour(&grid, "temperature", &ContourConfig::new(0.0)),
            Err(Error::UnknownField { .. })
        ));
    }

    #[test]
    fn non_finite_isovalue_is_rejected() {
        let grid = single_cell_grid([0.0; 4]);
        assert!(matches!(
            extract_contour(&grid, "pressure", &ContourConfig::new(f64::NAN)),
            Err(Error::InvalidConfig(_))
        ));
    }

    #[test]
    fn cell_less_grid_yields_empty_contour() {
        let grid = GridField::uniform([2, 2, 2], DVec3::ZERO, DVec3::ONE)
            .unwrap()
            .with_scalar_field("pressure", vec![0.0; 8])
            .unwrap();
        assert!(extract_contour(&grid, "pressure", &ContourConfig::new(0.5))
            .unwrap()
            .is_empty());
    }

    #[test]
    fn random_field_endpoints_lie_on_grid_edges() {
        let mut rng = StdRng::seed_from_u64(7);
        let grid = GridField::uniform([9, 9, 1], DVec3::ZERO, DVec3::splat(0.5)).unwrap();
        let values: Vec<f64> = (0..grid.point_count())
            .map(|_| rng.random_range(-1.0..1.0))
            .collect();
        let grid = grid.with_scalar_field("noise", values).unwrap();

        let segments = extract_contour(&grid, "noise", &ContourConfig::new(0.1)).unwrap();
        assert!(!segments.is_empty());

        let on_grid_line = |c: f64| {
            let u = c / 0.5;
            (u - u.round()).abs() < 1e-9
        };
        for seg in &segments {
            for p in [seg.a, seg.b] {
                // every crossing sits on an axis-aligned cell edge
                assert!(on_grid_line(p.x) || on_grid_line(p.y), "stray point {p:?}");
                assert_eq!(p.z, 0.0);
                assert!((0.0..=4.0).contains(&p.x) && (0.0..=4.0).contains(&p.y));
            }
        }
    }
}
