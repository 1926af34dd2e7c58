//! Trilinear interpolation of vector fields over uniform lattices.
use glam::DVec3;

use crate::error::{Error, Result};
use crate::grid::{Aabb, GridField, Lattice};
use crate::sample::VectorSampler;

/// Samples a named vector field of a uniform grid by trilinear blending of
/// the lattice points surrounding the query position.
///
/// Degenerate axes (extent 1) contribute no interpolation weight, so a
/// planar lattice is sampled bilinearly and a line linearly. Positions on
/// the upper domain boundary resolve to the last cell.
pub struct TrilinearSampler<'a> {
    values: &'a [DVec3],
    lattice: Lattice,
    bounds: Aabb,
}

impl<'a> TrilinearSampler<'a> {
    /// Borrows `grid` and its vector field `field_id`.
    ///
    /// Fails when the grid carries no lattice structure, the field is
    /// unknown, or the field is scalar.
    pub fn try_new(grid: &'a GridField, field_id: &str) -> Result<Self> {
        let lattice = *grid.lattice().ok_or(Error::NoLattice)?;
        let values = grid.vector_field(field_id)?;
        Ok(Self {
            values,
            lattice,
            bounds: grid.bounds(),
        })
    }
}

impl VectorSampler for TrilinearSampler<'_> {
    fn sample(&self, p: DVec3) -> Result<DVec3> {
        if !self.bounds.contains(p) {
            return Err(Error::OutOfBounds {
                position: p.to_array(),
            });
        }

        let lat = &self.lattice;
        let (i0, i1, tx) = axis_cell(lat.dims[0], lat.origin.x, lat.spacing.x, p.x);
        let (j0, j1, ty) = axis_cell(lat.dims[1], lat.origin.y, lat.spacing.y, p.y);
        let (k0, k1, tz) = axis_cell(lat.dims[2], lat.origin.z, lat.spacing.z, p.z);

        let at = |i: usize, j: usize, k: usize| self.values[lat.point_index(i, j, k)];

        // lerp x, then y, then z
        let c00 = at(i0, j0, k0).lerp(at(i1, j0, k0), tx);
        let c10 = at(i0, j1, k0).lerp(at(i1, j1, k0), tx);
        let c01 = at(i0, j0, k1).lerp(at(i1, j0, k1), tx);
        let c11 = at(i0, j1, k1).lerp(at(i1, j1, k1), tx);

        let c0 = c00.lerp(c10, ty);
        let c1 = c01.lerp(c11, ty);

        Ok(c0.lerp(c1, tz))
    }
}

/// Resolves one axis of the query into the bracketing lattice indices and
/// the interpolation weight between them.
#[inline]
fn axis_cell(len: usize, origin: f64, spacing: f64, coord: f64) -> (usize, usize, f64) {
    if len < 2 {
        return (0, 0, 0.0);
    }
    let u = (coord - origin) / spacing;
    let cell = (u.floor() as isize).clamp(0, len as isize - 2) as usize;
    let t = (u - cell as f64).clamp(0.0, 1.0);
    (cell, cell + 1, t)
}
