//! Regular lattice structure underlying uniform grids.
use glam::DVec3;

/// Regular point lattice with image-data layout: points are stored with x
/// varying fastest, then y, then z.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Lattice {
    /// Point counts per axis.
    pub dims: [usize; 3],
    /// Position of the first lattice point.
    pub origin: DVec3,
    /// Point-to-point distance per axis.
    pub spacing: DVec3,
}

impl Lattice {
    /// Total number of lattice points.
    pub fn point_count(&self) -> usize {
        self.dims[0] * self.dims[1] * self.dims[2]
    }

    /// Flat point index for lattice coordinates `(i, j, k)`.
    #[inline]
    pub fn point_index(&self, i: usize, j: usize, k: usize) -> usize {
        (k * self.dims[1] + j) * self.dims[0] + i
    }

    /// World position of the lattice point `(i, j, k)`.
    #[inline]
    pub fn position(&self, i: usize, j: usize, k: usize) -> DVec3 {
        self.origin
            + DVec3::new(
                i as f64 * self.spacing.x,
                j as f64 * self.spacing.y,
                k as f64 * self.spacing.z,
            )
    }

    /// Whether the lattice is a single xy-plane of quad cells.
    pub fn is_planar_xy(&self) -> bool {
        self.dims[2] == 1 && self.dims[0] > 1 && self.dims[1] > 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_lattice() -> Lattice {
        Lattice {
            dims: [3, 4, 2],
            origin: DVec3::new(-1.0, 0.0, 2.0),
            spacing: DVec3::new(0.5, 1.0, 2.0),
        }
    }

    #[test]
    fn point_index_is_x_fastest() {
        let lat = sample_lattice();
        assert_eq!(lat.point_index(0, 0, 0), 0);
        assert_eq!(lat.point_index(1, 0, 0), 1);
        assert_eq!(lat.point_index(0, 1, 0), 3);
        assert_eq!(lat.point_index(0, 0, 1), 12);
        assert_eq!(lat.point_index(2, 3, 1), lat.point_count() - 1);
    }

    #[test]
    fn position_scales_by_spacing() {
        let lat = sample_lattice();
        assert_eq!(lat.position(0, 0, 0), lat.origin);
        assert_eq!(lat.position(2, 1, 1), DVec3::new(0.0, 1.0, 4.0));
    }

    #[test]
    fn planar_detection() {
        let mut lat = sample_lattice();
        assert!(!lat.is_planar_xy());
        lat.dims = [3, 4, 1];
        assert!(lat.is_planar_xy());
        lat.dims = [1, 4, 1];
        assert!(!lat.is_planar_xy());
    }
}
