//! Axis-aligned bounds of a grid's coordinate domain.
use glam::DVec3;

/// Axis-aligned bounding box over a set of point coordinates.
///
/// Containment is inclusive on every face; a point exactly on the boundary
/// is inside. Planar grids have a degenerate axis with `min == max`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Aabb {
    /// Minimum corner.
    pub min: DVec3,
    /// Maximum corner.
    pub max: DVec3,
}

impl Aabb {
    /// Computes the bounds of a non-empty point set. Returns `None` for an
    /// empty slice.
    pub fn from_points(points: &[DVec3]) -> Option<Self> {
        let first = *points.first()?;
        let (min, max) = points
            .iter()
            .fold((first, first), |(lo, hi), p| (lo.min(*p), hi.max(*p)));
        Some(Self { min, max })
    }

    /// Inclusive containment test.
    #[inline]
    pub fn contains(&self, p: DVec3) -> bool {
        p.cmpge(self.min).all() && p.cmple(self.max).all()
    }

    /// Edge lengths of the box.
    pub fn extent(&self) -> DVec3 {
        self.max - self.min
    }
}
