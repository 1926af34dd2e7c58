//! Polyline assembly for external writers.
//!
//! [`PolylineDescription`] is the boundary type handed to out-of-scope
//! collaborators (serializers, renderers): a flat point list plus 2-point
//! line connectivity. Assembly is pure data transformation.
use glam::DVec3;

use crate::contour::Segment;
use crate::streamline::Streamline;

/// Points plus 2-point line connectivity, ready for an external writer.
#[non_exhaustive]
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PolylineDescription {
    /// Point coordinates in storage order.
    pub points: Vec<DVec3>,
    /// Index pairs into `points`, one per line.
    pub lines: Vec<[usize; 2]>,
}

impl PolylineDescription {
    /// Creates an empty description.
    pub fn new() -> Self {
        Self::default()
    }

    /// Assembles a streamline as one connected run: `n` points joined by
    /// `n - 1` consecutive `(i - 1, i)` pairs.
    pub fn from_streamline(streamline: &Streamline) -> Self {
        let points = streamline.points.clone();
        let lines = (1..points.len()).map(|i| [i - 1, i]).collect();
        Self { points, lines }
    }

    /// Assembles contour segments as independent 2-point lines; no
    /// connectivity is shared across segments.
    pub fn from_segments(segments: &[Segment]) -> Self {
        let mut points = Vec::with_capacity(segments.len() * 2);
        let mut lines = Vec::with_capacity(segments.len());
        for seg in segments {
            let base = points.len();
            points.push(seg.a);
            points.push(seg.b);
            lines.push([base, base + 1]);
        }
        Self { points, lines }
    }

    /// Number of points.
    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    /// Number of lines.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Returns `true` if the description carries no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Follows the connectivity of a single connected run and returns the
    /// ordered point sequence, or `None` when the lines do not form one
    /// run over the points in storage order.
    pub fn point_run(&self) -> Option<Vec<DVec3>> {
        if self.points.is_empty() || self.lines.len() + 1 != self.points.len() {
            return None;
        }
        for (i, line) in self.lines.iter().enumerate() {
            if *line != [i, i + 1] {
                return None;
            }
        }
        Some(self.points.clone())
    }

    /// Points converted for interop with external writers.
    pub fn mint_points(&self) -> Vec<mint::Point3<f64>> {
        self.points.iter().map(|p| mint::Point3::from(*p)).collect()
    }
}
