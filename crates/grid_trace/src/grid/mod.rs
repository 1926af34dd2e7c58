//! Grid data model: point coordinates, quad cells, and named per-point fields.
//!
//! [`GridField`] is the read-only input to both extraction pipelines. It is
//! built once, either from explicit parts or as a uniform lattice, and never
//! mutated afterwards, so samplers may read it concurrently.
pub mod bounds;
pub mod lattice;

pub use bounds::Aabb;
pub use lattice::Lattice;

use std::collections::HashMap;

use glam::DVec3;
use tracing::debug;

use crate::error::{Error, Result};

pub type FieldId = String;

/// Per-point samples for one named field: one real value per point for
/// scalar fields, one 3-vector per point for vector fields.
#[derive(Clone, Debug, PartialEq)]
pub enum FieldValues {
    Scalar(Vec<f64>),
    Vector(Vec<DVec3>),
}

impl FieldValues {
    /// Number of samples carried.
    pub fn len(&self) -> usize {
        match self {
            FieldValues::Scalar(v) => v.len(),
            FieldValues::Vector(v) => v.len(),
        }
    }

    /// Returns `true` if no samples are carried.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Read-only quadrilateral-cell grid with named per-point samples.
///
/// Every cell is a quadruple of point indices in stored (non-geometric)
/// order. Uniform grids additionally carry a [`Lattice`] describing their
/// regular structure, which interpolation requires.
#[derive(Clone, Debug)]
pub struct GridField {
    points: Vec<DVec3>,
    cells: Vec<[usize; 4]>,
    fields: HashMap<FieldId, FieldValues>,
    bounds: Aabb,
    lattice: Option<Lattice>,
}

impl GridField {
    /// Builds a grid from explicit point coordinates and quad cells.
    ///
    /// Fails if the point set is empty or any cell references a point index
    /// out of range.
    pub fn from_parts(points: Vec<DVec3>, cells: Vec<[usize; 4]>) -> Result<Self> {
        let bounds = Aabb::from_points(&points)
            .ok_or_else(|| Error::InvalidConfig("grid has no points".into()))?;
        for (cell, indices) in cells.iter().enumerate() {
            for &index in indices {
                if index >= points.len() {
                    return Err(Error::CellOutOfRange {
                        cell,
                        index,
                        points: points.len(),
                    });
                }
            }
        }
        Ok(Self {
            points,
            cells,
            fields: HashMap::new(),
            bounds,
            lattice: None,
        })
    }

    /// Builds a uniform lattice grid with image-data point layout (x varies
    /// fastest, then y, then z).
    ///
    /// A planar lattice (`dims[2] == 1`) also derives its quad cells, each
    /// stored in pixel order `[p00, p10, p01, p11]`. Volumetric lattices
    /// carry no quad cells; they serve interpolation and tracing only.
    pub fn uniform(dims: [usize; 3], origin: DVec3, spacing: DVec3) -> Result<Self> {
        if dims.iter().any(|&n| n == 0) {
            return Err(Error::InvalidConfig(
                "lattice dims must be >= 1 on every axis".into(),
            ));
        }
        if !(spacing.is_finite() && spacing.cmpgt(DVec3::ZERO).all()) {
            return Err(Error::InvalidConfig(
                "lattice spacing must be positive and finite".into(),
            ));
        }

        let lattice = Lattice {
            dims,
            origin,
            spacing,
        };
        let [nx, ny, nz] = dims;

        let mut points = Vec::with_capacity(lattice.point_count());
        for k in 0..nz {
            for j in 0..ny {
                for i in 0..nx {
                    points.push(lattice.position(i, j, k));
                }
            }
        }

        let mut cells = Vec::new();
        if lattice.is_planar_xy() {
            cells.reserve((nx - 1) * (ny - 1));
            for j in 0..ny - 1 {
                for i in 0..nx - 1 {
                    cells.push([
                        lattice.point_index(i, j, 0),
                        lattice.point_index(i + 1, j, 0),
                        lattice.point_index(i, j + 1, 0),
                        lattice.point_index(i + 1, j + 1, 0),
                    ]);
                }
            }
        }

        debug!(
            points = points.len(),
            cells = cells.len(),
            "built uniform grid"
        );

        let bounds = Aabb {
            min: lattice.origin,
            max: lattice.position(nx - 1, ny - 1, nz - 1),
        };
        Ok(Self {
            points,
            cells,
            fields: HashMap::new(),
            bounds,
            lattice: Some(lattice),
        })
    }

    /// Attaches a scalar field, consuming and returning the grid.
    pub fn with_scalar_field(mut self, id: impl Into<FieldId>, values: Vec<f64>) -> Result<Self> {
        let id = id.into();
        self.check_sample_count(&id, values.len())?;
        self.fields.insert(id, FieldValues::Scalar(values));
        Ok(self)
    }

    /// Attaches a vector field, consuming and returning the grid.
    pub fn with_vector_field(mut self, id: impl Into<FieldId>, values: Vec<DVec3>) -> Result<Self> {
        let id = id.into();
        self.check_sample_count(&id, values.len())?;
        self.fields.insert(id, FieldValues::Vector(values));
        Ok(self)
    }

    fn check_sample_count(&self, id: &str, got: usize) -> Result<()> {
        if got != self.points.len() {
            return Err(Error::SampleCount {
                id: id.to_owned(),
                points: self.points.len(),
                got,
            });
        }
        Ok(())
    }

    /// Point coordinates in storage order.
    pub fn points(&self) -> &[DVec3] {
        &self.points
    }

    /// Quad cells as quadruples of point indices.
    pub fn cells(&self) -> &[[usize; 4]] {
        &self.cells
    }

    /// Number of points.
    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    /// Number of quad cells.
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Axis-aligned bounds of the coordinate domain.
    pub fn bounds(&self) -> Aabb {
        self.bounds
    }

    /// Regular structure, present for grids built with [`GridField::uniform`].
    pub fn lattice(&self) -> Option<&Lattice> {
        self.lattice.as_ref()
    }

    /// Inclusive containment test against the grid bounds.
    #[inline]
    pub fn contains(&self, p: DVec3) -> bool {
        self.bounds.contains(p)
    }

    /// Raw samples of a named field, if present.
    pub fn field(&self, id: &str) -> Option<&FieldValues> {
        self.fields.get(id)
    }

    /// Scalar samples of a named field.
    ///
    /// Fails when the field is missing or is a vector field; a missing field
    /// is a configuration error, never defaulted.
    pub fn scalar_field(&self, id: &str) -> Result<&[f64]> {
        match self.fields.get(id) {
            Some(FieldValues::Scalar(values)) => Ok(values),
            Some(FieldValues::Vector(_)) => Err(Error::FieldKind {
                id: id.to_owned(),
                expected: "scalar",
            }),
            None => Err(Error::UnknownField { id: id.to_owned() }),
        }
    }

    /// Vector samples of a named field.
    pub fn vector_field(&self, id: &str) -> Result<&[DVec3]> {
        match self.fields.get(id) {
            Some(FieldValues::Vector(values)) => Ok(values),
            Some(FieldValues::Scalar(_)) => Err(Error::FieldKind {
                id: id.to_owned(),
                expected: "vector",
            }),
            None => Err(Error::UnknownField { id: id.to_owned() }),
        }
    }
}
