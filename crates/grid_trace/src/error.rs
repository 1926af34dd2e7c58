//! Error types and result alias for the crate.
//!
//! This module defines [`enum@crate::error::Error`] and the crate-wide [Result] alias. Variants cover
//! invalid configuration, malformed grids, missing or mistyped fields, and
//! out-of-bounds sample requests.
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[non_exhaustive]
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("unknown field '{id}'")]
    UnknownField { id: String },

    #[error("field '{id}' is not a {expected} field")]
    FieldKind { id: String, expected: &'static str },

    #[error("field '{id}' has {got} samples for {points} points")]
    SampleCount {
        id: String,
        points: usize,
        got: usize,
    },

    #[error("cell {cell} references point {index}, but the grid has {points} points")]
    CellOutOfRange {
        cell: usize,
        index: usize,
        points: usize,
    },

    #[error("position {position:?} is outside the grid bounds")]
    OutOfBounds { position: [f64; 3] },

    #[error("grid carries no lattice structure; interpolation requires a uniform grid")]
    NoLattice,

    #[error("{0}")]
    Other(String),
}

impl From<String> for Error {
    fn from(value: String) -> Self {
        Error::Other(value)
    }
}

impl From<&str> for Error {
    fn from(value: &str) -> Self {
        Error::Other(value.to_owned())
    }
}
