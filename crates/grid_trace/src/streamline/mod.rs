//! Streamline tracing through a vector field with RK4 integration.
//!
//! A trajectory is integrated forward and backward from a seed with
//! classical fourth-order Runge-Kutta steps, sampling the field through a
//! [`VectorSampler`]. Leaving the domain ends integration for that
//! direction; it is the normal termination signal, not an error.
use glam::DVec3;
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::grid::{Aabb, GridField};
use crate::sample::{TrilinearSampler, VectorSampler};

/// Configuration for streamline tracing.
#[non_exhaustive]
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TraceConfig {
    /// Integration step size in domain units.
    pub step_size: f64,
    /// Step limit per direction.
    pub max_steps: usize,
}

impl Default for TraceConfig {
    fn default() -> Self {
        Self {
            step_size: 0.05,
            max_steps: 1000,
        }
    }
}

impl TraceConfig {
    /// Creates a configuration with the default step size and step limit.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the step size.
    pub fn with_step_size(mut self, step_size: f64) -> Self {
        self.step_size = step_size;
        self
    }

    /// Sets the per-direction step limit.
    pub fn with_max_steps(mut self, max_steps: usize) -> Self {
        self.max_steps = max_steps;
        self
    }

    /// Validates the configuration, returning an error if invalid.
    pub fn validate(&self) -> Result<()> {
        if !(self.step_size.is_finite() && self.step_size > 0.0) {
            return Err(Error::InvalidConfig(
                "step_size must be positive and finite".into(),
            ));
        }
        Ok(())
    }
}

/// Integration direction along the field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    Forward,
    Backward,
}

impl Direction {
    /// Sign applied to every RK4 stage: +1 forward, -1 backward.
    #[inline]
    pub fn sign(self) -> f64 {
        match self {
            Direction::Forward => 1.0,
            Direction::Backward => -1.0,
        }
    }
}

/// An ordered trajectory through a seed point: reversed backward points,
/// then the seed, then forward points.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Streamline {
    /// Trajectory points in temporal order.
    pub points: Vec<DVec3>,
}

impl Streamline {
    /// Number of trajectory points, seed included.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` if the trajectory carries no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Traces the streamline of the named vector field through `seed`.
///
/// Builds a trilinear sampler over the grid (construction errors are fatal),
/// integrates forward and backward independently, and concatenates
/// `[B_n .. B_1, seed, F_1 .. F_m]`. Both directions terminate normally on
/// either the step limit or a boundary exit, so the result is always a valid
/// (possibly seed-only) streamline.
pub fn trace(
    grid: &GridField,
    field_id: &str,
    seed: DVec3,
    config: &TraceConfig,
) -> Result<Streamline> {
    config.validate()?;
    let sampler = TrilinearSampler::try_new(grid, field_id)?;
    let bounds = grid.bounds();

    if !bounds.contains(seed) {
        warn!("Seed {:?} is outside the grid bounds.", seed.to_array());
        return Ok(Streamline { points: vec![seed] });
    }

    let forward = integrate(&sampler, &bounds, seed, config, Direction::Forward);
    let mut points = integrate(&sampler, &bounds, seed, config, Direction::Backward);
    points.reverse();

    debug!(
        backward = points.len(),
        forward = forward.len(),
        "traced streamline"
    );

    points.push(seed);
    points.extend(forward);
    Ok(Streamline { points })
}

/// Integrates a single direction with RK4, returning the points in step
/// order (the seed itself is not included).
///
/// Each step samples the four RK4 stages and combines them into
/// `next = p + (k1 + 2*k2 + 2*k3 + k4) * (s*h/6)`. Stage positions are
/// sampled without a prior bounds check; a sampler failure at any stage ends
/// the integration, as does a `next` outside `bounds`. Neither is an error:
/// leaving the domain is how a trajectory ends.
pub fn integrate(
    sampler: &dyn VectorSampler,
    bounds: &Aabb,
    seed: DVec3,
    config: &TraceConfig,
    direction: Direction,
) -> Vec<DVec3> {
    let s = direction.sign();
    let h = config.step_size;

    let mut points = Vec::new();
    let mut p = seed;

    for _ in 0..config.max_steps {
        let Ok(k1) = sampler.sample(p) else { break };
        let Ok(k2) = sampler.sample(p + k1 * (s * h / 2.0)) else {
            break;
        };
        let Ok(k3) = sampler.sample(p + k2 * (s * h / 2.0)) else {
            break;
        };
        let Ok(k4) = sampler.sample(p + k3 * (s * h)) else {
            break;
        };

        let next = p + (k1 + 2.0 * k2 + 2.0 * k3 + k4) * (s * h / 6.0);
        if !bounds.contains(next) {
            break;
        }
        points.push(next);
        p = next;
    }

    points
}
