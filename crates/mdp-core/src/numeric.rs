use crate::{MdError, MdResult};

/// Floating point type used throughout the analysis crates.
pub type Real = f64;

/// One tolerance for everything
#[derive(Clone, Copy, Debug)]
pub struct Tolerances {
    pub abs: Real,
    pub rel: Real,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            abs: 1e-12,
            rel: 1e-9,
        }
    }
}

pub fn nearly_equal(a: Real, b: Real, tol: Tolerances) -> bool {
    let diff = (a - b).abs();
    if diff <= tol.abs {
        return true;
    }
    diff <= tol.rel * a.abs().max(b.abs())
}

pub fn ensure_positive(v: Real, what: &'static str) -> MdResult<Real> {
    // NaN compares false, so non-finite garbage is rejected here too
    if v > 0.0 {
        Ok(v)
    } else {
        Err(MdError::Domain { what })
    }
}

pub fn ensure_non_negative(v: Real, what: &'static str) -> MdResult<Real> {
    if v >= 0.0 { Ok(v) } else { Err(MdError::Domain { what }) }
}

/// Uniformly spaced points from `start` to `end` inclusive.
pub fn linspace(start: Real, end: Real, n: usize) -> Vec<Real> {
    if n == 0 {
        return Vec::new();
    }
    if n == 1 {
        return vec![start];
    }

    let mut points = Vec::with_capacity(n);
    let delta = (end - start) / (n - 1) as Real;
    for i in 0..n {
        points.push(start + i as Real * delta);
    }

    // Ensure exact endpoint
    points[n - 1] = end;
    points
}

/// Time axis for a trajectory of `samples` records spaced `dt` apart,
/// running from 0 to `samples * dt` the way the simulator reports it.
pub fn time_axis(samples: usize, dt: Real) -> Vec<Real> {
    linspace(0.0, samples as Real * dt, samples)
}
