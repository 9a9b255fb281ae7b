//! Diffusion sweep execution.
//!
//! Connects the line-fit layer with the accumulator: given one MSD curve
//! per softening-parameter value, runs the full-range fit (and, policy
//! permitting, the tail fit) for each and collects the coefficients in
//! sweep order.

use crate::diffusion::DiffusionSeries;
use crate::fit::{fit, fit_tail};
use mdp_core::{MdResult, Real};
use tracing::debug;

/// Whether the tail-windowed fit accompanies the full-range fit.
///
/// The historical convention computed the tail fit only for non-negative
/// softening parameters; that rule has no recorded physical rationale, so
/// the choice stays with the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TailPolicy {
    /// Tail fit only when the curve's parameter value is non-negative.
    NonNegativeOnly,
    /// Tail fit for every curve.
    Always,
    /// Full-range fits only.
    Never,
}

impl TailPolicy {
    fn applies(self, par_a: Real) -> bool {
        match self {
            Self::NonNegativeOnly => par_a >= 0.0,
            Self::Always => true,
            Self::Never => false,
        }
    }
}

/// One MSD curve of a sweep, tagged with its softening-parameter value.
#[derive(Debug, Clone, Copy)]
pub struct MsdCurve<'a> {
    pub par_a: Real,
    pub time: &'a [Real],
    pub msd: &'a [Real],
}

/// Fit every curve and accumulate the coefficients in input order.
///
/// Any failing fit aborts the sweep with no partial series returned.
pub fn execute_diffusion_sweep(
    curves: &[MsdCurve<'_>],
    tail_fraction: Real,
    policy: TailPolicy,
) -> MdResult<DiffusionSeries> {
    let mut series = DiffusionSeries::new();

    for curve in curves {
        let full = fit(curve.time, curve.msd)?;
        let tail = if policy.applies(curve.par_a) {
            Some(fit_tail(curve.time, curve.msd, tail_fraction)?)
        } else {
            None
        };

        debug!(
            par_a = curve.par_a,
            slope = full.slope,
            tail = tail.is_some(),
            "fitted msd curve"
        );
        series.add(&full, tail.as_ref());
    }

    Ok(series)
}
