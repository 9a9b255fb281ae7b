//! Diffusion-coefficient accumulation across a softening-parameter sweep.

use crate::fit::FitResult;
use mdp_core::Real;
use serde::{Deserialize, Serialize};

/// Accumulates per-parameter diffusion coefficients across one sweep.
///
/// Six parallel collections: slope, intercept, and standard error for the
/// full-range fit and for the tail-windowed fit. Append order defines the
/// sweep-index correspondence downstream consumers rely on, so `add` must
/// be called in sweep order.
///
/// The accumulator is deliberately dumb about lifecycle: starting a new
/// sweep (a different potential power, say) without calling [`reset`]
/// concatenates unrelated coefficients. That reset is the caller's job.
///
/// [`reset`]: DiffusionSeries::reset
#[derive(Debug, Clone, Default)]
pub struct DiffusionSeries {
    slopes: Vec<Real>,
    intercepts: Vec<Real>,
    std_errs: Vec<Real>,
    tail_slopes: Vec<Real>,
    tail_intercepts: Vec<Real>,
    tail_std_errs: Vec<Real>,
}

/// Read-only copy of the accumulated collections, for plotting or export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiffusionSnapshot {
    pub slopes: Vec<Real>,
    pub intercepts: Vec<Real>,
    pub std_errs: Vec<Real>,
    pub tail_slopes: Vec<Real>,
    pub tail_intercepts: Vec<Real>,
    pub tail_std_errs: Vec<Real>,
}

impl DiffusionSeries {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one sweep point. The tail fit is optional; when absent the
    /// tail collections simply stay shorter.
    pub fn add(&mut self, full: &FitResult, tail: Option<&FitResult>) {
        self.slopes.push(full.slope);
        self.intercepts.push(full.intercept);
        self.std_errs.push(full.std_err);

        if let Some(tail) = tail {
            self.tail_slopes.push(tail.slope);
            self.tail_intercepts.push(tail.intercept);
            self.tail_std_errs.push(tail.std_err);
        }
    }

    /// Clear all six collections. Call between independent sweeps.
    pub fn reset(&mut self) {
        self.slopes.clear();
        self.intercepts.clear();
        self.std_errs.clear();
        self.tail_slopes.clear();
        self.tail_intercepts.clear();
        self.tail_std_errs.clear();
    }

    /// Number of full-range sweep points accumulated so far.
    pub fn len(&self) -> usize {
        self.slopes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slopes.is_empty()
    }

    pub fn snapshot(&self) -> DiffusionSnapshot {
        DiffusionSnapshot {
            slopes: self.slopes.clone(),
            intercepts: self.intercepts.clone(),
            std_errs: self.std_errs.clone(),
            tail_slopes: self.tail_slopes.clone(),
            tail_intercepts: self.tail_intercepts.clone(),
            tail_std_errs: self.tail_std_errs.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fit(slope: Real) -> FitResult {
        FitResult {
            slope,
            intercept: 0.5,
            r_value: 1.0,
            std_err: 0.01,
        }
    }

    #[test]
    fn add_preserves_sweep_order() {
        let mut series = DiffusionSeries::new();
        series.add(&fit(1.0), Some(&fit(1.1)));
        series.add(&fit(2.0), None);
        series.add(&fit(3.0), Some(&fit(3.1)));

        let snap = series.snapshot();
        assert_eq!(snap.slopes, vec![1.0, 2.0, 3.0]);
        assert_eq!(snap.tail_slopes, vec![1.1, 3.1]);
        assert_eq!(snap.std_errs.len(), 3);
        assert_eq!(snap.tail_std_errs.len(), 2);
    }

    #[test]
    fn reset_empties_all_collections() {
        let mut series = DiffusionSeries::new();
        series.add(&fit(1.0), Some(&fit(1.1)));
        assert_eq!(series.len(), 1);

        series.reset();
        assert!(series.is_empty());

        let snap = series.snapshot();
        assert!(snap.slopes.is_empty());
        assert!(snap.intercepts.is_empty());
        assert!(snap.std_errs.is_empty());
        assert!(snap.tail_slopes.is_empty());
        assert!(snap.tail_intercepts.is_empty());
        assert!(snap.tail_std_errs.is_empty());
    }

    #[test]
    fn snapshot_is_a_copy() {
        let mut series = DiffusionSeries::new();
        series.add(&fit(1.0), None);
        let snap = series.snapshot();

        series.reset();
        assert_eq!(snap.slopes, vec![1.0]);
    }
}
