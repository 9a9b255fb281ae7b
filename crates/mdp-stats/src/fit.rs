//! Ordinary least-squares line fitting.
//!
//! The diffusion coefficient is proportional to the long-time slope of the
//! mean-squared displacement, so the workhorse here is a closed-form line
//! fit plus a tail-windowed variant that discards the short-time ballistic
//! transient.

use mdp_core::{MdError, MdResult, Real};
use serde::{Deserialize, Serialize};

/// Result of one least-squares line fit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FitResult {
    pub slope: Real,
    pub intercept: Real,
    /// Pearson correlation coefficient; 0 when `y` has zero variance.
    pub r_value: Real,
    /// Standard error of the slope estimate; 0 when only two points were
    /// fitted (no residual degrees of freedom).
    pub std_err: Real,
}

/// Closed-form ordinary least squares over the full series.
///
/// Requires equal-length inputs with at least two samples and
/// non-degenerate `x` (not all equal).
pub fn fit(x: &[Real], y: &[Real]) -> MdResult<FitResult> {
    if x.len() != y.len() {
        return Err(MdError::InsufficientData {
            what: "x and y series must have equal length",
        });
    }
    let n = x.len();
    if n < 2 {
        return Err(MdError::InsufficientData {
            what: "regression needs at least 2 samples",
        });
    }

    let nf = n as Real;
    let mean_x = x.iter().sum::<Real>() / nf;
    let mean_y = y.iter().sum::<Real>() / nf;

    let mut ss_xx = 0.0;
    let mut ss_yy = 0.0;
    let mut ss_xy = 0.0;
    for (&xi, &yi) in x.iter().zip(y) {
        let dx = xi - mean_x;
        let dy = yi - mean_y;
        ss_xx += dx * dx;
        ss_yy += dy * dy;
        ss_xy += dx * dy;
    }

    if ss_xx == 0.0 {
        return Err(MdError::InsufficientData {
            what: "regression x values are all equal",
        });
    }

    let slope = ss_xy / ss_xx;
    let intercept = mean_y - slope * mean_x;
    let r_value = if ss_yy == 0.0 {
        0.0
    } else {
        ss_xy / (ss_xx * ss_yy).sqrt()
    };
    let std_err = if n > 2 {
        // Residual sum of squares, clamped against rounding below zero
        let ss_res = (ss_yy - slope * ss_xy).max(0.0);
        (ss_res / (nf - 2.0) / ss_xx).sqrt()
    } else {
        0.0
    };

    Ok(FitResult {
        slope,
        intercept,
        r_value,
        std_err,
    })
}

/// Fit only the trailing `fraction` of the series: indices
/// `>= floor((1 - fraction) * len)`.
///
/// The split depends on `len` and `fraction` alone, so a tail fit is
/// reproducible for any series of the same length.
pub fn fit_tail(x: &[Real], y: &[Real], fraction: Real) -> MdResult<FitResult> {
    if !(fraction > 0.0 && fraction < 1.0) {
        return Err(MdError::Domain {
            what: "tail fraction must be in (0, 1)",
        });
    }
    if x.len() != y.len() {
        return Err(MdError::InsufficientData {
            what: "x and y series must have equal length",
        });
    }

    let start = ((1.0 - fraction) * x.len() as Real).floor() as usize;
    fit(&x[start..], &y[start..])
}
