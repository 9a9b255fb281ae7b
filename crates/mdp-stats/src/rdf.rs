//! RDF crossing detection.
//!
//! Locates the points where a radial distribution function crosses a
//! reference level (usually g = 1) or a second RDF sampled on the same
//! axis. Crossings shared by the RDFs of different softening parameters
//! mark the isosbestic point, whose theoretical abscissa for this potential
//! family is `sqrt(1 - a)`.

use mdp_core::{MdError, MdResult, Real};
use serde::{Deserialize, Serialize};

/// Location where two curves (or a curve and a constant) are equal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Crossing {
    pub x: Real,
    pub y: Real,
}

/// What the scanned curve is compared against.
#[derive(Debug, Clone, Copy)]
pub enum CrossingTarget<'a> {
    /// A constant reference level, e.g. the ideal-gas value g = 1.
    Level(Real),
    /// A second curve sampled at the same abscissas.
    Curve(&'a [Real]),
}

/// Scan consecutive sample pairs for sign changes of `y - target` and
/// locate each crossing by linear interpolation.
///
/// A sample lying exactly on the target counts as a crossing; the crossing
/// it produces is reported once even though both adjacent intervals see it.
/// Crossings come back in ascending `x` for an ascending input axis. An
/// empty result is valid, not an error.
pub fn find_crossings(x: &[Real], y: &[Real], target: CrossingTarget) -> MdResult<Vec<Crossing>> {
    if x.len() != y.len() {
        return Err(MdError::InsufficientData {
            what: "x and y series must have equal length",
        });
    }
    if x.len() < 2 {
        return Err(MdError::InsufficientData {
            what: "crossing scan needs at least 2 samples",
        });
    }
    if let CrossingTarget::Curve(other) = target {
        if other.len() != x.len() {
            return Err(MdError::InsufficientData {
                what: "target curve must match the sample axis length",
            });
        }
    }

    let diff = |i: usize| match target {
        CrossingTarget::Level(level) => y[i] - level,
        CrossingTarget::Curve(other) => y[i] - other[i],
    };

    let mut crossings: Vec<Crossing> = Vec::new();
    let push = |crossings: &mut Vec<Crossing>, cx: Real, cy: Real| {
        if crossings.last().is_none_or(|last| last.x != cx) {
            crossings.push(Crossing { x: cx, y: cy });
        }
    };

    for i in 0..x.len() - 1 {
        let d0 = diff(i);
        let d1 = diff(i + 1);

        if d0 == 0.0 {
            push(&mut crossings, x[i], y[i]);
            if d1 == 0.0 {
                push(&mut crossings, x[i + 1], y[i + 1]);
            }
        } else if d1 == 0.0 {
            push(&mut crossings, x[i + 1], y[i + 1]);
        } else if d0 * d1 < 0.0 {
            let s = d0 / (d0 - d1);
            let cx = x[i] + s * (x[i + 1] - x[i]);
            let cy = y[i] + s * (y[i + 1] - y[i]);
            push(&mut crossings, cx, cy);
        }
    }

    Ok(crossings)
}

/// Theoretical isosbestic abscissa `sqrt(1 - par_a)` for the softened
/// inverse-power potential; defined only for `par_a <= 1`.
pub fn isosbestic_point(par_a: Real) -> MdResult<Real> {
    if par_a > 1.0 {
        return Err(MdError::Domain {
            what: "isosbestic point is undefined for par_a > 1",
        });
    }
    Ok((1.0 - par_a).sqrt())
}
