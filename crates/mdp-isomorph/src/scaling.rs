//! Isomorph scaling relations.
//!
//! Pure power-law transforms predicted by isomorph theory for a fluid with
//! an inverse-power pair potential: density scales with temperature along
//! the isomorph, and the softening parameter rescales with the cube root of
//! the density ratio.

use mdp_core::{MdError, MdResult, Real, ensure_positive};

/// Density at temperature `t2` on the isomorph through `(rho1, t1)`:
/// `rho2 = rho1 * (t2/t1)^(3/n)`.
///
/// `n` is the pair-potential power; `n == 0` and non-positive densities or
/// temperatures are rejected.
pub fn density_at(rho1: Real, t1: Real, t2: Real, n: Real) -> MdResult<Real> {
    if n == 0.0 {
        return Err(MdError::Domain {
            what: "potential power n must be nonzero",
        });
    }
    ensure_positive(rho1, "reference density must be positive")?;
    ensure_positive(t1, "reference temperature must be positive")?;
    ensure_positive(t2, "target temperature must be positive")?;

    Ok(rho1 * (t2 / t1).powf(3.0 / n))
}

/// Softening parameter at density `rho2` given its reference value at
/// `rho1`: `a2 = a1 * (rho1/rho2)^(1/3)`.
pub fn parameter_at(a1: Real, rho1: Real, rho2: Real) -> MdResult<Real> {
    if rho2 == 0.0 {
        return Err(MdError::Domain {
            what: "target density must be nonzero",
        });
    }
    Ok(a1 * (rho1 / rho2).cbrt())
}
