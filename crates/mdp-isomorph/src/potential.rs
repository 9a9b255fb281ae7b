//! Softened inverse-power pair potential.
//!
//! The family the simulator integrates: `phi(r) = (r^2 + a)^(-n/2)` with
//! potential power `n` and softening parameter `a`. Analytical curves for
//! the potential, its force, the inflection point, and the Boltzmann-factor
//! model RDF are needed when comparing measured structure against theory.

use mdp_core::{MdError, MdResult, Real, ensure_non_negative, ensure_positive};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PairPotential {
    power: u32,
    par_a: Real,
}

impl PairPotential {
    pub fn new(power: u32, par_a: Real) -> MdResult<Self> {
        if power < 1 {
            return Err(MdError::Domain {
                what: "potential power must be at least 1",
            });
        }
        ensure_non_negative(par_a, "softening parameter must be non-negative")?;
        Ok(Self { power, par_a })
    }

    pub fn power(&self) -> u32 {
        self.power
    }

    pub fn par_a(&self) -> Real {
        self.par_a
    }

    /// `phi(r) = (r^2 + a)^(-n/2)`
    pub fn value(&self, r: Real) -> Real {
        let n = Real::from(self.power);
        (r * r + self.par_a).powf(-n / 2.0)
    }

    /// `f(r) = -dphi/dr = n * r * (r^2 + a)^(-n/2 - 1)`
    pub fn force(&self, r: Real) -> Real {
        let n = Real::from(self.power);
        n * r * (r * r + self.par_a).powf(-n / 2.0 - 1.0)
    }

    /// Abscissa of the force maximum, `r* = sqrt(a / (1 + n))`.
    pub fn inflection(&self) -> Real {
        (self.par_a / (1.0 + Real::from(self.power))).sqrt()
    }

    pub fn sample_values(&self, r: &[Real]) -> Vec<Real> {
        r.iter().map(|&ri| self.value(ri)).collect()
    }

    pub fn sample_forces(&self, r: &[Real]) -> Vec<Real> {
        r.iter().map(|&ri| self.force(ri)).collect()
    }

    /// Low-density model RDF from the bare Boltzmann factor,
    /// `g(r) = exp(-phi(r) / t)` at temperature `t`.
    pub fn boltzmann_rdf(&self, r: &[Real], t: Real) -> MdResult<Vec<Real>> {
        ensure_positive(t, "temperature must be positive")?;
        Ok(r.iter().map(|&ri| (-self.value(ri) / t).exp()).collect())
    }
}
