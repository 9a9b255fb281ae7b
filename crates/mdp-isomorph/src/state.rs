//! State-point types for isomorph generation.

use mdp_core::{MdError, MdResult, Real, ensure_non_negative, ensure_positive};
use serde::{Deserialize, Serialize};

/// Reference state point an isomorph is developed from.
///
/// Immutable once constructed; validated so downstream scaling never sees
/// non-physical inputs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReferenceState {
    rho_r: Real,
    t_r: Real,
    a_r: Real,
    potential_power: u32,
}

impl ReferenceState {
    pub fn new(rho_r: Real, t_r: Real, a_r: Real, potential_power: u32) -> MdResult<Self> {
        ensure_positive(rho_r, "reference density must be positive")?;
        ensure_positive(t_r, "reference temperature must be positive")?;
        ensure_non_negative(a_r, "reference softening parameter must be non-negative")?;
        if potential_power < 1 {
            return Err(MdError::Domain {
                what: "potential power must be at least 1",
            });
        }
        Ok(Self {
            rho_r,
            t_r,
            a_r,
            potential_power,
        })
    }

    pub fn rho_r(&self) -> Real {
        self.rho_r
    }

    pub fn t_r(&self) -> Real {
        self.t_r
    }

    pub fn a_r(&self) -> Real {
        self.a_r
    }

    pub fn potential_power(&self) -> u32 {
        self.potential_power
    }
}

/// One derived state point on an isomorph.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DerivedState {
    pub rho: Real,
    pub t: Real,
    pub a: Real,
}

/// Ordered sequence of derived states, index-aligned with the target
/// temperature sequence it was generated from. Order is the sweep axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IsomorphLine {
    pub states: Vec<DerivedState>,
}

impl IsomorphLine {
    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Density column for plotting
    pub fn rho(&self) -> Vec<Real> {
        self.states.iter().map(|s| s.rho).collect()
    }

    /// Temperature column for plotting
    pub fn t(&self) -> Vec<Real> {
        self.states.iter().map(|s| s.t).collect()
    }

    /// Softening-parameter column for plotting
    pub fn a(&self) -> Vec<Real> {
        self.states.iter().map(|s| s.a).collect()
    }
}

/// Grid of derived states: rows follow the reference-density sequence,
/// columns follow the target-temperature sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IsomorphSurface {
    pub rows: Vec<IsomorphLine>,
}

impl IsomorphSurface {
    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    pub fn num_cols(&self) -> usize {
        self.rows.first().map_or(0, IsomorphLine::len)
    }

    pub fn rho_grid(&self) -> Vec<Vec<Real>> {
        self.rows.iter().map(IsomorphLine::rho).collect()
    }

    pub fn t_grid(&self) -> Vec<Vec<Real>> {
        self.rows.iter().map(IsomorphLine::t).collect()
    }

    pub fn a_grid(&self) -> Vec<Vec<Real>> {
        self.rows.iter().map(IsomorphLine::a).collect()
    }
}
