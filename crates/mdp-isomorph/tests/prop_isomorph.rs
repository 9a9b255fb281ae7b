//! Property-based tests for the isomorph scaling engine.
//!
//! Covers: scaling identities, monotonicity in temperature, and
//! line-generation shape invariants.

use mdp_isomorph::{IsomorphGenerator, ReferenceState, density_at, parameter_at};
use proptest::prelude::*;

proptest! {
    /// Scaling to the reference temperature returns the reference density.
    #[test]
    fn density_identity_at_reference_temperature(
        rho1 in 0.01f64..10.0,
        t1 in 0.01f64..10.0,
        n in 1f64..24.0,
    ) {
        let rho2 = density_at(rho1, t1, t1, n).unwrap();
        prop_assert_eq!(rho2, rho1);
    }

    /// Scaling to the reference density returns the reference parameter.
    #[test]
    fn parameter_identity_at_reference_density(
        a1 in 0.0f64..4.0,
        rho1 in 0.01f64..10.0,
    ) {
        let a2 = parameter_at(a1, rho1, rho1).unwrap();
        prop_assert_eq!(a2, a1);
    }

    /// Density is strictly increasing in the target temperature.
    #[test]
    fn density_monotone_in_temperature(
        rho1 in 0.01f64..10.0,
        t1 in 0.1f64..10.0,
        t2 in 0.1f64..10.0,
        dt in 0.01f64..5.0,
        n in 1f64..24.0,
    ) {
        let lo = density_at(rho1, t1, t2, n).unwrap();
        let hi = density_at(rho1, t1, t2 + dt, n).unwrap();
        prop_assert!(hi > lo, "rho({}) = {} !> rho({}) = {}", t2 + dt, hi, t2, lo);
    }

    /// Derived states stay positive for positive inputs.
    #[test]
    fn derived_state_stays_physical(
        rho1 in 0.01f64..10.0,
        t1 in 0.1f64..10.0,
        t2 in 0.1f64..10.0,
        a1 in 0.001f64..4.0,
        n in 1f64..24.0,
    ) {
        let rho2 = density_at(rho1, t1, t2, n).unwrap();
        let a2 = parameter_at(a1, rho1, rho2).unwrap();
        prop_assert!(rho2 > 0.0);
        prop_assert!(a2 > 0.0);
    }

    /// A generated line has one state per requested temperature, in order.
    #[test]
    fn line_length_matches_temperature_count(
        temps in prop::collection::vec(0.1f64..10.0, 0..32),
    ) {
        let reference = ReferenceState::new(0.5, 0.5, 0.5, 8).unwrap();
        let generator = IsomorphGenerator::new(reference, temps.clone());
        let line = generator.generate_line().unwrap();

        prop_assert_eq!(line.len(), temps.len());
        prop_assert_eq!(line.t(), temps);
    }
}
