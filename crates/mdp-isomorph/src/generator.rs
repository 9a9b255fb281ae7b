//! Isomorph line and surface generation.
//!
//! An [`IsomorphGenerator`] holds one reference state and the target
//! temperature sequence, and derives the state coordinates the simulator
//! should be run at to stay on the isomorph.

use crate::scaling::{density_at, parameter_at};
use crate::state::{DerivedState, IsomorphLine, IsomorphSurface, ReferenceState};
use mdp_core::{MdResult, Real};

#[derive(Debug, Clone)]
pub struct IsomorphGenerator {
    reference: ReferenceState,
    t_out: Vec<Real>,
}

impl IsomorphGenerator {
    pub fn new(reference: ReferenceState, t_out: Vec<Real>) -> Self {
        Self { reference, t_out }
    }

    pub fn reference(&self) -> &ReferenceState {
        &self.reference
    }

    pub fn t_out(&self) -> &[Real] {
        &self.t_out
    }

    /// Derive one state per target temperature, in input order.
    ///
    /// Every call recomputes the whole line from the reference state;
    /// nothing is cached between calls.
    pub fn generate_line(&self) -> MdResult<IsomorphLine> {
        let n = Real::from(self.reference.potential_power());
        let mut states = Vec::with_capacity(self.t_out.len());

        for &t2 in &self.t_out {
            let rho2 = density_at(self.reference.rho_r(), self.reference.t_r(), t2, n)?;
            let a2 = parameter_at(self.reference.a_r(), self.reference.rho_r(), rho2)?;
            states.push(DerivedState {
                rho: rho2,
                t: t2,
                a: a2,
            });
        }

        Ok(IsomorphLine { states })
    }

    /// Derive a single state at temperature `t2` for potential power `n`,
    /// independent of the stored temperature sequence.
    pub fn point_at(&self, t2: Real, n: Real) -> MdResult<DerivedState> {
        let rho2 = density_at(self.reference.rho_r(), self.reference.t_r(), t2, n)?;
        let a2 = parameter_at(self.reference.a_r(), self.reference.rho_r(), rho2)?;
        Ok(DerivedState {
            rho: rho2,
            t: t2,
            a: a2,
        })
    }

    /// Derive one line per reference density, sharing this generator's
    /// reference temperature, softening parameter, and temperature sequence.
    ///
    /// Row order matches `reference_densities`; column order matches the
    /// temperature sequence.
    pub fn generate_surface(&self, reference_densities: &[Real]) -> MdResult<IsomorphSurface> {
        let mut rows = Vec::with_capacity(reference_densities.len());

        for &rho_r in reference_densities {
            let reference = ReferenceState::new(
                rho_r,
                self.reference.t_r(),
                self.reference.a_r(),
                self.reference.potential_power(),
            )?;
            let generator = IsomorphGenerator::new(reference, self.t_out.clone());
            rows.push(generator.generate_line()?);
        }

        Ok(IsomorphSurface { rows })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference() -> ReferenceState {
        ReferenceState::new(0.5, 0.5, 0.5, 8).unwrap()
    }

    #[test]
    fn line_preserves_length_and_order() {
        let generator = IsomorphGenerator::new(reference(), vec![0.5, 1.0, 1.5]);
        let line = generator.generate_line().unwrap();

        assert_eq!(line.len(), 3);
        assert_eq!(line.t(), vec![0.5, 1.0, 1.5]);
    }

    #[test]
    fn line_density_rises_and_parameter_falls() {
        // End-to-end check along the sweep axis
        let generator = IsomorphGenerator::new(reference(), vec![0.5, 1.0, 1.5]);
        let line = generator.generate_line().unwrap();

        let rho = line.rho();
        let a = line.a();
        assert!(rho[0] < rho[1] && rho[1] < rho[2]);
        assert!(a[0] > a[1] && a[1] > a[2]);
        // First point is the reference itself
        assert_eq!(rho[0], 0.5);
        assert_eq!(a[0], 0.5);
    }

    #[test]
    fn repeated_calls_do_not_accumulate() {
        let generator = IsomorphGenerator::new(reference(), vec![0.5, 1.0]);
        let first = generator.generate_line().unwrap();
        let second = generator.generate_line().unwrap();

        assert_eq!(second.len(), 2);
        assert_eq!(first, second);
    }

    #[test]
    fn point_at_matches_line_entry() {
        let generator = IsomorphGenerator::new(reference(), vec![0.5, 1.0]);
        let line = generator.generate_line().unwrap();
        let point = generator.point_at(1.0, 8.0).unwrap();

        assert_eq!(point, line.states[1]);
    }

    #[test]
    fn point_at_rejects_bad_temperature() {
        let generator = IsomorphGenerator::new(reference(), vec![]);
        assert!(generator.point_at(-1.0, 8.0).is_err());
        assert!(generator.point_at(1.0, 0.0).is_err());
    }

    #[test]
    fn surface_shape_and_row_order() {
        let generator = IsomorphGenerator::new(reference(), vec![0.5, 1.0, 1.5]);
        let surface = generator.generate_surface(&[0.4, 0.5, 0.6, 0.7]).unwrap();

        assert_eq!(surface.num_rows(), 4);
        assert_eq!(surface.num_cols(), 3);

        // Each row starts at its own reference density (t2 == t_r there)
        let rho = surface.rho_grid();
        assert_eq!(rho[0][0], 0.4);
        assert_eq!(rho[3][0], 0.7);

        // Columns share the temperature axis
        let t = surface.t_grid();
        for row in &t {
            assert_eq!(row, &vec![0.5, 1.0, 1.5]);
        }
    }

    #[test]
    fn surface_rejects_bad_density() {
        let generator = IsomorphGenerator::new(reference(), vec![0.5, 1.0]);
        assert!(generator.generate_surface(&[0.4, 0.0]).is_err());
    }
}
