//! mdp-isomorph: isomorph state-point scaling for mdpost.
//!
//! Provides:
//! - Pure scaling relations (`density_at`, `parameter_at`)
//! - Validated reference/derived state types
//! - Line and surface generation across temperature and density sweeps
//! - The softened inverse-power pair potential the scaling assumes
//!
//! The generator answers "which `(rho, t, a)` state points lie on the
//! isomorph through this reference point?"; running the simulator there and
//! plotting the results belong to other layers.

pub mod generator;
pub mod potential;
pub mod scaling;
pub mod state;

// Re-exports for ergonomics
pub use generator::IsomorphGenerator;
pub use potential::PairPotential;
pub use scaling::{density_at, parameter_at};
pub use state::{DerivedState, IsomorphLine, IsomorphSurface, ReferenceState};
