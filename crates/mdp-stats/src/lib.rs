//! mdp-stats: statistical extraction for mdpost.
//!
//! Turns raw simulation time series into physically meaningful scalars:
//! - Line fits over MSD curves for diffusion coefficients (`fit`)
//! - Sweep accumulation of those coefficients (`diffusion`, `sweep`)
//! - RDF crossing and isosbestic-point detection (`rdf`)
//!
//! Inputs are plain `&[f64]` slices already parsed by a loader; outputs are
//! plain data for a plotting layer. Neither end touches this crate.

pub mod diffusion;
pub mod fit;
pub mod rdf;
pub mod sweep;

// Re-exports for ergonomics
pub use diffusion::{DiffusionSeries, DiffusionSnapshot};
pub use fit::{FitResult, fit, fit_tail};
pub use rdf::{Crossing, CrossingTarget, find_crossings, isosbestic_point};
pub use sweep::{MsdCurve, TailPolicy, execute_diffusion_sweep};
