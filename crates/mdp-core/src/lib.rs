//! mdp-core: stable foundation for mdpost.
//!
//! Contains:
//! - numeric (Real + tolerances + axis helpers)
//! - error (shared error types)

pub mod error;
pub mod numeric;

// Re-exports: nice ergonomics for downstream crates
pub use error::{MdError, MdResult};
pub use numeric::*;
