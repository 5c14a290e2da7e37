//! Module for handling optical surfaces
//!
//! A surface is described by its radius of curvature and an optional set of [`AsphericCoefficients`].

mod aspheric;
mod sag;

pub use aspheric::{AsphericCoefficients, NR_OF_COEFFICIENTS};
pub use sag::{curvature, sag};
