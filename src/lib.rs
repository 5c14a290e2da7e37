//! This is the documentation for the **lenscalc** package.
//!
//! **lenscalc** computes three basic quantities of a singlet lens:
//!   - the sag (depth) of a spherical, conic or even-order aspheric surface ([`surface::sag`])
//!   - the effective focal length using the lens-maker formula ([`lens::focal_length`])
//!   - the glass weight by numerically integrating the volume of revolution ([`lens::glass_weight`])
//!
//! The results reproduce the outputs of the legacy lens calculation sheets. All lengths are given in mm, specific
//! gravities in g/cm³ and weights in g. The [`Lens`] record bundles all parameters of a lens using physical
//! quantities from the `uom` crate.
#![allow(clippy::module_name_repetitions)]

pub mod console;
pub mod error;
pub mod lens;
pub mod surface;
pub mod utils;

pub use lens::{FocalLength, Lens};
pub use surface::AsphericCoefficients;
