#![warn(missing_docs)]
//! Effective focal length of a singlet lens (lens-maker formula)
use log::warn;
use std::fmt::Display;

/// Placeholder radius of curvature (in mm) used for flat surfaces in the lens-maker formula.
///
/// Using a large but finite value keeps the reciprocal terms of the formula finite. Replacing it by a true
/// infinity would change the results of lenses with one flat surface in the last digits.
pub const FLAT_SURFACE_RADIUS: f64 = 1.0e10;

/// Result of a focal length calculation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FocalLength {
    /// focal length in mm (positive: focusing, negative: defocusing)
    Finite(f64),
    /// the lens has no optical power (e.g. a plane-parallel plate)
    Infinite,
}
impl FocalLength {
    /// Returns the focal length in mm or `None` for [`FocalLength::Infinite`].
    #[must_use]
    pub const fn value(&self) -> Option<f64> {
        match self {
            Self::Finite(f) => Some(*f),
            Self::Infinite => None,
        }
    }
    /// Returns `true` if the lens has no optical power.
    #[must_use]
    pub const fn is_infinite(&self) -> bool {
        matches!(self, Self::Infinite)
    }
}
impl Display for FocalLength {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Finite(focal_length) => write!(f, "{focal_length}"),
            Self::Infinite => write!(f, "Inf"),
        }
    }
}

/// Returns the radius used in the formula or `None` for a flat surface.
fn normalized_radius(radius: Option<f64>, name: &str) -> Option<f64> {
    match radius {
        Some(r) if r.is_nan() => {
            warn!("{name} is not a number. Treating surface as flat.");
            None
        }
        Some(r) if r == 0.0 || r.is_infinite() => None,
        r => r,
    }
}
fn normalized_refractive_index(refractive_index: f64) -> f64 {
    if !refractive_index.is_finite() {
        warn!("refractive index is not a number. Using 1.0 instead.");
        1.0
    } else if refractive_index < 1.0 {
        warn!("refractive index {refractive_index} < 1.0. Using 1.0 instead.");
        1.0
    } else {
        refractive_index
    }
}
fn normalized_thickness(thickness: f64) -> f64 {
    if thickness.is_finite() {
        thickness
    } else {
        warn!("center thickness is not a number. Using 0.0 instead.");
        0.0
    }
}

/// Calculate the effective focal length of a singlet lens.
///
/// The optical power is given by the lens-maker formula
///
/// `P = (n − 1)·(1/R1 − 1/R2 + t·(n − 1) / (n·R1·R2))`
///
/// with the radii of curvature `R1`, `R2` and center thickness `t` (all in mm) and the refractive index `n`.
///
/// Unlike [`sag`](crate::surface::sag) and [`glass_weight`](super::glass_weight) this function never fails.
/// Invalid input is replaced the same way the legacy calculation sheets do it:
///   - a radius of `None`, 0.0, NaN or +/- infinity denotes a flat surface ([`FLAT_SURFACE_RADIUS`])
///   - a refractive index which is not finite or below 1.0 is replaced by 1.0
///   - a thickness which is not finite is replaced by 0.0
///
/// Replacements of invalid values (not of flat surfaces) are logged as warnings.
///
/// # Returns
///
/// Returns [`FocalLength::Infinite`] if both surfaces are flat or if the optical power vanishes (e.g. for a
/// refractive index of 1.0).
#[must_use]
pub fn focal_length(
    radius1: Option<f64>,
    radius2: Option<f64>,
    thickness: f64,
    refractive_index: f64,
) -> FocalLength {
    let radius1 = normalized_radius(radius1, "radius1");
    let radius2 = normalized_radius(radius2, "radius2");
    let n = normalized_refractive_index(refractive_index);
    let t = normalized_thickness(thickness);
    if radius1.is_none() && radius2.is_none() {
        return FocalLength::Infinite;
    }
    let r1 = radius1.unwrap_or(FLAT_SURFACE_RADIUS);
    let r2 = radius2.unwrap_or(FLAT_SURFACE_RADIUS);
    let power = (n - 1.0) * (1.0 / r1 - 1.0 / r2 + t * (n - 1.0) / (n * r1 * r2));
    if power == 0.0 {
        FocalLength::Infinite
    } else {
        FocalLength::Finite(1.0 / power)
    }
}
