#![warn(missing_docs)]
//! Sag (depth) of a conic / aspheric surface
use log::debug;

use super::AsphericCoefficients;
use crate::error::{ensure_finite, LcResult, LensCalcError};

/// Curvature `c = 1/R` (in 1/mm) belonging to the given radius of curvature (in mm).
///
/// A radius of `None`, 0.0 or +/- infinity denotes a flat surface and yields 0.0.
///
/// # Errors
///
/// This function returns [`LensCalcError::InvalidArgument`] if the radius is NaN.
pub fn curvature(radius: Option<f64>) -> LcResult<f64> {
    match radius {
        None => Ok(0.0),
        Some(r) if r.is_nan() => Err(LensCalcError::InvalidArgument("radius".into())),
        Some(r) if r == 0.0 || r.is_infinite() => Ok(0.0),
        Some(r) => Ok(1.0 / r),
    }
}

/// Calculate the sag of a lens surface at the given (full) diameter.
///
/// The sag is calculated from the conic equation plus the even-order aspheric terms:
///
/// `z(h) = c·h² / (1 + √(1 − (1 + k)·c²·h²)) + a4·h⁴ + a6·h⁶ + ... + a14·h¹⁴`
///
/// with the curvature `c = 1/radius`, the height `h = diameter / 2` and the conic constant `k`. A positive
/// radius (convex surface) results in a positive sag. All lengths are given in mm. If `coefficients` is `None`
/// a pure sphere is assumed.
///
/// The inputs are plain `f64` values, so booleans cannot be passed as numbers. Non-numbers (NaN) are rejected.
///
/// # Returns
///
/// Returns `Ok(None)` if the square root argument of the conic term becomes negative. In this case the
/// given diameter lies outside the valid zone of the surface. This is not treated as an error.
///
/// # Errors
///
/// This function returns [`LensCalcError::InvalidArgument`] if
///   - the `diameter` is not finite
///   - the `radius` is NaN
///   - one of the `coefficients` is not finite
pub fn sag(
    radius: Option<f64>,
    diameter: f64,
    coefficients: Option<&AsphericCoefficients>,
) -> LcResult<Option<f64>> {
    let c = curvature(radius)?;
    let h = ensure_finite(diameter, "diameter")? / 2.0;
    let coefficients = coefficients.copied().unwrap_or_default();
    coefficients.validate()?;

    let arg = 1.0 - (1.0 + coefficients.conic) * c.powi(2) * h.powi(2);
    if arg < 0.0 {
        debug!(
            "sag undefined at diameter {diameter} mm (radius: {radius:?} mm, conic: {})",
            coefficients.conic
        );
        return Ok(None);
    }
    let base = (c * h.powi(2)) / (1.0 + arg.sqrt());
    Ok(Some(base + coefficients.polynomial(h)))
}
