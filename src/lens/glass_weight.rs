#![warn(missing_docs)]
//! Glass weight of a singlet lens by numerical integration of its volume of revolution
use log::debug;
use std::f64::consts::PI;

use crate::{
    error::{ensure_finite, LcResult},
    surface::{sag, AsphericCoefficients},
};

/// Number of integration steps across the half aperture of each surface.
///
/// This value is fixed. Changing it changes the results beyond the tolerance of the legacy calculation
/// sheets.
pub const INTEGRATION_STEPS: u32 = 100;

/// Orientation of a surface with respect to the lens body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    /// first surface, sag pointing into the glass
    Front,
    /// second surface, its z axis points the opposite way
    Rear,
}
impl Side {
    const fn sign(self) -> f64 {
        match self {
            Self::Front => 1.0,
            Self::Rear => -1.0,
        }
    }
}

/// Volume (in mm³) which a surface adds to (positive) or removes from (negative) the cylinder of the
/// center thickness.
///
/// The sag is sampled at `steps + 1` equidistant heights `h_i = i·dh` and the annular areas
/// `π·(h_zone² − h²)` are integrated over z with the trapezoidal rule. The rim between the figured zone and the
/// outer diameter is taken as flat at the sag of the zone edge.
///
/// Returns `Ok(None)` as soon as one sag sample is undefined.
fn surface_volume(
    radius: Option<f64>,
    diameter: f64,
    coefficients: Option<&AsphericCoefficients>,
    outer_radius: f64,
    side: Side,
    steps: u32,
) -> LcResult<Option<f64>> {
    let dh = (diameter / 2.0) / f64::from(steps);
    let zone_radius = dh * f64::from(steps);
    let mut volume = 0.0;
    let mut z_prev = 0.0;
    for i in 0..=steps {
        let Some(z) = sag(radius, (dh * f64::from(i)) * 2.0, coefficients)? else {
            return Ok(None);
        };
        let z = side.sign() * z;
        if i > 0 {
            let h_prev = dh * f64::from(i - 1);
            let h = dh * f64::from(i);
            volume -= (zone_radius.powi(2) * 2.0 - h_prev.powi(2) - h.powi(2)) * PI * (z - z_prev)
                / 2.0;
        }
        z_prev = z;
    }
    volume -= (outer_radius.powi(2) - zone_radius.powi(2)) * PI * z_prev;
    Ok(Some(volume))
}

#[allow(clippy::too_many_arguments)]
fn integrate_weight(
    radius1: Option<f64>,
    radius2: Option<f64>,
    thickness: f64,
    specific_gravity: f64,
    diameter1: f64,
    diameter2: f64,
    max_diameter: f64,
    coefficients1: Option<&AsphericCoefficients>,
    coefficients2: Option<&AsphericCoefficients>,
    steps: u32,
) -> LcResult<Option<f64>> {
    let thickness = ensure_finite(thickness, "thickness")?;
    let specific_gravity = ensure_finite(specific_gravity, "specific_gravity")?;
    let diameter1 = ensure_finite(diameter1, "diameter1")?;
    let diameter2 = ensure_finite(diameter2, "diameter2")?;
    let outer_radius = ensure_finite(max_diameter, "max_diameter")? / 2.0;

    let Some(volume1) = surface_volume(
        radius1,
        diameter1,
        coefficients1,
        outer_radius,
        Side::Front,
        steps,
    )?
    else {
        return Ok(None);
    };
    let Some(volume2) = surface_volume(
        radius2,
        diameter2,
        coefficients2,
        outer_radius,
        Side::Rear,
        steps,
    )?
    else {
        return Ok(None);
    };
    let cylinder = PI * outer_radius.powi(2) * thickness;
    debug!("cylinder volume: {cylinder} mm³, surface volumes: {volume1} mm³, {volume2} mm³");
    Ok(Some(
        specific_gravity * (cylinder + volume1 + volume2) / 1000.0,
    ))
}

/// Calculate the weight (in g) of a singlet lens.
///
/// The lens volume is the cylinder of the center `thickness` and the outer `max_diameter` corrected by the
/// volumes of revolution of both surfaces. Each surface is integrated numerically over its effective aperture
/// (`diameter1`, `diameter2`) using [`INTEGRATION_STEPS`] steps. Between the effective aperture and the outer
/// diameter the surface is assumed to be flat. All lengths are given in mm, the `specific_gravity` in g/cm³.
/// Missing coefficients denote spherical surfaces.
///
/// A plane-parallel plate (both radii `None` or 0.0) yields exactly the weight of the cylinder
/// `π·(max_diameter/2)²·thickness`.
///
/// # Returns
///
/// Returns `Ok(None)` if the sag of one of the surfaces is undefined somewhere within its effective aperture
/// (see [`sag`]).
///
/// # Errors
///
/// This function returns [`LensCalcError::InvalidArgument`](crate::error::LensCalcError::InvalidArgument) if
///   - `thickness`, `specific_gravity`, `diameter1`, `diameter2` or `max_diameter` is not finite
///   - a radius or an aspheric coefficient is invalid (see [`sag`])
#[allow(clippy::too_many_arguments)]
pub fn glass_weight(
    radius1: Option<f64>,
    radius2: Option<f64>,
    thickness: f64,
    specific_gravity: f64,
    diameter1: f64,
    diameter2: f64,
    max_diameter: f64,
    coefficients1: Option<&AsphericCoefficients>,
    coefficients2: Option<&AsphericCoefficients>,
) -> LcResult<Option<f64>> {
    integrate_weight(
        radius1,
        radius2,
        thickness,
        specific_gravity,
        diameter1,
        diameter2,
        max_diameter,
        coefficients1,
        coefficients2,
        INTEGRATION_STEPS,
    )
}
