#![warn(missing_docs)]
//! Singlet lens with spherical, conic or aspheric (or flat) surfaces
//!
//! This module contains the pure calculation functions [`focal_length`] and [`glass_weight`] working on plain
//! numbers (mm, g/cm³, g) as well as the [`Lens`] record bundling all lens parameters as physical quantities.
use serde::{Deserialize, Serialize};
use uom::si::{
    f64::{Length, Mass, MassDensity},
    length::millimeter,
    mass_density::gram_per_cubic_centimeter,
};

use crate::{
    error::{LcResult, LensCalcError},
    gram, gram_per_cubic_centimeter, millimeter,
    surface::{sag, AsphericCoefficients},
};

mod focal_length;
mod glass_weight;

pub use focal_length::{focal_length, FocalLength, FLAT_SURFACE_RADIUS};
pub use glass_weight::{glass_weight, INTEGRATION_STEPS};

/// A singlet lens.
///
/// # Sign convention
/// - a positive radius of curvature on the front surface is convex (focusing)
/// - a negative radius of curvature on the rear surface is convex (focusing)
/// - a radius of `None` denotes a flat surface
///
/// ## Parameters
///   - `radius1`, `radius2`: radii of curvature of front and rear surface
///   - `center thickness`
///   - `refractive index`
///   - `specific gravity` of the glass
///   - `diameter1`, `diameter2`: effective (figured) apertures of front and rear surface
///   - `max diameter`: outer (mechanical) diameter
///   - `coefficients1`, `coefficients2`: conic and aspheric coefficients of front and rear surface
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lens {
    radius1: Option<Length>,
    radius2: Option<Length>,
    center_thickness: Length,
    refractive_index: f64,
    specific_gravity: MassDensity,
    diameter1: Length,
    diameter2: Length,
    max_diameter: Length,
    coefficients1: AsphericCoefficients,
    coefficients2: AsphericCoefficients,
}
impl Default for Lens {
    /// Create a flat glass plate with a center thickness of 10.0 mm, a diameter of 25.4 mm, a refractive index of 1.5
    /// and a specific gravity of 2.5 g/cm³.
    fn default() -> Self {
        Self {
            radius1: None,
            radius2: None,
            center_thickness: millimeter!(10.0),
            refractive_index: 1.5,
            specific_gravity: gram_per_cubic_centimeter!(2.5),
            diameter1: millimeter!(25.4),
            diameter2: millimeter!(25.4),
            max_diameter: millimeter!(25.4),
            coefficients1: AsphericCoefficients::default(),
            coefficients2: AsphericCoefficients::default(),
        }
    }
}
fn check_length(value: Length, what: &str) -> LcResult<()> {
    if value.is_sign_negative() || !value.is_finite() {
        return Err(LensCalcError::Other(format!(
            "{what} must be >= 0.0 and finite"
        )));
    }
    Ok(())
}
fn radius_in_mm(radius: Option<Length>) -> Option<f64> {
    radius.map(|r| r.get::<millimeter>())
}
impl Lens {
    /// Creates a new [`Lens`].
    ///
    /// The apertures are kept at their default values of 25.4 mm, the specific gravity at 2.5 g/cm³ and both
    /// surfaces are spherical. A radius of `None` (or 0.0 or +/- infinity) corresponds to a flat surface.
    ///
    /// # Errors
    ///
    /// This function returns an error if
    ///   - one of the radii is NaN
    ///   - the center thickness is negative or not finite
    ///   - the refractive index is < 1.0 or not finite
    pub fn new(
        radius1: Option<Length>,
        radius2: Option<Length>,
        center_thickness: Length,
        refractive_index: f64,
    ) -> LcResult<Self> {
        check_length(center_thickness, "center thickness")?;
        if refractive_index < 1.0 || !refractive_index.is_finite() {
            return Err(LensCalcError::Other(
                "refractive index must be >= 1.0 and finite".into(),
            ));
        }
        Self {
            center_thickness,
            refractive_index,
            ..Self::default()
        }
        .with_radii(radius1, radius2)
    }
    /// Set the radii of curvature of front and rear surface (`None` for a flat surface).
    ///
    /// # Errors
    ///
    /// This function returns an error if one of the radii is NaN.
    pub fn with_radii(mut self, radius1: Option<Length>, radius2: Option<Length>) -> LcResult<Self> {
        if radius1.is_some_and(|r| r.is_nan()) {
            return Err(LensCalcError::InvalidArgument("radius1".into()));
        }
        if radius2.is_some_and(|r| r.is_nan()) {
            return Err(LensCalcError::InvalidArgument("radius2".into()));
        }
        self.radius1 = radius1;
        self.radius2 = radius2;
        Ok(self)
    }
    /// Set the effective apertures of both surfaces and the outer diameter of the lens.
    ///
    /// # Errors
    ///
    /// This function returns an error if a diameter is negative or not finite or if the outer diameter is
    /// smaller than one of the effective apertures.
    pub fn with_apertures(
        mut self,
        diameter1: Length,
        diameter2: Length,
        max_diameter: Length,
    ) -> LcResult<Self> {
        check_length(diameter1, "diameter1")?;
        check_length(diameter2, "diameter2")?;
        check_length(max_diameter, "max diameter")?;
        if max_diameter < diameter1 || max_diameter < diameter2 {
            return Err(LensCalcError::Other(
                "max diameter must not be smaller than the surface apertures".into(),
            ));
        }
        self.diameter1 = diameter1;
        self.diameter2 = diameter2;
        self.max_diameter = max_diameter;
        Ok(self)
    }
    /// Set the specific gravity of the lens material.
    ///
    /// # Errors
    ///
    /// This function returns an error if the specific gravity is negative or not finite.
    pub fn with_specific_gravity(mut self, specific_gravity: MassDensity) -> LcResult<Self> {
        if specific_gravity.is_sign_negative() || !specific_gravity.is_finite() {
            return Err(LensCalcError::Other(
                "specific gravity must be >= 0.0 and finite".into(),
            ));
        }
        self.specific_gravity = specific_gravity;
        Ok(self)
    }
    /// Set the conic and aspheric coefficients of front and rear surface.
    ///
    /// # Errors
    ///
    /// This function returns an error if one of the coefficients is not finite.
    pub fn with_coefficients(
        mut self,
        coefficients1: AsphericCoefficients,
        coefficients2: AsphericCoefficients,
    ) -> LcResult<Self> {
        coefficients1.validate()?;
        coefficients2.validate()?;
        self.coefficients1 = coefficients1;
        self.coefficients2 = coefficients2;
        Ok(self)
    }
    /// Returns the radius of curvature of the front surface (`None` if flat).
    #[must_use]
    pub const fn radius1(&self) -> Option<Length> {
        self.radius1
    }
    /// Returns the radius of curvature of the rear surface (`None` if flat).
    #[must_use]
    pub const fn radius2(&self) -> Option<Length> {
        self.radius2
    }
    /// Returns the center thickness of this [`Lens`].
    #[must_use]
    pub const fn center_thickness(&self) -> Length {
        self.center_thickness
    }
    /// Returns the refractive index of this [`Lens`].
    #[must_use]
    pub const fn refractive_index(&self) -> f64 {
        self.refractive_index
    }
    /// Returns the specific gravity of the lens material.
    #[must_use]
    pub const fn specific_gravity(&self) -> MassDensity {
        self.specific_gravity
    }
    /// Returns the effective apertures of front and rear surface and the outer diameter.
    #[must_use]
    pub const fn apertures(&self) -> (Length, Length, Length) {
        (self.diameter1, self.diameter2, self.max_diameter)
    }
    /// Returns the coefficients of front and rear surface.
    #[must_use]
    pub const fn coefficients(&self) -> (&AsphericCoefficients, &AsphericCoefficients) {
        (&self.coefficients1, &self.coefficients2)
    }
    /// Returns the effective focal length of this [`Lens`] (see [`focal_length`]).
    #[must_use]
    pub fn focal_length(&self) -> FocalLength {
        focal_length(
            radius_in_mm(self.radius1),
            radius_in_mm(self.radius2),
            self.center_thickness.get::<millimeter>(),
            self.refractive_index,
        )
    }
    /// Returns the sag of the front surface at the given diameter (see [`sag`]).
    ///
    /// # Errors
    ///
    /// This function returns an error if the diameter is not finite.
    pub fn sag1(&self, diameter: Length) -> LcResult<Option<Length>> {
        Ok(sag(
            radius_in_mm(self.radius1),
            diameter.get::<millimeter>(),
            Some(&self.coefficients1),
        )?
        .map(|z| millimeter!(z)))
    }
    /// Returns the sag of the rear surface at the given diameter (see [`sag`]).
    ///
    /// # Errors
    ///
    /// This function returns an error if the diameter is not finite.
    pub fn sag2(&self, diameter: Length) -> LcResult<Option<Length>> {
        Ok(sag(
            radius_in_mm(self.radius2),
            diameter.get::<millimeter>(),
            Some(&self.coefficients2),
        )?
        .map(|z| millimeter!(z)))
    }
    /// Returns the glass weight of this [`Lens`] (see [`glass_weight`]).
    ///
    /// Returns `Ok(None)` if the sag of a surface is undefined within its aperture.
    ///
    /// # Errors
    ///
    /// This function returns an error if the parameters of the lens are invalid (see [`glass_weight`]).
    pub fn weight(&self) -> LcResult<Option<Mass>> {
        let weight = glass_weight(
            radius_in_mm(self.radius1),
            radius_in_mm(self.radius2),
            self.center_thickness.get::<millimeter>(),
            self.specific_gravity.get::<gram_per_cubic_centimeter>(),
            self.diameter1.get::<millimeter>(),
            self.diameter2.get::<millimeter>(),
            self.max_diameter.get::<millimeter>(),
            Some(&self.coefficients1),
            Some(&self.coefficients2),
        )?;
        Ok(weight.map(|w| gram!(w)))
    }
}
