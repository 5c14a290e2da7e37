#![warn(missing_docs)]
//! Conic and even-order aspheric coefficients of a rotationally symmetric surface
use serde::{Deserialize, Serialize};

use crate::error::{ensure_finite, LcResult, LensCalcError};

/// Number of values in an ordered coefficient list `[conic, a4, a6, a8, a10, a12, a14]`
pub const NR_OF_COEFFICIENTS: usize = 7;

/// Conic constant and aspheric coefficients (A4 ... A14) of an optical surface.
///
/// The default value (all terms 0.0) describes a pure sphere. Coefficients refer to lengths in mm, i.e.
/// `a4` is given in 1/mm³, `a6` in 1/mm⁵ and so on.
///
/// Missing fields are set to 0.0 during deserialization, so a prescription only has to list the terms
/// that are actually used:
/// ```yaml
/// conic: -0.5
/// a4: 1.0e-6
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AsphericCoefficients {
    /// conic constant `k` (0: sphere, -1: paraboloid, < -1: hyperboloid, otherwise ellipsoid)
    pub conic: f64,
    /// 4th order coefficient
    pub a4: f64,
    /// 6th order coefficient
    pub a6: f64,
    /// 8th order coefficient
    pub a8: f64,
    /// 10th order coefficient
    pub a10: f64,
    /// 12th order coefficient
    pub a12: f64,
    /// 14th order coefficient
    pub a14: f64,
}
impl AsphericCoefficients {
    /// Create a pure conic surface with the given conic constant.
    #[must_use]
    pub const fn new(conic: f64) -> Self {
        Self {
            conic,
            a4: 0.0,
            a6: 0.0,
            a8: 0.0,
            a10: 0.0,
            a12: 0.0,
            a14: 0.0,
        }
    }
    /// Set the 4th order coefficient.
    #[must_use]
    pub const fn with_a4(mut self, a4: f64) -> Self {
        self.a4 = a4;
        self
    }
    /// Set the 6th order coefficient.
    #[must_use]
    pub const fn with_a6(mut self, a6: f64) -> Self {
        self.a6 = a6;
        self
    }
    /// Set the 8th order coefficient.
    #[must_use]
    pub const fn with_a8(mut self, a8: f64) -> Self {
        self.a8 = a8;
        self
    }
    /// Set the 10th order coefficient.
    #[must_use]
    pub const fn with_a10(mut self, a10: f64) -> Self {
        self.a10 = a10;
        self
    }
    /// Set the 12th order coefficient.
    #[must_use]
    pub const fn with_a12(mut self, a12: f64) -> Self {
        self.a12 = a12;
        self
    }
    /// Set the 14th order coefficient.
    #[must_use]
    pub const fn with_a14(mut self, a14: f64) -> Self {
        self.a14 = a14;
        self
    }
    /// Returns `true` if all terms are zero, i.e. the surface is a pure sphere (or a plane).
    #[must_use]
    pub fn is_spherical(&self) -> bool {
        self.named_terms().iter().all(|(_, value)| *value == 0.0)
    }
    /// Polynomial part `a4·h⁴ + a6·h⁶ + ... + a14·h¹⁴` at the height `h` (in mm).
    #[must_use]
    pub fn polynomial(&self, h: f64) -> f64 {
        self.a4 * h.powi(4)
            + self.a6 * h.powi(6)
            + self.a8 * h.powi(8)
            + self.a10 * h.powi(10)
            + self.a12 * h.powi(12)
            + self.a14 * h.powi(14)
    }
    /// Check that all terms are finite numbers.
    ///
    /// # Errors
    ///
    /// This function returns [`LensCalcError::InvalidArgument`] naming the first term which is NaN or infinite.
    pub fn validate(&self) -> LcResult<()> {
        for (name, value) in self.named_terms() {
            ensure_finite(value, name)?;
        }
        Ok(())
    }
    const fn named_terms(&self) -> [(&'static str, f64); NR_OF_COEFFICIENTS] {
        [
            ("conic", self.conic),
            ("a4", self.a4),
            ("a6", self.a6),
            ("a8", self.a8),
            ("a10", self.a10),
            ("a12", self.a12),
            ("a14", self.a14),
        ]
    }
}
impl TryFrom<&[f64]> for AsphericCoefficients {
    type Error = LensCalcError;

    /// Build coefficients from an ordered list `[conic, a4, a6, a8, a10, a12, a14]`.
    ///
    /// Shorter lists leave the remaining terms at 0.0.
    fn try_from(values: &[f64]) -> LcResult<Self> {
        if values.len() > NR_OF_COEFFICIENTS {
            return Err(LensCalcError::InvalidArgument("coefficients".into()));
        }
        let mut terms = [0.0; NR_OF_COEFFICIENTS];
        terms[..values.len()].copy_from_slice(values);
        let [conic, a4, a6, a8, a10, a12, a14] = terms;
        Ok(Self {
            conic,
            a4,
            a6,
            a8,
            a10,
            a12,
            a14,
        })
    }
}
#[cfg(test)]
mod test {
    use super::*;
    use approx::assert_relative_eq;
    #[test]
    fn default() {
        let c = AsphericCoefficients::default();
        assert_eq!(c, AsphericCoefficients::new(0.0));
        assert!(c.is_spherical());
        assert_eq!(c.polynomial(10.0), 0.0);
    }
    #[test]
    fn builder() {
        let c = AsphericCoefficients::new(-0.8)
            .with_a4(2.5e-6)
            .with_a6(-1.2e-9)
            .with_a8(5.3e-13)
            .with_a10(-8.7e-17)
            .with_a12(3.2e-20)
            .with_a14(-6.1e-24);
        assert_eq!(c.conic, -0.8);
        assert_eq!(c.a4, 2.5e-6);
        assert_eq!(c.a6, -1.2e-9);
        assert_eq!(c.a8, 5.3e-13);
        assert_eq!(c.a10, -8.7e-17);
        assert_eq!(c.a12, 3.2e-20);
        assert_eq!(c.a14, -6.1e-24);
        assert!(!c.is_spherical());
        assert!(!AsphericCoefficients::new(-1.0).is_spherical());
    }
    #[test]
    fn polynomial() {
        let c = AsphericCoefficients::default().with_a4(1e-6);
        assert_relative_eq!(c.polynomial(10.0), 0.01, max_relative = 1e-12);
        let c = AsphericCoefficients::default().with_a6(1e-9);
        assert_relative_eq!(c.polynomial(10.0), 0.001, max_relative = 1e-12);
        let c = AsphericCoefficients::default().with_a14(1e-21);
        assert_relative_eq!(c.polynomial(10.0), 1e-7, max_relative = 1e-12);
        let c = AsphericCoefficients::new(5.0);
        assert_eq!(c.polynomial(10.0), 0.0);
    }
    #[test]
    fn validate() {
        assert!(AsphericCoefficients::default().validate().is_ok());
        assert_eq!(
            AsphericCoefficients::new(f64::NAN).validate(),
            Err(LensCalcError::InvalidArgument("conic".into()))
        );
        assert_eq!(
            AsphericCoefficients::default()
                .with_a10(f64::INFINITY)
                .validate(),
            Err(LensCalcError::InvalidArgument("a10".into()))
        );
    }
    #[test]
    fn try_from_slice() {
        let c = AsphericCoefficients::try_from(&[-0.5, 1e-6][..]).unwrap();
        assert_eq!(c, AsphericCoefficients::new(-0.5).with_a4(1e-6));
        let empty: [f64; 0] = [];
        let c = AsphericCoefficients::try_from(&empty[..]).unwrap();
        assert!(c.is_spherical());
        let c = AsphericCoefficients::try_from(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0][..]).unwrap();
        assert_eq!(c.a14, 7.0);
        assert_eq!(
            AsphericCoefficients::try_from(&[0.0; 8][..]),
            Err(LensCalcError::InvalidArgument("coefficients".into()))
        );
    }
    #[test]
    fn deserialize_partial() {
        let c: AsphericCoefficients = serde_yaml::from_str("conic: -0.5\na4: 1.0e-6\n").unwrap();
        assert_eq!(c, AsphericCoefficients::new(-0.5).with_a4(1e-6));
    }
}
