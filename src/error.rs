#![warn(missing_docs)]
//! lenscalc specific error structures
use std::{error::Error, fmt::Display};

/// lenscalc specific Result type
pub type LcResult<T> = std::result::Result<T, LensCalcError>;

/// Errors that can be returned by the lens calculations.
///
/// Note that a physically impossible geometry (e.g. an aperture beyond the valid zone of a conic surface) is
/// not an error. It is reported as `Ok(None)` by the respective functions.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum LensCalcError {
    /// a numeric input parameter is not a (finite) number. Contains the name of the parameter.
    InvalidArgument(String),
    /// errors while parsing command line input
    Console(String),
    /// errors not falling in one of the categories above
    Other(String),
}

impl Display for LensCalcError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidArgument(name) => {
                write!(f, "InvalidArgument:{name} must be a finite number")
            }
            Self::Console(m) => {
                write!(f, "Console:{m}")
            }
            Self::Other(m) => write!(f, "lenscalc Error:Other:{m}"),
        }
    }
}
impl Error for LensCalcError {}

impl std::convert::From<String> for LensCalcError {
    fn from(msg: String) -> Self {
        Self::Other(msg)
    }
}

/// Check that the given value can be used as a numeric input.
///
/// # Errors
///
/// Returns [`LensCalcError::InvalidArgument`] carrying `name` if `value` is NaN or infinite.
pub(crate) fn ensure_finite(value: f64, name: &str) -> LcResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(LensCalcError::InvalidArgument(name.into()))
    }
}
