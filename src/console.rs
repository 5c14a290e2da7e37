//! Handling the lenscalc CLI
//!
//! This module handles the command line parsing as well as basic information (e.g. help dialog, version information, etc.).
use clap::{Parser, Subcommand};

use crate::{
    error::{LcResult, LensCalcError},
    lens::{focal_length, glass_weight},
    surface::{sag, AsphericCoefficients, NR_OF_COEFFICIENTS},
};

/// Output for calculations without a valid result (e.g. an aperture beyond the valid zone of a surface).
pub const NO_RESULT: &str = "no result";

/// Command line arguments for the lenscalc application.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// calculation to be performed
    #[command(subcommand)]
    pub command: Command,
}

/// Calculations offered by the command line interface. All lengths are given in mm.
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// sag of a (conic / aspheric) surface at the given diameter
    Sag {
        /// diameter at which the sag is calculated
        #[arg(short, long, allow_negative_numbers = true)]
        diameter: f64,

        /// radius of curvature. omit for a flat surface
        #[arg(short, long, allow_negative_numbers = true)]
        radius: Option<f64>,

        /// conic constant and aspheric coefficients as comma separated list: k,a4,a6,...,a14
        #[arg(short, long, value_delimiter = ',', allow_hyphen_values = true)]
        asphere: Vec<f64>,
    },
    /// effective focal length of a singlet lens
    FocalLength {
        /// radius of curvature of the front surface. omit for a flat surface
        #[arg(long, allow_negative_numbers = true)]
        radius1: Option<f64>,

        /// radius of curvature of the rear surface. omit for a flat surface
        #[arg(long, allow_negative_numbers = true)]
        radius2: Option<f64>,

        /// center thickness
        #[arg(short, long, allow_negative_numbers = true)]
        thickness: f64,

        /// refractive index
        #[arg(short = 'n', long, allow_negative_numbers = true)]
        index: f64,
    },
    /// glass weight (in g) of a singlet lens
    Weight {
        /// radius of curvature of the front surface. omit for a flat surface
        #[arg(long, allow_negative_numbers = true)]
        radius1: Option<f64>,

        /// radius of curvature of the rear surface. omit for a flat surface
        #[arg(long, allow_negative_numbers = true)]
        radius2: Option<f64>,

        /// center thickness
        #[arg(short, long, allow_negative_numbers = true)]
        thickness: f64,

        /// specific gravity of the glass in g/cm³
        #[arg(short, long, allow_negative_numbers = true)]
        gravity: f64,

        /// effective aperture of the front surface
        #[arg(long, allow_negative_numbers = true)]
        diameter1: f64,

        /// effective aperture of the rear surface
        #[arg(long, allow_negative_numbers = true)]
        diameter2: f64,

        /// outer diameter of the lens
        #[arg(short, long, allow_negative_numbers = true)]
        max_diameter: f64,

        /// conic constant and aspheric coefficients of the front surface: k,a4,a6,...,a14
        #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
        asphere1: Vec<f64>,

        /// conic constant and aspheric coefficients of the rear surface: k,a4,a6,...,a14
        #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
        asphere2: Vec<f64>,
    },
}

/// Converts the list given on the command line into a set of [`AsphericCoefficients`].
fn parse_coefficients(values: &[f64], flag: &str) -> LcResult<AsphericCoefficients> {
    AsphericCoefficients::try_from(values).map_err(|_| {
        LensCalcError::Console(format!(
            "--{flag} accepts at most {NR_OF_COEFFICIENTS} values (conic, a4, ..., a14) but {} were given",
            values.len()
        ))
    })
}

fn format_optional(value: Option<f64>) -> String {
    value.map_or_else(|| NO_RESULT.to_owned(), |v| v.to_string())
}

impl Command {
    /// Performs the calculation and returns the output line.
    ///
    /// Calculations without a valid result yield [`NO_RESULT`], a lens without optical power yields `Inf`.
    ///
    /// # Errors
    ///
    /// This function returns an error if
    ///   - too many aspheric coefficients were given
    ///   - one of the numeric parameters is invalid (see [`sag`] and [`glass_weight`])
    pub fn execute(&self) -> LcResult<String> {
        match self {
            Self::Sag {
                diameter,
                radius,
                asphere,
            } => {
                let coefficients = parse_coefficients(asphere, "asphere")?;
                Ok(format_optional(sag(*radius, *diameter, Some(&coefficients))?))
            }
            Self::FocalLength {
                radius1,
                radius2,
                thickness,
                index,
            } => Ok(focal_length(*radius1, *radius2, *thickness, *index).to_string()),
            Self::Weight {
                radius1,
                radius2,
                thickness,
                gravity,
                diameter1,
                diameter2,
                max_diameter,
                asphere1,
                asphere2,
            } => {
                let coefficients1 = parse_coefficients(asphere1, "asphere1")?;
                let coefficients2 = parse_coefficients(asphere2, "asphere2")?;
                let weight = glass_weight(
                    *radius1,
                    *radius2,
                    *thickness,
                    *gravity,
                    *diameter1,
                    *diameter2,
                    *max_diameter,
                    Some(&coefficients1),
                    Some(&coefficients2),
                )?;
                Ok(format_optional(weight))
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use approx::assert_relative_eq;
    use assert_matches::assert_matches;

    fn run(args: &[&str]) -> LcResult<String> {
        let mut full_args = vec!["lenscalc"];
        full_args.extend_from_slice(args);
        Args::try_parse_from(full_args).unwrap().command.execute()
    }
    fn run_value(args: &[&str]) -> f64 {
        run(args).unwrap().parse::<f64>().unwrap()
    }
    #[test]
    fn parse_sag() {
        let args =
            Args::try_parse_from(["lenscalc", "sag", "-d", "20", "-r", "-50", "-a", "-0.5,1e-6"])
                .unwrap();
        assert_eq!(
            args.command,
            Command::Sag {
                diameter: 20.0,
                radius: Some(-50.0),
                asphere: vec![-0.5, 1e-6]
            }
        );
    }
    #[test]
    fn parse_missing_argument() {
        assert!(Args::try_parse_from(["lenscalc", "sag", "--radius", "50"]).is_err());
        assert!(Args::try_parse_from(["lenscalc", "focal-length", "--thickness", "5"]).is_err());
        assert!(Args::try_parse_from(["lenscalc"]).is_err());
    }
    #[test]
    fn parse_non_numeric() {
        assert!(Args::try_parse_from(["lenscalc", "sag", "--diameter", "true"]).is_err());
    }
    #[test]
    fn sag() {
        assert_relative_eq!(
            run_value(&["sag", "--diameter", "20", "--radius", "50"]),
            1.010_205_144_336_438,
            max_relative = 1e-7
        );
        assert_relative_eq!(
            run_value(&["sag", "--diameter", "20", "--radius", "50", "--asphere", "-0.5"]),
            1.005_050_633_883_346,
            max_relative = 1e-7
        );
        assert_eq!(run(&["sag", "--diameter", "20"]).unwrap(), "0");
        assert_eq!(
            run(&["sag", "--diameter", "100", "--radius", "10"]).unwrap(),
            NO_RESULT
        );
    }
    #[test]
    fn sag_too_many_coefficients() {
        assert_matches!(
            run(&["sag", "-d", "20", "-a", "0,0,0,0,0,0,0,0"]),
            Err(LensCalcError::Console(_))
        );
    }
    #[test]
    fn sag_invalid_argument() {
        assert_eq!(
            run(&["sag", "--diameter", "NaN"]),
            Err(LensCalcError::InvalidArgument("diameter".into()))
        );
    }
    #[test]
    fn focal_length() {
        assert_relative_eq!(
            run_value(&[
                "focal-length",
                "--radius1",
                "100",
                "--radius2",
                "-100",
                "--thickness",
                "5",
                "--index",
                "1.5168"
            ]),
            97.580_409_345_288_17,
            max_relative = 1e-7
        );
        assert_eq!(
            run(&["focal-length", "-t", "5", "-n", "1.5"]).unwrap(),
            "Inf"
        );
    }
    #[test]
    fn weight() {
        assert_relative_eq!(
            run_value(&[
                "weight",
                "--radius1",
                "100",
                "--radius2",
                "-100",
                "-t",
                "8",
                "-g",
                "2.5",
                "--diameter1",
                "40",
                "--diameter2",
                "40",
                "-m",
                "40"
            ]),
            18.807_022_470_977_223,
            max_relative = 1e-9
        );
        assert_relative_eq!(
            run_value(&[
                "weight",
                "-t",
                "5",
                "-g",
                "2.5",
                "--diameter1",
                "40",
                "--diameter2",
                "40",
                "-m",
                "40"
            ]),
            15.707_963_267_948_966,
            max_relative = 1e-9
        );
    }
    #[test]
    fn weight_aspheric() {
        assert_relative_eq!(
            run_value(&[
                "weight",
                "--radius1",
                "50",
                "--radius2",
                "-60",
                "-t",
                "6",
                "-g",
                "2.6",
                "--diameter1",
                "45",
                "--diameter2",
                "45",
                "-m",
                "45",
                "--asphere1",
                "-0.5,1e-6",
                "--asphere2",
                "-0.8,-2e-6"
            ]),
            4.336_241_665_500_921,
            max_relative = 1e-9
        );
    }
    #[test]
    fn weight_no_result() {
        assert_eq!(
            run(&[
                "weight",
                "--radius1",
                "5",
                "-t",
                "3",
                "-g",
                "2.5",
                "--diameter1",
                "25",
                "--diameter2",
                "20",
                "-m",
                "25",
                "--asphere1",
                "10"
            ])
            .unwrap(),
            NO_RESULT
        );
    }
}
