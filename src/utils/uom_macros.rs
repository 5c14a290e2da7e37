#![warn(missing_docs)]
//! Module for uom macros that facilitate the creation of single unit values or lists of them
/// helper macro to create the units
///
/// A single value creates a quantity, several values create a `Vec` of quantities.
#[macro_export]
macro_rules! uom_unit_creator {
    ($unit:ident, $unit_type:ident, $val1:expr) => {
        $unit_type::new::<$unit>($val1)
    };
    ($unit:ident, $unit_type:ident, $( $x:expr ),*) => {
        {
            use std::vec::Vec;
            let mut temp_vec = Vec::new();
            $(
                temp_vec.push($unit_type::new::<$unit>($x));
            )*
            temp_vec
        }
    };
}

///macro to create a Length in millimeter
#[macro_export]
macro_rules! millimeter {
    ($( $x:expr ),*) =>{{
        use uom::si::{f64::Length, length::millimeter};
        $crate::uom_unit_creator![millimeter, Length, $( $x ),*]
    }};
}
///macro to create a Mass in gram
#[macro_export]
macro_rules! gram {
    ($( $x:expr ),*) =>{{
        use uom::si::{f64::Mass, mass::gram};
        $crate::uom_unit_creator![gram, Mass, $( $x ),*]
    }};
}
///macro to create a `MassDensity` (specific gravity) in g/cm³
#[macro_export]
macro_rules! gram_per_cubic_centimeter {
    ($( $x:expr ),*) =>{{
        use uom::si::{f64::MassDensity, mass_density::gram_per_cubic_centimeter};
        $crate::uom_unit_creator![gram_per_cubic_centimeter, MassDensity, $( $x ),*]
    }};
}
