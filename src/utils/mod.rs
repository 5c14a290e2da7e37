//! Module for additional helpers (unit macros, test helpers)
#[cfg(test)]
pub mod test_helper;
pub mod uom_macros;
