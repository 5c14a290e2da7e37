//! helper functions used to simplify unit tests.
//!
//! **Note**: This module is only compiled and used during testing.
use log::Level;

/// Compare the captured warnings with the expected messages (in order).
///
/// `testing_logger::setup()` has to be called before the code under test.
pub fn check_warnings(expected_warnings: Vec<&str>) {
    check_logs(Level::Warn, expected_warnings);
}

/// Compare the captured log messages of the given level with the expected messages (in order).
pub fn check_logs(level: Level, expected: Vec<&str>) {
    testing_logger::validate(|captured_logs| {
        let messages: Vec<&str> = captured_logs
            .iter()
            .filter(|l| l.level == level)
            .map(|l| l.body.as_str())
            .collect();
        assert_eq!(messages, expected);
    });
}
