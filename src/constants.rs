//! Application-wide constants.

/// The display name of the application (human-readable).
pub const APP_NAME: &str = "Animator Hash Generator";

/// The binary name of the application (used in command examples).
pub const APP_BINARY_NAME: &str = "animhash";
