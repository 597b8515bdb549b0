//! Parsing for Unity asset file formats.
//!
//! This module handles reading AnimatorController data out of Unity's
//! serialized `.controller` YAML files.

pub mod controller_yaml;

// Re-export commonly used functions
pub use controller_yaml::{parse_controller_file, parse_controller_str};
