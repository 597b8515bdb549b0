//! Shared CLI error handling and flag parsing.

use crate::formatter::{Casing, Delimiter, TypeIndicatorLocation, TypeIndicatorMode};
use std::fmt;

/// Result type for CLI command execution.
pub type CliResult<T> = Result<T, CliError>;

/// Process exit codes for CLI commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Command completed successfully
    Success,
    /// Invalid arguments or configuration
    ValidationError,
    /// File system or parse failure
    IoError,
}

impl ExitCode {
    /// The numeric code passed to `std::process::exit`.
    #[must_use]
    pub fn code(self) -> i32 {
        match self {
            ExitCode::Success => 0,
            ExitCode::ValidationError => 1,
            ExitCode::IoError => 2,
        }
    }
}

/// A CLI-level error with an associated exit code.
#[derive(Debug)]
pub enum CliError {
    /// Invalid arguments or configuration
    Validation(String),
    /// File system or parse failure
    Io(String),
}

impl CliError {
    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        CliError::Validation(message.into())
    }

    /// Creates an I/O error.
    pub fn io(message: impl Into<String>) -> Self {
        CliError::Io(message.into())
    }

    /// The exit code for this error.
    #[must_use]
    pub fn exit_code(&self) -> ExitCode {
        match self {
            CliError::Validation(_) => ExitCode::ValidationError,
            CliError::Io(_) => ExitCode::IoError,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Validation(message) | CliError::Io(message) => write!(f, "{message}"),
        }
    }
}

impl std::error::Error for CliError {}

/// Parses a casing flag value ("none", "upper", or "lower").
pub fn parse_casing(value: &str) -> CliResult<Casing> {
    match value {
        "none" => Ok(Casing::None),
        "upper" => Ok(Casing::Upper),
        "lower" => Ok(Casing::Lower),
        _ => Err(CliError::validation(format!(
            "Invalid casing '{value}'. Must be 'none', 'upper', or 'lower'"
        ))),
    }
}

/// Parses a delimiter flag value ("none" or "underscore").
pub fn parse_delimiter(value: &str) -> CliResult<Delimiter> {
    match value {
        "none" => Ok(Delimiter::None),
        "underscore" => Ok(Delimiter::Underscore),
        _ => Err(CliError::validation(format!(
            "Invalid delimiter '{value}'. Must be 'none' or 'underscore'"
        ))),
    }
}

/// Parses a type indicator flag value ("none", "single-letter", or "full-type").
pub fn parse_type_indicator(value: &str) -> CliResult<TypeIndicatorMode> {
    match value {
        "none" => Ok(TypeIndicatorMode::None),
        "single-letter" => Ok(TypeIndicatorMode::SingleLetter),
        "full-type" => Ok(TypeIndicatorMode::FullType),
        _ => Err(CliError::validation(format!(
            "Invalid type indicator '{value}'. Must be 'none', 'single-letter', or 'full-type'"
        ))),
    }
}

/// Parses a type indicator location flag value ("prefix" or "suffix").
pub fn parse_type_location(value: &str) -> CliResult<TypeIndicatorLocation> {
    match value {
        "prefix" => Ok(TypeIndicatorLocation::Prefix),
        "suffix" => Ok(TypeIndicatorLocation::Suffix),
        _ => Err(CliError::validation(format!(
            "Invalid type location '{value}'. Must be 'prefix' or 'suffix'"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes() {
        assert_eq!(ExitCode::Success.code(), 0);
        assert_eq!(CliError::validation("bad").exit_code().code(), 1);
        assert_eq!(CliError::io("worse").exit_code().code(), 2);
    }

    #[test]
    fn flag_parsing() {
        assert_eq!(parse_casing("upper").unwrap(), Casing::Upper);
        assert!(parse_casing("UPPER").is_err());
        assert_eq!(parse_delimiter("underscore").unwrap(), Delimiter::Underscore);
        assert_eq!(
            parse_type_indicator("single-letter").unwrap(),
            TypeIndicatorMode::SingleLetter
        );
        assert_eq!(
            parse_type_location("suffix").unwrap(),
            TypeIndicatorLocation::Suffix
        );
        assert!(parse_type_location("middle").is_err());
    }
}
