//! Identifier formatting for generated hash constants.
//!
//! This module is the pure core of the tool: it maps a raw parameter or
//! layer name plus a formatting configuration to a legal C# identifier,
//! and renders the final declaration lines. It performs no I/O and holds
//! no state; the same inputs always produce the same output.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Casing applied to a name or type indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Casing {
    /// Leave the text as-is
    #[default]
    None,
    /// Uppercase the whole text
    Upper,
    /// Lowercase the whole text
    Lower,
}

/// Word delimiter inserted between name words.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Delimiter {
    /// No delimiter
    #[default]
    None,
    /// Separate words with underscores
    Underscore,
}

/// How a parameter's type is encoded into its identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum TypeIndicatorMode {
    /// No type indicator
    #[default]
    None,
    /// First letter of the type tag ("b" for bool, "t" for trigger)
    SingleLetter,
    /// The full type tag ("bool", "float", "int", "trigger")
    FullType,
}

/// Where the type indicator is attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum TypeIndicatorLocation {
    /// Before the name
    #[default]
    Prefix,
    /// After the name
    Suffix,
}

/// Formatting rules for parameter identifiers.
///
/// Immutable configuration consumed by [`format_identifier`]. Layer
/// identifiers use only the `name_casing`/`name_delimiter` pair via
/// [`format_layer_identifier`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct FormattingConfig {
    /// Casing applied to the name after delimiting
    pub name_casing: Casing,
    /// Word delimiter for the name (Underscore splits camelCase words)
    pub name_delimiter: Delimiter,
    /// Type indicator derivation mode
    pub type_indicator: TypeIndicatorMode,
    /// Casing applied to the type indicator
    pub type_indicator_casing: Casing,
    /// Delimiter between type indicator and name
    pub type_indicator_delimiter: Delimiter,
    /// Prefix or suffix placement of the type indicator
    pub type_indicator_location: TypeIndicatorLocation,
}

/// Failure producing a legal identifier.
///
/// The formatter itself does not validate reserved words; it only rejects
/// results that can never be a C# identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// The formatted result was empty (empty raw name and no indicator)
    Empty {
        /// The raw name that produced the empty result
        raw_name: String,
    },
    /// The formatted result starts with a digit
    LeadingDigit {
        /// The offending identifier
        identifier: String,
    },
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatError::Empty { raw_name } => {
                write!(f, "formatted identifier for '{raw_name}' is empty")
            }
            FormatError::LeadingDigit { identifier } => {
                write!(f, "formatted identifier '{identifier}' starts with a digit")
            }
        }
    }
}

impl std::error::Error for FormatError {}

impl Casing {
    fn apply(self, text: &str) -> String {
        match self {
            Casing::None => text.to_string(),
            Casing::Upper => text.to_uppercase(),
            Casing::Lower => text.to_lowercase(),
        }
    }
}

/// Formats a raw parameter name into its final identifier.
///
/// The steps run in a fixed order: derive the type indicator from the type
/// tag, case it, split and delimit the name, case the name, then attach the
/// indicator with its delimiter on the configured side. With an all-`None`
/// config the name passes through unchanged.
pub fn format_identifier(
    raw_name: &str,
    type_tag: &str,
    config: &FormattingConfig,
) -> Result<String, FormatError> {
    let type_indicator = match config.type_indicator {
        TypeIndicatorMode::None => String::new(),
        TypeIndicatorMode::SingleLetter => {
            type_tag.chars().next().map(String::from).unwrap_or_default()
        }
        TypeIndicatorMode::FullType => type_tag.to_string(),
    };
    let type_indicator = config.type_indicator_casing.apply(&type_indicator);

    let type_delimiter = match config.type_indicator_delimiter {
        Delimiter::None => "",
        Delimiter::Underscore => "_",
    };

    let mut name = match config.name_delimiter {
        Delimiter::None => raw_name.to_string(),
        Delimiter::Underscore => split_camel_case(raw_name).replace(' ', "_"),
    };
    name = config.name_casing.apply(&name);

    let identifier = match config.type_indicator_location {
        TypeIndicatorLocation::Prefix => {
            if config.type_indicator == TypeIndicatorMode::None {
                name
            } else {
                format!("{type_indicator}{type_delimiter}{name}")
            }
        }
        TypeIndicatorLocation::Suffix => {
            if config.type_indicator == TypeIndicatorMode::None {
                name
            } else {
                format!("{name}{type_delimiter}{type_indicator}")
            }
        }
    };

    validate_identifier(identifier, raw_name)
}

/// Formats a raw layer name into its final identifier.
///
/// Layers carry no type, and their names commonly contain spaces ("Base
/// Layer"), so the delimiter works on spaces directly instead of splitting
/// camelCase: `None` removes spaces, `Underscore` replaces them.
pub fn format_layer_identifier(
    raw_name: &str,
    casing: Casing,
    delimiter: Delimiter,
) -> Result<String, FormatError> {
    let name = match delimiter {
        Delimiter::None => raw_name.replace(' ', ""),
        Delimiter::Underscore => raw_name.replace(' ', "_"),
    };
    let name = casing.apply(&name);

    validate_identifier(name, raw_name)
}

fn validate_identifier(identifier: String, raw_name: &str) -> Result<String, FormatError> {
    match identifier.chars().next() {
        None => Err(FormatError::Empty {
            raw_name: raw_name.to_string(),
        }),
        Some(c) if c.is_ascii_digit() => Err(FormatError::LeadingDigit { identifier }),
        Some(_) => Ok(identifier),
    }
}

/// Splits camelCase/PascalCase words by inserting spaces at word boundaries.
///
/// An explicit character scan rather than a regex so the boundary rules are
/// pinned down exactly. A space is inserted before a character when:
/// - the previous character is lowercase and this one is not
///   (`isWalking` -> `is Walking`), or
/// - the previous character is not lowercase, this one is not lowercase,
///   and the next one is (`HPBar` -> `HP Bar`).
///
/// A trailing uppercase run stays attached (`maxHP` -> `max HP`).
/// Underscores are existing word boundaries: no split is inserted next to
/// one, so a name that already carries the target delimiter passes through
/// unchanged and formatting stays idempotent.
pub fn split_camel_case(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut result = String::with_capacity(text.len() + 4);

    for (i, &c) in chars.iter().enumerate() {
        if i > 0 && c != '_' && chars[i - 1] != '_' {
            let prev_lower = chars[i - 1].is_lowercase();
            let cur_lower = c.is_lowercase();
            let next_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());

            if (prev_lower && !cur_lower) || (!prev_lower && !cur_lower && next_lower) {
                result.push(' ');
            }
        }
        result.push(c);
    }

    result
}

/// Renders the declaration line for a parameter hash constant.
///
/// The raw name is embedded exactly once as an escaped C# string literal,
/// so the constant hashes the exact parameter name at the consumer's
/// runtime.
pub fn parameter_line(identifier: &str, raw_name: &str) -> String {
    format!(
        "public static readonly int {identifier} = Animator.StringToHash(\"{}\");",
        escape_cs_string(raw_name)
    )
}

/// Renders the declaration line for a layer index constant.
///
/// Layers are referenced by position, not by hash, so the value is the
/// layer's index in the controller.
pub fn layer_line(identifier: &str, index: usize) -> String {
    format!("public static readonly int {identifier} = {index};")
}

/// Escapes a string for use inside a double-quoted C# string literal.
fn escape_cs_string(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            _ => escaped.push(c),
        }
    }
    escaped
}
