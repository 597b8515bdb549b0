//! Animator controller data structures.

use serde::{Deserialize, Serialize};

/// Type of an animator parameter.
///
/// Unity serializes the type as an integer code inside `.controller`
/// assets; the codes are stable across editor versions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParameterType {
    /// Continuous value parameter (code 1)
    Float,
    /// Integer value parameter (code 3)
    Int,
    /// Boolean flag parameter (code 4)
    Bool,
    /// One-shot trigger parameter (code 9)
    Trigger,
}

impl ParameterType {
    /// Maps a serialized Unity type code to a parameter type.
    pub fn from_unity_code(code: i64) -> Option<Self> {
        match code {
            1 => Some(ParameterType::Float),
            3 => Some(ParameterType::Int),
            4 => Some(ParameterType::Bool),
            9 => Some(ParameterType::Trigger),
            _ => None,
        }
    }

    /// The type tag string consumed by the identifier formatter.
    pub fn type_tag(self) -> &'static str {
        match self {
            ParameterType::Float => "float",
            ParameterType::Int => "int",
            ParameterType::Bool => "bool",
            ParameterType::Trigger => "trigger",
        }
    }
}

/// A named, typed animator parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parameter {
    /// Parameter name as authored in the controller
    pub name: String,
    /// Parameter type
    pub param_type: ParameterType,
}

/// A named animator layer.
///
/// The layer's index is its position in the controller's layer list; the
/// generated constant uses that index, not a hash.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnimatorLayer {
    /// Layer name as authored in the controller
    pub name: String,
}

/// An animator controller asset: a name plus its parameters and layers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnimatorController {
    /// Controller name (the asset's `m_Name`)
    pub name: String,
    /// Parameters in file order
    pub parameters: Vec<Parameter>,
    /// Layers in file order
    pub layers: Vec<AnimatorLayer>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unity_type_codes_round_trip() {
        assert_eq!(ParameterType::from_unity_code(1), Some(ParameterType::Float));
        assert_eq!(ParameterType::from_unity_code(3), Some(ParameterType::Int));
        assert_eq!(ParameterType::from_unity_code(4), Some(ParameterType::Bool));
        assert_eq!(
            ParameterType::from_unity_code(9),
            Some(ParameterType::Trigger)
        );
        assert_eq!(ParameterType::from_unity_code(2), None);
    }

    #[test]
    fn type_tags_match_formatter_inputs() {
        assert_eq!(ParameterType::Bool.type_tag(), "bool");
        assert_eq!(ParameterType::Trigger.type_tag(), "trigger");
    }
}
