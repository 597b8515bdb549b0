//! Unity `.controller` asset parsing.
//!
//! Unity serializes AnimatorController assets as multi-document YAML with
//! non-standard `!u!<classID>` tags and `%TAG` directives. Standard YAML
//! parsers reject those, so the documents are split and stripped by hand
//! first, then each body is parsed normally. The document whose root key is
//! `AnimatorController` carries the name, parameters, and layers; the other
//! documents (state machines, states, transitions) are ignored.

use crate::models::{AnimatorController, AnimatorLayer, Parameter, ParameterType};
use anyhow::{bail, Context, Result};
use std::fs;
use std::path::Path;

/// Parses an AnimatorController from a `.controller` file.
pub fn parse_controller_file(path: &Path) -> Result<AnimatorController> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read controller file: {}", path.display()))?;

    parse_controller_str(&content)
        .with_context(|| format!("Failed to parse controller file: {}", path.display()))
}

/// Parses an AnimatorController from raw `.controller` file contents.
pub fn parse_controller_str(content: &str) -> Result<AnimatorController> {
    for document in split_documents(content) {
        let value: serde_yml::Value = match serde_yml::from_str(&document) {
            Ok(value) => value,
            // Sub-assets can contain constructs we don't care about;
            // only the AnimatorController document has to parse.
            Err(_) => continue,
        };

        if let Some(root) = value.get("AnimatorController") {
            return build_controller(root);
        }
    }

    bail!("No AnimatorController document found in file")
}

/// Splits a Unity asset file into plain YAML document bodies.
///
/// Drops the `%YAML`/`%TAG` directives and the `--- !u!<class> &<fileID>`
/// markers; everything between two markers is one document body.
fn split_documents(content: &str) -> Vec<String> {
    let mut documents = Vec::new();
    let mut current = String::new();

    for line in content.lines() {
        if line.starts_with('%') {
            continue;
        }
        if line.starts_with("---") {
            if !current.trim().is_empty() {
                documents.push(std::mem::take(&mut current));
            }
            continue;
        }
        current.push_str(line);
        current.push('\n');
    }

    if !current.trim().is_empty() {
        documents.push(current);
    }

    documents
}

fn build_controller(root: &serde_yml::Value) -> Result<AnimatorController> {
    let name = root
        .get("m_Name")
        .and_then(serde_yml::Value::as_str)
        .context("AnimatorController is missing m_Name")?
        .to_string();

    let mut parameters = Vec::new();
    if let Some(entries) = root
        .get("m_AnimatorParameters")
        .and_then(serde_yml::Value::as_sequence)
    {
        for entry in entries {
            let param_name = entry
                .get("m_Name")
                .and_then(serde_yml::Value::as_str)
                .context("Animator parameter is missing m_Name")?
                .to_string();

            let code = entry
                .get("m_Type")
                .and_then(serde_yml::Value::as_i64)
                .with_context(|| format!("Parameter '{param_name}' is missing m_Type"))?;

            let param_type = ParameterType::from_unity_code(code).with_context(|| {
                format!("Parameter '{param_name}' has unknown type code {code}")
            })?;

            parameters.push(Parameter {
                name: param_name,
                param_type,
            });
        }
    }

    let mut layers = Vec::new();
    if let Some(entries) = root
        .get("m_AnimatorLayers")
        .and_then(serde_yml::Value::as_sequence)
    {
        for entry in entries {
            let layer_name = entry
                .get("m_Name")
                .and_then(serde_yml::Value::as_str)
                .context("Animator layer is missing m_Name")?
                .to_string();

            layers.push(AnimatorLayer { name: layer_name });
        }
    }

    Ok(AnimatorController {
        name,
        parameters,
        layers,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
%YAML 1.1
%TAG !u! tag:unity3d.com,2011:
--- !u!91 &9100000
AnimatorController:
  m_ObjectHideFlags: 0
  m_Name: PlayerController
  serializedVersion: 5
  m_AnimatorParameters:
  - m_Name: walkSpeed
    m_Type: 1
    m_DefaultFloat: 0
  - m_Name: isWalking
    m_Type: 4
    m_DefaultBool: 0
  - m_Name: jump
    m_Type: 9
  m_AnimatorLayers:
  - serializedVersion: 5
    m_Name: Base Layer
    m_DefaultWeight: 1
  - serializedVersion: 5
    m_Name: Upper Body
    m_DefaultWeight: 0
--- !u!1107 &1107000001
AnimatorStateMachine:
  m_Name: Base Layer
";

    #[test]
    fn parses_controller_document() {
        let controller = parse_controller_str(SAMPLE).unwrap();
        assert_eq!(controller.name, "PlayerController");
        assert_eq!(controller.parameters.len(), 3);
        assert_eq!(controller.parameters[0].name, "walkSpeed");
        assert_eq!(controller.parameters[0].param_type, ParameterType::Float);
        assert_eq!(controller.parameters[1].param_type, ParameterType::Bool);
        assert_eq!(controller.parameters[2].param_type, ParameterType::Trigger);
    }

    #[test]
    fn layer_order_matches_file_order() {
        let controller = parse_controller_str(SAMPLE).unwrap();
        let names: Vec<_> = controller.layers.iter().map(|l| l.name.as_str()).collect();
        assert_eq!(names, ["Base Layer", "Upper Body"]);
    }

    #[test]
    fn missing_parameter_list_is_empty() {
        let content = "\
--- !u!91 &9100000
AnimatorController:
  m_Name: Empty
";
        let controller = parse_controller_str(content).unwrap();
        assert!(controller.parameters.is_empty());
        assert!(controller.layers.is_empty());
    }

    #[test]
    fn unknown_type_code_is_an_error() {
        let content = "\
--- !u!91 &9100000
AnimatorController:
  m_Name: Broken
  m_AnimatorParameters:
  - m_Name: mystery
    m_Type: 7
";
        let err = parse_controller_str(content).unwrap_err();
        assert!(err.to_string().contains("mystery"));
    }

    #[test]
    fn file_without_controller_document_is_an_error() {
        let content = "\
--- !u!1107 &1107000001
AnimatorStateMachine:
  m_Name: Base Layer
";
        assert!(parse_controller_str(content).is_err());
    }
}
