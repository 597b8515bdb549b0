//! C# hash file generation.
//!
//! This module turns a preset plus a list of parsed controllers into the
//! final generated source file: one `Animator.StringToHash` constant per
//! unique parameter name, and optionally a nested `Layers` class with
//! layer index constants.

use crate::config::Preset;
use crate::constants::APP_NAME;
use crate::formatter;
use crate::models::AnimatorController;
use anyhow::{bail, Context, Result};
use std::collections::HashSet;
use std::path::Path;

/// Generates the C# source for a preset over a set of controllers.
pub struct HashFileGenerator<'a> {
    preset: &'a Preset,
    controllers: &'a [AnimatorController],
    /// Use a placeholder timestamp for byte-stable output (for testing)
    deterministic: bool,
}

impl<'a> HashFileGenerator<'a> {
    /// Creates a generator over the given preset and controllers.
    #[must_use]
    pub fn new(
        preset: &'a Preset,
        controllers: &'a [AnimatorController],
        deterministic: bool,
    ) -> Self {
        Self {
            preset,
            controllers,
            deterministic,
        }
    }

    /// Generates the complete C# source file contents.
    ///
    /// Parameter names are deduplicated across all controllers by exact
    /// raw name, first occurrence wins; the same policy applies to layer
    /// names. A formatting failure aborts generation, naming the
    /// controller and field that produced it.
    pub fn generate_source(&self) -> Result<String> {
        validate_class_name(&self.preset.class_name)?;

        let mut output = String::new();

        output.push_str(&format!(
            "// This file is auto-generated by {APP_NAME}. Do not edit manually.\n"
        ));
        output.push_str(&format!("// Generated: {}\n\n", self.timestamp()));
        output.push_str("using UnityEngine;\n\n");
        output.push_str(&format!("public static class {}\n{{\n", self.preset.class_name));

        self.generate_parameter_section(&mut output)?;

        if self.preset.include_layers {
            self.generate_layer_section(&mut output)?;
        }

        output.push_str("}\n");

        Ok(output)
    }

    /// Generates the source and writes it to the preset's save path.
    pub fn write_file(&self) -> Result<()> {
        let source = self.generate_source()?;
        self.write_source(&source)
    }

    /// Writes already-generated source to the preset's save path.
    ///
    /// Split from [`generate_source`](Self::generate_source) so callers
    /// can keep formatting failures and filesystem failures apart. Parent
    /// directories are created as needed; the write is atomic (temp file +
    /// rename) so an aborted run never leaves a truncated file behind.
    pub fn write_source(&self, source: &str) -> Result<()> {
        let path = &self.preset.save_path;

        if path.as_os_str().is_empty() {
            bail!("Preset '{}' has no save path", self.preset.name);
        }

        atomic_write(path, source)
    }

    fn timestamp(&self) -> String {
        if self.deterministic {
            "<timestamp>".to_string()
        } else {
            chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
        }
    }

    fn generate_parameter_section(&self, output: &mut String) -> Result<()> {
        let mut emitted: HashSet<&str> = HashSet::new();

        for controller in self.controllers {
            output.push_str(&format!("\t// {}\n", controller.name));

            for parameter in &controller.parameters {
                // First occurrence wins across all controllers.
                if !emitted.insert(parameter.name.as_str()) {
                    continue;
                }

                let identifier = formatter::format_identifier(
                    &parameter.name,
                    parameter.param_type.type_tag(),
                    &self.preset.formatting,
                )
                .with_context(|| {
                    format!(
                        "Failed to format parameter '{}' of controller '{}'",
                        parameter.name, controller.name
                    )
                })?;

                output.push('\t');
                output.push_str(&formatter::parameter_line(&identifier, &parameter.name));
                output.push('\n');
            }

            output.push('\n');
        }

        Ok(())
    }

    fn generate_layer_section(&self, output: &mut String) -> Result<()> {
        let mut emitted: HashSet<&str> = HashSet::new();

        output.push_str("\tpublic static class Layers\n\t{\n");

        for controller in self.controllers {
            // A controller whose only layer is an already-emitted Base
            // Layer adds nothing; skip its comment block entirely so
            // folder scans over many simple controllers stay readable.
            if controller.layers.len() == 1 && emitted.contains("Base Layer") {
                continue;
            }

            output.push_str(&format!("\t\t// {}\n", controller.name));

            for (index, layer) in controller.layers.iter().enumerate() {
                if !emitted.insert(layer.name.as_str()) {
                    continue;
                }

                let identifier = formatter::format_layer_identifier(
                    &layer.name,
                    self.preset.layer_casing,
                    self.preset.layer_delimiter,
                )
                .with_context(|| {
                    format!(
                        "Failed to format layer '{}' of controller '{}'",
                        layer.name, controller.name
                    )
                })?;

                output.push_str("\t\t");
                output.push_str(&formatter::layer_line(&identifier, index));
                output.push('\n');
            }

            output.push('\n');
        }

        output.push_str("\t}\n");

        Ok(())
    }
}

/// Validates that a class name is a legal C# identifier.
///
/// Reserved words are not checked; only shape (non-empty, no leading
/// digit, identifier characters throughout).
pub fn validate_class_name(name: &str) -> Result<()> {
    let mut chars = name.chars();

    match chars.next() {
        None => bail!("Class name must not be empty"),
        Some(c) if c.is_ascii_digit() => {
            bail!("Class name must not start with a digit: '{name}'")
        }
        Some(c) if !c.is_alphanumeric() && c != '_' => {
            bail!("Class name contains an illegal character: '{name}'")
        }
        Some(_) => {}
    }

    if let Some(bad) = chars.find(|&c| !c.is_alphanumeric() && c != '_') {
        bail!("Class name contains an illegal character '{bad}': '{name}'");
    }

    Ok(())
}

/// Performs an atomic file write using temp file + rename pattern.
fn atomic_write(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create output directory: {}", parent.display())
            })?;
        }
    }

    let temp_path = path.with_extension("cs.tmp");

    std::fs::write(&temp_path, content)
        .with_context(|| format!("Failed to write to temporary file: {}", temp_path.display()))?;

    std::fs::rename(&temp_path, path)
        .with_context(|| format!("Failed to rename temporary file to: {}", path.display()))?;

    Ok(())
}
