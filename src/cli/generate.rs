//! Generate command for hash constant files.

use crate::cli::common::{
    parse_casing, parse_delimiter, parse_type_indicator, parse_type_location, CliError, CliResult,
};
use crate::config::{Config, ControllerSource, Preset};
use crate::formatter::FormattingConfig;
use crate::generator::HashFileGenerator;
use crate::services::ControllerService;
use clap::Args;
use std::path::PathBuf;

/// Formatting options shared by `generate` and `preset add`
#[derive(Debug, Clone, Args)]
pub struct FormattingFlags {
    /// Name casing: none, upper, or lower
    #[arg(long, value_name = "MODE", default_value = "none")]
    pub name_casing: String,

    /// Name word delimiter: none or underscore (underscore splits camelCase)
    #[arg(long, value_name = "MODE", default_value = "none")]
    pub name_delimiter: String,

    /// Type indicator: none, single-letter, or full-type
    #[arg(long, value_name = "MODE", default_value = "none")]
    pub type_indicator: String,

    /// Type indicator casing: none, upper, or lower
    #[arg(long, value_name = "MODE", default_value = "none")]
    pub type_casing: String,

    /// Delimiter between type indicator and name: none or underscore
    #[arg(long, value_name = "MODE", default_value = "none")]
    pub type_delimiter: String,

    /// Type indicator placement: prefix or suffix
    #[arg(long, value_name = "WHERE", default_value = "prefix")]
    pub type_location: String,

    /// Emit a nested Layers class with layer index constants
    #[arg(long)]
    pub include_layers: bool,

    /// Layer name casing: none, upper, or lower
    #[arg(long, value_name = "MODE", default_value = "none")]
    pub layer_casing: String,

    /// Layer name delimiter: none (strip spaces) or underscore
    #[arg(long, value_name = "MODE", default_value = "none")]
    pub layer_delimiter: String,
}

impl FormattingFlags {
    /// Parses the flag strings into a formatting configuration.
    pub fn to_formatting(&self) -> CliResult<FormattingConfig> {
        Ok(FormattingConfig {
            name_casing: parse_casing(&self.name_casing)?,
            name_delimiter: parse_delimiter(&self.name_delimiter)?,
            type_indicator: parse_type_indicator(&self.type_indicator)?,
            type_indicator_casing: parse_casing(&self.type_casing)?,
            type_indicator_delimiter: parse_delimiter(&self.type_delimiter)?,
            type_indicator_location: parse_type_location(&self.type_location)?,
        })
    }

    /// Applies all flags (formatting plus layer options) to a preset.
    pub fn apply_to(&self, preset: &mut Preset) -> CliResult<()> {
        preset.formatting = self.to_formatting()?;
        preset.include_layers = self.include_layers;
        preset.layer_casing = parse_casing(&self.layer_casing)?;
        preset.layer_delimiter = parse_delimiter(&self.layer_delimiter)?;
        Ok(())
    }
}

/// Generate a C# hash constants file from animator controllers
#[derive(Debug, Clone, Args)]
pub struct GenerateArgs {
    /// Generate from a named preset in the config file
    #[arg(short, long, value_name = "NAME", conflicts_with_all = ["folder", "controllers", "out"])]
    pub preset: Option<String>,

    /// Folder to scan recursively for .controller files
    #[arg(long, value_name = "DIR", conflicts_with = "controllers")]
    pub folder: Option<PathBuf>,

    /// Explicit controller file (repeatable, used in the order given)
    #[arg(long = "controller", value_name = "FILE")]
    pub controllers: Vec<PathBuf>,

    /// Output path for the generated .cs file
    #[arg(short, long, value_name = "FILE")]
    pub out: Option<PathBuf>,

    /// Name of the generated static class
    #[arg(long, value_name = "NAME", default_value = "AnimHashIDs")]
    pub class_name: String,

    #[command(flatten)]
    pub formatting: FormattingFlags,

    /// Use a placeholder timestamp for deterministic output (for testing)
    #[arg(long)]
    pub deterministic: bool,

    /// Print the generated source to stdout instead of writing the file
    #[arg(long)]
    pub dry_run: bool,
}

impl GenerateArgs {
    /// Execute the generate command
    pub fn execute(&self) -> CliResult<()> {
        let preset = self.resolve_preset()?;

        let controllers = ControllerService::load_all(&preset.source)
            .map_err(|e| CliError::io(format!("Failed to load controllers: {e:#}")))?;

        let generator = HashFileGenerator::new(&preset, &controllers, self.deterministic);

        // Generation failures (illegal identifiers, bad class name) are
        // validation errors regardless of whether the source gets written.
        let source = generator
            .generate_source()
            .map_err(|e| CliError::validation(format!("Failed to generate source: {e:#}")))?;

        if self.dry_run {
            print!("{source}");
            return Ok(());
        }

        generator
            .write_source(&source)
            .map_err(|e| CliError::io(format!("Failed to write file: {e:#}")))?;

        println!("✓ Generated {}", preset.save_path.display());
        println!(
            "  {} controller{} scanned",
            controllers.len(),
            if controllers.len() == 1 { "" } else { "s" }
        );

        Ok(())
    }

    /// Resolves either the named preset or an ad-hoc preset from flags.
    fn resolve_preset(&self) -> CliResult<Preset> {
        if let Some(name) = &self.preset {
            let config = Config::load()
                .map_err(|e| CliError::validation(format!("Failed to load configuration: {e:#}")))?;

            return config.find_preset(name).cloned().ok_or_else(|| {
                CliError::validation(format!(
                    "No preset named '{name}'. Run 'animhash preset list' to see presets"
                ))
            });
        }

        let source = match (&self.folder, self.controllers.is_empty()) {
            (Some(folder), true) => ControllerSource::Folder {
                path: folder.clone(),
            },
            (None, false) => ControllerSource::Controllers {
                paths: self.controllers.clone(),
            },
            (None, true) => {
                return Err(CliError::validation(
                    "No controllers specified. Use --preset, --folder, or --controller",
                ))
            }
            // clap's conflicts_with rejects the remaining combination
            (Some(_), false) => unreachable!("folder and controllers conflict"),
        };

        let mut preset = Preset::new("(ad-hoc)");
        preset.save_path = self.out.clone().unwrap_or_default();
        preset.class_name = self.class_name.clone();
        preset.source = source;
        self.formatting.apply_to(&mut preset)?;

        if !self.dry_run && preset.save_path.as_os_str().is_empty() {
            return Err(CliError::validation(
                "No output path specified. Use --out or --dry-run",
            ));
        }

        Ok(preset)
    }
}
