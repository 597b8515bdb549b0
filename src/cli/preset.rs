//! Preset management CLI commands.

use crate::cli::common::{CliError, CliResult};
use crate::cli::generate::FormattingFlags;
use crate::config::{Config, ControllerSource, Preset};
use clap::{Args, Subcommand};
use std::path::PathBuf;

/// Preset management commands
#[derive(Debug, Clone, Args)]
pub struct PresetArgs {
    /// Preset subcommand to execute
    #[command(subcommand)]
    command: PresetCommand,
}

#[derive(Debug, Clone, Subcommand)]
enum PresetCommand {
    /// List all presets
    List(PresetListArgs),
    /// Show a preset's full settings
    Show(PresetShowArgs),
    /// Add a new preset
    Add(PresetAddArgs),
    /// Remove a preset
    Remove(PresetRemoveArgs),
}

/// List all presets
#[derive(Debug, Clone, Args)]
pub struct PresetListArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Show a preset's full settings
#[derive(Debug, Clone, Args)]
pub struct PresetShowArgs {
    /// Preset name
    #[arg(value_name = "NAME")]
    name: String,

    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Add a new preset
#[derive(Debug, Clone, Args)]
pub struct PresetAddArgs {
    /// Preset name
    #[arg(value_name = "NAME")]
    name: String,

    /// Output path for the generated .cs file
    #[arg(short, long, value_name = "FILE")]
    out: PathBuf,

    /// Name of the generated static class
    #[arg(long, value_name = "NAME", default_value = "AnimHashIDs")]
    class_name: String,

    /// Folder to scan recursively for .controller files
    #[arg(long, value_name = "DIR", conflicts_with = "controllers")]
    folder: Option<PathBuf>,

    /// Explicit controller file (repeatable)
    #[arg(long = "controller", value_name = "FILE")]
    controllers: Vec<PathBuf>,

    #[command(flatten)]
    formatting: FormattingFlags,
}

/// Remove a preset
#[derive(Debug, Clone, Args)]
pub struct PresetRemoveArgs {
    /// Preset name
    #[arg(value_name = "NAME")]
    name: String,
}

impl PresetArgs {
    /// Execute the preset subcommand
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            PresetCommand::List(args) => args.execute(),
            PresetCommand::Show(args) => args.execute(),
            PresetCommand::Add(args) => args.execute(),
            PresetCommand::Remove(args) => args.execute(),
        }
    }
}

fn load_config() -> CliResult<Config> {
    Config::load().map_err(|e| CliError::validation(format!("Failed to load configuration: {e:#}")))
}

fn save_config(config: &Config) -> CliResult<()> {
    config
        .save()
        .map_err(|e| CliError::io(format!("Failed to save configuration: {e:#}")))
}

impl PresetListArgs {
    /// Execute the list subcommand
    pub fn execute(&self) -> CliResult<()> {
        let config = load_config()?;

        if self.json {
            let json = serde_json::to_string_pretty(&config.presets)
                .map_err(|e| CliError::io(format!("Failed to serialize presets: {e}")))?;
            println!("{json}");
            return Ok(());
        }

        for preset in &config.presets {
            if preset.save_path.as_os_str().is_empty() {
                println!("{}", preset.name);
            } else {
                println!("{}  ->  {}", preset.name, preset.save_path.display());
            }
        }

        Ok(())
    }
}

impl PresetShowArgs {
    /// Execute the show subcommand
    pub fn execute(&self) -> CliResult<()> {
        let config = load_config()?;

        let preset = config
            .find_preset(&self.name)
            .ok_or_else(|| CliError::validation(format!("No preset named '{}'", self.name)))?;

        if self.json {
            let json = serde_json::to_string_pretty(preset)
                .map_err(|e| CliError::io(format!("Failed to serialize preset: {e}")))?;
            println!("{json}");
            return Ok(());
        }

        println!("Name:        {}", preset.name);
        println!("Save path:   {}", preset.save_path.display());
        println!("Class name:  {}", preset.class_name);
        match &preset.source {
            ControllerSource::Folder { path } => {
                println!("Source:      folder {}", path.display());
            }
            ControllerSource::Controllers { paths } => {
                println!("Source:      {} controller file(s)", paths.len());
                for path in paths {
                    println!("             {}", path.display());
                }
            }
        }
        println!("Formatting:  {:?}", preset.formatting);
        println!("Layers:      include={}", preset.include_layers);

        Ok(())
    }
}

impl PresetAddArgs {
    /// Execute the add subcommand
    pub fn execute(&self) -> CliResult<()> {
        let mut config = load_config()?;

        let mut preset = Preset::new(&self.name);
        preset.save_path = self.out.clone();
        preset.class_name = self.class_name.clone();
        preset.source = match (&self.folder, self.controllers.is_empty()) {
            (Some(folder), true) => ControllerSource::Folder {
                path: folder.clone(),
            },
            (None, false) => ControllerSource::Controllers {
                paths: self.controllers.clone(),
            },
            (None, true) => {
                return Err(CliError::validation(
                    "No controllers specified. Use --folder or --controller",
                ))
            }
            (Some(_), false) => unreachable!("folder and controllers conflict"),
        };
        self.formatting.apply_to(&mut preset)?;

        config
            .add_preset(preset)
            .map_err(|e| CliError::validation(e.to_string()))?;

        save_config(&config)?;

        println!("✓ Added preset '{}'", self.name);

        Ok(())
    }
}

impl PresetRemoveArgs {
    /// Execute the remove subcommand
    pub fn execute(&self) -> CliResult<()> {
        let mut config = load_config()?;

        config
            .remove_preset(&self.name)
            .map_err(|e| CliError::validation(e.to_string()))?;

        save_config(&config)?;

        println!("✓ Removed preset '{}'", self.name);

        Ok(())
    }
}
