//! Configuration management CLI commands.

use crate::cli::common::{CliError, CliResult};
use crate::config::Config;
use clap::{Args, Subcommand};

/// Configuration management commands
#[derive(Debug, Clone, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Debug, Clone, Subcommand)]
enum ConfigCommand {
    /// Display the current configuration
    Show(ConfigShowArgs),
    /// Write a default configuration file
    Init(ConfigInitArgs),
}

/// Display the current configuration
#[derive(Debug, Clone, Args)]
pub struct ConfigShowArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Write a default configuration file
#[derive(Debug, Clone, Args)]
pub struct ConfigInitArgs {
    /// Overwrite an existing configuration file
    #[arg(long)]
    force: bool,
}

impl ConfigArgs {
    /// Execute config subcommand
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            ConfigCommand::Show(args) => args.execute(),
            ConfigCommand::Init(args) => args.execute(),
        }
    }
}

impl ConfigShowArgs {
    /// Execute show command
    pub fn execute(&self) -> CliResult<()> {
        let config = Config::load()
            .map_err(|e| CliError::validation(format!("Failed to load configuration: {e:#}")))?;

        if self.json {
            let json = serde_json::to_string_pretty(&config)
                .map_err(|e| CliError::io(format!("Failed to serialize configuration: {e}")))?;
            println!("{json}");
            return Ok(());
        }

        let path = Config::config_file_path()
            .map_err(|e| CliError::io(format!("Failed to resolve config path: {e:#}")))?;

        println!("Config file: {}", path.display());
        if !Config::exists() {
            println!("             (not created yet; defaults in effect)");
        }
        println!("Presets:     {}", config.presets.len());
        for preset in &config.presets {
            println!("  - {}", preset.name);
        }

        Ok(())
    }
}

impl ConfigInitArgs {
    /// Execute init command
    pub fn execute(&self) -> CliResult<()> {
        if Config::exists() && !self.force {
            return Err(CliError::validation(
                "Configuration file already exists. Use --force to overwrite",
            ));
        }

        let config = Config::new();
        config
            .save()
            .map_err(|e| CliError::io(format!("Failed to write configuration: {e:#}")))?;

        let path = Config::config_file_path()
            .map_err(|e| CliError::io(format!("Failed to resolve config path: {e:#}")))?;
        println!("✓ Wrote {}", path.display());

        Ok(())
    }
}
