//! Inspect command for examining controller assets.

use crate::cli::common::{CliError, CliResult};
use crate::services::ControllerService;
use clap::Args;
use std::path::PathBuf;

/// Print the parameters and layers of a controller file
#[derive(Debug, Clone, Args)]
pub struct InspectArgs {
    /// Path to a .controller file
    #[arg(value_name = "FILE")]
    pub controller: PathBuf,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

impl InspectArgs {
    /// Execute the inspect command
    pub fn execute(&self) -> CliResult<()> {
        let controller = ControllerService::load(&self.controller)
            .map_err(|e| CliError::io(format!("{e:#}")))?;

        if self.json {
            let json = serde_json::to_string_pretty(&controller)
                .map_err(|e| CliError::io(format!("Failed to serialize controller: {e}")))?;
            println!("{json}");
            return Ok(());
        }

        println!("Controller: {}", controller.name);
        println!();

        println!("Parameters ({}):", controller.parameters.len());
        for parameter in &controller.parameters {
            println!(
                "  {:<10} {}",
                parameter.param_type.type_tag(),
                parameter.name
            );
        }

        println!();
        println!("Layers ({}):", controller.layers.len());
        for (index, layer) in controller.layers.iter().enumerate() {
            println!("  [{index}] {}", layer.name);
        }

        Ok(())
    }
}
