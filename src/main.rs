//! Animator Hash Generator - command line entry point.
//!
//! Scans Unity AnimatorController assets and generates C# files with
//! cached `Animator.StringToHash` constants for parameters and layers.

use animhash::cli;
use animhash::constants::APP_BINARY_NAME;
use clap::{Parser, Subcommand};

/// Generate C# files with cached Animator hashes from Unity controllers
#[derive(Parser, Debug)]
#[command(name = APP_BINARY_NAME, author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate a hash constants file
    Generate(cli::GenerateArgs),
    /// Manage generation presets
    Preset(cli::PresetArgs),
    /// Examine a controller file
    Inspect(cli::InspectArgs),
    /// Manage the configuration file
    Config(cli::ConfigArgs),
}

fn main() {
    let cli = Cli::parse();

    let result = match &cli.command {
        Command::Generate(args) => args.execute(),
        Command::Preset(args) => args.execute(),
        Command::Inspect(args) => args.execute(),
        Command::Config(args) => args.execute(),
    };

    if let Err(error) = result {
        eprintln!("Error: {error}");
        std::process::exit(error.exit_code().code());
    }
}
