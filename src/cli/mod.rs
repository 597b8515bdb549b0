//! CLI command handlers for animhash.
//!
//! Each subcommand lives in its own module as a clap `Args` struct with an
//! `execute` method returning a `CliResult`, so commands stay headless and
//! scriptable for automation and CI integration.

pub mod common;
pub mod config;
pub mod generate;
pub mod inspect;
pub mod preset;

// Re-export types used by main.rs and tests
pub use common::{CliError, CliResult, ExitCode};
pub use config::ConfigArgs;
pub use generate::GenerateArgs;
pub use inspect::InspectArgs;
pub use preset::PresetArgs;
