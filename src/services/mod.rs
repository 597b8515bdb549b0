//! Shared services used by the CLI commands.

pub mod controllers;

pub use controllers::ControllerService;
