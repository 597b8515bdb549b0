//! Animator Hash Generator library.
//!
//! Core functionality for scanning Unity AnimatorController assets and
//! generating C# source files with precomputed `Animator.StringToHash`
//! constants, so runtime code can use integer hash IDs instead of strings.

// Module declarations
pub mod cli;
pub mod config;
pub mod constants;
pub mod formatter;
pub mod generator;
pub mod models;
pub mod parser;
pub mod services;
