//! Data models for animator controllers.
//!
//! Models are independent of parsing and generation; the parser fills them
//! in and the generator consumes them.

pub mod controller;

// Re-export all model types
pub use controller::{AnimatorController, AnimatorLayer, Parameter, ParameterType};
