//! maskedit - masked text input engine
//!
//! This crate provides a masked-text provider (input validation, shifting
//! insert/delete and rendering against a mask such as `(999) 000-0000`)
//! plus a small command-line front end driven by Elm-style messages.

pub mod cli;
pub mod config;
pub mod config_paths;
pub mod mask;
pub mod messages;
pub mod script;
pub mod tracing;
pub mod update;

// Re-export commonly used types
pub use config::MaskConfig;
pub use mask::{EditResult, MaskError, MaskedTextProvider, ProviderOptions, ResultHint};
pub use messages::MaskMsg;
