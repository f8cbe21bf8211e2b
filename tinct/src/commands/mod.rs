//! Command modules for the tinct CLI.
//!
//! Each subcommand is implemented in its own file following the pattern set
//! by [`traits::Command`].

pub mod common;
pub mod traits;

pub mod config;
pub mod highlight;
pub mod languages;
pub mod tokens;

// Re-export command types and functions
pub use common::{Context, TokenFormat};
pub use config::{run_config, ConfigArgs};
pub use highlight::{run_highlight, HighlightArgs};
pub use languages::run_languages;
pub use tokens::{run_tokens, TokensArgs};
