//! Config command implementation.
//!
//! Prints the effective configuration as TOML, or writes it to a file so it
//! can be used as a starting point for `tinct.toml`.

use std::path::PathBuf;

use tracing::{debug, info};

use crate::commands::common::{write_stdout, Context};
use crate::commands::traits::Command;
use crate::error::Result;

/// Arguments for the config command.
#[derive(Debug, Clone, Default)]
pub struct ConfigArgs {
    /// Write the configuration here instead of printing it.
    pub write: Option<PathBuf>,
}

/// Config command handler.
pub struct ConfigCommand {
    args: ConfigArgs,
}

impl Command for ConfigCommand {
    type Args = ConfigArgs;
    /// The TOML text, if it was not written to a file.
    type Output = Option<String>;

    fn new(args: Self::Args) -> Self {
        Self { args }
    }

    fn execute(&self, ctx: &Context) -> Result<Self::Output> {
        match &self.args.write {
            Some(path) => {
                ctx.config.save_to_path(path)?;
                info!(path = %path.display(), "configuration written");
                Ok(None)
            }
            None => ctx.config.to_toml().map(Some),
        }
    }

    fn name() -> &'static str {
        "config"
    }
}

/// Run the config command.
pub fn run_config(args: ConfigArgs, ctx: &Context) -> Result<()> {
    debug!(command = ConfigCommand::name(), "running");
    match ConfigCommand::new(args).execute(ctx)? {
        Some(text) => write_stdout(&text),
        None => Ok(()),
    }
}
