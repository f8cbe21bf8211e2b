//! Command trait for the tinct CLI.
//!
//! Every subcommand is a value built from its arguments and executed against
//! a shared [`Context`].

use crate::commands::common::Context;
use crate::error::Result;

/// Standard command trait that all tinct commands implement.
///
/// # Type Parameters
/// * `Args` - The arguments type for this command
/// * `Output` - What the command produces before it is written to stdout
pub trait Command {
    /// The arguments type for this command.
    type Args;

    /// The output type returned by this command.
    type Output;

    /// Create a new command instance with the given arguments.
    fn new(args: Self::Args) -> Self;

    /// Execute the command.
    fn execute(&self, ctx: &Context) -> Result<Self::Output>;

    /// Get the command name.
    fn name() -> &'static str;
}
