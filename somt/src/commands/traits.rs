//! Command trait shared by the somt subcommands.

use crate::config::Config;
use crate::error::Result;

/// Standard command trait that all somt commands implement.
///
/// # Type Parameters
/// * `Args` - The arguments type for this command
/// * `Output` - The output type returned by this command
pub trait Command: Sized {
    /// The arguments type for this command.
    type Args;

    /// The output type returned by this command.
    type Output;

    /// Create a command with the given arguments and default configuration.
    fn new(args: Self::Args) -> Self {
        Self::with_config(args, Config::default())
    }

    /// Create a command with the given arguments and loaded configuration.
    ///
    /// Command-line arguments take precedence over configuration values.
    fn with_config(args: Self::Args, config: Config) -> Self;

    /// Execute the command.
    fn execute(&self) -> Result<Self::Output>;

    /// The subcommand name as typed on the command line.
    fn name() -> &'static str;
}
