//! CLI mode
//!
//! Delegates to the actual CLI implementation.

use crate::cli::Commands;
use crate::config::AppConfig;
use crate::interfaces::cli::CliError;

/// Run a single CLI command
pub fn run_cli(command: Commands, config: &AppConfig) -> Result<(), CliError> {
    crate::interfaces::cli::run_cli_command(command, config)
}
