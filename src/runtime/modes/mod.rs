//! Mode routing
//!
//! - Server mode (HTTP server), the default
//! - CLI mode (one-shot commands)

pub mod cli;
pub mod server;

pub use cli::run_cli;
pub use server::run_server;

use crate::cli::{Cli, Commands};

/// Mode detection result
#[derive(Debug, PartialEq)]
pub enum Mode {
    Server,
    Cli,
}

/// No subcommand or `serve` runs the server, anything else is a CLI command.
pub fn detect_mode(cli: &Cli) -> Mode {
    match cli.command {
        None | Some(Commands::Serve) => Mode::Server,
        Some(_) => Mode::Cli,
    }
}
