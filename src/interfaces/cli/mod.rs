//! CLI interface module
//!
//! One-shot commands sharing the service layer with the HTTP API.

pub mod commands;

use std::fmt;

use crate::cli::Commands;
use crate::config::AppConfig;
use crate::errors::MedihelpError;
use crate::services::Coordinate;
use commands::{generate_config, locate, search};

#[derive(Debug)]
pub enum CliError {
    /// 查询失败（上游错误或无法定位）
    SearchError(MedihelpError),
    ConfigError(String),
    CommandError(String),
}

impl CliError {
    /// Format as simple output
    pub fn format_simple(&self) -> String {
        match self {
            CliError::SearchError(err) => format!("Search error: {}", err.user_message()),
            CliError::ConfigError(msg) => format!("Config error: {}", msg),
            CliError::CommandError(msg) => format!("Command error: {}", msg),
        }
    }

    /// Format as colored output
    pub fn format_colored(&self) -> String {
        use colored::Colorize;
        match self {
            CliError::SearchError(err) => err.format_colored(),
            CliError::ConfigError(msg) => {
                format!("{} {}", "Config error:".yellow().bold(), msg.white())
            }
            CliError::CommandError(msg) => {
                format!("{} {}", "Command error:".red().bold(), msg.white())
            }
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for CliError {}

impl From<MedihelpError> for CliError {
    fn from(err: MedihelpError) -> Self {
        match err {
            MedihelpError::Config(msg) => CliError::ConfigError(msg),
            MedihelpError::FileOperation(msg) | MedihelpError::Serialization(msg) => {
                CliError::CommandError(msg)
            }
            other => CliError::SearchError(other),
        }
    }
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        CliError::CommandError(err.to_string())
    }
}

/// Run a CLI command from clap-parsed input
pub fn run_cli_command(cmd: Commands, config: &AppConfig) -> Result<(), CliError> {
    match cmd {
        Commands::Serve => Err(CliError::CommandError(
            "`serve` starts the HTTP server and is not a one-shot command".to_string(),
        )),
        Commands::Search {
            lat,
            lon,
            radius,
            limit,
            json,
        } => {
            let coordinate = lat.zip(lon).map(|(lat, lon)| Coordinate::new(lat, lon));
            search::run_search(config, coordinate, radius, limit, json)
        }
        Commands::Locate { json } => locate::run_locate(config, json),
        Commands::GenerateConfig { output_path, force } => {
            generate_config::run_generate_config(output_path, force)
        }
    }
}
