//! Command-line definitions (clap derive)

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "medihelp")]
#[command(version)]
#[command(about = "Find hospitals and clinics near a location", long_about = None)]
pub struct Cli {
    /// Configuration file (default: ./config.toml if present)
    #[arg(long, short = 'c', global = true)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, PartialEq)]
pub enum Commands {
    /// Start the HTTP server (default)
    Serve,

    /// Search once and print the results
    ///
    /// Without --lat/--lon the location is derived from this machine's IP.
    Search {
        /// Latitude in degrees
        #[arg(long, allow_hyphen_values = true, requires = "lon")]
        lat: Option<f64>,

        /// Longitude in degrees
        #[arg(long, allow_hyphen_values = true, requires = "lat")]
        lon: Option<f64>,

        /// Search radius in meters (default: search.default_radius)
        #[arg(long)]
        radius: Option<u32>,

        /// Maximum number of results (default: search.default_limit)
        #[arg(long)]
        limit: Option<usize>,

        /// Output structured records as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the location derived from this machine's IP address
    Locate {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Generate example configuration file
    GenerateConfig {
        /// Output path (prints to stdout when omitted)
        output_path: Option<String>,

        /// Force overwrite existing file
        #[arg(long)]
        force: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand() {
        let cli = Cli::try_parse_from(["medihelp"]).unwrap();
        assert!(cli.command.is_none());
        assert!(cli.config.is_none());
    }

    #[test]
    fn test_search_with_negative_longitude() {
        let cli = Cli::try_parse_from([
            "medihelp", "search", "--lat", "40.7128", "--lon", "-74.006", "--limit", "3",
        ])
        .unwrap();
        assert_eq!(
            cli.command,
            Some(Commands::Search {
                lat: Some(40.7128),
                lon: Some(-74.006),
                radius: None,
                limit: Some(3),
                json: false,
            })
        );
    }

    #[test]
    fn test_search_requires_both_coordinates() {
        assert!(Cli::try_parse_from(["medihelp", "search", "--lat", "1.0"]).is_err());
    }

    #[test]
    fn test_global_config_flag() {
        let cli = Cli::try_parse_from(["medihelp", "locate", "-c", "custom.toml"]).unwrap();
        assert_eq!(cli.config.as_deref(), Some("custom.toml"));
        assert_eq!(cli.command, Some(Commands::Locate { json: false }));
    }
}
