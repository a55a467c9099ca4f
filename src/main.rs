use clap::Parser;
use tracing::{debug, error};

use medihelp::cli::Cli;
use medihelp::config::AppConfig;
use medihelp::runtime::modes::{self, Mode};
use medihelp::system::init_logging;

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let mut config = match AppConfig::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e.format_colored());
            std::process::exit(1);
        }
    };

    let mode = modes::detect_mode(&cli);
    // CLI 输出走 stdout，默认只保留警告日志
    if mode == Mode::Cli && !config.server.debug {
        config.logging.level = "warn".to_string();
    }

    let guard = init_logging(&config)?;
    debug!("Loaded configuration: {:?}", config);

    match mode {
        Mode::Server => {
            actix_web::rt::System::new().block_on(modes::run_server(config))?;
        }
        Mode::Cli => {
            let Some(command) = cli.command else {
                return Ok(());
            };
            if let Err(e) = modes::run_cli(command, &config) {
                error!("{}", e);
                drop(guard);
                eprintln!("{}", e.format_colored());
                std::process::exit(1);
            }
        }
    }

    Ok(())
}
