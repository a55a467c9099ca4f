//! `generate-config` 命令

use std::path::Path;

use crate::config::AppConfig;
use crate::interfaces::cli::CliError;

pub fn run_generate_config(output_path: Option<String>, force: bool) -> Result<(), CliError> {
    let Some(path) = output_path else {
        print!("{}", AppConfig::generate_sample_config()?);
        return Ok(());
    };

    if Path::new(&path).exists() && !force {
        return Err(CliError::CommandError(format!(
            "{} already exists, use --force to overwrite",
            path
        )));
    }

    AppConfig::default().save_to_file(&path)?;
    println!("Configuration written to {}", path);
    Ok(())
}
