//! `locate` 命令

use colored::Colorize;

use crate::config::AppConfig;
use crate::interfaces::cli::CliError;
use crate::services::{CallerLocation, IpApiResolver, LocationResolver};

pub fn run_locate(config: &AppConfig, json: bool) -> Result<(), CliError> {
    let resolver = IpApiResolver::new(&config.geoip);
    let location = resolver.resolve()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&location)?);
    } else {
        println!("{}", describe(&location));
    }
    Ok(())
}

fn describe(location: &CallerLocation) -> String {
    let place: Vec<&str> = [&location.city, &location.region, &location.country]
        .into_iter()
        .filter_map(|part| part.as_deref())
        .collect();

    format!(
        "{} {}\n{} {}",
        "Coordinates:".bold(),
        location.coordinate,
        "Place:".bold(),
        if place.is_empty() {
            "Unknown".to_string()
        } else {
            place.join(", ")
        }
    )
}
