//! `search` 命令

use serde_json::json;
use tracing::debug;

use crate::config::AppConfig;
use crate::interfaces::cli::CliError;
use crate::services::{Coordinate, FacilityFinder, SearchOutcome, SearchParams, format_outcome};

pub fn run_search(
    config: &AppConfig,
    coordinate: Option<Coordinate>,
    radius: Option<u32>,
    limit: Option<usize>,
    json: bool,
) -> Result<(), CliError> {
    let defaults = SearchParams::from(&config.search);
    let params = SearchParams {
        radius_meters: radius.unwrap_or(defaults.radius_meters),
        limit: limit.unwrap_or(defaults.limit),
    };
    debug!("CLI search: coordinate={:?} params={:?}", coordinate, params);

    let finder = FacilityFinder::from_config(config);
    let outcome = finder.find_with(coordinate, params);

    println!("{}", render(&outcome, json)?);

    match outcome {
        SearchOutcome::Failed(err) => Err(CliError::SearchError(err)),
        _ => Ok(()),
    }
}

/// Text block, or the same JSON shape the HTTP API returns.
pub fn render(outcome: &SearchOutcome, json: bool) -> Result<String, CliError> {
    if !json {
        return Ok(format_outcome(outcome));
    }

    let mut body = json!({
        "hospitals": outcome.records(),
        "formatted_results": format_outcome(outcome),
    });
    if let SearchOutcome::Failed(err) = outcome {
        body["error"] = json!(err.user_message());
    }
    Ok(serde_json::to_string_pretty(&body)?)
}
