//! Server mode
//!
//! Builds the facility finder from configuration and starts the HTTP
//! server with CORS, request logging and all routes.

use actix_web::{
    App, HttpServer,
    middleware::{Compress, DefaultHeaders},
    web,
};
use anyhow::{Context, Result};
use tracing::{info, warn};

use crate::api;
use crate::api::middleware::{RequestLogger, build_cors_middleware};
use crate::api::services::AppStartTime;
use crate::config::{AppConfig, CorsConfig};
use crate::services::{FacilityFinder, SearchParams};

/// worker 数量上限
const MAX_WORKERS: usize = 32;

/// Validate CORS configuration at startup (runs once)
fn validate_cors_config(cors_config: &CorsConfig) {
    if cors_config.allowed_origins.iter().any(|o| o == "*") {
        warn!(
            "CORS allows any origin. The API will accept cross-origin requests from every website."
        );
    }
}

/// Run the HTTP server
///
/// **Note**: Logging system must be initialized before calling this function
pub async fn run_server(config: AppConfig) -> Result<()> {
    let app_start_time = AppStartTime::now();

    let finder = web::Data::new(FacilityFinder::from_config(&config));
    let search_params = web::Data::new(SearchParams::from(&config.search));
    let cors_config = config.cors.clone();
    validate_cors_config(&cors_config);

    let workers = config.server.cpu_count.clamp(1, MAX_WORKERS);
    info!("Using {} workers for the server", workers);
    if config.server.debug {
        warn!("Debug mode enabled");
    }

    let server = HttpServer::new(move || {
        App::new()
            .wrap(build_cors_middleware(&cors_config))
            .wrap(Compress::default())
            .wrap(
                DefaultHeaders::new()
                    .add(("Cache-Control", "no-cache, no-store, must-revalidate")),
            )
            .wrap(RequestLogger)
            .app_data(finder.clone())
            .app_data(search_params.clone())
            .app_data(web::Data::new(app_start_time.clone()))
            .app_data(web::PayloadConfig::new(64 * 1024))
            .configure(api::configure)
    })
    .keep_alive(std::time::Duration::from_secs(30))
    .workers(workers);

    let bind_address = format!("{}:{}", config.server.host, config.server.port);
    let server = server
        .bind(&bind_address)
        .with_context(|| format!("failed to bind {}", bind_address))?;
    warn!("Starting server at http://{}", bind_address);

    server.run().await?;
    info!("Server stopped");

    Ok(())
}
