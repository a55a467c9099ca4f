//! HTTP services and middleware

pub mod middleware;
pub mod services;

use actix_web::web;

/// Register every route on an app or scope.
///
/// Handlers expect `web::Data<FacilityFinder>` to be registered;
/// `SearchParams` and `AppStartTime` are optional.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(services::health_routes())
        .service(services::location_routes())
        .service(services::frontend_routes());
}
