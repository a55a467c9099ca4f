//! CORS middleware construction
//!
//! 允许的 origin 支持 `scheme://host:*` 形式，匹配该主机的任意数字端口。

use actix_cors::Cors;
use actix_web::http::Method;
use tracing::warn;

use crate::config::CorsConfig;

/// Check `origin` against the configured patterns.
///
/// - `*` allows any origin
/// - `http://localhost:*` allows `http://localhost` and `http://localhost:<digits>`
/// - anything else must match exactly
pub fn origin_allowed(patterns: &[String], origin: &str) -> bool {
    patterns.iter().any(|pattern| {
        if pattern == "*" {
            return true;
        }
        match pattern.strip_suffix(":*") {
            Some(base) => match origin.strip_prefix(base) {
                Some("") => true,
                Some(rest) => rest.strip_prefix(':').is_some_and(|port| {
                    !port.is_empty() && port.bytes().all(|b| b.is_ascii_digit())
                }),
                None => false,
            },
            None => pattern == origin,
        }
    })
}

/// Build CORS middleware from configuration
pub fn build_cors_middleware(config: &CorsConfig) -> Cors {
    let mut cors = Cors::default();

    if config.allowed_origins.is_empty() {
        warn!("CORS allowed_origins is empty, no cross-origin requests will be allowed");
    } else {
        let patterns = config.allowed_origins.clone();
        cors = cors.allowed_origin_fn(move |origin, _req_head| {
            origin
                .to_str()
                .is_ok_and(|origin| origin_allowed(&patterns, origin))
        });
    }

    let methods: Vec<Method> = config
        .allowed_methods
        .iter()
        .filter_map(|m| match m.to_uppercase().parse::<Method>() {
            Ok(method) => Some(method),
            Err(_) => {
                warn!("Ignoring invalid CORS method: {}", m);
                None
            }
        })
        .collect();
    if !methods.is_empty() {
        cors = cors.allowed_methods(methods);
    }

    for header in &config.allowed_headers {
        cors = cors.allowed_header(header);
    }

    cors.max_age(config.max_age as usize)
}
