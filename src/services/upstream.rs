//! 上游 HTTP 调用的公共部分
//!
//! IP 定位与 Overpass 查询共用同一套状态码分类：429 单独识别，
//! 其它非 200 状态、非法 JSON、传输层错误各自映射到不同的错误变体。

use std::time::Duration;

use serde::de::DeserializeOwned;
use tracing::{trace, warn};
use ureq::http::Response;
use ureq::{Agent, Body};

use crate::errors::{MedihelpError, Result};

pub(crate) const ACCEPT_JSON: &str = "application/json";
pub(crate) const ACCEPT_LANGUAGE: &str = "en-US,en;q=0.9";

/// Build a blocking agent whose every call is bounded by `timeout_secs`.
///
/// Status codes are returned as responses rather than errors so that 429
/// can be told apart from other failures.
pub(crate) fn build_agent(timeout_secs: u64) -> Agent {
    Agent::config_builder()
        .timeout_global(Some(Duration::from_secs(timeout_secs)))
        .http_status_as_error(false)
        .build()
        .into()
}

/// Map a transport-level failure (timeout, DNS, connection reset).
pub(crate) fn transport_error(service: &str, err: ureq::Error) -> MedihelpError {
    warn!("{} request failed: {}", service, err);
    MedihelpError::unreachable(err.to_string())
}

/// Check the status code and decode the JSON body.
pub(crate) fn decode_response<T: DeserializeOwned>(
    service: &str,
    response: Response<Body>,
) -> Result<T> {
    let status = response.status().as_u16();
    if status == 429 {
        warn!("{} rate limit reached (HTTP 429)", service);
        return Err(MedihelpError::throttled(format!(
            "{} returned HTTP 429",
            service
        )));
    }
    if status != 200 {
        warn!("{} returned status code {}", service, status);
        return Err(MedihelpError::upstream_status(status));
    }

    let body = response
        .into_body()
        .read_to_string()
        .map_err(|e| transport_error(service, e))?;
    trace!("{} response body: {} bytes", service, body.len());

    serde_json::from_str(&body).map_err(|e| {
        warn!("Invalid JSON response from {}: {}", service, e);
        MedihelpError::malformed_response(e.to_string())
    })
}
