//! 外部 GeoIP API 实现
//!
//! 使用 ip-api.com 根据请求方的出口 IP 推断大致位置（城市级精度）。

use serde::Deserialize;
use tracing::{debug, warn};
use ureq::Agent;

use super::provider::{CallerLocation, LocationResolver};
use crate::config::GeoIpConfig;
use crate::errors::{MedihelpError, Result};
use crate::services::geo::Coordinate;
use crate::services::upstream::{
    ACCEPT_JSON, ACCEPT_LANGUAGE, build_agent, decode_response, transport_error,
};

const SERVICE: &str = "IP-API";

/// ip-api.com 响应
///
/// 成功: {"status": "success", "lat": .., "lon": .., "city": .., "regionName": .., "country": ..}
/// 失败: {"status": "fail", "message": "..."}
#[derive(Debug, Deserialize)]
struct IpApiResponse {
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    message: Option<String>,
    lat: Option<f64>,
    lon: Option<f64>,
    city: Option<String>,
    #[serde(rename = "regionName")]
    region_name: Option<String>,
    country: Option<String>,
}

/// Resolver backed by an ip-api.com compatible JSON endpoint.
pub struct IpApiResolver {
    agent: Agent,
    api_url: String,
    user_agent: String,
}

impl IpApiResolver {
    pub fn new(config: &GeoIpConfig) -> Self {
        Self {
            agent: build_agent(config.timeout_secs),
            api_url: config.api_url.clone(),
            user_agent: config.user_agent.clone(),
        }
    }

    fn into_location(data: IpApiResponse) -> Result<CallerLocation> {
        if data.status.as_deref() != Some("success") {
            warn!(
                "Failed to get location: API returned unsuccessful status ({})",
                data.message.as_deref().unwrap_or("no message")
            );
            return Err(MedihelpError::location_lookup(
                data.message
                    .unwrap_or_else(|| "API returned unsuccessful status".to_string()),
            ));
        }

        let (Some(lat), Some(lon)) = (data.lat, data.lon) else {
            warn!("IP-API reported success without coordinates");
            return Err(MedihelpError::location_lookup(
                "success response without lat/lon",
            ));
        };

        Ok(CallerLocation {
            coordinate: Coordinate::new(lat, lon),
            city: data.city,
            region: data.region_name,
            country: data.country,
        })
    }
}

impl LocationResolver for IpApiResolver {
    fn resolve(&self) -> Result<CallerLocation> {
        let response = self
            .agent
            .get(&self.api_url)
            .header("User-Agent", &self.user_agent)
            .header("Accept", ACCEPT_JSON)
            .header("Accept-Language", ACCEPT_LANGUAGE)
            .call()
            .map_err(|e| transport_error(SERVICE, e))?;

        let data: IpApiResponse = decode_response(SERVICE, response)?;
        let location = Self::into_location(data)?;

        debug!(
            "IP-API lookup: coordinate=({}), city={:?}, country={:?}",
            location.coordinate, location.city, location.country
        );
        Ok(location)
    }

    fn name(&self) -> &'static str {
        "ip-api"
    }
}
