//! Overpass API 查询
//!
//! 一次请求同时查询 node/way/relation 三类元素中 amenity 为
//! hospital 或 clinic 的设施，非点要素返回中心点。

use std::collections::HashMap;
use std::fmt::Write;

use serde::Deserialize;
use tracing::debug;
use ureq::Agent;

use super::model::{ElementKind, FacilityCategory};
use crate::config::OverpassConfig;
use crate::errors::Result;
use crate::services::geo::Coordinate;
use crate::services::upstream::{
    ACCEPT_JSON, ACCEPT_LANGUAGE, build_agent, decode_response, transport_error,
};

const SERVICE: &str = "Overpass API";

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Center {
    pub lat: f64,
    pub lon: f64,
}

/// One element of an Overpass `[out:json]` reply.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct OverpassElement {
    #[serde(rename = "type")]
    pub kind: ElementKind,
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub lon: Option<f64>,
    #[serde(default)]
    pub center: Option<Center>,
    #[serde(default)]
    pub tags: HashMap<String, String>,
}

impl OverpassElement {
    /// 节点使用自身坐标，其它要素使用中心点
    pub fn coordinate(&self) -> Option<Coordinate> {
        if self.kind.is_point()
            && let (Some(lat), Some(lon)) = (self.lat, self.lon)
        {
            return Some(Coordinate::new(lat, lon));
        }
        self.center.map(|c| Coordinate::new(c.lat, c.lon))
    }

    pub fn tag(&self, key: &str) -> Option<&str> {
        self.tags.get(key).map(String::as_str)
    }
}

#[derive(Debug, Deserialize)]
pub struct OverpassResponse {
    #[serde(default)]
    pub elements: Vec<OverpassElement>,
}

/// Build the Overpass QL query for facilities within `radius_meters` of
/// `center`, capped server-side at `limit` elements.
pub fn build_query(center: &Coordinate, radius_meters: u32, limit: usize) -> String {
    let around = format!(
        "(around:{},{},{})",
        radius_meters, center.latitude, center.longitude
    );

    let mut query = String::from("[out:json];\n(\n");
    for category in FacilityCategory::all() {
        for element in ["node", "way", "relation"] {
            let _ = writeln!(
                query,
                "  {}[\"amenity\"=\"{}\"]{};",
                element,
                category.tag_value(),
                around
            );
        }
    }
    let _ = write!(query, ");\nout center body {};\n", limit);
    query
}

/// Upstream source of raw facility elements.
pub trait FacilitySource: Send + Sync {
    fn fetch(
        &self,
        center: &Coordinate,
        radius_meters: u32,
        limit: usize,
    ) -> Result<Vec<OverpassElement>>;

    /// 获取数据源名称（用于日志）
    fn name(&self) -> &'static str;
}

/// [`FacilitySource`] backed by an Overpass interpreter endpoint.
pub struct OverpassApi {
    agent: Agent,
    api_url: String,
    user_agent: String,
}

impl OverpassApi {
    pub fn new(config: &OverpassConfig) -> Self {
        Self {
            agent: build_agent(config.timeout_secs),
            api_url: config.api_url.clone(),
            user_agent: config.user_agent.clone(),
        }
    }
}

impl FacilitySource for OverpassApi {
    fn fetch(
        &self,
        center: &Coordinate,
        radius_meters: u32,
        limit: usize,
    ) -> Result<Vec<OverpassElement>> {
        let query = build_query(center, radius_meters, limit);
        debug!(
            "Querying {} around ({}) radius={}m limit={}",
            SERVICE, center, radius_meters, limit
        );

        let response = self
            .agent
            .post(&self.api_url)
            .header("User-Agent", &self.user_agent)
            .header("Accept", ACCEPT_JSON)
            .header("Accept-Language", ACCEPT_LANGUAGE)
            .send_form([("data", query.as_str())])
            .map_err(|e| transport_error(SERVICE, e))?;

        let data: OverpassResponse = decode_response(SERVICE, response)?;
        debug!("{} returned {} elements", SERVICE, data.elements.len());
        Ok(data.elements)
    }

    fn name(&self) -> &'static str {
        "overpass"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::MedihelpError;
    use httpmock::prelude::*;
    use serde_json::json;

    fn api_for(server: &MockServer) -> OverpassApi {
        OverpassApi::new(&OverpassConfig {
            api_url: server.url("/api/interpreter"),
            timeout_secs: 2,
            user_agent: "medihelp-test/1.0".to_string(),
        })
    }

    #[test]
    fn test_query_covers_all_element_types_and_categories() {
        let q = build_query(&Coordinate::new(40.7128, -74.006), 5000, 5);
        assert!(q.starts_with("[out:json];"));
        for element in ["node", "way", "relation"] {
            for amenity in ["hospital", "clinic"] {
                let line = format!(
                    "{}[\"amenity\"=\"{}\"](around:5000,40.7128,-74.006);",
                    element, amenity
                );
                assert!(q.contains(&line), "missing `{}` in\n{}", line, q);
            }
        }
        assert!(q.trim_end().ends_with("out center body 5;"));
    }

    #[test]
    fn test_element_coordinate_resolution() {
        let node: OverpassElement = serde_json::from_value(json!({
            "type": "node", "id": 1, "lat": 1.5, "lon": 2.5
        }))
        .unwrap();
        assert_eq!(node.coordinate(), Some(Coordinate::new(1.5, 2.5)));

        let way: OverpassElement = serde_json::from_value(json!({
            "type": "way", "id": 2, "center": {"lat": 3.0, "lon": 4.0},
            "tags": {"amenity": "clinic"}
        }))
        .unwrap();
        assert_eq!(way.coordinate(), Some(Coordinate::new(3.0, 4.0)));
        assert_eq!(way.tag("amenity"), Some("clinic"));

        let bare: OverpassElement =
            serde_json::from_value(json!({"type": "relation", "id": 3})).unwrap();
        assert_eq!(bare.coordinate(), None);
        assert!(bare.tags.is_empty());
    }

    #[test]
    fn test_unknown_element_type_is_kept() {
        let area: OverpassElement =
            serde_json::from_value(json!({"type": "area", "id": 4})).unwrap();
        assert_eq!(area.kind, ElementKind::Other);
    }

    #[test]
    fn test_fetch_posts_form_query() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(POST)
                .path("/api/interpreter")
                .header("User-Agent", "medihelp-test/1.0")
                .body_contains("data=")
                .body_contains("hospital");
            then.status(200).json_body(json!({
                "version": 0.6,
                "elements": [
                    {"type": "node", "id": 10, "lat": 40.71, "lon": -74.0,
                     "tags": {"amenity": "hospital", "name": "General"}}
                ]
            }));
        });

        let elements = api_for(&server)
            .fetch(&Coordinate::new(40.7128, -74.006), 5000, 5)
            .unwrap();
        mock.assert();
        assert_eq!(elements.len(), 1);
        assert_eq!(elements[0].tag("name"), Some("General"));
    }

    #[test]
    fn test_missing_elements_key_means_empty() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/api/interpreter");
            then.status(200).json_body(json!({"version": 0.6}));
        });

        let elements = api_for(&server)
            .fetch(&Coordinate::new(0.0, 0.0), 5000, 5)
            .unwrap();
        assert!(elements.is_empty());
    }

    #[test]
    fn test_fetch_status_mapping() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/api/interpreter");
            then.status(429);
        });
        let err = api_for(&server)
            .fetch(&Coordinate::new(0.0, 0.0), 5000, 5)
            .unwrap_err();
        assert!(matches!(err, MedihelpError::Throttled(_)));

        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/api/interpreter");
            then.status(504).body("Gateway Timeout");
        });
        let err = api_for(&server)
            .fetch(&Coordinate::new(0.0, 0.0), 5000, 5)
            .unwrap_err();
        assert_eq!(err, MedihelpError::UpstreamStatus(504));

        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/api/interpreter");
            then.status(200).body("runtime error: out of memory");
        });
        let err = api_for(&server)
            .fetch(&Coordinate::new(0.0, 0.0), 5000, 5)
            .unwrap_err();
        assert!(matches!(err, MedihelpError::MalformedResponse(_)));
    }
}
