use std::sync::Arc;

use tracing::{debug, info, warn};

use super::model::{Address, FacilityCategory, FacilityRecord, SearchOutcome, UNNAMED_FACILITY};
use super::overpass::{FacilitySource, OverpassApi, OverpassElement};
use crate::config::{AppConfig, SearchConfig};
use crate::errors::{MedihelpError, Result};
use crate::services::geo::Coordinate;
use crate::services::geoip::{IpApiResolver, LocationResolver};

/// 搜索半径与结果数量
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchParams {
    pub radius_meters: u32,
    pub limit: usize,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            radius_meters: 5000,
            limit: 5,
        }
    }
}

impl From<&SearchConfig> for SearchParams {
    fn from(config: &SearchConfig) -> Self {
        Self {
            radius_meters: config.default_radius,
            limit: config.default_limit,
        }
    }
}

/// Facility Finder
///
/// 无内部状态：每次调用最多顺序发起两次阻塞请求（IP 定位、Overpass 查询），
/// 第二次只在调用方未提供坐标时依赖第一次的结果。
pub struct FacilityFinder {
    resolver: Arc<dyn LocationResolver>,
    source: Arc<dyn FacilitySource>,
}

impl FacilityFinder {
    pub fn new(resolver: Arc<dyn LocationResolver>, source: Arc<dyn FacilitySource>) -> Self {
        Self { resolver, source }
    }

    /// 使用 ip-api.com 和 Overpass API 构建
    pub fn from_config(config: &AppConfig) -> Self {
        let resolver = Arc::new(IpApiResolver::new(&config.geoip));
        let source = Arc::new(OverpassApi::new(&config.overpass));
        info!(
            "Facility finder: location via {}, facilities via {}",
            resolver.name(),
            source.name()
        );
        Self::new(resolver, source)
    }

    /// Use the given coordinate, or fall back to the caller's IP location.
    ///
    /// The fallback is city-level; distances computed from it are
    /// approximate.
    pub fn resolve_origin(&self, coordinate: Option<Coordinate>) -> Result<Coordinate> {
        if let Some(coordinate) = coordinate {
            return Ok(coordinate);
        }

        debug!("No coordinate supplied, resolving via {}", self.resolver.name());
        match self.resolver.resolve() {
            Ok(location) => {
                info!(
                    "Resolved caller location to ({}) city={:?} region={:?} country={:?}",
                    location.coordinate, location.city, location.region, location.country
                );
                Ok(location.coordinate)
            }
            Err(e) => {
                warn!("Error getting location: {}", e);
                Err(MedihelpError::location_unavailable(e.to_string()))
            }
        }
    }

    /// Find hospitals and clinics within `radius_meters`, nearest first,
    /// at most `limit` of them.
    pub fn find(
        &self,
        coordinate: Option<Coordinate>,
        radius_meters: u32,
        limit: usize,
    ) -> SearchOutcome {
        let origin = match self.resolve_origin(coordinate) {
            Ok(origin) => origin,
            Err(e) => return SearchOutcome::Failed(e),
        };

        let elements = match self.source.fetch(&origin, radius_meters, limit) {
            Ok(elements) => elements,
            Err(e) => {
                warn!("Error finding nearby hospitals: {}", e);
                return SearchOutcome::Failed(e);
            }
        };

        let records = elements
            .into_iter()
            .map(|element| build_record(element, &origin))
            .collect();
        let ranked = rank(records, limit);

        if ranked.is_empty() {
            info!("No facilities found within {}m of ({})", radius_meters, origin);
            SearchOutcome::NoResults
        } else {
            debug!("Returning {} facilities near ({})", ranked.len(), origin);
            SearchOutcome::Found(ranked)
        }
    }

    pub fn find_with(&self, coordinate: Option<Coordinate>, params: SearchParams) -> SearchOutcome {
        self.find(coordinate, params.radius_meters, params.limit)
    }
}

/// Turn an upstream element into a record, measuring from `origin`.
pub fn build_record(element: OverpassElement, origin: &Coordinate) -> FacilityRecord {
    let location = element.coordinate();
    let distance = location.map(|point| origin.distance_km(&point));

    let mut tags = element.tags;
    let mut take = |key: &str| tags.remove(key);

    let name = take("name").unwrap_or_else(|| UNNAMED_FACILITY.to_string());
    let amenity = take("amenity").and_then(|v| FacilityCategory::from_tag(&v));
    let phone = take("phone");
    let website = take("website");
    let address = Address {
        housenumber: take("addr:housenumber"),
        street: take("addr:street"),
        city: take("addr:city"),
        postcode: take("addr:postcode"),
        suburb: take("addr:suburb"),
        state: take("addr:state"),
    };

    FacilityRecord {
        id: element.id,
        kind: element.kind,
        name,
        amenity,
        phone,
        website,
        address,
        location,
        distance,
    }
}

/// Stable ascending sort by distance, then truncate to `limit`.
///
/// Records without a distance go last; equal distances keep their
/// discovery order.
pub fn rank(mut records: Vec<FacilityRecord>, limit: usize) -> Vec<FacilityRecord> {
    records.sort_by(|a, b| a.sort_key().total_cmp(&b.sort_key()));
    records.truncate(limit);
    records
}
