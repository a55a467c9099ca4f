use serde::{Deserialize, Serialize};

use crate::errors::MedihelpError;
use crate::services::geo::Coordinate;

/// 名称缺失时的占位名
pub const UNNAMED_FACILITY: &str = "Unnamed Hospital/Clinic";

pub const NO_RESULTS_MESSAGE: &str =
    "No hospitals or clinics found in your area. Try increasing the search radius.";

/// Geometry kind of the upstream element.
///
/// Nodes carry their own point; ways and relations are areas represented
/// by a centroid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    Node,
    Way,
    Relation,
    #[serde(other)]
    Other,
}

impl ElementKind {
    pub fn is_point(&self) -> bool {
        matches!(self, ElementKind::Node)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FacilityCategory {
    Hospital,
    Clinic,
}

impl FacilityCategory {
    /// The `amenity=*` tag value this category is queried by
    pub fn tag_value(&self) -> &'static str {
        match self {
            Self::Hospital => "hospital",
            Self::Clinic => "clinic",
        }
    }

    pub fn all() -> [FacilityCategory; 2] {
        [Self::Hospital, Self::Clinic]
    }

    pub fn from_tag(value: &str) -> Option<Self> {
        match value {
            "hospital" => Some(Self::Hospital),
            "clinic" => Some(Self::Clinic),
            _ => None,
        }
    }
}

/// 邮寄地址，六个字段各自独立可选，缺失字段不序列化
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Address {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub housenumber: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub street: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postcode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suburb: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
}

impl Address {
    pub fn is_empty(&self) -> bool {
        self.housenumber.is_none()
            && self.street.is_none()
            && self.city.is_none()
            && self.postcode.is_none()
            && self.suburb.is_none()
            && self.state.is_none()
    }
}

/// A hospital or clinic found near the query point.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FacilityRecord {
    pub id: Option<u64>,
    #[serde(rename = "type")]
    pub kind: ElementKind,
    pub name: String,
    pub amenity: Option<FacilityCategory>,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub address: Address,
    /// Absent when the element has neither a point nor a centroid
    #[serde(flatten)]
    pub location: Option<Coordinate>,
    /// 距查询点的距离（千米，保留两位小数）
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance: Option<f64>,
}

impl FacilityRecord {
    /// Ordering key; records without a distance sort after everything else.
    #[inline]
    pub fn sort_key(&self) -> f64 {
        self.distance.unwrap_or(f64::INFINITY)
    }
}

/// Result of one facility search.
///
/// `Found` is never empty. `NoResults` is a successful query with zero
/// matches and is not an error; `Failed` carries the upstream or location
/// failure that stopped the search.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    Found(Vec<FacilityRecord>),
    NoResults,
    Failed(MedihelpError),
}

impl SearchOutcome {
    pub fn records(&self) -> &[FacilityRecord] {
        match self {
            SearchOutcome::Found(records) => records,
            _ => &[],
        }
    }

    pub fn into_records(self) -> Vec<FacilityRecord> {
        match self {
            SearchOutcome::Found(records) => records,
            _ => Vec::new(),
        }
    }

    /// Caller-facing text of a terminal indicator, `None` for a result list.
    pub fn message(&self) -> Option<String> {
        match self {
            SearchOutcome::Found(_) => None,
            SearchOutcome::NoResults => Some(NO_RESULTS_MESSAGE.to_string()),
            SearchOutcome::Failed(err) => Some(err.user_message()),
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, SearchOutcome::Failed(_))
    }
}
