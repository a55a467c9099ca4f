//! 坐标与大圆距离

use serde::{Deserialize, Serialize};

/// 地球半径（千米）
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// A latitude/longitude pair in signed degrees.
///
/// Values are not range-checked; whatever the caller sends is forwarded to
/// the upstream services as-is.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Great-circle distance to `other` in kilometres, rounded to 2 decimals.
    pub fn distance_km(&self, other: &Coordinate) -> f64 {
        round_to_hundredths(haversine_km(
            self.latitude,
            self.longitude,
            other.latitude,
            other.longitude,
        ))
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}, {}", self.latitude, self.longitude)
    }
}

/// Haversine distance in kilometres between two points given in degrees.
pub fn haversine_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let (lat1, lon1, lat2, lon2) = (
        lat1.to_radians(),
        lon1.to_radians(),
        lat2.to_radians(),
        lon2.to_radians(),
    );
    let dlat = lat2 - lat1;
    let dlon = lon2 - lon1;
    let a = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
    EARTH_RADIUS_KM * c
}

/// Round to 2 decimals on the exact decimal expansion of `value`.
///
/// `1.115` is stored as `1.11499…` and becomes `1.11`; scaling by 100
/// first would round it up.
pub fn round_to_hundredths(value: f64) -> f64 {
    format!("{:.2}", value).parse().unwrap_or(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_to_self_is_zero() {
        let p = Coordinate::new(40.7128, -74.0060);
        assert_eq!(p.distance_km(&p), 0.0);
    }

    #[test]
    fn test_distance_is_symmetric() {
        let pairs = [
            (Coordinate::new(40.7128, -74.0060), Coordinate::new(51.5074, -0.1278)),
            (Coordinate::new(-33.8688, 151.2093), Coordinate::new(35.6762, 139.6503)),
            (Coordinate::new(0.0, 179.9), Coordinate::new(0.0, -179.9)),
        ];
        for (a, b) in pairs {
            assert_eq!(a.distance_km(&b), b.distance_km(&a), "{} <-> {}", a, b);
        }
    }

    #[test]
    fn test_known_distance_new_york_london() {
        let nyc = Coordinate::new(40.7128, -74.0060);
        let london = Coordinate::new(51.5074, -0.1278);
        let d = nyc.distance_km(&london);
        assert!((d - 5570.22).abs() < 1.0, "got {}", d);
    }

    #[test]
    fn test_one_degree_of_latitude() {
        let d = haversine_km(0.0, 0.0, 1.0, 0.0);
        // 2πR / 360
        assert!((d - 111.19).abs() < 0.01, "got {}", d);
    }

    #[test]
    fn test_rounding() {
        assert_eq!(round_to_hundredths(1.234), 1.23);
        assert_eq!(round_to_hundredths(1.235_1), 1.24);
        assert_eq!(round_to_hundredths(0.0), 0.0);
    }

    #[test]
    fn test_rounding_boundary_values() {
        assert_eq!(round_to_hundredths(1.115), 1.11);
        assert_eq!(round_to_hundredths(2.675), 2.67);
        assert_eq!(round_to_hundredths(0.285), 0.28);
        assert_eq!(round_to_hundredths(-1.115), -1.11);
    }
}
