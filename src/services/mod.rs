//! Service layer for business logic
//!
//! Shared by the HTTP API and the CLI.

pub mod facility;
pub mod geo;
pub mod geoip;
mod upstream;

pub use facility::{FacilityFinder, FacilityRecord, SearchOutcome, SearchParams, format_outcome};
pub use geo::Coordinate;
pub use geoip::{CallerLocation, IpApiResolver, LocationResolver};
