pub mod frontend;
pub mod health;
pub mod location;

pub use frontend::{FrontendService, frontend_routes};
pub use health::{AppStartTime, HealthService, health_routes};
pub use location::{LocationService, location_routes, parse_coordinate};
