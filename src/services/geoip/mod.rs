//! GeoIP 服务模块
//!
//! 在调用方没有提供坐标时，根据出口 IP 推断大致位置。

mod external_api;
mod provider;

pub use external_api::IpApiResolver;
pub use provider::{CallerLocation, LocationResolver};
