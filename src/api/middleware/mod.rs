pub mod cors;
pub mod request_log;

pub use cors::{build_cors_middleware, origin_allowed};
pub use request_log::{REQUEST_ID_HEADER, RequestId, RequestLogger};
