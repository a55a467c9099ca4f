use actix_web::{HttpResponse, Responder, web};
use serde::Serialize;
use tracing::trace;

// 应用启动时间结构体
#[derive(Clone, Debug)]
pub struct AppStartTime {
    pub start_datetime: chrono::DateTime<chrono::Utc>,
}

impl AppStartTime {
    pub fn now() -> Self {
        Self {
            start_datetime: chrono::Utc::now(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub timestamp: String,
    /// 运行秒数
    pub uptime: u64,
    pub version: &'static str,
}

/// Health Service
///
/// 只报告进程存活，不探测上游：上游不可用时查询接口本身会返回相应错误。
pub struct HealthService;

impl HealthService {
    pub async fn health_check(app_start_time: Option<web::Data<AppStartTime>>) -> impl Responder {
        trace!("Received health check request");

        let now = chrono::Utc::now();
        let uptime = app_start_time
            .map(|t| (now - t.start_datetime).num_seconds().max(0) as u64)
            .unwrap_or(0);

        HttpResponse::Ok().json(HealthResponse {
            status: "healthy",
            timestamp: now.to_rfc3339(),
            uptime,
            version: env!("CARGO_PKG_VERSION"),
        })
    }

    pub async fn liveness_check() -> impl Responder {
        trace!("Received liveness check request");

        HttpResponse::NoContent().finish()
    }
}

/// Health 路由配置
pub fn health_routes() -> actix_web::Scope {
    web::scope("/health")
        .route("", web::get().to(HealthService::health_check))
        .route("", web::head().to(HealthService::health_check))
        .route("/live", web::get().to(HealthService::liveness_check))
        .route("/live", web::head().to(HealthService::liveness_check))
}
