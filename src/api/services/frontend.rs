use actix_web::{HttpResponse, Result, web};
use rust_embed::Embed;
use tracing::{trace, warn};

// 使用 RustEmbed 嵌入静态页面
#[derive(Embed)]
#[folder = "static/"]
struct FrontendAssets;

pub struct FrontendService;

impl FrontendService {
    /// GET /，原样返回 index.html
    pub async fn handle_index() -> Result<HttpResponse> {
        trace!("Serving index page");

        match FrontendAssets::get("index.html") {
            Some(content) => Ok(HttpResponse::Ok()
                .content_type("text/html; charset=utf-8")
                .body(content.data.into_owned())),
            None => {
                warn!("index.html is missing from embedded assets");
                Ok(HttpResponse::NotFound().body("File not found"))
            }
        }
    }
}

/// 前端路由配置
pub fn frontend_routes() -> actix_web::Resource {
    web::resource("/")
        .route(web::get().to(FrontendService::handle_index))
        .route(web::head().to(FrontendService::handle_index))
}
