//! 调用方位置解析的抽象层

use serde::Serialize;

use crate::errors::Result;
use crate::services::geo::Coordinate;

/// 地理位置信息
///
/// 只有 `coordinate` 会被设施查询使用，其余字段用于展示和日志。
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CallerLocation {
    #[serde(flatten)]
    pub coordinate: Coordinate,
    pub city: Option<String>,
    pub region: Option<String>,
    pub country: Option<String>,
}

/// Resolves an approximate location for the machine making the request.
///
/// Every failure is returned as an error value; callers decide whether an
/// unresolved location is fatal.
pub trait LocationResolver: Send + Sync {
    fn resolve(&self) -> Result<CallerLocation>;

    /// 获取 resolver 名称（用于日志）
    fn name(&self) -> &'static str;
}
