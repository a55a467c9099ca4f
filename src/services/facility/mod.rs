//! 附近医院与诊所查询
//!
//! 查询 Overpass API、计算距离、稳定排序并截断，最后格式化为文本。

mod finder;
pub mod format;
mod model;
mod overpass;

pub use finder::{FacilityFinder, SearchParams, build_record, rank};
pub use format::{format_address, format_outcome, format_records};
pub use model::{
    Address, ElementKind, FacilityCategory, FacilityRecord, NO_RESULTS_MESSAGE, SearchOutcome,
    UNNAMED_FACILITY,
};
pub use overpass::{
    Center, FacilitySource, OverpassApi, OverpassElement, OverpassResponse, build_query,
};
