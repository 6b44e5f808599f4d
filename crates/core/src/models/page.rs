//! 分页响应信封

use serde::{Deserialize, Serialize};

/// 后端列表接口统一的分页信封
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageResponse<T> {
    /// 当前页内容
    pub content: Vec<T>,
    /// 页号（从 0 开始）
    pub page: u32,
    /// 页大小
    pub size: u32,
    /// 总条数
    pub total_elements: i64,
    /// 总页数
    pub total_pages: u32,
    /// 是否首页
    pub first: bool,
    /// 是否末页
    pub last: bool,
}
