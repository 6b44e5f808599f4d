//! 后端错误信封

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// 后端统一错误响应体
///
/// 所有非 2xx 响应都可能携带该信封；`validation_errors`
/// 仅在参数校验失败时出现（字段名 -> 错误描述）。
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiErrorBody {
    /// 错误发生时间
    pub timestamp: DateTime<Utc>,
    /// HTTP 状态码
    pub status: u16,
    /// 机器可读错误码
    pub error: String,
    /// 人类可读错误消息
    pub message: String,
    /// 请求路径
    pub path: String,
    /// 字段校验错误
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validation_errors: Option<HashMap<String, String>>,
}
