//! 代码执行模型

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 执行终态
///
/// 三态封闭结果，没有部分完成或流式中间态。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ExecutionStatus {
    Success,
    Error,
    Timeout,
}

impl ExecutionStatus {
    /// 线上枚举标签
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Success => "SUCCESS",
            Self::Error => "ERROR",
            Self::Timeout => "TIMEOUT",
        }
    }
}

/// 一次服务端执行的结果
///
/// 每个执行请求恰好产生一条记录，创建后不可变；
/// 客户端只会追加到历史或替换"最近一次"槽位。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutionResult {
    /// 执行记录 ID
    pub id: i64,
    /// 所属片段 ID
    pub code_snippet_id: i64,
    /// 执行终态
    pub status: ExecutionStatus,
    /// 捕获的标准输出
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
    /// 错误消息
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
    /// 耗时（毫秒）
    pub execution_time: i64,
    /// 内存占用（KB）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub memory_usage: Option<i64>,
    /// 创建时间
    pub created_at: DateTime<Utc>,
}

/// 执行请求
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutionRequest {
    /// 要执行的片段 ID
    pub code_snippet_id: i64,
    /// 覆盖片段内容的临时代码
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_code: Option<String>,
    /// 标准输入
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input: Option<String>,
    /// 服务端执行超时（秒）
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_seconds: Option<u32>,
}
