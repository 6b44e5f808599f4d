//! 代码分享模型

use crate::models::Snippet;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 分享信息
///
/// 分享创建时会内嵌片段快照，接收方通过分享链接打开时
/// 直接用快照还原编辑器内容。客户端视角下分享不可变，
/// 失效是一个独立的删除类动作。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShareInfo {
    /// 分享记录 ID
    pub id: i64,
    /// 所属片段 ID
    pub code_snippet_id: i64,
    /// 分享令牌
    pub share_id: String,
    /// 完整分享链接
    pub share_url: String,
    /// 过期时间（缺省 = 永久有效）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,
    /// 是否有效
    pub is_active: bool,
    /// 创建时间
    pub created_at: DateTime<Utc>,
    /// 分享时刻的片段快照
    pub code_snippet: Snippet,
}

/// 创建分享请求
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShareRequest {
    /// 要分享的片段 ID
    pub code_snippet_id: i64,
    /// 有效天数（缺省 = 永久有效）
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiration_days: Option<u32>,
}

/// 过期分享清理结果
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShareCleanupResult {
    /// 本次被置为失效的分享数量
    pub deactivated_count: i64,
    /// 提示消息
    pub message: String,
}

/// 分享统计
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShareStatistics {
    pub total_shares: i64,
    pub active_shares: i64,
    pub expired_shares: i64,
    pub permanent_shares: i64,
}
