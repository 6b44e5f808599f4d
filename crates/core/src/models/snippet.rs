//! 代码片段模型

use crate::language::Language;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 已保存的代码片段
///
/// 由保存动作创建、更新动作修改；执行不会修改片段本身
/// （执行记录是独立的追加式数据）。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snippet {
    /// 片段 ID（后端分配）
    pub id: i64,
    /// 标题
    pub title: String,
    /// 源代码
    pub code: String,
    /// 编程语言
    pub language: Language,
    /// 作者展示名
    pub author_name: String,
    /// 是否有效
    pub is_active: bool,
    /// 创建时间
    pub created_at: DateTime<Utc>,
    /// 更新时间
    pub updated_at: DateTime<Utc>,
    /// 累计执行次数
    pub execution_count: i64,
    /// 累计分享次数
    pub share_count: i64,
}

/// 创建 / 更新片段请求
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SnippetRequest {
    /// 标题
    pub title: String,
    /// 源代码
    pub code: String,
    /// 编程语言
    pub language: Language,
    /// 作者展示名
    pub author_name: String,
}
