//! codeground-core - 领域模型层
//!
//! 定义代码演练场客户端与后端之间的全部线上数据结构：
//! - 代码片段（Snippet）及其创建/更新请求
//! - 执行结果（ExecutionResult）及执行请求
//! - 分享信息（ShareInfo）及分享请求
//! - 分页响应信封、后端错误信封
//! - 编程语言目录（含各语言的初始代码）
//!
//! 本 crate 不包含任何网络或状态逻辑，仅承载数据。

pub mod language;
pub mod models;

pub use language::{Language, LanguageInfo};
pub use models::{
    ApiErrorBody, ExecutionRequest, ExecutionResult, ExecutionStatus, PageResponse,
    ShareCleanupResult, ShareInfo, ShareRequest, ShareStatistics, Snippet, SnippetRequest,
};
