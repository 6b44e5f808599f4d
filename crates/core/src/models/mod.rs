//! 线上数据模型
//!
//! 所有结构与后端 JSON 契约一一对应，字段统一使用 camelCase。

mod api_error;
mod execution;
mod page;
mod share;
mod snippet;

pub use api_error::ApiErrorBody;
pub use execution::{ExecutionRequest, ExecutionResult, ExecutionStatus};
pub use page::PageResponse;
pub use share::{ShareCleanupResult, ShareInfo, ShareRequest, ShareStatistics};
pub use snippet::{Snippet, SnippetRequest};
