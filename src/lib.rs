//! Codeground - 代码演练场桌面客户端核心
//!
//! 这是客户端的编排层：在交互式编辑器界面与远端执行/存储服务
//! 之间，持有"用户当前正在看什么"的唯一事实来源，并以一致的
//! 状态变迁纪律驱动所有网络操作（保存片段、执行、拉取历史、
//! 生成分享链接）。
//!
//! ## Workspace 结构
//!
//! - codeground-core crate（领域模型、语言目录、错误信封）
//! - codeground-api crate（API 网关客户端：每个后端端点一个方法）
//! - codeground-session crate（工作区会话控制器：状态 + 动作）
//! - 主 crate 负责组装与日志初始化，供视图层嵌入

// 重新导出子 crate 的类型
pub use codeground_api::{ApiClient, ApiClientError, ApiConfig};
pub use codeground_core::{
    ApiErrorBody, ExecutionRequest, ExecutionResult, ExecutionStatus, Language, LanguageInfo,
    PageResponse, ShareCleanupResult, ShareInfo, ShareRequest, ShareStatistics, Snippet,
    SnippetRequest,
};
pub use codeground_session::{
    Gateway, LogNotifier, Notifier, SessionController, SessionState, DEFAULT_AUTHOR, DEFAULT_TITLE,
};

// 核心模块
pub mod logger;

use std::sync::Arc;

/// 按默认配置组装一个可用的会话控制器
///
/// 基础地址解析顺序见 [`ApiConfig`]：显式覆盖 > 运行时环境变量 >
/// 构建时默认值 > 本地回退。宿主创建一次，随会话存活。
pub fn bootstrap_session(
    base_url_override: Option<&str>,
    notifier: Option<Arc<dyn Notifier>>,
) -> Result<SessionController<ApiClient>, ApiClientError> {
    let config = ApiConfig::resolve(base_url_override);
    tracing::info!("[Bootstrap] API 基础地址: {}", config.base_url);
    let client = Arc::new(ApiClient::new(config)?);
    Ok(match notifier {
        Some(notifier) => SessionController::with_notifier(client, notifier),
        None => SessionController::new(client),
    })
}
