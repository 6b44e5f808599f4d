//! 网关客户端配置
//!
//! 基础地址按优先级解析：显式覆盖 > 运行时环境变量 >
//! 构建时默认值 > 本地回退地址。运行时环境变量的存在
//! 使得已部署的客户端无需重新构建即可指向另一套后端。

use std::time::Duration;
use url::Url;

/// 运行时基础地址环境变量
pub const ENV_API_BASE_URL: &str = "CODEGROUND_API_BASE_URL";

/// 本地开发回退地址
pub const FALLBACK_API_BASE_URL: &str = "http://localhost:8080/api/v1";

/// 构建时注入的默认地址（可选）
const BUILD_TIME_API_BASE_URL: Option<&str> = option_env!("CODEGROUND_DEFAULT_API_BASE_URL");

/// 统一请求超时（秒）
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// 网关客户端配置
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// 后端基础地址（不含结尾斜杠）
    pub base_url: String,
    /// 请求超时
    pub timeout: Duration,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::resolve(None)
    }
}

impl ApiConfig {
    /// 按优先级解析配置
    ///
    /// `override_url` 非空时优先生效（用于测试或多后端场景）。
    /// 无法解析为合法 URL 的候选地址会被跳过并落到下一级。
    pub fn resolve(override_url: Option<&str>) -> Self {
        let runtime = std::env::var(ENV_API_BASE_URL).ok();

        let base_url = [
            override_url,
            runtime.as_deref(),
            BUILD_TIME_API_BASE_URL,
        ]
        .into_iter()
        .flatten()
        .find_map(normalize_base_url)
        .unwrap_or_else(|| FALLBACK_API_BASE_URL.to_string());

        Self {
            base_url,
            timeout: Duration::from_secs(REQUEST_TIMEOUT_SECS),
        }
    }

    /// 直接指定基础地址
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: normalize_base_url(&base_url)
                .unwrap_or_else(|| FALLBACK_API_BASE_URL.to_string()),
            timeout: Duration::from_secs(REQUEST_TIMEOUT_SECS),
        }
    }
}

/// 校验并规整候选地址（去除结尾斜杠）
fn normalize_base_url(candidate: &str) -> Option<String> {
    let trimmed = candidate.trim();
    if trimmed.is_empty() {
        return None;
    }
    if Url::parse(trimmed).is_err() {
        tracing::warn!("[ApiConfig] 忽略非法基础地址: {}", trimmed);
        return None;
    }
    Some(trimmed.trim_end_matches('/').to_string())
}
