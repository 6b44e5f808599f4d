//! HTTP 客户端骨架
//!
//! 持有 reqwest 客户端与基础地址，提供各端点模块共用的
//! 请求辅助方法：统一的出入日志、状态检查与错误收敛。

use crate::config::ApiConfig;
use crate::error::ApiClientError;
use codeground_core::ApiErrorBody;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// API 网关客户端
///
/// 每个后端端点对应一个方法（见 `snippets` / `executions` /
/// `shares` 模块），除固定配置外不保留任何跨调用状态。
pub struct ApiClient {
    /// HTTP 客户端（带固定超时）
    client: Client,
    /// 后端基础地址
    base_url: String,
}

impl ApiClient {
    /// 按给定配置创建客户端
    pub fn new(config: ApiConfig) -> Result<Self, ApiClientError> {
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self {
            client,
            base_url: config.base_url,
        })
    }

    /// 按默认配置（环境变量 / 构建时默认 / 本地回退）创建客户端
    pub fn from_env() -> Result<Self, ApiClientError> {
        Self::new(ApiConfig::default())
    }

    /// 当前基础地址
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
    ) -> Result<T, ApiClientError> {
        let request = self.client.get(self.url(path));
        self.dispatch("GET", path, request).await
    }

    /// GET，但把 404 翻译为 `None` 而不是错误
    ///
    /// 仅供"最近一次执行"这类把不存在视为领域内正常缺失的
    /// 端点使用，其余端点一律走 [`Self::get_json`]。
    pub(crate) async fn get_optional_json<T: DeserializeOwned>(
        &self,
        path: &str,
    ) -> Result<Option<T>, ApiClientError> {
        tracing::debug!("[ApiClient] GET {}", path);
        let response = self.client.get(self.url(path)).send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            tracing::debug!("[ApiClient] 404 {} (视为缺失)", path);
            return Ok(None);
        }
        self.read_json(path, response).await.map(Some)
    }

    pub(crate) async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, ApiClientError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let request = self.client.post(self.url(path)).json(body);
        self.dispatch("POST", path, request).await
    }

    /// 无请求体的 POST（如触发过期分享清理）
    pub(crate) async fn post_empty<T: DeserializeOwned>(
        &self,
        path: &str,
    ) -> Result<T, ApiClientError> {
        let request = self.client.post(self.url(path));
        self.dispatch("POST", path, request).await
    }

    pub(crate) async fn put_json<B, T>(&self, path: &str, body: &B) -> Result<T, ApiClientError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let request = self.client.put(self.url(path)).json(body);
        self.dispatch("PUT", path, request).await
    }

    /// DELETE，成功时无响应体
    pub(crate) async fn delete(&self, path: &str) -> Result<(), ApiClientError> {
        tracing::debug!("[ApiClient] DELETE {}", path);
        let response = self.client.delete(self.url(path)).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(Self::status_error(status, path, response).await);
        }
        tracing::debug!("[ApiClient] {} {}", status.as_u16(), path);
        Ok(())
    }

    async fn dispatch<T: DeserializeOwned>(
        &self,
        method: &str,
        path: &str,
        request: RequestBuilder,
    ) -> Result<T, ApiClientError> {
        tracing::debug!("[ApiClient] {} {}", method, path);
        let response = request.send().await?;
        self.read_json(path, response).await
    }

    async fn read_json<T: DeserializeOwned>(
        &self,
        path: &str,
        response: Response,
    ) -> Result<T, ApiClientError> {
        let status = response.status();
        if !status.is_success() {
            return Err(Self::status_error(status, path, response).await);
        }
        tracing::debug!("[ApiClient] {} {}", status.as_u16(), path);

        let text = response.text().await?;
        serde_json::from_str(&text)
            .map_err(|e| ApiClientError::Decode(format!("{} (路径 {})", e, path)))
    }

    /// 把非 2xx 响应收敛为 [`ApiClientError::Status`]
    ///
    /// 响应体能解析为后端错误信封时原样保留，否则以原始
    /// 文本充当消息。
    async fn status_error(status: StatusCode, path: &str, response: Response) -> ApiClientError {
        let text = response.text().await.unwrap_or_default();
        let body = serde_json::from_str::<ApiErrorBody>(&text)
            .ok()
            .map(Box::new);
        let message = match &body {
            Some(envelope) => envelope.message.clone(),
            None if text.trim().is_empty() => status
                .canonical_reason()
                .unwrap_or("未知错误")
                .to_string(),
            None => text,
        };
        tracing::warn!("[ApiClient] {} {} 请求失败: {}", status.as_u16(), path, message);
        ApiClientError::Status {
            status: status.as_u16(),
            message,
            body,
        }
    }
}
