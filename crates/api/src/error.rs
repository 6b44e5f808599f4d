//! 网关客户端错误类型

use codeground_core::ApiErrorBody;
use thiserror::Error;

/// 网关客户端统一错误
///
/// 三类失败：传输失败（超时、连接拒绝、DNS）、后端非 2xx
/// 响应（尽量保留解析出的错误信封）、响应体解析失败。
/// 不在此层做任何重试或翻译，由会话控制器决定呈现文案。
#[derive(Error, Debug)]
pub enum ApiClientError {
    /// 请求未到达或未完成
    #[error("请求发送失败: {0}")]
    Transport(#[from] reqwest::Error),

    /// 后端返回错误状态
    #[error("后端返回 {status}: {message}")]
    Status {
        /// HTTP 状态码
        status: u16,
        /// 错误消息（信封消息或原始响应体）
        message: String,
        /// 解析成功时的完整错误信封
        body: Option<Box<ApiErrorBody>>,
    },

    /// 响应体无法解析为预期结构
    #[error("响应解析失败: {0}")]
    Decode(String),
}

impl ApiClientError {
    /// HTTP 状态码（仅 Status 变体有）
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// 后端错误信封（解析成功时）
    pub fn error_body(&self) -> Option<&ApiErrorBody> {
        match self {
            Self::Status { body, .. } => body.as_deref(),
            _ => None,
        }
    }

    /// 是否为 404
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}

impl From<ApiClientError> for String {
    fn from(err: ApiClientError) -> Self {
        err.to_string()
    }
}

impl serde::Serialize for ApiClientError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}
