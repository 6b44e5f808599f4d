//! codeground-api - API 网关客户端
//!
//! 所有网络调用的唯一入口：持有后端基础地址与固定超时，
//! 每个后端能力对应一个类型化方法（片段 / 执行 / 分享），
//! 请求响应一一对应，不做重试、不做缓存、不含业务逻辑。
//!
//! 错误统一收敛为 [`ApiClientError`]，后端错误信封
//! （时间戳、状态码、错误码、消息、请求路径、字段校验错误）
//! 在可解析时原样保留，供上层提取。

mod client;
mod config;
mod error;
mod executions;
mod shares;
mod snippets;

pub use client::ApiClient;
pub use config::ApiConfig;
pub use error::ApiClientError;
