//! 控制器与网络层之间的接缝
//!
//! 控制器只依赖本 trait，不直接依赖具体 HTTP 客户端，
//! 测试用记录型假实现替换。[`codeground_api::ApiClient`]
//! 是生产实现，方法一一委托。

use async_trait::async_trait;
use codeground_api::{ApiClient, ApiClientError};
use codeground_core::{
    ExecutionRequest, ExecutionResult, PageResponse, ShareInfo, ShareRequest, Snippet,
    SnippetRequest,
};

/// 会话控制器使用的网络能力
#[async_trait]
pub trait Gateway: Send + Sync {
    async fn list_snippets(
        &self,
        page: u32,
        size: u32,
    ) -> Result<PageResponse<Snippet>, ApiClientError>;

    async fn search_snippets(
        &self,
        keyword: &str,
        page: u32,
        size: u32,
    ) -> Result<PageResponse<Snippet>, ApiClientError>;

    async fn get_snippet(&self, id: i64) -> Result<Snippet, ApiClientError>;

    async fn create_snippet(&self, request: &SnippetRequest) -> Result<Snippet, ApiClientError>;

    async fn update_snippet(
        &self,
        id: i64,
        request: &SnippetRequest,
    ) -> Result<Snippet, ApiClientError>;

    async fn delete_snippet(&self, id: i64) -> Result<(), ApiClientError>;

    async fn execute(&self, request: &ExecutionRequest) -> Result<ExecutionResult, ApiClientError>;

    async fn get_execution_history(
        &self,
        snippet_id: i64,
        page: u32,
        size: u32,
    ) -> Result<PageResponse<ExecutionResult>, ApiClientError>;

    async fn create_share(&self, request: &ShareRequest) -> Result<ShareInfo, ApiClientError>;

    async fn get_share(&self, share_id: &str) -> Result<ShareInfo, ApiClientError>;
}

#[async_trait]
impl Gateway for ApiClient {
    async fn list_snippets(
        &self,
        page: u32,
        size: u32,
    ) -> Result<PageResponse<Snippet>, ApiClientError> {
        ApiClient::list_snippets(self, page, size).await
    }

    async fn search_snippets(
        &self,
        keyword: &str,
        page: u32,
        size: u32,
    ) -> Result<PageResponse<Snippet>, ApiClientError> {
        ApiClient::search_snippets(self, keyword, page, size).await
    }

    async fn get_snippet(&self, id: i64) -> Result<Snippet, ApiClientError> {
        ApiClient::get_snippet(self, id).await
    }

    async fn create_snippet(&self, request: &SnippetRequest) -> Result<Snippet, ApiClientError> {
        ApiClient::create_snippet(self, request).await
    }

    async fn update_snippet(
        &self,
        id: i64,
        request: &SnippetRequest,
    ) -> Result<Snippet, ApiClientError> {
        ApiClient::update_snippet(self, id, request).await
    }

    async fn delete_snippet(&self, id: i64) -> Result<(), ApiClientError> {
        ApiClient::delete_snippet(self, id).await
    }

    async fn execute(&self, request: &ExecutionRequest) -> Result<ExecutionResult, ApiClientError> {
        ApiClient::execute(self, request).await
    }

    async fn get_execution_history(
        &self,
        snippet_id: i64,
        page: u32,
        size: u32,
    ) -> Result<PageResponse<ExecutionResult>, ApiClientError> {
        ApiClient::get_execution_history(self, snippet_id, page, size).await
    }

    async fn create_share(&self, request: &ShareRequest) -> Result<ShareInfo, ApiClientError> {
        ApiClient::create_share(self, request).await
    }

    async fn get_share(&self, share_id: &str) -> Result<ShareInfo, ApiClientError> {
        ApiClient::get_share(self, share_id).await
    }
}
