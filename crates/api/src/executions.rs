//! 代码执行端点

use crate::client::ApiClient;
use crate::error::ApiClientError;
use codeground_core::{ExecutionRequest, ExecutionResult, ExecutionStatus, PageResponse};

impl ApiClient {
    /// 提交一次执行
    pub async fn execute(
        &self,
        request: &ExecutionRequest,
    ) -> Result<ExecutionResult, ApiClientError> {
        self.post_json("/executions/execute", request).await
    }

    /// 按 ID 获取执行记录
    pub async fn get_execution(&self, id: i64) -> Result<ExecutionResult, ApiClientError> {
        self.get_json(&format!("/executions/{}", id)).await
    }

    /// 片段的执行历史（新到旧）
    pub async fn get_execution_history(
        &self,
        snippet_id: i64,
        page: u32,
        size: u32,
    ) -> Result<PageResponse<ExecutionResult>, ApiClientError> {
        self.get_json(&format!(
            "/executions/snippet/{}?page={}&size={}",
            snippet_id, page, size
        ))
        .await
    }

    /// 片段的最近一次执行
    ///
    /// 从未执行过的片段后端返回 404，这里翻译为 `None`；
    /// 这是唯一把 404 视为正常缺失的端点。
    pub async fn get_latest_execution(
        &self,
        snippet_id: i64,
    ) -> Result<Option<ExecutionResult>, ApiClientError> {
        self.get_optional_json(&format!("/executions/snippet/{}/latest", snippet_id))
            .await
    }

    /// 按终态列出执行记录
    pub async fn get_executions_by_status(
        &self,
        status: ExecutionStatus,
        page: u32,
        size: u32,
    ) -> Result<PageResponse<ExecutionResult>, ApiClientError> {
        self.get_json(&format!(
            "/executions/status/{}?page={}&size={}",
            status.tag(),
            page,
            size
        ))
        .await
    }
}
