//! 代码分享端点

use crate::client::ApiClient;
use crate::error::ApiClientError;
use codeground_core::{PageResponse, ShareCleanupResult, ShareInfo, ShareRequest, ShareStatistics};

impl ApiClient {
    /// 创建分享链接
    pub async fn create_share(&self, request: &ShareRequest) -> Result<ShareInfo, ApiClientError> {
        self.post_json("/shares", request).await
    }

    /// 按分享令牌获取分享信息
    pub async fn get_share(&self, share_id: &str) -> Result<ShareInfo, ApiClientError> {
        self.get_json(&format!("/shares/{}", urlencoding::encode(share_id)))
            .await
    }

    /// 使分享失效
    pub async fn deactivate_share(&self, share_id: &str) -> Result<(), ApiClientError> {
        self.delete(&format!("/shares/{}", urlencoding::encode(share_id)))
            .await
    }

    /// 某片段的分享列表
    pub async fn list_shares_for_snippet(
        &self,
        snippet_id: i64,
        page: u32,
        size: u32,
    ) -> Result<PageResponse<ShareInfo>, ApiClientError> {
        self.get_json(&format!(
            "/shares/snippet/{}?page={}&size={}",
            snippet_id, page, size
        ))
        .await
    }

    /// 最近创建的分享
    pub async fn list_recent_shares(
        &self,
        page: u32,
        size: u32,
    ) -> Result<PageResponse<ShareInfo>, ApiClientError> {
        self.get_json(&format!("/shares/recent?page={}&size={}", page, size))
            .await
    }

    /// 即将过期的分享
    pub async fn list_expiring_shares(
        &self,
        page: u32,
        size: u32,
    ) -> Result<PageResponse<ShareInfo>, ApiClientError> {
        self.get_json(&format!("/shares/expiring-soon?page={}&size={}", page, size))
            .await
    }

    /// 触发过期分享清理
    pub async fn cleanup_expired_shares(&self) -> Result<ShareCleanupResult, ApiClientError> {
        self.post_empty("/shares/cleanup-expired").await
    }

    /// 分享统计
    pub async fn get_share_statistics(&self) -> Result<ShareStatistics, ApiClientError> {
        self.get_json("/shares/statistics").await
    }
}
