//! 代码片段端点

use crate::client::ApiClient;
use crate::error::ApiClientError;
use codeground_core::{Language, PageResponse, Snippet, SnippetRequest};

impl ApiClient {
    /// 分页列出片段
    pub async fn list_snippets(
        &self,
        page: u32,
        size: u32,
    ) -> Result<PageResponse<Snippet>, ApiClientError> {
        self.get_json(&format!("/snippets?page={}&size={}", page, size))
            .await
    }

    /// 按 ID 获取片段
    pub async fn get_snippet(&self, id: i64) -> Result<Snippet, ApiClientError> {
        self.get_json(&format!("/snippets/{}", id)).await
    }

    /// 创建片段
    pub async fn create_snippet(
        &self,
        request: &SnippetRequest,
    ) -> Result<Snippet, ApiClientError> {
        self.post_json("/snippets", request).await
    }

    /// 全量更新片段
    pub async fn update_snippet(
        &self,
        id: i64,
        request: &SnippetRequest,
    ) -> Result<Snippet, ApiClientError> {
        self.put_json(&format!("/snippets/{}", id), request).await
    }

    /// 删除片段
    pub async fn delete_snippet(&self, id: i64) -> Result<(), ApiClientError> {
        self.delete(&format!("/snippets/{}", id)).await
    }

    /// 关键字搜索
    pub async fn search_snippets(
        &self,
        keyword: &str,
        page: u32,
        size: u32,
    ) -> Result<PageResponse<Snippet>, ApiClientError> {
        self.get_json(&format!(
            "/snippets/search?keyword={}&page={}&size={}",
            urlencoding::encode(keyword),
            page,
            size
        ))
        .await
    }

    /// 按作者列出
    pub async fn list_by_author(
        &self,
        author_name: &str,
        page: u32,
        size: u32,
    ) -> Result<PageResponse<Snippet>, ApiClientError> {
        self.get_json(&format!(
            "/snippets/author/{}?page={}&size={}",
            urlencoding::encode(author_name),
            page,
            size
        ))
        .await
    }

    /// 按语言列出
    pub async fn list_by_language(
        &self,
        language: Language,
        page: u32,
        size: u32,
    ) -> Result<PageResponse<Snippet>, ApiClientError> {
        self.get_json(&format!(
            "/snippets/language/{}?page={}&size={}",
            language.tag(),
            page,
            size
        ))
        .await
    }

    /// 按热度列出
    pub async fn list_popular(
        &self,
        page: u32,
        size: u32,
    ) -> Result<PageResponse<Snippet>, ApiClientError> {
        self.get_json(&format!("/snippets/popular?page={}&size={}", page, size))
            .await
    }
}
