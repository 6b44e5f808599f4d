//! 网关客户端模块测试
//!
//! 测试 ApiClient 的创建、配置解析与各线上结构的序列化/反序列化

use codeground_lib::{
    ApiClient, ApiClientError, ApiConfig, ExecutionRequest, ExecutionResult, ExecutionStatus,
    Language, PageResponse, ShareInfo, ShareRequest, Snippet, SnippetRequest,
};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

/// 起一个只应答一次的本地服务器，返回其基础地址
async fn serve_once(status_line: &'static str, body: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("绑定本地端口失败");
    let addr = listener.local_addr().expect("获取本地地址失败");
    tokio::spawn(async move {
        if let Ok((mut stream, _)) = listener.accept().await {
            let mut buf = [0u8; 1024];
            let _ = stream.read(&mut buf).await;
            let response = format!(
                "HTTP/1.1 {}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{}",
                status_line,
                body.len(),
                body
            );
            let _ = stream.write_all(response.as_bytes()).await;
        }
    });
    format!("http://{}", addr)
}

#[test]
fn test_api_client_creation() {
    let client = ApiClient::new(ApiConfig::with_base_url("http://127.0.0.1:8080/api/v1"));
    assert!(client.is_ok());
    assert_eq!(
        client.unwrap().base_url(),
        "http://127.0.0.1:8080/api/v1"
    );
}

#[test]
fn test_config_fallback_on_invalid_url() {
    let config = ApiConfig::with_base_url("::: 不是 URL :::");
    assert_eq!(config.base_url, "http://localhost:8080/api/v1");
}

#[tokio::test]
async fn test_latest_execution_treats_404_as_absence() {
    let base = serve_once(
        "404 Not Found",
        r#"{"timestamp":"2024-06-01T08:30:00Z","status":404,"error":"NOT_FOUND","message":"该片段尚未执行过","path":"/api/v1/executions/snippet/1/latest"}"#,
    )
    .await;
    let client = ApiClient::new(ApiConfig::with_base_url(base.as_str())).expect("创建客户端失败");

    let latest = client
        .get_latest_execution(1)
        .await
        .expect("404 应视为正常缺失");
    assert!(latest.is_none());
}

#[tokio::test]
async fn test_latest_execution_other_failure_is_status_error() {
    let base = serve_once(
        "500 Internal Server Error",
        r#"{"timestamp":"2024-06-01T08:30:00Z","status":500,"error":"INTERNAL_ERROR","message":"服务内部错误","path":"/api/v1/executions/snippet/1/latest"}"#,
    )
    .await;
    let client = ApiClient::new(ApiConfig::with_base_url(base.as_str())).expect("创建客户端失败");

    let err = client
        .get_latest_execution(1)
        .await
        .expect_err("非 404 的失败应报错");
    match err {
        ApiClientError::Status {
            status,
            message,
            body,
        } => {
            assert_eq!(status, 500);
            assert_eq!(message, "服务内部错误");
            assert_eq!(body.expect("应保留错误信封").error, "INTERNAL_ERROR");
        }
        other => panic!("应为状态错误，实际是 {:?}", other),
    }
}

#[test]
fn test_snippet_request_serialization() {
    let request = SnippetRequest {
        title: "冒泡排序".to_string(),
        code: "console.log(1);".to_string(),
        language: Language::Javascript,
        author_name: "张三".to_string(),
    };

    let json = serde_json::to_string(&request).unwrap();
    assert!(json.contains("\"title\""));
    assert!(json.contains("冒泡排序"));
    assert!(json.contains("\"language\":\"JAVASCRIPT\""));
    assert!(json.contains("\"authorName\""));
}

#[test]
fn test_execution_request_skips_none_fields() {
    let request = ExecutionRequest {
        code_snippet_id: 42,
        custom_code: None,
        input: None,
        timeout_seconds: Some(10),
    };

    let json = serde_json::to_string(&request).unwrap();
    assert!(json.contains("\"codeSnippetId\":42"));
    assert!(json.contains("\"timeoutSeconds\":10"));
    assert!(!json.contains("customCode"));
    assert!(!json.contains("\"input\""));
}

#[test]
fn test_share_request_permanent_omits_expiration() {
    let request = ShareRequest {
        code_snippet_id: 7,
        expiration_days: None,
    };

    let json = serde_json::to_string(&request).unwrap();
    assert!(json.contains("\"codeSnippetId\":7"));
    assert!(!json.contains("expirationDays"));
}

#[test]
fn test_snippet_deserialization() {
    let json = r#"{
        "id": 1,
        "title": "Hello",
        "code": "print(\"Hello, World!\")",
        "language": "PYTHON",
        "authorName": "李四",
        "isActive": true,
        "createdAt": "2024-06-01T08:30:00Z",
        "updatedAt": "2024-06-02T09:00:00Z",
        "executionCount": 3,
        "shareCount": 1
    }"#;

    let snippet: Snippet = serde_json::from_str(json).unwrap();
    assert_eq!(snippet.id, 1);
    assert_eq!(snippet.language, Language::Python);
    assert_eq!(snippet.author_name, "李四");
    assert_eq!(snippet.execution_count, 3);
}

#[test]
fn test_execution_result_deserialization() {
    let json = r#"{
        "id": 5,
        "codeSnippetId": 1,
        "status": "TIMEOUT",
        "errorMessage": "执行超时",
        "executionTime": 10000,
        "createdAt": "2024-06-01T08:30:00Z"
    }"#;

    let result: ExecutionResult = serde_json::from_str(json).unwrap();
    assert_eq!(result.status, ExecutionStatus::Timeout);
    assert!(result.output.is_none());
    assert!(result.memory_usage.is_none());
    assert_eq!(result.execution_time, 10_000);
}

#[test]
fn test_share_info_deserialization_with_embedded_snapshot() {
    let json = r#"{
        "id": 9,
        "codeSnippetId": 1,
        "shareId": "tok-abc123",
        "shareUrl": "https://play.example.com/shared/tok-abc123",
        "expiresAt": "2024-06-08T08:30:00Z",
        "isActive": true,
        "createdAt": "2024-06-01T08:30:00Z",
        "codeSnippet": {
            "id": 1,
            "title": "Hello",
            "code": "console.log(\"Hello, World!\");",
            "language": "JAVASCRIPT",
            "authorName": "王五",
            "isActive": true,
            "createdAt": "2024-06-01T08:00:00Z",
            "updatedAt": "2024-06-01T08:00:00Z",
            "executionCount": 0,
            "shareCount": 1
        }
    }"#;

    let share: ShareInfo = serde_json::from_str(json).unwrap();
    assert_eq!(share.share_id, "tok-abc123");
    assert!(share.expires_at.is_some());
    assert_eq!(share.code_snippet.language, Language::Javascript);
}

#[test]
fn test_page_response_deserialization() {
    let json = r#"{
        "content": [],
        "page": 0,
        "size": 50,
        "totalElements": 0,
        "totalPages": 0,
        "first": true,
        "last": true
    }"#;

    let page: PageResponse<Snippet> = serde_json::from_str(json).unwrap();
    assert!(page.content.is_empty());
    assert_eq!(page.size, 50);
    assert!(page.first && page.last);
}

#[test]
fn test_execution_status_tags() {
    for (status, tag) in [
        (ExecutionStatus::Success, "SUCCESS"),
        (ExecutionStatus::Error, "ERROR"),
        (ExecutionStatus::Timeout, "TIMEOUT"),
    ] {
        assert_eq!(status.tag(), tag);
        assert_eq!(
            serde_json::to_string(&status).unwrap(),
            format!("\"{}\"", tag)
        );
    }
}
