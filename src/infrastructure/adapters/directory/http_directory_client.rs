//! HTTP Directory Client - 调用第三方员工目录 REST API
//!
//! 实现 EmployeeDirectoryPort trait
//!
//! 上游 API:
//! GET    {base}/employees
//! GET    {base}/employee/{id}
//! POST   {base}/create        (JSON)
//! DELETE {base}/delete/{id}
//! Response: {"status": "success", "data": [...] | {...} | null}

use async_trait::async_trait;
use http::StatusCode;
use reqwest::{Client, RequestBuilder};
use serde::Deserialize;
use serde_json::Value;
use std::time::Duration;

use crate::application::ports::{EmployeeDirectoryPort, UpstreamEnvelope, UpstreamError};
use crate::domain::employee::Employee;

/// 上游响应体
#[derive(Debug, Deserialize)]
struct EnvelopeBody {
    #[serde(default)]
    status: Value,
    #[serde(default)]
    data: Value,
}

impl EnvelopeBody {
    fn into_envelope(self) -> Result<UpstreamEnvelope, serde_json::Error> {
        let status = status_from_token(&self.status);
        if status != StatusCode::OK {
            return Ok(UpstreamEnvelope::with_status(status));
        }

        // data 可能是列表、单个对象，删除接口返回的则是 ID 字符串
        let employees = match self.data {
            Value::Array(items) => items
                .into_iter()
                .map(serde_json::from_value)
                .collect::<Result<Vec<Employee>, _>>()?,
            item @ Value::Object(_) => vec![serde_json::from_value(item)?],
            _ => Vec::new(),
        };

        Ok(UpstreamEnvelope { employees, status })
    }
}

/// 把上游的状态标记转换为状态码
///
/// - "success" / "ok"（忽略大小写）→ 200
/// - 数字或数字字符串 → 对应状态码
/// - 其他 → 502
fn status_from_token(token: &Value) -> StatusCode {
    let code = match token {
        Value::String(s) if s.eq_ignore_ascii_case("success") || s.eq_ignore_ascii_case("ok") => {
            return StatusCode::OK;
        }
        Value::String(s) => s.trim().parse::<u16>().ok(),
        Value::Number(n) => n.as_u64().and_then(|c| u16::try_from(c).ok()),
        _ => None,
    };

    code.and_then(|c| StatusCode::from_u16(c).ok())
        .unwrap_or(StatusCode::BAD_GATEWAY)
}

/// HTTP 目录客户端配置
#[derive(Debug, Clone)]
pub struct HttpDirectoryClientConfig {
    /// 上游 API 基础 URL
    pub base_url: String,
    /// 请求超时时间（秒）
    pub timeout_secs: u64,
    /// 建立连接超时时间（秒）
    pub connect_timeout_secs: u64,
}

impl Default for HttpDirectoryClientConfig {
    fn default() -> Self {
        Self {
            base_url: "https://dummy.restapiexample.com/api/v1".to_string(),
            timeout_secs: 30,
            connect_timeout_secs: 10,
        }
    }
}

impl HttpDirectoryClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    pub fn with_connect_timeout(mut self, secs: u64) -> Self {
        self.connect_timeout_secs = secs;
        self
    }
}

/// HTTP 目录客户端
///
/// 内部的 reqwest `Client` 自带连接池，可在并发请求间共享
pub struct HttpDirectoryClient {
    client: Client,
    config: HttpDirectoryClientConfig,
}

impl HttpDirectoryClient {
    /// 创建新的 HTTP 目录客户端
    pub fn new(config: HttpDirectoryClientConfig) -> Result<Self, UpstreamError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .build()
            .map_err(|e| UpstreamError::Transport(e.to_string()))?;

        Ok(Self { client, config })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url.trim_end_matches('/'), path)
    }

    async fn execute(
        &self,
        request: RequestBuilder,
        url: &str,
    ) -> Result<UpstreamEnvelope, UpstreamError> {
        let response = request.send().await.map_err(|e| {
            if e.is_timeout() {
                UpstreamError::Transport(format!("Request to {} timed out", url))
            } else if e.is_connect() {
                UpstreamError::Transport(format!("Cannot connect to upstream: {}", e))
            } else {
                UpstreamError::Transport(e.to_string())
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(url = %url, status = %status, "Upstream returned error status");
            return Err(UpstreamError::Status(status));
        }

        let body: EnvelopeBody = response
            .json()
            .await
            .map_err(|e| UpstreamError::Transport(format!("Invalid upstream response: {}", e)))?;

        let envelope = body
            .into_envelope()
            .map_err(|e| UpstreamError::Transport(format!("Invalid employee data: {}", e)))?;

        tracing::debug!(
            url = %url,
            status = %envelope.status,
            count = envelope.employees.len(),
            "Upstream request completed"
        );

        Ok(envelope)
    }
}

#[async_trait]
impl EmployeeDirectoryPort for HttpDirectoryClient {
    async fn get(&self, path: &str) -> Result<UpstreamEnvelope, UpstreamError> {
        let url = self.url(path);
        tracing::debug!(url = %url, "Sending GET to upstream");
        self.execute(self.client.get(&url), &url).await
    }

    async fn post(&self, path: &str, body: &Value) -> Result<UpstreamEnvelope, UpstreamError> {
        let url = self.url(path);
        tracing::debug!(url = %url, "Sending POST to upstream");
        self.execute(self.client.post(&url).json(body), &url).await
    }

    async fn delete(&self, path: &str) -> Result<UpstreamEnvelope, UpstreamError> {
        let url = self.url(path);
        tracing::debug!(url = %url, "Sending DELETE to upstream");
        self.execute(self.client.delete(&url), &url).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        extract::Path,
        routing::{delete, get, post},
        Json, Router,
    };
    use serde_json::json;
    use tokio::net::TcpListener;

    /// 在随机端口上启动一个模拟上游
    async fn spawn_upstream() -> String {
        let app = Router::new()
            .route(
                "/employees",
                get(|| async {
                    Json(json!({
                        "status": "success",
                        "data": [
                            {"id": 1, "employee_name": "Tiger Nixon", "employee_salary": 320800, "employee_age": 61, "profile_image": ""},
                            {"id": 2, "employee_name": "Garrett Winters", "employee_salary": 170750, "employee_age": 63, "profile_image": ""}
                        ]
                    }))
                }),
            )
            .route(
                "/employee/:id",
                get(|Path(id): Path<u32>| async move {
                    match id {
                        1 => Json(json!({
                            "status": "success",
                            "data": {"id": 1, "employee_name": "Tiger Nixon", "employee_salary": 320800, "employee_age": 61, "profile_image": ""}
                        })),
                        2 => Json(json!({"status": "error", "message": "not found"})),
                        _ => Json(json!({"status": "success", "data": {"id": "x", "employee_name": []}})),
                    }
                }),
            )
            .route(
                "/create",
                post(|Json(body): Json<Value>| async move {
                    Json(json!({
                        "status": "success",
                        "data": {"name": body["name"], "salary": body["salary"], "age": body["age"], "id": 25}
                    }))
                }),
            )
            .route(
                "/delete/:id",
                delete(|Path(id): Path<String>| async move {
                    Json(json!({"status": "success", "data": id, "message": "Successfully! Record has been deleted"}))
                }),
            )
            .route(
                "/limited",
                get(|| async { (StatusCode::TOO_MANY_REQUESTS, "Too Many Attempts.") }),
            )
            .route("/garbage", get(|| async { "<html>not json</html>" }));

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        format!("http://{}/", addr)
    }

    async fn client() -> HttpDirectoryClient {
        let base_url = spawn_upstream().await;
        HttpDirectoryClient::new(HttpDirectoryClientConfig::new(base_url).with_timeout(5)).unwrap()
    }

    #[test]
    fn test_config_default() {
        let config = HttpDirectoryClientConfig::default();
        assert_eq!(config.base_url, "https://dummy.restapiexample.com/api/v1");
        assert_eq!(config.timeout_secs, 30);
        assert_eq!(config.connect_timeout_secs, 10);
    }

    #[test]
    fn test_config_builder() {
        let config = HttpDirectoryClientConfig::new("http://localhost:3000/api/v1")
            .with_timeout(5)
            .with_connect_timeout(2);
        assert_eq!(config.base_url, "http://localhost:3000/api/v1");
        assert_eq!(config.timeout_secs, 5);
        assert_eq!(config.connect_timeout_secs, 2);
    }

    #[test]
    fn test_status_from_token() {
        assert_eq!(status_from_token(&json!("success")), StatusCode::OK);
        assert_eq!(status_from_token(&json!("OK")), StatusCode::OK);
        assert_eq!(status_from_token(&json!("404")), StatusCode::NOT_FOUND);
        assert_eq!(status_from_token(&json!(503)), StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(status_from_token(&json!("error")), StatusCode::BAD_GATEWAY);
        assert_eq!(status_from_token(&Value::Null), StatusCode::BAD_GATEWAY);
        assert_eq!(status_from_token(&json!(70000)), StatusCode::BAD_GATEWAY);
    }

    #[tokio::test]
    async fn test_get_list() {
        let envelope = client().await.get("/employees").await.unwrap();

        assert!(envelope.is_ok());
        assert_eq!(envelope.employees.len(), 2);
        assert_eq!(envelope.employees[0].name, "Tiger Nixon");
        assert_eq!(envelope.employees[1].salary, "170750");
    }

    #[tokio::test]
    async fn test_get_single_object() {
        let envelope = client().await.get("/employee/1").await.unwrap();

        assert!(envelope.is_ok());
        assert_eq!(envelope.employees.len(), 1);
        assert_eq!(envelope.employees[0].id, "1");
    }

    #[tokio::test]
    async fn test_failed_envelope_status() {
        let envelope = client().await.get("/employee/2").await.unwrap();

        assert!(!envelope.is_ok());
        assert_eq!(envelope.status, StatusCode::BAD_GATEWAY);
        assert!(envelope.employees.is_empty());
    }

    #[tokio::test]
    async fn test_malformed_employee_is_transport_error() {
        let err = client().await.get("/employee/3").await.unwrap_err();
        assert!(matches!(err, UpstreamError::Transport(_)));
    }

    #[tokio::test]
    async fn test_post_forwards_body() {
        let body = json!({"name": "Mr Test", "salary": "50000", "age": "30"});
        let envelope = client().await.post("/create", &body).await.unwrap();

        assert!(envelope.is_ok());
        assert_eq!(envelope.employees[0].name, "Mr Test");
        assert_eq!(envelope.employees[0].id, "25");
    }

    #[tokio::test]
    async fn test_delete_with_scalar_data() {
        let envelope = client().await.delete("/delete/2").await.unwrap();

        assert!(envelope.is_ok());
        assert!(envelope.employees.is_empty());
    }

    #[tokio::test]
    async fn test_error_status_is_status_error() {
        let err = client().await.get("/limited").await.unwrap_err();
        assert_eq!(err, UpstreamError::Status(StatusCode::TOO_MANY_REQUESTS));
    }

    #[tokio::test]
    async fn test_unknown_route_is_status_error() {
        let err = client().await.get("/nowhere").await.unwrap_err();
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_non_json_body_is_transport_error() {
        let err = client().await.get("/garbage").await.unwrap_err();
        assert!(matches!(err, UpstreamError::Transport(_)));
    }

    #[tokio::test]
    async fn test_connection_refused_is_transport_error() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client =
            HttpDirectoryClient::new(HttpDirectoryClientConfig::new(format!("http://{}", addr)))
                .unwrap();
        let err = client.get("/employees").await.unwrap_err();

        assert!(matches!(err, UpstreamError::Transport(_)));
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
