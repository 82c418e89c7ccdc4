//! Fake Directory Client - 用于测试的目录客户端
//!
//! 返回预设的信封或错误，并记录收到的每个请求，不访问网络

use async_trait::async_trait;
use serde_json::Value;
use std::sync::Mutex;

use crate::application::ports::{EmployeeDirectoryPort, UpstreamEnvelope, UpstreamError};

/// 被记录的上游请求
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedRequest {
    pub method: &'static str,
    pub path: String,
    pub body: Option<Value>,
}

/// Fake Directory Client
///
/// 未设置的方法返回空的成功信封
pub struct FakeDirectoryClient {
    get_result: Result<UpstreamEnvelope, UpstreamError>,
    post_result: Result<UpstreamEnvelope, UpstreamError>,
    delete_result: Result<UpstreamEnvelope, UpstreamError>,
    requests: Mutex<Vec<RecordedRequest>>,
}

impl Default for FakeDirectoryClient {
    fn default() -> Self {
        Self {
            get_result: Ok(UpstreamEnvelope::ok(Vec::new())),
            post_result: Ok(UpstreamEnvelope::ok(Vec::new())),
            delete_result: Ok(UpstreamEnvelope::ok(Vec::new())),
            requests: Mutex::new(Vec::new()),
        }
    }
}

impl FakeDirectoryClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_get(mut self, result: Result<UpstreamEnvelope, UpstreamError>) -> Self {
        self.get_result = result;
        self
    }

    pub fn with_post(mut self, result: Result<UpstreamEnvelope, UpstreamError>) -> Self {
        self.post_result = result;
        self
    }

    pub fn with_delete(mut self, result: Result<UpstreamEnvelope, UpstreamError>) -> Self {
        self.delete_result = result;
        self
    }

    /// 已收到的请求（按时间顺序）
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .len()
    }

    fn record(&self, method: &'static str, path: &str, body: Option<Value>) {
        tracing::debug!(method, path, "FakeDirectoryClient: returning canned response");
        self.requests
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(RecordedRequest {
                method,
                path: path.to_string(),
                body,
            });
    }
}

#[async_trait]
impl EmployeeDirectoryPort for FakeDirectoryClient {
    async fn get(&self, path: &str) -> Result<UpstreamEnvelope, UpstreamError> {
        self.record("GET", path, None);
        self.get_result.clone()
    }

    async fn post(&self, path: &str, body: &Value) -> Result<UpstreamEnvelope, UpstreamError> {
        self.record("POST", path, Some(body.clone()));
        self.post_result.clone()
    }

    async fn delete(&self, path: &str) -> Result<UpstreamEnvelope, UpstreamError> {
        self.record("DELETE", path, None);
        self.delete_result.clone()
    }
}
