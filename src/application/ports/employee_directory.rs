//! Employee Directory Port - 上游员工目录 API 抽象
//!
//! 定义访问第三方员工目录的接口，具体实现在 infrastructure/adapters 层

use async_trait::async_trait;
use http::StatusCode;
use serde_json::Value;
use thiserror::Error;

use crate::domain::employee::Employee;

/// 上游调用错误
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UpstreamError {
    /// 上游返回了错误状态码
    #[error("Upstream responded with {0}")]
    Status(StatusCode),

    /// 连接失败、超时或响应无法解析
    #[error("Transport error: {0}")]
    Transport(String),
}

impl UpstreamError {
    /// 对外映射的状态码：有上游状态码则透传，否则为 500
    pub fn status_code(&self) -> StatusCode {
        match self {
            UpstreamError::Status(status) => *status,
            UpstreamError::Transport(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// 上游响应信封
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpstreamEnvelope {
    pub employees: Vec<Employee>,
    pub status: StatusCode,
}

impl UpstreamEnvelope {
    /// 成功信封
    pub fn ok(employees: Vec<Employee>) -> Self {
        Self {
            employees,
            status: StatusCode::OK,
        }
    }

    /// 不带数据的信封
    pub fn with_status(status: StatusCode) -> Self {
        Self {
            employees: Vec::new(),
            status,
        }
    }

    pub fn is_ok(&self) -> bool {
        self.status == StatusCode::OK
    }
}

/// Employee Directory Port
///
/// `path` 为相对于上游 base URL 的路径，例如 `/employees`
#[async_trait]
pub trait EmployeeDirectoryPort: Send + Sync {
    async fn get(&self, path: &str) -> Result<UpstreamEnvelope, UpstreamError>;

    async fn post(&self, path: &str, body: &Value) -> Result<UpstreamEnvelope, UpstreamError>;

    async fn delete(&self, path: &str) -> Result<UpstreamEnvelope, UpstreamError>;
}
