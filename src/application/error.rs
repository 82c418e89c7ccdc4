//! 应用层错误定义
//!
//! 统一的查询/命令错误类型，每个变体对应一个对外状态码

use http::StatusCode;
use thiserror::Error;

use crate::application::ports::UpstreamError;
use crate::domain::employee::EmployeeError;

/// 应用层错误
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ApplicationError {
    /// 客户端输入未通过校验，不会触达上游
    #[error("{0}")]
    InvalidInput(String),

    /// 上游无数据或资源不存在
    #[error("{0}")]
    NotFound(String),

    /// 上游返回失败状态或调用失败
    #[error("{message}")]
    Upstream { status: StatusCode, message: String },

    /// 上游数据中的数值字段无法解析
    #[error("Parse error: {0}")]
    Parse(String),
}

impl ApplicationError {
    /// 创建验证错误
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    /// 创建 NotFound 错误
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    /// 创建上游错误，状态码按 [`failure_status`] 归一化
    pub fn upstream(status: StatusCode, message: impl Into<String>) -> Self {
        Self::Upstream {
            status: failure_status(status),
            message: message.into(),
        }
    }

    /// 对外状态码
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApplicationError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            ApplicationError::NotFound(_) => StatusCode::NOT_FOUND,
            ApplicationError::Upstream { status, .. } => *status,
            ApplicationError::Parse(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// 失败时对外使用的状态码
///
/// 上游给出 4xx/5xx 时透传，其余（包括非 OK 的 2xx/3xx）一律视为 500
pub fn failure_status(status: StatusCode) -> StatusCode {
    if status.is_client_error() || status.is_server_error() {
        status
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    }
}

impl From<EmployeeError> for ApplicationError {
    fn from(err: EmployeeError) -> Self {
        match err {
            EmployeeError::InvalidId(_) | EmployeeError::InvalidInput(_) => {
                Self::InvalidInput(err.to_string())
            }
            EmployeeError::InvalidSalary { .. } => Self::Parse(err.to_string()),
        }
    }
}

impl From<UpstreamError> for ApplicationError {
    fn from(err: UpstreamError) -> Self {
        Self::upstream(err.status_code(), err.to_string())
    }
}
