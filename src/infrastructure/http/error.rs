//! HTTP Error Handling
//!
//! 应用层错误到 HTTP 状态码的映射；错误响应不带响应体

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::application::ApplicationError;

/// API 错误
#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    NotFound(String),
    Upstream { status: StatusCode, message: String },
    Internal(String),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Upstream { status, .. } => *status,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        match &self {
            ApiError::BadRequest(msg) => {
                tracing::warn!(status = status.as_u16(), error = %msg, "Bad request");
            }
            ApiError::NotFound(msg) => {
                tracing::warn!(status = status.as_u16(), error = %msg, "Resource not found");
            }
            ApiError::Upstream { message, .. } => {
                tracing::error!(status = status.as_u16(), error = %message, "Upstream failure");
            }
            ApiError::Internal(msg) => {
                tracing::error!(status = status.as_u16(), error = %msg, "Internal server error");
            }
        }

        status.into_response()
    }
}

impl From<ApplicationError> for ApiError {
    fn from(e: ApplicationError) -> Self {
        match e {
            ApplicationError::InvalidInput(msg) => ApiError::BadRequest(msg),
            ApplicationError::NotFound(msg) => ApiError::NotFound(msg),
            ApplicationError::Upstream { status, message } => {
                ApiError::Upstream { status, message }
            }
            ApplicationError::Parse(msg) => ApiError::Internal(msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_application_error_mapping() {
        let cases = [
            (ApplicationError::invalid_input("bad"), StatusCode::BAD_REQUEST),
            (ApplicationError::not_found("none"), StatusCode::NOT_FOUND),
            (
                ApplicationError::upstream(StatusCode::TOO_MANY_REQUESTS, "slow down"),
                StatusCode::TOO_MANY_REQUESTS,
            ),
            (ApplicationError::Parse("x".into()), StatusCode::INTERNAL_SERVER_ERROR),
        ];

        for (app_err, expected) in cases {
            let response = ApiError::from(app_err).into_response();
            assert_eq!(response.status(), expected);
        }
    }
}
