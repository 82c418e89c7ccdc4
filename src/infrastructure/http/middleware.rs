//! HTTP Middleware
//!
//! 按状态码记录失败请求的日志

use axum::{extract::Request, middleware::Next, response::Response};
use std::time::{Duration, Instant};

/// 失败请求日志中间件
///
/// 5xx 记为 error，4xx 记为 warn，成功请求不记录（由 TraceLayer 负责）
pub async fn error_logging_middleware(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();
    let started = Instant::now();

    let response = next.run(request).await;
    let status = response.status();
    let elapsed_ms = millis(started.elapsed());

    if status.is_server_error() {
        tracing::error!(
            method = %method,
            uri = %uri,
            status = status.as_u16(),
            elapsed_ms,
            "Request failed"
        );
    } else if status.is_client_error() {
        tracing::warn!(
            method = %method,
            uri = %uri,
            status = status.as_u16(),
            elapsed_ms,
            "Request rejected"
        );
    }

    response
}

/// 毫秒数，超出 u64 时取上限
fn millis(elapsed: Duration) -> u64 {
    u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request as HttpRequest, StatusCode},
        routing::get,
        Router,
    };
    use tower::util::ServiceExt;

    use crate::application::ApplicationError;
    use crate::infrastructure::http::ApiError;

    async fn upstream_down() -> Result<&'static str, ApiError> {
        Err(ApplicationError::upstream(StatusCode::SERVICE_UNAVAILABLE, "down").into())
    }

    async fn bad_id() -> Result<&'static str, ApiError> {
        Err(ApplicationError::invalid_input("Invalid employee ID").into())
    }

    fn router() -> Router {
        Router::new()
            .route("/ok", get(|| async { "OK" }))
            .route("/bad", get(bad_id))
            .route("/down", get(upstream_down))
            .layer(axum::middleware::from_fn(error_logging_middleware))
    }

    async fn status_of(uri: &str) -> StatusCode {
        let request = HttpRequest::builder().uri(uri).body(Body::empty()).unwrap();
        router().oneshot(request).await.unwrap().status()
    }

    #[tokio::test]
    async fn test_passes_responses_through() {
        assert_eq!(status_of("/ok").await, StatusCode::OK);
        assert_eq!(status_of("/bad").await, StatusCode::BAD_REQUEST);
        assert_eq!(status_of("/down").await, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(status_of("/missing").await, StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_millis_saturates() {
        assert_eq!(millis(Duration::from_millis(1500)), 1500);
        assert_eq!(millis(Duration::MAX), u64::MAX);
    }
}
