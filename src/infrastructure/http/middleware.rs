//! HTTP Middleware
//!
//! 错误状态码日志中间件

use axum::{extract::Request, middleware::Next, response::Response};
use std::time::Instant;

use crate::domain::ingestion::Elapsed;

/// 错误状态码日志中间件
///
/// 4xx 记为 warn，5xx 记为 error。摄取失败的具体原因在
/// `ApiError::into_response()` 中记录，这里只补充请求行和耗时
pub async fn error_logging_middleware(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();
    let start_time = Instant::now();

    let response = next.run(request).await;
    let status = response.status();

    if status.is_server_error() {
        tracing::error!(
            method = %method,
            uri = %uri,
            status = %status.as_u16(),
            elapsed = %Elapsed::new(start_time.elapsed()),
            "HTTP server error"
        );
    } else if status.is_client_error() {
        tracing::warn!(
            method = %method,
            uri = %uri,
            status = %status.as_u16(),
            elapsed = %Elapsed::new(start_time.elapsed()),
            "HTTP client error"
        );
    }

    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ingestion::BodyLimit;
    use crate::infrastructure::adapters::TempFileSpooler;
    use crate::infrastructure::http::routes::create_routes;
    use crate::infrastructure::http::state::AppState;
    use axum::{
        body::Body,
        http::{Method, Request as HttpRequest, StatusCode},
        Router,
    };
    use std::sync::Arc;
    use std::time::Duration;
    use tower::util::ServiceExt;

    fn create_test_router(limit: u64) -> Router {
        let state = AppState::new(
            Arc::new(TempFileSpooler::system()),
            BodyLimit::new(limit).unwrap(),
            Duration::from_secs(5),
        );
        create_routes()
            .layer(axum::middleware::from_fn(error_logging_middleware))
            .with_state(Arc::new(state))
    }

    #[tokio::test]
    async fn test_success_passes_through() {
        let app = create_test_router(1024);
        let request = HttpRequest::builder()
            .method(Method::POST)
            .uri("/")
            .body(Body::from("ok"))
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::NO_CONTENT);
    }

    #[tokio::test]
    async fn test_client_error_passes_through() {
        let app = create_test_router(1024);
        let request = HttpRequest::builder()
            .method(Method::GET)
            .uri("/missing")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_rejected_payload_passes_through() {
        let app = create_test_router(1);
        let request = HttpRequest::builder()
            .method(Method::POST)
            .uri("/")
            .header(http::header::CONTENT_LENGTH, "2")
            .body(Body::from("no"))
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
    }
}
