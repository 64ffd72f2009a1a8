//! HTTP Routes
//!
//! API Endpoints:
//! - /    POST  摄取请求体，写入临时文件后丢弃，返回 204
//!
//! 其他路径返回 404，`/` 上的其他方法返回 405

use axum::{routing::post, Router};
use std::sync::Arc;

use super::handlers;
use super::state::AppState;

/// 创建所有路由
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new().route("/", post(handlers::ingest))
}
