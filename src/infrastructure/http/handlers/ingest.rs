//! Ingest HTTP Handler

use axum::{
    body::Body,
    extract::State,
    http::{header, HeaderMap, StatusCode},
};
use std::sync::Arc;

use crate::application::IngestBody;
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// 摄取请求体
///
/// 成功返回 204，无响应体
pub async fn ingest(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    body: Body,
) -> Result<StatusCode, ApiError> {
    let declared_length = headers
        .get(header::CONTENT_LENGTH)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.trim().parse::<u64>().ok());

    state
        .ingest_handler
        .handle(IngestBody::new(declared_length, body.into_data_stream()))
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
