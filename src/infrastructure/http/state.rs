//! Application State
//!
//! 只读，按 Arc 在所有请求间共享

use std::sync::Arc;
use std::time::Duration;

use crate::application::{IngestBodyHandler, SpoolPort};
use crate::domain::ingestion::BodyLimit;

/// 应用状态
pub struct AppState {
    pub ingest_handler: IngestBodyHandler,
}

impl AppState {
    /// 创建应用状态
    pub fn new(spool_port: Arc<dyn SpoolPort>, limit: BodyLimit, read_timeout: Duration) -> Self {
        Self {
            ingest_handler: IngestBodyHandler::new(spool_port, limit, read_timeout),
        }
    }
}
