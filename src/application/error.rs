//! 应用层错误定义

use std::time::Duration;
use thiserror::Error;

use crate::application::ports::SpoolError;
use crate::domain::ingestion::IngestionError;

/// 应用层错误
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// 领域规则违反（如超出大小上限）
    #[error(transparent)]
    Domain(#[from] IngestionError),

    /// 读取请求体失败（客户端断开、传输编码错误等）
    #[error("Failed to read request body: {0}")]
    BodyRead(String),

    /// 两次数据块之间等待超时
    #[error("No body data received within {0:?}")]
    ReadTimeout(Duration),

    /// 临时文件错误
    #[error(transparent)]
    Spool(#[from] SpoolError),
}

impl ApplicationError {
    /// 创建请求体读取错误
    pub fn body_read(message: impl Into<String>) -> Self {
        Self::BodyRead(message.into())
    }
}
