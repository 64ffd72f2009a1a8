//! Spool Port - 出站端口
//!
//! 每个请求体对应一个临时落盘位置（spool），请求结束后必须释放

use async_trait::async_trait;
use std::path::Path;
use thiserror::Error;
use tokio::io::AsyncWrite;

/// Spool 错误
#[derive(Debug, Error)]
pub enum SpoolError {
    #[error("Failed to create spool: {0}")]
    CreateFailed(String),

    #[error("Failed to write spool: {0}")]
    WriteFailed(String),

    #[error("Failed to remove spool: {0}")]
    RemoveFailed(String),
}

/// 单个请求独占的临时写入目标
///
/// 实现必须保证 drop 时释放底层存储（取消、错误路径依赖这一点）。
/// 正常路径调用 [`Spool::discard`]，以便删除失败能被记录。
#[async_trait]
pub trait Spool: AsyncWrite + Send + Unpin {
    /// 底层文件路径（非文件实现返回 None）
    fn location(&self) -> Option<&Path>;

    /// 关闭并删除，不得阻塞运行时线程
    async fn discard(self: Box<Self>) -> Result<(), SpoolError>;
}

/// Spool Port - 出站端口
#[async_trait]
pub trait SpoolPort: Send + Sync {
    /// 创建一个全新的、名称唯一的 spool
    async fn create(&self) -> Result<Box<dyn Spool>, SpoolError>;
}
