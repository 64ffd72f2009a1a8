//! 应用层 - 用例编排
//!
//! 包含：
//! - ports: 出站端口定义（Spool）
//! - commands: 摄取命令及处理器
//! - error: 应用层错误定义

pub mod commands;
pub mod error;
pub mod ports;

// Re-exports
pub use commands::{handlers::IngestBodyHandler, IngestBody};

pub use error::ApplicationError;

pub use ports::{Spool, SpoolError, SpoolPort};
