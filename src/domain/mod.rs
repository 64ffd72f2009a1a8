//! Domain Layer - 领域层
//!
//! 只有一个限界上下文:
//! - Ingestion Context: 请求体摄取

pub mod ingestion;
