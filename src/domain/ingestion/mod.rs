//! Ingestion Context - 请求体摄取上下文
//!
//! 职责:
//! - 请求体大小上限
//! - 字节数 / 耗时的可读格式
//! - 摄取回执

mod errors;
mod value_objects;

pub use errors::IngestionError;
pub use value_objects::{BodyLimit, ByteSize, Elapsed, IngestReceipt};
