//! 应用层 - 命令（写操作）

mod ingest_commands;

pub mod handlers;

pub use ingest_commands::*;
