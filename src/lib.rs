//! Ingest - 最小化 HTTP 请求体摄取服务
//!
//! 接收 `POST /` 的请求体，逐块写入一个临时文件，随后删除并返回 204。
//!
//! 领域层 (domain/):
//! - Ingestion Context: 请求体上限、字节数/耗时格式化、摄取回执
//!
//! 应用层 (application/):
//! - Ports: SpoolPort（每个请求独占的临时写入目标）
//! - Commands: IngestBody 及其处理器
//!
//! 基础设施层 (infrastructure/):
//! - HTTP: Axum 路由、错误映射、日志中间件
//! - Adapters: 基于 tempfile 的 Spool 实现

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;
