//! Command Handlers 实现

mod ingest_handlers;

pub use ingest_handlers::*;
