//! HTTP Handlers

mod ingest;

pub use ingest::*;
