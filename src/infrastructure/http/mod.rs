//! HTTP Layer - 单路由摄取接口

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod server;
pub mod state;

pub use error::ApiError;
pub use routes::create_routes;
pub use server::{BoundHttpServer, HttpServer, ServerConfig};
pub use state::AppState;
