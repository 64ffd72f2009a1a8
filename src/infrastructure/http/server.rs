//! HTTP Server
//!
//! Axum HTTP 服务器启动和配置

use std::io;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::middleware;
use axum::Router;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

use super::middleware::error_logging_middleware;
use super::routes::create_routes;
use super::state::AppState;

/// 服务器配置
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub interface: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            interface: "0.0.0.0".to_string(),
            port: 5003,
        }
    }
}

impl ServerConfig {
    pub fn new(interface: impl Into<String>, port: u16) -> Self {
        Self {
            interface: interface.into(),
            port,
        }
    }

    /// 仅用于日志；绑定时使用 (interface, port) 以支持 IPv6
    pub fn addr(&self) -> String {
        format!("{}:{}", self.interface, self.port)
    }
}

/// HTTP 服务器
pub struct HttpServer {
    config: ServerConfig,
    state: Arc<AppState>,
}

impl HttpServer {
    /// 创建新的 HTTP 服务器
    pub fn new(config: ServerConfig, state: AppState) -> Self {
        Self {
            config,
            state: Arc::new(state),
        }
    }

    /// 构建 Router
    fn build_router(&self) -> Router {
        create_routes()
            .layer(middleware::from_fn(error_logging_middleware))
            .layer(TraceLayer::new_for_http())
            .with_state(self.state.clone())
    }

    /// 绑定监听端口，失败直接返回错误（不重试）
    pub async fn bind(self) -> Result<BoundHttpServer, io::Error> {
        let router = self.build_router();
        let addr = self.config.addr();

        let listener = TcpListener::bind((self.config.interface.as_str(), self.config.port))
            .await
            .map_err(|e| io::Error::new(e.kind(), format!("could not bind {}: {}", addr, e)))?;

        info!("listening on {}", listener.local_addr()?);

        Ok(BoundHttpServer { listener, router })
    }

    /// 启动服务器
    pub async fn run(self) -> Result<(), io::Error> {
        self.bind().await?.serve().await
    }
}

/// 已绑定端口、尚未开始处理请求的服务器
pub struct BoundHttpServer {
    listener: TcpListener,
    router: Router,
}

impl BoundHttpServer {
    pub fn local_addr(&self) -> Result<SocketAddr, io::Error> {
        self.listener.local_addr()
    }

    /// 持续处理请求直到进程被终止
    pub async fn serve(self) -> Result<(), io::Error> {
        axum::serve(self.listener, self.router).await
    }
}
