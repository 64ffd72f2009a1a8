//! ingest - HTTP 请求体摄取服务

use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use ingest::cli::Cli;
use ingest::config::{load_config_with, print_config, LogConfig};
use ingest::domain::ingestion::BodyLimit;
use ingest::infrastructure::adapters::TempFileSpooler;
use ingest::infrastructure::http::{AppState, HttpServer, ServerConfig};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // 加载配置（优先级：命令行 > 环境变量 > 配置文件 > 默认值）
    let config = load_config_with(cli.config.as_deref(), &cli.overrides())
        .map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    init_logging(&config.log);
    print_config(&config);

    let spooler = match &config.ingest.spool_dir {
        Some(dir) => TempFileSpooler::new(dir)
            .await
            .with_context(|| format!("Failed to prepare spool directory {:?}", dir))?,
        None => TempFileSpooler::system(),
    };
    let limit = BodyLimit::new(config.ingest.max_body_bytes)?;

    let state = AppState::new(Arc::new(spooler), limit, config.ingest.read_timeout());
    let server_config = ServerConfig::new(&config.server.interface, config.server.port);

    // 绑定失败直接退出，不重试
    HttpServer::new(server_config, state)
        .run()
        .await
        .context("HTTP server stopped")?;

    Ok(())
}

fn init_logging(log: &LogConfig) {
    let log_filter = format!("{},ingest={},tower_http=debug", log.level, log.level);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log_filter));

    if log.json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_target(false)
            .compact()
            .with_env_filter(filter)
            .init();
    }
}
