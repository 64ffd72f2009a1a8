//! Configuration Types
//!
//! 定义所有配置结构体

use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

/// 应用主配置
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// 服务器配置
    #[serde(default)]
    pub server: ServerConfig,

    /// 摄取配置
    #[serde(default)]
    pub ingest: IngestConfig,

    /// 日志配置
    #[serde(default)]
    pub log: LogConfig,
}

/// 服务器配置
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// 监听网卡地址
    #[serde(default = "default_interface")]
    pub interface: String,

    /// 监听端口
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_interface() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5003
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            interface: default_interface(),
            port: default_port(),
        }
    }
}

impl ServerConfig {
    /// 获取服务器地址
    pub fn addr(&self) -> String {
        format!("{}:{}", self.interface, self.port)
    }
}

/// 摄取配置
#[derive(Debug, Clone, Deserialize)]
pub struct IngestConfig {
    /// 请求体最大字节数
    #[serde(default = "default_max_body_bytes")]
    pub max_body_bytes: u64,

    /// 两次数据块之间的最长等待（秒）
    #[serde(default = "default_read_timeout")]
    pub read_timeout_secs: u64,

    /// 临时文件目录，未设置时使用系统临时目录
    #[serde(default)]
    pub spool_dir: Option<PathBuf>,
}

pub(super) const DEFAULT_MAX_BODY_BYTES: u64 = 1024 * 1024 * 1024 * 1024; // 1 TiB

fn default_max_body_bytes() -> u64 {
    DEFAULT_MAX_BODY_BYTES
}

fn default_read_timeout() -> u64 {
    30
}

impl Default for IngestConfig {
    fn default() -> Self {
        Self {
            max_body_bytes: default_max_body_bytes(),
            read_timeout_secs: default_read_timeout(),
            spool_dir: None,
        }
    }
}

impl IngestConfig {
    pub fn read_timeout(&self) -> Duration {
        Duration::from_secs(self.read_timeout_secs)
    }
}

/// 日志配置
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// 日志级别
    #[serde(default = "default_log_level")]
    pub level: String,

    /// 是否启用 JSON 格式
    #[serde(default)]
    pub json: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.server.interface, "0.0.0.0");
        assert_eq!(config.server.port, 5003);
        assert_eq!(config.ingest.max_body_bytes, 1 << 40);
        assert_eq!(config.ingest.read_timeout(), Duration::from_secs(30));
        assert!(config.ingest.spool_dir.is_none());
        assert_eq!(config.log.level, "info");
        assert!(!config.log.json);
    }

    #[test]
    fn test_server_addr() {
        let config = ServerConfig::default();
        assert_eq!(config.addr(), "0.0.0.0:5003");
    }
}
