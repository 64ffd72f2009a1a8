//! Command Line Interface
//!
//! 命令行参数只覆盖监听地址和端口，其余配置来自文件或环境变量

use clap::Parser;
use std::path::PathBuf;

use crate::config::ConfigOverrides;

#[derive(Debug, Parser)]
#[command(name = "ingest")]
#[command(about = "Accepts POSTed bodies, spools each one to a temporary file and discards it", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Interface address to bind on [default: 0.0.0.0]
    #[arg(short, long)]
    pub interface: Option<String>,

    /// Port to bind on [default: 5003]
    #[arg(short, long)]
    pub port: Option<u16>,

    /// TOML configuration file (defaults to ./ingest.toml if present)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

impl Cli {
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            interface: self.interface.clone(),
            port: self.port,
        }
    }
}
