//! Configuration Loader
//!
//! 实现多源配置加载与合并逻辑
//!
//! 优先级（从高到低）：
//! 1. 命令行参数
//! 2. 环境变量
//! 3. 配置文件（ingest.toml）
//! 4. 默认值

use config::{Config, ConfigError as ConfigCrateError, Environment, File};
use std::path::Path;
use thiserror::Error;

use super::types::{AppConfig, DEFAULT_MAX_BODY_BYTES};

/// 配置加载错误
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    LoadError(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}

impl From<ConfigCrateError> for ConfigError {
    fn from(err: ConfigCrateError) -> Self {
        ConfigError::LoadError(err.to_string())
    }
}

/// 配置文件搜索路径
const CONFIG_FILE_NAMES: &[&str] = &["ingest", "ingest.local"];

/// 命令行覆盖项
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub interface: Option<String>,
    pub port: Option<u16>,
}

/// 加载应用配置
///
/// # 参数
/// - `config_path` - 可选的配置文件路径，如果为 None 则使用默认搜索路径
/// - `overrides` - 命令行参数，优先级最高
///
/// # 环境变量示例
/// - `INGEST_SERVER__INTERFACE=127.0.0.1`
/// - `INGEST_SERVER__PORT=8080`
/// - `INGEST_INGEST__MAX_BODY_BYTES=1048576`
/// - `INGEST_LOG__LEVEL=debug`
pub fn load_config_with(
    config_path: Option<&Path>,
    overrides: &ConfigOverrides,
) -> Result<AppConfig, ConfigError> {
    let mut builder = Config::builder();

    // 1. 默认值（最低优先级）
    builder = builder
        .set_default("server.interface", "0.0.0.0")?
        .set_default("server.port", 5003)?
        .set_default("ingest.max_body_bytes", DEFAULT_MAX_BODY_BYTES as i64)?
        .set_default("ingest.read_timeout_secs", 30)?
        .set_default("log.level", "info")?
        .set_default("log.json", false)?;

    // 2. 配置文件
    if let Some(path) = config_path {
        builder = builder.add_source(File::from(path).required(true));
    } else {
        for name in CONFIG_FILE_NAMES {
            builder = builder.add_source(File::with_name(name).required(false));
        }
    }

    // 3. 环境变量
    // 前缀: INGEST_，层级分隔符: __
    builder = builder.add_source(
        Environment::with_prefix("INGEST")
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true),
    );

    // 4. 命令行参数
    builder = builder
        .set_override_option("server.interface", overrides.interface.clone())?
        .set_override_option("server.port", overrides.port.map(i64::from))?;

    let config = builder.build()?;

    let app_config: AppConfig = config.try_deserialize().map_err(|e| {
        ConfigError::ParseError(format!("Failed to deserialize config: {}", e))
    })?;

    validate_config(&app_config)?;

    Ok(app_config)
}

/// 验证配置有效性
fn validate_config(config: &AppConfig) -> Result<(), ConfigError> {
    if config.server.interface.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "Server interface cannot be empty".to_string(),
        ));
    }

    if config.server.port == 0 {
        return Err(ConfigError::ValidationError(
            "Server port cannot be 0".to_string(),
        ));
    }

    if config.ingest.max_body_bytes == 0 {
        return Err(ConfigError::ValidationError(
            "Max body size cannot be 0".to_string(),
        ));
    }

    if config.ingest.read_timeout_secs == 0 {
        return Err(ConfigError::ValidationError(
            "Read timeout cannot be 0".to_string(),
        ));
    }

    Ok(())
}

/// 打印配置信息（用于启动时日志）
pub fn print_config(config: &AppConfig) {
    tracing::info!("=== Ingest Configuration ===");
    tracing::info!("Server: {}", config.server.addr());
    tracing::info!("Max Body Size: {} bytes", config.ingest.max_body_bytes);
    tracing::info!("Read Timeout: {}s", config.ingest.read_timeout_secs);
    match &config.ingest.spool_dir {
        Some(dir) => tracing::info!("Spool Directory: {:?}", dir),
        None => tracing::info!("Spool Directory: {:?} (system)", std::env::temp_dir()),
    }
    tracing::info!("Log Level: {}", config.log.level);
    tracing::info!("============================");
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new()
            .prefix("ingest-config")
            .suffix(".toml")
            .tempfile()
            .unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_validation_passes_for_default_config() {
        let config = AppConfig::default();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_validation_error_for_zero_port() {
        let mut config = AppConfig::default();
        config.server.port = 0;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validation_error_for_empty_interface() {
        let mut config = AppConfig::default();
        config.server.interface = " ".to_string();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validation_error_for_zero_body_limit() {
        let mut config = AppConfig::default();
        config.ingest.max_body_bytes = 0;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validation_error_for_zero_read_timeout() {
        let mut config = AppConfig::default();
        config.ingest.read_timeout_secs = 0;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_file_values_are_loaded() {
        let file = write_config(
            r#"
[server]
interface = "127.0.0.1"
port = 6001

[ingest]
max_body_bytes = 4096
read_timeout_secs = 5
spool_dir = "/var/tmp/ingest"
"#,
        );

        let config = load_config_with(Some(file.path()), &ConfigOverrides::default()).unwrap();
        assert_eq!(config.server.interface, "127.0.0.1");
        assert_eq!(config.server.port, 6001);
        assert_eq!(config.ingest.max_body_bytes, 4096);
        assert_eq!(config.ingest.read_timeout_secs, 5);
        assert_eq!(
            config.ingest.spool_dir.as_deref(),
            Some(Path::new("/var/tmp/ingest"))
        );
    }

    #[test]
    fn test_overrides_win_over_file() {
        let file = write_config("[server]\ninterface = \"127.0.0.1\"\nport = 6001\n");
        let overrides = ConfigOverrides {
            interface: Some("::1".to_string()),
            port: Some(7002),
        };

        let config = load_config_with(Some(file.path()), &overrides).unwrap();
        assert_eq!(config.server.interface, "::1");
        assert_eq!(config.server.port, 7002);
    }

    #[test]
    fn test_invalid_file_value_is_rejected() {
        let file = write_config("[ingest]\nmax_body_bytes = 0\n");
        let result = load_config_with(Some(file.path()), &ConfigOverrides::default());
        assert!(matches!(result, Err(ConfigError::ValidationError(_))));
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let result = load_config_with(
            Some(Path::new("/nonexistent/ingest.toml")),
            &ConfigOverrides::default(),
        );
        assert!(matches!(result, Err(ConfigError::LoadError(_))));
    }
}
