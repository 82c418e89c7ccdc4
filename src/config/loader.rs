//! Configuration Loader
//!
//! 多源配置加载与合并
//!
//! 优先级（从高到低）：
//! 1. 环境变量
//! 2. 配置文件（config.toml）
//! 3. 默认值

use config::{Config, ConfigError as ConfigCrateError, Environment, File};
use std::path::Path;
use thiserror::Error;

use super::types::AppConfig;

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
const CONFIG_FILE_NAMES: &[&str] = &["config", "config.local"];

/// 环境变量前缀
const ENV_PREFIX: &str = "EMPLOYEE_GATEWAY";

/// 加载应用配置
///
/// # 环境变量示例
/// - `EMPLOYEE_GATEWAY_SERVER__PORT=9000`
/// - `EMPLOYEE_GATEWAY_UPSTREAM__BASE_URL=http://localhost:3000/api/v1`
/// - `EMPLOYEE_GATEWAY_UPSTREAM__TIMEOUT_SECS=5`
pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_from_path(None)
}

/// 从指定路径加载配置
///
/// `config_path` 为 None 时搜索默认配置文件（均为可选）
pub fn load_config_from_path(config_path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    let mut builder = Config::builder()
        .set_default("server.host", "0.0.0.0")?
        .set_default("server.port", 8080)?
        .set_default("upstream.base_url", "https://dummy.restapiexample.com/api/v1")?
        .set_default("upstream.timeout_secs", 30)?
        .set_default("upstream.connect_timeout_secs", 10)?
        .set_default("log.level", "info")?;

    if let Some(path) = config_path {
        builder = builder.add_source(File::from(path).required(true));
    } else {
        for name in CONFIG_FILE_NAMES {
            builder = builder.add_source(File::with_name(name).required(false));
        }
    }

    // 层级分隔符: __ (双下划线)，例如 EMPLOYEE_GATEWAY_UPSTREAM__BASE_URL
    builder = builder.add_source(
        Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true),
    );

    let app_config: AppConfig = builder.build()?.try_deserialize().map_err(|e| {
        ConfigError::ParseError(format!("Failed to deserialize config: {}", e))
    })?;

    validate_config(&app_config)?;

    Ok(app_config)
}

/// 验证配置有效性
fn validate_config(config: &AppConfig) -> Result<(), ConfigError> {
    if config.server.port == 0 {
        return Err(ConfigError::ValidationError(
            "Server port cannot be 0".to_string(),
        ));
    }

    let base_url = &config.upstream.base_url;
    if base_url.is_empty() {
        return Err(ConfigError::ValidationError(
            "Upstream base URL cannot be empty".to_string(),
        ));
    }
    if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
        return Err(ConfigError::ValidationError(format!(
            "Upstream base URL must start with http:// or https://: {}",
            base_url
        )));
    }

    if config.upstream.timeout_secs == 0 || config.upstream.connect_timeout_secs == 0 {
        return Err(ConfigError::ValidationError(
            "Upstream timeouts must be greater than 0".to_string(),
        ));
    }

    Ok(())
}

/// 打印配置信息（用于启动时日志）
pub fn print_config(config: &AppConfig) {
    tracing::info!("=== Application Configuration ===");
    tracing::info!("Server: {}", config.server.addr());
    tracing::info!("Upstream URL: {}", config.upstream.base_url);
    tracing::info!(
        "Upstream Timeout: {}s (connect {}s)",
        config.upstream.timeout_secs,
        config.upstream.connect_timeout_secs
    );
    tracing::info!("Log Level: {}", config.log.level);
    tracing::info!("=================================");
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_validation_passes_for_default_config() {
        assert!(validate_config(&AppConfig::default()).is_ok());
    }

    #[test]
    fn test_validation_error_for_zero_port() {
        let mut config = AppConfig::default();
        config.server.port = 0;
        assert!(matches!(
            validate_config(&config),
            Err(ConfigError::ValidationError(_))
        ));
    }

    #[test]
    fn test_validation_error_for_bad_base_url() {
        let mut config = AppConfig::default();
        config.upstream.base_url = String::new();
        assert!(validate_config(&config).is_err());

        config.upstream.base_url = "ftp://example.com".to_string();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validation_error_for_zero_timeout() {
        let mut config = AppConfig::default();
        config.upstream.timeout_secs = 0;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            "[server]\nport = 9090\n\n[upstream]\nbase_url = \"http://localhost:3000/api/v1\"\ntimeout_secs = 5"
        )
        .unwrap();

        let config = load_config_from_path(Some(file.path())).unwrap();

        assert_eq!(config.server.port, 9090);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.upstream.base_url, "http://localhost:3000/api/v1");
        assert_eq!(config.upstream.timeout_secs, 5);
        assert_eq!(config.upstream.connect_timeout_secs, 10);
    }

    #[test]
    fn test_load_from_missing_file_fails() {
        let result = load_config_from_path(Some(Path::new("/nonexistent/employee-gateway.toml")));
        assert!(matches!(result, Err(ConfigError::LoadError(_))));
    }
}
