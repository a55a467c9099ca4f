use std::path::Path;

use config::{Config, Environment, File, FileFormat};
use tracing::debug;

use super::AppConfig;
use crate::errors::{MedihelpError, Result};

/// 默认配置文件路径
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// 环境变量前缀，分隔符为 `__`
pub const ENV_PREFIX: &str = "MEDIHELP";

impl AppConfig {
    /// 从 TOML 文件和环境变量加载配置
    ///
    /// 优先级：ENV > 配置文件 > 默认值
    /// 示例：MEDIHELP__SERVER__PORT=9000
    ///
    /// 显式指定的配置文件必须存在；默认的 `config.toml` 是可选的。
    pub fn load(path: Option<&str>) -> Result<Self> {
        let (file_path, required) = match path {
            Some(p) => (p, true),
            None => (DEFAULT_CONFIG_PATH, false),
        };

        if required && !Path::new(file_path).exists() {
            return Err(MedihelpError::config(format!(
                "configuration file not found: {}",
                file_path
            )));
        }

        let settings = Config::builder()
            .add_source(
                File::new(file_path, FileFormat::Toml).required(required),
            )
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("cors.allowed_origins")
                    .with_list_parse_key("cors.allowed_methods")
                    .with_list_parse_key("cors.allowed_headers"),
            )
            .build()?;

        let config: AppConfig = settings.try_deserialize()?;
        if Path::new(file_path).exists() {
            debug!("Configuration loaded from: {}", file_path);
        }
        config.validate()?;
        Ok(config)
    }

    /// 启动前的基本校验
    pub fn validate(&self) -> Result<()> {
        if self.search.default_limit == 0 {
            return Err(MedihelpError::config("search.default_limit must be at least 1"));
        }
        if self.geoip.timeout_secs == 0 || self.overpass.timeout_secs == 0 {
            return Err(MedihelpError::config("upstream timeouts must be at least 1 second"));
        }
        if !matches!(self.logging.format.as_str(), "text" | "json") {
            return Err(MedihelpError::config(format!(
                "logging.format must be \"text\" or \"json\", got \"{}\"",
                self.logging.format
            )));
        }
        Ok(())
    }

    /// 实际生效的日志级别，`server.debug` 会覆盖配置的级别
    pub fn effective_log_level(&self) -> String {
        if self.server.debug {
            "debug".to_string()
        } else {
            self.logging.level.clone()
        }
    }

    /// 生成示例 TOML 配置文件
    pub fn generate_sample_config() -> Result<String> {
        Ok(toml::to_string_pretty(&Self::default())?)
    }

    /// 保存配置到 TOML 文件
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = toml::to_string_pretty(self)?;

        if let Some(parent) = path.as_ref().parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_match_service_contract() {
        let config = AppConfig::default();
        assert_eq!(config.search.default_radius, 5000);
        assert_eq!(config.search.default_limit, 5);
        assert_eq!(config.geoip.timeout_secs, 10);
        assert_eq!(config.overpass.timeout_secs, 30);
        assert_eq!(
            config.cors.allowed_origins,
            vec!["http://localhost:*", "http://127.0.0.1:*"]
        );
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_from_explicit_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            "[server]\nport = 9123\ndebug = true\n\n[search]\ndefault_limit = 3\n"
        )
        .unwrap();

        let config = AppConfig::load(Some(file.path().to_str().unwrap())).unwrap();
        assert_eq!(config.server.port, 9123);
        assert!(config.server.debug);
        assert_eq!(config.search.default_limit, 3);
        // 未指定的字段保持默认值
        assert_eq!(config.search.default_radius, 5000);
        assert_eq!(config.effective_log_level(), "debug");
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let err = AppConfig::load(Some("/nonexistent/medihelp.toml")).unwrap_err();
        assert!(matches!(err, MedihelpError::Config(_)));
    }

    #[test]
    fn test_zero_limit_rejected() {
        let mut config = AppConfig::default();
        config.search.default_limit = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_sample_config_round_trips() {
        let sample = AppConfig::generate_sample_config().unwrap();
        let parsed: AppConfig = toml::from_str(&sample).unwrap();
        assert_eq!(parsed, AppConfig::default());
    }

    #[test]
    fn test_save_to_file_creates_parent_dirs() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        AppConfig::default().save_to_file(&path).unwrap();
        assert!(path.exists());
    }
}
