//! Configuration management using Figment
//!
//! Configuration is loaded from multiple sources with the following precedence (highest to lowest):
//! 1. Environment variables (prefix: NZWALKS_, `__` separates nested keys)
//! 2. Current working directory: ./config.toml
//! 3. XDG config directory: ~/.config/nzwalks/{service_name}/config.toml
//! 4. System directory: /etc/nzwalks/{service_name}/config.toml
//! 5. Default values

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::{Error, Result};

const CONFIG_PREFIX: &str = "nzwalks";
const ENV_PREFIX: &str = "NZWALKS_";
const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Service configuration
    pub service: ServiceConfig,

    /// Middleware configuration
    #[serde(default)]
    pub middleware: MiddlewareConfig,

    /// Reference data loaded at start-up
    #[serde(default)]
    pub seed: SeedConfig,
}

/// Service-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Service name
    pub name: String,

    /// Port to listen on
    #[serde(default = "default_port")]
    pub port: u16,

    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Log output format
    #[serde(default)]
    pub log_format: LogFormat,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Environment (dev, staging, production)
    #[serde(default = "default_environment")]
    pub environment: String,
}

impl ServiceConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Log output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// One JSON object per event
    #[default]
    Json,
    /// Human-readable multi-line output
    Pretty,
}

/// CORS policy applied by the server
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CorsMode {
    /// Any origin, method and header
    #[default]
    Permissive,
    /// Same-origin only
    Restrictive,
    /// No CORS layer
    Disabled,
}

/// Middleware configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MiddlewareConfig {
    /// Request body size limit in MB
    #[serde(default = "default_body_limit_mb")]
    pub body_limit_mb: usize,

    /// Enable compression
    #[serde(default = "default_true")]
    pub compression: bool,

    /// CORS configuration
    #[serde(default)]
    pub cors_mode: CorsMode,
}

impl MiddlewareConfig {
    pub fn body_limit_bytes(&self) -> usize {
        self.body_limit_mb * 1024 * 1024
    }
}

impl Default for MiddlewareConfig {
    fn default() -> Self {
        Self {
            body_limit_mb: default_body_limit_mb(),
            compression: true,
            cors_mode: CorsMode::default(),
        }
    }
}

/// Reference data seeded into the in-memory stores
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedConfig {
    /// Walk difficulty names, each given a fresh id at start-up
    #[serde(default = "default_difficulties")]
    pub difficulties: Vec<String>,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            difficulties: default_difficulties(),
        }
    }
}

// Default value functions
fn default_port() -> u16 {
    8080
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_timeout() -> u64 {
    30
}

fn default_environment() -> String {
    "dev".to_string()
}

fn default_true() -> bool {
    true
}

fn default_body_limit_mb() -> usize {
    10
}

fn default_difficulties() -> Vec<String> {
    ["Easy", "Medium", "Hard"].map(String::from).to_vec()
}

impl Config {
    /// Load configuration from all sources
    ///
    /// The service name is taken from the binary name.
    pub fn load() -> Result<Self> {
        let service_name = std::env::current_exe()
            .ok()
            .and_then(|p| p.file_stem().map(|s| s.to_string_lossy().into_owned()))
            .unwrap_or_else(|| "nzwalks-service".to_string());

        Self::load_for_service(&service_name)
    }

    /// Load configuration for a specific service name
    pub fn load_for_service(service_name: &str) -> Result<Self> {
        let config_paths = Self::find_config_paths(service_name);

        tracing::debug!("Searching for config files in order:");
        for path in &config_paths {
            tracing::debug!("  - {}", path.display());
        }

        let mut figment = Figment::new().merge(Serialized::defaults(Config::default()));

        // Lowest priority first so later files win
        for path in config_paths.iter().rev() {
            if path.exists() {
                tracing::info!("Loading configuration from: {}", path.display());
                figment = figment.merge(Toml::file(path));
            }
        }

        Self::finish(figment.merge(Env::prefixed(ENV_PREFIX).split("__")))
    }

    /// Load configuration from a specific file
    ///
    /// This bypasses the search path. A missing file is not an error; the
    /// defaults and environment still apply.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let figment = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(path.as_ref()))
            .merge(Env::prefixed(ENV_PREFIX).split("__"));

        Self::finish(figment)
    }

    fn finish(figment: Figment) -> Result<Self> {
        let config: Self = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Reject settings the server cannot start with
    pub fn validate(&self) -> Result<()> {
        if self.service.name.trim().is_empty() {
            return Err(Error::Config(Box::new(figment::Error::from(
                "service.name cannot be empty".to_string(),
            ))));
        }
        if self.service.port == 0 {
            return Err(Error::Config(Box::new(figment::Error::from(
                "service.port cannot be 0".to_string(),
            ))));
        }
        if !LOG_LEVELS.contains(&self.service.log_level.to_lowercase().as_str()) {
            return Err(Error::Config(Box::new(figment::Error::from(format!(
                "service.log_level must be one of {LOG_LEVELS:?}, got {:?}",
                self.service.log_level
            )))));
        }
        if self.middleware.body_limit_mb == 0 {
            return Err(Error::Config(Box::new(figment::Error::from(
                "middleware.body_limit_mb must be greater than zero".to_string(),
            ))));
        }
        Ok(())
    }

    /// Possible config file paths, highest priority first
    fn find_config_paths(service_name: &str) -> Vec<PathBuf> {
        let config_file_path = Path::new(service_name).join("config.toml");
        let mut paths = vec![PathBuf::from("config.toml")];

        let xdg_dirs = xdg::BaseDirectories::with_prefix(CONFIG_PREFIX);
        if let Some(path) = xdg_dirs.find_config_file(&config_file_path) {
            paths.push(path);
        }

        paths.push(
            PathBuf::from("/etc")
                .join(CONFIG_PREFIX)
                .join(config_file_path),
        );

        paths
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            service: ServiceConfig {
                name: "nzwalks-service".to_string(),
                port: default_port(),
                log_level: default_log_level(),
                log_format: LogFormat::default(),
                timeout_secs: default_timeout(),
                environment: default_environment(),
            },
            middleware: MiddlewareConfig::default(),
            seed: SeedConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.service.port, 8080);
        assert_eq!(config.service.log_level, "info");
        assert_eq!(config.service.log_format, LogFormat::Json);
        assert_eq!(config.middleware.body_limit_bytes(), 10 * 1024 * 1024);
        assert_eq!(config.seed.difficulties, vec!["Easy", "Medium", "Hard"]);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_from_file_overrides_defaults() {
        let file = write_config(
            r#"
            [service]
            name = "walks-test"
            port = 9191
            log_format = "pretty"

            [middleware]
            cors_mode = "restrictive"

            [seed]
            difficulties = ["Gentle", "Steep"]
            "#,
        );

        let config = Config::load_from(file.path()).unwrap();
        assert_eq!(config.service.name, "walks-test");
        assert_eq!(config.service.port, 9191);
        assert_eq!(config.service.log_format, LogFormat::Pretty);
        assert_eq!(config.service.timeout(), Duration::from_secs(30));
        assert_eq!(config.middleware.cors_mode, CorsMode::Restrictive);
        assert!(config.middleware.compression);
        assert_eq!(config.seed.difficulties, vec!["Gentle", "Steep"]);
    }

    #[test]
    fn test_load_from_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(dir.path().join("absent.toml")).unwrap();
        assert_eq!(config.service.name, "nzwalks-service");
    }

    #[test]
    fn test_load_from_rejects_invalid_values() {
        let file = write_config(
            r#"
            [service]
            name = "walks-test"
            log_level = "loud"
            "#,
        );
        assert!(matches!(Config::load_from(file.path()), Err(Error::Config(_))));
    }

    #[test]
    fn test_validate_rules() {
        let mut config = Config::default();
        config.service.name = "  ".to_string();
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.service.port = 0;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.middleware.body_limit_mb = 0;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.service.log_level = "DEBUG".to_string();
        assert!(config.validate().is_ok());
    }
}
