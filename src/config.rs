// src/config.rs
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::info;

pub const DEFAULT_CONFIG_FILE: &str = "config.yaml";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_address")]
    pub address: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// CV document to serve; the compiled-in data is used when unset
    #[serde(default)]
    pub cv_data_path: Option<PathBuf>,
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

#[derive(Debug, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    local: Option<AppConfig>,
    #[serde(default)]
    production: Option<AppConfig>,
}

fn default_address() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_log_filter() -> String {
    "cv_server=info,rocket::server=OFF".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            address: default_address(),
            port: default_port(),
            cv_data_path: None,
            log_filter: default_log_filter(),
        }
    }
}

impl AppConfig {
    /// Load configuration for the current environment.
    ///
    /// The YAML file is optional; environment variables win over its values.
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        let environment = Self::get_environment();
        let path = config_path.unwrap_or_else(|| Path::new(DEFAULT_CONFIG_FILE));

        let config = if path.exists() {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            Self::from_yaml_str(&content, &environment)
                .with_context(|| format!("Failed to parse {}", path.display()))?
        } else if config_path.is_some() {
            anyhow::bail!("Config file not found: {}", path.display());
        } else {
            Self::default()
        };

        let config = config.with_overrides(|key| std::env::var(key).ok())?;
        config.resolved()
    }

    fn get_environment() -> String {
        std::env::var("CVSERVE_ENV")
            .or_else(|_| std::env::var("ENVIRONMENT"))
            .unwrap_or_else(|_| "local".to_string())
    }

    /// Pick the section matching `environment` out of a config document
    pub fn from_yaml_str(content: &str, environment: &str) -> Result<Self> {
        let file: ConfigFile =
            serde_yaml::from_str(content).context("Invalid configuration document")?;

        let section = match environment {
            "production" => file.production,
            _ => file.local,
        };

        Ok(section.unwrap_or_default())
    }

    /// Apply `ROCKET_PORT`, `ROCKET_ADDRESS`, `CV_DATA_PATH` and `RUST_LOG`
    pub fn with_overrides<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(port) = lookup("ROCKET_PORT") {
            self.port = port
                .parse::<u16>()
                .map_err(|_| anyhow::anyhow!("ROCKET_PORT must be a valid port number"))?;
        }
        if let Some(address) = lookup("ROCKET_ADDRESS") {
            self.address = address;
        }
        if let Some(path) = lookup("CV_DATA_PATH") {
            self.cv_data_path = Some(PathBuf::from(path));
        }
        if let Some(filter) = lookup("RUST_LOG") {
            self.log_filter = filter;
        }
        Ok(self)
    }

    fn resolved(mut self) -> Result<Self> {
        if let Some(path) = self.cv_data_path.take() {
            self.cv_data_path = Some(Self::resolve_path(&path)?);
        }
        info!("Configuration loaded: {}:{}", self.address, self.port);
        Ok(self)
    }

    fn resolve_path(path: &Path) -> Result<PathBuf> {
        if path.is_absolute() {
            Ok(path.to_path_buf())
        } else {
            let current_dir = std::env::current_dir().context("Failed to get current directory")?;
            Ok(current_dir.join(path))
        }
    }
}
