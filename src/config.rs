use std::collections::HashMap;
use std::env;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use serde::Deserialize;

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_OFFLOAD_THRESHOLD: i64 = 1_000_000;
const DEFAULT_CONFIG_PATH: &str = "picalc.toml";

/// Top-level application configuration loaded from file + environment.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub api: ApiSection,
    pub logging: LoggingSection,
}

impl AppConfig {
    /// Load configuration from disk and the process environment.
    pub fn load() -> Result<Self> {
        let config_path =
            env::var("PICALC_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
        let vars: HashMap<String, String> = env::vars().collect();

        Self::load_from(Path::new(&config_path), vars)
    }

    /// Load configuration from `config_path` (if it exists) and the given
    /// environment variables.
    pub fn load_from(config_path: &Path, vars: HashMap<String, String>) -> Result<Self> {
        let mut builder = config::Config::builder();

        if config_path.exists() {
            builder = builder.add_source(config::File::from(PathBuf::from(config_path)));
        }

        let port = vars.get("PORT").cloned();

        builder = builder.add_source(
            config::Environment::with_prefix("PICALC")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true)
                .source(Some(vars)),
        );

        let settings = builder.build()?;
        let mut config: Self = settings.try_deserialize()?;

        // Bare PORT wins over everything else, as long as it is set.
        if let Some(port) = port.filter(|p| !p.trim().is_empty()) {
            config.server.port = port
                .trim()
                .parse()
                .with_context(|| format!("invalid PORT '{}'", port))?;
        }

        if config.logging.level.trim().is_empty() {
            config.logging.level = "info".to_string();
        }

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.server.host.trim().is_empty() {
            bail!("server.host must be specified");
        }
        Ok(())
    }

    /// `host:port` string suitable for binding a listener.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: DEFAULT_PORT,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiSection {
    /// Iteration counts above this are summed on the blocking thread pool.
    pub offload_threshold: i64,
}

impl Default for ApiSection {
    fn default() -> Self {
        Self {
            offload_threshold: DEFAULT_OFFLOAD_THRESHOLD,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    pub level: String,
    pub format: LogFormat,
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Text,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Json,
    #[default]
    Text,
}
