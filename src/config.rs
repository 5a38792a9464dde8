use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Environment variables that override the YAML file
pub const ENV_PORT: &str = "PORT";
pub const ENV_DATABASE_URL: &str = "DATABASE_URL";
pub const ENV_DATABASE_NAME: &str = "DATABASE_NAME";

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct AppConfig {
    pub log_level: String,
    pub log_dir: String,
    pub log_file: String,
    pub use_json: bool,
    pub rotation: String,
    pub server: ServerConfig,
    pub database: DatabaseConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_dir: "./logs".to_string(),
            log_file: "divine_flavours.log".to_string(),
            use_json: false,
            rotation: "daily".to_string(),
            server: ServerConfig::default(),
            database: DatabaseConfig::default(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct DatabaseConfig {
    /// PostgreSQL connection string
    pub url: Option<String>,
    /// Database name; overrides the one in `url` when set
    pub name: Option<String>,
    pub max_connections: u32,
    pub acquire_timeout_secs: u64,
    /// Serve from an in-memory store when no `url` is configured
    pub memory_fallback: bool,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: None,
            name: None,
            max_connections: 10,
            acquire_timeout_secs: 5,
            memory_fallback: false,
        }
    }
}

impl AppConfig {
    /// Load `config/{env}.yaml` and apply environment overrides.
    ///
    /// A missing file is not an error: built-in defaults are used instead.
    pub fn load(env: &str) -> Result<Self> {
        let config_path = format!("config/{}.yaml", env);
        let mut config = Self::from_file(Path::new(&config_path))?;
        config.apply_env(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    fn from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::from_yaml(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(content)?)
    }

    /// Apply `PORT`, `DATABASE_URL` and `DATABASE_NAME` from `lookup`.
    /// Empty values count as unset.
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        let lookup = |key: &str| lookup(key).filter(|v| !v.is_empty());

        if let Some(port) = lookup(ENV_PORT) {
            self.server.port = port
                .trim()
                .parse()
                .with_context(|| format!("Invalid {}: {:?}", ENV_PORT, port))?;
        }
        if let Some(url) = lookup(ENV_DATABASE_URL) {
            self.database.url = Some(url);
        }
        if let Some(name) = lookup(ENV_DATABASE_NAME) {
            self.database.name = Some(name);
        }
        Ok(())
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
