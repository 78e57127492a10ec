use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct MindDumpConfig {
    pub server: ServerConfig,
    pub storage: StorageConfig,
    pub classifier: ClassifierConfig,
    pub focus: FocusConfig,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ServerConfig {
    pub transport: String,
    pub log_level: String,
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct StorageConfig {
    pub db_path: String,
    /// Owner id every thought is filed under.
    pub default_user: String,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ClassifierConfig {
    pub provider: String,
    pub api_key: Option<String>,
    pub base_url: String,
    pub model: String,
    pub temperature: f64,
    pub max_output_tokens: u32,
    pub top_p: f64,
    pub top_k: u32,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct FocusConfig {
    pub work_minutes: u32,
    pub break_minutes: u32,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            transport: "stdio".into(),
            log_level: "info".into(),
            host: "127.0.0.1".into(),
            port: 8723,
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        let db_path = default_minddump_dir()
            .join("thoughts.db")
            .to_string_lossy()
            .into_owned();
        Self {
            db_path,
            default_user: "local".into(),
        }
    }
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            provider: "gemini".into(),
            api_key: None,
            base_url: "https://generativelanguage.googleapis.com/v1beta".into(),
            model: "gemini-1.5-flash".into(),
            temperature: 0.1,
            max_output_tokens: 50,
            top_p: 0.8,
            top_k: 10,
        }
    }
}

impl Default for FocusConfig {
    fn default() -> Self {
        Self {
            work_minutes: 25,
            break_minutes: 5,
        }
    }
}

impl ClassifierConfig {
    /// The configured API key, treating blank values as unset.
    pub fn api_key(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
    }
}

/// Returns `~/.minddump/`
pub fn default_minddump_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".minddump")
}

/// Returns the default config file path: `~/.minddump/config.toml`
pub fn default_config_path() -> PathBuf {
    default_minddump_dir().join("config.toml")
}

impl MindDumpConfig {
    /// Load config from TOML file (if it exists) then apply env var overrides.
    pub fn load() -> Result<Self> {
        Self::load_from(default_config_path())
    }

    /// Load from a specific path, then apply env var overrides.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let mut config = if path.exists() {
            let contents =
                std::fs::read_to_string(path).context("failed to read config file")?;
            toml::from_str(&contents).context("failed to parse config TOML")?
        } else {
            info!("no config file at {}, using defaults", path.display());
            MindDumpConfig::default()
        };

        config.apply_env_overrides();
        Ok(config)
    }

    /// Apply environment variable overrides (MINDDUMP_DB, MINDDUMP_USER,
    /// MINDDUMP_LOG_LEVEL, GEMINI_API_KEY).
    fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("MINDDUMP_DB") {
            self.storage.db_path = val;
        }
        if let Ok(val) = std::env::var("MINDDUMP_USER") {
            self.storage.default_user = val;
        }
        if let Ok(val) = std::env::var("MINDDUMP_LOG_LEVEL") {
            self.server.log_level = val;
        }
        if let Ok(val) = std::env::var("GEMINI_API_KEY") {
            self.classifier.api_key = Some(val);
        }
    }

    /// Resolve the database path, expanding `~` if needed.
    pub fn resolved_db_path(&self) -> PathBuf {
        expand_tilde(&self.storage.db_path)
    }
}

pub fn expand_tilde(path: &str) -> PathBuf {
    match (path.strip_prefix("~/"), dirs::home_dir()) {
        (Some(rest), Some(home)) => home.join(rest),
        _ => PathBuf::from(path),
    }
}
