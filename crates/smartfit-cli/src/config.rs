//! Configuration file management for smartfit.
//!
//! Provides a TOML-based config file at `~/.config/smartfit/config.toml` and a
//! resolution chain: CLI flag > env var > config file > default.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};

use smartfit_core::generate::{DEFAULT_MODEL, GeminiConfig, RetryPolicy};
use smartfit_db::config::DbConfig;

/// Env var holding the Gemini API key.
pub const API_KEY_ENV_VAR: &str = "SMARTFIT_GEMINI_API_KEY";

// -----------------------------------------------------------------------
// Config file types
// -----------------------------------------------------------------------

#[derive(Debug, Serialize, Deserialize)]
pub struct ConfigFile {
    pub database: DatabaseSection,
    #[serde(default)]
    pub generation: GenerationSection,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DatabaseSection {
    pub url: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct GenerationSection {
    #[serde(default = "default_model")]
    pub model: String,
    /// Left out of the file unless set; the env var is preferred.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    /// Delay between generation attempts, in milliseconds.
    #[serde(default = "default_backoff_ms")]
    pub backoff_ms: u64,
}

impl Default for GenerationSection {
    fn default() -> Self {
        Self {
            model: default_model(),
            api_key: None,
            backoff_ms: default_backoff_ms(),
        }
    }
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

fn default_backoff_ms() -> u64 {
    RetryPolicy::default().backoff.as_millis() as u64
}

// -----------------------------------------------------------------------
// Paths
// -----------------------------------------------------------------------

/// Return the smartfit config directory.
///
/// Always uses XDG layout: `$XDG_CONFIG_HOME/smartfit` or `~/.config/smartfit`,
/// also on macOS where `dirs::config_dir()` points elsewhere.
pub fn config_dir() -> PathBuf {
    if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
        return PathBuf::from(xdg).join("smartfit");
    }
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config")
        .join("smartfit")
}

/// Return the path to the smartfit config file.
pub fn config_path() -> PathBuf {
    config_dir().join("config.toml")
}

// -----------------------------------------------------------------------
// Read / write
// -----------------------------------------------------------------------

/// Load and parse the config file. Returns an error if it does not exist.
pub fn load_config() -> Result<ConfigFile> {
    let path = config_path();
    let contents = std::fs::read_to_string(&path)
        .with_context(|| format!("failed to read config file at {}", path.display()))?;
    let config: ConfigFile = toml::from_str(&contents).context("failed to parse config file")?;
    Ok(config)
}

/// Serialize and write the config file, creating parent dirs as needed.
/// Sets file permissions to 0600 on Unix.
pub fn save_config(config: &ConfigFile) -> Result<()> {
    let path = config_path();
    let dir = config_dir();
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("failed to create config directory {}", dir.display()))?;

    let contents = toml::to_string_pretty(config).context("failed to serialize config")?;
    std::fs::write(&path, &contents)
        .with_context(|| format!("failed to write config file at {}", path.display()))?;

    // The file may hold an API key.
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let perms = std::fs::Permissions::from_mode(0o600);
        std::fs::set_permissions(&path, perms)
            .with_context(|| format!("failed to set permissions on {}", path.display()))?;
    }

    Ok(())
}

// -----------------------------------------------------------------------
// Resolved config
// -----------------------------------------------------------------------

/// Fully resolved configuration, ready for use.
#[derive(Debug)]
pub struct SmartfitConfig {
    pub db_config: DbConfig,
    pub model: String,
    /// `None` until a command that generates asks for it.
    pub api_key: Option<String>,
    pub retry: RetryPolicy,
}

impl SmartfitConfig {
    /// Resolve configuration using the chain: CLI flag > env var > config file > default.
    ///
    /// - DB URL: `cli_db_url` > `SMARTFIT_DATABASE_URL` env > `config_file.database.url` > `DbConfig::DEFAULT_URL`
    /// - API key: `SMARTFIT_GEMINI_API_KEY` env > `config_file.generation.api_key`
    pub fn resolve(cli_db_url: Option<&str>) -> Result<Self> {
        let file_config = load_config().ok();

        let db_url = if let Some(url) = cli_db_url {
            url.to_string()
        } else if let Ok(url) = std::env::var(DbConfig::ENV_VAR) {
            url
        } else if let Some(ref cfg) = file_config {
            cfg.database.url.clone()
        } else {
            DbConfig::DEFAULT_URL.to_string()
        };

        let generation = file_config.map(|c| c.generation).unwrap_or_default();
        let api_key = std::env::var(API_KEY_ENV_VAR)
            .ok()
            .filter(|k| !k.trim().is_empty())
            .or(generation.api_key);

        Ok(Self {
            db_config: DbConfig::new(db_url),
            model: generation.model,
            api_key,
            retry: RetryPolicy::with_backoff(Duration::from_millis(generation.backoff_ms)),
        })
    }

    /// Gemini settings, failing when no API key was found.
    pub fn gemini(&self) -> Result<GeminiConfig> {
        let Some(key) = self.api_key.as_deref() else {
            bail!(
                "Gemini API key not found; set {API_KEY_ENV_VAR} or add generation.api_key to {}",
                config_path().display()
            );
        };
        let mut config = GeminiConfig::new(key);
        config.model = self.model.clone();
        Ok(config)
    }
}

// -----------------------------------------------------------------------
// Tests
// -----------------------------------------------------------------------
