use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};

/// Environment variable that overrides the config file.
pub const API_KEY_ENV: &str = "WEATHERBRO_API_KEY";

/// Top-level configuration stored on disk.
///
/// Example TOML:
/// api_key = "..."
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    pub api_key: Option<String>,
}

impl Config {
    /// Load config from disk, or return an empty default if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        let path = Self::config_file_path()?;
        if !path.exists() {
            // First run: no config file, return empty.
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let cfg: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(cfg)
    }

    /// Resolve the API key: environment variable first, then the config file.
    pub fn resolve_api_key(&self) -> Result<String> {
        resolve_api_key(std::env::var(API_KEY_ENV).ok(), self)
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "weatherbro", "weatherbro")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }
}

fn resolve_api_key(env_key: Option<String>, cfg: &Config) -> Result<String> {
    if let Some(key) = env_key.filter(|k| !k.is_empty()) {
        return Ok(key);
    }

    cfg.api_key.clone().ok_or_else(|| {
        anyhow!(
            "No API key configured.\n\
             Hint: set the {API_KEY_ENV} environment variable, or put\n\
             `api_key = \"...\"` in the config file ({}).",
            Config::config_file_path()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|_| "platform config dir".to_string())
        )
    })
}
