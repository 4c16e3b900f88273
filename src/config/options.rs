// src/config/options.rs
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use super::consts::*;
use crate::error::ConfigError;

/// Runtime options shared by GUI and CLI.
///
/// Sources, lowest to highest priority: built-in defaults, `katastar.toml`,
/// environment variables. CLI flags are applied on top by the caller.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppOptions {
    /// Scraping service root, without the `/scrape` suffix.
    pub api_base: String,
    pub timeout_secs: u64,
    pub connect_timeout_secs: u64,
    /// Where the CLI writes results and where the save dialog starts.
    pub download_dir: PathBuf,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            api_base: s!(DEFAULT_API_BASE),
            timeout_secs: REQUEST_TIMEOUT_SECS,
            connect_timeout_secs: CONNECT_TIMEOUT_SECS,
            download_dir: PathBuf::from(DEFAULT_OUT_DIR),
        }
    }
}

impl AppOptions {
    /// Defaults + `katastar.toml` in the working directory (if any) + env.
    pub fn load() -> Result<Self, ConfigError> {
        let mut opts = Self::from_file_or_default(Path::new(CONFIG_FILE))?;
        opts.apply_env(|k| std::env::var(k).ok())?;
        Ok(opts)
    }

    /// Missing file is not an error; a malformed one is.
    pub fn from_file_or_default(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            logd!("Config: {} not found, using defaults", path.display());
            return Ok(Self::default());
        }
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let opts = Self::from_toml(&text).map_err(|e| match e {
            ConfigError::Parse { source, .. } => ConfigError::Parse { path: path.to_path_buf(), source },
            other => other,
        })?;
        logf!("Config: Loaded {}", path.display());
        Ok(opts)
    }

    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        let opts: Self = toml::from_str(text).map_err(|source| ConfigError::Parse {
            path: PathBuf::from(CONFIG_FILE),
            source,
        })?;
        opts.validate()?;
        Ok(opts)
    }

    /// `lookup` is `std::env::var` in production; tests pass a closure.
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(base) = lookup(ENV_API_BASE) {
            self.api_base = base;
        }
        if let Some(raw) = lookup(ENV_TIMEOUT_SECS) {
            self.timeout_secs = raw.trim().parse().map_err(|_| ConfigError::Invalid {
                key: ENV_TIMEOUT_SECS,
                value: raw.clone(),
            })?;
        }
        self.validate()
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.api_base.trim().is_empty() {
            return Err(ConfigError::Invalid { key: "api_base", value: self.api_base.clone() });
        }
        if self.timeout_secs == 0 {
            return Err(ConfigError::Invalid { key: "timeout_secs", value: s!("0") });
        }
        Ok(())
    }

    /// Full endpoint URL; tolerates a trailing slash on the base.
    pub fn scrape_url(&self) -> String {
        join!(self.api_base.trim().trim_end_matches('/'), SCRAPE_PATH)
    }

    #[inline]
    pub fn timeout(&self) -> Duration { Duration::from_secs(self.timeout_secs) }

    #[inline]
    pub fn connect_timeout(&self) -> Duration { Duration::from_secs(self.connect_timeout_secs) }
}
