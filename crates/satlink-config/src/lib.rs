//! Configuration for the satlink CLI.
//!
//! A TOML file plus `SATLINK_`-prefixed environment variables, merged with
//! figment and translated into `satlink_core::CoreConfig`. Nested keys use a
//! double underscore in the environment (`SATLINK_SOURCE__URL`,
//! `SATLINK_DEFAULTS__POLL_INTERVAL_MS`).

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use satlink_core::{CoreConfig, OverrideStrings, PollConfig, SourceConfig, TlsVerification};

/// Environment variable naming an alternate config file.
pub const CONFIG_PATH_ENV: &str = "SATLINK_CONFIG";

const ENV_PREFIX: &str = "SATLINK_";

// ── Error ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error("no satellite source configured")]
    NoSource,

    #[error("failed to serialize config: {0}")]
    Serialization(#[from] toml::ser::Error),

    #[error("config loading failed: {0}")]
    Figment(Box<figment::Error>),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

// ── TOML config structs ─────────────────────────────────────────────

/// Top-level TOML configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Config {
    /// Global defaults.
    #[serde(default)]
    pub defaults: Defaults,

    /// Where satellite data comes from.
    #[serde(default)]
    pub source: Source,

    /// Fixed seed for position selection.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rng_seed: Option<u64>,

    /// Label and message overrides keyed by `snake_case` string key.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub strings: BTreeMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Defaults {
    #[serde(default = "default_output")]
    pub output: String,

    #[serde(default = "default_color")]
    pub color: String,

    /// HTTP request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout: u64,

    /// Delay between position ticks.
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            output: default_output(),
            color: default_color(),
            timeout: default_timeout(),
            poll_interval_ms: default_poll_interval_ms(),
        }
    }
}

fn default_output() -> String {
    "table".into()
}
fn default_color() -> String {
    "auto".into()
}
fn default_timeout() -> u64 {
    30
}
fn default_poll_interval_ms() -> u64 {
    3000
}

/// Data source. Exactly one of `url` and `assets_dir` must be set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Source {
    /// Base URL of the satellite REST service.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Directory holding `satellite-list.json`, `satellite-detail.json`,
    /// and `positions.json`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assets_dir: Option<PathBuf>,

    /// Accept invalid TLS certificates.
    #[serde(default)]
    pub insecure: bool,

    /// Path to custom CA certificate.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ca_cert: Option<PathBuf>,
}

// ── Config file path ────────────────────────────────────────────────

/// Resolve the config file path: `SATLINK_CONFIG` if set, otherwise the
/// platform config directory.
pub fn config_path() -> PathBuf {
    if let Some(path) = std::env::var_os(CONFIG_PATH_ENV).filter(|p| !p.is_empty()) {
        return PathBuf::from(path);
    }
    ProjectDirs::from("dev", "satlink", "satlink").map_or_else(
        || {
            let mut p = dirs_fallback();
            p.push("config.toml");
            p
        },
        |dirs| dirs.config_dir().join("config.toml"),
    )
}

fn dirs_fallback() -> PathBuf {
    let mut p = PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".into()));
    p.push(".config");
    p.push("satlink");
    p
}

// ── Config loading ──────────────────────────────────────────────────

/// Load the full Config from the canonical file + environment.
pub fn load_config() -> Result<Config, ConfigError> {
    load_config_from(&config_path())
}

/// Load from `path` + environment. A missing file yields the defaults.
pub fn load_config_from(path: &Path) -> Result<Config, ConfigError> {
    debug!(path = %path.display(), "loading config");

    let figment = Figment::new()
        .merge(Serialized::defaults(Config::default()))
        .merge(Toml::file(path))
        .merge(Env::prefixed(ENV_PREFIX).ignore(&["config"]).split("__"));

    let config: Config = figment.extract()?;
    Ok(config)
}

// ── Config saving ───────────────────────────────────────────────────

/// Serialize config to TOML and write to the canonical config path.
pub fn save_config(cfg: &Config) -> Result<PathBuf, ConfigError> {
    let path = config_path();
    save_config_to(cfg, &path)?;
    Ok(path)
}

pub fn save_config_to(cfg: &Config, path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let toml_str = toml::to_string_pretty(cfg)?;
    std::fs::write(path, toml_str)?;
    Ok(())
}

// ── Translation ─────────────────────────────────────────────────────

impl Config {
    /// Build the runtime config.
    pub fn to_core_config(&self) -> Result<CoreConfig, ConfigError> {
        Ok(CoreConfig {
            source: self.source_config()?,
            poll: self.poll_config()?,
        })
    }

    pub fn source_config(&self) -> Result<SourceConfig, ConfigError> {
        let source = &self.source;
        match (&source.url, &source.assets_dir) {
            (Some(_), Some(_)) => Err(ConfigError::Validation {
                field: "source".into(),
                reason: "set either url or assets_dir, not both".into(),
            }),
            (Some(raw), None) => {
                let url: url::Url = raw.parse().map_err(|_| ConfigError::Validation {
                    field: "source.url".into(),
                    reason: format!("invalid URL: {raw}"),
                })?;

                let tls = if source.insecure {
                    TlsVerification::DangerAcceptInvalid
                } else if let Some(ref ca_path) = source.ca_cert {
                    TlsVerification::CustomCa(ca_path.clone())
                } else {
                    TlsVerification::SystemDefaults
                };

                Ok(SourceConfig::Http {
                    url,
                    timeout: Duration::from_secs(self.defaults.timeout),
                    tls,
                })
            }
            (None, Some(dir)) => Ok(SourceConfig::Assets { dir: dir.clone() }),
            (None, None) => Err(ConfigError::NoSource),
        }
    }

    pub fn poll_config(&self) -> Result<PollConfig, ConfigError> {
        if self.defaults.poll_interval_ms == 0 {
            return Err(ConfigError::Validation {
                field: "defaults.poll_interval_ms".into(),
                reason: "must be greater than zero".into(),
            });
        }
        Ok(PollConfig {
            interval: Duration::from_millis(self.defaults.poll_interval_ms),
            rng_seed: self.rng_seed,
        })
    }

    /// The `[strings]` table as a provider, plus any keys it did not
    /// recognise.
    pub fn string_overrides(&self) -> (OverrideStrings, Vec<String>) {
        OverrideStrings::from_named(&self.strings)
    }
}
