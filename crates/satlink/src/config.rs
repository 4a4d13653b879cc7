//! CLI-aware wrappers around `satlink_config`.
//!
//! Loads the file + environment config, then lays the global flags on top.

use clap::ValueEnum;
use tracing::warn;

pub use satlink_config::{Config, config_path, load_config, save_config};
use satlink_core::{CoreConfig, OverrideStrings};

use crate::cli::{ColorMode, GlobalOpts, OutputFormat};
use crate::error::CliError;

/// Everything a command needs after config and flags are merged.
pub struct Resolved {
    pub core: CoreConfig,
    pub strings: OverrideStrings,
    pub output: OutputFormat,
    pub color: ColorMode,
}

/// Load the config and apply flag overrides.
pub fn load_with_overrides(global: &GlobalOpts) -> Result<Config, CliError> {
    let mut cfg = load_config()?;
    apply_overrides(&mut cfg, global);
    Ok(cfg)
}

/// Global flags win over file and environment values. A source flag
/// replaces the configured source outright.
pub fn apply_overrides(cfg: &mut Config, global: &GlobalOpts) {
    if let Some(ref url) = global.url {
        cfg.source.url = Some(url.clone());
        cfg.source.assets_dir = None;
    }
    if let Some(ref dir) = global.assets {
        cfg.source.assets_dir = Some(dir.clone());
        cfg.source.url = None;
    }
    if global.insecure {
        cfg.source.insecure = true;
    }
    if let Some(timeout) = global.timeout {
        cfg.defaults.timeout = timeout;
    }
    if let Some(interval) = global.interval_ms {
        cfg.defaults.poll_interval_ms = interval;
    }
    if global.seed.is_some() {
        cfg.rng_seed = global.seed;
    }
}

/// Resolve everything a data command needs.
pub fn resolve(global: &GlobalOpts) -> Result<Resolved, CliError> {
    let cfg = load_with_overrides(global)?;
    let core = cfg.to_core_config()?;

    let (strings, unknown) = cfg.string_overrides();
    for key in unknown {
        warn!(key, "ignoring unknown [strings] key");
    }

    Ok(Resolved {
        core,
        strings,
        output: output_format(global, &cfg),
        color: color_mode(global, &cfg),
    })
}

pub fn output_format(global: &GlobalOpts, cfg: &Config) -> OutputFormat {
    global.output.unwrap_or_else(|| {
        OutputFormat::from_str(&cfg.defaults.output, true).unwrap_or_else(|_| {
            warn!(value = %cfg.defaults.output, "unknown default output format; using table");
            OutputFormat::Table
        })
    })
}

pub fn color_mode(global: &GlobalOpts, cfg: &Config) -> ColorMode {
    global.color.unwrap_or_else(|| {
        ColorMode::from_str(&cfg.defaults.color, true).unwrap_or(ColorMode::Auto)
    })
}
