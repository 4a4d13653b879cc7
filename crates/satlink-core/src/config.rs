// ── Runtime configuration ──
//
// These types describe *where* satellite data comes from and how the live
// position poller behaves. They never touch disk: the CLI (via
// satlink-config) builds a `CoreConfig` and hands it in.

use std::path::PathBuf;
use std::time::Duration;

use url::Url;

/// Delay between the end of one position tick and the start of the next.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(3000);

/// TLS verification strategy for the HTTP source.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TlsVerification {
    /// System CA store (strict).
    #[default]
    SystemDefaults,
    /// Custom CA certificate file.
    CustomCa(PathBuf),
    /// Skip verification (self-signed test servers).
    DangerAcceptInvalid,
}

/// Where satellite data is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceConfig {
    /// REST service rooted at `url`.
    Http {
        url: Url,
        timeout: Duration,
        tls: TlsVerification,
    },
    /// Directory holding the bundled JSON assets.
    Assets { dir: PathBuf },
}

/// Live position polling behaviour.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PollConfig {
    /// Fixed wait between ticks. Ticks never overlap.
    pub interval: Duration,
    /// Seed for position selection. `None` draws from OS entropy.
    pub rng_seed: Option<u64>,
}

impl Default for PollConfig {
    fn default() -> Self {
        Self {
            interval: DEFAULT_POLL_INTERVAL,
            rng_seed: None,
        }
    }
}

/// Everything a [`Session`](crate::Session) needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoreConfig {
    pub source: SourceConfig,
    pub poll: PollConfig,
}

impl CoreConfig {
    /// Config reading from an asset directory with default polling.
    pub fn assets(dir: impl Into<PathBuf>) -> Self {
        Self {
            source: SourceConfig::Assets { dir: dir.into() },
            poll: PollConfig::default(),
        }
    }

    /// Config reading from a REST service with default polling.
    pub fn http(url: Url) -> Self {
        Self {
            source: SourceConfig::Http {
                url,
                timeout: Duration::from_secs(30),
                tls: TlsVerification::default(),
            },
            poll: PollConfig::default(),
        }
    }
}
