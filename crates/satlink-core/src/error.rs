// ── Core error types ──
//
// Errors surfaced by satlink-core. Consumers never see reqwest or serde
// errors directly; the `From<satlink_api::Error>` impl translates
// source-layer failures into domain-appropriate variants.

use thiserror::Error;

/// Unified error type for the core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Source errors ────────────────────────────────────────────────
    #[error("Cannot reach satellite service at {url}: {reason}")]
    ConnectionFailed { url: String, reason: String },

    #[error(
        "Request timed out{}",
        .timeout_secs.map(|s| format!(" after {s}s")).unwrap_or_default()
    )]
    Timeout {
        /// The configured limit, when the failing source knows it.
        timeout_secs: Option<u64>,
    },

    #[error("Satellite service error: {message}")]
    Api {
        message: String,
        /// HTTP status code (if applicable).
        status: Option<u16>,
    },

    #[error("Malformed satellite data: {message}")]
    Data { message: String },

    #[error("Cannot read satellite assets: {message}")]
    Io { message: String },

    // ── Configuration errors ─────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Config { message: String },

    // ── Internal errors ──────────────────────────────────────────────
    #[error("Internal error: {0}")]
    Internal(String),
}

// ── Conversion from source-layer errors ──────────────────────────────

impl From<satlink_api::Error> for CoreError {
    fn from(err: satlink_api::Error) -> Self {
        match err {
            satlink_api::Error::Transport(ref e) => {
                if e.is_timeout() {
                    CoreError::Timeout { timeout_secs: None }
                } else if e.is_connect() {
                    CoreError::ConnectionFailed {
                        url: e
                            .url()
                            .map_or_else(|| "<unknown>".into(), ToString::to_string),
                        reason: e.to_string(),
                    }
                } else {
                    CoreError::Api {
                        message: e.to_string(),
                        status: e.status().map(|s| s.as_u16()),
                    }
                }
            }
            satlink_api::Error::InvalidUrl(e) => CoreError::Config {
                message: format!("Invalid URL: {e}"),
            },
            satlink_api::Error::InvalidBaseUrl(url) => CoreError::Config {
                message: format!("URL cannot be used as an API base: {url}"),
            },
            satlink_api::Error::Tls(msg) => CoreError::ConnectionFailed {
                url: String::new(),
                reason: format!("TLS error: {msg}"),
            },
            satlink_api::Error::Http { status, body } => CoreError::Api {
                message: if body.trim().is_empty() {
                    format!("HTTP {status}")
                } else {
                    body
                },
                status: Some(status),
            },
            satlink_api::Error::Io { path, source } => CoreError::Io {
                message: format!("{}: {source}", path.display()),
            },
            satlink_api::Error::Deserialization { message, body: _ } => {
                CoreError::Data { message }
            }
        }
    }
}
