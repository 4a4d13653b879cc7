//! CLI error types with miette diagnostics.
//!
//! Maps `CoreError` and `ConfigError` into user-facing errors with
//! actionable help text.

use miette::Diagnostic;
use thiserror::Error;

use satlink_config::ConfigError;
use satlink_core::CoreError;

pub mod exit_code {
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const NOT_FOUND: i32 = 4;
    pub const CONNECTION: i32 = 7;
    pub const TIMEOUT: i32 = 8;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Source ───────────────────────────────────────────────────────
    #[error("No satellite source configured")]
    #[diagnostic(
        code(satlink::no_source),
        help(
            "Pass --url <URL> or --assets <DIR>, or create a config with:\n\
             satlink --assets <DIR> config init\n\
             Expected at: {path}"
        )
    )]
    NoSource { path: String },

    #[error("Could not reach satellite service at {url}")]
    #[diagnostic(
        code(satlink::connection_failed),
        help("Check that the service is running and the URL is correct.")
    )]
    ConnectionFailed { url: String, reason: String },

    #[error("Request timed out")]
    #[diagnostic(
        code(satlink::timeout),
        help("Increase the timeout with --timeout or check service responsiveness.")
    )]
    Timeout,

    #[error("Satellite service error: {message}")]
    #[diagnostic(code(satlink::api_error))]
    Api { message: String },

    #[error("Malformed satellite data: {message}")]
    #[diagnostic(
        code(satlink::data_error),
        help("Check the asset files or the service response format.")
    )]
    Data { message: String },

    // ── Load outcomes ────────────────────────────────────────────────
    #[error("Satellite '{id}': {message}")]
    #[diagnostic(
        code(satlink::detail_unavailable),
        help("Run: satlink list to see available satellites")
    )]
    DetailUnavailable { id: String, message: String },

    #[error("Satellite list: {message}")]
    #[diagnostic(code(satlink::list_unavailable))]
    ListUnavailable { message: String },

    // ── Validation ───────────────────────────────────────────────────
    #[error("Invalid value for {field}: {reason}")]
    #[diagnostic(code(satlink::validation))]
    Validation { field: String, reason: String },

    // ── Configuration ────────────────────────────────────────────────
    #[error(transparent)]
    #[diagnostic(code(satlink::config))]
    Config(ConfigError),

    #[error("Internal error: {0}")]
    #[diagnostic(code(satlink::internal))]
    Internal(String),

    // ── IO / Serialization ───────────────────────────────────────────
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Failed to render output: {0}")]
    #[diagnostic(code(satlink::render))]
    Render(String),
}

impl CliError {
    /// Map this error to an exit code for process termination.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ConnectionFailed { .. } => exit_code::CONNECTION,
            Self::Timeout => exit_code::TIMEOUT,
            Self::DetailUnavailable { .. } => exit_code::NOT_FOUND,
            Self::Validation { .. } => exit_code::USAGE,
            _ => exit_code::GENERAL,
        }
    }
}

// ── CoreError → CliError mapping ─────────────────────────────────────

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::ConnectionFailed { url, reason } => CliError::ConnectionFailed { url, reason },
            CoreError::Timeout { .. } => CliError::Timeout,
            CoreError::Api { message, status: _ } => CliError::Api { message },
            CoreError::Data { message } => CliError::Data { message },
            CoreError::Io { message } => CliError::Io(std::io::Error::other(message)),
            CoreError::Config { message } => CliError::Validation {
                field: "config".into(),
                reason: message,
            },
            CoreError::Internal(message) => CliError::Internal(message),
        }
    }
}

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::NoSource => CliError::NoSource {
                path: satlink_config::config_path().display().to_string(),
            },
            ConfigError::Validation { field, reason } => CliError::Validation { field, reason },
            other => CliError::Config(other),
        }
    }
}
