//! Tri-state result of an asynchronous load.

use std::fmt;

use serde::Serialize;

const FALLBACK_CAUSE: &str = "unknown error";

/// Human-readable cause carried by [`ResourceState::Error`]. Never blank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ErrorInfo(String);

impl ErrorInfo {
    /// Returns `None` when `message` is empty or whitespace.
    pub fn new(message: impl Into<String>) -> Option<Self> {
        let message = message.into();
        if message.trim().is_empty() {
            None
        } else {
            Some(Self(message))
        }
    }

    /// Like [`new`](Self::new), substituting a generic cause for blank input.
    pub fn or_default(message: impl Into<String>) -> Self {
        Self::new(message).unwrap_or_else(|| Self(FALLBACK_CAUSE.to_owned()))
    }

    pub fn message(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ErrorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Progress of one load cycle: `Loading`, then exactly one of `Success` or
/// `Error`. Values are replaced, never mutated.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", content = "value", rename_all = "snake_case")]
pub enum ResourceState<T> {
    Loading,
    Success(T),
    Error(ErrorInfo),
}

impl<T> ResourceState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Whether the cycle has reached `Success` or `Error`.
    pub fn is_terminal(&self) -> bool {
        !self.is_loading()
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            Self::Success(v) => Some(v),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&ErrorInfo> {
        match self {
            Self::Error(e) => Some(e),
            _ => None,
        }
    }
}
