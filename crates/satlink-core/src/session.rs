// ── Session facade ──
//
// Owns the data port, the string table, polling settings, and the root
// cancellation token. Controllers handed out by a session all hang off
// that token, so `close` tears every one of them down at once. Dropping
// the session alone leaves its controllers running; each controller
// still stops when it is dropped itself.

use std::sync::Arc;

use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::config::{CoreConfig, PollConfig};
use crate::controller::{DetailLoadController, ListLoadController, PositionPoller};
use crate::error::CoreError;
use crate::port::{self, RemoteDataPort};
use crate::select::rng_from_seed;
use crate::strings::{DefaultStrings, StringProvider};

/// Entry point for consumers of the core.
pub struct Session {
    port: Arc<dyn RemoteDataPort>,
    strings: Arc<dyn StringProvider>,
    poll: PollConfig,
    scope: CancellationToken,
}

impl Session {
    /// Open the source described by `config` with the built-in strings.
    pub fn open(config: CoreConfig) -> Result<Self, CoreError> {
        let port = port::open_source(&config.source)?;
        Ok(Self::with_port(port, config.poll))
    }

    /// Wrap an existing port.
    pub fn with_port(port: Arc<dyn RemoteDataPort>, poll: PollConfig) -> Self {
        Self {
            port,
            strings: Arc::new(DefaultStrings),
            poll,
            scope: CancellationToken::new(),
        }
    }

    /// Replace the string table used by controllers created afterwards.
    #[must_use]
    pub fn with_strings(mut self, strings: Arc<dyn StringProvider>) -> Self {
        self.strings = strings;
        self
    }

    pub fn list_controller(&self) -> ListLoadController {
        ListLoadController::new(Arc::clone(&self.port), Arc::clone(&self.strings), &self.scope)
    }

    pub fn detail_controller(&self) -> DetailLoadController {
        DetailLoadController::new(
            Arc::clone(&self.port),
            Arc::clone(&self.strings),
            self.poll.clone(),
            &self.scope,
        )
    }

    /// A standalone poller using this session's port, strings, and settings.
    pub fn position_poller(&self) -> PositionPoller {
        PositionPoller::new(
            Arc::clone(&self.port),
            Arc::clone(&self.strings),
            self.poll.interval,
            rng_from_seed(self.poll.rng_seed),
        )
    }

    pub fn port(&self) -> &Arc<dyn RemoteDataPort> {
        &self.port
    }

    pub fn poll_config(&self) -> &PollConfig {
        &self.poll
    }

    /// Token every controller of this session is scoped to.
    pub fn scope(&self) -> &CancellationToken {
        &self.scope
    }

    /// Cancel every controller created by this session.
    pub fn close(&self) {
        debug!("closing session");
        self.scope.cancel();
    }
}
