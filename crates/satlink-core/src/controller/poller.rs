// ── Live position polling ──
//
// Fetch, pick one position at random, publish, wait, repeat. The loop has
// no terminal state: an absent, empty, or failed tick publishes nothing and
// the next tick runs on schedule. Only cancellation ends it.

use std::sync::Arc;
use std::time::Duration;

use rand::RngCore;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use crate::error::CoreError;
use crate::format::PositionDisplay;
use crate::model::PositionSet;
use crate::port::RemoteDataPort;
use crate::select::pick_position;
use crate::strings::StringProvider;
use crate::stream::{CycleGuard, Publisher, Signal};

/// Unbounded, cancellable position refresh loop for one satellite.
pub struct PositionPoller {
    port: Arc<dyn RemoteDataPort>,
    strings: Arc<dyn StringProvider>,
    interval: Duration,
    rng: Box<dyn RngCore + Send>,
    output: Publisher<PositionDisplay>,
    guard: CycleGuard,
}

impl PositionPoller {
    /// A poller with its own output. `rng` decides which position of each
    /// set is shown; pass a seeded generator for reproducible picks.
    pub fn new(
        port: Arc<dyn RemoteDataPort>,
        strings: Arc<dyn StringProvider>,
        interval: Duration,
        rng: Box<dyn RngCore + Send>,
    ) -> Self {
        Self {
            port,
            strings,
            interval,
            rng,
            output: Publisher::new(),
            guard: CycleGuard::standalone(),
        }
    }

    /// Publish into a controller-owned output on behalf of one cycle.
    pub(crate) fn with_output(mut self, output: Publisher<PositionDisplay>, guard: CycleGuard) -> Self {
        self.output = output;
        self.guard = guard;
        self
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Subscribe to the displayed position.
    pub fn subscribe(&self) -> Signal<PositionDisplay> {
        self.output.subscribe()
    }

    /// Poll `id` until `cancel` fires.
    ///
    /// The wait starts after a tick finishes, so ticks never overlap and a
    /// slow fetch pushes later ticks back rather than piling them up.
    pub async fn run(mut self, id: &str, cancel: &CancellationToken) {
        debug!(
            id,
            interval_ms = u64::try_from(self.interval.as_millis()).unwrap_or(u64::MAX),
            "position polling started"
        );

        loop {
            let fetched = tokio::select! {
                biased;
                () = cancel.cancelled() => break,
                result = self.port.fetch_positions(id) => result,
            };

            self.tick(id, fetched);

            tokio::select! {
                biased;
                () = cancel.cancelled() => break,
                () = tokio::time::sleep(self.interval) => {}
            }
        }

        debug!(id, "position polling cancelled");
    }

    /// Spawn [`run`](Self::run) as a task owning its inputs.
    pub fn spawn(self, id: String, cancel: CancellationToken) -> JoinHandle<()> {
        tokio::spawn(async move { self.run(&id, &cancel).await })
    }

    /// Apply one fetch result. Returns the display it published, if any.
    pub fn tick(
        &mut self,
        id: &str,
        fetched: Result<Option<PositionSet>, CoreError>,
    ) -> Option<PositionDisplay> {
        let set = match fetched {
            Ok(Some(set)) => set,
            Ok(None) => {
                debug!(id, "no positions this tick");
                return None;
            }
            Err(e) => {
                warn!(id, error = %e, "positions fetch failed");
                return None;
            }
        };

        let Some(position) = pick_position(&set.positions, &mut *self.rng).copied() else {
            debug!(id, "empty position set");
            return None;
        };

        let display = PositionDisplay::build(position, &*self.strings);
        self.output
            .publish_for(&self.guard, display.clone())
            .then_some(display)
    }
}
