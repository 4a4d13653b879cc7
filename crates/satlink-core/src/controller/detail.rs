// ── Detail load controller ──
//
// One cycle: Loading → fetch detail → Error (terminal) or Success →
// view model → position polling until the cycle is cancelled.

use std::sync::Arc;

use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use super::cycle::CycleSlot;
use super::poller::PositionPoller;
use crate::config::PollConfig;
use crate::error::CoreError;
use crate::format::{DetailViewModel, PositionDisplay};
use crate::model::Detail;
use crate::port::RemoteDataPort;
use crate::resource::{ErrorInfo, ResourceState};
use crate::select::rng_from_seed;
use crate::strings::{StringKey, StringProvider};
use crate::stream::{CycleGuard, Publisher, Signal};

pub type DetailState = ResourceState<Arc<Detail>>;

#[derive(Clone)]
struct DetailOutputs {
    state: Publisher<DetailState>,
    view_model: Publisher<Arc<DetailViewModel>>,
    position: Publisher<PositionDisplay>,
}

struct DetailInner {
    port: Arc<dyn RemoteDataPort>,
    strings: Arc<dyn StringProvider>,
    poll: PollConfig,
    outputs: DetailOutputs,
    slot: CycleSlot,
}

/// Loads one satellite's detail and then keeps its live position fresh.
///
/// Cheaply cloneable. Three outputs, each with a single producer:
/// [`state`](Self::state), [`view_model`](Self::view_model), and
/// [`position`](Self::position).
///
/// Every cycle runs on a child of the `scope` token passed to
/// [`new`](Self::new). Cancelling that token or calling
/// [`shutdown`](Self::shutdown) ends polling until the next
/// [`start`](Self::start); dropping the last clone ends it for good.
#[derive(Clone)]
pub struct DetailLoadController {
    inner: Arc<DetailInner>,
}

impl DetailLoadController {
    pub fn new(
        port: Arc<dyn RemoteDataPort>,
        strings: Arc<dyn StringProvider>,
        poll: PollConfig,
        scope: &CancellationToken,
    ) -> Self {
        Self {
            inner: Arc::new(DetailInner {
                port,
                strings,
                poll,
                outputs: DetailOutputs {
                    state: Publisher::new(),
                    view_model: Publisher::new(),
                    position: Publisher::new(),
                },
                slot: CycleSlot::new(scope),
            }),
        }
    }

    // ── Lifecycle ────────────────────────────────────────────────

    /// Begin a load cycle for `id`, ending any cycle already running.
    ///
    /// `Loading` is published before this returns; view model and position
    /// are cleared. The fetch and the polling that follows run on a spawned
    /// task, so this must be called from within a Tokio runtime. After
    /// [`shutdown`](Self::shutdown) or scope cancellation the controller is
    /// re-armed and the cycle starts as usual.
    pub fn start(&self, id: impl Into<String>) {
        let id = id.into();
        let inner = &self.inner;

        inner.slot.restart(|guard, cancel| {
            inner.outputs.view_model.clear();
            inner.outputs.position.clear();
            inner.outputs.state.publish(ResourceState::Loading);
            info!(%id, "detail load started");

            let cycle = DetailCycle {
                port: Arc::clone(&inner.port),
                strings: Arc::clone(&inner.strings),
                poll: inner.poll.clone(),
                outputs: inner.outputs.clone(),
                guard,
                id,
            };
            tokio::spawn(cycle.run(cancel))
        });
    }

    /// End the running cycle. Outputs keep their last values.
    pub fn stop(&self) {
        self.inner.slot.stop();
        debug!("detail cycle stopped");
    }

    /// Cancel the controller scope and wait for the cycle task to exit.
    pub async fn shutdown(&self) {
        self.inner.slot.shutdown().await;
        debug!("detail controller shut down");
    }

    /// Whether a cycle task is still alive (loading or polling).
    pub fn is_running(&self) -> bool {
        self.inner.slot.is_running()
    }

    // ── Outputs ──────────────────────────────────────────────────

    pub fn state(&self) -> Signal<DetailState> {
        self.inner.outputs.state.subscribe()
    }

    pub fn view_model(&self) -> Signal<Arc<DetailViewModel>> {
        self.inner.outputs.view_model.subscribe()
    }

    pub fn position(&self) -> Signal<PositionDisplay> {
        self.inner.outputs.position.subscribe()
    }

    pub fn current_state(&self) -> Option<DetailState> {
        self.inner.outputs.state.current()
    }
}

// ── Cycle task ───────────────────────────────────────────────────

struct DetailCycle {
    port: Arc<dyn RemoteDataPort>,
    strings: Arc<dyn StringProvider>,
    poll: PollConfig,
    outputs: DetailOutputs,
    guard: CycleGuard,
    id: String,
}

impl DetailCycle {
    async fn run(self, cancel: CancellationToken) {
        let fetched = tokio::select! {
            biased;
            () = cancel.cancelled() => return,
            result = self.port.fetch_detail(&self.id) => result,
        };

        let Some(detail) = self.resolve(fetched) else {
            let cause = ErrorInfo::or_default(self.strings.get(StringKey::DetailUnavailable));
            self.outputs
                .state
                .publish_for(&self.guard, ResourceState::Error(cause));
            return;
        };

        let detail = Arc::new(detail);
        let published = self
            .outputs
            .state
            .publish_for(&self.guard, ResourceState::Success(Arc::clone(&detail)));
        if !published {
            return;
        }

        let view_model = DetailViewModel::build(&detail, &*self.strings);
        self.outputs
            .view_model
            .publish_for(&self.guard, Arc::new(view_model));
        info!(id = %self.id, "detail loaded, polling positions");

        let poller = PositionPoller::new(
            Arc::clone(&self.port),
            Arc::clone(&self.strings),
            self.poll.interval,
            rng_from_seed(self.poll.rng_seed),
        )
        .with_output(self.outputs.position.clone(), self.guard.clone());

        poller.run(&self.id, &cancel).await;
    }

    /// Collapse every failure mode into "no detail".
    fn resolve(&self, fetched: Result<Option<Detail>, CoreError>) -> Option<Detail> {
        match fetched {
            Ok(Some(detail)) if detail.resolved_id().is_some() => Some(detail),
            Ok(Some(_)) => {
                warn!(id = %self.id, "detail record has no identifier");
                None
            }
            Ok(None) => {
                debug!(id = %self.id, "detail not found");
                None
            }
            Err(e) => {
                warn!(id = %self.id, error = %e, "detail fetch failed");
                None
            }
        }
    }
}
