// ── Catalogue load controller ──
//
// Single-shot: Loading → Success(list) | Error(cause). No polling, no retry.

use std::sync::Arc;

use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use super::cycle::CycleSlot;
use crate::model::Satellite;
use crate::port::RemoteDataPort;
use crate::resource::{ErrorInfo, ResourceState};
use crate::strings::{StringKey, StringProvider};
use crate::stream::{CycleGuard, Publisher, Signal};

pub type ListState = ResourceState<Arc<Vec<Satellite>>>;

struct ListInner {
    port: Arc<dyn RemoteDataPort>,
    strings: Arc<dyn StringProvider>,
    state: Publisher<ListState>,
    slot: CycleSlot,
}

/// Loads the satellite catalogue once per [`start`](Self::start).
#[derive(Clone)]
pub struct ListLoadController {
    inner: Arc<ListInner>,
}

impl ListLoadController {
    pub fn new(
        port: Arc<dyn RemoteDataPort>,
        strings: Arc<dyn StringProvider>,
        scope: &CancellationToken,
    ) -> Self {
        Self {
            inner: Arc::new(ListInner {
                port,
                strings,
                state: Publisher::new(),
                slot: CycleSlot::new(scope),
            }),
        }
    }

    /// Publish `Loading` and fetch the catalogue on a spawned task.
    /// Must be called from within a Tokio runtime. A start after
    /// [`shutdown`](Self::shutdown) loads again from scratch.
    pub fn start(&self) {
        let inner = &self.inner;

        inner.slot.restart(|guard, cancel| {
            inner.state.publish(ResourceState::Loading);
            info!("catalogue load started");
            tokio::spawn(fetch_catalogue(
                Arc::clone(&inner.port),
                Arc::clone(&inner.strings),
                inner.state.clone(),
                guard,
                cancel,
            ))
        });
    }

    /// Start a cycle and wait for its outcome.
    pub async fn load(&self) -> Option<ListState> {
        let mut state = self.state();
        self.start();
        state.wait_for(ResourceState::is_terminal).await
    }

    pub fn stop(&self) {
        self.inner.slot.stop();
    }

    pub async fn shutdown(&self) {
        self.inner.slot.shutdown().await;
    }

    pub fn state(&self) -> Signal<ListState> {
        self.inner.state.subscribe()
    }

    pub fn current_state(&self) -> Option<ListState> {
        self.inner.state.current()
    }
}

async fn fetch_catalogue(
    port: Arc<dyn RemoteDataPort>,
    strings: Arc<dyn StringProvider>,
    state: Publisher<ListState>,
    guard: CycleGuard,
    cancel: CancellationToken,
) {
    let fetched = tokio::select! {
        biased;
        () = cancel.cancelled() => return,
        result = port.fetch_list() => result,
    };

    let next = match fetched {
        Ok(Some(list)) => {
            debug!(count = list.len(), "catalogue loaded");
            ResourceState::Success(Arc::new(list))
        }
        Ok(None) => ResourceState::Error(ErrorInfo::or_default(
            strings.get(StringKey::ListUnavailable),
        )),
        Err(e) => {
            warn!(error = %e, "catalogue fetch failed");
            ResourceState::Error(ErrorInfo::or_default(e.to_string()))
        }
    };

    state.publish_for(&guard, next);
}
