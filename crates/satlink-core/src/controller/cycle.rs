// ── Load-cycle bookkeeping ──
//
// A controller runs at most one load cycle at a time. Each cycle gets a
// child token of the controller's scope and a fresh generation number;
// restarting or stopping bumps the generation so late publishes from the
// previous cycle are discarded. A torn-down scope is re-armed by the next
// restart.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::stream::CycleGuard;

struct Running {
    cancel: CancellationToken,
    handle: JoinHandle<()>,
}

struct SlotState {
    scope: CancellationToken,
    running: Option<Running>,
}

pub(crate) struct CycleSlot {
    parent: CancellationToken,
    generation: Arc<AtomicU64>,
    state: Mutex<SlotState>,
}

impl CycleSlot {
    /// The slot's scope is a child of `parent`: cancelling the parent ends
    /// every cycle, dropping the slot ends only this controller's.
    pub(crate) fn new(parent: &CancellationToken) -> Self {
        Self {
            parent: parent.clone(),
            generation: Arc::new(AtomicU64::new(0)),
            state: Mutex::new(SlotState {
                scope: parent.child_token(),
                running: None,
            }),
        }
    }

    /// End the running cycle, if any, and start a new one.
    ///
    /// If the scope was torn down (shutdown or parent cancellation) a fresh
    /// one is created first. It hangs off the parent while the parent is
    /// live, otherwise it is a root of its own.
    ///
    /// `launch` runs under the slot lock with the new cycle's guard and
    /// token and must return the spawned cycle task.
    pub(crate) fn restart(
        &self,
        launch: impl FnOnce(CycleGuard, CancellationToken) -> JoinHandle<()>,
    ) {
        let mut state = lock(&self.state);
        if let Some(prev) = state.running.take() {
            prev.cancel.cancel();
        }

        if state.scope.is_cancelled() {
            state.scope = if self.parent.is_cancelled() {
                CancellationToken::new()
            } else {
                self.parent.child_token()
            };
            debug!(
                detached = self.parent.is_cancelled(),
                "cycle scope re-armed after teardown"
            );
        }

        let mine = self.generation.fetch_add(1, Ordering::AcqRel) + 1;
        let guard = CycleGuard::new(Arc::clone(&self.generation), mine);
        let cancel = state.scope.child_token();
        let handle = launch(guard, cancel.clone());

        state.running = Some(Running { cancel, handle });
    }

    /// Cancel the running cycle. Outputs keep their last values.
    pub(crate) fn stop(&self) {
        let mut state = lock(&self.state);
        self.generation.fetch_add(1, Ordering::AcqRel);
        if let Some(running) = state.running.take() {
            running.cancel.cancel();
        }
    }

    /// Cancel the scope and wait for the running cycle task to finish.
    pub(crate) async fn shutdown(&self) {
        let running = {
            let mut state = lock(&self.state);
            state.scope.cancel();
            self.generation.fetch_add(1, Ordering::AcqRel);
            state.running.take()
        };
        if let Some(running) = running {
            let _ = running.handle.await;
        }
    }

    pub(crate) fn is_running(&self) -> bool {
        lock(&self.state)
            .running
            .as_ref()
            .is_some_and(|r| !r.handle.is_finished())
    }
}

impl Drop for CycleSlot {
    fn drop(&mut self) {
        self.state
            .get_mut()
            .unwrap_or_else(PoisonError::into_inner)
            .scope
            .cancel();
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
