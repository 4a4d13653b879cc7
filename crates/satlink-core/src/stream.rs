// ── Latest-wins output channels ──
//
// Each controller output is a `watch` channel holding `Option<T>`: `None`
// until the first value of a cycle is published. `Publisher` is the single
// producer side, `Signal` the subscription handed to consumers.

use std::pin::Pin;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::task::{Context, Poll, ready};

use futures_core::Stream;
use tokio::sync::watch;
use tokio_stream::wrappers::WatchStream;

// ── Cycle guard ──────────────────────────────────────────────────────

/// Ties a publish to one load cycle. Starting a new cycle bumps the shared
/// generation, after which publishes from older cycles are dropped.
#[derive(Debug, Clone)]
pub(crate) struct CycleGuard {
    generation: Arc<AtomicU64>,
    mine: u64,
}

impl CycleGuard {
    pub(crate) fn new(generation: Arc<AtomicU64>, mine: u64) -> Self {
        Self { generation, mine }
    }

    /// A guard nobody will ever supersede.
    pub(crate) fn standalone() -> Self {
        Self::new(Arc::new(AtomicU64::new(0)), 0)
    }

    pub(crate) fn is_current(&self) -> bool {
        self.generation.load(Ordering::Acquire) == self.mine
    }
}

// ── Publisher ────────────────────────────────────────────────────────

#[derive(Debug)]
pub(crate) struct Publisher<T> {
    tx: Arc<watch::Sender<Option<T>>>,
}

impl<T> Clone for Publisher<T> {
    fn clone(&self) -> Self {
        Self {
            tx: Arc::clone(&self.tx),
        }
    }
}

impl<T: Clone + Send + Sync + 'static> Publisher<T> {
    pub(crate) fn new() -> Self {
        let (tx, _) = watch::channel(None);
        Self { tx: Arc::new(tx) }
    }

    /// Publish unconditionally. Works with zero subscribers.
    pub(crate) fn publish(&self, value: T) {
        self.tx.send_replace(Some(value));
    }

    /// Publish only while `guard`'s cycle is still the current one. The
    /// check runs under the channel lock, so a cycle restart cannot slip in
    /// between check and write.
    pub(crate) fn publish_for(&self, guard: &CycleGuard, value: T) -> bool {
        let mut value = Some(value);
        self.tx.send_if_modified(|slot| {
            if guard.is_current() {
                *slot = value.take();
                true
            } else {
                false
            }
        })
    }

    pub(crate) fn clear(&self) {
        self.tx.send_replace(None);
    }

    pub(crate) fn current(&self) -> Option<T> {
        self.tx.borrow().clone()
    }

    pub(crate) fn subscribe(&self) -> Signal<T> {
        Signal::new(self.tx.subscribe())
    }
}

// ── Signal ───────────────────────────────────────────────────────────

/// A subscription to one controller output.
///
/// Only the latest value is retained: a slow consumer may skip
/// intermediate values but always converges on the newest one.
#[derive(Debug, Clone)]
pub struct Signal<T> {
    receiver: watch::Receiver<Option<T>>,
}

impl<T: Clone + Send + Sync + 'static> Signal<T> {
    pub(crate) fn new(receiver: watch::Receiver<Option<T>>) -> Self {
        Self { receiver }
    }

    /// The latest value, or `None` if nothing has been published this cycle.
    pub fn current(&self) -> Option<T> {
        self.receiver.borrow().clone()
    }

    /// Wait for the next published value, skipping cycle resets.
    /// Returns `None` once the producing controller is gone.
    pub async fn changed(&mut self) -> Option<T> {
        loop {
            self.receiver.changed().await.ok()?;
            if let Some(value) = self.receiver.borrow_and_update().clone() {
                return Some(value);
            }
        }
    }

    /// Wait until the current value satisfies `predicate`, checking the
    /// current value first.
    pub async fn wait_for(&mut self, mut predicate: impl FnMut(&T) -> bool) -> Option<T> {
        let value = self
            .receiver
            .wait_for(|v| v.as_ref().is_some_and(&mut predicate))
            .await
            .ok()?;
        value.clone()
    }

    /// Convert into a `Stream` yielding the current value (if any) and then
    /// every subsequent one.
    pub fn into_stream(self) -> SignalStream<T> {
        SignalStream {
            inner: WatchStream::new(self.receiver),
        }
    }
}

/// `Stream` adapter backed by a `watch::Receiver`.
pub struct SignalStream<T> {
    inner: WatchStream<Option<T>>,
}

impl<T: Clone + Send + Sync + 'static> Stream for SignalStream<T> {
    type Item = T;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        loop {
            match ready!(Pin::new(&mut self.inner).poll_next(cx)) {
                Some(Some(value)) => return Poll::Ready(Some(value)),
                Some(None) => {}
                None => return Poll::Ready(None),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn publish_without_subscribers_is_kept() {
        let publisher = Publisher::new();
        publisher.publish(5_u8);
        assert_eq!(publisher.current(), Some(5));
        assert_eq!(publisher.subscribe().current(), Some(5));
    }

    #[test]
    fn stale_guard_cannot_publish() {
        let generation = Arc::new(AtomicU64::new(1));
        let old = CycleGuard::new(Arc::clone(&generation), 1);
        let publisher = Publisher::new();

        assert!(publisher.publish_for(&old, 1_u8));
        generation.store(2, Ordering::Release);
        assert!(!publisher.publish_for(&old, 2_u8));
        assert_eq!(publisher.current(), Some(1));
    }

    #[tokio::test]
    async fn changed_skips_resets() {
        let publisher = Publisher::new();
        let mut signal = publisher.subscribe();

        publisher.clear();
        publisher.publish(9_u8);
        assert_eq!(signal.changed().await, Some(9));
    }

    #[tokio::test]
    async fn changed_ends_with_publisher() {
        let publisher: Publisher<u8> = Publisher::new();
        let mut signal = publisher.subscribe();
        drop(publisher);
        assert_eq!(signal.changed().await, None);
    }
}
