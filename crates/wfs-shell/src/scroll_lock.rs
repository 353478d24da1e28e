//! Scroll suppression as a reference-counted resource guard.
//!
//! While the mobile sidebar is open, background scrolling is suppressed.
//! Suppression is a shared global resource, so it is modeled as a counted
//! lock: the sink is engaged when the first guard is acquired and restored
//! when the last guard drops, whichever exit path drops it.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Collaborator that actually suppresses and restores page scrolling.
pub trait ScrollSink: Send + Sync {
    /// Called when the first guard is acquired.
    fn suppress(&self);
    /// Called when the last guard is dropped.
    fn restore(&self);
}

/// Sink that does nothing. For headless rendering and tests.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullScrollSink;

impl ScrollSink for NullScrollSink {
    fn suppress(&self) {}
    fn restore(&self) {}
}

struct LockInner {
    holds: AtomicUsize,
    sink: Box<dyn ScrollSink>,
}

/// Shared, reference-counted scroll lock.
///
/// Clones share the same hold count and sink.
#[derive(Clone)]
pub struct ScrollLock {
    inner: Arc<LockInner>,
}

impl ScrollLock {
    /// Create a lock around the given sink.
    pub fn new(sink: impl ScrollSink + 'static) -> Self {
        Self {
            inner: Arc::new(LockInner {
                holds: AtomicUsize::new(0),
                sink: Box::new(sink),
            }),
        }
    }

    /// Acquire a hold, engaging the sink on the first one.
    #[must_use]
    pub fn acquire(&self) -> ScrollGuard {
        if self.inner.holds.fetch_add(1, Ordering::SeqCst) == 0 {
            self.inner.sink.suppress();
        }
        ScrollGuard {
            inner: Arc::clone(&self.inner),
        }
    }

    /// Number of live guards.
    #[must_use]
    pub fn holds(&self) -> usize {
        self.inner.holds.load(Ordering::SeqCst)
    }
}

impl Default for ScrollLock {
    fn default() -> Self {
        Self::new(NullScrollSink)
    }
}

/// Live hold on the scroll lock. Dropping it releases the hold.
pub struct ScrollGuard {
    inner: Arc<LockInner>,
}

impl Drop for ScrollGuard {
    fn drop(&mut self) {
        if self.inner.holds.fetch_sub(1, Ordering::SeqCst) == 1 {
            self.inner.sink.restore();
        }
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::CountingSink;
    use super::*;

    #[test]
    fn test_first_acquire_engages_sink_once() {
        let sink = CountingSink::default();
        let lock = ScrollLock::new(sink.clone());

        let _first = lock.acquire();
        let _second = lock.acquire();

        assert_eq!(sink.suppress_count(), 1);
        assert_eq!(lock.holds(), 2);
    }

    #[test]
    fn test_last_drop_restores_once() {
        let sink = CountingSink::default();
        let lock = ScrollLock::new(sink.clone());

        let first = lock.acquire();
        let second = lock.acquire();
        drop(first);
        assert_eq!(sink.restore_count(), 0);
        drop(second);

        assert_eq!(sink.restore_count(), 1);
        assert_eq!(lock.holds(), 0);
    }

    #[test]
    fn test_reacquire_after_release_engages_again() {
        let sink = CountingSink::default();
        let lock = ScrollLock::new(sink.clone());

        drop(lock.acquire());
        drop(lock.acquire());

        assert_eq!(sink.suppress_count(), 2);
        assert_eq!(sink.restore_count(), 2);
    }

    #[test]
    fn test_clones_share_the_count() {
        let sink = CountingSink::default();
        let lock = ScrollLock::new(sink.clone());
        let other = lock.clone();

        let _guard = lock.acquire();
        let _other_guard = other.acquire();

        assert_eq!(sink.suppress_count(), 1);
        assert_eq!(other.holds(), 2);
    }
}
