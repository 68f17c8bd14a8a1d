//! Viewport width and resize notifications.

use std::sync::atomic::{AtomicU32, AtomicU64, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;

/// Widths at or below this are compact (inclusive).
pub const COMPACT_BREAKPOINT: u32 = 768;

pub fn is_compact_width(width: u32, breakpoint: u32) -> bool {
    width <= breakpoint
}

/// Identifies a registered resize listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type ResizeListener = Arc<dyn Fn(u32) + Send + Sync>;

struct ViewportInner {
    width: AtomicU32,
    listeners: Mutex<Vec<(ListenerId, ResizeListener)>>,
    next_id: AtomicU64,
}

/// The host window: current inner width plus resize subscribers.
///
/// Clones share the same window.
#[derive(Clone)]
pub struct Viewport {
    inner: Arc<ViewportInner>,
}

impl Viewport {
    pub fn new(width: u32) -> Self {
        Self {
            inner: Arc::new(ViewportInner {
                width: AtomicU32::new(width),
                listeners: Mutex::new(Vec::new()),
                next_id: AtomicU64::new(0),
            }),
        }
    }

    pub fn width(&self) -> u32 {
        self.inner.width.load(Ordering::SeqCst)
    }

    /// Record a new width and notify every listener with it.
    pub fn resize(&self, width: u32) {
        self.inner.width.store(width, Ordering::SeqCst);
        let listeners: Vec<ResizeListener> = self
            .inner
            .listeners
            .lock()
            .iter()
            .map(|(_, listener)| Arc::clone(listener))
            .collect();
        for listener in listeners {
            listener(width);
        }
    }

    pub fn add_listener<F>(&self, listener: F) -> ListenerId
    where
        F: Fn(u32) + Send + Sync + 'static,
    {
        let id = ListenerId(self.inner.next_id.fetch_add(1, Ordering::Relaxed));
        self.inner.listeners.lock().push((id, Arc::new(listener)));
        id
    }

    /// Returns `false` if `id` was not registered (already removed).
    pub fn remove_listener(&self, id: ListenerId) -> bool {
        let mut listeners = self.inner.listeners.lock();
        let before = listeners.len();
        listeners.retain(|(other, _)| *other != id);
        listeners.len() != before
    }

    pub fn listener_count(&self) -> usize {
        self.inner.listeners.lock().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breakpoint_is_inclusive() {
        assert!(is_compact_width(0, COMPACT_BREAKPOINT));
        assert!(is_compact_width(768, COMPACT_BREAKPOINT));
        assert!(!is_compact_width(769, COMPACT_BREAKPOINT));
    }

    #[test]
    fn resize_notifies_listeners_until_removed() {
        let viewport = Viewport::new(1024);
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let id = viewport.add_listener(move |w| sink.lock().push(w));

        viewport.resize(500);
        assert!(viewport.remove_listener(id));
        assert!(!viewport.remove_listener(id));
        viewport.resize(900);

        assert_eq!(*seen.lock(), vec![500]);
        assert_eq!(viewport.width(), 900);
    }
}
