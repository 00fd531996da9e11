//! Scroll/resize event source.
//!
//! The hub keeps the latest viewport metrics and a list of listeners. In the
//! browser a single window listener feeds [`ViewportHub::dispatch`]; tests
//! call it directly to synthesize scroll events.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ViewportMetrics {
    pub scroll_y: f64,
    pub height: f64,
}

pub type ListenerId = u64;

type Listener = Rc<dyn Fn(ViewportMetrics)>;

#[derive(Default)]
struct HubInner {
    metrics: ViewportMetrics,
    next_id: ListenerId,
    listeners: Vec<(ListenerId, Listener)>,
}

#[derive(Clone)]
pub struct ViewportHub {
    inner: Rc<RefCell<HubInner>>,
}

/// Non-owning reference held by listeners that need to unsubscribe
/// themselves.
#[derive(Clone)]
pub struct WeakViewportHub {
    inner: Weak<RefCell<HubInner>>,
}

impl WeakViewportHub {
    pub fn upgrade(&self) -> Option<ViewportHub> {
        self.inner.upgrade().map(|inner| ViewportHub { inner })
    }
}

impl Default for ViewportHub {
    fn default() -> Self {
        Self::new(ViewportMetrics::default())
    }
}

impl ViewportHub {
    pub fn new(metrics: ViewportMetrics) -> Self {
        Self {
            inner: Rc::new(RefCell::new(HubInner {
                metrics,
                ..HubInner::default()
            })),
        }
    }

    pub fn downgrade(&self) -> WeakViewportHub {
        WeakViewportHub {
            inner: Rc::downgrade(&self.inner),
        }
    }

    pub fn metrics(&self) -> ViewportMetrics {
        self.inner.borrow().metrics
    }

    pub fn subscribe(&self, listener: impl Fn(ViewportMetrics) + 'static) -> ListenerId {
        let mut inner = self.inner.borrow_mut();
        let id = inner.next_id;
        inner.next_id += 1;
        inner.listeners.push((id, Rc::new(listener)));
        id
    }

    /// Returns `false` if the listener was already gone.
    pub fn unsubscribe(&self, id: ListenerId) -> bool {
        let mut inner = self.inner.borrow_mut();
        let before = inner.listeners.len();
        inner.listeners.retain(|(listener_id, _)| *listener_id != id);
        inner.listeners.len() != before
    }

    pub fn is_subscribed(&self, id: ListenerId) -> bool {
        self.inner
            .borrow()
            .listeners
            .iter()
            .any(|(listener_id, _)| *listener_id == id)
    }

    #[cfg(test)]
    pub fn listener_count(&self) -> usize {
        self.inner.borrow().listeners.len()
    }

    /// Drop every listener. Returns how many were detached.
    pub fn clear(&self) -> usize {
        let mut inner = self.inner.borrow_mut();
        let count = inner.listeners.len();
        inner.listeners.clear();
        count
    }

    /// Notify a single listener without touching the stored metrics.
    pub fn dispatch_to(&self, id: ListenerId, metrics: ViewportMetrics) {
        let listener = self
            .inner
            .borrow()
            .listeners
            .iter()
            .find(|(listener_id, _)| *listener_id == id)
            .map(|(_, listener)| Rc::clone(listener));
        if let Some(listener) = listener {
            listener(metrics);
        }
    }

    /// Record new metrics and notify listeners in subscription order.
    /// Listeners may unsubscribe themselves or others while being notified.
    pub fn dispatch(&self, metrics: ViewportMetrics) {
        let snapshot: Vec<(ListenerId, Listener)> = {
            let mut inner = self.inner.borrow_mut();
            inner.metrics = metrics;
            inner.listeners.clone()
        };
        for (id, listener) in snapshot {
            if self.is_subscribed(id) {
                listener(metrics);
            }
        }
    }
}
