use std::cell::Cell;

use super::tween::{TweenCell, TweenState};
use super::viewport::{ListenerId, ViewportHub};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnimationKind {
    Intro,
    Reveal,
    Pulse,
}

/// Cancellable reference to one animation and, for scroll reveals, the
/// viewport watcher that triggers it.
pub struct AnimationHandle {
    kind: AnimationKind,
    tween: TweenCell,
    watcher: Option<(ViewportHub, ListenerId)>,
    cancelled: Cell<bool>,
}

impl AnimationHandle {
    pub fn new(kind: AnimationKind, tween: TweenCell) -> Self {
        Self {
            kind,
            tween,
            watcher: None,
            cancelled: Cell::new(false),
        }
    }

    pub fn watched(kind: AnimationKind, tween: TweenCell, hub: ViewportHub, id: ListenerId) -> Self {
        Self {
            watcher: Some((hub, id)),
            ..Self::new(kind, tween)
        }
    }

    pub fn kind(&self) -> AnimationKind {
        self.kind
    }

    pub fn state(&self) -> TweenState {
        self.tween.borrow().state()
    }

    #[cfg(test)]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.get()
    }

    /// `true` while the watcher is still waiting for its threshold.
    #[cfg(test)]
    pub fn is_watching(&self) -> bool {
        match &self.watcher {
            Some((hub, id)) => !self.cancelled.get() && hub.is_subscribed(*id),
            None => false,
        }
    }

    /// Stop the tween and detach the watcher. Safe to call any number of
    /// times, before the animation fires or after it completed.
    pub fn cancel(&self) {
        if self.cancelled.replace(true) {
            return;
        }
        self.tween.borrow_mut().kill();
        if let Some((hub, id)) = &self.watcher {
            hub.unsubscribe(*id);
        }
    }
}

impl std::fmt::Debug for AnimationHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnimationHandle")
            .field("kind", &self.kind)
            .field("state", &self.state())
            .field("cancelled", &self.cancelled.get())
            .finish()
    }
}
