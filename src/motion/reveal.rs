//! One-shot entrance of page sections as they scroll into view.

use std::cell::Cell;
use std::rc::Rc;

use super::ease::Ease;
use super::handle::{AnimationHandle, AnimationKind};
use super::scheduler::Scheduler;
use super::tween::{Repeat, Tween, TweenSpec, TweenState};
use super::viewport::{ListenerId, ViewportHub, ViewportMetrics};
use super::{MotionTarget, Pose};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealConfig {
    /// Fraction of the viewport height the section's top must reach.
    pub threshold: f64,
    /// Starting vertical offset in pixels.
    pub offset_y: f64,
    pub duration: f64,
    /// Extra delay per registration index.
    pub stagger: f64,
    pub ease: Ease,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            threshold: 0.85,
            offset_y: 60.0,
            duration: 1.0,
            stagger: 0.05,
            ease: Ease::Power3Out,
        }
    }
}

pub struct RevealController {
    config: RevealConfig,
}

impl RevealController {
    pub fn new(config: RevealConfig) -> Self {
        Self { config }
    }

    /// Hide every section and arm one watcher per section. Sections already
    /// past the threshold start right away, cascading by index.
    pub fn attach<T>(
        &self,
        scheduler: &Scheduler,
        viewport: &ViewportHub,
        sections: &[T],
    ) -> Vec<AnimationHandle>
    where
        T: MotionTarget + Clone + 'static,
    {
        sections
            .iter()
            .enumerate()
            .map(|(index, section)| self.attach_one(scheduler, viewport, index, section))
            .collect()
    }

    fn attach_one<T>(
        &self,
        scheduler: &Scheduler,
        viewport: &ViewportHub,
        index: usize,
        section: &T,
    ) -> AnimationHandle
    where
        T: MotionTarget + Clone + 'static,
    {
        let spec = TweenSpec {
            from: Pose {
                opacity: 0.0,
                y: self.config.offset_y,
                scale: 1.0,
            },
            to: Pose::REST,
            duration: self.config.duration,
            delay: index as f64 * self.config.stagger,
            ease: self.config.ease,
            repeat: Repeat::Once,
            yoyo: false,
        };
        let writer = {
            let section = section.clone();
            Box::new(move |pose| section.apply(pose))
        };
        let tween = scheduler.add(Tween::from_pose(spec, TweenState::Paused, writer));

        let fired = Cell::new(false);
        let own_id: Rc<Cell<Option<ListenerId>>> = Rc::new(Cell::new(None));
        let watcher = {
            let section = section.clone();
            let tween = Rc::downgrade(&tween);
            let hub = viewport.downgrade();
            let own_id = Rc::clone(&own_id);
            let threshold = self.config.threshold;
            move |metrics: ViewportMetrics| {
                if fired.get() {
                    return;
                }
                let Some(top) = section.bounding_top() else {
                    return;
                };
                let Some(tween) = tween.upgrade() else {
                    return;
                };
                // The measured box includes the hidden offset; compare the
                // resting position.
                let resting_top = top - tween.borrow().current().y;
                if resting_top > threshold * metrics.height {
                    return;
                }
                fired.set(true);
                tween.borrow_mut().play();
                if let (Some(hub), Some(id)) = (hub.upgrade(), own_id.get()) {
                    hub.unsubscribe(id);
                }
            }
        };

        let id = viewport.subscribe(watcher);
        own_id.set(Some(id));
        let handle = AnimationHandle::watched(AnimationKind::Reveal, tween, viewport.clone(), id);

        // Sections already on screen at attach time should not wait for a
        // scroll event.
        viewport.dispatch_to(id, viewport.metrics());
        handle
    }
}
