//! Motion layer for the landing page.
//!
//! Everything in here is host-agnostic: targets are reached through the
//! [`MotionTarget`] trait, time comes from [`Scheduler::advance`] and scroll
//! notifications come from a [`ViewportHub`]. The browser glue lives in
//! `crate::web`.

pub mod ease;
pub mod handle;
pub mod intro;
pub mod lifecycle;
pub mod modal;
pub mod plugin;
pub mod pulse;
pub mod registry;
pub mod reveal;
pub mod scheduler;
pub mod tween;
pub mod viewport;

pub use lifecycle::{MotionConfig, PageLifecycle};
pub use pulse::RandomSource;
pub use scheduler::Scheduler;
pub use viewport::{ViewportHub, ViewportMetrics};

/// The animated properties written to a target on every frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pose {
    pub opacity: f64,
    /// Vertical offset in CSS pixels.
    pub y: f64,
    pub scale: f64,
}

impl Pose {
    pub const REST: Pose = Pose {
        opacity: 1.0,
        y: 0.0,
        scale: 1.0,
    };

    pub fn lerp(from: Pose, to: Pose, t: f64) -> Pose {
        Pose {
            opacity: from.opacity + (to.opacity - from.opacity) * t,
            y: from.y + (to.y - from.y) * t,
            scale: from.scale + (to.scale - from.scale) * t,
        }
    }
}

impl Default for Pose {
    fn default() -> Self {
        Pose::REST
    }
}

/// A page element the motion layer can animate.
pub trait MotionTarget {
    /// Write the pose to the element.
    fn apply(&self, pose: Pose);

    /// Top edge of the element's rendered box relative to the viewport,
    /// including any offset written through [`MotionTarget::apply`]. `None`
    /// when the element has no layout (detached, not rendered yet).
    fn bounding_top(&self) -> Option<f64>;

    /// Identity comparison. Two handles are the same element only if they
    /// point at the same live node.
    fn same_element(&self, other: &Self) -> bool;
}

#[cfg(test)]
pub(crate) mod testing {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::{MotionTarget, Pose};

    /// In-memory element. Clones share identity. Like a rendered box, its
    /// measured top includes the applied vertical offset.
    #[derive(Clone)]
    pub struct FakeElement {
        pose: Rc<Cell<Pose>>,
        top: Rc<Cell<Option<f64>>>,
        writes: Rc<Cell<usize>>,
    }

    impl FakeElement {
        pub fn at(top: f64) -> Self {
            Self {
                pose: Rc::new(Cell::new(Pose::REST)),
                top: Rc::new(Cell::new(Some(top))),
                writes: Rc::new(Cell::new(0)),
            }
        }

        pub fn detached() -> Self {
            let element = Self::at(0.0);
            element.top.set(None);
            element
        }

        /// Set the layout top, before any offset.
        pub fn set_top(&self, top: f64) {
            self.top.set(Some(top));
        }

        pub fn pose(&self) -> Pose {
            self.pose.get()
        }

        pub fn writes(&self) -> usize {
            self.writes.get()
        }
    }

    impl MotionTarget for FakeElement {
        fn apply(&self, pose: Pose) {
            self.pose.set(pose);
            self.writes.set(self.writes.get() + 1);
        }

        fn bounding_top(&self) -> Option<f64> {
            self.top.get().map(|top| top + self.pose.get().y)
        }

        fn same_element(&self, other: &Self) -> bool {
            Rc::ptr_eq(&self.pose, &other.pose)
        }
    }

    /// Fixed random sequence, cycled.
    pub struct FixedSequence {
        values: Vec<f64>,
        cursor: usize,
    }

    impl FixedSequence {
        pub fn new(values: Vec<f64>) -> Self {
            Self { values, cursor: 0 }
        }
    }

    impl super::RandomSource for FixedSequence {
        fn next_unit(&mut self) -> f64 {
            if self.values.is_empty() {
                return 0.0;
            }
            let value = self.values[self.cursor % self.values.len()];
            self.cursor += 1;
            value
        }
    }
}
