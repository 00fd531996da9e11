use std::cell::RefCell;
use std::rc::Rc;

use super::tween::{Tween, TweenCell};

/// Frame-driven timeline shared by every controller on the page.
///
/// The host calls [`Scheduler::advance`] once per frame with the elapsed
/// time. Finished tweens are dropped on the next advance.
#[derive(Clone, Default)]
pub struct Scheduler {
    tweens: Rc<RefCell<Vec<TweenCell>>>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&self, tween: Tween) -> TweenCell {
        let cell = Rc::new(RefCell::new(tween));
        self.tweens.borrow_mut().push(Rc::clone(&cell));
        cell
    }

    /// Advance every live tween by `dt` seconds.
    pub fn advance(&self, dt: f64) {
        let snapshot: Vec<TweenCell> = self.tweens.borrow().iter().cloned().collect();
        for tween in &snapshot {
            tween.borrow_mut().advance(dt);
        }
        self.tweens
            .borrow_mut()
            .retain(|tween| !tween.borrow().state().is_finished());
    }

    /// Tweens that are paused or running.
    #[cfg(test)]
    pub fn live_count(&self) -> usize {
        self.tweens
            .borrow()
            .iter()
            .filter(|tween| !tween.borrow().state().is_finished())
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::ease::Ease;
    use crate::motion::tween::{Repeat, TweenSpec, TweenState};
    use crate::motion::Pose;

    fn spec(repeat: Repeat) -> TweenSpec {
        TweenSpec {
            from: Pose::REST,
            to: Pose {
                scale: 1.04,
                ..Pose::REST
            },
            duration: 1.2,
            delay: 0.0,
            ease: Ease::Power1InOut,
            repeat,
            yoyo: true,
        }
    }

    #[test]
    fn completed_tweens_are_dropped() {
        let scheduler = Scheduler::new();
        let tween = scheduler.add(Tween::to_pose(spec(Repeat::Once), TweenState::Running, Box::new(|_| {})));
        assert_eq!(scheduler.live_count(), 1);

        scheduler.advance(2.0);
        assert_eq!(tween.borrow().state(), TweenState::Completed);
        assert_eq!(scheduler.live_count(), 0);
    }

    #[test]
    fn killed_tweens_stop_writing() {
        let scheduler = Scheduler::new();
        let writes = Rc::new(std::cell::Cell::new(0));
        let counter = Rc::clone(&writes);
        let tween = scheduler.add(Tween::to_pose(
            spec(Repeat::Infinite),
            TweenState::Running,
            Box::new(move |_| counter.set(counter.get() + 1)),
        ));

        scheduler.advance(0.1);
        assert_eq!(writes.get(), 1);

        tween.borrow_mut().kill();
        scheduler.advance(0.1);
        scheduler.advance(0.1);
        assert_eq!(writes.get(), 1);
        assert_eq!(scheduler.live_count(), 0);
    }
}
