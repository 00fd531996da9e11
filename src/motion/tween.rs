use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use super::ease::Ease;
use super::Pose;

/// Shared handle to a tween living in a [`super::Scheduler`].
pub type TweenCell = Rc<RefCell<Tween>>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TweenState {
    /// Created but waiting for a trigger.
    Paused,
    Running,
    Completed,
    Killed,
}

impl TweenState {
    pub fn is_finished(self) -> bool {
        matches!(self, TweenState::Completed | TweenState::Killed)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Repeat {
    Once,
    Infinite,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TweenSpec {
    pub from: Pose,
    pub to: Pose,
    /// Seconds per pass. For yoyo loops this is one half-cycle.
    pub duration: f64,
    /// Seconds to wait after the tween starts playing.
    pub delay: f64,
    pub ease: Ease,
    pub repeat: Repeat,
    pub yoyo: bool,
}

pub struct Tween {
    spec: TweenSpec,
    state: TweenState,
    elapsed: f64,
    current: Pose,
    writer: Box<dyn Fn(Pose)>,
}

impl Tween {
    /// A tween that starts at `spec.from`. The start pose is written
    /// immediately so the target never flashes its resting state.
    pub fn from_pose(spec: TweenSpec, state: TweenState, writer: Box<dyn Fn(Pose)>) -> Self {
        writer(spec.from);
        Self {
            spec,
            state,
            elapsed: 0.0,
            current: spec.from,
            writer,
        }
    }

    /// A tween that leaves the target alone until its delay has elapsed.
    pub fn to_pose(spec: TweenSpec, state: TweenState, writer: Box<dyn Fn(Pose)>) -> Self {
        Self {
            spec,
            state,
            elapsed: 0.0,
            current: spec.from,
            writer,
        }
    }

    pub fn state(&self) -> TweenState {
        self.state
    }

    /// Pose at the current progress; the start pose before the first frame.
    pub fn current(&self) -> Pose {
        self.current
    }

    /// Start a paused tween. Anything other than `Paused` is left alone.
    pub fn play(&mut self) {
        if self.state == TweenState::Paused {
            self.state = TweenState::Running;
        }
    }

    /// Stop the tween where it is. Returns `false` if it had already
    /// finished.
    pub fn kill(&mut self) -> bool {
        if self.state.is_finished() {
            return false;
        }
        self.state = TweenState::Killed;
        true
    }

    pub fn advance(&mut self, dt: f64) {
        if self.state != TweenState::Running {
            return;
        }
        self.elapsed += dt.max(0.0);
        let local = self.elapsed - self.spec.delay;
        if local < 0.0 {
            return;
        }

        let duration = self.spec.duration.max(f64::EPSILON);
        let progress = match self.spec.repeat {
            Repeat::Once => {
                let progress = (local / duration).min(1.0);
                if progress >= 1.0 {
                    self.state = TweenState::Completed;
                }
                progress
            }
            Repeat::Infinite => {
                let cycle = (local / duration).floor();
                let fraction = (local - cycle * duration) / duration;
                if self.spec.yoyo && cycle as u64 % 2 == 1 {
                    1.0 - fraction
                } else {
                    fraction
                }
            }
        };

        self.current = Pose::lerp(self.spec.from, self.spec.to, self.spec.ease.apply(progress));
        (self.writer)(self.current);
    }
}

impl fmt::Debug for Tween {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tween")
            .field("spec", &self.spec)
            .field("state", &self.state)
            .field("elapsed", &self.elapsed)
            .field("current", &self.current)
            .finish()
    }
}
