use super::ease::Ease;
use super::handle::{AnimationHandle, AnimationKind};
use super::scheduler::Scheduler;
use super::tween::{Repeat, Tween, TweenSpec, TweenState};
use super::{MotionTarget, Pose};

/// Hero entrance played once at mount, independent of scroll.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IntroConfig {
    pub offset_y: f64,
    pub duration: f64,
    pub ease: Ease,
}

impl Default for IntroConfig {
    fn default() -> Self {
        Self {
            offset_y: 40.0,
            duration: 1.2,
            ease: Ease::Power3Out,
        }
    }
}

pub fn attach_intro<T>(config: &IntroConfig, scheduler: &Scheduler, hero: &T) -> AnimationHandle
where
    T: MotionTarget + Clone + 'static,
{
    let spec = TweenSpec {
        from: Pose {
            opacity: 0.0,
            y: config.offset_y,
            scale: 1.0,
        },
        to: Pose::REST,
        duration: config.duration,
        delay: 0.0,
        ease: config.ease,
        repeat: Repeat::Once,
        yoyo: false,
    };
    let hero = hero.clone();
    let tween = scheduler.add(Tween::from_pose(
        spec,
        TweenState::Running,
        Box::new(move |pose| hero.apply(pose)),
    ));
    AnimationHandle::new(AnimationKind::Intro, tween)
}
