//! Ambient "breathing" loop on call-to-action buttons.

use super::ease::Ease;
use super::handle::{AnimationHandle, AnimationKind};
use super::scheduler::Scheduler;
use super::tween::{Repeat, Tween, TweenSpec, TweenState};
use super::{MotionTarget, Pose};

/// Source of uniform values in `[0, 1)`.
pub trait RandomSource {
    fn next_unit(&mut self) -> f64;
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PulseConfig {
    pub peak_scale: f64,
    /// Seconds per half-cycle.
    pub half_cycle: f64,
    /// Upper bound (exclusive) of the random start delay.
    pub max_phase_delay: f64,
    pub ease: Ease,
}

impl Default for PulseConfig {
    fn default() -> Self {
        Self {
            peak_scale: 1.04,
            half_cycle: 1.2,
            max_phase_delay: 0.6,
            ease: Ease::Power1InOut,
        }
    }
}

pub struct PulseController<R> {
    config: PulseConfig,
    rng: R,
}

impl<R: RandomSource> PulseController<R> {
    pub fn new(config: PulseConfig, rng: R) -> Self {
        Self { config, rng }
    }

    /// Start one infinite yoyo loop per button. Each loop gets its own random
    /// start delay so neighbouring buttons do not pulse in lockstep.
    pub fn attach<T>(&mut self, scheduler: &Scheduler, buttons: &[T]) -> Vec<AnimationHandle>
    where
        T: MotionTarget + Clone + 'static,
    {
        buttons
            .iter()
            .map(|button| {
                let spec = TweenSpec {
                    from: Pose::REST,
                    to: Pose {
                        scale: self.config.peak_scale,
                        ..Pose::REST
                    },
                    duration: self.config.half_cycle,
                    delay: self.phase_delay(),
                    ease: self.config.ease,
                    repeat: Repeat::Infinite,
                    yoyo: true,
                };
                let writer = {
                    let button = button.clone();
                    Box::new(move |pose| button.apply(pose))
                };
                let tween = scheduler.add(Tween::to_pose(spec, TweenState::Running, writer));
                AnimationHandle::new(AnimationKind::Pulse, tween)
            })
            .collect()
    }

    fn phase_delay(&mut self) -> f64 {
        let unit = self.rng.next_unit();
        let unit = if unit.is_finite() { unit.clamp(0.0, 1.0 - f64::EPSILON) } else { 0.0 };
        unit * self.config.max_phase_delay
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::testing::{FakeElement, FixedSequence};

    fn controller() -> PulseController<FixedSequence> {
        PulseController::new(PulseConfig::default(), FixedSequence::new(vec![0.0, 0.5, 0.99]))
    }

    #[test]
    fn one_loop_per_button() {
        let scheduler = Scheduler::new();
        let buttons: Vec<_> = (0..4).map(|_| FakeElement::at(0.0)).collect();
        let handles = controller().attach(&scheduler, &buttons);

        assert_eq!(handles.len(), 4);
        assert!(handles.iter().all(|h| h.kind() == AnimationKind::Pulse));
        assert!(handles.iter().all(|h| h.state() == TweenState::Running));
        assert_eq!(scheduler.live_count(), 4);
    }

    #[test]
    fn loop_never_finishes_on_its_own() {
        let scheduler = Scheduler::new();
        let button = FakeElement::at(0.0);
        let handles = controller().attach(&scheduler, &[button.clone()]);

        for _ in 0..10_000 {
            scheduler.advance(0.37);
        }
        assert_eq!(handles[0].state(), TweenState::Running);
        assert_eq!(scheduler.live_count(), 1);

        let scale = button.pose().scale;
        assert!((1.0..=1.04 + 1e-9).contains(&scale));
    }

    #[test]
    fn cancel_freezes_the_button() {
        let scheduler = Scheduler::new();
        let button = FakeElement::at(0.0);
        let handles = controller().attach(&scheduler, &[button.clone()]);

        scheduler.advance(0.9);
        handles[0].cancel();
        handles[0].cancel();
        let frozen = button.pose();

        scheduler.advance(3.0);
        assert_eq!(button.pose(), frozen);
        assert_eq!(handles[0].state(), TweenState::Killed);
        assert_eq!(scheduler.live_count(), 0);
    }

    #[test]
    fn out_of_range_random_values_are_clamped() {
        let scheduler = Scheduler::new();
        let button = FakeElement::at(0.0);
        let mut pulse = PulseController::new(PulseConfig::default(), FixedSequence::new(vec![f64::NAN]));
        let handles = pulse.attach(&scheduler, &[button]);
        assert_eq!(handles.len(), 1);
        assert_eq!(handles[0].state(), TweenState::Running);
    }
}
