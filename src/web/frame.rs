use std::cell::RefCell;
use std::rc::{Rc, Weak};

use gloo_render::{request_animation_frame, AnimationFrame};

use crate::motion::Scheduler;

/// Frames longer than this (tab in background, debugger pause) are replayed
/// as a single regular frame instead of jumping the animations ahead.
const MAX_FRAME_SECS: f64 = 0.5;
const LAG_FRAME_SECS: f64 = 1.0 / 30.0;

type FrameSlot = RefCell<Option<AnimationFrame>>;

/// Drives [`Scheduler::advance`] from `requestAnimationFrame` until dropped.
pub struct FrameLoop {
    _slot: Rc<FrameSlot>,
}

impl FrameLoop {
    pub fn start(scheduler: Scheduler) -> Self {
        let slot = Rc::new(RefCell::new(None));
        schedule(scheduler, Rc::downgrade(&slot), None);
        Self { _slot: slot }
    }
}

fn schedule(scheduler: Scheduler, slot: Weak<FrameSlot>, last: Option<f64>) {
    let Some(strong) = slot.upgrade() else {
        return;
    };
    let frame = request_animation_frame(move |timestamp| {
        let dt = match last {
            Some(last) => frame_delta(timestamp - last),
            None => 0.0,
        };
        scheduler.advance(dt);
        schedule(scheduler, slot, Some(timestamp));
    });
    *strong.borrow_mut() = Some(frame);
}

fn frame_delta(millis: f64) -> f64 {
    let secs = (millis / 1000.0).max(0.0);
    if secs > MAX_FRAME_SECS {
        LAG_FRAME_SECS
    } else {
        secs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn long_frames_are_smoothed() {
        assert!((frame_delta(16.0) - 0.016).abs() < 1e-9);
        assert_eq!(frame_delta(5_000.0), LAG_FRAME_SECS);
        assert_eq!(frame_delta(-3.0), 0.0);
    }
}
