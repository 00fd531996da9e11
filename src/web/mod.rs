//! Browser glue for the motion layer.

pub mod dom;
pub mod frame;
pub mod random;
pub mod scroll;

use thiserror::Error;

use crate::motion::{Scheduler, ViewportHub};

pub use dom::DomTarget;
pub use frame::FrameLoop;
pub use random::MathRandom;
pub use scroll::WindowScroll;

#[derive(Debug, Error)]
pub enum HostError {
    #[error("no window available")]
    NoWindow,
    #[error("could not listen for {0} events")]
    Listener(&'static str),
}

/// Window listeners and the frame loop for one page mount. Dropping it
/// detaches both.
pub struct HostBindings {
    _scroll: WindowScroll,
    _frames: FrameLoop,
}

impl HostBindings {
    pub fn attach(scheduler: &Scheduler, viewport: &ViewportHub) -> Result<Self, HostError> {
        let scroll = WindowScroll::bind(viewport)?;
        let frames = FrameLoop::start(scheduler.clone());
        Ok(Self {
            _scroll: scroll,
            _frames: frames,
        })
    }
}
