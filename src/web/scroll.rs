use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Window;

use super::HostError;
use crate::motion::{ViewportHub, ViewportMetrics};

const EVENTS: [&str; 2] = ["scroll", "resize"];

/// Feeds window scroll and resize events into a [`ViewportHub`].
pub struct WindowScroll {
    window: Window,
    callback: Closure<dyn Fn()>,
}

impl WindowScroll {
    pub fn bind(hub: &ViewportHub) -> Result<Self, HostError> {
        let window = web_sys::window().ok_or(HostError::NoWindow)?;

        let callback = Closure::<dyn Fn()>::new({
            let hub = hub.clone();
            move || {
                if let Some(metrics) = web_sys::window().as_ref().and_then(read_metrics) {
                    hub.dispatch(metrics);
                }
            }
        });

        for event in EVENTS {
            window
                .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
                .map_err(|_| HostError::Listener(event))?;
        }

        // Seed the hub so watchers attached before the first scroll see the
        // real viewport height.
        if let Some(metrics) = read_metrics(&window) {
            hub.dispatch(metrics);
        }

        Ok(Self { window, callback })
    }
}

impl Drop for WindowScroll {
    fn drop(&mut self) {
        for event in EVENTS {
            if self
                .window
                .remove_event_listener_with_callback(event, self.callback.as_ref().unchecked_ref())
                .is_err()
            {
                warn!("failed to remove {} listener", event);
            }
        }
    }
}

fn read_metrics(window: &Window) -> Option<ViewportMetrics> {
    Some(ViewportMetrics {
        scroll_y: window.scroll_y().ok()?,
        height: window.inner_height().ok()?.as_f64()?,
    })
}
