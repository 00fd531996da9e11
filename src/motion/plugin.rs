//! Process-wide plugin registration.
//!
//! The browser is single threaded, so the registry is thread-local, the same
//! way the page keeps the rest of its global UI state.

use std::cell::RefCell;
use std::collections::HashSet;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Plugin {
    ScrollTrigger,
}

thread_local! {
    static REGISTERED: RefCell<HashSet<Plugin>> = RefCell::new(HashSet::new());
}

/// Register `plugin`. Returns `true` only on the first call; later calls
/// are no-ops.
pub fn register_plugin(plugin: Plugin) -> bool {
    let fresh = REGISTERED.with(|registered| registered.borrow_mut().insert(plugin));
    if fresh {
        log::debug!("registered motion plugin {:?}", plugin);
    }
    fresh
}

#[cfg(test)]
pub fn is_registered(plugin: Plugin) -> bool {
    REGISTERED.with(|registered| registered.borrow().contains(&plugin))
}
