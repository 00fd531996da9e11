//! Mount/unmount ownership of every animation on the page.

use thiserror::Error;

use super::handle::{AnimationHandle, AnimationKind};
use super::intro::{attach_intro, IntroConfig};
use super::plugin::{register_plugin, Plugin};
use super::pulse::{PulseConfig, PulseController, RandomSource};
use super::registry::{ContentRegistry, ElementKind};
use super::reveal::{RevealConfig, RevealController};
use super::scheduler::Scheduler;
use super::viewport::ViewportHub;
use super::MotionTarget;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LifecycleError {
    #[error("page is already mounted")]
    AlreadyMounted,
    #[error("page is not mounted")]
    NotMounted,
}

/// Animation constants for the whole page.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MotionConfig {
    pub intro: IntroConfig,
    pub reveal: RevealConfig,
    pub pulse: PulseConfig,
}

/// Retained handles of the current mount, grouped by kind.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HandleCounts {
    pub intro: usize,
    pub reveal: usize,
    pub pulse: usize,
}

struct MountedPage<T> {
    registry: ContentRegistry<T>,
    handles: Vec<AnimationHandle>,
}

enum PageState<T> {
    Unmounted,
    Mounted(MountedPage<T>),
}

pub struct PageLifecycle<T, R> {
    scheduler: Scheduler,
    viewport: ViewportHub,
    intro: IntroConfig,
    reveal: RevealController,
    pulse: PulseController<R>,
    state: PageState<T>,
}

impl<T, R> PageLifecycle<T, R>
where
    T: MotionTarget + Clone + 'static,
    R: RandomSource,
{
    pub fn new(scheduler: Scheduler, viewport: ViewportHub, config: MotionConfig, rng: R) -> Self {
        Self {
            scheduler,
            viewport,
            intro: config.intro,
            reveal: RevealController::new(config.reveal),
            pulse: PulseController::new(config.pulse, rng),
            state: PageState::Unmounted,
        }
    }

    pub fn scheduler(&self) -> &Scheduler {
        &self.scheduler
    }

    pub fn viewport(&self) -> &ViewportHub {
        &self.viewport
    }

    pub fn is_mounted(&self) -> bool {
        matches!(self.state, PageState::Mounted(_))
    }

    /// Handles retained by the current mount.
    #[cfg(test)]
    pub fn outstanding_handles(&self) -> usize {
        match &self.state {
            PageState::Mounted(page) => page.handles.len(),
            PageState::Unmounted => 0,
        }
    }

    /// `(sections, actions)` registered by the current mount.
    pub fn registry_sizes(&self) -> (usize, usize) {
        match &self.state {
            PageState::Mounted(page) => (
                page.registry.len(ElementKind::Section),
                page.registry.len(ElementKind::Action),
            ),
            PageState::Unmounted => (0, 0),
        }
    }

    pub fn handle_counts(&self) -> HandleCounts {
        let mut counts = HandleCounts::default();
        if let PageState::Mounted(page) = &self.state {
            for handle in &page.handles {
                match handle.kind() {
                    AnimationKind::Intro => counts.intro += 1,
                    AnimationKind::Reveal => counts.reveal += 1,
                    AnimationKind::Pulse => counts.pulse += 1,
                }
            }
        }
        counts
    }

    /// Build a fresh registry from the rendered elements and start every
    /// animation. Missing elements are skipped.
    pub fn mount(
        &mut self,
        hero: Option<T>,
        sections: impl IntoIterator<Item = Option<T>>,
        actions: impl IntoIterator<Item = Option<T>>,
    ) -> Result<(), LifecycleError> {
        if self.is_mounted() {
            return Err(LifecycleError::AlreadyMounted);
        }
        register_plugin(Plugin::ScrollTrigger);

        let mut registry = ContentRegistry::new();
        for section in sections {
            registry.register(ElementKind::Section, section);
        }
        for action in actions {
            registry.register(ElementKind::Action, action);
        }

        let mut handles = Vec::new();
        if let Some(hero) = &hero {
            handles.push(attach_intro(&self.intro, &self.scheduler, hero));
        }
        handles.extend(
            self.reveal
                .attach(&self.scheduler, &self.viewport, registry.sections()),
        );
        handles.extend(self.pulse.attach(&self.scheduler, registry.actions()));

        self.state = PageState::Mounted(MountedPage { registry, handles });

        let (sections, actions) = self.registry_sizes();
        let counts = self.handle_counts();
        log::info!(
            "page mounted: {} sections, {} actions; {} intro, {} reveal, {} pulse animations",
            sections,
            actions,
            counts.intro,
            counts.reveal,
            counts.pulse
        );
        Ok(())
    }

    /// Cancel every retained handle and detach leftover viewport listeners.
    /// Returns the number of handles cancelled.
    pub fn unmount(&mut self) -> Result<usize, LifecycleError> {
        let page = match std::mem::replace(&mut self.state, PageState::Unmounted) {
            PageState::Mounted(page) => page,
            PageState::Unmounted => return Err(LifecycleError::NotMounted),
        };

        for handle in &page.handles {
            handle.cancel();
        }
        let stray = self.viewport.clear();
        if stray > 0 {
            log::debug!("detached {} stray viewport listeners", stray);
        }
        log::info!("page unmounted: cancelled {} animations", page.handles.len());
        Ok(page.handles.len())
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;
    use crate::motion::testing::{FakeElement, FixedSequence};
    use crate::motion::viewport::ViewportMetrics;

    fn page() -> PageLifecycle<FakeElement, FixedSequence> {
        PageLifecycle::new(
            Scheduler::new(),
            ViewportHub::new(ViewportMetrics {
                scroll_y: 0.0,
                height: 1000.0,
            }),
            MotionConfig::default(),
            FixedSequence::new(vec![0.1, 0.7]),
        )
    }

    fn below_fold(count: usize) -> Vec<FakeElement> {
        (0..count).map(|i| FakeElement::at(1500.0 + 600.0 * i as f64)).collect()
    }

    #[test]
    fn mount_three_sections_two_buttons() {
        let mut page = page();
        let sections = below_fold(3);
        let buttons = below_fold(2);

        page.mount(None, sections.iter().cloned().map(Some), buttons.iter().cloned().map(Some))
            .unwrap();
        assert!(page.is_mounted());
        assert_eq!(page.registry_sizes(), (3, 2));
        assert_eq!(
            page.handle_counts(),
            HandleCounts {
                intro: 0,
                reveal: 3,
                pulse: 2,
            }
        );
        assert_eq!(page.outstanding_handles(), 5);
        assert_eq!(page.viewport().listener_count(), 3);
        assert_eq!(page.scheduler().live_count(), 5);

        assert_eq!(page.unmount(), Ok(5));
        assert_eq!(page.outstanding_handles(), 0);
        assert_eq!(page.handle_counts(), HandleCounts::default());
        assert_eq!(page.viewport().listener_count(), 0);

        page.scheduler().advance(0.1);
        assert_eq!(page.scheduler().live_count(), 0);
    }

    #[test]
    fn no_callbacks_after_unmount() {
        let mut page = page();
        let sections = below_fold(3);
        page.mount(None, sections.iter().cloned().map(Some), Vec::new()).unwrap();
        page.unmount().unwrap();

        // A late listener registered by someone else still sees events;
        // the page's own watchers must not.
        let late_calls = Rc::new(Cell::new(0));
        let seen = Rc::clone(&late_calls);
        page.viewport().subscribe(move |_| seen.set(seen.get() + 1));

        let writes: Vec<usize> = sections.iter().map(FakeElement::writes).collect();
        for section in &sections {
            section.set_top(0.0);
        }
        page.viewport().dispatch(ViewportMetrics {
            scroll_y: 5000.0,
            height: 1000.0,
        });
        page.scheduler().advance(1.0);

        assert_eq!(late_calls.get(), 1);
        let after: Vec<usize> = sections.iter().map(FakeElement::writes).collect();
        assert_eq!(writes, after);
    }

    #[test]
    fn hero_intro_is_owned_too() {
        let mut page = page();
        let hero = FakeElement::at(0.0);
        page.mount(Some(hero), below_fold(4).into_iter().map(Some), below_fold(4).into_iter().map(Some))
            .unwrap();
        assert_eq!(page.outstanding_handles(), 9);
        assert_eq!(
            page.handle_counts(),
            HandleCounts {
                intro: 1,
                reveal: 4,
                pulse: 4,
            }
        );
        assert_eq!(page.unmount(), Ok(9));
    }

    #[test]
    fn missing_and_duplicate_elements_are_skipped() {
        let mut page = page();
        let section = FakeElement::at(2000.0);
        let button = FakeElement::at(0.0);

        page.mount(
            None,
            vec![Some(section.clone()), None, Some(section)],
            vec![None, Some(button.clone()), Some(button)],
        )
        .unwrap();
        assert_eq!(page.registry_sizes(), (1, 1));
        assert_eq!(page.outstanding_handles(), 2);
    }

    #[test]
    fn invalid_transitions_are_rejected() {
        let mut page = page();
        assert_eq!(page.unmount(), Err(LifecycleError::NotMounted));

        page.mount(None, Vec::new(), Vec::new()).unwrap();
        assert_eq!(
            page.mount(None, Vec::new(), Vec::new()),
            Err(LifecycleError::AlreadyMounted)
        );
        assert_eq!(page.unmount(), Ok(0));
        assert_eq!(page.unmount(), Err(LifecycleError::NotMounted));
    }

    #[test]
    fn remount_starts_from_a_fresh_registry() {
        let mut page = page();
        let sections = below_fold(2);

        page.mount(None, sections.iter().cloned().map(Some), Vec::new()).unwrap();
        page.unmount().unwrap();

        page.mount(None, sections.iter().cloned().map(Some), Vec::new()).unwrap();
        assert_eq!(page.registry_sizes(), (2, 0));
        assert_eq!(page.outstanding_handles(), 2);
        assert_eq!(page.viewport().listener_count(), 2);
        assert_eq!(page.unmount(), Ok(2));
    }

    #[test]
    fn pulse_keeps_running_until_unmount() {
        let mut page = page();
        let button = FakeElement::at(0.0);
        page.mount(None, Vec::new(), vec![Some(button.clone())]).unwrap();

        for _ in 0..500 {
            page.scheduler().advance(1.0 / 60.0);
        }
        assert_eq!(page.scheduler().live_count(), 1);

        page.unmount().unwrap();
        let frozen = button.pose();
        page.scheduler().advance(1.0);
        assert_eq!(button.pose(), frozen);
    }
}
