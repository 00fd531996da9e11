use super::MotionTarget;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ElementKind {
    Section,
    Action,
}

/// Ordered sections and call-to-action elements for one page mount.
///
/// Insertion order drives the reveal stagger, so this is a sequence and not
/// a set. Duplicates are detected by element identity.
pub struct ContentRegistry<T> {
    sections: Vec<T>,
    actions: Vec<T>,
}

impl<T: MotionTarget> ContentRegistry<T> {
    pub fn new() -> Self {
        Self {
            sections: Vec::new(),
            actions: Vec::new(),
        }
    }

    /// Append `handle` under `kind`. A missing handle or one already
    /// registered under the same kind is ignored. Returns whether it was
    /// appended.
    pub fn register(&mut self, kind: ElementKind, handle: Option<T>) -> bool {
        let Some(handle) = handle else {
            return false;
        };
        let bucket = match kind {
            ElementKind::Section => &mut self.sections,
            ElementKind::Action => &mut self.actions,
        };
        if bucket.iter().any(|known| known.same_element(&handle)) {
            return false;
        }
        bucket.push(handle);
        true
    }

    pub fn sections(&self) -> &[T] {
        &self.sections
    }

    pub fn actions(&self) -> &[T] {
        &self.actions
    }

    pub fn len(&self, kind: ElementKind) -> usize {
        match kind {
            ElementKind::Section => self.sections.len(),
            ElementKind::Action => self.actions.len(),
        }
    }
}

impl<T: MotionTarget> Default for ContentRegistry<T> {
    fn default() -> Self {
        Self::new()
    }
}
