/// Which overlay, if any, is on screen. Opening a new id replaces the old
/// one; modals never stack.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ModalState {
    open: Option<String>,
}

impl ModalState {
    pub fn open(&mut self, id: impl Into<String>) {
        let id = id.into();
        log::debug!("opening modal {}", id);
        self.open = Some(id);
    }

    pub fn close(&mut self) {
        self.open = None;
    }

    pub fn is_open(&self, id: &str) -> bool {
        self.open.as_deref() == Some(id)
    }
}
