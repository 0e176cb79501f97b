use crate::dom::{Document, Element, SelectedFile};
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// A page held entirely in memory. Cloning shares the same elements.
///
/// Text and markup share one content slot: `set_text` and `set_inner_html` both replace it.
#[derive(Clone, Debug, Default)]
pub struct InMemoryDocument {
    elements: Arc<RwLock<HashMap<String, MemoryElement>>>,
}

impl InMemoryDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an element with the given identifier, or returns the existing one.
    pub fn insert(&self, id: &str) -> MemoryElement {
        write(&self.elements)
            .entry(id.to_string())
            .or_default()
            .clone()
    }

    pub fn with_elements(self, ids: &[&str]) -> Self {
        for id in ids {
            self.insert(id);
        }
        self
    }

    #[cfg(test)]
    pub fn remove(&self, id: &str) -> Option<MemoryElement> {
        write(&self.elements).remove(id)
    }
}

impl Document for InMemoryDocument {
    type Element = MemoryElement;

    fn element(&self, id: &str) -> Option<MemoryElement> {
        read(&self.elements).get(id).cloned()
    }
}

#[derive(Debug, Default)]
struct ElementState {
    disabled: bool,
    content: String,
    value: String,
    files: Vec<SelectedFile>,
}

#[derive(Clone, Debug, Default)]
pub struct MemoryElement {
    state: Arc<RwLock<ElementState>>,
}

impl MemoryElement {
    pub fn set_value(&self, value: &str) {
        write(&self.state).value = value.to_string();
    }

    pub fn select_file(&self, file: SelectedFile) {
        let mut state = write(&self.state);
        state.files.clear();
        state.files.push(file);
    }
}

impl Element for MemoryElement {
    fn is_disabled(&self) -> bool {
        read(&self.state).disabled
    }

    fn set_disabled(&self, disabled: bool) {
        write(&self.state).disabled = disabled;
    }

    fn text(&self) -> String {
        read(&self.state).content.clone()
    }

    fn set_text(&self, text: &str) {
        write(&self.state).content = text.to_string();
    }

    fn inner_html(&self) -> String {
        read(&self.state).content.clone()
    }

    fn set_inner_html(&self, html: &str) {
        write(&self.state).content = html.to_string();
    }

    fn value(&self) -> String {
        read(&self.state).value.clone()
    }

    fn selected_file(&self) -> Option<SelectedFile> {
        read(&self.state).files.first().cloned()
    }
}

// A panicking writer leaves plain data behind, so poisoned locks are still usable.
fn read<T>(lock: &RwLock<T>) -> RwLockReadGuard<'_, T> {
    lock.read().unwrap_or_else(PoisonError::into_inner)
}

fn write<T>(lock: &RwLock<T>) -> RwLockWriteGuard<'_, T> {
    lock.write().unwrap_or_else(PoisonError::into_inner)
}
