//! Presentation-only state for hosts rendering the editor.
//!
//! Dropdown open/closed flags are keyed by step or element id here instead
//! of living on the domain entities themselves.

use ahash::AHashMap;
use uuid::Uuid;

/// Exclusive open/closed flags: at most one id is open at a time, matching
/// the dropdown behavior of the reference UI.
#[derive(Debug, Default, Clone)]
pub struct UiFlags {
    open: AHashMap<Uuid, bool>,
}

impl UiFlags {
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggles the flag for `id`, closing every other flag.
    pub fn toggle(&mut self, id: Uuid) {
        let was_open = self.is_open(id);
        self.open.clear();
        self.open.insert(id, !was_open);
    }

    pub fn is_open(&self, id: Uuid) -> bool {
        self.open.get(&id).copied().unwrap_or(false)
    }

    pub fn close_all(&mut self) {
        self.open.clear();
    }
}
