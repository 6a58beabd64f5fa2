//! The window registry: tab identifier → live window handle.

use std::collections::HashMap;

use tracing::warn;

use plume_common::TabId;

/// Index-based handle to a window controller slot in the shell's arena.
///
/// Never a reference: a closed window leaves a vacant slot behind, so a
/// stale handle resolves to nothing instead of a destroyed window, even
/// when unregistration races an in-flight notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WindowId(pub(crate) usize);

/// Maps each open tab to its window.
///
/// One instance, owned by the shell coordinator and mutated only from its
/// task in response to window lifecycle events. An entry exists exactly
/// while the corresponding window is open.
#[derive(Debug, Default)]
pub struct WindowRegistry {
    entries: HashMap<TabId, WindowId>,
}

impl WindowRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an entry. Duplicate tab ids should be impossible; if one
    /// shows up anyway the newer window wins and the stale entry is
    /// dropped with a diagnostic.
    pub fn register(&mut self, tab: TabId, window: WindowId) {
        if let Some(previous) = self.entries.insert(tab.clone(), window) {
            warn!(tab = %tab, ?previous, "duplicate tab registration, replacing previous window");
        }
    }

    /// Remove an entry. Absent tabs are a no-op, not an error: window
    /// close races against in-flight notifications for the same tab.
    pub fn unregister(&mut self, tab: &TabId) {
        self.entries.remove(tab);
    }

    /// Pure read, no side effects.
    pub fn lookup(&self, tab: &TabId) -> Option<WindowId> {
        self.entries.get(tab).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
