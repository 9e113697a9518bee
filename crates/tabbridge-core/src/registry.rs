//! Live tab bookkeeping.

use tabbridge_common::TabId;

/// Lifecycle of one tracked tab. Removal from the registry is the Closed
/// state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabState {
    Created,
    Active,
    /// A close was requested for the last tab. Advisory only.
    ClosePending,
}

#[derive(Debug, Clone)]
struct TabEntry {
    id: TabId,
    state: TabState,
}

/// Ordered set of live tabs plus the active one.
///
/// Membership mirrors the engine exactly: a tab is inserted on
/// after-created and removed on before-close, never otherwise.
#[derive(Debug, Default)]
pub struct TabRegistry {
    tabs: Vec<TabEntry>,
    active: Option<TabId>,
}

impl TabRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Track a new tab in the Created state. Returns `false` if it was
    /// already tracked.
    pub fn insert(&mut self, id: TabId) -> bool {
        if self.contains(id) {
            return false;
        }
        self.tabs.push(TabEntry {
            id,
            state: TabState::Created,
        });
        true
    }

    /// Make `id` the active tab, promoting it out of Created.
    pub fn activate(&mut self, id: TabId) -> bool {
        match self.entry_mut(id) {
            Some(entry) => {
                if entry.state == TabState::Created {
                    entry.state = TabState::Active;
                }
                self.active = Some(id);
                true
            }
            None => false,
        }
    }

    pub fn mark_close_pending(&mut self, id: TabId) -> bool {
        match self.entry_mut(id) {
            Some(entry) => {
                entry.state = TabState::ClosePending;
                true
            }
            None => false,
        }
    }

    /// Stop tracking `id`. If it was active, the most recently added
    /// remaining tab becomes active.
    pub fn remove(&mut self, id: TabId) -> bool {
        let Some(pos) = self.tabs.iter().position(|t| t.id == id) else {
            return false;
        };
        self.tabs.remove(pos);
        if self.active == Some(id) {
            self.active = self.tabs.last().map(|t| t.id);
        }
        true
    }

    pub fn active(&self) -> Option<TabId> {
        self.active
    }

    pub fn state(&self, id: TabId) -> Option<TabState> {
        self.tabs.iter().find(|t| t.id == id).map(|t| t.state)
    }

    pub fn contains(&self, id: TabId) -> bool {
        self.tabs.iter().any(|t| t.id == id)
    }

    pub fn len(&self) -> usize {
        self.tabs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }

    fn entry_mut(&mut self, id: TabId) -> Option<&mut TabEntry> {
        self.tabs.iter_mut().find(|t| t.id == id)
    }
}
