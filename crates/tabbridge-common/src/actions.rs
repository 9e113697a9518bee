use serde::{Deserialize, Serialize};

/// Tab-level commands a keyboard shortcut can resolve to.
///
/// The shortcut registry maps key combos to a `TabCommand`; the event
/// translator executes it against the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TabCommand {
    NewTab,
    CloseTab,
}

impl TabCommand {
    /// Human-readable label, used in log lines.
    pub fn label(&self) -> &'static str {
        match self {
            TabCommand::NewTab => "New Tab",
            TabCommand::CloseTab => "Close Tab",
        }
    }
}
