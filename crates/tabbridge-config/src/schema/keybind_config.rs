//! Keyboard shortcuts configuration types.
//!
//! Named `keybind_config` to avoid clash with the crate-level `keybinds` module.

use serde::{Deserialize, Serialize};

/// Tab shortcuts intercepted before the engine sees the key.
///
/// Format: "Modifier+Key" where Modifier is one of: Ctrl, Alt, Shift, Super
/// (Cmd and Option are accepted aliases). Multiple modifiers: "Ctrl+Shift+T".
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct KeybindConfig {
    pub new_tab: String,
    pub close_tab: String,
}

impl Default for KeybindConfig {
    fn default() -> Self {
        Self {
            new_tab: "Ctrl+T".into(),
            close_tab: "Ctrl+W".into(),
        }
    }
}
