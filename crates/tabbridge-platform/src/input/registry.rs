use std::collections::HashMap;

use tabbridge_common::TabCommand;
use tabbridge_config::schema::KeybindConfig;

use crate::keymap::{keybind_to_display, parse_keybind};

use super::key_combo::KeyCombo;

/// Maps key combinations to [`TabCommand`]s.
///
/// Built from [`KeybindConfig`] at startup.
pub struct ShortcutRegistry {
    bindings: HashMap<KeyCombo, TabCommand>,
}

impl ShortcutRegistry {
    /// Build the registry from the config keybind section.
    ///
    /// Strings that fail to parse or have no virtual-key code are logged
    /// and skipped.
    pub fn from_config(config: &KeybindConfig) -> Self {
        let mut bindings = HashMap::new();

        let mappings: [(&str, TabCommand); 2] = [
            (&config.new_tab, TabCommand::NewTab),
            (&config.close_tab, TabCommand::CloseTab),
        ];

        for (binding_str, command) in mappings {
            match parse_keybind(binding_str).and_then(|kb| KeyCombo::from_keybind(&kb)) {
                Ok(combo) => {
                    tracing::debug!(
                        command = command.label(),
                        binding = %keybind_to_display(&combo.to_keybind()),
                        "shortcut bound"
                    );
                    bindings.insert(combo, command);
                }
                Err(e) => {
                    tracing::warn!(command = command.label(), "invalid keybind '{binding_str}': {e}");
                }
            }
        }

        Self { bindings }
    }

    /// Resolve a raw key event to a command.
    ///
    /// When several bindings match, the one requiring the most modifiers wins,
    /// so `Ctrl+Shift+T` beats `Ctrl+T` when both are bound.
    pub fn resolve(&self, modifiers: u32, key_code: i32) -> Option<TabCommand> {
        let pressed = KeyCombo::from_event(modifiers, key_code);
        self.bindings
            .iter()
            .filter(|(combo, _)| combo.matches(pressed.mods, pressed.key_code))
            .max_by_key(|(combo, _)| combo.modifier_count())
            .map(|(_, command)| *command)
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

impl Default for ShortcutRegistry {
    fn default() -> Self {
        Self::from_config(&KeybindConfig::default())
    }
}
