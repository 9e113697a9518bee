use tabbridge_common::PlatformError;

use crate::keymap::{key_name_for_code, virtual_key_code, KeyBind, Modifier};

pub const EVENTFLAG_SHIFT_DOWN: u32 = 1 << 1;
pub const EVENTFLAG_CONTROL_DOWN: u32 = 1 << 2;
pub const EVENTFLAG_ALT_DOWN: u32 = 1 << 3;
pub const EVENTFLAG_COMMAND_DOWN: u32 = 1 << 7;

const MODIFIER_MASK: u32 =
    EVENTFLAG_SHIFT_DOWN | EVENTFLAG_CONTROL_DOWN | EVENTFLAG_ALT_DOWN | EVENTFLAG_COMMAND_DOWN;

/// A key combination in the engine's own terms: its event-flag bits and a
/// Windows virtual-key code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyCombo {
    /// Subset of the engine event flags: Shift, Control, Alt, Command.
    pub mods: u32,
    pub key_code: i32,
}

impl KeyCombo {
    /// Build from a parsed [`KeyBind`]. Fails for keys with no virtual-key code.
    pub fn from_keybind(kb: &KeyBind) -> Result<Self, PlatformError> {
        let key_code = virtual_key_code(&kb.key).ok_or_else(|| {
            PlatformError::NotSupported(format!("no virtual-key code for '{}'", kb.key))
        })?;
        let mods = kb.modifiers.iter().fold(0u32, |acc, m| {
            acc | match m {
                Modifier::Ctrl => EVENTFLAG_CONTROL_DOWN,
                Modifier::Alt => EVENTFLAG_ALT_DOWN,
                Modifier::Shift => EVENTFLAG_SHIFT_DOWN,
                Modifier::Command => EVENTFLAG_COMMAND_DOWN,
            }
        });
        Ok(Self { mods, key_code })
    }

    /// Build from a raw engine key event. Lock-key and mouse-button flags are
    /// masked off.
    pub fn from_event(modifiers: u32, key_code: i32) -> Self {
        Self {
            mods: modifiers & MODIFIER_MASK,
            key_code,
        }
    }

    /// Whether an event with these flags and key code triggers this combo.
    ///
    /// Every modifier of the combo must be held. Extra held modifiers do not
    /// prevent a match.
    pub fn matches(&self, modifiers: u32, key_code: i32) -> bool {
        self.key_code == key_code && modifiers & self.mods == self.mods
    }

    /// Reconstruct a [`KeyBind`] for display.
    pub fn to_keybind(&self) -> KeyBind {
        let mut modifiers = Vec::new();
        if self.mods & EVENTFLAG_CONTROL_DOWN != 0 {
            modifiers.push(Modifier::Ctrl);
        }
        if self.mods & EVENTFLAG_ALT_DOWN != 0 {
            modifiers.push(Modifier::Alt);
        }
        if self.mods & EVENTFLAG_SHIFT_DOWN != 0 {
            modifiers.push(Modifier::Shift);
        }
        if self.mods & EVENTFLAG_COMMAND_DOWN != 0 {
            modifiers.push(Modifier::Command);
        }
        KeyBind {
            modifiers,
            key: key_name_for_code(self.key_code)
                .unwrap_or_else(|| format!("0x{:02X}", self.key_code)),
        }
    }

    pub(super) fn modifier_count(&self) -> u32 {
        self.mods.count_ones()
    }
}
