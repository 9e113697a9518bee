mod key_combo;
mod registry;

pub use key_combo::{
    KeyCombo, EVENTFLAG_ALT_DOWN, EVENTFLAG_COMMAND_DOWN, EVENTFLAG_CONTROL_DOWN,
    EVENTFLAG_SHIFT_DOWN,
};
pub use registry::ShortcutRegistry;
