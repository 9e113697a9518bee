pub mod input;
pub mod keymap;
pub mod paths;

pub use input::{KeyCombo, ShortcutRegistry};
pub use keymap::{KeyBind, Modifier};
pub use paths::{cache_dir, config_dir, engine_cache_dir, resolve_engine_cache};
