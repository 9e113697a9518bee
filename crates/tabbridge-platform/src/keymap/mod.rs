mod display;
mod parse;
mod types;
mod vk;

pub use display::keybind_to_display;
pub use parse::parse_keybind;
pub use types::{KeyBind, Modifier};
pub use vk::{key_name_for_code, virtual_key_code};
