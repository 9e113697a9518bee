use super::types::{KeyBind, Modifier};

/// Renders a [`KeyBind`] back into the `"Ctrl+Shift+T"` text form used in
/// config files and log lines.
pub fn keybind_to_display(kb: &KeyBind) -> String {
    let mut parts: Vec<&str> = kb.modifiers.iter().map(|m| display_modifier(*m)).collect();
    parts.push(&kb.key);
    parts.join("+")
}

fn display_modifier(modifier: Modifier) -> &'static str {
    match modifier {
        Modifier::Ctrl => "Ctrl",
        Modifier::Alt => "Alt",
        Modifier::Shift => "Shift",
        Modifier::Command => {
            if cfg!(target_os = "macos") {
                "Cmd"
            } else if cfg!(target_os = "windows") {
                "Win"
            } else {
                "Super"
            }
        }
    }
}
