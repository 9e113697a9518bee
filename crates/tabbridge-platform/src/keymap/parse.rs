use tabbridge_common::PlatformError;

use super::types::{KeyBind, Modifier};

/// Parses a keybind string like `"Ctrl+T"` or `"Ctrl+Shift+W"` into a
/// [`KeyBind`].
///
/// Every token but the last must be a modifier. `"Cmd"` maps to
/// `Command` on macOS and to `Ctrl` elsewhere.
pub fn parse_keybind(s: &str) -> Result<KeyBind, PlatformError> {
    let tokens: Vec<&str> = s.split('+').map(|t| t.trim()).collect();

    if tokens.iter().all(|t| t.is_empty()) {
        return Err(PlatformError::NotSupported("empty keybind string".into()));
    }

    let (key_token, modifier_tokens) = match tokens.split_last() {
        Some((last, rest)) if !last.is_empty() => (*last, rest),
        _ => {
            return Err(PlatformError::NotSupported(format!(
                "keybind '{s}' has no key component"
            )))
        }
    };

    let mut modifiers = Vec::new();
    for token in modifier_tokens {
        let modifier = normalize_modifier(token).ok_or_else(|| {
            PlatformError::NotSupported(format!("unrecognized modifier: {token}"))
        })?;
        if !modifiers.contains(&modifier) {
            modifiers.push(modifier);
        }
    }

    Ok(KeyBind {
        modifiers,
        key: normalize_key_name(key_token),
    })
}

fn normalize_modifier(token: &str) -> Option<Modifier> {
    match token.to_lowercase().as_str() {
        "ctrl" | "control" => Some(Modifier::Ctrl),
        "alt" | "option" | "opt" => Some(Modifier::Alt),
        "shift" => Some(Modifier::Shift),
        "cmd" | "command" => {
            if cfg!(target_os = "macos") {
                Some(Modifier::Command)
            } else {
                Some(Modifier::Ctrl)
            }
        }
        "super" | "win" | "meta" => Some(Modifier::Command),
        _ => None,
    }
}

fn normalize_key_name(token: &str) -> String {
    let lower = token.to_lowercase();
    match lower.as_str() {
        "period" => ".".into(),
        "comma" => ",".into(),
        "slash" => "/".into(),
        "minus" => "-".into(),
        "space" => "Space".into(),
        "enter" | "return" => "Enter".into(),
        "escape" | "esc" => "Escape".into(),
        "tab" => "Tab".into(),
        "backspace" => "Backspace".into(),
        "delete" | "del" => "Delete".into(),
        "insert" | "ins" => "Insert".into(),
        "pageup" => "PageUp".into(),
        "pagedown" => "PageDown".into(),
        _ if token.chars().count() == 1 => token.to_uppercase(),
        _ => {
            let mut chars = lower.chars();
            match chars.next() {
                Some(c) => format!("{}{}", c.to_uppercase(), chars.as_str()),
                None => lower,
            }
        }
    }
}
