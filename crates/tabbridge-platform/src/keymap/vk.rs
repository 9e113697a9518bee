//! Mapping between normalized key names and Windows virtual-key codes.
//!
//! The engine reports `windows_key_code` on every platform, so shortcut
//! matching happens in this code space.

const NAMED_KEYS: &[(&str, i32)] = &[
    ("Backspace", 0x08),
    ("Tab", 0x09),
    ("Enter", 0x0D),
    ("Escape", 0x1B),
    ("Space", 0x20),
    ("PageUp", 0x21),
    ("PageDown", 0x22),
    ("End", 0x23),
    ("Home", 0x24),
    ("Left", 0x25),
    ("Up", 0x26),
    ("Right", 0x27),
    ("Down", 0x28),
    ("Insert", 0x2D),
    ("Delete", 0x2E),
    (";", 0xBA),
    ("=", 0xBB),
    (",", 0xBC),
    ("-", 0xBD),
    (".", 0xBE),
    ("/", 0xBF),
    ("`", 0xC0),
    ("[", 0xDB),
    ("\\", 0xDC),
    ("]", 0xDD),
    ("'", 0xDE),
];

const VK_F1: i32 = 0x70;

/// Virtual-key code for a normalized key name (`"T"`, `"F5"`, `"Enter"`).
pub fn virtual_key_code(key: &str) -> Option<i32> {
    let mut chars = key.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        if c.is_ascii_uppercase() || c.is_ascii_digit() {
            return Some(c as i32);
        }
    }

    if let Some(n) = key.strip_prefix('F').and_then(|n| n.parse::<i32>().ok()) {
        if (1..=24).contains(&n) {
            return Some(VK_F1 + n - 1);
        }
    }

    NAMED_KEYS
        .iter()
        .find(|(name, _)| *name == key)
        .map(|(_, code)| *code)
}

/// Reverse of [`virtual_key_code`].
pub fn key_name_for_code(code: i32) -> Option<String> {
    match code {
        0x30..=0x39 | 0x41..=0x5A => char::from_u32(code as u32).map(String::from),
        c if (VK_F1..VK_F1 + 24).contains(&c) => Some(format!("F{}", c - VK_F1 + 1)),
        _ => NAMED_KEYS
            .iter()
            .find(|(_, c)| *c == code)
            .map(|(name, _)| name.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letters_and_digits_are_ascii() {
        assert_eq!(virtual_key_code("T"), Some(0x54));
        assert_eq!(virtual_key_code("W"), Some(0x57));
        assert_eq!(virtual_key_code("0"), Some(0x30));
    }

    #[test]
    fn lowercase_is_not_normalized_here() {
        assert_eq!(virtual_key_code("t"), None);
    }

    #[test]
    fn function_keys() {
        assert_eq!(virtual_key_code("F1"), Some(0x70));
        assert_eq!(virtual_key_code("F12"), Some(0x7B));
        assert_eq!(virtual_key_code("F25"), None);
    }

    #[test]
    fn named_keys() {
        assert_eq!(virtual_key_code("Enter"), Some(0x0D));
        assert_eq!(virtual_key_code("Escape"), Some(0x1B));
        assert_eq!(virtual_key_code("."), Some(0xBE));
        assert_eq!(virtual_key_code("Nope"), None);
    }

    #[test]
    fn reverse_lookup() {
        assert_eq!(key_name_for_code(0x54).as_deref(), Some("T"));
        assert_eq!(key_name_for_code(0x74).as_deref(), Some("F5"));
        assert_eq!(key_name_for_code(0x09).as_deref(), Some("Tab"));
        assert_eq!(key_name_for_code(0xFF), None);
    }
}
