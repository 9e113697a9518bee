//! Keybind validation utilities.

use crate::schema::KeybindConfig;
use std::collections::HashMap;
use tabbridge_common::ConfigError;

/// Returns all keybinds as `(name, binding)` pairs.
pub fn all_keybinds(config: &KeybindConfig) -> Vec<(&str, &str)> {
    vec![
        ("new_tab", &config.new_tab),
        ("close_tab", &config.close_tab),
    ]
}

/// Validate that no two keybinds are mapped to the same key combination.
///
/// Comparison ignores case and surrounding whitespace so "ctrl+t" and
/// "Ctrl + T" count as the same binding.
pub fn validate_no_duplicates(config: &KeybindConfig) -> Result<(), ConfigError> {
    let mut seen: HashMap<String, &str> = HashMap::new();

    for (name, binding) in all_keybinds(config) {
        let key = canonical(binding);
        if let Some(existing_name) = seen.get(&key) {
            return Err(ConfigError::ValidationError(format!(
                "duplicate keybind '{binding}': assigned to both '{existing_name}' and '{name}'"
            )));
        }
        seen.insert(key, name);
    }

    Ok(())
}

fn canonical(binding: &str) -> String {
    binding
        .split('+')
        .map(|t| t.trim().to_lowercase())
        .collect::<Vec<_>>()
        .join("+")
}
