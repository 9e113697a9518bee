//! Validation for window, tabs, and keybind sections.

use crate::keybinds::all_keybinds;
use crate::schema::BridgeConfig;

use super::helpers::{validate_non_empty, validate_range};

pub(super) fn validate_window(errors: &mut Vec<String>, config: &BridgeConfig) {
    validate_range(errors, "window.width", config.window.width, 200, 10000);
    validate_range(errors, "window.height", config.window.height, 200, 10000);
}

pub(super) fn validate_tabs(errors: &mut Vec<String>, config: &BridgeConfig) {
    validate_non_empty(errors, "tabs.default_title", &config.tabs.default_title);
    validate_non_empty(errors, "tabs.blank_url", &config.tabs.blank_url);
}

pub(super) fn validate_keybinds(errors: &mut Vec<String>, config: &BridgeConfig) {
    for (name, binding) in all_keybinds(&config.keybinds) {
        validate_non_empty(errors, &format!("keybinds.{name}"), binding);
    }
}
