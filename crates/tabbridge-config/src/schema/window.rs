//! Window configuration types.

use serde::{Deserialize, Serialize};

/// Initial geometry and title of the host window.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Width in pixels (valid range: 200-10000).
    pub width: u32,
    /// Height in pixels (valid range: 200-10000).
    pub height: u32,
    pub title: String,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1024,
            height: 768,
            title: "Lightweight Browser".into(),
        }
    }
}
