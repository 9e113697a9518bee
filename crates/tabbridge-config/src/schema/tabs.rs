use serde::{Deserialize, Serialize};

/// Tab presentation defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TabsConfig {
    /// Title announced for a freshly created tab.
    pub default_title: String,
    /// URL a new tab opens when no target is given.
    pub blank_url: String,
}

impl Default for TabsConfig {
    fn default() -> Self {
        Self {
            default_title: "New Tab".into(),
            blank_url: "about:blank".into(),
        }
    }
}
