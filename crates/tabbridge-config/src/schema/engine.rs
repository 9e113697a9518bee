//! Engine initialization settings handed to the embedded browser at startup.

use serde::{Deserialize, Serialize};

/// Command-line switches the shell has always passed to the engine.
pub const DEFAULT_ENGINE_SWITCHES: &[&str] = &[
    "disable-gpu",
    "disable-gpu-compositing",
    "disable-software-rasterizer",
    "in-process-gpu",
    "disable-extensions",
    "disable-plugins",
];

/// Engine process and browser settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// URL loaded by the first tab.
    pub initial_url: String,
    /// Root cache directory. Empty means the platform cache dir.
    pub cache_path: String,
    /// Switches appended to the engine command line.
    pub switches: Vec<String>,
    pub no_sandbox: bool,
    pub javascript: bool,
    pub local_storage: bool,
    pub databases: bool,
    pub webgl: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            initial_url: "https://www.google.com".into(),
            cache_path: String::new(),
            switches: DEFAULT_ENGINE_SWITCHES.iter().map(|s| s.to_string()).collect(),
            no_sandbox: true,
            javascript: true,
            local_storage: true,
            databases: true,
            webgl: true,
        }
    }
}
