//! Configuration schema types for tabbridge.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod connection;
mod engine;
mod keybind_config;
mod system;
mod tabs;
mod window;

pub use connection::*;
pub use engine::*;
pub use keybind_config::*;
pub use system::*;
pub use tabs::*;
pub use window::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration for the bridge and its host shell.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct BridgeConfig {
    pub connection: ConnectionConfig,
    pub engine: EngineConfig,
    pub window: WindowConfig,
    pub tabs: TabsConfig,
    pub keybinds: KeybindConfig,
    pub logging: LoggingConfig,
}
