use serde::{Deserialize, Serialize};

/// Where outbound notifications are delivered.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ConnectionConfig {
    /// WebSocket URL of the front-end peer.
    pub url: String,
    /// When false the bridge never opens a socket and every send is a no-op.
    pub enabled: bool,
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self {
            url: "ws://localhost:3000".into(),
            enabled: true,
        }
    }
}
