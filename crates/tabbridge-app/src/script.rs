//! JSON Lines engine scripts.
//!
//! One step per line; blank lines and `#` comments are skipped:
//!
//! ```text
//! {"step":"title","tab":1,"title":"Example Domain"}
//! {"step":"load_error","tab":1,"code":-105,"text":"ERR_NAME_NOT_RESOLVED","url":"https://nope.invalid/"}
//! {"step":"key","tab":1,"keys":"Ctrl+W"}
//! ```

use std::io::BufRead;

use serde::Deserialize;
use tabbridge_common::{BridgeError, TabId};

fn default_true() -> bool {
    true
}

/// One scripted engine callback or host action.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "step", rename_all = "snake_case")]
pub enum ScriptStep {
    /// Open a tab through the bridge. Empty URL means the blank page.
    NewTab {
        #[serde(default)]
        url: String,
    },
    /// Navigate the active tab through the bridge.
    Navigate { url: String },
    /// The engine closes `tab` as if the user closed its window.
    Close { tab: TabId },
    Popup { tab: TabId, url: String },
    LoadError {
        tab: TabId,
        code: i32,
        text: String,
        url: String,
        #[serde(default = "default_true")]
        main_frame: bool,
    },
    Title { tab: TabId, title: String },
    Address {
        tab: TabId,
        url: String,
        #[serde(default = "default_true")]
        main_frame: bool,
    },
    Favicon {
        tab: TabId,
        #[serde(default)]
        urls: Vec<String>,
    },
    Loading {
        tab: TabId,
        is_loading: bool,
        #[serde(default)]
        can_go_back: bool,
        #[serde(default)]
        can_go_forward: bool,
    },
    /// A raw key-down, written as a keybind (`"Ctrl+T"`).
    Key { tab: TabId, keys: String },
    Sleep { ms: u64 },
}

/// Parse a whole script.
pub fn parse_script(reader: impl BufRead) -> Result<Vec<ScriptStep>, BridgeError> {
    let mut steps = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let step = serde_json::from_str(trimmed).map_err(|e| {
            BridgeError::Other(format!("script line {}: {e}", index + 1))
        })?;
        steps.push(step);
    }
    Ok(steps)
}
