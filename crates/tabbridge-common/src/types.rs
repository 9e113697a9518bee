use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of one engine browser instance (a tab).
///
/// Assigned by the engine and stable for the lifetime of the instance.
/// Serializes as a bare integer so it can be dropped straight into wire
/// messages as `tabId`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TabId(pub i32);

impl TabId {
    pub fn get(self) -> i32 {
        self.0
    }
}

impl From<i32> for TabId {
    fn from(id: i32) -> Self {
        Self(id)
    }
}

impl fmt::Display for TabId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
