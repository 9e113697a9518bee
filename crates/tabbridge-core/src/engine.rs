//! The surface of the embedded browser engine the bridge talks to.
//!
//! The engine itself is a black box. These traits cover only what the
//! bridge calls; the host shell provides the implementations.

use std::sync::Arc;

use tabbridge_common::TabId;

/// One engine browser instance, i.e. one tab.
pub trait Browser: Send + Sync {
    fn id(&self) -> TabId;

    /// Ask the engine to close this browser. With `force == false` the page
    /// may run unload handlers first.
    fn close(&self, force: bool);
}

/// A frame inside a browser.
pub trait Frame: Send + Sync {
    fn is_main(&self) -> bool;

    /// Replace the frame's document with `html`, reported under `url`.
    fn load_string(&self, html: &str, url: &str);

    fn load_url(&self, url: &str);
}

pub type BrowserRef = Arc<dyn Browser>;
pub type FrameRef = Arc<dyn Frame>;

/// Process-level engine services.
pub trait BrowserHost {
    /// Create a new top-level browser. The engine answers later with an
    /// after-created callback.
    fn create_browser(&self, url: &str);

    /// Navigate the main frame of `tab`.
    fn load_url(&self, tab: TabId, url: &str);

    /// Leave the engine's message loop.
    fn quit_run_loop(&self);
}

/// Kind of a raw keyboard event, in the engine's terms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyEventKind {
    RawKeyDown,
    KeyDown,
    KeyUp,
    Char,
}

/// A keyboard event as delivered before the page sees it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    pub kind: KeyEventKind,
    /// Engine event-flag bitmask.
    pub modifiers: u32,
    /// Windows virtual-key code, reported on every platform.
    pub windows_key_code: i32,
}

impl KeyEvent {
    pub fn raw_key_down(modifiers: u32, windows_key_code: i32) -> Self {
        Self {
            kind: KeyEventKind::RawKeyDown,
            modifiers,
            windows_key_code,
        }
    }
}
