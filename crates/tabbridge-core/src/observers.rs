//! Narrow callback traits, one per engine handler role.
//!
//! Every method has a no-op default so a component implements only the
//! callbacks it cares about. Return values follow the engine's convention.

use crate::engine::{BrowserRef, FrameRef, KeyEvent};

pub trait LifeSpanObserver {
    fn on_after_created(&self, _browser: &BrowserRef) {}

    /// Return `true` to veto the close.
    fn do_close(&self, _browser: &BrowserRef) -> bool {
        false
    }

    fn on_before_close(&self, _browser: &BrowserRef) {}

    /// Return `true` to cancel the popup window.
    fn on_before_popup(&self, _browser: &BrowserRef, _frame: &FrameRef, _target_url: &str) -> bool {
        false
    }
}

pub trait LoadObserver {
    fn on_load_error(
        &self,
        _browser: &BrowserRef,
        _frame: &FrameRef,
        _error_code: i32,
        _error_text: &str,
        _failed_url: &str,
    ) {
    }

    fn on_loading_state_change(
        &self,
        _browser: &BrowserRef,
        _is_loading: bool,
        _can_go_back: bool,
        _can_go_forward: bool,
    ) {
    }
}

pub trait DisplayObserver {
    fn on_title_change(&self, _browser: &BrowserRef, _title: &str) {}

    fn on_address_change(&self, _browser: &BrowserRef, _frame: &FrameRef, _url: &str) {}

    fn on_favicon_url_change(&self, _browser: &BrowserRef, _icon_urls: &[String]) {}
}

pub trait KeyObserver {
    /// Called before the page handles the key. Return `true` to consume it.
    fn on_pre_key_event(&self, _browser: &BrowserRef, _event: &KeyEvent) -> bool {
        false
    }
}
