//! Engine callbacks in, JSON notifications out.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use tabbridge_common::{TabCommand, TabId};
use tabbridge_config::schema::{BridgeConfig, TabsConfig};
use tabbridge_platform::ShortcutRegistry;

use crate::engine::{BrowserHost, BrowserRef, FrameRef, KeyEvent, KeyEventKind};
use crate::error_page;
use crate::observers::{DisplayObserver, KeyObserver, LifeSpanObserver, LoadObserver};
use crate::protocol::Notification;
use crate::registry::{TabRegistry, TabState};
use crate::sink::NotificationSink;
use crate::thread::UiThread;

#[cfg(test)]
mod tests;

/// Translates engine callbacks into [`Notification`]s and owns tab
/// bookkeeping.
///
/// Lives on the engine UI thread. Every entry point checks that in debug
/// builds, and the `Rc`/`RefCell` state keeps the type `!Send`.
pub struct EventTranslator {
    sink: Box<dyn NotificationSink>,
    host: Rc<dyn BrowserHost>,
    tabs: RefCell<TabRegistry>,
    closing: Cell<bool>,
    quit_requested: Cell<bool>,
    shortcuts: ShortcutRegistry,
    default_title: String,
    blank_url: String,
    ui: UiThread,
}

impl EventTranslator {
    /// Build a translator bound to the calling thread.
    pub fn new(
        sink: Box<dyn NotificationSink>,
        host: Rc<dyn BrowserHost>,
        tabs: &TabsConfig,
        shortcuts: ShortcutRegistry,
    ) -> Self {
        Self {
            sink,
            host,
            tabs: RefCell::new(TabRegistry::new()),
            closing: Cell::new(false),
            quit_requested: Cell::new(false),
            shortcuts,
            default_title: tabs.default_title.clone(),
            blank_url: tabs.blank_url.clone(),
            ui: UiThread::current(),
        }
    }

    pub fn from_config(
        sink: Box<dyn NotificationSink>,
        host: Rc<dyn BrowserHost>,
        config: &BridgeConfig,
    ) -> Self {
        Self::new(
            sink,
            host,
            &config.tabs,
            ShortcutRegistry::from_config(&config.keybinds),
        )
    }

    /// Ask the engine for a new tab. An empty `url` opens the blank page.
    pub fn create_new_tab(&self, url: &str) {
        self.ui.assert_current();
        let url = if url.is_empty() { self.blank_url.as_str() } else { url };
        tracing::info!(url = %url, "creating tab");
        self.host.create_browser(url);
    }

    /// Ask the engine to close `browser`. The engine answers with do-close
    /// and before-close.
    pub fn close_tab(&self, browser: &BrowserRef) {
        self.ui.assert_current();
        tracing::info!(tab_id = %browser.id(), "closing tab");
        browser.close(false);
    }

    /// Load `url` in the active tab. Ignored when no tab is active.
    pub fn navigate_to_url(&self, url: &str) {
        self.ui.assert_current();
        let Some(active) = self.tabs.borrow().active() else {
            tracing::debug!(url = %url, "no active tab, navigation ignored");
            return;
        };
        tracing::info!(tab_id = %active, url = %url, "navigating");
        self.host.load_url(active, url);
    }

    /// Set once a close was requested while only one tab was open.
    pub fn is_closing(&self) -> bool {
        self.closing.get()
    }

    pub fn tab_count(&self) -> usize {
        self.tabs.borrow().len()
    }

    pub fn active_tab(&self) -> Option<TabId> {
        self.tabs.borrow().active()
    }

    pub fn tab_state(&self, id: TabId) -> Option<TabState> {
        self.tabs.borrow().state(id)
    }

    pub fn quit_requested(&self) -> bool {
        self.quit_requested.get()
    }

    fn emit(&self, notification: Notification) {
        match notification.to_json() {
            Ok(text) => {
                tracing::debug!(
                    kind = notification.kind().wire_name(),
                    tab_id = %notification.tab_id(),
                    "notify"
                );
                self.sink.send_text(text);
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to serialize notification");
            }
        }
    }

    fn run_command(&self, command: TabCommand, browser: &BrowserRef) {
        tracing::debug!(command = command.label(), tab_id = %browser.id(), "shortcut");
        match command {
            TabCommand::NewTab => self.create_new_tab(""),
            TabCommand::CloseTab => self.close_tab(browser),
        }
    }
}

impl LifeSpanObserver for EventTranslator {
    fn on_after_created(&self, browser: &BrowserRef) {
        self.ui.assert_current();
        let id = browser.id();
        {
            let mut tabs = self.tabs.borrow_mut();
            if !tabs.insert(id) {
                tracing::warn!(tab_id = %id, "after-created for a tracked tab");
            }
            tabs.activate(id);
        }
        tracing::info!(tab_id = %id, tabs = self.tab_count(), "tab created");

        self.emit(Notification::TabCreated {
            tab_id: id,
            url: self.blank_url.clone(),
            title: self.default_title.clone(),
        });
    }

    fn do_close(&self, browser: &BrowserRef) -> bool {
        self.ui.assert_current();
        let mut tabs = self.tabs.borrow_mut();
        if tabs.len() == 1 && tabs.mark_close_pending(browser.id()) {
            self.closing.set(true);
            tracing::info!(tab_id = %browser.id(), "closing last tab");
        }
        false
    }

    fn on_before_close(&self, browser: &BrowserRef) {
        self.ui.assert_current();
        let id = browser.id();
        let (removed, now_empty) = {
            let mut tabs = self.tabs.borrow_mut();
            let removed = tabs.remove(id);
            (removed, tabs.is_empty())
        };
        if !removed {
            tracing::debug!(tab_id = %id, "before-close for an untracked tab");
            return;
        }

        tracing::info!(tab_id = %id, tabs = self.tab_count(), "tab closed");
        self.emit(Notification::TabClosed { tab_id: id });

        if now_empty && !self.quit_requested.replace(true) {
            tracing::info!("last tab closed, quitting run loop");
            self.host.quit_run_loop();
        }
    }

    fn on_before_popup(&self, browser: &BrowserRef, _frame: &FrameRef, target_url: &str) -> bool {
        self.ui.assert_current();
        tracing::debug!(tab_id = %browser.id(), url = %target_url, "popup redirected to tab");
        self.create_new_tab(target_url);
        true
    }
}

impl LoadObserver for EventTranslator {
    fn on_load_error(
        &self,
        browser: &BrowserRef,
        frame: &FrameRef,
        error_code: i32,
        error_text: &str,
        failed_url: &str,
    ) {
        self.ui.assert_current();
        if !frame.is_main() {
            return;
        }

        tracing::warn!(
            tab_id = %browser.id(),
            url = %failed_url,
            code = error_code,
            "load failed: {error_text}"
        );
        frame.load_string(&error_page::render(failed_url, error_text, error_code), failed_url);

        self.emit(Notification::LoadError {
            tab_id: browser.id(),
            error_code,
            error_text: error_text.to_string(),
            failed_url: failed_url.to_string(),
        });
    }

    fn on_loading_state_change(
        &self,
        browser: &BrowserRef,
        is_loading: bool,
        can_go_back: bool,
        can_go_forward: bool,
    ) {
        self.ui.assert_current();
        self.emit(Notification::LoadingStateChanged {
            tab_id: browser.id(),
            is_loading,
            can_go_back,
            can_go_forward,
        });
    }
}

impl DisplayObserver for EventTranslator {
    fn on_title_change(&self, browser: &BrowserRef, title: &str) {
        self.ui.assert_current();
        self.emit(Notification::TitleChanged {
            tab_id: browser.id(),
            title: title.to_string(),
        });
    }

    fn on_address_change(&self, browser: &BrowserRef, frame: &FrameRef, url: &str) {
        self.ui.assert_current();
        if !frame.is_main() {
            return;
        }
        self.emit(Notification::UrlChanged {
            tab_id: browser.id(),
            url: url.to_string(),
        });
    }

    fn on_favicon_url_change(&self, browser: &BrowserRef, icon_urls: &[String]) {
        self.ui.assert_current();
        let Some(first) = icon_urls.first() else {
            return;
        };
        self.emit(Notification::FaviconChanged {
            tab_id: browser.id(),
            favicon: first.clone(),
        });
    }
}

impl KeyObserver for EventTranslator {
    fn on_pre_key_event(&self, browser: &BrowserRef, event: &KeyEvent) -> bool {
        self.ui.assert_current();
        if event.kind != KeyEventKind::RawKeyDown {
            return false;
        }
        match self
            .shortcuts
            .resolve(event.modifiers, event.windows_key_code)
        {
            Some(command) => {
                self.run_command(command, browser);
                true
            }
            None => false,
        }
    }
}
