//! Drives the bridge from a script until the engine quits.

use std::rc::Rc;
use std::sync::Arc;
use std::time::Duration;

use tabbridge_common::TabId;
use tabbridge_core::{
    BrowserRef, ClientRouter, EngineEvent, EventTranslator, FrameRef, KeyEvent,
};
use tabbridge_platform::keymap::parse_keybind;
use tabbridge_platform::KeyCombo;

use crate::host::{ScriptedFrame, ScriptedHost};
use crate::script::ScriptStep;

/// What a run did.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub steps: usize,
    pub skipped: usize,
    pub events: usize,
    pub quit: bool,
}

pub struct Runner {
    host: Rc<ScriptedHost>,
    translator: Rc<EventTranslator>,
    router: ClientRouter,
}

impl Runner {
    pub fn new(host: Rc<ScriptedHost>, translator: Rc<EventTranslator>) -> Self {
        let router = ClientRouter::for_component(translator.clone());
        Self {
            host,
            translator,
            router,
        }
    }

    /// Apply each step and deliver the callbacks it causes. Stops early once
    /// the engine has been asked to quit.
    pub fn run(&self, steps: impl IntoIterator<Item = ScriptStep>) -> RunSummary {
        let mut summary = RunSummary {
            events: self.pump(),
            ..RunSummary::default()
        };

        for step in steps {
            if self.host.quit_requested() {
                break;
            }
            if self.apply(step) {
                summary.steps += 1;
            } else {
                summary.skipped += 1;
            }
            summary.events += self.pump();
        }

        summary.quit = self.host.quit_requested();
        tracing::info!(
            steps = summary.steps,
            skipped = summary.skipped,
            events = summary.events,
            tabs = self.translator.tab_count(),
            live_browsers = self.host.live_browsers(),
            quit = summary.quit,
            "script finished"
        );
        summary
    }

    /// Deliver every queued callback. Returns how many were delivered.
    fn pump(&self) -> usize {
        let mut delivered = 0;
        while let Some(event) = self.host.next_event() {
            self.router.dispatch(&event);
            if let EngineEvent::BeforeClose { browser } = &event {
                self.host.release(browser.id());
            }
            delivered += 1;
        }
        delivered
    }

    fn apply(&self, step: ScriptStep) -> bool {
        match step {
            ScriptStep::NewTab { url } => {
                self.translator.create_new_tab(&url);
                true
            }
            ScriptStep::Navigate { url } => {
                self.translator.navigate_to_url(&url);
                true
            }
            ScriptStep::Sleep { ms } => {
                std::thread::sleep(Duration::from_millis(ms));
                true
            }
            ScriptStep::Close { tab } => self.with_browser(tab, |browser| browser.close(false)),
            ScriptStep::Key { tab, keys } => {
                match parse_keybind(&keys).and_then(|kb| KeyCombo::from_keybind(&kb)) {
                    Ok(combo) => self.raise_for(tab, |browser| EngineEvent::KeyEvent {
                        browser,
                        event: KeyEvent::raw_key_down(combo.mods, combo.key_code),
                    }),
                    Err(e) => {
                        tracing::warn!(keys = %keys, "bad key in script: {e}");
                        false
                    }
                }
            }
            ScriptStep::Popup { tab, url } => self.raise_for(tab, |browser| {
                EngineEvent::BeforePopup {
                    browser,
                    frame: frame(tab, true),
                    target_url: url,
                }
            }),
            ScriptStep::LoadError {
                tab,
                code,
                text,
                url,
                main_frame,
            } => self.raise_for(tab, |browser| EngineEvent::LoadError {
                browser,
                frame: frame(tab, main_frame),
                error_code: code,
                error_text: text,
                failed_url: url,
            }),
            ScriptStep::Title { tab, title } => {
                self.raise_for(tab, |browser| EngineEvent::TitleChange { browser, title })
            }
            ScriptStep::Address {
                tab,
                url,
                main_frame,
            } => self.raise_for(tab, |browser| EngineEvent::AddressChange {
                browser,
                frame: frame(tab, main_frame),
                url,
            }),
            ScriptStep::Favicon { tab, urls } => {
                self.raise_for(tab, |browser| EngineEvent::FaviconUrlChange {
                    browser,
                    icon_urls: urls,
                })
            }
            ScriptStep::Loading {
                tab,
                is_loading,
                can_go_back,
                can_go_forward,
            } => self.raise_for(tab, |browser| EngineEvent::LoadingStateChange {
                browser,
                is_loading,
                can_go_back,
                can_go_forward,
            }),
        }
    }

    /// Queue the callback built by `build` for `tab`'s browser.
    fn raise_for(&self, tab: TabId, build: impl FnOnce(BrowserRef) -> EngineEvent) -> bool {
        self.with_browser(tab, |browser| self.host.raise(build(browser)))
    }

    fn with_browser(&self, tab: TabId, f: impl FnOnce(BrowserRef)) -> bool {
        match self.host.browser(tab) {
            Some(browser) => {
                f(browser);
                true
            }
            None => {
                tracing::warn!(tab_id = %tab, "script targets unknown tab");
                false
            }
        }
    }
}

fn frame(tab: TabId, main: bool) -> FrameRef {
    Arc::new(ScriptedFrame::new(tab, main))
}
