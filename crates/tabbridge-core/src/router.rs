//! Fan-out from engine callbacks to the observer registered for each role.

use std::fmt;
use std::rc::Rc;

use crate::engine::{BrowserRef, FrameRef, KeyEvent};
use crate::observers::{DisplayObserver, KeyObserver, LifeSpanObserver, LoadObserver};

/// One engine callback, with the handles it was delivered with.
#[derive(Clone)]
pub enum EngineEvent {
    AfterCreated {
        browser: BrowserRef,
    },
    DoClose {
        browser: BrowserRef,
    },
    BeforeClose {
        browser: BrowserRef,
    },
    BeforePopup {
        browser: BrowserRef,
        frame: FrameRef,
        target_url: String,
    },
    LoadError {
        browser: BrowserRef,
        frame: FrameRef,
        error_code: i32,
        error_text: String,
        failed_url: String,
    },
    TitleChange {
        browser: BrowserRef,
        title: String,
    },
    AddressChange {
        browser: BrowserRef,
        frame: FrameRef,
        url: String,
    },
    FaviconUrlChange {
        browser: BrowserRef,
        icon_urls: Vec<String>,
    },
    LoadingStateChange {
        browser: BrowserRef,
        is_loading: bool,
        can_go_back: bool,
        can_go_forward: bool,
    },
    KeyEvent {
        browser: BrowserRef,
        event: KeyEvent,
    },
}

impl EngineEvent {
    pub fn name(&self) -> &'static str {
        match self {
            EngineEvent::AfterCreated { .. } => "after_created",
            EngineEvent::DoClose { .. } => "do_close",
            EngineEvent::BeforeClose { .. } => "before_close",
            EngineEvent::BeforePopup { .. } => "before_popup",
            EngineEvent::LoadError { .. } => "load_error",
            EngineEvent::TitleChange { .. } => "title_change",
            EngineEvent::AddressChange { .. } => "address_change",
            EngineEvent::FaviconUrlChange { .. } => "favicon_url_change",
            EngineEvent::LoadingStateChange { .. } => "loading_state_change",
            EngineEvent::KeyEvent { .. } => "key_event",
        }
    }

    pub fn browser(&self) -> &BrowserRef {
        match self {
            EngineEvent::AfterCreated { browser }
            | EngineEvent::DoClose { browser }
            | EngineEvent::BeforeClose { browser }
            | EngineEvent::BeforePopup { browser, .. }
            | EngineEvent::LoadError { browser, .. }
            | EngineEvent::TitleChange { browser, .. }
            | EngineEvent::AddressChange { browser, .. }
            | EngineEvent::FaviconUrlChange { browser, .. }
            | EngineEvent::LoadingStateChange { browser, .. }
            | EngineEvent::KeyEvent { browser, .. } => browser,
        }
    }
}

impl fmt::Debug for EngineEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EngineEvent")
            .field("name", &self.name())
            .field("tab_id", &self.browser().id())
            .finish()
    }
}

/// Routes engine callbacks to per-role observers.
///
/// A role with no observer falls back to the engine default: nothing
/// happens and boolean callbacks answer `false`.
#[derive(Default)]
pub struct ClientRouter {
    life_span: Option<Rc<dyn LifeSpanObserver>>,
    load: Option<Rc<dyn LoadObserver>>,
    display: Option<Rc<dyn DisplayObserver>>,
    keyboard: Option<Rc<dyn KeyObserver>>,
}

impl ClientRouter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fill every role with the same component.
    pub fn for_component<T>(component: Rc<T>) -> Self
    where
        T: LifeSpanObserver + LoadObserver + DisplayObserver + KeyObserver + 'static,
    {
        Self {
            life_span: Some(component.clone()),
            load: Some(component.clone()),
            display: Some(component.clone()),
            keyboard: Some(component),
        }
    }

    pub fn with_life_span(mut self, observer: Rc<dyn LifeSpanObserver>) -> Self {
        self.life_span = Some(observer);
        self
    }

    pub fn with_load(mut self, observer: Rc<dyn LoadObserver>) -> Self {
        self.load = Some(observer);
        self
    }

    pub fn with_display(mut self, observer: Rc<dyn DisplayObserver>) -> Self {
        self.display = Some(observer);
        self
    }

    pub fn with_keyboard(mut self, observer: Rc<dyn KeyObserver>) -> Self {
        self.keyboard = Some(observer);
        self
    }

    /// Deliver one callback. Returns the observer's answer for the boolean
    /// callbacks (do-close veto, popup cancel, key consumed) and `false` for
    /// the rest.
    pub fn dispatch(&self, event: &EngineEvent) -> bool {
        tracing::trace!(event = event.name(), tab_id = %event.browser().id(), "dispatch");

        match event {
            EngineEvent::AfterCreated { browser } => {
                if let Some(o) = &self.life_span {
                    o.on_after_created(browser);
                }
                false
            }
            EngineEvent::DoClose { browser } => self
                .life_span
                .as_ref()
                .is_some_and(|o| o.do_close(browser)),
            EngineEvent::BeforeClose { browser } => {
                if let Some(o) = &self.life_span {
                    o.on_before_close(browser);
                }
                false
            }
            EngineEvent::BeforePopup {
                browser,
                frame,
                target_url,
            } => self
                .life_span
                .as_ref()
                .is_some_and(|o| o.on_before_popup(browser, frame, target_url)),
            EngineEvent::LoadError {
                browser,
                frame,
                error_code,
                error_text,
                failed_url,
            } => {
                if let Some(o) = &self.load {
                    o.on_load_error(browser, frame, *error_code, error_text, failed_url);
                }
                false
            }
            EngineEvent::TitleChange { browser, title } => {
                if let Some(o) = &self.display {
                    o.on_title_change(browser, title);
                }
                false
            }
            EngineEvent::AddressChange {
                browser,
                frame,
                url,
            } => {
                if let Some(o) = &self.display {
                    o.on_address_change(browser, frame, url);
                }
                false
            }
            EngineEvent::FaviconUrlChange { browser, icon_urls } => {
                if let Some(o) = &self.display {
                    o.on_favicon_url_change(browser, icon_urls);
                }
                false
            }
            EngineEvent::LoadingStateChange {
                browser,
                is_loading,
                can_go_back,
                can_go_forward,
            } => {
                if let Some(o) = &self.load {
                    o.on_loading_state_change(browser, *is_loading, *can_go_back, *can_go_forward);
                }
                false
            }
            EngineEvent::KeyEvent { browser, event } => self
                .keyboard
                .as_ref()
                .is_some_and(|o| o.on_pre_key_event(browser, event)),
        }
    }
}
