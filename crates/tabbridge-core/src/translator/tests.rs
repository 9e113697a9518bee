use std::rc::Rc;
use std::sync::Arc;

use tabbridge_common::TabId;
use tabbridge_config::schema::{BridgeConfig, KeybindConfig, TabsConfig};
use tabbridge_platform::input::{EVENTFLAG_CONTROL_DOWN, EVENTFLAG_SHIFT_DOWN};
use tabbridge_platform::ShortcutRegistry;

use super::*;
use crate::engine::{BrowserRef, FrameRef, KeyEvent, KeyEventKind};
use crate::protocol::{Notification, NotificationKind};
use crate::router::{ClientRouter, EngineEvent};
use crate::testing::{FakeBrowser, FakeFrame, FakeHost, HostCall, RecordingSink};

const VK_T: i32 = 0x54;
const VK_W: i32 = 0x57;

struct Harness {
    sink: RecordingSink,
    host: Rc<FakeHost>,
    translator: Rc<EventTranslator>,
    router: ClientRouter,
}

impl Harness {
    fn new() -> Self {
        Self::with_config(&BridgeConfig::default())
    }

    fn with_config(config: &BridgeConfig) -> Self {
        let sink = RecordingSink::default();
        let host = Rc::new(FakeHost::default());
        let translator = Rc::new(EventTranslator::from_config(
            Box::new(sink.clone()),
            host.clone(),
            config,
        ));
        let router = ClientRouter::for_component(translator.clone());
        Self {
            sink,
            host,
            translator,
            router,
        }
    }

    fn open(&self, id: i32) -> Arc<FakeBrowser> {
        let browser = Arc::new(FakeBrowser::new(id));
        self.router.dispatch(&EngineEvent::AfterCreated {
            browser: browser.clone(),
        });
        browser
    }

    /// Drive the engine's close sequence for `browser`.
    fn engine_close(&self, browser: &Arc<FakeBrowser>) -> bool {
        let vetoed = self.router.dispatch(&EngineEvent::DoClose {
            browser: browser.clone(),
        });
        self.router.dispatch(&EngineEvent::BeforeClose {
            browser: browser.clone(),
        });
        vetoed
    }

    fn kinds(&self) -> Vec<NotificationKind> {
        self.sink.notifications().iter().map(|n| n.kind()).collect()
    }

    fn count(&self, kind: NotificationKind) -> usize {
        self.kinds().into_iter().filter(|k| *k == kind).count()
    }
}

fn load_error(browser: &BrowserRef, frame: &Arc<FakeFrame>, url: &str) -> EngineEvent {
    EngineEvent::LoadError {
        browser: browser.clone(),
        frame: frame.clone(),
        error_code: -105,
        error_text: "ERR_NAME_NOT_RESOLVED".into(),
        failed_url: url.into(),
    }
}

// ---------------------------------------------------------------------------
// Tab creation
// ---------------------------------------------------------------------------

#[test]
fn after_created_registers_and_announces_tab() {
    let h = Harness::new();
    h.open(7);

    assert_eq!(h.translator.tab_count(), 1);
    assert_eq!(h.translator.active_tab(), Some(TabId(7)));
    assert_eq!(h.translator.tab_state(TabId(7)), Some(TabState::Active));
    assert_eq!(
        h.sink.notifications(),
        vec![Notification::TabCreated {
            tab_id: TabId(7),
            url: "about:blank".into(),
            title: "New Tab".into(),
        }]
    );
}

#[test]
fn tab_created_uses_configured_defaults() {
    let mut config = BridgeConfig::default();
    config.tabs = TabsConfig {
        default_title: "Untitled".into(),
        blank_url: "about:newtab".into(),
    };
    let h = Harness::with_config(&config);
    h.open(1);

    assert_eq!(
        h.sink.raw(),
        vec![r#"{"type":"TAB_CREATED","tabId":1,"url":"about:newtab","title":"Untitled"}"#]
    );
}

#[test]
fn newest_tab_becomes_active() {
    let h = Harness::new();
    h.open(1);
    h.open(2);
    assert_eq!(h.translator.active_tab(), Some(TabId(2)));
    assert_eq!(h.count(NotificationKind::TabCreated), 2);
}

// ---------------------------------------------------------------------------
// Load errors
// ---------------------------------------------------------------------------

#[test]
fn main_frame_load_error_renders_page_and_reports_once() {
    let h = Harness::new();
    let browser: BrowserRef = h.open(3);
    h.sink.clear();

    let frame = Arc::new(FakeFrame::main());
    h.router
        .dispatch(&load_error(&browser, &frame, "https://nope.invalid/"));

    assert_eq!(
        h.sink.notifications(),
        vec![Notification::LoadError {
            tab_id: TabId(3),
            error_code: -105,
            error_text: "ERR_NAME_NOT_RESOLVED".into(),
            failed_url: "https://nope.invalid/".into(),
        }]
    );

    let loaded = frame.loaded_strings();
    assert_eq!(loaded.len(), 1);
    let (html, url) = &loaded[0];
    assert_eq!(url, "https://nope.invalid/");
    assert!(html.contains("https://nope.invalid/"));
    assert!(html.contains("ERR_NAME_NOT_RESOLVED"));
}

#[test]
fn sub_frame_load_error_is_ignored() {
    let h = Harness::new();
    let browser: BrowserRef = h.open(3);
    h.sink.clear();

    let frame = Arc::new(FakeFrame::sub());
    h.router
        .dispatch(&load_error(&browser, &frame, "https://ads.example/frame"));

    assert!(h.sink.raw().is_empty());
    assert!(frame.loaded_strings().is_empty());
}

// ---------------------------------------------------------------------------
// Display and loading state
// ---------------------------------------------------------------------------

#[test]
fn title_change_always_emits() {
    let h = Harness::new();
    let browser: BrowserRef = h.open(1);
    h.sink.clear();

    h.router.dispatch(&EngineEvent::TitleChange {
        browser: browser.clone(),
        title: "Example Domain".into(),
    });
    h.router.dispatch(&EngineEvent::TitleChange {
        browser,
        title: String::new(),
    });

    assert_eq!(h.count(NotificationKind::TitleChanged), 2);
}

#[test]
fn address_change_only_for_main_frame() {
    let h = Harness::new();
    let browser: BrowserRef = h.open(1);
    h.sink.clear();

    let main: FrameRef = Arc::new(FakeFrame::main());
    let sub: FrameRef = Arc::new(FakeFrame::sub());
    h.router.dispatch(&EngineEvent::AddressChange {
        browser: browser.clone(),
        frame: sub,
        url: "https://ads.example/".into(),
    });
    h.router.dispatch(&EngineEvent::AddressChange {
        browser,
        frame: main,
        url: "https://example.com/".into(),
    });

    assert_eq!(
        h.sink.notifications(),
        vec![Notification::UrlChanged {
            tab_id: TabId(1),
            url: "https://example.com/".into(),
        }]
    );
}

#[test]
fn empty_favicon_list_emits_nothing() {
    let h = Harness::new();
    let browser: BrowserRef = h.open(1);
    h.sink.clear();

    h.router.dispatch(&EngineEvent::FaviconUrlChange {
        browser,
        icon_urls: Vec::new(),
    });

    assert!(h.sink.raw().is_empty());
}

#[test]
fn favicon_reports_first_url_only() {
    let h = Harness::new();
    let browser: BrowserRef = h.open(1);
    h.sink.clear();

    h.router.dispatch(&EngineEvent::FaviconUrlChange {
        browser,
        icon_urls: vec![
            "https://example.com/a.ico".into(),
            "https://example.com/b.png".into(),
        ],
    });

    assert_eq!(
        h.sink.notifications(),
        vec![Notification::FaviconChanged {
            tab_id: TabId(1),
            favicon: "https://example.com/a.ico".into(),
        }]
    );
}

#[test]
fn loading_state_is_forwarded() {
    let h = Harness::new();
    let browser: BrowserRef = h.open(2);
    h.sink.clear();

    h.router.dispatch(&EngineEvent::LoadingStateChange {
        browser,
        is_loading: false,
        can_go_back: true,
        can_go_forward: false,
    });

    assert_eq!(
        h.sink.raw(),
        vec![
            r#"{"type":"LOADING_STATE_CHANGED","tabId":2,"isLoading":false,"canGoBack":true,"canGoForward":false}"#
        ]
    );
}

// ---------------------------------------------------------------------------
// Close coordination
// ---------------------------------------------------------------------------

#[test]
fn closing_last_tab_quits_exactly_once() {
    let h = Harness::new();
    let browser = h.open(1);

    assert!(!h.engine_close(&browser));

    assert_eq!(h.translator.tab_count(), 0);
    assert!(h.translator.is_closing());
    assert_eq!(h.host.quit_count(), 1);

    // A stray duplicate before-close must not quit again.
    h.router.dispatch(&EngineEvent::BeforeClose { browser });
    assert_eq!(h.host.quit_count(), 1);
}

#[test]
fn closing_one_of_several_never_quits() {
    let h = Harness::new();
    let first = h.open(1);
    let _second = h.open(2);

    assert!(!h.engine_close(&first));

    assert_eq!(h.translator.tab_count(), 1);
    assert!(!h.translator.is_closing());
    assert_eq!(h.host.quit_count(), 0);
    assert_eq!(h.translator.active_tab(), Some(TabId(2)));
}

#[test]
fn do_close_marks_last_tab_pending_without_veto() {
    let h = Harness::new();
    let browser = h.open(1);

    let vetoed = h.router.dispatch(&EngineEvent::DoClose {
        browser: browser.clone(),
    });

    assert!(!vetoed);
    assert!(h.translator.is_closing());
    assert_eq!(h.translator.tab_state(TabId(1)), Some(TabState::ClosePending));
    assert_eq!(h.host.quit_count(), 0);
}

#[test]
fn before_close_emits_tab_closed() {
    let h = Harness::new();
    let a = h.open(1);
    h.open(2);
    h.sink.clear();

    h.engine_close(&a);

    assert_eq!(
        h.sink.notifications(),
        vec![Notification::TabClosed { tab_id: TabId(1) }]
    );
}

#[test]
fn before_close_for_unknown_tab_is_ignored() {
    let h = Harness::new();
    h.open(1);
    h.sink.clear();

    let stranger = Arc::new(FakeBrowser::new(99));
    h.router.dispatch(&EngineEvent::BeforeClose { browser: stranger });

    assert_eq!(h.translator.tab_count(), 1);
    assert!(h.sink.raw().is_empty());
    assert_eq!(h.host.quit_count(), 0);
}

// ---------------------------------------------------------------------------
// Popups, shortcuts, navigation
// ---------------------------------------------------------------------------

#[test]
fn popup_is_cancelled_and_opened_as_tab() {
    let h = Harness::new();
    let browser: BrowserRef = h.open(1);

    let cancelled = h.router.dispatch(&EngineEvent::BeforePopup {
        browser,
        frame: Arc::new(FakeFrame::main()),
        target_url: "https://example.com/popup".into(),
    });

    assert!(cancelled);
    assert_eq!(
        h.host.calls(),
        vec![HostCall::CreateBrowser("https://example.com/popup".into())]
    );
}

#[test]
fn ctrl_t_creates_exactly_one_blank_tab() {
    let h = Harness::new();
    let browser: BrowserRef = h.open(1);

    let consumed = h.router.dispatch(&EngineEvent::KeyEvent {
        browser,
        event: KeyEvent::raw_key_down(EVENTFLAG_CONTROL_DOWN, VK_T),
    });

    assert!(consumed);
    assert_eq!(
        h.host.calls(),
        vec![HostCall::CreateBrowser("about:blank".into())]
    );
}

#[test]
fn ctrl_w_closes_exactly_the_focused_browser() {
    let h = Harness::new();
    let first = h.open(1);
    let second = h.open(2);

    let consumed = h.router.dispatch(&EngineEvent::KeyEvent {
        browser: first.clone(),
        event: KeyEvent::raw_key_down(EVENTFLAG_CONTROL_DOWN, VK_W),
    });

    assert!(consumed);
    assert_eq!(first.closes(), vec![false]);
    assert!(second.closes().is_empty());
}

#[test]
fn shortcuts_ignore_non_raw_key_events() {
    let h = Harness::new();
    let browser: BrowserRef = h.open(1);

    for kind in [KeyEventKind::KeyDown, KeyEventKind::KeyUp, KeyEventKind::Char] {
        let consumed = h.router.dispatch(&EngineEvent::KeyEvent {
            browser: browser.clone(),
            event: KeyEvent {
                kind,
                modifiers: EVENTFLAG_CONTROL_DOWN,
                windows_key_code: VK_T,
            },
        });
        assert!(!consumed);
    }
    assert!(h.host.calls().is_empty());
}

#[test]
fn unbound_keys_pass_through() {
    let h = Harness::new();
    let browser: BrowserRef = h.open(1);

    assert!(!h.router.dispatch(&EngineEvent::KeyEvent {
        browser: browser.clone(),
        event: KeyEvent::raw_key_down(0, VK_T),
    }));
    assert!(!h.router.dispatch(&EngineEvent::KeyEvent {
        browser,
        event: KeyEvent::raw_key_down(EVENTFLAG_SHIFT_DOWN, VK_W),
    }));
    assert!(h.host.calls().is_empty());
}

#[test]
fn rebound_shortcut_is_honored() {
    let mut config = BridgeConfig::default();
    config.keybinds = KeybindConfig {
        new_tab: "Ctrl+Shift+N".into(),
        close_tab: "Ctrl+W".into(),
    };
    let h = Harness::with_config(&config);
    let browser: BrowserRef = h.open(1);

    assert!(!h.router.dispatch(&EngineEvent::KeyEvent {
        browser: browser.clone(),
        event: KeyEvent::raw_key_down(EVENTFLAG_CONTROL_DOWN, VK_T),
    }));
    assert!(h.router.dispatch(&EngineEvent::KeyEvent {
        browser,
        event: KeyEvent::raw_key_down(EVENTFLAG_CONTROL_DOWN | EVENTFLAG_SHIFT_DOWN, 0x4E),
    }));
    assert_eq!(
        h.host.calls(),
        vec![HostCall::CreateBrowser("about:blank".into())]
    );
}

#[test]
fn create_new_tab_keeps_explicit_url() {
    let h = Harness::new();
    h.translator.create_new_tab("https://example.com/");
    assert_eq!(
        h.host.calls(),
        vec![HostCall::CreateBrowser("https://example.com/".into())]
    );
}

#[test]
fn navigate_targets_active_tab() {
    let h = Harness::new();
    h.open(1);
    h.open(2);

    h.translator.navigate_to_url("https://example.com/");

    assert_eq!(
        h.host.calls(),
        vec![HostCall::LoadUrl(TabId(2), "https://example.com/".into())]
    );
}

#[test]
fn navigate_without_tabs_does_nothing() {
    let h = Harness::new();
    h.translator.navigate_to_url("https://example.com/");
    assert!(h.host.calls().is_empty());
}

#[test]
fn close_tab_requests_non_forced_close() {
    let h = Harness::new();
    let browser = h.open(4);
    let as_ref: BrowserRef = browser.clone();

    h.translator.close_tab(&as_ref);

    assert_eq!(browser.closes(), vec![false]);
    assert_eq!(as_ref.id(), TabId(4));
}

#[test]
fn explicit_constructor_uses_given_shortcuts() {
    let sink = RecordingSink::default();
    let host = Rc::new(FakeHost::default());
    let translator = EventTranslator::new(
        Box::new(sink),
        host.clone(),
        &TabsConfig::default(),
        ShortcutRegistry::from_config(&KeybindConfig::default()),
    );
    let browser: BrowserRef = Arc::new(FakeBrowser::new(1));

    assert!(translator.on_pre_key_event(
        &browser,
        &KeyEvent::raw_key_down(EVENTFLAG_CONTROL_DOWN, VK_T)
    ));
    assert_eq!(host.calls().len(), 1);
    assert!(!translator.quit_requested());
}
