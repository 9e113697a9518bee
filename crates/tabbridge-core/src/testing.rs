//! In-crate fakes for the engine and the sink.

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Mutex;

use tabbridge_common::TabId;

use crate::engine::{Browser, BrowserHost, Frame};
use crate::protocol::Notification;
use crate::sink::NotificationSink;

/// Records every frame handed to it.
#[derive(Clone, Default)]
pub(crate) struct RecordingSink {
    frames: Rc<RefCell<Vec<String>>>,
}

impl RecordingSink {
    pub(crate) fn notifications(&self) -> Vec<Notification> {
        self.frames
            .borrow()
            .iter()
            .map(|f| serde_json::from_str(f).unwrap())
            .collect()
    }

    pub(crate) fn raw(&self) -> Vec<String> {
        self.frames.borrow().clone()
    }

    pub(crate) fn clear(&self) {
        self.frames.borrow_mut().clear();
    }
}

impl NotificationSink for RecordingSink {
    fn send_text(&self, text: String) {
        self.frames.borrow_mut().push(text);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum HostCall {
    CreateBrowser(String),
    LoadUrl(TabId, String),
    Quit,
}

#[derive(Default)]
pub(crate) struct FakeHost {
    calls: RefCell<Vec<HostCall>>,
}

impl FakeHost {
    pub(crate) fn calls(&self) -> Vec<HostCall> {
        self.calls.borrow().clone()
    }

    pub(crate) fn quit_count(&self) -> usize {
        self.calls
            .borrow()
            .iter()
            .filter(|c| **c == HostCall::Quit)
            .count()
    }
}

impl BrowserHost for FakeHost {
    fn create_browser(&self, url: &str) {
        self.calls
            .borrow_mut()
            .push(HostCall::CreateBrowser(url.to_string()));
    }

    fn load_url(&self, tab: TabId, url: &str) {
        self.calls
            .borrow_mut()
            .push(HostCall::LoadUrl(tab, url.to_string()));
    }

    fn quit_run_loop(&self) {
        self.calls.borrow_mut().push(HostCall::Quit);
    }
}

pub(crate) struct FakeBrowser {
    id: TabId,
    closes: Mutex<Vec<bool>>,
}

impl FakeBrowser {
    pub(crate) fn new(id: i32) -> Self {
        Self {
            id: TabId(id),
            closes: Mutex::new(Vec::new()),
        }
    }

    /// The `force` flag of every close request received.
    pub(crate) fn closes(&self) -> Vec<bool> {
        self.closes.lock().unwrap().clone()
    }
}

impl Browser for FakeBrowser {
    fn id(&self) -> TabId {
        self.id
    }

    fn close(&self, force: bool) {
        self.closes.lock().unwrap().push(force);
    }
}

pub(crate) struct FakeFrame {
    main: bool,
    strings: Mutex<Vec<(String, String)>>,
}

impl FakeFrame {
    pub(crate) fn main() -> Self {
        Self::with_main(true)
    }

    pub(crate) fn sub() -> Self {
        Self::with_main(false)
    }

    fn with_main(main: bool) -> Self {
        Self {
            main,
            strings: Mutex::new(Vec::new()),
        }
    }

    /// `(html, url)` pairs passed to `load_string`.
    pub(crate) fn loaded_strings(&self) -> Vec<(String, String)> {
        self.strings.lock().unwrap().clone()
    }
}

impl Frame for FakeFrame {
    fn is_main(&self) -> bool {
        self.main
    }

    fn load_string(&self, html: &str, url: &str) {
        self.strings
            .lock()
            .unwrap()
            .push((html.to_string(), url.to_string()));
    }

    fn load_url(&self, _url: &str) {}
}
