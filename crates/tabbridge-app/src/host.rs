//! In-process engine stand-in.
//!
//! Implements [`BrowserHost`] by queueing the callbacks a real engine would
//! deliver in response. The run loop drains the queue through the router.

use std::cell::{Cell, RefCell};
use std::collections::{BTreeMap, VecDeque};
use std::sync::{Arc, Mutex};

use tabbridge_common::TabId;
use tabbridge_core::{Browser, BrowserHost, BrowserRef, EngineEvent, Frame, FrameRef};

use crate::settings::EngineSettings;

type EventQueue = Arc<Mutex<VecDeque<EngineEvent>>>;

fn push(queue: &EventQueue, event: EngineEvent) {
    queue
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
        .push_back(event);
}

pub struct ScriptedBrowser {
    id: TabId,
    queue: EventQueue,
}

impl Browser for ScriptedBrowser {
    fn id(&self) -> TabId {
        self.id
    }

    fn close(&self, force: bool) {
        tracing::debug!(tab_id = %self.id, force, "engine close");
        let me: BrowserRef = Arc::new(ScriptedBrowser {
            id: self.id,
            queue: self.queue.clone(),
        });
        push(&self.queue, EngineEvent::DoClose { browser: me.clone() });
        push(&self.queue, EngineEvent::BeforeClose { browser: me });
    }
}

pub struct ScriptedFrame {
    tab: TabId,
    main: bool,
}

impl ScriptedFrame {
    pub fn new(tab: TabId, main: bool) -> Self {
        Self { tab, main }
    }
}

impl Frame for ScriptedFrame {
    fn is_main(&self) -> bool {
        self.main
    }

    fn load_string(&self, html: &str, url: &str) {
        tracing::info!(tab_id = %self.tab, url = %url, bytes = html.len(), "frame document replaced");
    }

    fn load_url(&self, url: &str) {
        tracing::info!(tab_id = %self.tab, url = %url, "frame navigation");
    }
}

/// Engine stand-in driven by a script.
pub struct ScriptedHost {
    settings: EngineSettings,
    queue: EventQueue,
    browsers: RefCell<BTreeMap<TabId, BrowserRef>>,
    next_id: Cell<i32>,
    quit: Cell<bool>,
}

impl ScriptedHost {
    pub fn new(settings: EngineSettings) -> Self {
        tracing::info!(
            cache = %settings.cache_path.display(),
            switches = ?settings.command_line(),
            width = settings.window.width,
            height = settings.window.height,
            title = %settings.window.title,
            javascript = settings.javascript,
            local_storage = settings.local_storage,
            databases = settings.databases,
            webgl = settings.webgl,
            "engine initialized"
        );
        Self {
            settings,
            queue: Arc::new(Mutex::new(VecDeque::new())),
            browsers: RefCell::new(BTreeMap::new()),
            next_id: Cell::new(1),
            quit: Cell::new(false),
        }
    }

    pub fn settings(&self) -> &EngineSettings {
        &self.settings
    }

    /// Next pending callback, if any.
    pub fn next_event(&self) -> Option<EngineEvent> {
        self.queue
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .pop_front()
    }

    /// Queue a callback as if the engine raised it.
    pub fn raise(&self, event: EngineEvent) {
        push(&self.queue, event);
    }

    pub fn browser(&self, tab: TabId) -> Option<BrowserRef> {
        self.browsers.borrow().get(&tab).cloned()
    }

    /// Drop the engine's handle after before-close has been delivered.
    pub fn release(&self, tab: TabId) {
        self.browsers.borrow_mut().remove(&tab);
    }

    pub fn live_browsers(&self) -> usize {
        self.browsers.borrow().len()
    }

    pub fn quit_requested(&self) -> bool {
        self.quit.get()
    }
}

impl BrowserHost for ScriptedHost {
    fn create_browser(&self, url: &str) {
        let id = TabId(self.next_id.get());
        self.next_id.set(id.get() + 1);

        let browser: BrowserRef = Arc::new(ScriptedBrowser {
            id,
            queue: self.queue.clone(),
        });
        self.browsers.borrow_mut().insert(id, browser.clone());
        tracing::debug!(tab_id = %id, url = %url, "engine browser created");
        push(&self.queue, EngineEvent::AfterCreated { browser });
    }

    fn load_url(&self, tab: TabId, url: &str) {
        let Some(browser) = self.browser(tab) else {
            tracing::warn!(tab_id = %tab, "load_url for unknown browser");
            return;
        };
        let frame: FrameRef = Arc::new(ScriptedFrame::new(tab, true));
        frame.load_url(url);
        push(
            &self.queue,
            EngineEvent::AddressChange {
                browser,
                frame,
                url: url.to_string(),
            },
        );
    }

    fn quit_run_loop(&self) {
        tracing::info!("engine run loop quit requested");
        self.quit.set(true);
    }
}
