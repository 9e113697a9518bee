//! Engine event to WebSocket notification bridge.
//!
//! The engine reports lifecycle and navigation callbacks through
//! [`ClientRouter`]; [`EventTranslator`] turns each into one JSON
//! [`Notification`] and hands it to a [`NotificationSink`].

pub mod engine;
pub mod error_page;
pub mod observers;
pub mod protocol;
pub mod registry;
pub mod router;
pub mod sink;
pub mod thread;
pub mod translator;

#[cfg(test)]
pub(crate) mod testing;

pub use engine::{Browser, BrowserHost, BrowserRef, Frame, FrameRef, KeyEvent, KeyEventKind};
pub use observers::{DisplayObserver, KeyObserver, LifeSpanObserver, LoadObserver};
pub use protocol::{Notification, NotificationKind};
pub use registry::{TabRegistry, TabState};
pub use router::{ClientRouter, EngineEvent};
pub use sink::NotificationSink;
pub use thread::UiThread;
pub use translator::EventTranslator;
