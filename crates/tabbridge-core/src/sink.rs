use std::rc::Rc;
use std::sync::Arc;

use tabbridge_socket::ConnectionManager;

/// Destination for serialized notifications.
pub trait NotificationSink {
    /// Hand off one text frame. Must not block and must not fail.
    fn send_text(&self, text: String);
}

impl NotificationSink for ConnectionManager {
    fn send_text(&self, text: String) {
        self.send(text);
    }
}

impl<S: NotificationSink + ?Sized> NotificationSink for Arc<S> {
    fn send_text(&self, text: String) {
        (**self).send_text(text);
    }
}

impl<S: NotificationSink + ?Sized> NotificationSink for Rc<S> {
    fn send_text(&self, text: String) {
        (**self).send_text(text);
    }
}
