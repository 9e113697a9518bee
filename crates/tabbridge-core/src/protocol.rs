//! Outbound wire messages.
//!
//! Each notification is one JSON text frame with a `type` discriminator and
//! camelCase fields, e.g.
//! `{"type":"TITLE_CHANGED","tabId":3,"title":"Docs"}`.

use serde::{Deserialize, Serialize};
use tabbridge_common::TabId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    tag = "type",
    rename_all = "SCREAMING_SNAKE_CASE",
    rename_all_fields = "camelCase"
)]
pub enum Notification {
    TabCreated {
        tab_id: TabId,
        url: String,
        title: String,
    },
    TabClosed {
        tab_id: TabId,
    },
    LoadError {
        tab_id: TabId,
        error_code: i32,
        error_text: String,
        failed_url: String,
    },
    TitleChanged {
        tab_id: TabId,
        title: String,
    },
    UrlChanged {
        tab_id: TabId,
        url: String,
    },
    LoadingStateChanged {
        tab_id: TabId,
        is_loading: bool,
        can_go_back: bool,
        can_go_forward: bool,
    },
    FaviconChanged {
        tab_id: TabId,
        favicon: String,
    },
}

/// Fieldless mirror of [`Notification`]'s variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NotificationKind {
    TabCreated,
    TabClosed,
    LoadError,
    TitleChanged,
    UrlChanged,
    LoadingStateChanged,
    FaviconChanged,
}

impl NotificationKind {
    /// The `type` value on the wire.
    pub fn wire_name(self) -> &'static str {
        match self {
            NotificationKind::TabCreated => "TAB_CREATED",
            NotificationKind::TabClosed => "TAB_CLOSED",
            NotificationKind::LoadError => "LOAD_ERROR",
            NotificationKind::TitleChanged => "TITLE_CHANGED",
            NotificationKind::UrlChanged => "URL_CHANGED",
            NotificationKind::LoadingStateChanged => "LOADING_STATE_CHANGED",
            NotificationKind::FaviconChanged => "FAVICON_CHANGED",
        }
    }
}

impl Notification {
    pub fn kind(&self) -> NotificationKind {
        match self {
            Notification::TabCreated { .. } => NotificationKind::TabCreated,
            Notification::TabClosed { .. } => NotificationKind::TabClosed,
            Notification::LoadError { .. } => NotificationKind::LoadError,
            Notification::TitleChanged { .. } => NotificationKind::TitleChanged,
            Notification::UrlChanged { .. } => NotificationKind::UrlChanged,
            Notification::LoadingStateChanged { .. } => NotificationKind::LoadingStateChanged,
            Notification::FaviconChanged { .. } => NotificationKind::FaviconChanged,
        }
    }

    pub fn tab_id(&self) -> TabId {
        match self {
            Notification::TabCreated { tab_id, .. }
            | Notification::TabClosed { tab_id }
            | Notification::LoadError { tab_id, .. }
            | Notification::TitleChanged { tab_id, .. }
            | Notification::UrlChanged { tab_id, .. }
            | Notification::LoadingStateChanged { tab_id, .. }
            | Notification::FaviconChanged { tab_id, .. } => *tab_id,
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
