//! Panel WebView event types.

use serde::{Deserialize, Serialize};

/// State of a page load lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PageLoadState {
    /// Navigation has started.
    Started,
    /// Page has fully loaded (DOMContentLoaded + resources).
    Finished,
}

impl From<wry::PageLoadEvent> for PageLoadState {
    fn from(e: wry::PageLoadEvent) -> Self {
        match e {
            wry::PageLoadEvent::Started => Self::Started,
            wry::PageLoadEvent::Finished => Self::Finished,
        }
    }
}

/// Events emitted by a panel WebView.
#[derive(Debug, Clone)]
pub enum PanelEvent {
    /// Page load state changed. Carries the URL.
    PageLoad {
        panel_id: u32,
        state: PageLoadState,
        url: String,
    },
    /// Document title changed.
    TitleChanged { panel_id: u32, title: String },
    /// The page asked for a new window. The request was suppressed; the
    /// host should navigate the originating panel instead, keeping
    /// authentication sessions in one view.
    PopupRequested { panel_id: u32, url: String },
    /// Panel WebView was destroyed.
    Closed { panel_id: u32 },
}
