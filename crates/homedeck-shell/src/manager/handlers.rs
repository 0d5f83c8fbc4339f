use std::sync::{Arc, Mutex};

use tracing::debug;
use wry::WebViewBuilder;

use crate::events::{PageLoadState, PanelEvent};

use super::PanelHost;

impl PanelHost {
    pub(super) fn attach_page_load_handler<'a>(
        builder: WebViewBuilder<'a>,
        events: Arc<Mutex<Vec<PanelEvent>>>,
        pid: u32,
    ) -> WebViewBuilder<'a> {
        builder.with_on_page_load_handler(move |event, url| {
            let state = PageLoadState::from(event);
            debug!(panel_id = pid, ?state, url = %url, "page load");
            if let Ok(mut evts) = events.lock() {
                evts.push(PanelEvent::PageLoad {
                    panel_id: pid,
                    state,
                    url,
                });
            }
        })
    }

    pub(super) fn attach_title_handler<'a>(
        builder: WebViewBuilder<'a>,
        events: Arc<Mutex<Vec<PanelEvent>>>,
        pid: u32,
    ) -> WebViewBuilder<'a> {
        builder.with_document_title_changed_handler(move |title| {
            debug!(panel_id = pid, title = %title, "title changed");
            if let Ok(mut evts) = events.lock() {
                evts.push(PanelEvent::TitleChanged {
                    panel_id: pid,
                    title,
                });
            }
        })
    }

    /// Suppress new windows; the host navigates the originating panel
    /// instead so authentication sessions stay in one view.
    pub(super) fn attach_new_window_handler<'a>(
        builder: WebViewBuilder<'a>,
        events: Arc<Mutex<Vec<PanelEvent>>>,
        pid: u32,
    ) -> WebViewBuilder<'a> {
        builder.with_new_window_req_handler(move |url| {
            debug!(panel_id = pid, url = %url, "popup redirected to panel");
            if let Ok(mut evts) = events.lock() {
                evts.push(PanelEvent::PopupRequested { panel_id: pid, url });
            }
            false
        })
    }
}
