use std::collections::HashMap;

use tracing::debug;
use wry::raw_window_handle;

use crate::events::PanelEvent;

use super::handle::PanelView;
use super::types::PanelViewConfig;
use super::PanelHost;

/// Maps panel ids to live WebView handles.
///
/// Panel ids are positions in the resolved layout order and are only
/// stable within one refresh; a refresh destroys every view and creates
/// a fresh set.
pub struct PanelRegistry {
    host: PanelHost,
    views: HashMap<u32, PanelView>,
}

impl PanelRegistry {
    pub fn new(host: PanelHost) -> Self {
        Self {
            host,
            views: HashMap::new(),
        }
    }

    /// Create a WebView for a panel and register it.
    pub fn create<W: raw_window_handle::HasWindowHandle>(
        &mut self,
        panel_id: u32,
        window: &W,
        bounds: wry::Rect,
        config: PanelViewConfig,
    ) -> Result<(), wry::Error> {
        let view = self.host.create(panel_id, window, bounds, config)?;
        self.views.insert(panel_id, view);
        Ok(())
    }

    /// Get a view by panel id.
    pub fn get(&self, panel_id: u32) -> Option<&PanelView> {
        self.views.get(&panel_id)
    }

    /// Get a mutable view by panel id.
    pub fn get_mut(&mut self, panel_id: u32) -> Option<&mut PanelView> {
        self.views.get_mut(&panel_id)
    }

    /// Number of live views.
    pub fn len(&self) -> usize {
        self.views.len()
    }

    pub fn is_empty(&self) -> bool {
        self.views.is_empty()
    }

    /// Destroy a view by panel id.
    pub fn destroy(&mut self, panel_id: u32) -> bool {
        if self.views.remove(&panel_id).is_some() {
            debug!(panel_id, "panel WebView destroyed");
            if let Ok(mut evts) = self.host.events.lock() {
                evts.push(PanelEvent::Closed { panel_id });
            }
            true
        } else {
            false
        }
    }

    /// Destroy all views. Used before a layout refresh rebuilds them.
    pub fn destroy_all(&mut self) {
        let panel_ids: Vec<u32> = self.views.keys().copied().collect();
        for panel_id in panel_ids {
            self.destroy(panel_id);
        }
    }

    /// Drain all pending events from all views.
    pub fn drain_events(&self) -> Vec<PanelEvent> {
        self.host.drain_events()
    }
}
