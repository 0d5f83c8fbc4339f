//! Panel WebView lifecycle management.
//!
//! `PanelHost` creates `wry::WebView` instances, one per resolved panel
//! rectangle. `PanelRegistry` tracks the live views by panel id so a
//! layout refresh can tear them down and rebuild.

use std::sync::{Arc, Mutex};

use crate::events::PanelEvent;

mod handle;
mod handlers;
mod lifecycle;
mod registry;
mod types;

pub use handle::PanelView;
pub use registry::PanelRegistry;
pub use types::PanelViewConfig;

/// Creates panel WebViews and collects their events.
pub struct PanelHost {
    /// Event sink, drained by the main event loop.
    pub(crate) events: Arc<Mutex<Vec<PanelEvent>>>,
}

impl PanelHost {
    pub fn new() -> Self {
        Self {
            events: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Drain all pending events.
    pub fn drain_events(&self) -> Vec<PanelEvent> {
        let mut events = self.events.lock().unwrap();
        std::mem::take(&mut *events)
    }
}

impl Default for PanelHost {
    fn default() -> Self {
        Self::new()
    }
}
