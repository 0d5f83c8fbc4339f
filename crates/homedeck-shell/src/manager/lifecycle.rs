use std::sync::Arc;

use tracing::debug;
use wry::raw_window_handle;
use wry::WebViewBuilder;

use super::handle::PanelView;
use super::types::PanelViewConfig;
use super::PanelHost;

impl PanelHost {
    /// Create a panel WebView as a child of the given window.
    ///
    /// The `window` must implement `raw_window_handle::HasWindowHandle`.
    /// The view is positioned at `bounds` within the parent window.
    pub fn create<W: raw_window_handle::HasWindowHandle>(
        &self,
        panel_id: u32,
        window: &W,
        bounds: wry::Rect,
        config: PanelViewConfig,
    ) -> Result<PanelView, wry::Error> {
        let pid = panel_id;

        let mut builder = WebViewBuilder::new()
            .with_bounds(bounds)
            .with_devtools(config.devtools)
            .with_focused(false);

        // Page load handler; the host injects panel scripts on Finished
        builder = Self::attach_page_load_handler(builder, Arc::clone(&self.events), pid);

        // Title change handler
        builder = Self::attach_title_handler(builder, Arc::clone(&self.events), pid);

        // Popup policy: same-view navigation
        builder = Self::attach_new_window_handler(builder, Arc::clone(&self.events), pid);

        builder = builder.with_url(&config.url);

        let webview = builder.build_as_child(window)?;

        debug!(panel_id, url = %config.url, "panel WebView created");

        Ok(PanelView {
            webview,
            panel_id,
            title: config.title,
            current_url: config.url,
            scripts: config.scripts,
        })
    }
}
