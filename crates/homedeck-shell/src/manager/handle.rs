use wry::WebView;

/// Handle to a live panel WebView.
pub struct PanelView {
    /// The underlying wry WebView.
    pub(super) webview: WebView,
    /// The panel id this view belongs to.
    pub(super) panel_id: u32,
    /// Panel title, configured initially and updated as the document
    /// reports title changes.
    pub(super) title: String,
    /// Current URL (best-effort tracking).
    pub(super) current_url: String,
    /// Scripts evaluated after each finished page load.
    pub(super) scripts: Vec<String>,
}

impl PanelView {
    /// Get the panel id.
    pub fn panel_id(&self) -> u32 {
        self.panel_id
    }

    /// Get the panel title (the configured one, or the last document
    /// title the page reported).
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Get the current URL.
    pub fn current_url(&self) -> &str {
        &self.current_url
    }

    /// Navigate to a URL.
    pub fn load_url(&mut self, url: &str) -> Result<(), wry::Error> {
        self.current_url = url.to_string();
        self.webview.load_url(url)
    }

    /// Execute JavaScript in the view.
    pub fn evaluate_script(&self, js: &str) -> Result<(), wry::Error> {
        self.webview.evaluate_script(js)
    }

    /// Evaluate the panel's injected scripts. Call after a page load
    /// finishes; a script failure is logged and does not stop the rest.
    pub fn inject_scripts(&self) {
        for script in &self.scripts {
            if let Err(e) = self.webview.evaluate_script(script) {
                tracing::warn!(panel_id = self.panel_id, "script injection failed: {e}");
            }
        }
    }

    /// Record a navigation reported by the view's page-load events.
    pub fn track_url(&mut self, url: String) {
        self.current_url = url;
    }

    /// Record a document title reported by the view.
    pub fn track_title(&mut self, title: String) {
        self.title = title;
    }

    /// Set the view bounds (position + size) within the parent window.
    pub fn set_bounds(&self, bounds: wry::Rect) -> Result<(), wry::Error> {
        self.webview.set_bounds(bounds)
    }

    /// Show or hide the view.
    pub fn set_visible(&self, visible: bool) -> Result<(), wry::Error> {
        self.webview.set_visible(visible)
    }

    /// Focus the view.
    pub fn focus(&self) -> Result<(), wry::Error> {
        self.webview.focus()
    }
}
