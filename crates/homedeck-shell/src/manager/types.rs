use std::path::Path;

use homedeck_layout::Panel;

use crate::inject;

/// Configuration for creating a panel WebView.
#[derive(Debug, Clone)]
pub struct PanelViewConfig {
    /// Panel title, seeding the host's window-title composition until
    /// the page reports a document title.
    pub title: String,
    /// Initial URL to load.
    pub url: String,
    /// Scripts evaluated in the view after each page load finishes.
    pub scripts: Vec<String>,
    /// Whether to enable dev tools (always on in debug builds).
    pub devtools: bool,
}

impl PanelViewConfig {
    /// Build a config from a panel, resolving injectable script and
    /// stylesheet files relative to `script_dir`.
    pub fn from_panel(panel: &Panel, script_dir: &Path) -> Self {
        Self {
            title: panel.title.clone(),
            url: panel.url.clone(),
            scripts: inject::collect_scripts(panel, script_dir),
            devtools: cfg!(debug_assertions),
        }
    }
}
