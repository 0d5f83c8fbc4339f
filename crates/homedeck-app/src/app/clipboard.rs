//! Clipboard integration: copy the active panel's URL.

use super::core::DeckApp;

impl DeckApp {
    pub(super) fn copy_active_panel_url(&mut self) {
        let Some(panels) = self.panels.as_ref() else {
            return;
        };
        let Some(view) = panels.get(self.active_panel) else {
            return;
        };
        let url = view.current_url().to_string();
        if url.trim().is_empty() {
            return;
        }

        match arboard::Clipboard::new() {
            Ok(mut clipboard) => {
                if let Err(e) = clipboard.set_text(url.clone()) {
                    tracing::warn!("clipboard write failed: {e}");
                } else {
                    tracing::info!(url = %url, "copied panel URL to clipboard");
                }
            }
            Err(e) => {
                tracing::warn!("clipboard unavailable: {e}");
            }
        }
    }
}
