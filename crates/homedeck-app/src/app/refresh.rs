//! Layout refresh: resolve the tree and materialize panel webviews.

use homedeck_common::Rect;
use homedeck_shell::PanelViewConfig;

use super::bounds::layout_rect_to_wry;
use super::core::DeckApp;

impl DeckApp {
    /// The rectangle available for panels: the window's current inner
    /// size, in logical pixels, with the origin at the top-left corner.
    pub(super) fn available_rect(&self) -> Option<Rect> {
        let window = self.window.as_ref()?;
        let size = window
            .inner_size()
            .to_logical::<f64>(window.scale_factor());
        Some(Rect::new(
            0,
            0,
            size.width.round() as i32,
            size.height.round() as i32,
        ))
    }

    /// Tear down all panel webviews and rebuild them from a fresh
    /// resolution of the layout tree. Used on first show and on F5.
    pub(super) fn refresh_layout(&mut self) {
        let Some(available) = self.available_rect() else {
            return;
        };
        let Some(root) = self.config.layout.clone() else {
            tracing::warn!("refresh with no layout, nothing to show");
            return;
        };

        let resolved = self.resolver.resolve(&root, available);
        tracing::info!(
            panels = resolved.len(),
            width = available.width,
            height = available.height,
            "layout resolved"
        );

        let Some(window) = self.window.clone() else {
            return;
        };
        let Some(panels) = self.panels.as_mut() else {
            return;
        };

        panels.destroy_all();

        for (id, item) in resolved.iter().enumerate() {
            let config = PanelViewConfig::from_panel(item.panel, &self.script_dir);
            tracing::debug!(
                panel = %item.panel.title,
                left = item.rect.left,
                top = item.rect.top,
                width = item.rect.width,
                height = item.rect.height,
                "placing panel"
            );
            if let Err(e) = panels.create(
                id as u32,
                window.as_ref(),
                layout_rect_to_wry(&item.rect),
                config,
            ) {
                tracing::error!(panel = %item.panel.title, "failed to create webview: {e}");
            }
        }
        self.active_panel = 0;
        self.apply_window_title();
    }

    /// Re-resolve against the current window size and move the existing
    /// webviews, without recreating them. Used on window resize.
    pub(super) fn sync_panel_bounds(&mut self) {
        let Some(available) = self.available_rect() else {
            return;
        };
        let Some(root) = self.config.layout.clone() else {
            return;
        };
        let Some(panels) = self.panels.as_mut() else {
            return;
        };

        for (id, item) in self.resolver.resolve(&root, available).iter().enumerate() {
            if let Some(view) = panels.get(id as u32) {
                if let Err(e) = view.set_bounds(layout_rect_to_wry(&item.rect)) {
                    tracing::warn!(panel_id = id, "failed to move webview: {e}");
                }
            }
        }
    }

    /// Move focus to the next panel in layout order.
    pub(super) fn focus_next_panel(&mut self) {
        let Some(panels) = self.panels.as_ref() else {
            return;
        };
        let count = panels.len() as u32;
        if count == 0 {
            return;
        }
        self.active_panel = (self.active_panel + 1) % count;
        if let Some(view) = panels.get(self.active_panel) {
            if let Err(e) = view.focus() {
                tracing::warn!(panel_id = self.active_panel, "failed to focus panel: {e}");
            }
            tracing::debug!(panel_id = self.active_panel, title = view.title(), "panel focused");
        }
        self.apply_window_title();
    }

    /// Set the window title from the active panel's title, falling back
    /// to the bare application name when no panel is available.
    pub(super) fn apply_window_title(&self) {
        let Some(window) = self.window.as_ref() else {
            return;
        };
        let title = self
            .panels
            .as_ref()
            .and_then(|p| p.get(self.active_panel))
            .map(|view| view.title());
        window.set_title(&window_title_for(title));
    }
}

fn window_title_for(panel_title: Option<&str>) -> String {
    match panel_title {
        Some(t) if !t.is_empty() => format!("{t} - Homedeck"),
        _ => "Homedeck".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::window_title_for;

    #[test]
    fn window_title_composes_from_active_panel() {
        assert_eq!(
            window_title_for(Some("Google Tasks")),
            "Google Tasks - Homedeck"
        );
    }

    #[test]
    fn window_title_falls_back_without_a_panel() {
        assert_eq!(window_title_for(None), "Homedeck");
        assert_eq!(window_title_for(Some("")), "Homedeck");
    }
}
