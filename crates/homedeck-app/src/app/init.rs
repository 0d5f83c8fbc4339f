//! Window creation and panel host setup.

use std::sync::Arc;

use winit::event_loop::ActiveEventLoop;
use winit::window::WindowAttributes;

use homedeck_shell::{PanelHost, PanelRegistry};

use super::core::DeckApp;

impl DeckApp {
    /// Create the window and the panel registry.
    /// Returns `false` if initialization failed and the event loop should exit.
    pub(super) fn initialize_window(&mut self, event_loop: &ActiveEventLoop) -> bool {
        let geo = &self.config.window;
        let attrs = WindowAttributes::default()
            .with_title("Homedeck")
            .with_decorations(self.decorated)
            .with_position(winit::dpi::LogicalPosition::new(
                f64::from(geo.start_x),
                f64::from(geo.start_y),
            ))
            .with_inner_size(winit::dpi::LogicalSize::new(geo.width, geo.height));

        let window = match event_loop.create_window(attrs) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                tracing::error!("Failed to create window: {e}");
                return false;
            }
        };

        self.window = Some(window);
        self.panels = Some(PanelRegistry::new(PanelHost::new()));
        true
    }
}
