//! `ApplicationHandler` implementation for the winit event loop.

use winit::application::ApplicationHandler;
use winit::event::{ElementState, KeyEvent, WindowEvent};
use winit::event_loop::ActiveEventLoop;
use winit::keyboard::{Key, NamedKey};
use winit::window::WindowId;

use homedeck_shell::{PageLoadState, PanelEvent};

use super::core::DeckApp;

impl ApplicationHandler for DeckApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        if !self.initialize_window(event_loop) {
            event_loop.exit();
            return;
        }

        self.refresh_layout();
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                tracing::info!("Window close requested");
                if let Some(panels) = self.panels.as_mut() {
                    panels.destroy_all();
                }
                event_loop.exit();
            }

            WindowEvent::Resized(size) => {
                if size.width > 0 && size.height > 0 {
                    self.sync_panel_bounds();
                }
            }

            WindowEvent::KeyboardInput { event, .. } => {
                self.handle_keyboard_input(event);
            }

            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        self.pump_panel_events();
    }
}

impl DeckApp {
    /// F5 refreshes the layout, F6 toggles decorations, F7 cycles panel
    /// focus, F8 copies the active panel URL.
    fn handle_keyboard_input(&mut self, event: KeyEvent) {
        if event.state != ElementState::Pressed {
            return;
        }

        match event.logical_key {
            Key::Named(NamedKey::F5) => {
                tracing::info!("Refreshing layout");
                self.refresh_layout();
            }
            Key::Named(NamedKey::F6) => {
                self.toggle_decorations();
            }
            Key::Named(NamedKey::F7) => {
                self.focus_next_panel();
            }
            Key::Named(NamedKey::F8) => {
                self.copy_active_panel_url();
            }
            _ => {}
        }
    }

    fn toggle_decorations(&mut self) {
        let Some(window) = self.window.as_ref() else {
            return;
        };
        self.decorated = !self.decorated;
        window.set_decorations(self.decorated);
        tracing::info!(decorated = self.decorated, "window decorations toggled");
    }

    /// Consume panel events: inject scripts once a page finishes loading,
    /// track navigation and titles, route suppressed popups back into
    /// their panel.
    fn pump_panel_events(&mut self) {
        let Some(panels) = self.panels.as_mut() else {
            return;
        };

        let mut active_title_changed = false;
        for event in panels.drain_events() {
            match event {
                PanelEvent::PageLoad {
                    panel_id,
                    state,
                    url,
                } => {
                    if let Some(view) = panels.get_mut(panel_id) {
                        view.track_url(url);
                        if state == PageLoadState::Finished {
                            view.inject_scripts();
                        }
                    }
                }
                PanelEvent::PopupRequested { panel_id, url } => {
                    if url.trim().is_empty() {
                        continue;
                    }
                    if let Some(view) = panels.get_mut(panel_id) {
                        if let Err(e) = view.load_url(&url) {
                            tracing::warn!(panel_id, "popup navigation failed: {e}");
                        }
                    }
                }
                PanelEvent::TitleChanged { panel_id, title } => {
                    if let Some(view) = panels.get_mut(panel_id) {
                        view.track_title(title);
                        if panel_id == self.active_panel {
                            active_title_changed = true;
                        }
                    }
                }
                PanelEvent::Closed { .. } => {}
            }
        }

        if active_title_changed {
            self.apply_window_title();
        }
    }
}
