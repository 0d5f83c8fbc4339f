//! DeckApp struct definition and constructor.

use std::path::PathBuf;
use std::sync::Arc;

use winit::window::Window;

use homedeck_config::DashboardConfig;
use homedeck_layout::Resolver;
use homedeck_shell::PanelRegistry;

/// Top-level application state.
pub struct DeckApp {
    pub(super) config: DashboardConfig,
    pub(super) script_dir: PathBuf,
    pub(super) resolver: Resolver,

    // Windowing
    pub(super) window: Option<Arc<Window>>,
    pub(super) decorated: bool,

    // Panel webviews
    pub(super) panels: Option<PanelRegistry>,

    // Focus cycling (F7); id of the panel that last received focus
    pub(super) active_panel: u32,
}

impl DeckApp {
    pub fn new(config: DashboardConfig, script_dir: PathBuf) -> Self {
        let resolver = Resolver {
            chrome_overhead: config.chrome_overhead,
        };
        Self {
            config,
            script_dir,
            resolver,
            window: None,
            decorated: false,
            panels: None,
            active_panel: 0,
        }
    }
}
