mod app;
mod cli;

use std::path::Path;

use tracing_subscriber::EnvFilter;
use winit::event_loop::EventLoop;

use homedeck_common::ConfigError;

fn main() {
    // Parse CLI arguments
    let args = cli::parse();

    // Initialize logging
    let log_directive = args.log_level.as_deref().unwrap_or("homedeck=info");
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(
                log_directive
                    .parse()
                    .unwrap_or_else(|_| "homedeck=info".parse().unwrap()),
            ),
        )
        .init();

    tracing::info!("Homedeck v{} starting...", env!("CARGO_PKG_VERSION"));

    // Load config
    let config_path = args.config.as_deref().map(Path::new);
    let config = match homedeck_config::load_config(config_path) {
        Ok(config) => config,
        Err(ConfigError::NoPanels) => {
            tracing::error!("no panels defined in config, nothing to show");
            std::process::exit(1);
        }
        Err(e) => {
            tracing::error!("Config load failed: {e}");
            std::process::exit(1);
        }
    };
    tracing::info!("Config loaded ({} panels)", config.panel_count());

    // Injectable scripts resolve relative to the working directory
    let script_dir = std::env::current_dir().unwrap_or_else(|_| ".".into());

    // Create event loop and run
    let event_loop = EventLoop::new().expect("failed to create event loop");
    let mut app = app::DeckApp::new(config, script_dir);

    tracing::info!("Entering event loop");
    if let Err(e) = event_loop.run_app(&mut app) {
        tracing::error!("Event loop error: {e}");
    }
    tracing::info!("Shutdown complete");
}
