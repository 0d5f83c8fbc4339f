//! WebView host for homedeck panels.
//!
//! Wraps the `wry` crate to provide:
//! - One managed child WebView per resolved panel rectangle
//! - Script and stylesheet injection (explicit config paths plus
//!   title-based auto-discovery)
//! - Popup policy: new-window requests reload in the originating view
//! - Event handling (page load, title change, popups)

pub mod events;
pub mod inject;
pub mod manager;

pub use events::{PageLoadState, PanelEvent};
pub use manager::{PanelHost, PanelRegistry, PanelView, PanelViewConfig};
