//! Top-level application state.
//!
//! Implements `winit::application::ApplicationHandler` to drive the main
//! event loop. Coordinates config, the layout resolver, and panel
//! webviews.

mod bounds;
mod clipboard;
mod core;
mod event_handler;
mod init;
mod refresh;

pub use core::DeckApp;
