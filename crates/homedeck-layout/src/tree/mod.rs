//! The layout tree: groups and panels.

mod types;

pub use types::{LayoutNode, Panel};
