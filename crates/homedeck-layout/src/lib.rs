//! Layout tree model and rectangle resolver.
//!
//! A [`tree::LayoutNode`] describes how panels divide the window: nested
//! horizontal groups (left-to-right, fixed or flexible widths) and vertical
//! groups (top-to-bottom, always even). The [`resolve::Resolver`] turns a
//! tree plus an available rectangle into a flat list of panel rectangles
//! that tile the area exactly, with no gaps or overlap.

pub mod resolve;
pub mod tree;

pub use resolve::{ResolvedRect, Resolver};
pub use tree::{LayoutNode, Panel};
