//! Rectangle resolution for the layout tree.

mod calculation;
mod types;

pub use types::{ResolvedRect, Resolver};
