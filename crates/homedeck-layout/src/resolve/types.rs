//! Resolver configuration and output types.

use homedeck_common::Rect;

use crate::tree::Panel;

/// Configuration for the resolver that computes panel rectangles.
#[derive(Debug, Clone)]
pub struct Resolver {
    /// Pixels added per panel when converting a configured inner width to
    /// an outer (chrome-inclusive) width. Empirically 22 on the reference
    /// host; configurable because it is tied to the platform's window
    /// border rendering.
    pub chrome_overhead: f64,
}

impl Default for Resolver {
    fn default() -> Self {
        Self {
            chrome_overhead: 22.0,
        }
    }
}

/// A leaf panel with its resolved absolute outer rectangle.
///
/// Borrows the originating panel so downstream consumers can read its
/// title/url/script fields without copying. Carries no identity beyond
/// that reference; correlation across refreshes is the host's concern.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedRect<'a> {
    pub panel: &'a Panel,
    pub rect: Rect,
}
