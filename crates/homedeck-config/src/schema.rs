//! Normalized configuration types.

use homedeck_layout::LayoutNode;

/// Root window geometry, in outer pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct WindowGeometry {
    pub width: f64,
    pub height: f64,
    pub start_x: i32,
    pub start_y: i32,
}

impl Default for WindowGeometry {
    fn default() -> Self {
        Self {
            width: 2560.0,
            height: 1440.0,
            start_x: 0,
            start_y: 0,
        }
    }
}

/// A fully normalized dashboard configuration.
///
/// `layout` is `None` when the config held no normalizable layout at all;
/// a `Some` tree may still contain zero panels if every node was dropped.
/// Validation reports both as the distinct no-panels condition.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardConfig {
    pub window: WindowGeometry,
    /// Per-panel pixels added when converting configured inner widths to
    /// outer widths. Host-environment dependent; 22 on the reference host.
    pub chrome_overhead: f64,
    pub layout: Option<LayoutNode>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            window: WindowGeometry::default(),
            chrome_overhead: 22.0,
            layout: None,
        }
    }
}

impl DashboardConfig {
    /// Number of panels in the normalized layout.
    pub fn panel_count(&self) -> usize {
        self.layout.as_ref().map_or(0, LayoutNode::panel_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn geometry_defaults() {
        let geo = WindowGeometry::default();
        assert!((geo.width - 2560.0).abs() < f64::EPSILON);
        assert!((geo.height - 1440.0).abs() < f64::EPSILON);
        assert_eq!(geo.start_x, 0);
        assert_eq!(geo.start_y, 0);
    }

    #[test]
    fn config_defaults() {
        let config = DashboardConfig::default();
        assert!((config.chrome_overhead - 22.0).abs() < f64::EPSILON);
        assert!(config.layout.is_none());
        assert_eq!(config.panel_count(), 0);
    }
}
