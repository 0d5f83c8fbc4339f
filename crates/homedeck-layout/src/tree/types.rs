//! Core types for the layout tree: Panel and LayoutNode.

use serde::{Deserialize, Serialize};

/// A single embedded-browser panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Panel {
    /// Display title. Required; normalization drops title-less panels.
    pub title: String,
    /// Stable identifier. Defaults to the title when not configured.
    pub name: String,
    /// Target URL, or "about:blank".
    pub url: String,
    /// Optional path to a script injected after navigation.
    pub script: Option<String>,
    /// Optional path to a stylesheet injected after navigation.
    pub css: Option<String>,
    /// Inner (client-area) pixel width the panel must present to its
    /// content. Panels without one are flexible and absorb leftover space.
    pub fixed_width: Option<f64>,
}

/// A node in the layout tree. Exactly one variant per node; groups may
/// be empty and then resolve to nothing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum LayoutNode {
    /// Children tile left-to-right across the available width.
    HorizontalGroup { children: Vec<LayoutNode> },
    /// Children tile top-to-bottom, always evenly divided.
    VerticalGroup { children: Vec<LayoutNode> },
    /// A leaf panel.
    Panel(Panel),
}

impl LayoutNode {
    pub fn hgroup(children: Vec<LayoutNode>) -> Self {
        LayoutNode::HorizontalGroup { children }
    }

    pub fn vgroup(children: Vec<LayoutNode>) -> Self {
        LayoutNode::VerticalGroup { children }
    }

    pub fn panel(panel: Panel) -> Self {
        LayoutNode::Panel(panel)
    }

    /// Number of leaf panels in this subtree.
    pub fn panel_count(&self) -> usize {
        match self {
            LayoutNode::Panel(_) => 1,
            LayoutNode::HorizontalGroup { children } | LayoutNode::VerticalGroup { children } => {
                children.iter().map(LayoutNode::panel_count).sum()
            }
        }
    }

    /// Collect all panels in declaration (pre-order, left-to-right) order.
    pub fn collect_panels(&self) -> Vec<&Panel> {
        let mut panels = Vec::new();
        self.collect_panels_into(&mut panels);
        panels
    }

    fn collect_panels_into<'a>(&'a self, out: &mut Vec<&'a Panel>) {
        match self {
            LayoutNode::Panel(panel) => out.push(panel),
            LayoutNode::HorizontalGroup { children } | LayoutNode::VerticalGroup { children } => {
                for child in children {
                    child.collect_panels_into(out);
                }
            }
        }
    }
}
