//! Normalization of raw YAML values into the layout tree.
//!
//! A malformed node (missing title, unrecognized shape) is dropped rather
//! than failing the whole layout. Drops are logged at debug level and
//! otherwise surface only as fewer panels.

use homedeck_layout::{LayoutNode, Panel};
use serde_yaml::Value;
use tracing::debug;

use crate::schema::{DashboardConfig, WindowGeometry};

/// Normalize a parsed YAML document into a config.
///
/// Root keys: `width`, `height`, `start-x`, `start-y`, `chrome-overhead`,
/// `layout`. A non-mapping document is itself treated as the layout
/// value, so a bare top-level sequence of panels works. A root mapping
/// only ever contributes layout through its `layout` key; without one
/// there are no panels.
pub fn document(value: &Value) -> DashboardConfig {
    let mut config = DashboardConfig::default();

    let layout_value = if value.is_mapping() {
        let defaults = WindowGeometry::default();
        config.window = WindowGeometry {
            width: scalar_f64(value.get("width")).unwrap_or(defaults.width),
            height: scalar_f64(value.get("height")).unwrap_or(defaults.height),
            start_x: scalar_i32(value.get("start-x")).unwrap_or(defaults.start_x),
            start_y: scalar_i32(value.get("start-y")).unwrap_or(defaults.start_y),
        };
        if let Some(overhead) = scalar_f64(value.get("chrome-overhead")) {
            config.chrome_overhead = overhead;
        }
        value.get("layout")
    } else {
        Some(value)
    };

    config.layout = layout_value.and_then(top_level);
    config
}

/// Normalize the `layout` value. A sequence of multiple top-level nodes
/// wraps in an implicit horizontal group; a single node stands alone.
fn top_level(value: &Value) -> Option<LayoutNode> {
    if value.as_sequence().is_some() {
        let mut children = sequence(value);
        match children.len() {
            0 => None,
            1 => children.pop(),
            _ => Some(LayoutNode::hgroup(children)),
        }
    } else {
        node(value)
    }
}

/// Normalize a single YAML value into a layout node, or `None` if it has
/// no recognizable shape.
pub fn node(value: &Value) -> Option<LayoutNode> {
    if !value.is_mapping() {
        // A bare non-empty sequence is an implicit horizontal group.
        if value.as_sequence().is_some_and(|s| !s.is_empty()) {
            return Some(LayoutNode::hgroup(sequence(value)));
        }
        return None;
    }

    if let Some(children) = value.get("horizontal-group") {
        return Some(LayoutNode::hgroup(sequence(children)));
    }
    if let Some(children) = value.get("vertical-group") {
        return Some(LayoutNode::vgroup(sequence(children)));
    }

    let title = match scalar_string(value.get("title")) {
        Some(t) if !t.trim().is_empty() => t,
        _ => {
            debug!("dropping layout node without a title");
            return None;
        }
    };

    let name = scalar_string(value.get("name")).unwrap_or_else(|| title.clone());
    let url = scalar_string(value.get("url")).unwrap_or_else(|| "about:blank".to_string());

    Some(LayoutNode::panel(Panel {
        title,
        name,
        url,
        script: scalar_string(value.get("script")),
        css: scalar_string(value.get("css")),
        fixed_width: scalar_f64(value.get("width")),
    }))
}

/// Normalize every child of a sequence, dropping the non-normalizable.
fn sequence(value: &Value) -> Vec<LayoutNode> {
    value
        .as_sequence()
        .map(|seq| seq.iter().filter_map(node).collect())
        .unwrap_or_default()
}

fn scalar_string(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn scalar_f64(value: Option<&Value>) -> Option<f64> {
    match value? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn scalar_i32(value: Option<&Value>) -> Option<i32> {
    scalar_f64(value).map(|v| v.round() as i32)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(yaml: &str) -> Value {
        serde_yaml::from_str(yaml).unwrap()
    }

    #[test]
    fn panel_requires_title() {
        assert!(node(&parse("title: Tasks\nurl: https://example.com")).is_some());
        assert!(node(&parse("url: https://example.com")).is_none());
        assert!(node(&parse("title: '   '\nurl: https://example.com")).is_none());
    }

    #[test]
    fn panel_name_defaults_to_title() {
        let Some(LayoutNode::Panel(panel)) = node(&parse("title: Tasks")) else {
            panic!("expected a panel");
        };
        assert_eq!(panel.name, "Tasks");
        assert_eq!(panel.url, "about:blank");

        let Some(LayoutNode::Panel(panel)) = node(&parse("title: Tasks\nname: tasks-main")) else {
            panic!("expected a panel");
        };
        assert_eq!(panel.name, "tasks-main");
    }

    #[test]
    fn panel_fields_normalize() {
        let value = parse(
            "title: Chat\nurl: https://chat.example.com\nscript: scripts/chat.js\ncss: scripts/chat.css\nwidth: 420",
        );
        let Some(LayoutNode::Panel(panel)) = node(&value) else {
            panic!("expected a panel");
        };
        assert_eq!(panel.script.as_deref(), Some("scripts/chat.js"));
        assert_eq!(panel.css.as_deref(), Some("scripts/chat.css"));
        assert_eq!(panel.fixed_width, Some(420.0));
    }

    #[test]
    fn width_accepts_string_scalars() {
        let Some(LayoutNode::Panel(panel)) = node(&parse("title: Tasks\nwidth: '300'")) else {
            panic!("expected a panel");
        };
        assert_eq!(panel.fixed_width, Some(300.0));
    }

    #[test]
    fn group_keys_build_groups() {
        let value = parse("horizontal-group:\n  - title: A\n  - title: B");
        let Some(LayoutNode::HorizontalGroup { children }) = node(&value) else {
            panic!("expected a horizontal group");
        };
        assert_eq!(children.len(), 2);

        let value = parse("vertical-group:\n  - title: A");
        assert!(matches!(
            node(&value),
            Some(LayoutNode::VerticalGroup { .. })
        ));
    }

    #[test]
    fn malformed_children_are_dropped_not_fatal() {
        let value = parse("horizontal-group:\n  - title: A\n  - url: no-title.example\n  - title: B");
        let Some(group) = node(&value) else {
            panic!("expected a group");
        };
        assert_eq!(group.panel_count(), 2);
    }

    #[test]
    fn group_of_all_dropped_children_is_empty_not_absent() {
        let value = parse("vertical-group:\n  - url: a\n  - url: b");
        let Some(LayoutNode::VerticalGroup { children }) = node(&value) else {
            panic!("expected a group");
        };
        assert!(children.is_empty());
    }

    #[test]
    fn bare_sequence_is_implicit_horizontal_group() {
        let value = parse("- title: A\n- title: B");
        assert!(matches!(
            node(&value),
            Some(LayoutNode::HorizontalGroup { .. })
        ));
    }

    #[test]
    fn scalars_and_nulls_normalize_to_absence() {
        assert!(node(&parse("42")).is_none());
        assert!(node(&parse("just a string")).is_none());
        assert!(node(&parse("null")).is_none());
        assert!(node(&parse("[]")).is_none());
    }

    #[test]
    fn document_reads_root_geometry() {
        let value = parse(
            "width: 1920\nheight: 1080\nstart-x: 100\nstart-y: 50\nchrome-overhead: 16\nlayout:\n  - title: A",
        );
        let config = document(&value);
        assert!((config.window.width - 1920.0).abs() < f64::EPSILON);
        assert!((config.window.height - 1080.0).abs() < f64::EPSILON);
        assert_eq!(config.window.start_x, 100);
        assert_eq!(config.window.start_y, 50);
        assert!((config.chrome_overhead - 16.0).abs() < f64::EPSILON);
        assert_eq!(config.panel_count(), 1);
    }

    #[test]
    fn document_defaults_without_root_keys() {
        let config = document(&parse("layout:\n  - title: A"));
        assert!((config.window.width - 2560.0).abs() < f64::EPSILON);
        assert!((config.window.height - 1440.0).abs() < f64::EPSILON);
        assert!((config.chrome_overhead - 22.0).abs() < f64::EPSILON);
    }

    #[test]
    fn multiple_top_level_nodes_wrap_in_horizontal_group() {
        let value = parse("layout:\n  - title: A\n  - title: B\n  - title: C");
        let config = document(&value);
        assert!(matches!(
            config.layout,
            Some(LayoutNode::HorizontalGroup { .. })
        ));
        assert_eq!(config.panel_count(), 3);
    }

    #[test]
    fn single_top_level_node_stands_alone() {
        let value = parse("layout:\n  - vertical-group:\n      - title: A\n      - title: B");
        let config = document(&value);
        assert!(matches!(
            config.layout,
            Some(LayoutNode::VerticalGroup { .. })
        ));
    }

    #[test]
    fn bare_sequence_document_is_the_layout() {
        let config = document(&parse("- title: A\n- title: B"));
        assert_eq!(config.panel_count(), 2);
    }

    #[test]
    fn empty_document_has_no_layout() {
        let config = document(&parse("width: 800\nheight: 600"));
        assert!(config.layout.is_none());
        assert_eq!(config.panel_count(), 0);
    }

    #[test]
    fn root_mapping_without_layout_key_never_becomes_a_panel() {
        let config = document(&parse("width: 800\nheight: 600\ntitle: Oops"));
        assert!(config.layout.is_none());
        assert_eq!(config.panel_count(), 0);
        assert!((config.window.width - 800.0).abs() < f64::EPSILON);
    }

    #[test]
    fn nested_groups_normalize() {
        let value = parse(
            "horizontal-group:\n  - title: Left\n    width: 300\n  - vertical-group:\n      - title: Top\n      - title: Bottom",
        );
        let Some(root) = node(&value) else {
            panic!("expected a group");
        };
        assert_eq!(root.panel_count(), 3);
        let panels = root.collect_panels();
        assert_eq!(panels[0].fixed_width, Some(300.0));
        assert_eq!(panels[1].title, "Top");
        assert_eq!(panels[2].title, "Bottom");
    }
}
