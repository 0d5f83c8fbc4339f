//! Rect resolution: recursive tree-to-rect computation.

use homedeck_common::Rect;

use crate::tree::LayoutNode;

use super::{ResolvedRect, Resolver};

impl Resolver {
    /// Resolve a layout tree against an available outer rectangle.
    ///
    /// Returns one rect per leaf panel, in declaration (pre-order,
    /// left-to-right / top-to-bottom) order. Sibling rects are contiguous
    /// and sum exactly to the parent extent; integer rounding leftovers
    /// are absorbed by the last sibling. Never fails: empty groups yield
    /// nothing and degenerate bounds propagate as zero-area rects.
    pub fn resolve<'a>(&self, node: &'a LayoutNode, bounds: Rect) -> Vec<ResolvedRect<'a>> {
        let mut results = Vec::new();
        self.resolve_node(node, bounds, &mut results);
        results
    }

    fn resolve_node<'a>(&self, node: &'a LayoutNode, bounds: Rect, out: &mut Vec<ResolvedRect<'a>>) {
        match node {
            LayoutNode::Panel(panel) => {
                out.push(ResolvedRect {
                    panel,
                    rect: bounds,
                });
            }
            LayoutNode::HorizontalGroup { children } => {
                let widths = self.horizontal_widths(children, bounds.width);
                let mut x = bounds.left;
                for (child, w) in children.iter().zip(widths) {
                    self.resolve_node(child, Rect::new(x, bounds.top, w, bounds.height), out);
                    x += w;
                }
            }
            LayoutNode::VerticalGroup { children } => {
                let heights = vertical_heights(children.len(), bounds.height);
                let mut y = bounds.top;
                for (child, h) in children.iter().zip(heights) {
                    self.resolve_node(child, Rect::new(bounds.left, y, bounds.width, h), out);
                    y += h;
                }
            }
        }
    }

    /// Distribute an outer width among horizontal children.
    ///
    /// Fixed children (those declaring an inner width) get
    /// `round(inner + chrome_overhead)`. Flexible children split what is
    /// left evenly; the last flexible child absorbs the rounding
    /// remainder so the widths sum exactly to `width`.
    ///
    /// When every child is fixed, the configured widths are scaled
    /// uniformly to fill `width`, with the last child absorbing the
    /// remainder. Same exact-fill guarantee either way.
    fn horizontal_widths(&self, children: &[LayoutNode], width: i32) -> Vec<i32> {
        if children.is_empty() {
            return Vec::new();
        }

        let fixed_outer: Vec<Option<i32>> = children
            .iter()
            .map(|child| {
                fixed_inner_width(child).map(|inner| (inner + self.chrome_overhead).round() as i32)
            })
            .collect();
        let total_fixed: i32 = fixed_outer.iter().flatten().sum();
        let flex_count = fixed_outer.iter().filter(|w| w.is_none()).count() as i32;

        if flex_count == 0 {
            return scale_to_fit(&fixed_outer, total_fixed, width);
        }

        let base = f64::from(width - total_fixed) / f64::from(flex_count);
        let base = base.round() as i32;
        let remainder = width - total_fixed - base * flex_count;

        let mut flex_seen = 0;
        fixed_outer
            .iter()
            .map(|w| match w {
                Some(outer) => *outer,
                None => {
                    flex_seen += 1;
                    if flex_seen == flex_count {
                        base + remainder
                    } else {
                        base
                    }
                }
            })
            .collect()
    }
}

/// Scale fixed outer widths uniformly so they sum to `width` exactly.
fn scale_to_fit(fixed_outer: &[Option<i32>], total_fixed: i32, width: i32) -> Vec<i32> {
    if total_fixed <= 0 {
        // Nothing meaningful to scale; give everything to the last child.
        let mut widths = vec![0; fixed_outer.len()];
        if let Some(last) = widths.last_mut() {
            *last = width;
        }
        return widths;
    }

    let scale = f64::from(width) / f64::from(total_fixed);
    let mut widths: Vec<i32> = fixed_outer
        .iter()
        .map(|w| (f64::from(w.unwrap_or(0)) * scale).round() as i32)
        .collect();
    let sum: i32 = widths.iter().sum();
    if let Some(last) = widths.last_mut() {
        *last += width - sum;
    }
    widths
}

/// Divide an outer height evenly among `count` vertical children; the
/// last child absorbs the rounding remainder. Per-child size hints are
/// not consulted: vertical stacks always divide evenly.
fn vertical_heights(count: usize, height: i32) -> Vec<i32> {
    if count == 0 {
        return Vec::new();
    }
    let base = (f64::from(height) / count as f64).round() as i32;
    let mut heights = vec![base; count];
    if let Some(last) = heights.last_mut() {
        *last += height - base * count as i32;
    }
    heights
}

fn fixed_inner_width(node: &LayoutNode) -> Option<f64> {
    match node {
        LayoutNode::Panel(panel) => panel.fixed_width,
        _ => None,
    }
}
