//! Coordinate conversion between resolved layout rects and wry rects.

use homedeck_common::Rect;

/// Convert a resolved layout `Rect` (integer logical pixels) to a wry `Rect`.
pub fn layout_rect_to_wry(rect: &Rect) -> wry::Rect {
    wry::Rect {
        position: wry::dpi::Position::Logical(wry::dpi::LogicalPosition::new(
            f64::from(rect.left),
            f64::from(rect.top),
        )),
        size: wry::dpi::Size::Logical(wry::dpi::LogicalSize::new(
            f64::from(rect.width.max(0)),
            f64::from(rect.height.max(0)),
        )),
    }
}
