use ca_rendering::{Color, DrawStyle, Rectangle, RenderItem, RenderList, z_order};

/// Platform-neutral integer rectangle.
///
/// We intentionally reuse the core `RectI32` so UI and core share the same geometry type.
pub use ca_app::selection::RectI32;

use crate::theme::overlay::{BORDER_COLOR, BORDER_WIDTH};
use crate::theme::surface::MARGIN_COLOR;

#[inline]
fn to_rectangle_f32(rect: RectI32) -> Rectangle {
    Rectangle {
        x: rect.left as f32,
        y: rect.top as f32,
        width: rect.width() as f32,
        height: rect.height() as f32,
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SelectionOverlayStyle {
    pub border_color: Color,
    pub border_width: f32,
}

impl SelectionOverlayStyle {
    /// Style from 8-bit stroke color and width (as stored in settings).
    pub fn from_rgb8(color: (u8, u8, u8), width: f32) -> Self {
        Self {
            border_color: Color::from_rgb8(color.0, color.1, color.2),
            border_width: width,
        }
    }
}

impl Default for SelectionOverlayStyle {
    fn default() -> Self {
        Self {
            border_color: BORDER_COLOR,
            border_width: BORDER_WIDTH,
        }
    }
}

pub fn build_selection_overlay_render_list(
    selection_rect: RectI32,
    surface_visible: bool,
) -> Option<RenderList> {
    build_selection_overlay_render_list_with_style(
        selection_rect,
        surface_visible,
        &SelectionOverlayStyle::default(),
    )
}

/// Outline of the current selection, or `None` when there is nothing to draw.
///
/// A degenerate rectangle (press without movement) still draws as a zero-size outline; only the
/// cleared selection draws nothing.
pub fn build_selection_overlay_render_list_with_style(
    selection_rect: RectI32,
    surface_visible: bool,
    style: &SelectionOverlayStyle,
) -> Option<RenderList> {
    if !surface_visible || selection_rect == RectI32::EMPTY {
        return None;
    }

    let mut render_list = RenderList::with_capacity(1);
    render_list.submit(RenderItem::SelectionBorder {
        rect: to_rectangle_f32(selection_rect),
        color: style.border_color,
        width: style.border_width,
        z_order: z_order::SELECTION_BORDER,
    });

    Some(render_list)
}

/// Filled band covering the surface area above the photo.
pub fn margin_band_item(surface_width: u32, margin_height: i32) -> Option<RenderItem> {
    if surface_width == 0 || margin_height <= 0 {
        return None;
    }
    Some(RenderItem::Rectangle {
        rect: Rectangle::new(0.0, 0.0, surface_width as f32, margin_height as f32),
        style: DrawStyle::fill(MARGIN_COLOR),
        z_order: z_order::BACKGROUND,
    })
}
