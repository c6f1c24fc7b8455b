pub mod panels;
pub mod selection_overlay;
pub mod theme;

pub use panels::ViewVisibility;
pub use selection_overlay::{
    SelectionOverlayStyle, build_selection_overlay_render_list,
    build_selection_overlay_render_list_with_style, margin_band_item,
};
