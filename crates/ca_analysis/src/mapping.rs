use ca_app::selection::RectI32;
use serde::{Deserialize, Serialize};

/// Maps selection-surface coordinates onto sample-bitmap coordinates.
///
/// The displayed photo sits `margin_height` pixels below the top of the selection surface, so
/// both vertical bounds are shifted up by that amount. The horizontal axis is shared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayMapping {
    pub margin_height: i32,
}

impl DisplayMapping {
    pub const DEFAULT_MARGIN_HEIGHT: i32 = 256;

    pub const fn new(margin_height: i32) -> Self {
        Self { margin_height }
    }

    /// Identity mapping (surface and bitmap share an origin).
    pub const fn identity() -> Self {
        Self::new(0)
    }

    pub fn to_bitmap(&self, display: RectI32) -> RectI32 {
        display.offset_y(self.margin_height.saturating_neg())
    }
}

impl Default for DisplayMapping {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MARGIN_HEIGHT)
    }
}
