//! Error types for the color-sample pipeline

use ca_app::selection::RectI32;
use thiserror::Error;

/// Result type alias for pipeline operations
pub type Result<T> = std::result::Result<T, AnalysisError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AnalysisError {
    /// Mapped selection has no positive width or height.
    #[error("Invalid selection: {width}x{height}")]
    InvalidSelection { width: i32, height: i32 },

    /// Mapped selection does not fit inside the sample bitmap.
    #[error(
        "Crop out of bounds: {width}x{height} at ({left}, {top}) exceeds {bitmap_width}x{bitmap_height} bitmap"
    )]
    CropOutOfBounds {
        left: i32,
        top: i32,
        width: i32,
        height: i32,
        bitmap_width: u32,
        bitmap_height: u32,
    },

    /// A region with no pixels reached the averaging step.
    #[error("Cannot average an empty region")]
    EmptyRegion,

    /// Analyte name outside the configured table.
    #[error("Unknown analyte: {name:?}")]
    UnknownAnalyte { name: String },
}

impl AnalysisError {
    pub fn invalid_selection(rect: RectI32) -> Self {
        Self::InvalidSelection {
            width: rect.width(),
            height: rect.height(),
        }
    }

    pub fn out_of_bounds(rect: RectI32, bitmap_width: u32, bitmap_height: u32) -> Self {
        Self::CropOutOfBounds {
            left: rect.left,
            top: rect.top,
            width: rect.width(),
            height: rect.height(),
            bitmap_width,
            bitmap_height,
        }
    }

    pub fn unknown_analyte(name: impl Into<String>) -> Self {
        Self::UnknownAnalyte { name: name.into() }
    }

    /// Short text for a transient notification.
    pub fn user_message(&self) -> String {
        match self {
            AnalysisError::InvalidSelection { .. } | AnalysisError::EmptyRegion => {
                "Please select a valid area".to_string()
            }
            AnalysisError::CropOutOfBounds { .. } => {
                "Selected area is outside the photo".to_string()
            }
            AnalysisError::UnknownAnalyte { .. } => "Invalid option selected".to_string(),
        }
    }
}
