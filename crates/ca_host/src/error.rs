use ca_analysis::AnalysisError;
use thiserror::Error;

use crate::constants::{MSG_CANCELLED, MSG_CAPTURE_FAILED, MSG_NO_ANALYTE, MSG_NO_BITMAP, MSG_NO_CAMERA};

/// Host-level failures. Every variant is recoverable and ends up as a notification.
#[derive(Debug, Error)]
pub enum HostError {
    #[error("No camera available")]
    NoCameraAvailable,

    #[error("Capture failed: {message}")]
    CaptureFailed {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("Capture cancelled")]
    Cancelled,

    #[error("No sample bitmap to crop")]
    NoBitmapToCrop,

    #[error("No analyte selected")]
    NoAnalyteSelected,

    #[error(transparent)]
    Analysis(#[from] AnalysisError),
}

impl HostError {
    /// Create a capture error with context
    pub fn capture_failed<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::CaptureFailed {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Short text for a transient notification.
    pub fn user_message(&self) -> String {
        match self {
            HostError::NoCameraAvailable => MSG_NO_CAMERA.to_string(),
            HostError::CaptureFailed { .. } => MSG_CAPTURE_FAILED.to_string(),
            HostError::Cancelled => MSG_CANCELLED.to_string(),
            HostError::NoBitmapToCrop => MSG_NO_BITMAP.to_string(),
            HostError::NoAnalyteSelected => MSG_NO_ANALYTE.to_string(),
            HostError::Analysis(e) => e.user_message(),
        }
    }
}
