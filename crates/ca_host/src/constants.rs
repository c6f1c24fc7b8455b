/// Upper bound on commands processed for one user action.
///
/// Each action expands into a short, finite chain; hitting this means a feedback loop.
pub const MAX_COMMAND_ITERATIONS: usize = 1000;

// ==================== Notifications ====================

pub const MSG_NO_CAMERA: &str = "No camera app found";
pub const MSG_CAPTURE_FAILED: &str = "Failed to capture image";
pub const MSG_CANCELLED: &str = "Cancelled";
pub const MSG_NO_BITMAP: &str = "No photo to crop";
pub const MSG_NO_ANALYTE: &str = "Please choose pH, Glucose or Lactate";
