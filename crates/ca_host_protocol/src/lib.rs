use ca_app::selection::RectI32;
use ca_ui::ViewVisibility;

/// View messages for host-owned widgets.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewMessage {
    /// Apply visibility toggles.
    SetVisibility(ViewVisibility),
    /// Replace the result text.
    SetResultText(String),
    /// Show the extracted region in place of the photo.
    ShowExtractedRegion,
}

/// Host command queue items.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Core actions (platform-neutral). Executed by the host.
    Core(ca_app::Action),

    /// Repaint the selection surface with this outline.
    RequestRedraw(RectI32),

    /// Invoke the capture facility.
    Capture,

    /// Crop the sample bitmap at a display-space selection.
    Extract(RectI32),

    /// Evaluate the extracted region.
    Analyze(Option<String>),

    /// Drop the sample bitmap.
    ReleaseBitmap,

    /// Short transient message (toast).
    ShowNotification(String),

    /// View commands.
    View(ViewMessage),

    /// No-op.
    None,
}
