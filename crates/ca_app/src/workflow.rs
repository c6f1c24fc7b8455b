/// Capture-crop-analyze stage.
///
/// The host derives view visibility from this (see `ca_ui::panels`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Stage {
    /// Nothing captured yet (or a capture is pending).
    #[default]
    AwaitingCapture,
    /// A sample bitmap is shown and the selection surface is interactive.
    Selecting,
    /// The region has been cropped; the analyte selector is active.
    Extracted,
    /// Analysis text is visible.
    ResultShown,
}

impl Stage {
    /// True when pointer input should reach the selection surface.
    #[inline]
    pub fn accepts_pointer_input(self) -> bool {
        self == Stage::Selecting
    }

    /// True once a region has been extracted and can be analyzed.
    #[inline]
    pub fn has_extracted_region(self) -> bool {
        matches!(self, Stage::Extracted | Stage::ResultShown)
    }
}

/// Minimal workflow model.
#[derive(Debug, Default)]
pub struct Model {
    stage: Stage,
    has_bitmap: bool,
}

impl Model {
    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn has_bitmap(&self) -> bool {
        self.has_bitmap
    }

    /// A capture is pending. The current bitmap (if any) stays until a new one arrives.
    pub fn request_capture(&mut self) {
        if self.stage == Stage::ResultShown {
            self.stage = Stage::Extracted;
        }
    }

    pub fn install_bitmap(&mut self) {
        self.has_bitmap = true;
        self.stage = Stage::Selecting;
    }

    pub fn region_extracted(&mut self) {
        self.stage = Stage::Extracted;
    }

    pub fn result_shown(&mut self) {
        self.stage = Stage::ResultShown;
    }

    pub fn reset(&mut self) {
        self.stage = Stage::AwaitingCapture;
        self.has_bitmap = false;
    }
}
