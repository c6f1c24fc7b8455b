use ca_app::workflow::Stage;

/// Visibility of the host-owned views for one workflow stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ViewVisibility {
    /// Scaled captured photo.
    pub capture_preview: bool,
    /// Drag-rectangle overlay on top of the photo.
    pub selection_surface: bool,
    pub extract_button: bool,
    /// Cropped region shown in place of the photo.
    pub extracted_preview: bool,
    pub analyte_selector: bool,
    pub analyze_button: bool,
    pub result_text: bool,
}

impl ViewVisibility {
    pub fn for_stage(stage: Stage) -> Self {
        match stage {
            Stage::AwaitingCapture => Self::default(),
            Stage::Selecting => Self {
                capture_preview: true,
                selection_surface: true,
                extract_button: true,
                ..Self::default()
            },
            Stage::Extracted => Self {
                extracted_preview: true,
                analyte_selector: true,
                analyze_button: true,
                ..Self::default()
            },
            Stage::ResultShown => Self {
                result_text: true,
                ..Self::for_stage(Stage::Extracted)
            },
        }
    }
}
