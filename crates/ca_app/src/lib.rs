pub mod selection;
pub mod workflow;

use selection::RectI32;
use workflow::Stage;

/// Top-level application actions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Pointer input routed to the selection surface.
    Selection(selection::Action),
    /// User asked for a new photo.
    CaptureRequested,
    /// The host installed a freshly captured sample bitmap.
    CaptureCompleted,
    /// Capture was cancelled or failed; nothing changes.
    CaptureFailed,
    /// User asked to crop the current selection.
    ExtractRequested,
    /// The host cropped the region successfully.
    RegionExtracted,
    /// User picked an analyte in the selector.
    SelectAnalyte { name: String },
    /// User asked for the analysis of the extracted region.
    AnalyzeRequested,
    /// The host evaluated the region.
    AnalysisCompleted { text: String },
    /// Back to the initial state (drops the bitmap).
    Reset,
}

/// Top-level application effects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    Selection(selection::Effect),
    /// The workflow moved to a new stage; the host should refresh view visibility.
    StageChanged(Stage),
    /// Invoke the capture facility.
    StartCapture,
    /// Crop the sample bitmap at this display-space rectangle.
    ExtractRegion { selection: RectI32 },
    /// Evaluate the extracted region for the given analyte.
    ///
    /// `None` means no analyte has been picked yet.
    AnalyzeRegion { analyte: Option<String> },
    /// Replace the result text.
    ShowResult { text: String },
    /// Drop the current sample bitmap and extracted region.
    ReleaseBitmap,
}

/// Core app model.
#[derive(Debug, Default)]
pub struct AppModel {
    selection: selection::Model,
    workflow: workflow::Model,
    analyte: Option<String>,
}

impl AppModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selection(&self) -> &selection::Model {
        &self.selection
    }

    pub fn workflow(&self) -> &workflow::Model {
        &self.workflow
    }

    pub fn stage(&self) -> Stage {
        self.workflow.stage()
    }

    pub fn analyte(&self) -> Option<&str> {
        self.analyte.as_deref()
    }

    pub fn reduce(&mut self, action: Action) -> Vec<Effect> {
        match action {
            Action::Selection(a) => {
                // The surface is not interactive until a bitmap is installed.
                if !self.stage().accepts_pointer_input() {
                    return Vec::new();
                }
                self.selection
                    .reduce(a)
                    .into_iter()
                    .map(Effect::Selection)
                    .collect()
            }

            Action::CaptureRequested => {
                let before = self.stage();
                self.workflow.request_capture();
                let mut effects = self.stage_change_from(before);
                effects.push(Effect::StartCapture);
                effects
            }

            Action::CaptureCompleted => {
                let mut effects: Vec<Effect> = self
                    .selection
                    .clear_selection()
                    .into_iter()
                    .map(Effect::Selection)
                    .collect();
                self.workflow.install_bitmap();
                effects.push(Effect::StageChanged(self.stage()));
                effects
            }

            Action::CaptureFailed => Vec::new(),

            Action::ExtractRequested => {
                // A drag still in progress has no committed rectangle.
                if self.stage() != Stage::Selecting
                    || self.selection.phase() != selection::Phase::Idle
                {
                    return Vec::new();
                }
                vec![Effect::ExtractRegion {
                    selection: self.selection.current_rectangle(),
                }]
            }

            Action::RegionExtracted => {
                let mut effects: Vec<Effect> = self
                    .selection
                    .clear_selection()
                    .into_iter()
                    .map(Effect::Selection)
                    .collect();
                self.workflow.region_extracted();
                effects.push(Effect::StageChanged(self.stage()));
                effects
            }

            Action::SelectAnalyte { name } => {
                self.analyte = Some(name);
                Vec::new()
            }

            Action::AnalyzeRequested => {
                if !self.stage().has_extracted_region() {
                    return Vec::new();
                }
                vec![Effect::AnalyzeRegion {
                    analyte: self.analyte.clone(),
                }]
            }

            Action::AnalysisCompleted { text } => {
                let before = self.stage();
                self.workflow.result_shown();
                let mut effects = vec![Effect::ShowResult { text }];
                effects.extend(self.stage_change_from(before));
                effects
            }

            Action::Reset => {
                self.workflow.reset();
                let mut effects: Vec<Effect> = self
                    .selection
                    .clear_selection()
                    .into_iter()
                    .map(Effect::Selection)
                    .collect();
                effects.push(Effect::ReleaseBitmap);
                effects.push(Effect::StageChanged(self.stage()));
                effects
            }
        }
    }

    fn stage_change_from(&self, before: Stage) -> Vec<Effect> {
        if self.stage() == before {
            Vec::new()
        } else {
            vec![Effect::StageChanged(self.stage())]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::selection::{self, RectI32};
    use super::workflow::Stage;
    use super::{Action, AppModel, Effect};

    fn captured() -> AppModel {
        let mut m = AppModel::new();
        m.reduce(Action::CaptureRequested);
        m.reduce(Action::CaptureCompleted);
        m
    }

    #[test]
    fn pointer_input_is_ignored_before_capture() {
        let mut m = AppModel::new();
        let eff = m.reduce(Action::Selection(selection::Action::down(1, 1)));
        assert!(eff.is_empty());
        assert_eq!(m.selection().current_rectangle(), RectI32::EMPTY);
    }

    #[test]
    fn capture_request_emits_start_capture_only() {
        let mut m = AppModel::new();
        let eff = m.reduce(Action::CaptureRequested);
        assert_eq!(eff, vec![Effect::StartCapture]);
        assert_eq!(m.stage(), Stage::AwaitingCapture);
    }

    #[test]
    fn capture_completed_enters_selecting() {
        let m = captured();
        assert_eq!(m.stage(), Stage::Selecting);
        assert!(m.workflow().has_bitmap());
    }

    #[test]
    fn extract_emits_current_rectangle() {
        let mut m = captured();
        m.reduce(Action::Selection(selection::Action::down(10, 300)));
        m.reduce(Action::Selection(selection::Action::up(60, 350)));

        let eff = m.reduce(Action::ExtractRequested);
        assert_eq!(
            eff,
            vec![Effect::ExtractRegion {
                selection: RectI32::new(10, 300, 60, 350)
            }]
        );
        // Nothing changes until the host confirms the crop.
        assert_eq!(m.stage(), Stage::Selecting);
    }

    #[test]
    fn extract_is_ignored_while_dragging() {
        let mut m = captured();
        m.reduce(Action::Selection(selection::Action::down(10, 300)));
        m.reduce(Action::Selection(selection::Action::move_to(60, 350)));
        assert_eq!(m.selection().phase(), selection::Phase::Dragging);

        assert!(m.reduce(Action::ExtractRequested).is_empty());
        assert_eq!(m.stage(), Stage::Selecting);

        m.reduce(Action::Selection(selection::Action::up(60, 350)));
        assert_eq!(
            m.reduce(Action::ExtractRequested),
            vec![Effect::ExtractRegion {
                selection: RectI32::new(10, 300, 60, 350)
            }]
        );
    }

    #[test]
    fn region_extracted_clears_selection_and_changes_stage() {
        let mut m = captured();
        m.reduce(Action::Selection(selection::Action::down(10, 300)));
        m.reduce(Action::Selection(selection::Action::up(60, 350)));

        let eff = m.reduce(Action::RegionExtracted);
        assert_eq!(m.stage(), Stage::Extracted);
        assert!(m.selection().current_rectangle().is_empty());
        assert_eq!(
            eff,
            vec![
                Effect::Selection(selection::Effect::RequestRedraw {
                    selection: RectI32::EMPTY
                }),
                Effect::StageChanged(Stage::Extracted),
            ]
        );

        // Surface is no longer interactive.
        assert!(
            m.reduce(Action::Selection(selection::Action::down(0, 0)))
                .is_empty()
        );
    }

    #[test]
    fn analyze_requires_extracted_region() {
        let mut m = captured();
        assert!(m.reduce(Action::AnalyzeRequested).is_empty());

        m.reduce(Action::RegionExtracted);
        let eff = m.reduce(Action::AnalyzeRequested);
        assert_eq!(eff, vec![Effect::AnalyzeRegion { analyte: None }]);

        m.reduce(Action::SelectAnalyte {
            name: "Glucose".to_string(),
        });
        let eff = m.reduce(Action::AnalyzeRequested);
        assert_eq!(
            eff,
            vec![Effect::AnalyzeRegion {
                analyte: Some("Glucose".to_string())
            }]
        );
    }

    #[test]
    fn analysis_completed_shows_result_once() {
        let mut m = captured();
        m.reduce(Action::RegionExtracted);

        let eff = m.reduce(Action::AnalysisCompleted {
            text: "R: 1".to_string(),
        });
        assert_eq!(
            eff,
            vec![
                Effect::ShowResult {
                    text: "R: 1".to_string()
                },
                Effect::StageChanged(Stage::ResultShown),
            ]
        );

        // Re-analysis keeps the stage and only replaces the text.
        let eff = m.reduce(Action::AnalysisCompleted {
            text: "R: 2".to_string(),
        });
        assert_eq!(
            eff,
            vec![Effect::ShowResult {
                text: "R: 2".to_string()
            }]
        );
    }

    #[test]
    fn new_capture_after_result_hides_result() {
        let mut m = captured();
        m.reduce(Action::RegionExtracted);
        m.reduce(Action::AnalysisCompleted {
            text: String::new(),
        });

        let eff = m.reduce(Action::CaptureRequested);
        assert_eq!(
            eff,
            vec![Effect::StageChanged(Stage::Extracted), Effect::StartCapture]
        );
        assert!(m.reduce(Action::CaptureFailed).is_empty());
        assert_eq!(m.stage(), Stage::Extracted);
    }

    #[test]
    fn reset_releases_bitmap() {
        let mut m = captured();
        let eff = m.reduce(Action::Reset);
        assert_eq!(m.stage(), Stage::AwaitingCapture);
        assert!(eff.contains(&Effect::ReleaseBitmap));
        assert!(!m.workflow().has_bitmap());
    }
}
