use ca_app::{AppModel, Effect, selection as core_selection};
use ca_ui::ViewVisibility;

use ca_host_protocol::{Command, ViewMessage};

pub fn command_from_effect(effect: Effect) -> Option<Command> {
    match effect {
        Effect::Selection(sel) => match sel {
            core_selection::Effect::RequestRedraw { selection } => {
                Some(Command::RequestRedraw(selection))
            }
        },

        Effect::StageChanged(stage) => Some(Command::View(ViewMessage::SetVisibility(
            ViewVisibility::for_stage(stage),
        ))),
        Effect::StartCapture => Some(Command::Capture),
        Effect::ExtractRegion { selection } => Some(Command::Extract(selection)),
        Effect::AnalyzeRegion { analyte } => Some(Command::Analyze(analyte)),
        Effect::ShowResult { text } => Some(Command::View(ViewMessage::SetResultText(text))),
        Effect::ReleaseBitmap => Some(Command::ReleaseBitmap),
    }
}

pub fn commands_from_effects(effects: impl IntoIterator<Item = Effect>) -> Vec<Command> {
    effects
        .into_iter()
        .filter_map(command_from_effect)
        .collect()
}

pub fn dispatch(core: &mut AppModel, action: ca_app::Action) -> Vec<Command> {
    commands_from_effects(core.reduce(action))
}

#[cfg(test)]
mod tests {
    use super::{command_from_effect, dispatch};
    use ca_app::selection::RectI32;
    use ca_app::workflow::Stage;
    use ca_app::{Action, AppModel, Effect};
    use ca_host_protocol::{Command, ViewMessage};
    use ca_ui::ViewVisibility;

    #[test]
    fn stage_change_maps_to_visibility() {
        assert_eq!(
            command_from_effect(Effect::StageChanged(Stage::Selecting)),
            Some(Command::View(ViewMessage::SetVisibility(
                ViewVisibility::for_stage(Stage::Selecting)
            )))
        );
    }

    #[test]
    fn extract_carries_display_rectangle() {
        let rect = RectI32::new(1, 2, 3, 4);
        assert_eq!(
            command_from_effect(Effect::ExtractRegion { selection: rect }),
            Some(Command::Extract(rect))
        );
    }

    #[test]
    fn capture_request_becomes_capture_command() {
        let mut core = AppModel::new();
        assert_eq!(
            dispatch(&mut core, Action::CaptureRequested),
            vec![Command::Capture]
        );
    }
}
