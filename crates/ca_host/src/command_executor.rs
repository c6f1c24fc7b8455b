use std::collections::VecDeque;

use ca_analysis::SampleBitmap;
use ca_app::Action;
use ca_host_protocol::{Command, ViewMessage};

use crate::app::{App, Preview};
use crate::constants::MAX_COMMAND_ITERATIONS;
use crate::error::HostError;

/// Command queue.
///
/// Commands produced while executing are appended and run in FIFO order, so one user action
/// never recurses into the executor.
#[derive(Debug, Default)]
pub struct CommandQueue {
    pending: VecDeque<Command>,
    executed_count: usize,
}

impl CommandQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, command: Command) {
        if !matches!(command, Command::None) {
            self.pending.push_back(command);
        }
    }

    pub fn push_batch(&mut self, commands: impl IntoIterator<Item = Command>) {
        for cmd in commands {
            self.push(cmd);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Run until the queue drains or the iteration guard trips.
    pub fn process_all<E: CommandExecutor + ?Sized>(&mut self, executor: &mut E) {
        let mut iteration = 0;

        while let Some(command) = self.pending.pop_front() {
            self.executed_count += 1;

            let new_commands = executor.execute_command(command);
            self.push_batch(new_commands);

            iteration += 1;
            if iteration >= MAX_COMMAND_ITERATIONS {
                log::error!(
                    "Command queue exceeded {MAX_COMMAND_ITERATIONS} iterations, dropping {} pending",
                    self.pending.len()
                );
                self.pending.clear();
                break;
            }
        }
    }

    /// Commands executed over the queue's lifetime.
    pub fn executed_count(&self) -> usize {
        self.executed_count
    }
}

pub trait CommandExecutor {
    /// Execute one command and return any follow-up commands.
    fn execute_command(&mut self, command: Command) -> Vec<Command>;

    /// Queue `commands` and run them (and everything they produce) to completion.
    fn execute_command_chain(&mut self, commands: Vec<Command>) {
        let mut queue = CommandQueue::new();
        queue.push_batch(commands);
        queue.process_all(self);
    }
}

impl CommandExecutor for App {
    fn execute_command(&mut self, command: Command) -> Vec<Command> {
        match command {
            Command::Core(action) => self.dispatch_core_action(action),
            Command::RequestRedraw(rect) => {
                self.view_mut().set_overlay(rect);
                vec![]
            }
            Command::Capture => self.handle_capture(),
            Command::Extract(selection) => match self.extract_region(selection) {
                Ok(()) => vec![
                    Command::View(ViewMessage::ShowExtractedRegion),
                    Command::Core(Action::RegionExtracted),
                ],
                Err(e) => {
                    log::warn!("Extraction failed: {e}");
                    vec![Command::ShowNotification(e.user_message())]
                }
            },
            Command::Analyze(analyte) => match self.analyze_region(analyte.as_deref()) {
                Ok(text) => vec![Command::Core(Action::AnalysisCompleted { text })],
                Err(e) => {
                    log::warn!("Analysis failed: {e}");
                    vec![Command::ShowNotification(e.user_message())]
                }
            },
            Command::ReleaseBitmap => {
                self.release_bitmap();
                vec![]
            }
            Command::ShowNotification(message) => {
                log::info!("Notification: {message}");
                self.view_mut().notifications.push(message);
                vec![]
            }
            Command::View(message) => {
                self.handle_view_message(message);
                vec![]
            }
            Command::None => vec![],
        }
    }
}

// Helper methods
impl App {
    fn handle_capture(&mut self) -> Vec<Command> {
        let outcome = self
            .capture_source_mut()
            .capture()
            .and_then(|shot| shot.ok_or(HostError::Cancelled));

        match outcome {
            Ok(image) => {
                let (width, height) = self.working_resolution();
                let bitmap = SampleBitmap::from(image).scaled_to(width, height);
                log::info!("Captured photo, working bitmap {width}x{height}");
                self.install_bitmap(bitmap);
                vec![Command::Core(Action::CaptureCompleted)]
            }
            Err(e) => {
                match &e {
                    HostError::Cancelled => log::info!("Capture cancelled"),
                    other => log::warn!("Capture failed: {other}"),
                }
                vec![
                    Command::ShowNotification(e.user_message()),
                    Command::Core(Action::CaptureFailed),
                ]
            }
        }
    }

    fn handle_view_message(&mut self, message: ViewMessage) {
        let view = self.view_mut();
        match message {
            ViewMessage::SetVisibility(visibility) => view.visibility = visibility,
            ViewMessage::SetResultText(text) => view.result_text = Some(text),
            ViewMessage::ShowExtractedRegion => view.preview = Preview::ExtractedRegion,
        }
    }
}
