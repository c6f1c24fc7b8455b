pub mod cli;

pub use ca_host::{app, capture, command_executor, constants, core_bridge, error};

// Public compatibility modules (re-exporting the workspace crates).
pub use ca_analysis as analysis;
pub use ca_host_protocol as message;
pub use ca_settings as settings;

pub use ca_host::{App, Command, CommandExecutor};
