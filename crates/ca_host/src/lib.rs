pub mod app;
pub mod capture;
pub mod command_executor;
pub mod constants;
pub mod core_bridge;
pub mod error;
pub mod raster;

pub use app::{App, Preview, ViewState};
pub use capture::{CaptureSource, ImageFileCapture, NoCamera, ScriptedCapture};
pub use ca_host_protocol::Command;
pub use command_executor::{CommandExecutor, CommandQueue};
pub use error::HostError;
pub use raster::RasterBackend;
