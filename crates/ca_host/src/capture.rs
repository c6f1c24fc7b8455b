use std::collections::VecDeque;
use std::path::PathBuf;

use image::{DynamicImage, ImageReader};

use crate::error::HostError;

/// Camera (or any photo provider) seen from the host.
///
/// `Ok(None)` means the user backed out without taking a photo.
pub trait CaptureSource {
    fn capture(&mut self) -> Result<Option<DynamicImage>, HostError>;
}

/// Device without a camera app.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoCamera;

impl CaptureSource for NoCamera {
    fn capture(&mut self) -> Result<Option<DynamicImage>, HostError> {
        Err(HostError::NoCameraAvailable)
    }
}

/// Decodes a photo from disk on every capture.
#[derive(Debug, Clone)]
pub struct ImageFileCapture {
    path: PathBuf,
}

impl ImageFileCapture {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl CaptureSource for ImageFileCapture {
    fn capture(&mut self) -> Result<Option<DynamicImage>, HostError> {
        let reader = ImageReader::open(&self.path).map_err(|e| {
            HostError::capture_failed(format!("open {}", self.path.display()), e)
        })?;
        let reader = reader.with_guessed_format().map_err(|e| {
            HostError::capture_failed(format!("detect format of {}", self.path.display()), e)
        })?;
        let image = reader.decode().map_err(|e| {
            HostError::capture_failed(format!("decode {}", self.path.display()), e)
        })?;
        Ok(Some(image))
    }
}

/// Replays a fixed sequence of capture outcomes, then reports cancellation.
#[derive(Debug, Default)]
pub struct ScriptedCapture {
    shots: VecDeque<Option<DynamicImage>>,
}

impl ScriptedCapture {
    pub fn new(shots: impl IntoIterator<Item = Option<DynamicImage>>) -> Self {
        Self {
            shots: shots.into_iter().collect(),
        }
    }
}

impl CaptureSource for ScriptedCapture {
    fn capture(&mut self) -> Result<Option<DynamicImage>, HostError> {
        Ok(self.shots.pop_front().flatten())
    }
}
