//! Color-sample pipeline.
//!
//! Maps a display-space selection onto the sample bitmap, crops it, averages the RGB channels and
//! evaluates an analyte regression against the averaged color.

pub mod analyte;
pub mod average;
pub mod bitmap;
pub mod error;
pub mod mapping;
pub mod pipeline;
pub mod report;

pub use analyte::{Analyte, AnalyteModel, AnalyteTable, Formula};
pub use average::{Averaging, ColorSample, average_color};
pub use bitmap::SampleBitmap;
pub use error::{AnalysisError, Result};
pub use mapping::DisplayMapping;
pub use pipeline::ColorSamplePipeline;
pub use report::{AnalysisReport, format_report};
