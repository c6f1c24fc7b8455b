use serde::{Deserialize, Serialize};

use crate::bitmap::SampleBitmap;
use crate::error::{AnalysisError, Result};

/// How channel sums are divided by the pixel count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Averaging {
    /// Nearest integer, halves rounded up.
    #[default]
    Round,
    /// Integer division (floor for these non-negative sums).
    Truncate,
}

impl Averaging {
    #[inline]
    fn divide(self, sum: u64, count: u64) -> u8 {
        let mean = match self {
            Averaging::Round => (sum + count / 2) / count,
            Averaging::Truncate => sum / count,
        };
        // A mean of u8 samples never exceeds 255.
        mean.min(u8::MAX as u64) as u8
    }
}

/// Mean red/green/blue of a region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ColorSample {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl ColorSample {
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    pub fn channels_f64(&self) -> (f64, f64, f64) {
        (self.red as f64, self.green as f64, self.blue as f64)
    }
}

/// Average every pixel of `bitmap`.
pub fn average_color(bitmap: &SampleBitmap, averaging: Averaging) -> Result<ColorSample> {
    let count = bitmap.pixel_count();
    if count == 0 {
        return Err(AnalysisError::EmptyRegion);
    }

    let (mut red, mut green, mut blue) = (0u64, 0u64, 0u64);
    for [r, g, b] in bitmap.pixels() {
        red += r as u64;
        green += g as u64;
        blue += b as u64;
    }

    Ok(ColorSample {
        red: averaging.divide(red, count),
        green: averaging.divide(green, count),
        blue: averaging.divide(blue, count),
    })
}
