use ca_app::selection::RectI32;
use image::imageops::{self, FilterType};
use image::{DynamicImage, Rgb, RgbImage};

use crate::error::{AnalysisError, Result};

/// Immutable RGB8 pixel buffer holding the scaled captured photo (or a crop of it).
#[derive(Debug, Clone, PartialEq)]
pub struct SampleBitmap {
    image: RgbImage,
}

impl SampleBitmap {
    pub fn new(image: RgbImage) -> Self {
        Self { image }
    }

    /// Build from a tightly packed RGB buffer. Returns `None` if the length does not match.
    pub fn from_raw(width: u32, height: u32, rgb: Vec<u8>) -> Option<Self> {
        RgbImage::from_raw(width, height, rgb).map(Self::new)
    }

    /// Bitmap where every pixel has the same color.
    pub fn uniform(width: u32, height: u32, rgb: [u8; 3]) -> Self {
        Self::new(RgbImage::from_pixel(width, height, Rgb(rgb)))
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.image.height()
    }

    #[inline]
    pub fn pixel_count(&self) -> u64 {
        self.width() as u64 * self.height() as u64
    }

    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 3] {
        self.image.get_pixel(x, y).0
    }

    pub fn pixels(&self) -> impl Iterator<Item = [u8; 3]> + '_ {
        self.image.pixels().map(|p| p.0)
    }

    pub fn as_image(&self) -> &RgbImage {
        &self.image
    }

    pub fn into_image(self) -> RgbImage {
        self.image
    }

    /// Rescale to the working resolution with nearest-neighbour sampling (no filtering).
    pub fn scaled_to(&self, width: u32, height: u32) -> Self {
        if self.width() == width && self.height() == height {
            return self.clone();
        }
        Self::new(imageops::resize(&self.image, width, height, FilterType::Nearest))
    }

    /// Copy out the sub-region at `rect` (bitmap coordinates).
    ///
    /// Fails with [`AnalysisError::InvalidSelection`] for a non-positive width or height and with
    /// [`AnalysisError::CropOutOfBounds`] when the region leaves the bitmap. Nothing is allocated
    /// on failure.
    pub fn crop(&self, rect: RectI32) -> Result<SampleBitmap> {
        let width = rect.width();
        let height = rect.height();
        if width <= 0 || height <= 0 {
            return Err(AnalysisError::invalid_selection(rect));
        }

        let fits = rect.left >= 0
            && rect.top >= 0
            && rect.left as i64 + width as i64 <= self.width() as i64
            && rect.top as i64 + height as i64 <= self.height() as i64;
        if !fits {
            return Err(AnalysisError::out_of_bounds(
                rect,
                self.width(),
                self.height(),
            ));
        }

        let view = imageops::crop_imm(
            &self.image,
            rect.left as u32,
            rect.top as u32,
            width as u32,
            height as u32,
        );
        Ok(Self::new(view.to_image()))
    }
}

impl From<RgbImage> for SampleBitmap {
    fn from(image: RgbImage) -> Self {
        Self::new(image)
    }
}

impl From<DynamicImage> for SampleBitmap {
    fn from(image: DynamicImage) -> Self {
        Self::new(image.to_rgb8())
    }
}
