use ca_app::selection::RectI32;

use crate::analyte::AnalyteTable;
use crate::average::{Averaging, ColorSample, average_color};
use crate::bitmap::SampleBitmap;
use crate::error::Result;
use crate::mapping::DisplayMapping;
use crate::report::AnalysisReport;

/// Crop → average → regression, as pure functions of their inputs.
///
/// The analyte table is borrowed so callers (and tests) choose which calibration is in effect.
#[derive(Debug, Clone, Copy)]
pub struct ColorSamplePipeline<'a> {
    table: &'a AnalyteTable,
    mapping: DisplayMapping,
    averaging: Averaging,
}

impl<'a> ColorSamplePipeline<'a> {
    pub fn new(table: &'a AnalyteTable, mapping: DisplayMapping, averaging: Averaging) -> Self {
        Self {
            table,
            mapping,
            averaging,
        }
    }

    /// Map a display-space selection onto `bitmap` and crop it.
    pub fn extract(&self, bitmap: &SampleBitmap, display: RectI32) -> Result<SampleBitmap> {
        let mapped = self.mapping.to_bitmap(display);
        log::debug!(
            "extract: display {:?} -> bitmap {:?} ({}x{} source)",
            display,
            mapped,
            bitmap.width(),
            bitmap.height()
        );
        bitmap.crop(mapped)
    }

    /// Mean color of an (already cropped) region.
    pub fn sample(&self, region: &SampleBitmap) -> Result<ColorSample> {
        let sample = average_color(region, self.averaging)?;
        log::debug!("sample: {:?} over {} px", sample, region.pixel_count());
        Ok(sample)
    }

    /// Evaluate the regression for `analyte_name` and format the result.
    pub fn evaluate(&self, sample: ColorSample, analyte_name: &str) -> Result<AnalysisReport> {
        let model = self.table.lookup(analyte_name)?;
        let value = model.formula.evaluate(sample);
        log::debug!("evaluate: {} {:?} -> {}", model.analyte, sample, value);
        Ok(AnalysisReport::new(model.analyte, sample, value))
    }

    /// Average an extracted region and evaluate it.
    pub fn analyze_region(
        &self,
        region: &SampleBitmap,
        analyte_name: &str,
    ) -> Result<AnalysisReport> {
        // Resolve the analyte first so a bad name fails before touching pixels.
        self.table.lookup(analyte_name)?;
        let sample = self.sample(region)?;
        self.evaluate(sample, analyte_name)
    }

    /// Full pipeline from a display selection.
    pub fn analyze(
        &self,
        bitmap: &SampleBitmap,
        display: RectI32,
        analyte_name: &str,
    ) -> Result<AnalysisReport> {
        let region = self.extract(bitmap, display)?;
        self.analyze_region(&region, analyte_name)
    }
}

#[cfg(test)]
mod tests {
    use super::{Averaging, ColorSamplePipeline, DisplayMapping, RectI32, SampleBitmap};
    use crate::analyte::{Analyte, AnalyteModel, AnalyteTable, Formula};
    use crate::average::ColorSample;
    use crate::error::AnalysisError;

    fn two_tone() -> SampleBitmap {
        // Left half (10, 20, 30), right half (200, 100, 0).
        let mut raw = Vec::new();
        for _y in 0..40 {
            for x in 0..40 {
                if x < 20 {
                    raw.extend_from_slice(&[10, 20, 30]);
                } else {
                    raw.extend_from_slice(&[200, 100, 0]);
                }
            }
        }
        SampleBitmap::from_raw(40, 40, raw).unwrap()
    }

    #[test]
    fn uniform_region_through_margin() {
        let table = AnalyteTable::power_law_defaults();
        let p = ColorSamplePipeline::new(&table, DisplayMapping::new(100), Averaging::Round);

        let bmp = two_tone();
        let report = p
            .analyze(&bmp, RectI32::new(2, 105, 18, 130), "pH")
            .unwrap();
        assert_eq!(report.sample, ColorSample::new(10, 20, 30));
        assert_eq!(report.analyte, Analyte::Ph);
        assert!(report.text.starts_with("R: 10\nG: 20\nB: 30\nResult: "));
        assert!(!report.text.ends_with(" mM"));
    }

    #[test]
    fn straddling_region_mixes_colors() {
        let table = AnalyteTable::power_law_defaults();
        let p = ColorSamplePipeline::new(&table, DisplayMapping::identity(), Averaging::Truncate);

        let region = p.extract(&two_tone(), RectI32::new(10, 0, 30, 10)).unwrap();
        assert_eq!((region.width(), region.height()), (20, 10));
        assert_eq!(p.sample(&region).unwrap(), ColorSample::new(105, 60, 15));
    }

    #[test]
    fn margin_pushes_selection_out_of_bitmap() {
        let table = AnalyteTable::power_law_defaults();
        let p = ColorSamplePipeline::new(&table, DisplayMapping::new(256), Averaging::Round);

        // Above the photo: negative top after mapping.
        let err = p
            .analyze(&two_tone(), RectI32::new(0, 10, 10, 30), "pH")
            .unwrap_err();
        assert!(matches!(err, AnalysisError::CropOutOfBounds { .. }));
    }

    #[test]
    fn empty_selection_is_invalid() {
        let table = AnalyteTable::power_law_defaults();
        let p = ColorSamplePipeline::new(&table, DisplayMapping::default(), Averaging::Round);
        assert_eq!(
            p.analyze(&two_tone(), RectI32::EMPTY, "pH"),
            Err(AnalysisError::InvalidSelection {
                width: 0,
                height: 0
            })
        );
    }

    #[test]
    fn unknown_analyte_fails_before_sampling() {
        let table = AnalyteTable::power_law_defaults();
        let p = ColorSamplePipeline::new(&table, DisplayMapping::identity(), Averaging::Round);
        let empty = SampleBitmap::from_raw(0, 0, Vec::new()).unwrap();
        assert_eq!(
            p.analyze_region(&empty, "Cholesterol"),
            Err(AnalysisError::unknown_analyte("Cholesterol"))
        );
    }

    #[test]
    fn injected_table_is_used() {
        let table = AnalyteTable::new([AnalyteModel {
            analyte: Analyte::Glucose,
            formula: Formula::power_law([1.0, 1.0, 1.0, 1.0, 1.0, 1.0]),
        }]);
        let p = ColorSamplePipeline::new(&table, DisplayMapping::identity(), Averaging::Round);

        let report = p.evaluate(ColorSample::new(1, 2, 3), "Glucose").unwrap();
        assert_eq!(report.value, 6.0);
        assert_eq!(report.text, "R: 1\nG: 2\nB: 3\nResult: 6.00 mM");
        assert!(p.evaluate(ColorSample::new(1, 2, 3), "pH").is_err());
    }

    #[test]
    fn extreme_coordinates_are_out_of_bounds() {
        let table = AnalyteTable::power_law_defaults();
        let p = ColorSamplePipeline::new(&table, DisplayMapping::default(), Averaging::Round);
        let bmp = two_tone();

        let wide = RectI32::from_points(i32::MIN, 300, i32::MAX, 350);
        assert!(matches!(
            p.extract(&bmp, wide),
            Err(AnalysisError::CropOutOfBounds { .. })
        ));

        let tall = RectI32::from_points(0, -2_147_483_600, 10, 10);
        assert!(matches!(
            p.extract(&bmp, tall),
            Err(AnalysisError::CropOutOfBounds { .. })
        ));

        let low = RectI32::from_points(0, i32::MAX - 5, 10, i32::MAX);
        assert!(matches!(
            p.extract(&bmp, low),
            Err(AnalysisError::CropOutOfBounds { .. })
        ));
    }
}
