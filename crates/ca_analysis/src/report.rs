use crate::analyte::Analyte;
use crate::average::ColorSample;

/// Evaluated sample plus the text shown to the user.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisReport {
    pub analyte: Analyte,
    pub sample: ColorSample,
    /// Concentration estimate; may be non-finite.
    pub value: f64,
    pub text: String,
}

impl AnalysisReport {
    pub fn new(analyte: Analyte, sample: ColorSample, value: f64) -> Self {
        Self {
            analyte,
            sample,
            value,
            text: format_report(analyte, sample, value),
        }
    }
}

/// Render the four result lines.
///
/// The value always uses two fixed decimals with `.` as separator. Infinities print as
/// `Infinity` and `-Infinity`. The unit suffix is skipped for unitless analytes and when the
/// value prints as `NaN`.
pub fn format_report(analyte: Analyte, sample: ColorSample, value: f64) -> String {
    let value_text = format_value(value);
    let mut text = format!(
        "R: {}\nG: {}\nB: {}\nResult: {}",
        sample.red, sample.green, sample.blue, value_text
    );

    if let Some(unit) = analyte.unit() {
        if value_text != "NaN" {
            text.push(' ');
            text.push_str(unit);
        }
    }

    text
}

fn format_value(value: f64) -> String {
    if value.is_infinite() {
        let sign = if value.is_sign_negative() { "-" } else { "" };
        format!("{sign}Infinity")
    } else {
        format!("{value:.2}")
    }
}
