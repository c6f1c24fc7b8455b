use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::average::ColorSample;
use crate::error::{AnalysisError, Result};

/// Chemical species the regression estimates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Analyte {
    #[serde(rename = "pH")]
    Ph,
    Glucose,
    Lactate,
}

impl Analyte {
    /// Selector order.
    pub const ALL: [Analyte; 3] = [Analyte::Ph, Analyte::Glucose, Analyte::Lactate];

    /// Display name, also the lookup key used by the selector.
    pub fn name(self) -> &'static str {
        match self {
            Analyte::Ph => "pH",
            Analyte::Glucose => "Glucose",
            Analyte::Lactate => "Lactate",
        }
    }

    /// Concentration unit appended to the result line, if any.
    pub fn unit(self) -> Option<&'static str> {
        match self {
            Analyte::Ph => None,
            Analyte::Glucose | Analyte::Lactate => Some("mM"),
        }
    }
}

impl fmt::Display for Analyte {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Analyte {
    type Err = AnalysisError;

    /// Exact, case-sensitive match on [`Analyte::name`].
    fn from_str(s: &str) -> Result<Self> {
        Analyte::ALL
            .into_iter()
            .find(|a| a.name() == s)
            .ok_or_else(|| AnalysisError::unknown_analyte(s))
    }
}

/// Regression mapping a color sample to a concentration estimate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Formula {
    /// `a0 * red^e1 + a2 * green^e3 + a4 * blue^e5`
    PowerLaw {
        a0: f64,
        e1: f64,
        a2: f64,
        e3: f64,
        a4: f64,
        e5: f64,
    },
    /// `(ln(1 + 0.299 R + 0.587 G + 0.114 B) - intercept) / slope`
    LogLuminance { slope: f64, intercept: f64 },
}

impl Formula {
    /// Build a power-law formula from its coefficient tuple `(a0, e1, a2, e3, a4, e5)`.
    pub const fn power_law(coefficients: [f64; 6]) -> Self {
        let [a0, e1, a2, e3, a4, e5] = coefficients;
        Formula::PowerLaw {
            a0,
            e1,
            a2,
            e3,
            a4,
            e5,
        }
    }

    /// Evaluate against a sample. Non-finite results are passed through unchanged.
    pub fn evaluate(&self, sample: ColorSample) -> f64 {
        let (r, g, b) = sample.channels_f64();
        match *self {
            Formula::PowerLaw {
                a0,
                e1,
                a2,
                e3,
                a4,
                e5,
            } => a0 * r.powf(e1) + a2 * g.powf(e3) + a4 * b.powf(e5),
            Formula::LogLuminance { slope, intercept } => {
                let luminance = (0.299 * r + 0.587 * g + 0.114 * b).ln_1p();
                (luminance - intercept) / slope
            }
        }
    }
}

/// One table entry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnalyteModel {
    pub analyte: Analyte,
    pub formula: Formula,
}

/// Immutable analyte → formula table, built once and passed by reference.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnalyteTable {
    models: Vec<AnalyteModel>,
}

impl AnalyteTable {
    /// Later entries for the same analyte replace earlier ones.
    pub fn new(models: impl IntoIterator<Item = AnalyteModel>) -> Self {
        let mut table = Self::default();
        for model in models {
            table.insert(model);
        }
        table
    }

    fn insert(&mut self, model: AnalyteModel) {
        match self.models.iter_mut().find(|m| m.analyte == model.analyte) {
            Some(existing) => *existing = model,
            None => self.models.push(model),
        }
    }

    /// Power-law coefficients shipped as defaults.
    ///
    /// These are calibration placeholders; real deployments load their own through settings.
    pub fn power_law_defaults() -> Self {
        Self::new([
            AnalyteModel {
                analyte: Analyte::Ph,
                formula: Formula::power_law([0.0125, 1.0, 0.0085, 1.0, 0.003, 1.0]),
            },
            AnalyteModel {
                analyte: Analyte::Glucose,
                formula: Formula::power_law([0.048, 1.2, -0.021, 1.1, 0.35, 0.5]),
            },
            AnalyteModel {
                analyte: Analyte::Lactate,
                formula: Formula::power_law([0.0031, 1.5, 0.0017, 1.4, -0.0009, 1.3]),
            },
        ])
    }

    /// Luminance calibration fitted for the paper test strips.
    pub fn log_luminance_calibration() -> Self {
        Self::new([
            AnalyteModel {
                analyte: Analyte::Ph,
                formula: Formula::LogLuminance {
                    slope: -0.33567,
                    intercept: 6.25133,
                },
            },
            AnalyteModel {
                analyte: Analyte::Glucose,
                formula: Formula::LogLuminance {
                    slope: -0.46851,
                    intercept: 5.02739,
                },
            },
            AnalyteModel {
                analyte: Analyte::Lactate,
                formula: Formula::LogLuminance {
                    slope: -0.06374,
                    intercept: 5.06541,
                },
            },
        ])
    }

    pub fn get(&self, analyte: Analyte) -> Option<&AnalyteModel> {
        self.models.iter().find(|m| m.analyte == analyte)
    }

    /// Look up by selector name.
    ///
    /// Names outside the enumerated set, and analytes missing from this table, are both
    /// [`AnalysisError::UnknownAnalyte`].
    pub fn lookup(&self, name: &str) -> Result<&AnalyteModel> {
        let analyte: Analyte = name.parse()?;
        self.get(analyte)
            .ok_or_else(|| AnalysisError::unknown_analyte(name))
    }

    pub fn len(&self) -> usize {
        self.models.len()
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }
}
