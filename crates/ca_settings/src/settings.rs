use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use ca_analysis::{AnalyteTable, Averaging, DisplayMapping};

use crate::defaults::*;

/// Which analyte table the pipeline runs with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormulaSet {
    /// Built-in power-law coefficients.
    PowerLaw,
    /// Built-in log-luminance calibration.
    LogLuminance,
    /// The `analytes` table from this file.
    Custom,
}

/// Application settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Vertical offset of the photo inside the selection surface (display pixels).
    #[serde(default = "default_margin_height")]
    pub margin_height: i32,

    // Working resolution
    #[serde(default = "default_working_width")]
    pub working_width: u32,
    #[serde(default = "default_working_height")]
    pub working_height: u32,

    #[serde(default = "default_averaging")]
    pub averaging: Averaging,

    #[serde(default = "default_formula_set")]
    pub formula_set: FormulaSet,
    /// Only used with `FormulaSet::Custom`.
    #[serde(default = "default_analytes")]
    pub analytes: AnalyteTable,

    // Selection outline
    #[serde(default = "default_stroke_color")]
    pub stroke_color: (u8, u8, u8),
    #[serde(default = "default_stroke_width")]
    pub stroke_width: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            margin_height: default_margin_height(),
            working_width: default_working_width(),
            working_height: default_working_height(),
            averaging: default_averaging(),
            formula_set: default_formula_set(),
            analytes: default_analytes(),
            stroke_color: default_stroke_color(),
            stroke_width: default_stroke_width(),
        }
    }
}

impl Settings {
    pub fn default_path() -> PathBuf {
        default_settings_dir().join("settings.json")
    }

    /// Load settings from `path`.
    ///
    /// Falls back to defaults if the file is missing or invalid.
    pub fn load_from(path: &Path) -> Self {
        match Self::try_load_from(path) {
            Ok(settings) => settings,
            Err(e) => {
                if path.exists() {
                    log::warn!("Ignoring settings at {}: {e:#}", path.display());
                } else {
                    log::debug!("No settings at {}, using defaults", path.display());
                }
                Self::default()
            }
        }
    }

    /// Load and validate settings from `path`.
    pub fn try_load_from(path: &Path) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path)?;
        let settings: Settings = serde_json::from_str(&content)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Save settings to `path`.
    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(
            self.working_width > 0 && self.working_height > 0,
            "working resolution must be non-zero, got {}x{}",
            self.working_width,
            self.working_height
        );
        anyhow::ensure!(
            self.stroke_width >= 0.0,
            "stroke width must be non-negative, got {}",
            self.stroke_width
        );
        if self.formula_set == FormulaSet::Custom {
            anyhow::ensure!(
                !self.analytes.is_empty(),
                "custom formula set has no analytes"
            );
        }
        Ok(())
    }

    /// Analyte table selected by `formula_set`.
    pub fn analyte_table(&self) -> AnalyteTable {
        match self.formula_set {
            FormulaSet::PowerLaw => AnalyteTable::power_law_defaults(),
            FormulaSet::LogLuminance => AnalyteTable::log_luminance_calibration(),
            FormulaSet::Custom => self.analytes.clone(),
        }
    }

    pub fn display_mapping(&self) -> DisplayMapping {
        DisplayMapping::new(self.margin_height)
    }

    pub fn working_resolution(&self) -> (u32, u32) {
        (self.working_width, self.working_height)
    }
}
