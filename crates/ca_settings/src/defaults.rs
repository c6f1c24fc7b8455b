use std::path::PathBuf;

use ca_analysis::{AnalyteTable, Averaging, DisplayMapping};

use crate::settings::FormulaSet;

// Display-to-bitmap layout
pub fn default_margin_height() -> i32 {
    DisplayMapping::DEFAULT_MARGIN_HEIGHT
}

// Working resolution the capture is scaled to
pub fn default_working_width() -> u32 {
    720
}

pub fn default_working_height() -> u32 {
    970
}

// Pipeline defaults
pub fn default_averaging() -> Averaging {
    Averaging::Round
}

pub fn default_formula_set() -> FormulaSet {
    FormulaSet::PowerLaw
}

pub fn default_analytes() -> AnalyteTable {
    AnalyteTable::power_law_defaults()
}

// Selection outline
pub fn default_stroke_color() -> (u8, u8, u8) {
    (255, 0, 0)
}

pub fn default_stroke_width() -> f32 {
    5.0
}

// Settings file location
pub fn default_settings_dir() -> PathBuf {
    // Prefer a user home directory.
    if let Ok(home_dir) = std::env::var("HOME") {
        return PathBuf::from(home_dir).join(".chroma_assay");
    }
    if let Ok(home_dir) = std::env::var("USERPROFILE") {
        return PathBuf::from(home_dir).join(".chroma_assay");
    }

    // Last resort: cwd.
    std::env::current_dir()
        .unwrap_or_else(|_| PathBuf::from("."))
        .join(".chroma_assay")
}
