use std::path::{Path, PathBuf};

use crate::Settings;

/// Resolves where settings live and loads them once per run.
#[derive(Debug, Clone)]
pub struct ConfigManager {
    path: PathBuf,
    settings: Settings,
}

impl ConfigManager {
    /// Load from `path`, or from [`Settings::default_path`] when none is given.
    ///
    /// A missing or invalid file yields defaults, as [`Settings::load_from`] does.
    pub fn open(path: Option<&Path>) -> Self {
        let path = path.map_or_else(Settings::default_path, Path::to_path_buf);
        let settings = Settings::load_from(&path);
        log::debug!(
            "Settings from {}: margin {}, {:?}",
            path.display(),
            settings.margin_height,
            settings.formula_set
        );
        Self { path, settings }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn into_settings(self) -> Settings {
        self.settings
    }
}
