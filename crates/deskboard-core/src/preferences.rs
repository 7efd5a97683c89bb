//! User preferences persistence
//!
//! The only state that survives a restart: the color-scheme flag, stored in
//! `<state_dir>/deskboard-preferences.json`, read at startup and written on
//! toggle.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

const PREFERENCES_FILE: &str = "deskboard-preferences.json";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    #[default]
    Dark,
    Light,
}

impl ColorScheme {
    pub fn toggled(self) -> Self {
        match self {
            ColorScheme::Dark => ColorScheme::Light,
            ColorScheme::Light => ColorScheme::Dark,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    pub color_scheme: ColorScheme,
}

impl Preferences {
    /// Load from `<state_dir>/deskboard-preferences.json`.
    /// Returns defaults on any I/O or parse error (graceful degradation).
    pub fn load(state_dir: &Path) -> Self {
        let path = state_dir.join(PREFERENCES_FILE);
        match std::fs::read_to_string(&path) {
            Ok(content) => serde_json::from_str(&content).unwrap_or_default(),
            Err(_) => Self::default(),
        }
    }

    /// Persist to `<state_dir>/deskboard-preferences.json`.
    pub fn save(&self, state_dir: &Path) -> Result<()> {
        std::fs::create_dir_all(state_dir)
            .context("Failed to create state directory for preferences")?;
        let path = state_dir.join(PREFERENCES_FILE);
        let content =
            serde_json::to_string_pretty(self).context("Failed to serialize preferences")?;
        std::fs::write(&path, content)
            .with_context(|| format!("Failed to write preferences to {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let prefs = Preferences::load(dir.path());
        assert_eq!(prefs.color_scheme, ColorScheme::Dark);
    }

    #[test]
    fn corrupt_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(PREFERENCES_FILE), "{not json").unwrap();
        assert_eq!(Preferences::load(dir.path()), Preferences::default());
    }

    #[test]
    fn toggled_flag_survives_a_reload() {
        let dir = tempfile::tempdir().unwrap();
        let mut prefs = Preferences::load(dir.path());
        prefs.color_scheme = prefs.color_scheme.toggled();
        prefs.save(dir.path()).unwrap();

        // a fresh "page load"
        let reloaded = Preferences::load(dir.path());
        assert_eq!(reloaded.color_scheme, ColorScheme::Light);
    }
}
