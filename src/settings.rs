//! Settings infrastructure for au3lsp.
//!
//! Settings live in an `au3lsp.toml` file that is discovered from the
//! workspace root. Every key is optional:
//!
//! ```toml
//! [hover]
//! enabled = true
//! show_requires = false
//!
//! [completion]
//! enabled = true
//!
//! [signature_help]
//! enabled = true
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

/// Name of the settings file searched for in the workspace.
pub const SETTINGS_FILE: &str = "au3lsp.toml";

/// Root settings structure loaded from au3lsp.toml.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub hover: HoverSettings,
    pub completion: FeatureSettings,
    pub signature_help: FeatureSettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HoverSettings {
    pub enabled: bool,
    /// Append the `#include` line a function requires to its hover.
    pub show_requires: bool,
}

impl Default for HoverSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            show_requires: false,
        }
    }
}

/// On/off switch for a single LSP feature.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FeatureSettings {
    pub enabled: bool,
}

impl Default for FeatureSettings {
    fn default() -> Self {
        Self { enabled: true }
    }
}

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Read and parse a settings file.
pub fn try_load_settings(path: &Path) -> Result<Settings, SettingsError> {
    let content = std::fs::read_to_string(path).map_err(|source| SettingsError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&content).map_err(|source| SettingsError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Load settings from a file.
///
/// Returns default settings if the file doesn't exist or can't be parsed.
pub fn load_settings(path: &Path) -> Settings {
    match try_load_settings(path) {
        Ok(settings) => settings,
        Err(SettingsError::Read { source, .. })
            if source.kind() == std::io::ErrorKind::NotFound =>
        {
            Settings::default()
        }
        Err(e) => {
            tracing::warn!("{e}; using default settings");
            Settings::default()
        }
    }
}

/// Discover au3lsp.toml by searching up the directory tree, then direct children.
///
/// Returns `(settings, settings_dir)` where `settings_dir` is the directory
/// containing the found file. If not found, returns `(Settings::default(), start_dir)`.
pub fn discover_settings(start_dir: &Path) -> (Settings, PathBuf) {
    for dir in start_dir.ancestors() {
        let candidate = dir.join(SETTINGS_FILE);
        if candidate.is_file() {
            tracing::debug!(path = %candidate.display(), "found settings");
            return (load_settings(&candidate), dir.to_path_buf());
        }
    }

    if let Ok(entries) = std::fs::read_dir(start_dir) {
        for entry in entries.flatten() {
            if entry.file_type().map(|ft| ft.is_dir()).unwrap_or(false) {
                let candidate = entry.path().join(SETTINGS_FILE);
                if candidate.is_file() {
                    tracing::debug!(path = %candidate.display(), "found settings");
                    return (load_settings(&candidate), entry.path());
                }
            }
        }
    }

    (Settings::default(), start_dir.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Create a unique temp directory for test isolation.
    fn make_test_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir()
            .join("au3lsp-test")
            .join(name)
            .join(format!("{}", std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    fn cleanup_test_dir(dir: &Path) {
        let _ = std::fs::remove_dir_all(dir);
    }

    #[test]
    fn defaults_enable_everything() {
        let settings = Settings::default();
        assert!(settings.hover.enabled);
        assert!(!settings.hover.show_requires);
        assert!(settings.completion.enabled);
        assert!(settings.signature_help.enabled);
    }

    #[test]
    fn partial_file_keeps_defaults() {
        let settings: Settings = toml::from_str("[hover]\nshow_requires = true\n").unwrap();
        assert!(settings.hover.enabled);
        assert!(settings.hover.show_requires);
        assert!(settings.completion.enabled);
    }

    #[test]
    fn features_can_be_disabled() {
        let settings: Settings =
            toml::from_str("[completion]\nenabled = false\n[signature_help]\nenabled = false\n")
                .unwrap();
        assert!(!settings.completion.enabled);
        assert!(!settings.signature_help.enabled);
        assert!(settings.hover.enabled);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(toml::from_str::<Settings>("[hover]\ncolour = 1\n").is_err());
    }

    #[test]
    fn missing_file_is_default() {
        let dir = make_test_dir("missing");
        let path = dir.join(SETTINGS_FILE);
        assert!(matches!(
            try_load_settings(&path),
            Err(SettingsError::Read { .. })
        ));
        assert_eq!(load_settings(&path), Settings::default());
        cleanup_test_dir(&dir);
    }

    #[test]
    fn malformed_file_is_default() {
        let dir = make_test_dir("malformed");
        let path = dir.join(SETTINGS_FILE);
        std::fs::write(&path, "[hover\nenabled = ").unwrap();
        assert!(matches!(
            try_load_settings(&path),
            Err(SettingsError::Parse { .. })
        ));
        assert_eq!(load_settings(&path), Settings::default());
        cleanup_test_dir(&dir);
    }

    #[test]
    fn discover_settings_in_parent_dir() {
        let parent = make_test_dir("discover-parent");
        let child = parent.join("scripts");
        std::fs::create_dir_all(&child).unwrap();
        std::fs::write(parent.join(SETTINGS_FILE), "[completion]\nenabled = false\n").unwrap();

        let (settings, settings_dir) = discover_settings(&child);
        assert_eq!(settings_dir, parent);
        assert!(!settings.completion.enabled);

        cleanup_test_dir(&parent);
    }

    #[test]
    fn discover_settings_in_child_dir() {
        let parent = make_test_dir("discover-child");
        let child = parent.join("config");
        std::fs::create_dir_all(&child).unwrap();
        std::fs::write(child.join(SETTINGS_FILE), "[hover]\nshow_requires = true\n").unwrap();

        let (settings, settings_dir) = discover_settings(&parent);
        assert_eq!(settings_dir, child);
        assert!(settings.hover.show_requires);

        cleanup_test_dir(&parent);
    }

    #[test]
    fn discover_settings_not_found() {
        let dir = make_test_dir("discover-none");
        let (settings, settings_dir) = discover_settings(&dir);
        assert_eq!(settings_dir, dir);
        assert_eq!(settings, Settings::default());
        cleanup_test_dir(&dir);
    }
}
