//! User settings stored as settings.json in the app data directory

use crate::constants::ICON_SET_DIR;
use crate::location::Location;
use crate::navigation::MapsProvider;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    #[default]
    Icon,
    Location,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // Window geometry
    pub window_x: Option<f32>,
    pub window_y: Option<f32>,
    pub window_w: Option<f32>,
    pub window_h: Option<f32>,

    // Navigation
    pub maps_provider: MapsProvider,

    // Export
    pub export_dir: Option<String>,
    pub include_extended_sizes: bool,

    // View
    pub last_tab: Tab,
    pub location: Location,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            window_x: None,
            window_y: None,
            window_w: None,
            window_h: None,
            maps_provider: MapsProvider::default(),
            export_dir: None,
            include_extended_sizes: true,
            last_tab: Tab::default(),
            location: Location::default(),
        }
    }
}

impl Settings {
    pub fn load(data_dir: &Path) -> Self {
        let path = data_dir.join("settings.json");
        match std::fs::read_to_string(&path) {
            Ok(s) => match serde_json::from_str(&s) {
                Ok(settings) => {
                    debug!(path = %path.display(), "Settings loaded");
                    settings
                }
                Err(e) => {
                    warn!(error = %e, "Failed to parse settings, using defaults");
                    Self::default()
                }
            },
            Err(_) => {
                debug!("No settings file found, using defaults");
                Self::default()
            }
        }
    }

    pub fn save(&self, data_dir: &Path) {
        let path = data_dir.join("settings.json");
        match serde_json::to_string_pretty(self) {
            Ok(json) => {
                if let Err(e) = std::fs::write(&path, json) {
                    warn!(error = %e, "Failed to save settings");
                } else {
                    debug!(path = %path.display(), "Settings saved");
                }
            }
            Err(e) => warn!(error = %e, "Failed to serialize settings"),
        }
    }

    pub fn export_dir_or_default(&self, data_dir: &Path) -> PathBuf {
        self.export_dir
            .as_ref()
            .map(PathBuf::from)
            .unwrap_or_else(|| data_dir.join(ICON_SET_DIR))
    }

    /// Whether an export writes the extended sizes; `--core-sizes-only` wins.
    pub fn export_extended_sizes(&self, core_sizes_only: bool) -> bool {
        self.include_extended_sizes && !core_sizes_only
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        assert_eq!(Settings::load(dir.path()), Settings::default());
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        std::fs::write(
            dir.path().join("settings.json"),
            r#"{"maps_provider":"google","last_tab":"location"}"#,
        )
        .expect("write");
        let settings = Settings::load(dir.path());
        assert_eq!(settings.maps_provider, MapsProvider::Google);
        assert_eq!(settings.last_tab, Tab::Location);
        assert!(settings.include_extended_sizes);
        assert_eq!(settings.location.name, "Central Park");
    }

    #[test]
    fn core_sizes_only_overrides_the_setting() {
        let extended = Settings::default();
        assert!(extended.export_extended_sizes(false));
        assert!(!extended.export_extended_sizes(true));

        let core = Settings { include_extended_sizes: false, ..Settings::default() };
        assert!(!core.export_extended_sizes(false));
        assert!(!core.export_extended_sizes(true));
    }

    #[test]
    fn corrupt_file_gives_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        std::fs::write(dir.path().join("settings.json"), "{not json").expect("write");
        assert_eq!(Settings::load(dir.path()), Settings::default());
    }

    #[test]
    fn save_then_load() {
        let dir = tempfile::tempdir().expect("tempdir");
        let settings = Settings {
            window_w: Some(900.0),
            export_dir: Some("/tmp/icons".into()),
            location: Location::new("Zoo", "Berlin", 52.508, 13.3376),
            ..Settings::default()
        };
        settings.save(dir.path());
        assert_eq!(Settings::load(dir.path()), settings);
    }

    #[test]
    fn export_dir_falls_back_to_icon_set() {
        let data = Path::new("/data");
        assert_eq!(
            Settings::default().export_dir_or_default(data),
            PathBuf::from("/data/AppIcon.appiconset")
        );
    }
}
