use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::landmarking::domain::landmarker_options::FaceLandmarkerOptions;
use crate::shared::constants::{
    DEFAULT_AXIS_BIAS, DEFAULT_DISPLAY_WIDTH, SETTINGS_DIR_NAME, SETTINGS_FILE_NAME,
};

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("failed to read settings {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid settings in {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to write settings {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("axis bias must be finite, got {0}")]
    InvalidBias(f64),
    #[error("display width must be positive")]
    InvalidDisplayWidth,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub axis_bias: f64,
    pub display_width: u32,
    /// Log progress every N frames.
    pub progress_throttle: usize,
    pub landmarker: FaceLandmarkerOptions,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            axis_bias: DEFAULT_AXIS_BIAS,
            display_width: DEFAULT_DISPLAY_WIDTH,
            progress_throttle: 30,
            landmarker: FaceLandmarkerOptions::default(),
        }
    }
}

impl Settings {
    /// Platform config location, e.g. `~/.config/GazeQuadrant/settings.json`.
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(SETTINGS_DIR_NAME).join(SETTINGS_FILE_NAME))
    }

    /// Loads from the platform config location, falling back to defaults
    /// when the file is absent or unreadable.
    pub fn load() -> Self {
        match Self::config_path() {
            Some(path) if path.exists() => Self::load_from(&path).unwrap_or_else(|e| {
                log::warn!("{e}; using default settings");
                Self::default()
            }),
            _ => Self::default(),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self, SettingsError> {
        let json = fs::read_to_string(path).map_err(|e| SettingsError::Read {
            path: path.to_path_buf(),
            source: e,
        })?;
        let settings: Self = serde_json::from_str(&json).map_err(|e| SettingsError::Parse {
            path: path.to_path_buf(),
            source: e,
        })?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), SettingsError> {
        let write_err = |e| SettingsError::Write {
            path: path.to_path_buf(),
            source: e,
        };
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(write_err)?;
        }
        let json = serde_json::to_string_pretty(self).map_err(|e| SettingsError::Parse {
            path: path.to_path_buf(),
            source: e,
        })?;
        fs::write(path, json).map_err(write_err)
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        if !self.axis_bias.is_finite() {
            return Err(SettingsError::InvalidBias(self.axis_bias));
        }
        if self.display_width == 0 {
            return Err(SettingsError::InvalidDisplayWidth);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::landmarking::domain::landmarker_options::Delegate;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let s = Settings::default();
        assert_eq!(s.axis_bias, 0.2);
        assert_eq!(s.display_width, 480);
        assert_eq!(s.progress_throttle, 30);
        assert!(s.validate().is_ok());
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("nested").join("settings.json");
        let mut s = Settings::default();
        s.axis_bias = 0.15;
        s.landmarker.delegate = Delegate::Cpu;
        s.save_to(&path).unwrap();

        let loaded = Settings::load_from(&path).unwrap();
        assert_eq!(loaded, s);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("settings.json");
        fs::write(&path, r#"{"display_width": 640}"#).unwrap();

        let loaded = Settings::load_from(&path).unwrap();
        assert_eq!(loaded.display_width, 640);
        assert_eq!(loaded.axis_bias, 0.2);
        assert_eq!(loaded.landmarker, FaceLandmarkerOptions::default());
    }

    #[test]
    fn test_invalid_json_is_parse_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("settings.json");
        fs::write(&path, "not json").unwrap();
        assert!(matches!(
            Settings::load_from(&path),
            Err(SettingsError::Parse { .. })
        ));
    }

    #[test]
    fn test_missing_file_is_read_error() {
        let tmp = TempDir::new().unwrap();
        assert!(matches!(
            Settings::load_from(&tmp.path().join("absent.json")),
            Err(SettingsError::Read { .. })
        ));
    }

    #[test]
    fn test_zero_display_width_rejected() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("settings.json");
        fs::write(&path, r#"{"display_width": 0}"#).unwrap();
        assert!(matches!(
            Settings::load_from(&path),
            Err(SettingsError::InvalidDisplayWidth)
        ));
    }
}
