use std::fmt::{self, Display};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use log::warn;

use super::settings::DeviceSettings;

/// Why a settings document could not be loaded or saved.
#[derive(Debug)]
pub enum SettingsError {
    /// No document exists at the location.
    NotFound(PathBuf),
    /// The document exists but is not well-formed JSON for the record.
    Parse(serde_json::Error),
    /// Any other read or write failure.
    Io(io::Error),
}

impl Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::NotFound(path) => {
                write!(f, "settings file not found: {}", path.display())
            }
            SettingsError::Parse(e) => write!(f, "settings parse error: {}", e),
            SettingsError::Io(e) => write!(f, "settings IO error: {}", e),
        }
    }
}

impl std::error::Error for SettingsError {}

impl From<serde_json::Error> for SettingsError {
    fn from(err: serde_json::Error) -> Self {
        SettingsError::Parse(err)
    }
}

/// Loads and saves the device settings document at a fixed location.
#[derive(Debug, Clone)]
pub struct SettingsStore {
    path: PathBuf,
}

impl SettingsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `~/.config/camlink/settings.json` on Linux,
    /// `%APPDATA%\camlink\settings.json` on Windows, etc.
    pub fn default_location() -> io::Result<Self> {
        let proj = ProjectDirs::from("", "", "camlink")
            .ok_or_else(|| io::Error::new(io::ErrorKind::Other, "Unable to locate config dir"))?;
        let dir = proj.config_dir();
        fs::create_dir_all(dir)?;
        Ok(Self::new(dir.join("settings.json")))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and deserialize the document. Absent fields come back as
    /// empty strings, not errors.
    pub fn load(&self) -> Result<DeviceSettings, SettingsError> {
        let data = fs::read_to_string(&self.path).map_err(|e| {
            if e.kind() == io::ErrorKind::NotFound {
                SettingsError::NotFound(self.path.clone())
            } else {
                SettingsError::Io(e)
            }
        })?;
        let settings = serde_json::from_str(&data)?;
        Ok(settings)
    }

    /// Load, degrading to empty defaults instead of failing. A missing
    /// or unreadable settings file is not fatal at startup; the operator
    /// fills the fields in and retries.
    pub fn load_or_default(&self) -> DeviceSettings {
        match self.load() {
            Ok(settings) => settings,
            Err(e) => {
                warn!("Falling back to empty settings: {}", e);
                DeviceSettings::default()
            }
        }
    }

    /// Create or overwrite the document.
    pub fn save(&self, settings: &DeviceSettings) -> Result<(), SettingsError> {
        let file = fs::File::create(&self.path).map_err(SettingsError::Io)?;
        serde_json::to_writer_pretty(file, settings)?;
        Ok(())
    }
}
