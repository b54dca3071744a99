//! Light/dark theme preference.
//!
//! The preference is process-wide UI state owned by the embedding
//! application; the computational core never reads it. Stores expose an
//! explicit init/read/write lifecycle instead of a global.

use log::warn;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::config::ThemeSettings;
use crate::error::{DashboardError, DashboardResult};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }
}

/// Persistence of the theme preference.
pub trait ThemeStore {
    /// Load the persisted preference (or the default) before first paint.
    fn init(&self) -> ThemeMode;

    /// Preference currently in effect.
    fn read(&self) -> ThemeMode;

    /// Change and persist the preference.
    fn write(&self, mode: ThemeMode) -> DashboardResult<()>;

    /// Flip between light and dark, returning the new mode.
    fn toggle(&self) -> DashboardResult<ThemeMode> {
        let next = self.read().toggled();
        self.write(next)?;
        Ok(next)
    }
}

/// Preference kept only for the lifetime of the process.
#[derive(Debug, Default)]
pub struct MemoryThemeStore {
    mode: RwLock<ThemeMode>,
}

impl MemoryThemeStore {
    pub fn new(mode: ThemeMode) -> Self {
        Self {
            mode: RwLock::new(mode),
        }
    }
}

impl ThemeStore for MemoryThemeStore {
    fn init(&self) -> ThemeMode {
        *self.mode.read()
    }

    fn read(&self) -> ThemeMode {
        *self.mode.read()
    }

    fn write(&self, mode: ThemeMode) -> DashboardResult<()> {
        *self.mode.write() = mode;
        Ok(())
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct ThemeFile {
    mode: ThemeMode,
}

/// Preference persisted as a small TOML file (`mode = "dark"`).
#[derive(Debug)]
pub struct FileThemeStore {
    path: PathBuf,
    mode: RwLock<ThemeMode>,
}

impl FileThemeStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            mode: RwLock::new(ThemeMode::default()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Option<ThemeMode> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return None,
            Err(e) => {
                warn!(
                    "Ignoring unreadable theme file {}: {}",
                    self.path.display(),
                    e
                );
                return None;
            }
        };
        match toml::from_str::<ThemeFile>(&content) {
            Ok(file) => Some(file.mode),
            Err(e) => {
                warn!(
                    "Ignoring malformed theme file {}: {}",
                    self.path.display(),
                    e
                );
                None
            }
        }
    }
}

impl ThemeStore for FileThemeStore {
    fn init(&self) -> ThemeMode {
        let mode = self.load().unwrap_or_default();
        *self.mode.write() = mode;
        mode
    }

    fn read(&self) -> ThemeMode {
        *self.mode.read()
    }

    fn write(&self, mode: ThemeMode) -> DashboardResult<()> {
        let content = toml::to_string(&ThemeFile { mode }).map_err(|e| {
            DashboardError::configuration(format!("Failed to encode theme preference: {}", e))
        })?;
        fs::write(&self.path, content).map_err(|e| {
            DashboardError::configuration(format!(
                "Failed to write theme file {}: {}",
                self.path.display(),
                e
            ))
        })?;
        *self.mode.write() = mode;
        Ok(())
    }
}

/// Store for the configured theme location; in-memory when none is set.
pub fn open_store(settings: &ThemeSettings) -> Box<dyn ThemeStore + Send + Sync> {
    match &settings.path {
        Some(path) => Box::new(FileThemeStore::new(path)),
        None => Box::new(MemoryThemeStore::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_memory_store_toggle() {
        let store = MemoryThemeStore::default();
        assert_eq!(store.init(), ThemeMode::Light);
        assert_eq!(store.toggle().unwrap(), ThemeMode::Dark);
        assert_eq!(store.read(), ThemeMode::Dark);
    }

    #[test]
    fn test_file_store_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("theme.toml");

        let store = FileThemeStore::new(&path);
        assert_eq!(store.init(), ThemeMode::Light);
        store.write(ThemeMode::Dark).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("mode = \"dark\""));

        let reopened = FileThemeStore::new(&path);
        assert_eq!(reopened.read(), ThemeMode::Light);
        assert_eq!(reopened.init(), ThemeMode::Dark);
    }

    #[test]
    fn test_file_store_malformed_file_falls_back() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("theme.toml");
        fs::write(&path, "mode = \"sepia\"").unwrap();

        let store = FileThemeStore::new(&path);
        assert_eq!(store.init(), ThemeMode::Light);
    }

    #[test]
    fn test_file_store_unreadable_path_falls_back() {
        let dir = TempDir::new().unwrap();
        // A directory exists at the path but cannot be read as a file
        let store = FileThemeStore::new(dir.path());
        assert_eq!(store.init(), ThemeMode::Light);
        assert_eq!(store.read(), ThemeMode::Light);
    }

    #[test]
    fn test_open_store_follows_settings() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("theme.toml");
        fs::write(&path, "mode = \"dark\"\n").unwrap();

        let store = open_store(&ThemeSettings { path: Some(path) });
        assert_eq!(store.init(), ThemeMode::Dark);

        let store = open_store(&ThemeSettings::default());
        assert_eq!(store.init(), ThemeMode::Light);
    }

    #[test]
    fn test_file_store_write_failure() {
        let dir = TempDir::new().unwrap();
        let store = FileThemeStore::new(dir.path().join("missing").join("theme.toml"));
        assert!(matches!(
            store.write(ThemeMode::Dark),
            Err(DashboardError::Configuration { .. })
        ));
        assert_eq!(store.read(), ThemeMode::Light);
    }
}
