use std::{
    collections::BTreeMap,
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use serde_json::Value;
use tracing::warn;

use crate::models::{error::ThemeError, theme::Theme};

pub const THEME_KEY: &str = "theme";

/// Small JSON key-value file holding the colour theme preference.
#[derive(Debug, Clone)]
pub struct ThemeStore {
    path: PathBuf,
}

impl ThemeStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    fn read_map(&self) -> Result<BTreeMap<String, Value>, ThemeError> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => Ok(serde_json::from_str(&contents)?),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(e) => Err(e.into()),
        }
    }

    /// Saved theme, or light when nothing usable is stored.
    pub fn load(&self) -> Theme {
        let stored = self
            .read_map()
            .map(|mut map| map.remove(THEME_KEY))
            .unwrap_or_else(|e| {
                warn!(path = %self.path.display(), error = %e, "unreadable theme store");
                None
            });
        stored
            .and_then(|value| serde_json::from_value(value).ok())
            .unwrap_or_default()
    }

    /// Writes `theme` under the fixed key, keeping any other keys in the file.
    pub fn save(&self, theme: Theme) -> Result<(), ThemeError> {
        let mut map = self.read_map().unwrap_or_default();
        map.insert(THEME_KEY.to_string(), serde_json::to_value(theme)?);
        fs::write(&self.path, serde_json::to_string_pretty(&map)?)?;
        Ok(())
    }
}
