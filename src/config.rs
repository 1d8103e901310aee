//! Persisted per-user settings.
//!
//! The store holds a single JSON object in the user's home directory. Only
//! `lastPath` is interpreted; any other key is carried along untouched so that a
//! save never drops data written by something else.

use crate::{
    constants::CONFIG_FILENAME,
    error::{Error, Result},
    ioutils,
};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Configuration {
    /// Root directory chosen on the previous run.
    #[serde(rename = "lastPath", default, skip_serializing_if = "Option::is_none")]
    pub last_path: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Configuration {
    pub fn with_last_path(mut self, last_path: impl Into<String>) -> Self {
        self.last_path = Some(last_path.into());
        self
    }
}

/// Reads and writes the configuration file at a fixed location.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    /// Store located in the home directory, or the working directory when no home is known.
    pub fn from_home() -> Self {
        let base = dirs::home_dir().unwrap_or_else(|| {
            log::warn!("Home directory is unknown, keeping settings in the working directory");
            PathBuf::from(".")
        });
        Self::new(base.join(CONFIG_FILENAME))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the persisted record.
    ///
    /// # Returns
    /// * `Ok(Configuration::default())` - when the file does not exist
    /// * `Err(Error)` - when the file exists but cannot be read or parsed
    pub fn load(&self) -> Result<Configuration> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::debug!("No config file at {}", self.path.display());
                return Ok(Configuration::default());
            }
            Err(e) => return Err(Error::IoError(e)),
        };

        serde_json::from_str(&content).map_err(|e| Error::ConfigParseError {
            path: self.path.display().to_string(),
            e,
        })
    }

    /// Merges the record into whatever the file currently holds and rewrites it.
    pub fn save(&self, config: &Configuration) -> Result<()> {
        let mut merged = self.read_object();
        if let Value::Object(fields) = serde_json::to_value(config).map_err(|e| {
            Error::ConfigParseError { path: self.path.display().to_string(), e }
        })? {
            merged.extend(fields);
        }

        let content = serde_json::to_string_pretty(&Value::Object(merged)).map_err(|e| {
            Error::ConfigParseError { path: self.path.display().to_string(), e }
        })?;
        ioutils::write_file(&content, &self.path)?;
        log::debug!("Saved config to {}", self.path.display());
        Ok(())
    }

    /// Current file contents as a JSON object; anything unusable counts as empty.
    fn read_object(&self) -> Map<String, Value> {
        std::fs::read_to_string(&self.path)
            .ok()
            .and_then(|content| serde_json::from_str::<Value>(&content).ok())
            .and_then(|value| match value {
                Value::Object(map) => Some(map),
                _ => None,
            })
            .unwrap_or_default()
    }
}
