//! Updater configuration
//!
//! Defaults point at the web app's `static/data` directory. A TOML file can
//! override any field; command-line flags are applied on top by the binary.

use crate::error::ConfigError;
use crate::store::WriteMode;
use crate::traceability::TRACEABILITY_VERSION;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default data directory, relative to the web app root
pub const DEFAULT_DATA_DIR: &str = "static/data";
/// Default control catalog file name
pub const DEFAULT_CONTROLS_FILE: &str = "technical-controls.json";
/// Default traceability file name
pub const DEFAULT_TRACEABILITY_FILE: &str = "traceability.json";

/// Mapping updater configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct UpdaterConfig {
    /// Directory holding both data files
    pub data_dir: PathBuf,
    /// Control catalog file, relative to `data_dir` unless absolute
    pub controls_file: PathBuf,
    /// Traceability file, relative to `data_dir` unless absolute
    pub traceability_file: PathBuf,
    /// Value forced into the traceability `version` field
    pub traceability_version: String,
    /// Write through a temp file and rename
    pub atomic_writes: bool,
    /// Compute and report without writing
    pub dry_run: bool,
}

impl UpdaterConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Load from a TOML file; missing fields keep their defaults
    ///
    /// # Errors
    /// Returns [`ConfigError`] if the file cannot be read or parsed.
    pub fn from_toml_file(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// With data directory
    #[inline]
    #[must_use]
    pub fn with_data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.data_dir = dir.into();
        self
    }

    /// With control catalog file
    #[inline]
    #[must_use]
    pub fn with_controls_file(mut self, file: impl Into<PathBuf>) -> Self {
        self.controls_file = file.into();
        self
    }

    /// With traceability file
    #[inline]
    #[must_use]
    pub fn with_traceability_file(mut self, file: impl Into<PathBuf>) -> Self {
        self.traceability_file = file.into();
        self
    }

    /// With atomic writes on or off
    #[inline]
    #[must_use]
    pub fn with_atomic_writes(mut self, atomic: bool) -> Self {
        self.atomic_writes = atomic;
        self
    }

    /// With dry run on or off
    #[inline]
    #[must_use]
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Resolved control catalog path
    #[must_use]
    pub fn controls_path(&self) -> PathBuf {
        self.data_dir.join(&self.controls_file)
    }

    /// Resolved traceability path
    #[must_use]
    pub fn traceability_path(&self) -> PathBuf {
        self.data_dir.join(&self.traceability_file)
    }

    /// Write mode implied by `atomic_writes`
    #[inline]
    #[must_use]
    pub fn write_mode(&self) -> WriteMode {
        if self.atomic_writes {
            WriteMode::Atomic
        } else {
            WriteMode::InPlace
        }
    }
}

impl Default for UpdaterConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            controls_file: PathBuf::from(DEFAULT_CONTROLS_FILE),
            traceability_file: PathBuf::from(DEFAULT_TRACEABILITY_FILE),
            traceability_version: TRACEABILITY_VERSION.to_string(),
            atomic_writes: true,
            dry_run: false,
        }
    }
}
