//! Error types for the mapping updater
//!
//! Every failure is fatal to the run that hit it:
//! - Store operations (file -> JSON, JSON -> file)
//! - Structural validation of loaded documents
//! - Configuration loading

use std::path::PathBuf;

/// Errors reading or writing a data file
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// File could not be read
    #[error("io error reading {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File content is not valid JSON
    #[error("invalid JSON in {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Document could not be encoded
    #[error("failed to encode {path}: {source}")]
    Encode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// File could not be written
    #[error("io error writing {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Temporary file could not be moved over the target
    #[error("failed to replace {path}: {source}")]
    Persist {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl StoreError {
    /// Path of the file the error refers to
    #[must_use]
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::Read { path, .. }
            | Self::Parse { path, .. }
            | Self::Encode { path, .. }
            | Self::Write { path, .. }
            | Self::Persist { path, .. } => path,
        }
    }
}

/// Which data file a document came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    /// Control catalog (`controls` array)
    Catalog,
    /// Traceability links (`links` array)
    Traceability,
}

impl std::fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Catalog => write!(f, "control catalog"),
            Self::Traceability => write!(f, "traceability"),
        }
    }
}

/// Document does not have the shape the updater rewrites
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    /// One or more structural violations
    #[error("{kind} document failed validation: {}", .violations.join("; "))]
    Invalid {
        kind: DocumentKind,
        violations: Vec<String>,
    },

    /// Built-in schema failed to compile
    #[error("{kind} schema is invalid: {message}")]
    BadSchema { kind: DocumentKind, message: String },
}

impl SchemaError {
    /// Create an invalid-document error
    pub fn invalid(kind: DocumentKind, violations: Vec<String>) -> Self {
        Self::Invalid { kind, violations }
    }

    /// Violations reported for an invalid document
    #[must_use]
    pub fn violations(&self) -> &[String] {
        match self {
            Self::Invalid { violations, .. } => violations,
            Self::BadSchema { .. } => &[],
        }
    }
}

/// Errors loading updater configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("io error reading config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid TOML for [`crate::UpdaterConfig`]
    #[error("invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Combined mapping updater error
#[derive(Debug, thiserror::Error)]
pub enum MappingError {
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    #[error("schema error: {0}")]
    Schema(#[from] SchemaError),

    #[error("config error: {0}")]
    Config(#[from] ConfigError),
}

/// Result type alias for mapping operations
pub type MappingResult<T> = Result<T, MappingError>;
