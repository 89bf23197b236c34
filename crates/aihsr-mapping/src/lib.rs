//! AIHSR control mappings
//!
//! Rewrites the web app's control catalog and traceability data from the
//! compiled-in AIHSR assignment tables:
//! - [`catalog`]: stamps `phases` / `techTypes` on each control by subcategory
//! - [`traceability`]: rebuilds every `mitigation` link from the risk table
//! - [`summary`]: renders the tables and run counts for the operator
//!
//! # Example
//!
//! ```rust,ignore
//! use aihsr_mapping::{MappingUpdater, Stages, UpdaterConfig};
//!
//! let config = UpdaterConfig::new().with_data_dir("webapp/static/data");
//! let report = MappingUpdater::new(config).run(Stages::ALL)?;
//! println!("{}", report.completion());
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

pub mod catalog;
pub mod config;
pub mod error;
pub mod pipeline;
pub mod schema;
pub mod store;
pub mod summary;
pub mod tables;
pub mod traceability;

// Re-exports
pub use catalog::{annotate_controls, AnnotationReport, CatalogDocument, ControlAnnotator, ControlRecord};
pub use config::UpdaterConfig;
pub use error::{ConfigError, DocumentKind, MappingError, MappingResult, SchemaError, StoreError};
pub use pipeline::{MappingUpdater, RunReport, Stages};
pub use store::WriteMode;
pub use summary::{CompletionReport, MappingSummary};
pub use traceability::{
    generate_mitigation_links, regenerate_links, EntityRef, Link, LinkReport, TraceabilityDocument,
};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
