//! Straight-line rewrite of the catalog and traceability files
//!
//! The two halves share nothing but the static tables. Each one loads its
//! file, validates it, mutates it in memory and writes it back; any failure
//! happens before that file is written.

use crate::catalog::{annotate_controls, AnnotationReport, CatalogDocument};
use crate::config::UpdaterConfig;
use crate::error::MappingResult;
use crate::store::{load_json, save_json};
use crate::summary::CompletionReport;
use crate::traceability::{regenerate_links, LinkReport, TraceabilityDocument};
use chrono::NaiveDate;
use serde_json::Value;
use std::path::Path;

/// Which halves of the pipeline to run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stages {
    /// Annotate the control catalog
    pub controls: bool,
    /// Regenerate traceability links
    pub links: bool,
}

impl Stages {
    /// Both halves
    pub const ALL: Self = Self {
        controls: true,
        links: true,
    };
    /// Control catalog only
    pub const CONTROLS: Self = Self {
        controls: true,
        links: false,
    };
    /// Traceability only
    pub const LINKS: Self = Self {
        controls: false,
        links: true,
    };
}

/// Reports from one pipeline run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunReport {
    /// Catalog half outcome
    pub controls: Option<AnnotationReport>,
    /// Traceability half outcome
    pub links: Option<LinkReport>,
}

impl RunReport {
    /// Counts for the closing summary block
    #[must_use]
    pub fn completion(&self) -> CompletionReport {
        CompletionReport {
            controls_updated: self.controls.as_ref().map(|r| r.updated),
            links_created: self.links.map(|r| r.generated),
        }
    }
}

/// Rewrites the data files named by an [`UpdaterConfig`]
#[derive(Debug, Clone)]
pub struct MappingUpdater {
    config: UpdaterConfig,
    today: NaiveDate,
}

impl MappingUpdater {
    /// Updater stamping files with today's local date
    #[must_use]
    pub fn new(config: UpdaterConfig) -> Self {
        Self {
            config,
            today: chrono::Local::now().date_naive(),
        }
    }

    /// Override the date written to `lastUpdated`
    #[inline]
    #[must_use]
    pub fn with_date(mut self, today: NaiveDate) -> Self {
        self.today = today;
        self
    }

    /// Active configuration
    #[inline]
    #[must_use]
    pub fn config(&self) -> &UpdaterConfig {
        &self.config
    }

    /// Annotate the control catalog and write it back
    ///
    /// # Errors
    /// Fails if the catalog cannot be read, parsed, validated or written.
    pub fn update_controls(&self) -> MappingResult<AnnotationReport> {
        let path = self.config.controls_path();
        tracing::info!(path = %path.display(), "updating control catalog");

        let mut catalog = CatalogDocument::from_value(load_json(&path)?)?;
        let report = annotate_controls(&mut catalog);
        catalog.set_last_updated(self.today);

        self.persist(&path, catalog.into_value())?;
        Ok(report)
    }

    /// Regenerate mitigation links and write the traceability file back
    ///
    /// # Errors
    /// Fails if the traceability file cannot be read, parsed, validated or
    /// written.
    pub fn update_traceability(&self) -> MappingResult<LinkReport> {
        let path = self.config.traceability_path();
        tracing::info!(path = %path.display(), "updating traceability links");

        let mut doc = TraceabilityDocument::from_value(load_json(&path)?)?;
        let report = regenerate_links(&mut doc);
        doc.set_last_updated(self.today);
        doc.set_version(&self.config.traceability_version);

        self.persist(&path, doc.into_value())?;
        Ok(report)
    }

    /// Run the selected halves, catalog first
    ///
    /// # Errors
    /// Stops at the first failing half; a catalog written before a
    /// traceability failure stays written.
    pub fn run(&self, stages: Stages) -> MappingResult<RunReport> {
        let mut report = RunReport::default();
        if stages.controls {
            report.controls = Some(self.update_controls()?);
        }
        if stages.links {
            report.links = Some(self.update_traceability()?);
        }
        Ok(report)
    }

    fn persist(&self, path: &Path, value: Value) -> MappingResult<()> {
        if self.config.dry_run {
            tracing::info!(path = %path.display(), "dry run, not writing");
            return Ok(());
        }
        save_json(path, &value, self.config.write_mode())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn completion_maps_counts() {
        let report = RunReport {
            controls: Some(AnnotationReport {
                updated: 7,
                ..AnnotationReport::default()
            }),
            links: Some(LinkReport {
                removed: 1,
                retained: 2,
                generated: 101,
            }),
        };
        let completion = report.completion();
        assert_eq!(completion.controls_updated, Some(7));
        assert_eq!(completion.links_created, Some(101));
        assert_eq!(RunReport::default().completion(), CompletionReport::default());
    }

    #[test]
    fn missing_data_dir_fails_before_writing() {
        let dir = tempfile::tempdir().unwrap();
        let updater = MappingUpdater::new(UpdaterConfig::new().with_data_dir(dir.path()));

        assert!(updater.run(Stages::ALL).is_err());
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }
}
