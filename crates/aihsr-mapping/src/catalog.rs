//! Control catalog document and the control annotator
//!
//! The catalog is held as raw JSON so that every field the annotator does not
//! own survives a rewrite untouched, in its original key order. Only
//! `phases`, `techTypes` and the top-level `lastUpdated` are ever written.

use crate::error::{DocumentKind, SchemaError};
use crate::schema;
use crate::tables::{MappingTable, SUBCATEGORY_PHASES, SUBCATEGORY_TECH_TYPES};
use chrono::NaiveDate;
use serde_json::{Map, Value};

const CONTROLS_KEY: &str = "controls";
const SUBCATEGORY_KEY: &str = "subcategoryId";
const PHASES_KEY: &str = "phases";
const TECH_TYPES_KEY: &str = "techTypes";
pub(crate) const LAST_UPDATED_KEY: &str = "lastUpdated";

/// Single control record
#[derive(Debug, Clone, PartialEq)]
pub struct ControlRecord(Map<String, Value>);

impl ControlRecord {
    /// Wrap a JSON object
    #[inline]
    #[must_use]
    pub fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    /// Subcategory key, if present and non-empty
    #[must_use]
    pub fn subcategory_id(&self) -> Option<&str> {
        self.0
            .get(SUBCATEGORY_KEY)
            .and_then(Value::as_str)
            .filter(|id| !id.is_empty())
    }

    /// Current phase tags
    #[must_use]
    pub fn phases(&self) -> Vec<&str> {
        self.tags(PHASES_KEY)
    }

    /// Current tech-type tags
    #[must_use]
    pub fn tech_types(&self) -> Vec<&str> {
        self.tags(TECH_TYPES_KEY)
    }

    /// Replace phase tags with an owned copy of `tags`
    pub fn set_phases(&mut self, tags: &[&str]) {
        self.set_tags(PHASES_KEY, tags);
    }

    /// Replace tech-type tags with an owned copy of `tags`
    pub fn set_tech_types(&mut self, tags: &[&str]) {
        self.set_tags(TECH_TYPES_KEY, tags);
    }

    /// Underlying JSON fields
    #[inline]
    #[must_use]
    pub fn fields(&self) -> &Map<String, Value> {
        &self.0
    }

    fn tags(&self, key: &str) -> Vec<&str> {
        self.0
            .get(key)
            .and_then(Value::as_array)
            .map(|items| items.iter().filter_map(Value::as_str).collect())
            .unwrap_or_default()
    }

    // Existing keys keep their position in the object.
    fn set_tags(&mut self, key: &str, tags: &[&str]) {
        let value = Value::Array(tags.iter().map(|t| Value::String((*t).to_string())).collect());
        self.0.insert(key.to_string(), value);
    }
}

impl From<ControlRecord> for Value {
    fn from(record: ControlRecord) -> Self {
        Value::Object(record.0)
    }
}

/// Control catalog file contents
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogDocument {
    // `controls` slot holds a placeholder while the records live in `controls`.
    root: Map<String, Value>,
    controls: Vec<ControlRecord>,
}

impl CatalogDocument {
    /// Validate and take ownership of a parsed catalog
    ///
    /// # Errors
    /// Returns [`SchemaError`] if the document is not an object with a
    /// `controls` array of objects.
    pub fn from_value(value: Value) -> Result<Self, SchemaError> {
        schema::validate(DocumentKind::Catalog, &value)?;

        let Value::Object(mut root) = value else {
            return Err(shape_error("/: expected an object"));
        };
        let items = match root.get_mut(CONTROLS_KEY).map(Value::take) {
            Some(Value::Array(items)) => items,
            _ => return Err(shape_error("/controls: expected an array")),
        };

        let controls = items
            .into_iter()
            .enumerate()
            .map(|(i, item)| match item {
                Value::Object(fields) => Ok(ControlRecord(fields)),
                _ => Err(shape_error(&format!("/controls/{i}: expected an object"))),
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { root, controls })
    }

    /// Control records in file order
    #[inline]
    #[must_use]
    pub fn controls(&self) -> &[ControlRecord] {
        &self.controls
    }

    /// Mutable control records in file order
    #[inline]
    pub fn controls_mut(&mut self) -> &mut [ControlRecord] {
        &mut self.controls
    }

    /// Current `lastUpdated` value
    #[must_use]
    pub fn last_updated(&self) -> Option<&str> {
        self.root.get(LAST_UPDATED_KEY).and_then(Value::as_str)
    }

    /// Stamp `lastUpdated` with an ISO calendar date
    pub fn set_last_updated(&mut self, date: NaiveDate) {
        self.root.insert(
            LAST_UPDATED_KEY.to_string(),
            Value::String(date.format("%Y-%m-%d").to_string()),
        );
    }

    /// Reassemble the full JSON document
    #[must_use]
    pub fn into_value(self) -> Value {
        let mut root = self.root;
        let controls = Value::Array(self.controls.into_iter().map(Value::from).collect());
        root.insert(CONTROLS_KEY.to_string(), controls);
        Value::Object(root)
    }
}

fn shape_error(message: &str) -> SchemaError {
    SchemaError::invalid(DocumentKind::Catalog, vec![message.to_string()])
}

/// Outcome of one annotation pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnnotationReport {
    /// Records in the catalog
    pub records: usize,
    /// Records carrying a subcategory id, matched or not
    pub updated: usize,
    /// Records whose phases were taken from the table
    pub phases_applied: usize,
    /// Records whose tech types were taken from the table
    pub tech_types_applied: usize,
    /// Records whose content actually changed
    pub changed: usize,
    /// Distinct subcategory ids found in neither table, first-seen order
    pub unmapped: Vec<String>,
}

/// Applies the subcategory phase and tech-type tables to control records
#[derive(Debug, Clone, Copy)]
pub struct ControlAnnotator<'t> {
    phases: &'t MappingTable,
    tech_types: &'t MappingTable,
}

impl Default for ControlAnnotator<'static> {
    fn default() -> Self {
        Self::new(&SUBCATEGORY_PHASES, &SUBCATEGORY_TECH_TYPES)
    }
}

impl<'t> ControlAnnotator<'t> {
    /// Annotator over explicit tables
    #[inline]
    #[must_use]
    pub fn new(phases: &'t MappingTable, tech_types: &'t MappingTable) -> Self {
        Self { phases, tech_types }
    }

    /// Annotate a single record; returns `true` when it carries a subcategory id
    pub fn annotate_record(&self, record: &mut ControlRecord, report: &mut AnnotationReport) -> bool {
        let Some(subcategory) = record.subcategory_id().map(str::to_string) else {
            return false;
        };
        let before = record.clone();

        let phases = self.phases.get(&subcategory);
        if let Some(tags) = phases {
            record.set_phases(tags);
            report.phases_applied += 1;
        }

        let tech_types = self.tech_types.get(&subcategory);
        if let Some(tags) = tech_types {
            record.set_tech_types(tags);
            report.tech_types_applied += 1;
        }

        if phases.is_none() && tech_types.is_none() && !report.unmapped.contains(&subcategory) {
            tracing::warn!(subcategory = %subcategory, "subcategory has no phase or tech type mapping");
            report.unmapped.push(subcategory.clone());
        }

        if *record != before {
            report.changed += 1;
        }
        tracing::debug!(
            subcategory = %subcategory,
            phases = phases.is_some(),
            tech_types = tech_types.is_some(),
            "annotated control"
        );
        true
    }

    /// Annotate every record in the catalog
    pub fn annotate(&self, catalog: &mut CatalogDocument) -> AnnotationReport {
        let mut report = AnnotationReport {
            records: catalog.controls().len(),
            ..AnnotationReport::default()
        };

        for record in catalog.controls_mut() {
            if self.annotate_record(record, &mut report) {
                report.updated += 1;
            }
        }

        tracing::info!(
            records = report.records,
            updated = report.updated,
            changed = report.changed,
            unmapped = report.unmapped.len(),
            "control annotation complete"
        );
        report
    }
}

/// Annotate a catalog with the built-in tables
pub fn annotate_controls(catalog: &mut CatalogDocument) -> AnnotationReport {
    ControlAnnotator::default().annotate(catalog)
}
