//! Traceability document and the mitigation link regenerator
//!
//! Links of type `mitigation` are owned by this tool and rebuilt from the
//! risk table on every run. Every other link is kept as raw JSON and
//! re-emitted exactly as read, ahead of the generated links.

use crate::catalog::LAST_UPDATED_KEY;
use crate::error::{DocumentKind, SchemaError};
use crate::schema;
use crate::tables::RISK_CONTROL_SUBCATEGORIES;
use chrono::NaiveDate;
use serde_json::{json, Map, Value};

const LINKS_KEY: &str = "links";
const VERSION_KEY: &str = "version";

/// Link type regenerated by the updater
pub const MITIGATION_LINK_TYPE: &str = "mitigation";
/// Entity kind on the `from` side of generated links
pub const RISK_ENTITY: &str = "risk";
/// Entity kind on the `to` side of generated links
pub const CONTROL_SUBCATEGORY_ENTITY: &str = "controlSubcategory";
/// Prefix of generated link ids
pub const GENERATED_LINK_PREFIX: &str = "control-cat-";
/// Annotation carried by every generated link
pub const GENERATED_LINK_REASONING: &str = "AIHSR-based mapping";
/// Version stamped on a regenerated traceability file
pub const TRACEABILITY_VERSION: &str = "6.0.0";

/// Endpoint of a link
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityRef {
    /// Entity kind, e.g. `risk`
    pub entity: String,
    /// Entity id within that kind
    pub id: String,
}

impl EntityRef {
    /// Create an endpoint
    #[inline]
    pub fn new(entity: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            entity: entity.into(),
            id: id.into(),
        }
    }
}

/// Traceability link
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    /// Link id
    pub id: String,
    /// Link type (`trigger`, `mitigation`, `regulation`, ...), written as `type`
    pub link_type: String,
    /// Source endpoint
    pub from: EntityRef,
    /// Target endpoint
    pub to: EntityRef,
    /// Free-text annotation, omitted from the JSON when `None`
    pub reasoning: Option<String>,
}

impl Link {
    /// Generated risk -> control subcategory mitigation link with sequence number `seq`
    #[must_use]
    pub fn mitigation(seq: usize, risk: &str, subcategory: &str) -> Self {
        Self {
            id: format!("{GENERATED_LINK_PREFIX}{seq}"),
            link_type: MITIGATION_LINK_TYPE.to_string(),
            from: EntityRef::new(RISK_ENTITY, risk),
            to: EntityRef::new(CONTROL_SUBCATEGORY_ENTITY, subcategory),
            reasoning: Some(GENERATED_LINK_REASONING.to_string()),
        }
    }
}

impl From<Link> for Value {
    fn from(link: Link) -> Self {
        let mut value = json!({
            "id": link.id,
            "type": link.link_type,
            "from": { "entity": link.from.entity, "id": link.from.id },
            "to": { "entity": link.to.entity, "id": link.to.id },
        });
        if let (Some(reasoning), Value::Object(map)) = (link.reasoning, &mut value) {
            map.insert("reasoning".to_string(), Value::String(reasoning));
        }
        value
    }
}

/// Whether a raw link is owned by the regenerator
#[must_use]
pub fn is_mitigation(link: &Value) -> bool {
    link.get("type").and_then(Value::as_str) == Some(MITIGATION_LINK_TYPE)
}

/// Traceability file contents
#[derive(Debug, Clone, PartialEq)]
pub struct TraceabilityDocument {
    // `links` slot holds a placeholder while the links live in `links`.
    root: Map<String, Value>,
    links: Vec<Value>,
}

impl TraceabilityDocument {
    /// Validate and take ownership of a parsed traceability file
    ///
    /// # Errors
    /// Returns [`SchemaError`] if the document is not an object with a
    /// `links` array of objects.
    pub fn from_value(value: Value) -> Result<Self, SchemaError> {
        schema::validate(DocumentKind::Traceability, &value)?;

        let Value::Object(mut root) = value else {
            return Err(shape_error("/: expected an object"));
        };
        let links = match root.get_mut(LINKS_KEY).map(Value::take) {
            Some(Value::Array(links)) => links,
            _ => return Err(shape_error("/links: expected an array")),
        };

        Ok(Self { root, links })
    }

    /// Raw links in file order
    #[inline]
    #[must_use]
    pub fn links(&self) -> &[Value] {
        &self.links
    }

    /// Current `version`
    #[must_use]
    pub fn version(&self) -> Option<&str> {
        self.root.get(VERSION_KEY).and_then(Value::as_str)
    }

    /// Overwrite `version`
    pub fn set_version(&mut self, version: &str) {
        self.root
            .insert(VERSION_KEY.to_string(), Value::String(version.to_string()));
    }

    /// Current `lastUpdated`
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
        root.insert(LINKS_KEY.to_string(), Value::Array(self.links));
        Value::Object(root)
    }
}

fn shape_error(message: &str) -> SchemaError {
    SchemaError::invalid(DocumentKind::Traceability, vec![message.to_string()])
}

/// Outcome of one regeneration pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LinkReport {
    /// Mitigation links dropped from the input
    pub removed: usize,
    /// Non-mitigation links carried over
    pub retained: usize,
    /// Links generated from the risk table
    pub generated: usize,
}

impl LinkReport {
    /// Links in the rewritten document
    #[inline]
    #[must_use]
    pub fn total(&self) -> usize {
        self.retained + self.generated
    }
}

/// One link per (risk, subcategory) pair, numbered from 1 across the whole table
pub fn generate_mitigation_links<'a, I>(assignments: I) -> Vec<Link>
where
    I: IntoIterator<Item = (&'a str, &'a [&'a str])>,
{
    assignments
        .into_iter()
        .flat_map(|(risk, subcategories)| subcategories.iter().map(move |s| (risk, *s)))
        .enumerate()
        .map(|(i, (risk, subcategory))| Link::mitigation(i + 1, risk, subcategory))
        .collect()
}

/// Replace every mitigation link with `generated`, keeping other links first
pub fn replace_mitigation_links(doc: &mut TraceabilityDocument, generated: Vec<Link>) -> LinkReport {
    let before = doc.links.len();
    doc.links.retain(|link| !is_mitigation(link));

    let report = LinkReport {
        removed: before - doc.links.len(),
        retained: doc.links.len(),
        generated: generated.len(),
    };
    tracing::debug!(removed = report.removed, retained = report.retained, "dropped mitigation links");

    doc.links.extend(generated.into_iter().map(Value::from));
    report
}

/// Regenerate mitigation links from the built-in risk table
pub fn regenerate_links(doc: &mut TraceabilityDocument) -> LinkReport {
    let generated = generate_mitigation_links(RISK_CONTROL_SUBCATEGORIES.iter());
    let report = replace_mitigation_links(doc, generated);
    tracing::info!(
        removed = report.removed,
        retained = report.retained,
        generated = report.generated,
        "mitigation links regenerated"
    );
    report
}
