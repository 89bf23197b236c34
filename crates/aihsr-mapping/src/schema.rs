//! Structural validation of loaded documents
//!
//! Only the shape the updater reads or rewrites is checked. Referenced ids,
//! tag vocabularies and untouched fields are not validated.

use crate::error::{DocumentKind, SchemaError};
use jsonschema::Validator;
use once_cell::sync::Lazy;
use serde_json::{json, Value};

static CATALOG_VALIDATOR: Lazy<Result<Validator, String>> =
    Lazy::new(|| compile(DocumentKind::Catalog));
static TRACEABILITY_VALIDATOR: Lazy<Result<Validator, String>> =
    Lazy::new(|| compile(DocumentKind::Traceability));

fn schema_for(kind: DocumentKind) -> Value {
    match kind {
        DocumentKind::Catalog => json!({
            "$schema": "https://json-schema.org/draft/2020-12/schema",
            "type": "object",
            "required": ["controls"],
            "properties": {
                "controls": {
                    "type": "array",
                    "items": {
                        "type": "object",
                        "properties": {
                            "subcategoryId": { "type": ["string", "null"] },
                            "phases": { "type": "array", "items": { "type": "string" } },
                            "techTypes": { "type": "array", "items": { "type": "string" } }
                        }
                    }
                }
            }
        }),
        DocumentKind::Traceability => json!({
            "$schema": "https://json-schema.org/draft/2020-12/schema",
            "type": "object",
            "required": ["links"],
            "properties": {
                "links": {
                    "type": "array",
                    "items": {
                        "type": "object",
                        "properties": {
                            "type": { "type": "string" }
                        }
                    }
                }
            }
        }),
    }
}

fn compile(kind: DocumentKind) -> Result<Validator, String> {
    jsonschema::validator_for(&schema_for(kind)).map_err(|e| e.to_string())
}

/// Compiled validator for `kind`, built on first use
fn compiled(kind: DocumentKind) -> Result<&'static Validator, SchemaError> {
    let slot = match kind {
        DocumentKind::Catalog => &*CATALOG_VALIDATOR,
        DocumentKind::Traceability => &*TRACEABILITY_VALIDATOR,
    };
    slot.as_ref().map_err(|message| SchemaError::BadSchema {
        kind,
        message: message.clone(),
    })
}

/// Validate `document` against the built-in schema for `kind`
///
/// # Errors
/// Returns [`SchemaError::Invalid`] listing every violation as
/// `<instance path>: <message>`.
pub fn validate(kind: DocumentKind, document: &Value) -> Result<(), SchemaError> {
    let validator = compiled(kind)?;

    let violations: Vec<String> = validator
        .iter_errors(document)
        .map(|e| format!("{}: {}", e.instance_path, e))
        .collect();

    if violations.is_empty() {
        Ok(())
    } else {
        tracing::debug!(%kind, count = violations.len(), "document failed validation");
        Err(SchemaError::invalid(kind, violations))
    }
}
