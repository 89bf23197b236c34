//! Testing utilities for the AIHSR mapping workspace
//!
//! Shared fixtures and a throwaway data directory.

#![allow(missing_docs)]

use serde_json::{json, Value};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const CONTROLS_FILE: &str = "technical-controls.json";
pub const TRACEABILITY_FILE: &str = "traceability.json";

/// Catalog with one mapped, one unmapped and one unassigned control
pub fn sample_catalog() -> Value {
    json!({
        "lastUpdated": "2024-05-01",
        "controls": [
            {
                "id": "ctl-content-filter",
                "name": "Output content filtering",
                "subcategoryId": "content-safety-2.4",
                "phases": [],
                "techTypes": []
            },
            {
                "id": "ctl-legacy",
                "name": "Legacy review board",
                "source": "internal",
                "subcategoryId": "legacy-review-0.1",
                "phases": ["phase-2"],
                "techTypes": ["llm"]
            },
            {
                "id": "ctl-draft",
                "name": "Unassigned draft control",
                "phases": ["phase-1"],
                "techTypes": []
            },
            {
                "id": "ctl-incident",
                "name": "Incident runbook",
                "description": "Réponse documentée aux défaillances du modèle",
                "subcategoryId": "incident-response-3.6",
                "phases": ["phase-1", "phase-2"],
                "techTypes": ["predictive"]
            }
        ]
    })
}

/// Traceability file with trigger, regulation and stale mitigation links
pub fn sample_traceability() -> Value {
    json!({
        "version": "5.1.0",
        "lastUpdated": "2024-05-01",
        "links": [
            {
                "id": "trig-1",
                "type": "trigger",
                "from": { "entity": "question", "id": "q-uses-llm" },
                "to": { "entity": "risk", "id": "toxic-content-1.2" },
                "phases": ["phase-1"]
            },
            {
                "id": "mit-1",
                "type": "mitigation",
                "from": { "entity": "risk", "id": "toxic-content-1.2" },
                "to": { "entity": "mitigation", "id": "m-filtering" },
                "reasoning": "hand curated"
            },
            {
                "id": "reg-1",
                "type": "regulation",
                "from": { "entity": "risk", "id": "privacy-breach-2.1" },
                "to": { "entity": "regulation", "id": "gdpr-art-32" }
            },
            {
                "id": "mit-2",
                "type": "mitigation",
                "from": { "entity": "risk", "id": "privacy-breach-2.1" },
                "to": { "entity": "mitigation", "id": "m-deid" }
            }
        ]
    })
}

/// Temporary data directory holding the two data files
pub struct DataDir {
    dir: TempDir,
}

impl DataDir {
    /// Empty directory
    pub fn empty() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
        }
    }

    /// Directory seeded with the sample fixtures
    pub fn with_samples() -> Self {
        let data = Self::empty();
        data.write_json(CONTROLS_FILE, &sample_catalog());
        data.write_json(TRACEABILITY_FILE, &sample_traceability());
        data
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn file(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    pub fn write_json(&self, name: &str, value: &Value) {
        let text = serde_json::to_string_pretty(value).unwrap();
        std::fs::write(self.file(name), text).unwrap();
    }

    pub fn write_raw(&self, name: &str, text: &str) {
        std::fs::write(self.file(name), text).unwrap();
    }

    pub fn read_json(&self, name: &str) -> Value {
        serde_json::from_str(&self.read_raw(name)).unwrap()
    }

    pub fn read_raw(&self, name: &str) -> String {
        std::fs::read_to_string(self.file(name)).unwrap()
    }
}
