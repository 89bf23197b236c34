//! Technology type assignments per control subcategory

use super::ALL_TECH_TYPES;

const ALL: &[&str] = &[ALL_TECH_TYPES];
const HIGH_CAPABILITY: &[&str] = &["llm", "foundation", "multi-modal"];

/// Subcategory id to tech-type tags, in declaration order.
pub(crate) const ENTRIES: &[(&str, &[&str])] = &[
    // Generative content
    (
        "content-safety-2.4",
        &["llm", "generative-non-llm", "multi-modal", "foundation"],
    ),
    (
        "model-alignment-2.2",
        &["llm", "reinforcement-learning", "foundation"],
    ),
    // Decision and prediction systems
    (
        "societal-impact-1.7",
        &[
            "predictive",
            "classification",
            "recommendation",
            "computer-vision",
            "supervised-ml",
        ],
    ),
    // Security
    ("infrastructure-security-2.1", ALL),
    ("access-management-3.3", HIGH_CAPABILITY),
    // Universal
    ("board-oversight-1.1", ALL),
    ("risk-management-1.2", ALL),
    ("conflict-interest-1.3", ALL),
    ("whistleblower-1.4", ALL),
    ("safety-frameworks-1.5", ALL),
    ("environmental-1.6", HIGH_CAPABILITY),
    ("safety-engineering-2.3", ALL),
    ("testing-auditing-3.1", ALL),
    ("data-governance-3.2", ALL),
    ("staged-deployment-3.4", ALL),
    ("post-deployment-3.5", ALL),
    ("incident-response-3.6", ALL),
    ("documentation-4.1", ALL),
    ("risk-disclosure-4.2", ALL),
    ("incident-reporting-4.3", ALL),
    ("governance-disclosure-4.4", ALL),
    ("third-party-access-4.5", ALL),
    ("user-rights-4.6", ALL),
];
