//! Lifecycle phase assignments per control subcategory

use super::{PHASE_1, PHASE_2, PHASE_3};

const ALL_PHASES: &[&str] = &[PHASE_1, PHASE_2, PHASE_3];
const BUILD: &[&str] = &[PHASE_1, PHASE_2];
const LIVE: &[&str] = &[PHASE_2, PHASE_3];
const DEPLOYED: &[&str] = &[PHASE_3];

/// Subcategory id to phase tags, in declaration order.
pub(crate) const ENTRIES: &[(&str, &[&str])] = &[
    // Governance & oversight (1.x)
    ("board-oversight-1.1", ALL_PHASES),
    ("risk-management-1.2", ALL_PHASES),
    ("conflict-interest-1.3", ALL_PHASES),
    ("whistleblower-1.4", LIVE),
    ("safety-frameworks-1.5", BUILD),
    ("environmental-1.6", &[PHASE_1]),
    ("societal-impact-1.7", BUILD),
    // Technical & security (2.x)
    ("infrastructure-security-2.1", LIVE),
    ("model-alignment-2.2", BUILD),
    ("safety-engineering-2.3", BUILD),
    ("content-safety-2.4", ALL_PHASES),
    // Operational process (3.x)
    ("testing-auditing-3.1", ALL_PHASES),
    ("data-governance-3.2", ALL_PHASES),
    ("access-management-3.3", LIVE),
    ("staged-deployment-3.4", DEPLOYED),
    ("post-deployment-3.5", DEPLOYED),
    ("incident-response-3.6", DEPLOYED),
    // Transparency & accountability (4.x)
    ("documentation-4.1", ALL_PHASES),
    ("risk-disclosure-4.2", LIVE),
    ("incident-reporting-4.3", DEPLOYED),
    ("governance-disclosure-4.4", LIVE),
    ("third-party-access-4.5", LIVE),
    ("user-rights-4.6", DEPLOYED),
];
