//! Risk to control subcategory assignments
//!
//! Declaration order is the link generation order; reordering entries
//! renumbers every generated link id.

pub(crate) const ENTRIES: &[(&str, &[&str])] = &[
    // 1. Discrimination & toxicity
    (
        "unfair-discrimination-1.1",
        &[
            "testing-auditing-3.1",
            "data-governance-3.2",
            "societal-impact-1.7",
            "documentation-4.1",
            "post-deployment-3.5",
        ],
    ),
    (
        "toxic-content-1.2",
        &[
            "content-safety-2.4",
            "model-alignment-2.2",
            "testing-auditing-3.1",
            "data-governance-3.2",
            "incident-response-3.6",
        ],
    ),
    (
        "unequal-performance-1.3",
        &[
            "testing-auditing-3.1",
            "data-governance-3.2",
            "post-deployment-3.5",
            "documentation-4.1",
            "risk-disclosure-4.2",
        ],
    ),
    // 2. Privacy & security
    (
        "privacy-breach-2.1",
        &[
            "data-governance-3.2",
            "infrastructure-security-2.1",
            "access-management-3.3",
            "testing-auditing-3.1",
            "incident-reporting-4.3",
        ],
    ),
    (
        "security-vulnerabilities-2.2",
        &[
            "infrastructure-security-2.1",
            "testing-auditing-3.1",
            "incident-response-3.6",
            "access-management-3.3",
            "post-deployment-3.5",
        ],
    ),
    // 3. Misinformation
    (
        "false-information-3.1",
        &[
            "testing-auditing-3.1",
            "content-safety-2.4",
            "documentation-4.1",
            "risk-disclosure-4.2",
            "post-deployment-3.5",
        ],
    ),
    (
        "information-pollution-3.2",
        &[
            "data-governance-3.2",
            "content-safety-2.4",
            "testing-auditing-3.1",
            "access-management-3.3",
        ],
    ),
    // 4. Malicious use
    (
        "disinformation-surveillance-4.1",
        &[
            "content-safety-2.4",
            "access-management-3.3",
            "data-governance-3.2",
            "testing-auditing-3.1",
            "incident-reporting-4.3",
        ],
    ),
    (
        "cyberattacks-mass-harm-4.2",
        &[
            "infrastructure-security-2.1",
            "content-safety-2.4",
            "access-management-3.3",
            "data-governance-3.2",
            "incident-response-3.6",
        ],
    ),
    (
        "fraud-manipulation-4.3",
        &[
            "content-safety-2.4",
            "testing-auditing-3.1",
            "access-management-3.3",
            "documentation-4.1",
        ],
    ),
    // 5. Human-computer interaction
    (
        "overreliance-5.1",
        &[
            "documentation-4.1",
            "risk-disclosure-4.2",
            "user-rights-4.6",
            "safety-frameworks-1.5",
            "post-deployment-3.5",
        ],
    ),
    (
        "loss-of-agency-5.2",
        &[
            "user-rights-4.6",
            "documentation-4.1",
            "risk-disclosure-4.2",
            "societal-impact-1.7",
        ],
    ),
    // 6. Socioeconomic & environmental
    (
        "power-centralization-6.1",
        &[
            "societal-impact-1.7",
            "governance-disclosure-4.4",
            "third-party-access-4.5",
            "board-oversight-1.1",
        ],
    ),
    (
        "inequality-employment-6.2",
        &[
            "societal-impact-1.7",
            "documentation-4.1",
            "risk-disclosure-4.2",
        ],
    ),
    (
        "devaluation-human-effort-6.3",
        &[
            "societal-impact-1.7",
            "documentation-4.1",
            "post-deployment-3.5",
        ],
    ),
    (
        "competitive-dynamics-6.4",
        &[
            "safety-frameworks-1.5",
            "board-oversight-1.1",
            "risk-management-1.2",
        ],
    ),
    (
        "governance-failure-6.5",
        &[
            "board-oversight-1.1",
            "governance-disclosure-4.4",
            "third-party-access-4.5",
            "incident-reporting-4.3",
        ],
    ),
    (
        "environmental-harm-6.6",
        &[
            "environmental-1.6",
            "documentation-4.1",
            "testing-auditing-3.1",
        ],
    ),
    // 7. System safety, failures & limitations
    (
        "misaligned-goals-7.1",
        &[
            "model-alignment-2.2",
            "testing-auditing-3.1",
            "safety-engineering-2.3",
            "post-deployment-3.5",
        ],
    ),
    (
        "dangerous-capabilities-7.2",
        &[
            "safety-engineering-2.3",
            "access-management-3.3",
            "content-safety-2.4",
            "testing-auditing-3.1",
            "data-governance-3.2",
        ],
    ),
    (
        "lack-robustness-7.3",
        &[
            "testing-auditing-3.1",
            "safety-engineering-2.3",
            "data-governance-3.2",
            "incident-response-3.6",
            "post-deployment-3.5",
        ],
    ),
    (
        "lack-transparency-7.4",
        &[
            "documentation-4.1",
            "risk-disclosure-4.2",
            "governance-disclosure-4.4",
            "user-rights-4.6",
        ],
    ),
    (
        "ai-welfare-7.5",
        &["documentation-4.1", "board-oversight-1.1"],
    ),
    (
        "multi-agent-risks-7.6",
        &[
            "testing-auditing-3.1",
            "safety-engineering-2.3",
            "post-deployment-3.5",
            "incident-response-3.6",
        ],
    ),
];
