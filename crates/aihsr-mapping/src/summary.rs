//! Operator-facing summary of the mapping tables and run counts

use crate::tables::{
    is_all_tech_types, MappingTable, ALL_TECH_TYPES, RISK_CONTROL_SUBCATEGORIES,
    SUBCATEGORY_PHASES, SUBCATEGORY_TECH_TYPES,
};
use std::fmt;

const RULE_WIDTH: usize = 60;

fn rule(f: &mut fmt::Formatter<'_>) -> fmt::Result {
    writeln!(f, "{}", "=".repeat(RULE_WIDTH))
}

/// Short phase label, `phase-2` -> `P2`
#[must_use]
pub fn phase_label(tag: &str) -> String {
    tag.replace("phase-", "P")
}

/// Report over the three static tables
#[derive(Debug, Clone, Copy)]
pub struct MappingSummary<'t> {
    phases: &'t MappingTable,
    tech_types: &'t MappingTable,
    risks: &'t MappingTable,
}

impl Default for MappingSummary<'static> {
    fn default() -> Self {
        Self {
            phases: &SUBCATEGORY_PHASES,
            tech_types: &SUBCATEGORY_TECH_TYPES,
            risks: &RISK_CONTROL_SUBCATEGORIES,
        }
    }
}

impl MappingSummary<'_> {
    /// Total risk -> control subcategory pairs
    #[must_use]
    pub fn total_links(&self) -> usize {
        self.risks.total_assignments()
    }
}

impl fmt::Display for MappingSummary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        rule(f)?;
        writeln!(f, "MAPPING SUMMARY")?;
        rule(f)?;

        writeln!(f, "\nPhase Assignments by Subcategory:")?;
        for (subcategory, phases) in self.phases.sorted() {
            let labels: Vec<_> = phases.iter().map(|p| phase_label(p)).collect();
            writeln!(f, "  {subcategory}: {}", labels.join(", "))?;
        }

        writeln!(f, "\nTech Type Assignments by Subcategory:")?;
        for (subcategory, types) in self.tech_types.sorted() {
            if is_all_tech_types(types) {
                writeln!(f, "  {subcategory}: {ALL_TECH_TYPES}")?;
            } else {
                writeln!(f, "  {subcategory}: {}", types.join(", "))?;
            }
        }

        writeln!(f, "\nRisk → Control Subcategory Count:")?;
        for (risk, subcategories) in self.risks.sorted() {
            writeln!(f, "  {risk}: {} controls", subcategories.len())?;
        }

        writeln!(f, "\nTotal risk→control links: {}", self.total_links())
    }
}

/// Closing block listing what a run changed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CompletionReport {
    /// Controls counted as updated, if the catalog half ran
    pub controls_updated: Option<usize>,
    /// Links generated, if the traceability half ran
    pub links_created: Option<usize>,
}

impl fmt::Display for CompletionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        rule(f)?;
        writeln!(f, "COMPLETE")?;
        if let Some(n) = self.controls_updated {
            writeln!(f, "  - {n} controls updated with phase/tech assignments")?;
        }
        if let Some(n) = self.links_created {
            writeln!(f, "  - {n} risk→control subcategory links created")?;
        }
        rule(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phase_labels() {
        assert_eq!(phase_label("phase-1"), "P1");
        assert_eq!(phase_label("phase-3"), "P3");
    }

    #[test]
    fn summary_sections_and_lines() {
        let text = MappingSummary::default().to_string();
        let lines: Vec<_> = text.lines().collect();

        assert_eq!(lines[0], "");
        assert_eq!(lines[1], "=".repeat(60));
        assert_eq!(lines[2], "MAPPING SUMMARY");
        assert_eq!(lines[5], "Phase Assignments by Subcategory:");
        assert_eq!(lines[6], "  access-management-3.3: P2, P3");

        assert!(text.contains("  content-safety-2.4: P1, P2, P3\n"));
        assert!(text.contains("  environmental-1.6: P1\n"));
        assert!(text.contains("  board-oversight-1.1: all\n"));
        assert!(text.contains("  environmental-1.6: llm, foundation, multi-modal\n"));
        assert!(text.contains("  overreliance-5.1: 5 controls\n"));
        assert!(text.contains("  ai-welfare-7.5: 2 controls\n"));
        assert!(text.ends_with("\nTotal risk→control links: 101\n"));
    }

    #[test]
    fn risk_counts_are_sorted() {
        let text = MappingSummary::default().to_string();
        let start = text.find("Risk → Control Subcategory Count:").unwrap();
        let risks: Vec<_> = text[start..]
            .lines()
            .skip(1)
            .take_while(|l| l.starts_with("  "))
            .collect();
        assert_eq!(risks.len(), 24);
        let mut sorted = risks.clone();
        sorted.sort_unstable();
        assert_eq!(risks, sorted);
        assert_eq!(risks[0], "  ai-welfare-7.5: 2 controls");
    }

    #[test]
    fn completion_lists_only_halves_that_ran() {
        let both = CompletionReport {
            controls_updated: Some(42),
            links_created: Some(101),
        }
        .to_string();
        assert!(both.contains("  - 42 controls updated with phase/tech assignments\n"));
        assert!(both.contains("  - 101 risk→control subcategory links created\n"));

        let links_only = CompletionReport {
            controls_updated: None,
            links_created: Some(101),
        }
        .to_string();
        assert!(!links_only.contains("controls updated"));
        assert!(links_only.starts_with("\n"));
        assert!(links_only.ends_with(&format!("{}\n", "=".repeat(60))));
    }
}
