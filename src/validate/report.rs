//! Validation report
//!
//! Aggregates check findings per category and renders the console report
//! and the CI-consumable JSON export.

use std::collections::BTreeMap;

use serde::Serialize;

use super::checks::{severity_of, Severity, CHECKS};

/// One validator finding
#[derive(Debug, Clone, Serialize)]
pub struct Finding {
    pub file: String,
    pub name: String,
    pub detail: String,
}

/// Aggregated results of a validation run
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationReport {
    pub total_files: usize,
    pub skipped: usize,
    pub categories: BTreeMap<String, Vec<Finding>>,
}

impl ValidationReport {
    pub fn new(total_files: usize, skipped: usize) -> Self {
        Self {
            total_files,
            skipped,
            categories: BTreeMap::new(),
        }
    }

    /// Record a finding under a check name
    pub fn add(&mut self, check: &str, finding: Finding) {
        self.categories
            .entry(check.to_string())
            .or_default()
            .push(finding);
    }

    fn findings_with(&self, severity: Severity) -> usize {
        self.categories
            .iter()
            .filter(|(name, _)| severity_of(name) == Some(severity))
            .map(|(_, findings)| findings.len())
            .sum()
    }

    /// Total findings from blocking checks
    pub fn blocking_findings(&self) -> usize {
        self.findings_with(Severity::Blocking)
    }

    /// Total findings from advisory checks
    pub fn advisory_findings(&self) -> usize {
        self.findings_with(Severity::Advisory)
    }

    /// True when any blocking check fired; drives the exit status
    pub fn has_blocking(&self) -> bool {
        self.blocking_findings() > 0
    }

    /// The JSON export shape consumed by CI
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// The same findings regrouped per file, tagged with their check name
    pub fn by_file(&self) -> BTreeMap<String, Vec<(&str, &Finding)>> {
        let mut files: BTreeMap<String, Vec<(&str, &Finding)>> = BTreeMap::new();
        for check in &CHECKS {
            if let Some(findings) = self.categories.get(check.name) {
                for finding in findings {
                    files
                        .entry(finding.file.clone())
                        .or_default()
                        .push((check.name, finding));
                }
            }
        }
        files
    }

    /// Render the per-record view, one block per file
    pub fn render_by_file(&self) -> String {
        let mut out = String::new();
        for (file, findings) in self.by_file() {
            out.push_str(&format!("{} ({})\n", file, findings[0].1.name));
            for (check, finding) in findings {
                out.push_str(&format!("  [{}] {}\n", check, finding.detail));
            }
        }
        out
    }

    /// Render the console report, in check order. Advisory findings are
    /// listed only when verbose.
    pub fn render(&self, verbose: bool) -> String {
        let bar = "=".repeat(70);
        let mut out = String::new();
        out.push_str(&format!("{}\n", bar));
        out.push_str("FOOD DATABASE VALIDATION\n");
        out.push_str(&format!("{}\n", bar));
        out.push_str(&format!(
            "Files checked: {} ({} skipped)\n",
            self.total_files, self.skipped
        ));

        for check in &CHECKS {
            let findings = match self.categories.get(check.name) {
                Some(findings) if !findings.is_empty() => findings,
                _ => continue,
            };
            if check.severity == Severity::Advisory && !verbose {
                continue;
            }
            let tag = match check.severity {
                Severity::Blocking => "BLOCKING",
                Severity::Advisory => "advisory",
            };
            out.push_str(&format!(
                "\n{} [{}] ({} issues)\n",
                check.name,
                tag,
                findings.len()
            ));
            for finding in findings {
                out.push_str(&format!(
                    "  - {} ({}): {}\n",
                    finding.file, finding.name, finding.detail
                ));
            }
        }

        let advisory = self.advisory_findings();
        if advisory > 0 && !verbose {
            out.push_str(&format!(
                "\n{} advisory findings hidden (run with --verbose)\n",
                advisory
            ));
        }

        out.push_str(&format!(
            "\nSummary: {} blocking, {} advisory\n",
            self.blocking_findings(),
            advisory
        ));
        out
    }
}
