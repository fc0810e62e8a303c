//! Report generation for suite runs and fixture verification.

use serde::{Deserialize, Serialize};

use crate::runner::RunSummary;
use crate::verify::VerificationSummary;

/// Output format for reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Text,
    Markdown,
    Json,
}

impl ReportFormat {
    /// Parse `text`, `markdown`/`md` or `json`, ignoring case.
    #[must_use]
    pub fn from_str_loose(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "text" | "txt" => Some(Self::Text),
            "markdown" | "md" => Some(Self::Markdown),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

/// Report over one suite run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuiteReport {
    pub title: String,
    pub timestamp: String,
    pub summary: RunSummary,
}

impl SuiteReport {
    /// Render in `format`.
    #[must_use]
    pub fn render(&self, format: ReportFormat) -> String {
        match format {
            ReportFormat::Text => self.to_text(),
            ReportFormat::Markdown => self.to_markdown(),
            ReportFormat::Json => self.to_json(),
        }
    }

    /// Problem lines followed by the `N Tests M Failures K Ignored` trailer.
    #[must_use]
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        for o in self.summary.problems() {
            out.push_str(&format!("TEST({}, {}) {}", o.group, o.case, o.status.label()));
            if let Some(message) = &o.message {
                out.push_str(&format!(": {message}"));
            }
            out.push('\n');
        }
        out.push_str(&trailer(&self.summary));
        out
    }

    #[must_use]
    pub fn to_markdown(&self) -> String {
        let s = &self.summary;
        let mut out = String::new();
        out.push_str(&format!("# {}\n\n", self.title));
        out.push_str(&format!("- Timestamp: {}\n", self.timestamp));
        out.push_str(&format!("- Tests: {}\n", s.tests));
        out.push_str(&format!("- Failures: {}\n", s.failures));
        out.push_str(&format!("- Errors: {}\n", s.errors));
        out.push_str(&format!("- Ignored: {}\n\n", s.ignored));

        out.push_str("| Group | Case | Status | Message |\n");
        out.push_str("|-------|------|--------|---------|\n");
        for o in &s.outcomes {
            out.push_str(&format!(
                "| {} | {} | {} | {} |\n",
                o.group,
                o.case,
                o.status.label(),
                o.message.as_deref().unwrap_or("-")
            ));
        }
        out
    }

    #[must_use]
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|e| format!("{{\"error\": \"{e}\"}}"))
    }
}

/// The closing block printed after a run.
#[must_use]
pub fn trailer(summary: &RunSummary) -> String {
    let verdict = if summary.all_passed() { "OK" } else { "FAIL" };
    let mut out = String::from("\n-----------------------\n");
    out.push_str(&format!(
        "{} Tests {} Failures {} Ignored",
        summary.tests,
        summary.failures + summary.errors,
        summary.ignored
    ));
    if summary.errors > 0 {
        out.push_str(&format!(" ({} Errors)", summary.errors));
    }
    out.push('\n');
    out.push_str(verdict);
    out.push('\n');
    out
}

/// A conformance report over a fixture verification.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConformanceReport {
    /// Report title.
    pub title: String,
    /// Timestamp (UTC).
    pub timestamp: String,
    /// Verification summary.
    pub summary: VerificationSummary,
}

impl ConformanceReport {
    /// Render the report as markdown.
    #[must_use]
    pub fn to_markdown(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!("# {}\n\n", self.title));
        out.push_str(&format!("- Timestamp: {}\n", self.timestamp));
        out.push_str(&format!("- Total: {}\n", self.summary.total));
        out.push_str(&format!("- Passed: {}\n", self.summary.passed));
        out.push_str(&format!("- Failed: {}\n\n", self.summary.failed));

        out.push_str("| Case | Function | Section | Status |\n");
        out.push_str("|------|----------|---------|--------|\n");
        for r in &self.summary.results {
            let status = if r.passed { "PASS" } else { "FAIL" };
            out.push_str(&format!(
                "| {} | {} | {} | {} |\n",
                r.case_name, r.function, r.spec_section, status
            ));
        }

        let failures: Vec<_> = self.summary.results.iter().filter(|r| !r.passed).collect();
        if !failures.is_empty() {
            out.push_str("\n## Failures\n");
            for r in failures {
                out.push_str(&format!("\n### {}\n\n```diff\n", r.case_name));
                out.push_str(r.diff.as_deref().unwrap_or(""));
                out.push_str("```\n");
            }
        }
        out
    }

    /// Render the report as JSON.
    #[must_use]
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|e| format!("{{\"error\": \"{e}\"}}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runner::{CaseOutcome, CaseStatus};
    use crate::verify::VerificationResult;

    fn outcome(case: &str, status: CaseStatus, message: Option<&str>) -> CaseOutcome {
        CaseOutcome {
            group: "string_strlcpy".to_string(),
            case: case.to_string(),
            status,
            message: message.map(str::to_string),
            latency_ns: 10,
        }
    }

    fn suite(outcomes: Vec<CaseOutcome>) -> SuiteReport {
        SuiteReport {
            title: "libcheck".to_string(),
            timestamp: "2026-10-19T00:00:00.000Z".to_string(),
            summary: RunSummary::from_outcomes(outcomes),
        }
    }

    #[test]
    fn passing_trailer_says_ok() {
        let report = suite(vec![outcome("a", CaseStatus::Pass, None)]);
        assert_eq!(
            report.to_text(),
            "\n-----------------------\n1 Tests 0 Failures 0 Ignored\nOK\n"
        );
    }

    #[test]
    fn failing_text_lists_problems_first() {
        let report = suite(vec![
            outcome("a", CaseStatus::Pass, None),
            outcome("b", CaseStatus::Fail, Some("expected 4 was 3")),
            outcome("c", CaseStatus::Error, Some("panicked: boom")),
            outcome("d", CaseStatus::Ignore, Some("later")),
        ]);
        let text = report.to_text();
        assert!(text.starts_with("TEST(string_strlcpy, b) FAIL: expected 4 was 3\n"));
        assert!(text.contains("TEST(string_strlcpy, c) ERROR: panicked: boom\n"));
        assert!(text.ends_with("4 Tests 2 Failures 1 Ignored (1 Errors)\nFAIL\n"));
    }

    #[test]
    fn markdown_and_json_cover_every_case() {
        let report = suite(vec![
            outcome("a", CaseStatus::Pass, None),
            outcome("b", CaseStatus::Fail, Some("x")),
        ]);
        let md = report.render(ReportFormat::Markdown);
        assert!(md.contains("| string_strlcpy | a | PASS | - |"));
        assert!(md.contains("| string_strlcpy | b | FAIL | x |"));
        let json: serde_json::Value = serde_json::from_str(&report.to_json()).unwrap();
        assert_eq!(json["summary"]["failures"], 1);
        assert_eq!(json["summary"]["outcomes"][1]["status"], "fail");
    }

    #[test]
    fn conformance_markdown_includes_failure_diffs() {
        let report = ConformanceReport {
            title: "fixtures".to_string(),
            timestamp: "t".to_string(),
            summary: VerificationSummary::from_results(vec![VerificationResult {
                case_name: "strlcpy/fullcopy".to_string(),
                function: "strlcpy".to_string(),
                spec_section: "strlcpy exact fit".to_string(),
                passed: false,
                expected: "ret=4 dest=abcd".to_string(),
                actual: "ret=4 dest=abc".to_string(),
                diff: Some("@@ dest @@\n-abcd\n+abc\n".to_string()),
            }]),
        };
        let md = report.to_markdown();
        assert!(md.contains("- Failed: 1"));
        assert!(md.contains("### strlcpy/fullcopy"));
        assert!(md.contains("-abcd\n+abc\n```"));
    }

    #[test]
    fn format_parsing() {
        assert_eq!(ReportFormat::from_str_loose("MD"), Some(ReportFormat::Markdown));
        assert_eq!(ReportFormat::from_str_loose("json"), Some(ReportFormat::Json));
        assert_eq!(ReportFormat::from_str_loose("xml"), None);
    }
}
