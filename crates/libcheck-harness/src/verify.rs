//! Fixture verification: run fixture sets against a backend and compare.

use serde::{Deserialize, Serialize};

use crate::backend::{BoundedStrings, Trigonometry};
use crate::diff;
use crate::fixture_exec::{execute_fixture_case, outputs_match};
use crate::fixtures::{FixtureCase, FixtureSet};

/// Result of verifying a single fixture case.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerificationResult {
    /// Name of the test case, prefixed with its family.
    pub case_name: String,
    /// Function that was called.
    pub function: String,
    /// Contract clause reference.
    pub spec_section: String,
    /// Whether the case passed.
    pub passed: bool,
    /// Expected output.
    pub expected: String,
    /// Actual output from the backend.
    pub actual: String,
    /// Diff if the case failed.
    pub diff: Option<String>,
}

/// Aggregate verification summary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerificationSummary {
    /// Total cases run.
    pub total: usize,
    /// Cases passed.
    pub passed: usize,
    /// Cases failed.
    pub failed: usize,
    /// Individual results.
    pub results: Vec<VerificationResult>,
}

impl VerificationSummary {
    /// Build a summary from a list of results.
    #[must_use]
    pub fn from_results(results: Vec<VerificationResult>) -> Self {
        let total = results.len();
        let passed = results.iter().filter(|r| r.passed).count();
        let failed = total - passed;
        Self {
            total,
            passed,
            failed,
            results,
        }
    }

    /// Returns true if all cases passed.
    #[must_use]
    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }
}

/// Executes fixture sets against a pair of backends.
pub struct FixtureVerifier<'a> {
    strings: &'a dyn BoundedStrings,
    trig: &'a dyn Trigonometry,
}

impl<'a> FixtureVerifier<'a> {
    #[must_use]
    pub fn new(strings: &'a dyn BoundedStrings, trig: &'a dyn Trigonometry) -> Self {
        Self { strings, trig }
    }

    /// Run all cases of one set.
    #[must_use]
    pub fn run(&self, fixture_set: &FixtureSet) -> Vec<VerificationResult> {
        fixture_set
            .cases
            .iter()
            .map(|case| self.verify_case(&fixture_set.family, case))
            .collect()
    }

    /// Run every set and summarize.
    #[must_use]
    pub fn run_all(&self, fixture_sets: &[FixtureSet]) -> VerificationSummary {
        let results = fixture_sets.iter().flat_map(|set| self.run(set)).collect();
        VerificationSummary::from_results(results)
    }

    fn verify_case(&self, family: &str, case: &FixtureCase) -> VerificationResult {
        let executed =
            execute_fixture_case(self.strings, self.trig, &case.function, &case.inputs);
        let actual = match executed {
            Ok(output) => output,
            Err(err) => format!("unsupported={err}"),
        };
        let passed = outputs_match(&case.function, &case.expected_output, &actual);
        let diff = (!passed).then(|| diff::render_diff(&case.expected_output, &actual));
        VerificationResult {
            case_name: format!("{family}/{}", case.name),
            function: case.function.clone(),
            spec_section: case.spec_section.clone(),
            passed,
            expected: case.expected_output.clone(),
            actual,
            diff,
        }
    }
}
