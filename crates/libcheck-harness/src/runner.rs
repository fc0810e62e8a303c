//! Test execution engine.
//!
//! The [`Runner`] walks every registered group in order, runs each selected
//! case in isolation and records one [`CaseOutcome`] per case. A panicking case
//! is caught and reported as [`CaseStatus::Error`]; the run continues.

use std::io::Write;
use std::panic::{self, AssertUnwindSafe, PanicHookInfo, catch_unwind};
use std::time::Instant;

use serde::{Deserialize, Serialize};

use crate::assert::CaseFailure;
use crate::config::RunConfig;
use crate::error::HarnessError;
use crate::group::{Group, Registry};
use crate::structured_log::{LogEmitter, LogEntry, LogLevel};

/// Result category of one case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaseStatus {
    Pass,
    Fail,
    Ignore,
    Error,
}

impl CaseStatus {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Pass => "PASS",
            Self::Fail => "FAIL",
            Self::Ignore => "IGNORE",
            Self::Error => "ERROR",
        }
    }

    /// Whether the case counts against the run.
    #[must_use]
    pub fn is_problem(self) -> bool {
        matches!(self, Self::Fail | Self::Error)
    }
}

/// Outcome of one executed case.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaseOutcome {
    pub group: String,
    pub case: String,
    pub status: CaseStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub latency_ns: u64,
}

/// Aggregate result of a run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RunSummary {
    pub tests: usize,
    pub failures: usize,
    pub ignored: usize,
    pub errors: usize,
    pub outcomes: Vec<CaseOutcome>,
}

impl RunSummary {
    /// Build a summary from per-case outcomes.
    #[must_use]
    pub fn from_outcomes(outcomes: Vec<CaseOutcome>) -> Self {
        let count = |status| outcomes.iter().filter(|o| o.status == status).count();
        Self {
            tests: outcomes.len(),
            failures: count(CaseStatus::Fail),
            ignored: count(CaseStatus::Ignore),
            errors: count(CaseStatus::Error),
            outcomes,
        }
    }

    /// True when no case failed or errored. Ignored cases do not count against a run.
    #[must_use]
    pub fn all_passed(&self) -> bool {
        self.failures == 0 && self.errors == 0
    }

    /// Process exit code: `0` when [`all_passed`](Self::all_passed), `1` otherwise.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        i32::from(!self.all_passed())
    }

    /// Outcomes that did not pass or get ignored.
    pub fn problems(&self) -> impl Iterator<Item = &CaseOutcome> {
        self.outcomes.iter().filter(|o| o.status.is_problem())
    }
}

/// Runs registered groups according to a [`RunConfig`].
pub struct Runner {
    config: RunConfig,
    log: Option<LogEmitter>,
}

impl Runner {
    #[must_use]
    pub fn new(config: RunConfig) -> Self {
        Self { config, log: None }
    }

    /// Attach a structured log emitter.
    #[must_use]
    pub fn with_log(mut self, emitter: LogEmitter) -> Self {
        self.log = Some(emitter);
        self
    }

    /// Run silently.
    pub fn run(&mut self, registry: &Registry) -> Result<RunSummary, HarnessError> {
        self.run_with_output(registry, &mut std::io::sink())
    }

    /// Run, streaming progress to `out`.
    ///
    /// Verbose mode prints `TEST(group, case) STATUS` per case; otherwise a
    /// `.` per pass and `!` per ignore, with full lines only for problems.
    pub fn run_with_output(
        &mut self,
        registry: &Registry,
        out: &mut dyn Write,
    ) -> Result<RunSummary, HarnessError> {
        let started = Instant::now();
        self.log_event(LogEntry::new("", LogLevel::Info, "run_start").with_details(
            serde_json::json!({
                "groups": registry.len(),
                "cases": registry.case_count(),
                "repeat": self.config.repeat,
            }),
        ))?;

        let mut outcomes = Vec::new();
        let silenced = SilencedPanics::install();
        for _ in 0..self.config.repeat.max(1) {
            for group in registry.groups() {
                if !self.config.matches_group(group.name()) {
                    continue;
                }
                for (index, case) in group.case_names().into_iter().enumerate() {
                    if !self.config.matches(group.name(), case) {
                        continue;
                    }
                    let outcome = execute_case(group, index, case);
                    self.print_outcome(out, &outcome)?;
                    self.log_outcome(&outcome)?;
                    outcomes.push(outcome);
                }
            }
        }
        drop(silenced);
        if !self.config.verbose {
            writeln!(out)?;
        }

        let summary = RunSummary::from_outcomes(outcomes);
        let elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
        self.log_event(
            LogEntry::new("", LogLevel::Info, "run_end")
                .with_duration_ms(elapsed_ms)
                .with_exit_code(summary.exit_code())
                .with_details(serde_json::json!({
                    "tests": summary.tests,
                    "failures": summary.failures,
                    "ignored": summary.ignored,
                    "errors": summary.errors,
                })),
        )?;
        if let Some(log) = self.log.as_mut() {
            log.flush()?;
        }
        Ok(summary)
    }

    fn print_outcome(&self, out: &mut dyn Write, outcome: &CaseOutcome) -> std::io::Result<()> {
        let line = || {
            let mut line = format!(
                "TEST({}, {}) {}",
                outcome.group,
                outcome.case,
                outcome.status.label()
            );
            if let Some(message) = &outcome.message {
                line.push_str(": ");
                line.push_str(message);
            }
            line
        };
        match (self.config.verbose, outcome.status) {
            (true, _) => writeln!(out, "{}", line()),
            (false, CaseStatus::Pass) => write!(out, "."),
            (false, CaseStatus::Ignore) => write!(out, "!"),
            (false, _) => writeln!(out, "\n{}", line()),
        }
    }

    fn log_outcome(&mut self, outcome: &CaseOutcome) -> std::io::Result<()> {
        let level = match outcome.status {
            CaseStatus::Pass => LogLevel::Info,
            CaseStatus::Ignore => LogLevel::Warn,
            CaseStatus::Fail | CaseStatus::Error => LogLevel::Error,
        };
        let mut entry = LogEntry::new("", level, "case_result")
            .with_case(&outcome.group, &outcome.case)
            .with_outcome(outcome.status)
            .with_latency_ns(outcome.latency_ns);
        if let Some(message) = &outcome.message {
            entry = entry.with_details(serde_json::json!({ "message": message }));
        }
        self.log_event(entry)
    }

    fn log_event(&mut self, entry: LogEntry) -> std::io::Result<()> {
        match self.log.as_mut() {
            Some(log) => log.emit_entry(entry).map(|_| ()),
            None => Ok(()),
        }
    }
}

type PanicHook = Box<dyn Fn(&PanicHookInfo<'_>) + Sync + Send + 'static>;

/// Swaps in a silent panic hook while alive, restoring the previous one on drop.
/// Caught case panics surface only as [`CaseStatus::Error`] outcomes.
struct SilencedPanics {
    previous: Option<PanicHook>,
}

impl SilencedPanics {
    fn install() -> Self {
        let previous = panic::take_hook();
        panic::set_hook(Box::new(|_| {}));
        Self {
            previous: Some(previous),
        }
    }
}

impl Drop for SilencedPanics {
    fn drop(&mut self) {
        if std::thread::panicking() {
            return;
        }
        if let Some(previous) = self.previous.take() {
            panic::set_hook(previous);
        }
    }
}

fn execute_case(group: &dyn Group, index: usize, case: &str) -> CaseOutcome {
    let started = Instant::now();
    let result = catch_unwind(AssertUnwindSafe(|| group.run_case(index)));
    let latency_ns = u64::try_from(started.elapsed().as_nanos()).unwrap_or(u64::MAX);

    let (status, message) = match result {
        Ok(Ok(())) => (CaseStatus::Pass, None),
        Ok(Err(failure @ CaseFailure::Ignored(_))) => {
            (CaseStatus::Ignore, Some(failure.to_string()))
        }
        Ok(Err(failure)) => (CaseStatus::Fail, Some(failure.to_string())),
        Err(payload) => (CaseStatus::Error, Some(panic_message(payload.as_ref()))),
    };

    CaseOutcome {
        group: group.name().to_string(),
        case: case.to_string(),
        status,
        message,
        latency_ns,
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        format!("panicked: {s}")
    } else if let Some(s) = payload.downcast_ref::<String>() {
        format!("panicked: {s}")
    } else {
        "panicked".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert::{CaseResult, assert_equal_int, fail, ignore};
    use crate::group::TestGroup;

    fn passes(_: &mut ()) -> CaseResult {
        assert_equal_int(1, 1)
    }

    fn fails(_: &mut ()) -> CaseResult {
        fail("deliberate")
    }

    fn skipped(_: &mut ()) -> CaseResult {
        ignore("not applicable")
    }

    fn panics(_: &mut ()) -> CaseResult {
        panic!("boom")
    }

    fn mixed_registry() -> Registry {
        let mut registry = Registry::new();
        registry.register(
            TestGroup::new("mixed", || ())
                .case("passes", passes)
                .case("fails", fails)
                .case("skipped", skipped)
                .case("panics", panics)
                .case("passes_again", passes),
        );
        registry
    }

    #[test]
    fn failures_do_not_abort_siblings() {
        let summary = Runner::new(RunConfig::default())
            .run(&mixed_registry())
            .unwrap();
        assert_eq!(summary.tests, 5);
        assert_eq!(summary.failures, 1);
        assert_eq!(summary.ignored, 1);
        assert_eq!(summary.errors, 1);
        assert_eq!(summary.outcomes[4].status, CaseStatus::Pass);
        assert_eq!(summary.outcomes[3].message.as_deref(), Some("panicked: boom"));
        assert_eq!(summary.exit_code(), 1);
        assert_eq!(summary.problems().count(), 2);
    }

    #[test]
    fn filters_and_repeat_select_cases() {
        let config = RunConfig::default().with_name_filter("passes").with_repeat(2);
        let summary = Runner::new(config).run(&mixed_registry()).unwrap();
        assert_eq!(summary.tests, 4);
        assert!(summary.all_passed());
        assert_eq!(summary.exit_code(), 0);
    }

    #[test]
    fn verbose_output_names_every_case() {
        let mut out = Vec::new();
        let config = RunConfig::default().with_name_filter("fails").with_verbose(true);
        Runner::new(config)
            .run_with_output(&mixed_registry(), &mut out)
            .unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text, "TEST(mixed, fails) FAIL: deliberate\n");
    }

    #[test]
    fn quiet_output_uses_progress_marks() {
        let mut out = Vec::new();
        Runner::new(RunConfig::default())
            .run_with_output(&mixed_registry(), &mut out)
            .unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with('.'));
        assert!(text.contains("TEST(mixed, fails) FAIL: deliberate"));
        assert!(text.contains('!'));
    }
}
