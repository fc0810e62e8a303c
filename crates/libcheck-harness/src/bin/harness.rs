//! CLI entrypoint for the libcheck conformance harness.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use libcheck_harness::backend::CoreBackend;
use libcheck_harness::report::{ReportFormat, SuiteReport, trailer};
use libcheck_harness::structured_log::{ArtifactIndex, LogEmitter, now_utc};
use libcheck_harness::verify::FixtureVerifier;
use libcheck_harness::{ConformanceReport, RunConfig, Runner, capture, fixtures, suites};

const SUITE_NAME: &str = "libcheck";

/// Conformance tooling for bounded string and tangent functions.
#[derive(Debug, Parser)]
#[command(name = "libcheck-harness")]
#[command(about = "Conformance testing harness for strlcpy, strlcat and tan")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Run the conformance suites.
    Run {
        /// Only groups whose name contains this substring (env: LIBCHECK_GROUP).
        #[arg(long, short = 'g')]
        group: Option<String>,
        /// Only cases whose name contains this substring.
        #[arg(long, short = 'n')]
        name: Option<String>,
        /// Run the selected cases this many times.
        #[arg(long, short = 'r', default_value_t = 1)]
        repeat: u32,
        /// Print one line per case (env: LIBCHECK_VERBOSE).
        #[arg(long, short = 'v')]
        verbose: bool,
        /// Structured JSONL log path (env: LIBCHECK_LOG).
        #[arg(long)]
        log: Option<PathBuf>,
        /// Write a report to this path.
        #[arg(long)]
        report: Option<PathBuf>,
        /// Report format: `text`, `markdown` or `json`.
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// List every registered case as `group.case`.
    List,
    /// Write the reference vectors as fixture JSON files.
    Capture {
        /// Output directory for fixture JSON files.
        #[arg(long)]
        output: PathBuf,
        /// Optional fixed timestamp for deterministic output.
        #[arg(long)]
        timestamp: Option<String>,
    },
    /// Verify the core implementation against fixture files.
    Verify {
        /// Directory containing fixture JSON files.
        #[arg(long)]
        fixture: PathBuf,
        /// Output report path (`.json` for JSON, markdown otherwise).
        #[arg(long)]
        report: Option<PathBuf>,
        /// Optional fixed timestamp string for deterministic report generation.
        #[arg(long)]
        timestamp: Option<String>,
    },
}

fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Run {
            group,
            name,
            repeat,
            verbose,
            log,
            report,
            format,
        } => {
            let format = ReportFormat::from_str_loose(&format).ok_or_else(|| {
                format!("Unsupported format '{format}', expected text|markdown|json")
            })?;

            let mut config = RunConfig::from_env().with_repeat(repeat);
            if let Some(group) = group {
                config = config.with_group_filter(group);
            }
            if let Some(name) = name {
                config = config.with_name_filter(name);
            }
            if verbose {
                config = config.with_verbose(true);
            }
            if let Some(log) = log {
                config = config.with_log_path(log);
            }

            let run_id = run_id();
            let log_path = config.log_path.clone();
            let mut runner = Runner::new(config);
            if let Some(path) = &log_path {
                runner = runner.with_log(LogEmitter::to_file(path, SUITE_NAME, &run_id)?);
            }

            let registry = suites::default_registry();
            let summary = {
                let stdout = std::io::stdout();
                let mut out = stdout.lock();
                let summary = runner.run_with_output(&registry, &mut out)?;
                write!(out, "{}", trailer(&summary))?;
                summary
            };
            drop(runner);

            let exit = summary.exit_code();
            if let Some(path) = report {
                let report = SuiteReport {
                    title: "libcheck conformance run".to_string(),
                    timestamp: now_utc(),
                    summary,
                };
                write_file(&path, &report.render(format))?;

                let mut index = ArtifactIndex::new(&run_id);
                index.add_file(&path, "suite_report")?;
                if let Some(log) = &log_path {
                    index.add_file(log, "structured_log")?;
                }
                let index_path = path.with_extension("index.json");
                write_file(&index_path, &index.to_json()?)?;
                eprintln!(
                    "Report written to {} (index {})",
                    path.display(),
                    index_path.display()
                );
            }
            return Ok(exit_code(exit));
        }
        Command::List => {
            let registry = suites::default_registry();
            for group in registry.groups() {
                for case in group.case_names() {
                    println!("{}.{case}", group.name());
                }
            }
        }
        Command::Capture { output, timestamp } => {
            let captured_at = timestamp.unwrap_or_else(now_utc);
            std::fs::create_dir_all(&output)?;
            for set in capture::capture_fixture_sets(&captured_at) {
                let path = output.join(set.file_name());
                write_file(&path, &set.to_json()?)?;
                eprintln!("Captured {} cases to {}", set.cases.len(), path.display());
            }
        }
        Command::Verify {
            fixture,
            report,
            timestamp,
        } => {
            eprintln!("Verifying against fixtures in {}", fixture.display());
            let (fixture_sets, skipped) = fixtures::load_dir(&fixture)?;
            for (path, err) in skipped {
                eprintln!("Skipping {}: {err}", path.display());
            }

            let summary = FixtureVerifier::new(&CoreBackend, &CoreBackend).run_all(&fixture_sets);
            let all_passed = summary.all_passed();
            let conformance = ConformanceReport {
                title: "libcheck fixture verification".to_string(),
                timestamp: timestamp.unwrap_or_else(now_utc),
                summary,
            };

            match report {
                Some(path) => {
                    let is_json = path.extension().and_then(|s| s.to_str()) == Some("json");
                    let body = if is_json {
                        conformance.to_json()
                    } else {
                        conformance.to_markdown()
                    };
                    write_file(&path, &body)?;
                    eprintln!("Report written to {}", path.display());
                }
                None => print!("{}", conformance.to_markdown()),
            }
            eprintln!(
                "Verified {} cases: {} passed, {} failed",
                conformance.summary.total, conformance.summary.passed, conformance.summary.failed
            );
            return Ok(exit_code(i32::from(!all_passed)));
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn run_id() -> String {
    let secs = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    format!("run-{secs}")
}

fn write_file(path: &Path, body: &str) -> std::io::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, body)
}

fn exit_code(code: i32) -> ExitCode {
    ExitCode::from(u8::try_from(code).unwrap_or(1))
}
