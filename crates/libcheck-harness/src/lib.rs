//! Conformance testing harness for libcheck.
//!
//! This crate provides:
//! - An xUnit-style harness: named groups of cases over a per-case fixture,
//!   assertion helpers, and a runner with aggregate pass/fail accounting
//! - The conformance suites for `strlcpy`, `strlcat` and `tan`
//! - Fixture verify: run JSON reference vectors against a backend
//! - Structured JSONL logging and human/machine-readable reports

#![forbid(unsafe_code)]

pub mod assert;
pub mod backend;
pub mod capture;
pub mod config;
pub mod diff;
pub mod error;
pub mod fixture_exec;
pub mod fixtures;
pub mod group;
pub mod report;
pub mod runner;
pub mod structured_log;
pub mod suites;
pub mod verify;

pub use assert::{CaseFailure, CaseResult};
pub use backend::{BoundedStrings, CoreBackend, Trigonometry};
pub use config::RunConfig;
pub use error::HarnessError;
pub use fixtures::{FixtureCase, FixtureSet};
pub use group::{Group, Registry, TestGroup};
pub use report::{ConformanceReport, SuiteReport};
pub use runner::{CaseOutcome, CaseStatus, RunSummary, Runner};
pub use verify::{VerificationResult, VerificationSummary};
