//! Fixture loading and management.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::HarnessError;

/// Current fixture schema version.
pub const FIXTURE_VERSION: &str = "v1";

/// A single fixture test case.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixtureCase {
    /// Case identifier.
    pub name: String,
    /// Function being tested (`strlcpy`, `strlcat` or `tan`).
    pub function: String,
    /// Contract clause the case exercises.
    pub spec_section: String,
    /// Input parameters (serialized).
    pub inputs: serde_json::Value,
    /// Expected output in the executor's textual form.
    pub expected_output: String,
}

/// A collection of fixture cases for a function family.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixtureSet {
    /// Schema version.
    pub version: String,
    /// Function family name.
    pub family: String,
    /// UTC timestamp of capture.
    pub captured_at: String,
    /// Individual test cases.
    pub cases: Vec<FixtureCase>,
}

impl FixtureSet {
    /// Load fixture set from JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Serialize fixture set to JSON string.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Load fixture set from a file path.
    pub fn from_file(path: &Path) -> Result<Self, HarnessError> {
        let content = std::fs::read_to_string(path)?;
        Ok(Self::from_json(&content)?)
    }

    /// File name this set is written under, e.g. `strlcpy.v1.json`.
    #[must_use]
    pub fn file_name(&self) -> String {
        format!("{}.{}.json", self.family, self.version)
    }
}

/// A fixture file that could not be loaded, with the reason.
pub type SkippedFixture = (PathBuf, HarnessError);

/// Sorted paths of every `*.json` file directly inside `dir`.
pub fn fixture_paths(dir: &Path) -> Result<Vec<PathBuf>, HarnessError> {
    let mut paths: Vec<PathBuf> = std::fs::read_dir(dir)?
        .filter_map(|entry| entry.ok().map(|entry| entry.path()))
        .filter(|path| path.extension().and_then(|s| s.to_str()) == Some("json"))
        .collect();
    paths.sort();
    Ok(paths)
}

/// Load every fixture set in `dir`.
///
/// Files that fail to parse are returned separately so the caller can report
/// them without aborting the whole load.
pub fn load_dir(dir: &Path) -> Result<(Vec<FixtureSet>, Vec<SkippedFixture>), HarnessError> {
    let mut sets = Vec::new();
    let mut skipped = Vec::new();
    for path in fixture_paths(dir)? {
        match FixtureSet::from_file(&path) {
            Ok(set) => sets.push(set),
            Err(err) => skipped.push((path, err)),
        }
    }
    if sets.is_empty() {
        return Err(HarnessError::NoFixtures(dir.to_path_buf()));
    }
    Ok((sets, skipped))
}
