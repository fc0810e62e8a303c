//! Runner configuration.
//!
//! Values come from the CLI; environment variables fill in whatever the
//! command line leaves unset:
//! - `LIBCHECK_GROUP`: substring filter on group names
//! - `LIBCHECK_LOG`: JSONL structured log path
//! - `LIBCHECK_VERBOSE`: `1`/`true`/`yes` for per-case output

use std::path::PathBuf;

pub const ENV_GROUP: &str = "LIBCHECK_GROUP";
pub const ENV_LOG: &str = "LIBCHECK_LOG";
pub const ENV_VERBOSE: &str = "LIBCHECK_VERBOSE";

/// Which cases to run and how to report them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    /// Only groups whose name contains this substring.
    pub group_filter: Option<String>,
    /// Only cases whose name contains this substring.
    pub name_filter: Option<String>,
    /// Number of passes over the registry (at least 1).
    pub repeat: u32,
    /// Print one line per case instead of progress dots.
    pub verbose: bool,
    /// Structured JSONL log destination.
    pub log_path: Option<PathBuf>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            group_filter: None,
            name_filter: None,
            repeat: 1,
            verbose: false,
            log_path: None,
        }
    }
}

impl RunConfig {
    /// Defaults overlaid with the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overlaid with values from `lookup`.
    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        Self {
            group_filter: non_empty(ENV_GROUP),
            log_path: non_empty(ENV_LOG).map(PathBuf::from),
            verbose: non_empty(ENV_VERBOSE).is_some_and(|v| parse_flag(&v)),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_group_filter(mut self, filter: impl Into<String>) -> Self {
        self.group_filter = Some(filter.into());
        self
    }

    #[must_use]
    pub fn with_name_filter(mut self, filter: impl Into<String>) -> Self {
        self.name_filter = Some(filter.into());
        self
    }

    #[must_use]
    pub fn with_repeat(mut self, repeat: u32) -> Self {
        self.repeat = repeat.max(1);
        self
    }

    #[must_use]
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    #[must_use]
    pub fn with_log_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.log_path = Some(path.into());
        self
    }

    /// Whether the group passes the group filter.
    #[must_use]
    pub fn matches_group(&self, group: &str) -> bool {
        self.group_filter
            .as_deref()
            .is_none_or(|filter| group.contains(filter))
    }

    /// Whether a case passes both filters.
    #[must_use]
    pub fn matches(&self, group: &str, case: &str) -> bool {
        self.matches_group(group)
            && self
                .name_filter
                .as_deref()
                .is_none_or(|filter| case.contains(filter))
    }
}

fn parse_flag(raw: &str) -> bool {
    matches!(
        raw.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
