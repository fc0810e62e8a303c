//! Assertion helpers.
//!
//! Assertions return [`CaseResult`] rather than panicking, so a case chains
//! them with `?` and the first mismatch ends only that case. Sibling cases
//! keep running.

use thiserror::Error;

use libcheck_core::string::strlen;

/// Relative precision used by [`assert_equal_double`].
pub const DOUBLE_PRECISION: f64 = 1e-11;

/// Outcome of a single test case body.
pub type CaseResult = Result<(), CaseFailure>;

/// Why a case did not pass.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CaseFailure {
    #[error("expected {expected} was {actual}")]
    ValueMismatch { expected: String, actual: String },
    #[error("expected \"{expected}\" was \"{actual}\"")]
    StringMismatch { expected: String, actual: String },
    #[error("values not within delta {delta:e}: expected {expected:e} was {actual:e}")]
    DoubleMismatch {
        delta: f64,
        expected: f64,
        actual: f64,
    },
    #[error("expected NaN was {actual:e}")]
    NotNan { actual: f64 },
    #[error("{0}")]
    Failed(String),
    #[error("{0}")]
    Ignored(String),
}

impl CaseFailure {
    /// Whether this marks the case as ignored rather than failed.
    #[must_use]
    pub fn is_ignored(&self) -> bool {
        matches!(self, Self::Ignored(_))
    }
}

/// Compare two integer-like values.
pub fn assert_equal_int<T>(expected: T, actual: T) -> CaseResult
where
    T: PartialEq + std::fmt::Display,
{
    if expected == actual {
        Ok(())
    } else {
        Err(CaseFailure::ValueMismatch {
            expected: expected.to_string(),
            actual: actual.to_string(),
        })
    }
}

/// Compare two NUL-terminated strings held in byte buffers.
///
/// Only the bytes before each buffer's first NUL take part.
pub fn assert_equal_string(expected: &[u8], actual: &[u8]) -> CaseResult {
    let expected = &expected[..strlen(expected)];
    let actual = &actual[..strlen(actual)];
    if expected == actual {
        Ok(())
    } else {
        Err(CaseFailure::StringMismatch {
            expected: String::from_utf8_lossy(expected).into_owned(),
            actual: String::from_utf8_lossy(actual).into_owned(),
        })
    }
}

/// Compare two byte buffers in full, terminators and trailing bytes included.
pub fn assert_equal_bytes(expected: &[u8], actual: &[u8]) -> CaseResult {
    if expected == actual {
        Ok(())
    } else {
        Err(CaseFailure::ValueMismatch {
            expected: escape_bytes(expected),
            actual: escape_bytes(actual),
        })
    }
}

/// Whether `actual` lies within `delta` of `expected`.
///
/// Same-signed infinities match, as do two NaNs. Any other NaN or infinite
/// difference does not.
#[must_use]
pub fn doubles_within(delta: f64, expected: f64, actual: f64) -> bool {
    if expected.is_infinite()
        && actual.is_infinite()
        && expected.is_sign_negative() == actual.is_sign_negative()
    {
        return true;
    }
    if expected.is_nan() && actual.is_nan() {
        return true;
    }
    let diff = (actual - expected).abs();
    !(diff.is_nan() || diff.is_infinite() || diff > delta.abs())
}

/// Compare two doubles within an absolute `delta`.
pub fn assert_double_within(delta: f64, expected: f64, actual: f64) -> CaseResult {
    if doubles_within(delta, expected, actual) {
        Ok(())
    } else {
        Err(CaseFailure::DoubleMismatch {
            delta: delta.abs(),
            expected,
            actual,
        })
    }
}

/// Compare two doubles within [`DOUBLE_PRECISION`] relative to `expected`.
///
/// An expected value of exactly zero therefore requires an exact match.
pub fn assert_equal_double(expected: f64, actual: f64) -> CaseResult {
    assert_double_within(expected * DOUBLE_PRECISION, expected, actual)
}

/// Passes when `actual` is NaN, detected by self-inequality.
#[allow(clippy::eq_op)]
pub fn assert_nan(actual: f64) -> CaseResult {
    if actual != actual {
        Ok(())
    } else {
        Err(CaseFailure::NotNan { actual })
    }
}

/// Passes when `condition` holds.
pub fn assert_true(condition: bool, message: &str) -> CaseResult {
    if condition { Ok(()) } else { fail(message) }
}

/// Unconditionally fail the current case.
pub fn fail(message: &str) -> CaseResult {
    Err(CaseFailure::Failed(message.to_string()))
}

/// Stop the current case and report it as ignored.
pub fn ignore(message: &str) -> CaseResult {
    Err(CaseFailure::Ignored(message.to_string()))
}

fn escape_bytes(bytes: &[u8]) -> String {
    let escaped: String = bytes
        .iter()
        .flat_map(|&b| std::ascii::escape_default(b))
        .map(char::from)
        .collect();
    format!("\"{escaped}\"")
}
