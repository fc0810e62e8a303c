//! Reference vector capture.
//!
//! Builds the canonical fixture sets for each function family. Expected
//! outputs are literals, not computed by a backend, so the sets can be
//! checked into `tests/conformance/fixtures/` and replayed against any
//! implementation with `harness verify`.

use serde_json::json;

use crate::fixtures::{FIXTURE_VERSION, FixtureCase, FixtureSet};

/// Function families with reference vectors.
pub const FAMILIES: [&str; 3] = ["strlcpy", "strlcat", "tan"];

fn case(
    name: &str,
    function: &str,
    spec_section: &str,
    inputs: serde_json::Value,
    expected: &str,
) -> FixtureCase {
    FixtureCase {
        name: name.to_string(),
        function: function.to_string(),
        spec_section: spec_section.to_string(),
        inputs,
        expected_output: expected.to_string(),
    }
}

fn strlcpy_cases() -> Vec<FixtureCase> {
    // (name, clause, src, size, expected)
    let table = [
        ("fullcopy", "strlcpy exact fit", "abcd", 5, "ret=4 dest=abcd"),
        ("shorter", "strlcpy truncation", "abcd", 3, "ret=4 dest=ab"),
        ("short_source", "strlcpy short source", "ab", 3, "ret=2 dest=ab"),
        ("longer", "strlcpy short source", "abc", 5, "ret=3 dest=abc"),
        ("onelength", "strlcpy size one", "abcd", 1, "ret=4 dest="),
        ("zerolength", "strlcpy size zero", "abcd", 0, "ret=4 dest=xxxx"),
    ];
    table
        .into_iter()
        .map(|(name, clause, src, size, expected)| {
            let inputs = json!({"dest": "xxxx", "dest_len": 5, "src": src, "size": size});
            case(name, "strlcpy", clause, inputs, expected)
        })
        .collect()
}

fn strlcat_cases() -> Vec<FixtureCase> {
    // (name, clause, dest prefix, size, expected), appending "defgh"
    let table = [
        ("fullconcat_part", "strlcat fits", "klm", 12, "ret=8 dest=klmdefgh"),
        ("exact_fit", "strlcat exact fit", "klmnop", 12, "ret=11 dest=klmnopdefgh"),
        ("partconcat_overflow", "strlcat truncation", "klmnopqr", 12, "ret=13 dest=klmnopqrdef"),
        ("capacity_below_buffer", "strlcat truncation", "klm", 6, "ret=8 dest=klmde"),
        ("onelength", "strlcat size below prefix", "klmnop", 1, "ret=6 dest=klmnop"),
        ("zerolength", "strlcat size zero", "klmnop", 0, "ret=5 dest=klmnop"),
    ];
    let mut cases = vec![case(
        "fullconcat_empty",
        "strlcat",
        "strlcat empty destination",
        json!({"dest": "", "dest_len": 12, "src": "abc", "size": 12}),
        "ret=3 dest=abc",
    )];
    cases.extend(table.into_iter().map(|(name, clause, dest, size, expected)| {
        let inputs = json!({
            "dest": dest,
            "dest_len": 12,
            "src": "defgh",
            "size": size,
            "fill": "x"
        });
        case(name, "strlcat", clause, inputs, expected)
    }));
    cases
}

fn tan_cases() -> Vec<FixtureCase> {
    // (name, clause, x, expected)
    let table = [
        ("zero", "tan exact points", json!(0.0), "0"),
        ("minus_pi_4", "tan exact points", json!("-pi/4"), "-1"),
        ("pi_3", "tan exact points", json!("pi/3"), "1.732050807569"),
        ("left_boundary", "tan near asymptote", json!("-pi/2"), "-1.633123935319537e16"),
        ("right_boundary", "tan near asymptote", json!("pi/2"), "1.633123935319537e16"),
        ("nan", "tan domain error", json!("nan"), "nan"),
        ("inf", "tan domain error", json!("inf"), "nan"),
        ("minus_inf", "tan domain error", json!("-inf"), "nan"),
    ];
    table
        .into_iter()
        .map(|(name, clause, x, expected)| case(name, "tan", clause, json!({ "x": x }), expected))
        .collect()
}

/// Reference cases for `family`, if known.
#[must_use]
pub fn reference_cases(family: &str) -> Option<Vec<FixtureCase>> {
    match family {
        "strlcpy" => Some(strlcpy_cases()),
        "strlcat" => Some(strlcat_cases()),
        "tan" => Some(tan_cases()),
        _ => None,
    }
}

/// All reference fixture sets, stamped with `captured_at`.
#[must_use]
pub fn capture_fixture_sets(captured_at: &str) -> Vec<FixtureSet> {
    FAMILIES
        .iter()
        .filter_map(|family| {
            reference_cases(family).map(|cases| FixtureSet {
                version: FIXTURE_VERSION.to_string(),
                family: (*family).to_string(),
                captured_at: captured_at.to_string(),
                cases,
            })
        })
        .collect()
}
