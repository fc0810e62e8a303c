//! Fixture execution: turn a fixture's JSON inputs into a backend call and
//! render the observable result as text.
//!
//! Output forms:
//! - `strlcpy` / `strlcat`: `ret=<n> dest=<string before first NUL>`
//! - `tan`: the result as a decimal, or `nan` / `inf` / `-inf`

use std::f64::consts::{FRAC_PI_2, FRAC_PI_3, FRAC_PI_4, PI};

use serde::Deserialize;

use libcheck_core::string::strlen;

use crate::assert::{DOUBLE_PRECISION, doubles_within};
use crate::backend::{BoundedStrings, Trigonometry};
use crate::error::HarnessError;

#[derive(Debug, Deserialize)]
struct StringCallInputs {
    /// Initial string content of the destination buffer.
    dest: String,
    /// Capacity of the destination buffer in bytes.
    dest_len: usize,
    src: String,
    /// Size argument passed to the function.
    size: usize,
    /// Byte filling the buffer past the initial string; NUL when absent.
    #[serde(default)]
    fill: Option<char>,
}

impl StringCallInputs {
    fn build_dest(&self, function: &str) -> Result<Vec<u8>, HarnessError> {
        let content = self.dest.as_bytes();
        if content.len() > self.dest_len {
            return Err(HarnessError::invalid_input(
                function,
                format!(
                    "dest of {} bytes does not fit dest_len {}",
                    content.len(),
                    self.dest_len
                ),
            ));
        }
        let fill = match self.fill {
            None => 0,
            Some(c) if c.is_ascii() => c as u8,
            Some(c) => {
                return Err(HarnessError::invalid_input(
                    function,
                    format!("fill '{c}' is not ASCII"),
                ));
            }
        };
        let mut buf = vec![fill; self.dest_len];
        buf[..content.len()].copy_from_slice(content);
        if content.len() < self.dest_len {
            buf[content.len()] = 0;
        }
        Ok(buf)
    }

    fn src_bytes(&self) -> Vec<u8> {
        let mut src = self.src.as_bytes().to_vec();
        src.push(0);
        src
    }
}

#[derive(Debug, Deserialize)]
struct TanInputs {
    x: serde_json::Value,
}

/// Execute one fixture case and return its textual output.
pub fn execute_fixture_case(
    strings: &dyn BoundedStrings,
    trig: &dyn Trigonometry,
    function: &str,
    inputs: &serde_json::Value,
) -> Result<String, HarnessError> {
    match function {
        "strlcpy" | "strlcat" => {
            let call: StringCallInputs = serde_json::from_value(inputs.clone())
                .map_err(|e| HarnessError::invalid_input(function, e.to_string()))?;
            let mut dest = call.build_dest(function)?;
            let src = call.src_bytes();
            let ret = if function == "strlcpy" {
                strings.strlcpy(&mut dest, &src, call.size)
            } else {
                strings.strlcat(&mut dest, &src, call.size)
            };
            let text = String::from_utf8_lossy(&dest[..strlen(&dest)]);
            Ok(format!("ret={ret} dest={text}"))
        }
        "tan" => {
            let call: TanInputs = serde_json::from_value(inputs.clone())
                .map_err(|e| HarnessError::invalid_input(function, e.to_string()))?;
            let x = match &call.x {
                serde_json::Value::Number(n) => n.as_f64(),
                serde_json::Value::String(s) => parse_double(s),
                _ => None,
            }
            .ok_or_else(|| HarnessError::invalid_input(function, format!("bad x: {}", call.x)))?;
            Ok(format_double(trig.tan(x)))
        }
        other => Err(HarnessError::UnknownFunction(other.to_string())),
    }
}

/// Compare expected and actual output for `function`.
///
/// `tan` results match within the relative double precision; everything else
/// must match exactly.
#[must_use]
pub fn outputs_match(function: &str, expected: &str, actual: &str) -> bool {
    if function != "tan" {
        return expected == actual;
    }
    match (parse_double(expected), parse_double(actual)) {
        (Some(e), Some(a)) => doubles_within(e * DOUBLE_PRECISION, e, a),
        _ => expected == actual,
    }
}

/// Parse a decimal literal or one of the symbolic constants
/// `pi`, `pi/2`, `pi/3`, `pi/4` (optionally negated), `nan`, `inf`.
#[must_use]
pub fn parse_double(raw: &str) -> Option<f64> {
    let s = raw.trim().to_ascii_lowercase();
    let (negative, body) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s.as_str()),
    };
    let magnitude = match body {
        "nan" => f64::NAN,
        "inf" | "infinity" => f64::INFINITY,
        "pi" => PI,
        "pi/2" => FRAC_PI_2,
        "pi/3" => FRAC_PI_3,
        "pi/4" => FRAC_PI_4,
        other => other.parse::<f64>().ok()?,
    };
    Some(if negative { -magnitude } else { magnitude })
}

/// Render a double for fixture output.
#[must_use]
pub fn format_double(value: f64) -> String {
    if value.is_nan() {
        "nan".to_string()
    } else if value.is_infinite() {
        let text = if value.is_sign_negative() { "-inf" } else { "inf" };
        text.to_string()
    } else {
        format!("{value}")
    }
}
