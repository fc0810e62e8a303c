//! Diff rendering for fixture comparison.
//!
//! Outputs of the form `key=value key=value` are compared field by field;
//! anything else falls back to a line diff.

/// Render a text diff between expected and actual output.
#[must_use]
pub fn render_diff(expected: &str, actual: &str) -> String {
    if expected == actual {
        return String::from("[identical]");
    }

    let mut out = String::new();
    out.push_str("--- expected\n");
    out.push_str("+++ actual\n");

    match (parse_fields(expected), parse_fields(actual)) {
        (Some(exp), Some(act)) => {
            for (key, e) in &exp {
                let a = act.iter().find(|(k, _)| k == key).map(|(_, v)| *v);
                if a != Some(*e) {
                    out.push_str(&format!("@@ {key} @@\n-{e}\n"));
                    if let Some(a) = a {
                        out.push_str(&format!("+{a}\n"));
                    }
                }
            }
            for (key, a) in act.iter().filter(|(k, _)| !exp.iter().any(|(ek, _)| ek == k)) {
                out.push_str(&format!("@@ {key} @@\n+{a}\n"));
            }
        }
        _ => {
            let exp: Vec<&str> = expected.lines().collect();
            let act: Vec<&str> = actual.lines().collect();
            for i in 0..exp.len().max(act.len()) {
                let (e, a) = (exp.get(i), act.get(i));
                if e != a {
                    out.push_str(&format!("@@ line {} @@\n", i + 1));
                    if let Some(e) = e {
                        out.push_str(&format!("-{e}\n"));
                    }
                    if let Some(a) = a {
                        out.push_str(&format!("+{a}\n"));
                    }
                }
            }
        }
    }
    out
}

// `ret=4 dest=ab cd` -> [("ret","4"), ("dest","ab cd")]; the last field keeps
// its spaces so string payloads survive.
fn parse_fields(text: &str) -> Option<Vec<(&str, &str)>> {
    let mut fields = Vec::new();
    let mut rest = text;
    while !rest.is_empty() {
        let (key, value_and_rest) = rest.split_once('=')?;
        if key.is_empty() || key.contains(char::is_whitespace) {
            return None;
        }
        let next_key = value_and_rest
            .match_indices(' ')
            .map(|(i, _)| i)
            .find(|&i| {
                value_and_rest[i + 1..]
                    .split_once('=')
                    .is_some_and(|(k, _)| !k.is_empty() && !k.contains(char::is_whitespace))
            });
        match next_key {
            Some(i) => {
                fields.push((key, &value_and_rest[..i]));
                rest = &value_and_rest[i + 1..];
            }
            None => {
                fields.push((key, value_and_rest));
                rest = "";
            }
        }
    }
    if fields.is_empty() { None } else { Some(fields) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_outputs() {
        assert_eq!(render_diff("ret=4 dest=ab", "ret=4 dest=ab"), "[identical]");
    }

    #[test]
    fn field_diff_names_only_changed_fields() {
        let diff = render_diff("ret=13 dest=klmnopqrdef", "ret=13 dest=klmnopqrde");
        assert_eq!(
            diff,
            "--- expected\n+++ actual\n@@ dest @@\n-klmnopqrdef\n+klmnopqrde\n"
        );
    }

    #[test]
    fn field_values_may_contain_spaces() {
        assert_eq!(
            parse_fields("ret=3 dest=a b"),
            Some(vec![("ret", "3"), ("dest", "a b")])
        );
    }

    #[test]
    fn falls_back_to_line_diff() {
        let diff = render_diff("nan", "1.5");
        assert_eq!(diff, "--- expected\n+++ actual\n@@ line 1 @@\n-nan\n+1.5\n");
    }

    #[test]
    fn unsupported_actual_shows_extra_field() {
        let diff = render_diff("ret=1 dest=", "unsupported=unknown function");
        assert!(diff.contains("@@ ret @@\n-1\n"));
        assert!(diff.contains("@@ unsupported @@\n+unknown function\n"));
    }
}
