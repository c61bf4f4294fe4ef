//! Turns a one-line expression like `12 * -3` into a [Testcase], for `--eval`

use anyhow::{anyhow, Result};
use serde_json::json;

use std::time::Duration;

use crate::common::run_with_timeout;
use crate::settings::Settings;

use super::{run_testcase, Action, Testcase, TIMEOUT};

/// Parse `A OP B` or a lone `A`, with the parts separated by whitespace.
///
/// | `OP`  | action |
/// |-------|--------|
/// | `+`   | add    |
/// | `-`   | sub    |
/// | `*`   | mul    |
/// | `/`   | div    |
/// | `%`   | rem    |
/// | `**`  | pow    |
/// | `<=>` | cmp    |
/// | `==`  | eq     |
///
/// A lone operand is normalized.
pub fn parse(expression: &str) -> Result<Testcase> {
    let parts: Vec<&str> = expression.split_whitespace().collect();
    match parts.as_slice() {
        [a] => Ok(Testcase::new(Action::Normalize, json!({ "a": a }))),
        [a, op, b] => {
            let action = match *op {
                "+" => Action::Add,
                "-" => Action::Sub,
                "*" => Action::Mul,
                "/" => Action::Div,
                "%" => Action::Rem,
                "**" => Action::Pow,
                "<=>" => Action::Cmp,
                "==" => Action::Eq,
                other => return Err(anyhow!("unknown operator: {other:?}")),
            };
            let arguments = if action == Action::Pow {
                let exp: u32 = b
                    .parse::<u32>()
                    .map_err(|e| anyhow!("exponent {b:?} is not a u32: {e}"))?;
                json!({ "a": a, "exp": exp })
            } else {
                json!({ "a": a, "b": b })
            };
            Ok(Testcase::new(action, arguments))
        }
        _ => Err(anyhow!(
            "expected `A OP B` or `A`, separated by spaces, got {expression:?}"
        )),
    }
}

/// Parse and solve an expression, returning the result as text.
///
/// Gives up after [TIMEOUT], like the testcases of a challenge definition.
pub fn eval(expression: &str, settings: Settings) -> Result<String> {
    eval_with_timeout(expression, settings, TIMEOUT)
}

pub fn eval_with_timeout(
    expression: &str,
    settings: Settings,
    timeout: Duration,
) -> Result<String> {
    let testcase = parse(expression)?;
    let res = run_with_timeout(timeout, move || run_testcase(&testcase, settings))
        .ok_or_else(|| anyhow!("gave up evaluating {expression:?} after {timeout:?}"))??;
    Ok(match res {
        serde_json::Value::String(s) => s,
        other => other.to_string(),
    })
}

#[cfg(test)]
mod test {
    use super::*;

    fn ev(s: &str) -> String {
        eval(s, Settings::default()).expect("could not evaluate")
    }

    #[test]
    fn test_expr_eval() {
        assert_eq!(ev("123 + 77"), "200");
        assert_eq!(ev("-5 - -10"), "5");
        assert_eq!(ev("123 * -4"), "-492");
        assert_eq!(ev("  2   **  64 "), "18446744073709551616");
        assert_eq!(ev("-7 <=> 3"), "less");
        assert_eq!(ev("10 == 010"), "true");
        assert_eq!(ev("-0000"), "0");
    }

    #[test]
    fn test_expr_errors() {
        let s = Settings::default();
        assert!(eval("", s).is_err());
        assert!(eval("1 +", s).is_err());
        assert!(eval("1 ^ 2", s).is_err());
        assert!(eval("1+2", s).is_err());
        assert!(eval("2 ** -1", s).is_err());
        assert!(eval("7 / 2", s).is_err());
        assert!(eval("1 + 2 + 3", s).is_err());
    }

    #[test]
    fn test_expr_eval_gives_up() {
        let r = eval_with_timeout(
            "2 ** 4294967295",
            Settings::default(),
            Duration::from_millis(50),
        );
        let e = r.expect_err("should not have finished");
        assert!(e.to_string().starts_with("gave up evaluating"), "{e}");
    }

    #[test]
    fn test_expr_parse() {
        let t = parse("3 % 2").expect("could not parse");
        assert_eq!(t.action, Action::Rem);
        assert_eq!(t.arguments, json!({"a": "3", "b": "2"}));
    }
}
