//! Helps parse the operands of the JSON challenge definitions and write the results back out

use anyhow::{anyhow, Result};
use decint::BigInteger;
use serde::de::DeserializeOwned;

/// Deserialize the argument `key` into whatever type is needed.
pub fn get_any<T: DeserializeOwned>(args: &serde_json::Value, key: &str) -> Result<T> {
    if args[key].is_null() {
        return Err(anyhow!("argument {key} is missing"));
    }
    let v: T = serde_json::from_value(args[key].clone())
        .inspect_err(|e| eprintln!("! something went wrong when deserializing {key}: {e}"))?;
    Ok(v)
}

/// Get the argument `key` as a [BigInteger].
///
/// Operands are decimal strings or JSON integers of any length. `serde_json` keeps the exact
/// literal of a number, so only fractions and exponents need to be turned away.
pub fn get_bigint(args: &serde_json::Value, key: &str) -> Result<BigInteger> {
    let text: String = match &args[key] {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Number(n) => {
            let literal = n.to_string();
            if literal.contains(['.', 'e', 'E']) {
                return Err(anyhow!("argument {key} is not an integer: {literal}"));
            }
            literal
        }
        serde_json::Value::Null => return Err(anyhow!("argument {key} is missing")),
        other => return Err(anyhow!("argument {key} is not an integer: {other}")),
    };
    BigInteger::new(&text)
        .inspect_err(|e| eprintln!("! could not read argument {key}: {e}"))
        .map_err(|e| anyhow!("argument {key}: {e}"))
}

/// Convert a [BigInteger] to a [serde_json::Value], as canonical decimal string.
#[inline]
pub fn put_bigint(num: &BigInteger) -> serde_json::Value {
    num.to_string().into()
}

#[cfg(test)]
mod test {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_get_bigint_string_and_number() {
        let args = json!({"a": "-123456789012345678901234567890", "b": 42, "c": -7});
        assert_eq!(
            get_bigint(&args, "a").unwrap().to_string(),
            "-123456789012345678901234567890"
        );
        assert_eq!(get_bigint(&args, "b").unwrap(), BigInteger::from(42i64));
        assert_eq!(get_bigint(&args, "c").unwrap(), BigInteger::from(-7i64));
    }

    #[test]
    fn test_get_bigint_large_json_integer() {
        let args: serde_json::Value = serde_json::from_str(
            r#"{"a": 100000000000000000000, "b": -0, "c": -123456789012345678901234}"#,
        )
        .expect("bad json");
        assert_eq!(
            get_bigint(&args, "a").unwrap().to_string(),
            "100000000000000000000"
        );
        let b = get_bigint(&args, "b").unwrap();
        assert!(b.is_zero());
        assert!(!b.is_negative());
        assert_eq!(
            get_bigint(&args, "c").unwrap().to_string(),
            "-123456789012345678901234"
        );
    }

    #[test]
    fn test_get_bigint_rejects_fractions_and_exponents() {
        let args: serde_json::Value =
            serde_json::from_str(r#"{"a": 1e20, "b": 2.0, "c": 1E3, "d": -0.0}"#)
                .expect("bad json");
        for key in ["a", "b", "c", "d"] {
            assert!(get_bigint(&args, key).is_err(), "{key} should be rejected");
        }
    }

    #[test]
    fn test_get_bigint_rejects() {
        let args = json!({"a": "12x", "b": 1.5, "c": [1], "d": "-"});
        assert!(get_bigint(&args, "a").is_err());
        assert!(get_bigint(&args, "b").is_err());
        assert!(get_bigint(&args, "c").is_err());
        assert!(get_bigint(&args, "d").is_err());
        assert!(get_bigint(&args, "missing").is_err());
    }

    #[test]
    fn test_get_any() {
        let args = json!({"exp": 12});
        let exp: u32 = get_any(&args, "exp").unwrap();
        assert_eq!(exp, 12);
        assert!(get_any::<u32>(&args, "nope").is_err());
        assert!(get_any::<u32>(&json!({"exp": -1}), "exp").is_err());
    }

    #[test]
    fn test_put_bigint() {
        assert_eq!(put_bigint(&BigInteger::TEN), json!("10"));
    }
}
