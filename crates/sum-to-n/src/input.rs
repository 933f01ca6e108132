//! input validation
//!
//! n arrives untyped (a json value, or cli text parsed as json) and is
//! narrowed to a `u64` here. every strategy goes through this first.

use serde_json::{Number, Value};

use crate::{Error, Result};

/// 2^64 as f64, the first integral float that no longer fits a u64
const U64_LIMIT: f64 = 18_446_744_073_709_551_616.0;

/// check that `value` is a whole, non-negative number
///
/// order of checks: type, integrality, sign. so `-1.5` is reported as
/// not an integer, `-1` as negative.
pub fn validate(value: &Value) -> Result<u64> {
    match value {
        Value::Number(number) => validate_number(number),
        _ => Err(Error::NotANumber),
    }
}

/// parse cli/user text as json and validate it
///
/// `"3"` (quoted) is a string and therefore not a number; bare `3` is.
pub fn parse(text: &str) -> Result<u64> {
    let value: Value = serde_json::from_str(text.trim()).map_err(|_| Error::NotANumber)?;
    validate(&value)
}

fn validate_number(number: &Number) -> Result<u64> {
    if let Some(n) = number.as_u64() {
        return Ok(n);
    }
    // integral but not representable as u64 => it fit an i64, so it is negative
    if number.as_i64().is_some() {
        return Err(Error::Negative);
    }

    let float = number.as_f64().ok_or(Error::NotANumber)?;
    if !float.is_finite() {
        return Err(Error::NotANumber);
    }
    if float.fract() != 0.0 {
        return Err(Error::NotAnInteger);
    }
    // -0.0 compares equal to 0.0 and is accepted
    if float < 0.0 {
        return Err(Error::Negative);
    }
    if float >= U64_LIMIT {
        return Err(Error::TooLarge);
    }

    Ok(float as u64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_accepts_whole_numbers() {
        assert_eq!(validate(&json!(0)), Ok(0));
        assert_eq!(validate(&json!(10)), Ok(10));
        assert_eq!(validate(&json!(3.0)), Ok(3));
        assert_eq!(validate(&json!(-0.0)), Ok(0));
        assert_eq!(validate(&json!(u64::MAX)), Ok(u64::MAX));
    }

    #[test]
    fn test_rejects_non_numbers() {
        assert_eq!(validate(&json!("3")), Err(Error::NotANumber));
        assert_eq!(validate(&json!(null)), Err(Error::NotANumber));
        assert_eq!(validate(&json!(true)), Err(Error::NotANumber));
        assert_eq!(validate(&json!([1])), Err(Error::NotANumber));
        assert_eq!(validate(&json!({ "n": 1 })), Err(Error::NotANumber));
    }

    #[test]
    fn test_rejects_fractions_before_sign() {
        assert_eq!(validate(&json!(1.5)), Err(Error::NotAnInteger));
        assert_eq!(validate(&json!(-1.5)), Err(Error::NotAnInteger));
    }

    #[test]
    fn test_rejects_negative() {
        assert_eq!(validate(&json!(-1)), Err(Error::Negative));
        assert_eq!(validate(&json!(-4.0)), Err(Error::Negative));
        assert_eq!(validate(&json!(i64::MIN)), Err(Error::Negative));
    }

    #[test]
    fn test_rejects_huge_floats() {
        assert_eq!(validate(&json!(1e20)), Err(Error::TooLarge));
    }

    #[test]
    fn test_parse_text() {
        assert_eq!(parse("42"), Ok(42));
        assert_eq!(parse(" 7\n"), Ok(7));
        assert_eq!(parse("\"3\""), Err(Error::NotANumber));
        assert_eq!(parse("abc"), Err(Error::NotANumber));
        assert_eq!(parse(""), Err(Error::NotANumber));
        assert_eq!(parse("2.25"), Err(Error::NotAnInteger));
        assert_eq!(parse("-8"), Err(Error::Negative));
    }
}
