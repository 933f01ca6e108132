//! # sum-to-n
//!
//! sum of the integers 1 through n, three ways.
//!
//! the input is validated as a whole, non-negative number before any
//! strategy runs; validation failures are distinct [`Error`] kinds.
//!
//! ```rust
//! use serde_json::json;
//! use sum_to_n::{sum_to_n, sum_with, Error, Strategy};
//!
//! assert_eq!(sum_to_n(&json!(10)), Ok(55));
//! assert_eq!(sum_with(&json!(10), Strategy::Fold), Ok(55));
//! assert_eq!(sum_to_n(&json!("3")), Err(Error::NotANumber));
//! ```

pub mod error;
pub mod input;
pub mod strategy;

pub use error::{Error, Result};
pub use input::{parse, validate};
pub use strategy::Strategy;

use serde_json::Value;

/// validate `value` and sum 1..=n with the closed form
pub fn sum_to_n(value: &Value) -> Result<u128> {
    sum_with(value, Strategy::ClosedForm)
}

/// validate `value` and sum 1..=n with the given strategy
pub fn sum_with(value: &Value, strategy: Strategy) -> Result<u128> {
    let n = validate(value)?;
    Ok(strategy.sum(n))
}
