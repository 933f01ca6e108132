//! currency conversion

use crate::prices::PriceTable;
use crate::{Error, Result};

/// round to two decimal places
///
/// `f64::round` goes half away from zero, which is half-up for the
/// non-negative amounts the form deals in.
pub fn round2(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

/// convert `amount` of `from` into `to` at the table's price ratio
///
/// fails with `CurrencyNotFound` if either side is missing. never falls
/// back to a default price. a result that overflows to infinity is
/// `InvalidAmount`.
pub fn convert(table: &PriceTable, amount: f64, from: &str, to: &str) -> Result<f64> {
    let from_price = table.price(from)?;
    let to_price = table.price(to)?;
    let converted = round2(amount * from_price / to_price);
    if !converted.is_finite() {
        return Err(Error::InvalidAmount(converted));
    }
    Ok(converted)
}
