//! swap form state
//!
//! four fields: what is sold, what is earned. fields are private so the
//! only way to change a state is through [`crate::reduce`].

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::prices::Currency;

pub const DEFAULT_SELL_CURRENCY: &str = "USD";
pub const DEFAULT_EARN_CURRENCY: &str = "ETH";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SwapState {
    pub(crate) sell_amount: f64,
    pub(crate) sell_currency: Currency,
    pub(crate) earn_amount: f64,
    pub(crate) earn_currency: Currency,
}

impl SwapState {
    pub fn sell_amount(&self) -> f64 {
        self.sell_amount
    }

    pub fn sell_currency(&self) -> &Currency {
        &self.sell_currency
    }

    pub fn earn_amount(&self) -> f64 {
        self.earn_amount
    }

    pub fn earn_currency(&self) -> &Currency {
        &self.earn_currency
    }

    /// whether the confirm action should be offered
    ///
    /// both sides must be nonzero; a zero side means there is nothing to
    /// sell or the earn side rounded away.
    pub fn can_confirm(&self) -> bool {
        self.sell_amount != 0.0 && self.earn_amount != 0.0
    }

    /// sell and earn sides exchanged, amounts untouched
    pub(crate) fn switched(&self) -> Self {
        Self {
            sell_amount: self.earn_amount,
            sell_currency: self.earn_currency.clone(),
            earn_amount: self.sell_amount,
            earn_currency: self.sell_currency.clone(),
        }
    }
}

impl Default for SwapState {
    /// `0 USD -> 0 ETH`
    fn default() -> Self {
        Self {
            sell_amount: 0.0,
            sell_currency: Currency::new(DEFAULT_SELL_CURRENCY),
            earn_amount: 0.0,
            earn_currency: Currency::new(DEFAULT_EARN_CURRENCY),
        }
    }
}

impl fmt::Display for SwapState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} -> {} {}",
            self.sell_amount, self.sell_currency, self.earn_amount, self.earn_currency
        )
    }
}
