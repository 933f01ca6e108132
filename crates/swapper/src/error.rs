//! error types for swapper

use thiserror::Error;

use crate::prices::Currency;

pub type Result<T> = std::result::Result<T, Error>;

/// shown when a swap failure carries no message of its own
pub const UNKNOWN_FAILURE: &str = "Sorry, an unknown error occurred. Please try again.";

#[derive(Debug, Error)]
pub enum Error {
    #[error("currency not found: {0}")]
    CurrencyNotFound(Currency),

    // === price table errors ===
    #[error("invalid price for {currency}: {price} (must be finite and positive)")]
    InvalidPrice { currency: Currency, price: f64 },

    #[error("empty currency code in price table")]
    EmptyCurrency,

    #[error("duplicate currency in price table: {0}")]
    DuplicateCurrency(Currency),

    #[error("price table is empty")]
    EmptyTable,

    #[error("malformed price table: {0}")]
    PriceTable(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    // === reducer errors ===
    #[error("invalid amount: {0} (must be finite and non-negative)")]
    InvalidAmount(f64),

    // === swap errors ===
    #[error(transparent)]
    Swap(#[from] SwapError),
}

/// failure of a swap confirmation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SwapError {
    /// the exchange refused or failed the swap, optionally with a reason
    #[error("swap failed: {}", .0.as_deref().unwrap_or("no reason given"))]
    Failed(Option<String>),

    /// one side of the pair is zero
    #[error("nothing to swap: both amounts must be nonzero")]
    NothingToSwap,
}

impl SwapError {
    /// the message to show a user for this failure
    pub fn user_message(&self) -> String {
        match self {
            SwapError::Failed(Some(message)) if !message.is_empty() => message.clone(),
            SwapError::Failed(_) => UNKNOWN_FAILURE.to_string(),
            SwapError::NothingToSwap => self.to_string(),
        }
    }
}
