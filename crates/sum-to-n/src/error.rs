//! error types for sum-to-n

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// why an input was refused
///
/// each variant is a distinct kind so callers can match on the exact
/// violation instead of parsing the message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    #[error("n must be a number")]
    NotANumber,

    #[error("n must be an integer")]
    NotAnInteger,

    #[error("n must be non-negative")]
    Negative,

    #[error("n must be below 2^64")]
    TooLarge,
}
