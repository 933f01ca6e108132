//! the three summation strategies
//!
//! results are u128: n(n+1)/2 for any u64 n stays below 2^127.

use core::fmt;
use core::str::FromStr;

/// how to compute 1 + 2 + ... + n
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// running total over 1..=n
    Iterative,
    /// gauss: n(n+1)/2
    ClosedForm,
    /// iterator fold over 1..=n
    Fold,
}

impl Strategy {
    pub const ALL: [Strategy; 3] = [Strategy::Iterative, Strategy::ClosedForm, Strategy::Fold];

    /// sum 1..=n. O(1) for closed form, O(n) otherwise.
    pub fn sum(self, n: u64) -> u128 {
        match self {
            Strategy::Iterative => iterative(n),
            Strategy::ClosedForm => closed_form(n),
            Strategy::Fold => fold(n),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Strategy::Iterative => "iterative",
            Strategy::ClosedForm => "closed-form",
            Strategy::Fold => "fold",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Strategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Strategy::ALL
            .into_iter()
            .find(|strategy| strategy.name() == s)
            .ok_or_else(|| format!("unknown strategy: {}", s))
    }
}

pub fn iterative(n: u64) -> u128 {
    let mut sum = 0u128;
    for i in 1..=n {
        sum += i as u128;
    }
    sum
}

pub fn closed_form(n: u64) -> u128 {
    let n = n as u128;
    n * (n + 1) / 2
}

pub fn fold(n: u64) -> u128 {
    (1..=n).fold(0u128, |acc, i| acc + i as u128)
}
