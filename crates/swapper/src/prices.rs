//! price table
//!
//! ordered list of `{currency, price}` entries. prices are reference unit
//! prices (usd-ish); only their ratios matter for conversion.
//!
//! the table is immutable once built and passed explicitly to whatever
//! needs it. there is no global lookup.

use std::collections::HashSet;
use std::fmt;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// currency code, e.g. `USD`, `ETH`
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Currency(String);

impl Currency {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Currency {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Currency {
    fn from(code: &str) -> Self {
        Self::new(code)
    }
}

impl From<String> for Currency {
    fn from(code: String) -> Self {
        Self(code)
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// one row of the table
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PriceEntry {
    pub currency: Currency,
    pub price: f64,
}

impl PriceEntry {
    pub fn new(currency: impl Into<Currency>, price: f64) -> Self {
        Self {
            currency: currency.into(),
            price,
        }
    }
}

/// built-in snapshot used when no table file is given
const BUILTIN_PRICES: &[(&str, f64)] = &[
    ("BLUR", 0.20811525423728813),
    ("bNEO", 7.1282679),
    ("BUSD", 0.999183113),
    ("USD", 1.0),
    ("ETH", 1645.9337373737374),
    ("GMX", 36.345114372881355),
    ("STEVMOS", 0.07276706779661017),
    ("LUNA", 0.40955638983050846),
    ("RATOM", 10.250412637362637),
    ("STRD", 0.7386553389830508),
    ("EVMOS", 0.06246181355932203),
    ("IBCX", 41.26811355932203),
    ("IRIS", 0.0177095593220339),
    ("ampLUNA", 0.49548589830508477),
    ("KUJI", 0.675),
    ("STOSMO", 0.431318),
    ("USDC", 1.0),
    ("axlUSDC", 0.989832),
    ("ATOM", 7.186657333333334),
    ("STATOM", 8.512162050847458),
    ("OSMO", 0.3772974333333333),
    ("rSWTH", 0.00408771),
    ("STLUNA", 0.44232210169491526),
    ("LSI", 67.69661525423729),
    ("OKB", 42.97562059322034),
    ("OKT", 13.561577966101694),
    ("SWTH", 0.004039850455012084),
    ("USC", 0.994),
    ("WBTC", 26002.82202020202),
    ("wstETH", 1872.2579742372882),
    ("YieldUSD", 1.0290847966101695),
    ("ZIL", 0.01651813559322034),
];

/// read-only currency -> price table, insertion order preserved
#[derive(Clone, Debug, PartialEq)]
pub struct PriceTable {
    entries: Vec<PriceEntry>,
}

impl PriceTable {
    /// build a table, checking every entry
    ///
    /// prices must be finite and > 0, codes non-empty and unique.
    pub fn new(entries: Vec<PriceEntry>) -> Result<Self> {
        if entries.is_empty() {
            return Err(Error::EmptyTable);
        }

        let mut seen = HashSet::with_capacity(entries.len());
        for entry in &entries {
            if entry.currency.as_str().is_empty() {
                return Err(Error::EmptyCurrency);
            }
            if !entry.price.is_finite() || entry.price <= 0.0 {
                return Err(Error::InvalidPrice {
                    currency: entry.currency.clone(),
                    price: entry.price,
                });
            }
            if !seen.insert(entry.currency.as_str()) {
                return Err(Error::DuplicateCurrency(entry.currency.clone()));
            }
        }

        Ok(Self { entries })
    }

    /// the built-in snapshot
    pub fn builtin() -> Self {
        Self {
            entries: BUILTIN_PRICES
                .iter()
                .map(|&(currency, price)| PriceEntry::new(currency, price))
                .collect(),
        }
    }

    /// parse a json array of `{"currency": "...", "price": ...}`
    pub fn from_json(json: &str) -> Result<Self> {
        let entries: Vec<PriceEntry> = serde_json::from_str(json)?;
        Self::new(entries)
    }

    /// load a json table from disk
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.entries)?)
    }

    /// price of `currency`, or `CurrencyNotFound`
    pub fn price(&self, currency: &str) -> Result<f64> {
        self.entries
            .iter()
            .find(|entry| entry.currency.as_str() == currency)
            .map(|entry| entry.price)
            .ok_or_else(|| Error::CurrencyNotFound(Currency::new(currency)))
    }

    pub fn contains(&self, currency: &str) -> bool {
        self.entries.iter().any(|entry| entry.currency.as_str() == currency)
    }

    /// selectable currencies, in table order
    pub fn currencies(&self) -> impl Iterator<Item = &Currency> + '_ {
        self.entries.iter().map(|entry| &entry.currency)
    }

    pub fn entries(&self) -> &[PriceEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for PriceTable {
    fn default() -> Self {
        Self::builtin()
    }
}
