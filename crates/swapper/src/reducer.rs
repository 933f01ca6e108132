//! swap state transitions
//!
//! editing one side always recomputes the other side from the price
//! ratio. switching sides is a plain swap: both sides were already
//! consistent, so nothing is reconverted.

use std::sync::Arc;

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::convert::convert;
use crate::prices::{Currency, PriceTable};
use crate::state::SwapState;
use crate::{Error, Result};

/// everything a user can do to the form
///
/// wire form is `{"type": "edit-sell-amount", "payload": 100}`. decoding
/// accepts any `type`: unknown ones become [`Action::Unrecognized`]
/// whatever their payload.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", content = "payload", rename_all = "kebab-case")]
pub enum Action {
    /// set sell amount, recompute earn amount
    EditSellAmount(f64),

    /// set earn amount, recompute sell amount
    EditEarnAmount(f64),

    /// set sell currency, recompute sell amount from the earn side
    EditSellCurrency(Currency),

    /// set earn currency, recompute earn amount from the sell side
    EditEarnCurrency(Currency),

    /// swap sell and earn sides verbatim
    SwitchCurrencies,

    /// back to `0 USD -> 0 ETH`
    Reset,

    /// any action type this build does not know. applying it returns the
    /// state unchanged.
    Unrecognized,
}

/// envelope of an action before its `type` is known
#[derive(Deserialize)]
struct RawAction {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    payload: Value,
}

impl RawAction {
    fn payload<T: de::DeserializeOwned>(self) -> std::result::Result<T, serde_json::Error> {
        serde_json::from_value(self.payload)
    }
}

impl<'de> Deserialize<'de> for Action {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = RawAction::deserialize(deserializer)?;
        let action = match raw.kind.as_str() {
            "edit-sell-amount" => raw.payload().map(Action::EditSellAmount),
            "edit-earn-amount" => raw.payload().map(Action::EditEarnAmount),
            "edit-sell-currency" => raw.payload().map(Action::EditSellCurrency),
            "edit-earn-currency" => raw.payload().map(Action::EditEarnCurrency),
            "switch-currencies" => Ok(Action::SwitchCurrencies),
            "reset" => Ok(Action::Reset),
            _ => Ok(Action::Unrecognized),
        };
        action.map_err(de::Error::custom)
    }
}

/// apply `action` to `state`
///
/// pure: the input state is never touched. on error no new state is
/// produced.
pub fn reduce(state: &SwapState, action: Action, table: &PriceTable) -> Result<SwapState> {
    let next = match action {
        Action::EditSellAmount(amount) => {
            check_amount(amount)?;
            SwapState {
                sell_amount: amount,
                earn_amount: convert(
                    table,
                    amount,
                    state.sell_currency.as_str(),
                    state.earn_currency.as_str(),
                )?,
                ..state.clone()
            }
        }
        Action::EditEarnAmount(amount) => {
            check_amount(amount)?;
            SwapState {
                sell_amount: convert(
                    table,
                    amount,
                    state.earn_currency.as_str(),
                    state.sell_currency.as_str(),
                )?,
                earn_amount: amount,
                ..state.clone()
            }
        }
        Action::EditSellCurrency(currency) => SwapState {
            sell_amount: convert(
                table,
                state.earn_amount,
                state.earn_currency.as_str(),
                currency.as_str(),
            )?,
            sell_currency: currency,
            ..state.clone()
        },
        Action::EditEarnCurrency(currency) => SwapState {
            earn_amount: convert(
                table,
                state.sell_amount,
                state.sell_currency.as_str(),
                currency.as_str(),
            )?,
            earn_currency: currency,
            ..state.clone()
        },
        Action::SwitchCurrencies => state.switched(),
        Action::Reset => SwapState::default(),
        Action::Unrecognized => state.clone(),
    };

    Ok(next)
}

fn check_amount(amount: f64) -> Result<()> {
    if amount.is_finite() && amount >= 0.0 {
        Ok(())
    } else {
        Err(Error::InvalidAmount(amount))
    }
}

/// owns a swap state and the table it is priced against
#[derive(Clone, Debug)]
pub struct Swapper {
    state: SwapState,
    table: Arc<PriceTable>,
}

impl Swapper {
    /// start from the default state
    ///
    /// fails if the table lacks one of the default currencies, since every
    /// currency the state references must be priced.
    pub fn new(table: Arc<PriceTable>) -> Result<Self> {
        let state = SwapState::default();
        for currency in [&state.sell_currency, &state.earn_currency] {
            if !table.contains(currency.as_str()) {
                return Err(Error::CurrencyNotFound(currency.clone()));
            }
        }
        Ok(Self { state, table })
    }

    pub fn state(&self) -> &SwapState {
        &self.state
    }

    pub fn table(&self) -> &Arc<PriceTable> {
        &self.table
    }

    /// apply an action; on error the current state is kept
    pub fn dispatch(&mut self, action: Action) -> Result<&SwapState> {
        debug!(?action, "dispatch");
        match reduce(&self.state, action, &self.table) {
            Ok(next) => Ok(self.commit(next)),
            Err(e) => {
                debug!(error = %e, "rejected action");
                Err(e)
            }
        }
    }

    pub fn edit_sell_amount(&mut self, amount: f64) -> Result<&SwapState> {
        self.dispatch(Action::EditSellAmount(amount))
    }

    pub fn edit_earn_amount(&mut self, amount: f64) -> Result<&SwapState> {
        self.dispatch(Action::EditEarnAmount(amount))
    }

    pub fn edit_sell_currency(&mut self, currency: impl Into<Currency>) -> Result<&SwapState> {
        self.dispatch(Action::EditSellCurrency(currency.into()))
    }

    pub fn edit_earn_currency(&mut self, currency: impl Into<Currency>) -> Result<&SwapState> {
        self.dispatch(Action::EditEarnCurrency(currency.into()))
    }

    /// infallible, so no `Result` unlike the edits
    pub fn switch_currencies(&mut self) -> &SwapState {
        debug!(action = ?Action::SwitchCurrencies, "dispatch");
        let next = self.state.switched();
        self.commit(next)
    }

    pub fn reset(&mut self) -> &SwapState {
        debug!(action = ?Action::Reset, "dispatch");
        self.commit(SwapState::default())
    }

    fn commit(&mut self, next: SwapState) -> &SwapState {
        debug!(state = %next, "transition");
        self.state = next;
        &self.state
    }
}
