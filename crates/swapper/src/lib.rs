//! # swapper
//!
//! core of a currency swap form: the user types a sell amount, picks two
//! currencies, and sees what they would earn at static prices. nothing
//! here renders anything.
//!
//! ## pieces
//!
//! - [`PriceTable`]: immutable currency -> price list, passed explicitly
//! - [`convert`]: amount conversion at the price ratio, rounded to cents
//! - [`reduce`] / [`Swapper`]: the form state machine
//! - [`confirm_swap`] / [`SwapDesk`]: async confirmation against an
//!   [`Exchange`], reported through a [`Notifier`]
//!
//! ## usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use swapper::{MockExchange, PriceTable, Swapper, SwapDesk, TracingNotifier};
//!
//! let mut swapper = Swapper::new(Arc::new(PriceTable::builtin()))?;
//! swapper.edit_sell_amount(100.0)?;
//! swapper.edit_earn_currency("ATOM")?;
//!
//! let desk = SwapDesk::new(MockExchange::from_entropy(), TracingNotifier::new());
//! let outcome = desk.confirm(swapper.state()).await?;
//! ```

pub mod confirm;
pub mod convert;
pub mod error;
pub mod exchange;
pub mod notify;
pub mod prices;
pub mod reducer;
pub mod state;

pub use confirm::{confirm_swap, SwapDesk, SwapOutcome};
pub use convert::{convert, round2};
pub use error::{Error, Result, SwapError, UNKNOWN_FAILURE};
pub use exchange::{Exchange, MockExchange};
pub use notify::{
    Notification, NotificationId, NotificationKind, Notifier, NotifierEvent, RecordingNotifier,
    TracingNotifier,
};
pub use prices::{Currency, PriceEntry, PriceTable};
pub use reducer::{reduce, Action, Swapper};
pub use state::SwapState;
