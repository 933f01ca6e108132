//! swap confirmation
//!
//! ```text
//!   notify(pending) ──► exchange.execute ──┬─ ok ──► notify(success)
//!        │                                 └─ err ─► notify(error)
//!        └────────────── dismiss(pending) ◄────────────────┘
//! ```
//!
//! the pending notification is dismissed exactly once whichever way the
//! swap settles. confirmation never changes the swap state.

use tokio::sync::Mutex;
use tracing::{info, warn};

use crate::exchange::Exchange;
use crate::notify::{NotificationKind, Notifier, PendingNotification};
use crate::state::SwapState;
use crate::{Result, SwapError};

pub const PENDING_TITLE: &str = "Transaction in progress";
pub const PENDING_DESCRIPTION: &str = "We are processing your transaction...";
pub const SUCCESS_TITLE: &str = "Transaction completed";
pub const FAILURE_TITLE: &str = "Transaction failed";

/// how a confirmation settled
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SwapOutcome {
    Completed,
    /// `message` is what the user was shown
    Failed { message: String },
}

impl SwapOutcome {
    pub fn is_completed(&self) -> bool {
        matches!(self, SwapOutcome::Completed)
    }
}

/// text of the success notification
pub fn completed_description(state: &SwapState) -> String {
    format!(
        "You have sold {} {} for {} {}.",
        state.sell_amount(),
        state.sell_currency(),
        state.earn_amount(),
        state.earn_currency()
    )
}

/// confirm one swap against `exchange`, reporting through `notifier`
///
/// refuses states with a zero side before notifying anything. exchange
/// failures are not errors here: they are reported to the user and
/// returned as [`SwapOutcome::Failed`].
pub async fn confirm_swap<E, N>(
    state: &SwapState,
    exchange: &E,
    notifier: &N,
) -> Result<SwapOutcome>
where
    E: Exchange,
    N: Notifier + ?Sized,
{
    if !state.can_confirm() {
        return Err(SwapError::NothingToSwap.into());
    }

    let _pending = PendingNotification::show(notifier, PENDING_TITLE, PENDING_DESCRIPTION);
    info!(swap = %state, "confirming swap");

    let outcome = match exchange.execute(state).await {
        Ok(()) => {
            info!(swap = %state, "swap completed");
            let description = completed_description(state);
            notifier.notify(NotificationKind::Success, SUCCESS_TITLE, &description);
            SwapOutcome::Completed
        }
        Err(e) => {
            warn!(swap = %state, error = %e, "swap failed");
            let message = e.user_message();
            notifier.notify(NotificationKind::Error, FAILURE_TITLE, &message);
            SwapOutcome::Failed { message }
        }
    };

    Ok(outcome)
}

/// serializes confirmations against one exchange
///
/// a confirmation started while another is in flight waits for it to
/// settle; its pending notification only appears once it gets its turn.
pub struct SwapDesk<E, N> {
    exchange: Mutex<E>,
    notifier: N,
}

impl<E: Exchange, N: Notifier> SwapDesk<E, N> {
    pub fn new(exchange: E, notifier: N) -> Self {
        Self {
            exchange: Mutex::new(exchange),
            notifier,
        }
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    /// confirm `state`, waiting for any confirmation already in flight
    pub async fn confirm(&self, state: &SwapState) -> Result<SwapOutcome> {
        if !state.can_confirm() {
            return Err(SwapError::NothingToSwap.into());
        }
        let exchange = self.exchange.lock().await;
        confirm_swap(state, &*exchange, &self.notifier).await
    }

    pub fn into_parts(self) -> (E, N) {
        (self.exchange.into_inner(), self.notifier)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exchange::{MockExchange, MOCK_FAILURE};
    use crate::notify::RecordingNotifier;
    use crate::prices::{PriceEntry, PriceTable};
    use crate::reducer::{reduce, Action};
    use crate::{Error, UNKNOWN_FAILURE};

    fn hundred_usd() -> SwapState {
        let table = PriceTable::new(vec![
            PriceEntry::new("USD", 1.0),
            PriceEntry::new("ETH", 2000.0),
        ])
        .unwrap();
        reduce(&SwapState::default(), Action::EditSellAmount(100.0), &table).unwrap()
    }

    /// exchange that always fails without a reason
    struct Silent;

    impl Exchange for Silent {
        async fn execute(&self, _state: &SwapState) -> std::result::Result<(), SwapError> {
            Err(SwapError::Failed(None))
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_success_path() {
        let notifier = RecordingNotifier::new();
        let exchange = MockExchange::seeded(0).with_success_probability(1.0);

        let outcome = confirm_swap(&hundred_usd(), &exchange, &notifier).await.unwrap();
        assert_eq!(outcome, SwapOutcome::Completed);

        let shown = notifier.notifications();
        assert_eq!(shown.len(), 2);
        assert_eq!(shown[0].kind, NotificationKind::Pending);
        assert_eq!(shown[0].title, PENDING_TITLE);
        assert_eq!(shown[1].kind, NotificationKind::Success);
        assert_eq!(shown[1].title, SUCCESS_TITLE);
        assert_eq!(shown[1].description, "You have sold 100 USD for 0.05 ETH.");
        assert_eq!(notifier.dismiss_count(shown[0].id), 1);
        assert_eq!(notifier.dismiss_count(shown[1].id), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_failure_path() {
        let notifier = RecordingNotifier::new();
        let exchange = MockExchange::seeded(0).with_success_probability(0.0);

        let outcome = confirm_swap(&hundred_usd(), &exchange, &notifier).await.unwrap();
        assert_eq!(
            outcome,
            SwapOutcome::Failed {
                message: MOCK_FAILURE.to_string()
            }
        );

        let shown = notifier.notifications();
        assert_eq!(shown[1].kind, NotificationKind::Error);
        assert_eq!(shown[1].title, FAILURE_TITLE);
        assert_eq!(shown[1].description, MOCK_FAILURE);
        assert_eq!(notifier.dismiss_count(shown[0].id), 1);
    }

    #[tokio::test]
    async fn test_failure_without_message_uses_fallback() {
        let notifier = RecordingNotifier::new();
        let outcome = confirm_swap(&hundred_usd(), &Silent, &notifier).await.unwrap();
        assert_eq!(
            outcome,
            SwapOutcome::Failed {
                message: UNKNOWN_FAILURE.to_string()
            }
        );
        assert_eq!(notifier.notifications()[1].description, UNKNOWN_FAILURE);
    }

    #[tokio::test(start_paused = true)]
    async fn test_zero_side_is_refused_silently() {
        let notifier = RecordingNotifier::new();
        let exchange = MockExchange::seeded(0);
        let result = confirm_swap(&SwapState::default(), &exchange, &notifier).await;
        assert!(matches!(result, Err(Error::Swap(SwapError::NothingToSwap))));
        assert!(notifier.events().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_state_is_not_touched() {
        let notifier = RecordingNotifier::new();
        let exchange = MockExchange::seeded(3);
        let state = hundred_usd();
        let before = state.clone();
        let _ = confirm_swap(&state, &exchange, &notifier).await.unwrap();
        assert_eq!(state, before);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancelled_confirmation_still_dismisses() {
        let notifier = RecordingNotifier::new();
        let exchange = MockExchange::seeded(0);
        let state = hundred_usd();

        let result = tokio::time::timeout(
            std::time::Duration::from_millis(500),
            confirm_swap(&state, &exchange, &notifier),
        )
        .await;
        assert!(result.is_err());

        let shown = notifier.notifications();
        assert_eq!(shown.len(), 1);
        assert_eq!(notifier.dismiss_count(shown[0].id), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_desk_serializes_confirmations() {
        let desk = SwapDesk::new(
            MockExchange::seeded(0).with_success_probability(1.0),
            RecordingNotifier::new(),
        );
        let state = hundred_usd();

        let (a, b) = tokio::join!(desk.confirm(&state), desk.confirm(&state));
        assert!(a.unwrap().is_completed());
        assert!(b.unwrap().is_completed());

        // first run fully settles (pending, success, dismiss) before the second starts
        let events = desk.notifier().events();
        assert_eq!(events.len(), 6);
        let kinds: Vec<Option<NotificationKind>> = events
            .iter()
            .map(|event| match event {
                crate::notify::NotifierEvent::Shown(n) => Some(n.kind),
                crate::notify::NotifierEvent::Dismissed(_) => None,
            })
            .collect();
        assert_eq!(
            kinds,
            vec![
                Some(NotificationKind::Pending),
                Some(NotificationKind::Success),
                None,
                Some(NotificationKind::Pending),
                Some(NotificationKind::Success),
                None,
            ]
        );
    }
}
