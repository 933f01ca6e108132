//! exchange backends
//!
//! an [`Exchange`] carries out a confirmed swap. the only implementation
//! here is [`MockExchange`]: it waits a fixed delay and then succeeds or
//! fails at random. a real backend would replace it with an rpc call.

use std::future::Future;
use std::sync::Mutex;
use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::state::SwapState;
use crate::SwapError;

/// message carried by every mock failure
pub const MOCK_FAILURE: &str = "Just a mock error. Don't panic!";

/// simulated network latency
pub const DEFAULT_DELAY: Duration = Duration::from_secs(2);

pub const DEFAULT_SUCCESS_PROBABILITY: f64 = 0.8;

/// backend that settles a swap
pub trait Exchange: Send + Sync {
    /// settle `state`. resolves exactly once, with no retries.
    fn execute(&self, state: &SwapState) -> impl Future<Output = Result<(), SwapError>> + Send;
}

/// simulated exchange
///
/// sleeps for `delay`, then succeeds with probability
/// `success_probability`. randomness is injected so tests can seed it.
#[derive(Debug)]
pub struct MockExchange<R> {
    rng: Mutex<R>,
    delay: Duration,
    success_probability: f64,
}

impl<R: RngCore + Send> MockExchange<R> {
    pub fn new(rng: R) -> Self {
        Self {
            rng: Mutex::new(rng),
            delay: DEFAULT_DELAY,
            success_probability: DEFAULT_SUCCESS_PROBABILITY,
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// clamped to [0, 1]; nan counts as 0
    pub fn with_success_probability(mut self, probability: f64) -> Self {
        self.success_probability = if probability.is_nan() {
            0.0
        } else {
            probability.clamp(0.0, 1.0)
        };
        self
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn success_probability(&self) -> f64 {
        self.success_probability
    }

    fn roll(&self) -> bool {
        let mut rng = self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        rng.gen_bool(self.success_probability)
    }
}

impl MockExchange<ChaCha8Rng> {
    /// deterministic mock
    pub fn seeded(seed: u64) -> Self {
        Self::new(ChaCha8Rng::seed_from_u64(seed))
    }
}

impl MockExchange<StdRng> {
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }
}

impl<R: RngCore + Send> Exchange for MockExchange<R> {
    fn execute(&self, _state: &SwapState) -> impl Future<Output = Result<(), SwapError>> + Send {
        async move {
            tokio::time::sleep(self.delay).await;
            if self.roll() {
                Ok(())
            } else {
                Err(SwapError::Failed(Some(MOCK_FAILURE.to_string())))
            }
        }
    }
}
