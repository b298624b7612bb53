use crate::core::kernel::transport::Transport;
use async_trait::async_trait;
use governor::{DefaultDirectRateLimiter, Quota, RateLimiter};
use nonzero_ext::nonzero;
use reqwest::{Request, Response};
use std::time::Duration;
use tracing::debug;

/// Enforces a minimum interval between the start of consecutive sends.
///
/// Backed by a GCRA limiter with a burst of one: a send is admitted only once
/// `interval` has passed since the previous admission. The admission check and
/// the timestamp update are a single atomic compare-and-swap, so concurrent
/// callers can never both pass on the same stale timestamp. Callers are served
/// in the order they win that update, not in submission order.
pub struct Pacer {
    limiter: DefaultDirectRateLimiter,
    interval: Duration,
}

impl Pacer {
    /// Returns `None` for a zero interval, which means pacing is disabled
    pub fn new(interval: Duration) -> Option<Self> {
        let quota = Quota::with_period(interval)?.allow_burst(nonzero!(1u32));
        Some(Self {
            limiter: RateLimiter::direct(quota),
            interval,
        })
    }

    pub const fn interval(&self) -> Duration {
        self.interval
    }

    /// Wait until the next send may start.
    ///
    /// Dropping the returned future abandons the wait without consuming a slot.
    pub async fn wait(&self) {
        if self.limiter.check().is_ok() {
            return;
        }
        debug!(
            interval_ms = self.interval.as_millis() as u64,
            "Pacing outbound request"
        );
        self.limiter.until_ready().await;
    }
}

impl std::fmt::Debug for Pacer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pacer")
            .field("interval", &self.interval)
            .finish_non_exhaustive()
    }
}

/// Transport wrapper that paces every request through a [`Pacer`]
pub struct PacedTransport<T> {
    inner: T,
    pacer: Pacer,
}

impl<T: Transport> PacedTransport<T> {
    pub const fn new(inner: T, pacer: Pacer) -> Self {
        Self { inner, pacer }
    }

    pub const fn interval(&self) -> Duration {
        self.pacer.interval()
    }
}

#[async_trait]
impl<T: Transport> Transport for PacedTransport<T> {
    async fn send(&self, request: Request) -> Result<Response, reqwest::Error> {
        self.pacer.wait().await;
        self.inner.send(request).await
    }
}
