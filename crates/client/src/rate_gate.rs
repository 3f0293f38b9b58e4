//! Request spacing for the Census Data API.
//!
//! The API allows a handful of requests per second per caller. Every outbound
//! request passes through one shared [`RateGate`], which keeps successive
//! requests at least `min_interval` apart.

use std::time::Duration;
use tokio::sync::Mutex;
use tokio::time::Instant;
use tracing::debug;

/// Single global gate spacing requests by a fixed minimum interval.
#[derive(Debug)]
pub struct RateGate {
    min_interval: Duration,
    last_request: Mutex<Option<Instant>>,
}

impl RateGate {
    pub fn new(min_interval: Duration) -> Self {
        Self {
            min_interval,
            last_request: Mutex::new(None),
        }
    }

    /// Wait until the minimum interval has passed since the previous
    /// acquisition, then record the current time.
    ///
    /// The lock is held across the sleep so check-then-stamp is atomic with
    /// respect to other callers.
    pub async fn acquire(&self) {
        let mut last = self.last_request.lock().await;

        if let Some(previous) = *last {
            let elapsed = previous.elapsed();
            if elapsed < self.min_interval {
                let wait = self.min_interval - elapsed;
                debug!(wait_ms = wait.as_millis() as u64, "Rate gate delaying request");
                tokio::time::sleep(wait).await;
            }
        }

        *last = Some(Instant::now());
    }
}
