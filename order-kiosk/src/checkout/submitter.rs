//! Order submission gateway
//!
//! The checkout stage treats submission as one opaque async call. A real
//! deployment plugs a payment/order gateway in behind [`OrderSubmitter`];
//! the kiosk ships [`SimulatedSubmitter`], which waits a fixed latency and
//! always confirms.

use super::error::SubmissionError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use shared::order::OrderDraft;
use std::time::Duration;

/// Gateway acknowledgement of a placed order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionAck {
    pub placed_at: DateTime<Utc>,
}

impl SubmissionAck {
    pub fn now() -> Self {
        Self {
            placed_at: Utc::now(),
        }
    }
}

#[async_trait]
pub trait OrderSubmitter: Send + Sync {
    async fn submit(&self, draft: &OrderDraft) -> Result<SubmissionAck, SubmissionError>;
}

/// Fixed-latency submitter that always succeeds
#[derive(Debug, Clone)]
pub struct SimulatedSubmitter {
    latency: Duration,
}

impl SimulatedSubmitter {
    pub fn new(latency: Duration) -> Self {
        Self { latency }
    }

    pub fn latency(&self) -> Duration {
        self.latency
    }
}

impl Default for SimulatedSubmitter {
    fn default() -> Self {
        Self::new(Duration::from_millis(2000))
    }
}

#[async_trait]
impl OrderSubmitter for SimulatedSubmitter {
    async fn submit(&self, draft: &OrderDraft) -> Result<SubmissionAck, SubmissionError> {
        tracing::debug!(
            order_id = %draft.order_id,
            latency_ms = self.latency.as_millis() as u64,
            "Simulating order submission"
        );
        tokio::time::sleep(self.latency).await;
        Ok(SubmissionAck::now())
    }
}
