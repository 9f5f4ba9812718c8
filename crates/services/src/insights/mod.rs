mod client;
mod coordinator;
mod transport;

// Public API of the insight subsystem.
pub use crate::error::{InsightError, TransportError};
pub use client::{HttpInsightTransport, InsightServiceConfig};
pub use coordinator::{InsightCoordinator, Sleeper, TokioSleeper, INSIGHT_RETRY_DELAY, MAX_INSIGHT_RETRIES};
pub use transport::{InsightResponse, InsightTransport};
