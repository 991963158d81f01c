//! Trait abstraction for the relay client to enable mocking in tests

use super::{RelayError, Submission};
use async_trait::async_trait;

/// Outbound transport for form submissions
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RelayClientTrait: Send + Sync {
    /// Deliver one submission. Settles exactly once; no retry.
    async fn send(&self, submission: &Submission) -> Result<(), RelayError>;
}
