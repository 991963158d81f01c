//! Form relay module for outbound submissions

mod client;
mod submission;
mod traits;

pub use client::{RelayClient, DEFAULT_ENDPOINT};
pub use submission::Submission;
pub use traits::RelayClientTrait;

#[cfg(test)]
pub use traits::MockRelayClientTrait;

use thiserror::Error;

/// Failure to deliver a submission to the relay
#[derive(Debug, Error)]
pub enum RelayError {
    #[error("relay request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("relay answered with status {0}")]
    Status(reqwest::StatusCode),
}
