//! Provider error types.

use crate::domain::{DomainError, IataCode};

/// Errors from synthesizing or pricing flights.
///
/// An empty set of outbound flights is not an error.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ProviderError {
    /// A flight or template references an airport with no loaded metadata
    #[error("unknown airport {0}: dataset is inconsistent")]
    UnknownAirport(IataCode),

    /// Configuration that could only produce invalid flights or prices
    #[error("invalid provider configuration: {0}")]
    InvalidConfig(String),

    /// A synthesized entity failed validation
    #[error(transparent)]
    Domain(#[from] DomainError),
}
