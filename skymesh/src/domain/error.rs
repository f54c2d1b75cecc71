//! Domain error types.
//!
//! These errors represent validation failures and data inconsistencies
//! in the domain layer. They are distinct from provider and search errors.

use super::IataCode;

/// Domain-level errors for validation and data consistency.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DomainError {
    /// Latitude or longitude outside the valid range
    #[error("invalid coordinates: ({latitude}, {longitude})")]
    InvalidCoordinates { latitude: f64, longitude: f64 },

    /// UTC offset that no real timezone uses
    #[error("invalid UTC offset: {0} hours")]
    InvalidUtcOffset(f64),

    /// Flight whose arrival is not after its departure
    #[error("flight {flight_id} does not arrive after it departs")]
    NonPositiveDuration { flight_id: String },

    /// Flight that cannot exist (e.g., origin equals destination)
    #[error("invalid flight: {0}")]
    InvalidFlight(&'static str),

    /// Route has no flights
    #[error("route must have at least one flight")]
    EmptyRoute,

    /// Consecutive flights don't share an airport
    #[error("flights do not connect: arrives at {0}, next departs from {1}")]
    Disconnected(IataCode, IataCode),

    /// Price component that is negative or not a number
    #[error("invalid price: {0}")]
    InvalidPrice(&'static str),
}
