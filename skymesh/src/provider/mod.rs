//! Flight data providers.
//!
//! The search engine only needs two capabilities from a data source: the
//! flights leaving an airport after a given instant, and the price of a
//! completed itinerary. [`FlightProvider`] captures both so the engine can
//! run over synthesized schedules, literal timetables or test fixtures.

mod config;
mod error;
mod geo;
mod openflights;
mod pricing;
mod schedule;
mod timetable;

use std::sync::Arc;

use chrono::{DateTime, FixedOffset};

use crate::domain::{Flight, FlightRoute, IataCode, Price};

pub use config::ProviderConfig;
pub use error::ProviderError;
pub use geo::{EARTH_RADIUS_KM, distance_between, haversine_km};
pub use openflights::OpenFlightsProvider;
pub use pricing::Tariff;
pub use schedule::{block_time, next_departure};
pub use timetable::TimetableProvider;

/// Source of flights and prices for route search.
pub trait FlightProvider {
    /// Get flights departing `origin` at or after `not_before`.
    ///
    /// An airport with no outbound service yields an empty list.
    fn outbound_flights(
        &self,
        origin: &IataCode,
        not_before: DateTime<FixedOffset>,
    ) -> Result<Vec<Arc<Flight>>, ProviderError>;

    /// Price a completed route without modifying it.
    fn price(&self, route: &FlightRoute) -> Result<Price, ProviderError>;
}
