//! Provider backed by a literal list of dated flights.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, FixedOffset};
use tracing::trace;

use crate::dataset::Dataset;
use crate::domain::{Flight, FlightRoute, IataCode, Price};

use super::FlightProvider;
use super::error::ProviderError;
use super::geo::distance_between;
use super::pricing::Tariff;

/// Serves pre-built flights instead of synthesizing them.
///
/// Flights are indexed by origin and kept sorted by departure time.
#[derive(Debug, Clone)]
pub struct TimetableProvider {
    dataset: Dataset,
    tariff: Tariff,
    departures: HashMap<IataCode, Vec<Arc<Flight>>>,
}

impl TimetableProvider {
    /// Create a timetable from a fixed set of flights.
    ///
    /// The dataset supplies coordinates for flights that do not record
    /// their own distance. Flights may be given in any order.
    pub fn new(
        dataset: Dataset,
        tariff: Tariff,
        flights: impl IntoIterator<Item = Flight>,
    ) -> Result<Self, ProviderError> {
        tariff.validate()?;

        let mut departures: HashMap<IataCode, Vec<Arc<Flight>>> = HashMap::new();
        for flight in flights {
            departures.entry(*flight.origin()).or_default().push(Arc::new(flight));
        }
        for flights in departures.values_mut() {
            flights.sort_by_key(|f| f.departure_time());
        }

        Ok(Self {
            dataset,
            tariff,
            departures,
        })
    }

    /// Returns the total number of flights.
    pub fn flight_count(&self) -> usize {
        self.departures.values().map(Vec::len).sum()
    }

    fn leg_distance(&self, flight: &Flight) -> Result<f64, ProviderError> {
        if let Some(km) = flight.distance_km() {
            return Ok(km);
        }

        let origin = self
            .dataset
            .airport(flight.origin())
            .ok_or(ProviderError::UnknownAirport(*flight.origin()))?;
        let destination = self
            .dataset
            .airport(flight.destination())
            .ok_or(ProviderError::UnknownAirport(*flight.destination()))?;

        Ok(distance_between(origin, destination))
    }
}

impl FlightProvider for TimetableProvider {
    fn outbound_flights(
        &self,
        origin: &IataCode,
        not_before: DateTime<FixedOffset>,
    ) -> Result<Vec<Arc<Flight>>, ProviderError> {
        let Some(flights) = self.departures.get(origin) else {
            return Ok(Vec::new());
        };

        let first = flights.partition_point(|f| f.departure_time() < not_before);
        let outbound = flights[first..].to_vec();

        trace!(
            origin = %origin,
            not_before = %not_before,
            flights = outbound.len(),
            "Timetable outbound flights"
        );

        Ok(outbound)
    }

    fn price(&self, route: &FlightRoute) -> Result<Price, ProviderError> {
        self.tariff.price(route, |flight| self.leg_distance(flight))
    }
}
