//! Multi-leg itinerary type.
//!
//! A `FlightRoute` is a complete trip from origin to destination made of one
//! or more flights. Pricing happens after the route is found, so a priced
//! route is a new value built with [`FlightRoute::with_price`].

use std::sync::Arc;

use chrono::{DateTime, FixedOffset, TimeDelta};

use super::{DomainError, Flight, IataCode, Price};

/// An ordered chain of flights with an optional price.
///
/// # Invariants
///
/// - At least one flight
/// - Consecutive flights connect (destination of one = origin of next)
#[derive(Debug, Clone, PartialEq)]
pub struct FlightRoute {
    flights: Vec<Arc<Flight>>,
    price: Option<Price>,
}

impl FlightRoute {
    /// Constructs an unpriced route.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the list is empty or two consecutive flights don't
    /// share an airport.
    pub fn new(flights: Vec<Arc<Flight>>) -> Result<Self, DomainError> {
        if flights.is_empty() {
            return Err(DomainError::EmptyRoute);
        }

        for window in flights.windows(2) {
            let arrives_at = window[0].destination();
            let departs_from = window[1].origin();
            if arrives_at != departs_from {
                return Err(DomainError::Disconnected(*arrives_at, *departs_from));
            }
        }

        Ok(FlightRoute {
            flights,
            price: None,
        })
    }

    /// Returns this route with a price attached, replacing any previous one.
    pub fn with_price(self, price: Price) -> Self {
        FlightRoute {
            flights: self.flights,
            price: Some(price),
        }
    }

    /// Returns the flights in order.
    pub fn flights(&self) -> &[Arc<Flight>] {
        &self.flights
    }

    /// Returns the attached price, if any.
    pub fn price(&self) -> Option<&Price> {
        self.price.as_ref()
    }

    /// Returns the number of legs.
    pub fn leg_count(&self) -> usize {
        self.flights.len()
    }

    fn first(&self) -> &Flight {
        // Non-empty by construction
        &self.flights[0]
    }

    fn last(&self) -> &Flight {
        &self.flights[self.flights.len() - 1]
    }

    /// Returns the origin airport.
    pub fn origin(&self) -> &IataCode {
        self.first().origin()
    }

    /// Returns the destination airport.
    pub fn destination(&self) -> &IataCode {
        self.last().destination()
    }

    /// Returns the first leg's departure instant.
    pub fn departure_time(&self) -> DateTime<FixedOffset> {
        self.first().departure_time()
    }

    /// Returns the last leg's arrival instant.
    pub fn arrival_time(&self) -> DateTime<FixedOffset> {
        self.last().arrival_time()
    }

    /// Returns the door-to-door duration.
    pub fn total_duration(&self) -> TimeDelta {
        self.arrival_time() - self.departure_time()
    }

    /// Returns the gap between each arrival and the next departure.
    pub fn layovers(&self) -> Vec<TimeDelta> {
        self.flights
            .windows(2)
            .map(|pair| pair[1].departure_time() - pair[0].arrival_time())
            .collect()
    }

    /// Returns every airport touched, starting with the origin.
    pub fn airports(&self) -> impl Iterator<Item = &IataCode> {
        std::iter::once(self.origin()).chain(self.flights.iter().map(|f| f.destination()))
    }
}
