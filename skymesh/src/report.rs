//! Serializable route breakdowns for presentation.
//!
//! These types flatten a [`FlightRoute`] into plain strings and numbers so
//! any front end can render them without depending on the domain model.

use serde::Serialize;

use crate::domain::{Flight, FlightRoute, Place, Price, format_duration};

/// A route ready for display.
#[derive(Debug, Serialize)]
pub struct RouteSummary {
    /// Origin IATA code
    pub origin: String,

    /// Destination IATA code
    pub destination: String,

    /// Flights in order
    pub legs: Vec<LegSummary>,

    /// Waits between consecutive legs, e.g. "2h 15m"
    pub layovers: Vec<String>,

    /// Departure from the origin (RFC 3339, origin offset)
    pub departure_time: String,

    /// Arrival at the destination (RFC 3339, destination offset)
    pub arrival_time: String,

    /// Total trip time in minutes
    pub duration_mins: i64,

    /// Total trip time, e.g. "5h 40m"
    pub duration: String,

    /// Price breakdown, if the route has been priced
    pub price: Option<PriceSummary>,
}

/// One flight in a route.
#[derive(Debug, Serialize)]
pub struct LegSummary {
    /// Flight identifier
    pub flight_id: String,

    /// Airline code
    pub airline: String,

    /// Airline display name
    pub airline_name: String,

    /// Departure airport
    pub from: AirportSummary,

    /// Arrival airport
    pub to: AirportSummary,

    /// Block time in minutes
    pub duration_mins: i64,

    /// Great-circle distance, when known
    pub distance_km: Option<f64>,
}

/// An airport with the local time at it.
#[derive(Debug, Serialize)]
pub struct AirportSummary {
    pub code: String,
    pub name: String,
    pub city: String,
    pub country: String,

    /// Local time (RFC 3339)
    pub time: String,
}

/// Price breakdown.
#[derive(Debug, Serialize)]
pub struct PriceSummary {
    pub currency: String,
    pub amount: f64,
    pub base: f64,
    pub distance: f64,
    pub layover: f64,

    /// Human-readable form, e.g. "USD 134.65 (Base: 50.00, ...)"
    pub display: String,
}

impl RouteSummary {
    /// Create from a domain route.
    pub fn from_route(route: &FlightRoute) -> Self {
        Self {
            origin: route.origin().to_string(),
            destination: route.destination().to_string(),
            legs: route.flights().iter().map(|f| LegSummary::from_flight(f)).collect(),
            layovers: route.layovers().into_iter().map(format_duration).collect(),
            departure_time: route.departure_time().to_rfc3339(),
            arrival_time: route.arrival_time().to_rfc3339(),
            duration_mins: route.total_duration().num_minutes(),
            duration: format_duration(route.total_duration()),
            price: route.price().map(PriceSummary::from_price),
        }
    }
}

impl LegSummary {
    /// Create from a domain flight.
    pub fn from_flight(flight: &Flight) -> Self {
        Self {
            flight_id: flight.id().to_string(),
            airline: flight.airline().to_string(),
            airline_name: flight.airline_name().to_string(),
            from: AirportSummary::new(
                flight.origin().as_str(),
                flight.origin_place(),
                flight.departure_time().to_rfc3339(),
            ),
            to: AirportSummary::new(
                flight.destination().as_str(),
                flight.destination_place(),
                flight.arrival_time().to_rfc3339(),
            ),
            duration_mins: flight.duration().num_minutes(),
            distance_km: flight.distance_km(),
        }
    }
}

impl AirportSummary {
    fn new(code: &str, place: &Place, time: String) -> Self {
        Self {
            code: code.to_string(),
            name: place.name.clone(),
            city: place.city.clone(),
            country: place.country.clone(),
            time,
        }
    }
}

impl PriceSummary {
    /// Create from a domain price.
    pub fn from_price(price: &Price) -> Self {
        Self {
            currency: price.currency().to_string(),
            amount: price.amount(),
            base: price.base(),
            distance: price.distance(),
            layover: price.layover(),
            display: price.to_string(),
        }
    }
}
